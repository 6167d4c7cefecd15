//! Provenance tree rebuilt from a depth-tagged pre-order stream.
//!
//! Nodes live in an arena and refer to their parent by [`NodeId`]. Only a
//! single cursor, the most recently added node, is used to decide where
//! the next node goes.

use crate::error::Error;

/// Depth of the root node. Every event depth is at least 0.
pub const ROOT_DEPTH: isize = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub content: String,
    pub depth: isize,
    /// Index among the parent's children at insertion time. Never renumbered.
    pub width: usize,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
}

#[derive(Debug, Clone)]
pub struct ImportTree {
    nodes: Vec<TreeNode>,
    cursor: NodeId,
}

impl ImportTree {
    pub const ROOT: NodeId = NodeId(0);

    pub fn new(root: &str) -> Self {
        Self {
            nodes: vec![TreeNode {
                content: root.to_owned(),
                depth: ROOT_DEPTH,
                width: 0,
                children: Vec::new(),
                parent: None,
            }],
            cursor: Self::ROOT,
        }
    }

    /// Add a node relative to the most recently added one.
    ///
    /// - Same depth as the cursor: sibling of the cursor.
    /// - Deeper than the cursor: child of the cursor. A jump of several
    ///   levels is collapsed into a single child step.
    /// - Shallower: walk up to the nearest ancestor at or above `depth`,
    ///   then apply the rules again.
    pub fn add_node_incrementally(&mut self, text: &str, depth: isize) -> Result<NodeId, Error> {
        while depth < self.node(self.cursor).depth {
            self.cursor = self
                .node(self.cursor)
                .parent
                .ok_or(Error::AboveRoot(depth))?;
        }

        let cursor = self.node(self.cursor);
        let parent = if depth == cursor.depth {
            cursor.parent.ok_or(Error::SiblingOfRoot)?
        } else {
            self.cursor
        };

        let id = NodeId(self.nodes.len());
        let parent_node = self.node(parent);
        let node = TreeNode {
            content: text.to_owned(),
            depth: parent_node.depth + 1,
            width: parent_node.children.len(),
            children: Vec::new(),
            parent: Some(parent),
        };
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        self.cursor = id;
        Ok(id)
    }

    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    pub fn root(&self) -> &TreeNode {
        self.node(Self::ROOT)
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Whether nothing but the root has been added.
    pub fn has_no_trace(&self) -> bool {
        self.root().children.is_empty()
    }

    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.node(id).children.is_empty()
    }

    /// Whether the node is currently the last of its siblings. The root
    /// counts as a last child.
    pub fn is_last_child(&self, id: NodeId) -> bool {
        let node = self.node(id);
        node.parent
            .is_none_or(|p| node.width + 1 == self.node(p).children.len())
    }

    /// Structural view used to compare trees: `(content, depth)` in
    /// pre-order.
    pub fn preorder(&self) -> Vec<(&str, isize)> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![Self::ROOT];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            out.push((node.content.as_str(), node.depth));
            stack.extend(node.children.iter().rev());
        }
        out
    }
}
