//! Box-drawing rendering of an [`ImportTree`].
//!
//! ```text
//! ┬─ Error: Restricted module `lodash' found in bundle `test.js'
//! ├──┬─ from: ./import1.js
//! │  ╰──── from: ./index.js
//! ╰──┬─ from: ./import2.1.js
//!    ╰──── from: ./import2.js
//! ```

use crate::logger::Sink;
use crate::tree::{ImportTree, NodeId};

enum Step {
    Enter(NodeId),
    Leave,
}

/// Format one node. `rails[i]` tells whether the ancestor at depth `i` is
/// the last of its siblings, which decides between a blank and a `│`.
fn format_line(tree: &ImportTree, id: NodeId, rails: &[bool], indent: usize) -> String {
    let node = tree.node(id);
    let mut line = String::new();
    for &ancestor_is_last in rails {
        line.push(if ancestor_is_last { ' ' } else { '│' });
        line.push_str(&" ".repeat(indent));
    }
    if node.parent.is_some() {
        line.push(if tree.is_last_child(id) { '╰' } else { '├' });
        line.push_str(&"─".repeat(indent));
    }
    line.push(if tree.is_leaf(id) { '─' } else { '┬' });
    line.push('─');
    line.push(' ');
    line.push_str(&node.content);
    line
}

/// Emit one line per node in pre-order through `sink`.
pub fn render(tree: &ImportTree, indent: usize, sink: &mut dyn Sink) {
    let mut rails: Vec<bool> = Vec::new();
    let mut stack = vec![Step::Enter(ImportTree::ROOT)];

    while let Some(step) = stack.pop() {
        let id = match step {
            Step::Enter(id) => id,
            Step::Leave => {
                rails.pop();
                continue;
            }
        };
        sink.info(&format_line(tree, id, &rails, indent));

        // root sits above depth 0 and owns no rail
        if tree.node(id).parent.is_some() {
            rails.push(tree.is_last_child(id));
            stack.push(Step::Leave);
        }
        stack.extend(tree.node(id).children.iter().rev().map(|&c| Step::Enter(c)));
    }
}

/// Render into a vector of lines.
pub fn render_lines(tree: &ImportTree, indent: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    render(tree, indent, &mut lines);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(root: &str, events: &[(&str, isize)]) -> ImportTree {
        let mut tree = ImportTree::new(root);
        for &(text, depth) in events {
            tree.add_node_incrementally(text, depth).unwrap();
        }
        tree
    }

    #[test]
    fn lone_root_is_a_leaf() {
        let tree = ImportTree::new("header");
        assert_eq!(render_lines(&tree, 2), vec!["── header"]);
    }

    #[test]
    fn single_chain() {
        let tree = build("header", &[("from: ./index.js", 0)]);
        assert_eq!(
            render_lines(&tree, 2),
            vec!["┬─ header", "╰──── from: ./index.js"]
        );
    }

    #[test]
    fn two_branches_draw_rail_only_under_first() {
        let tree = build(
            "header",
            &[("a", 0), ("index", 1), ("b", 0), ("main", 1)],
        );
        assert_eq!(
            render_lines(&tree, 2),
            vec![
                "┬─ header",
                "├──┬─ a",
                "│  ╰──── index",
                "╰──┬─ b",
                "   ╰──── main",
            ]
        );
    }

    #[test]
    fn middle_sibling_uses_tee() {
        let tree = build("h", &[("a", 0), ("b", 0), ("c", 0)]);
        assert_eq!(
            render_lines(&tree, 1),
            vec!["┬─ h", "├─── a", "├─── b", "╰─── c"]
        );
    }

    #[test]
    fn rails_follow_each_ancestor_level() {
        let tree = build("h", &[("a", 0), ("a1", 1), ("a11", 2), ("a2", 1), ("b", 0)]);
        assert_eq!(
            render_lines(&tree, 2),
            vec![
                "┬─ h",
                "├──┬─ a",
                "│  ├──┬─ a1",
                "│  │  ╰──── a11",
                "│  ╰──── a2",
                "╰──── b",
            ]
        );
    }

    #[test]
    fn zero_indent() {
        let tree = build("h", &[("a", 0), ("a1", 1), ("b", 0)]);
        assert_eq!(
            render_lines(&tree, 0),
            vec!["┬─ h", "├┬─ a", "│╰── a1", "╰── b"]
        );
    }

    #[test]
    fn rendering_is_repeatable() {
        let tree = build("h", &[("a", 0), ("b", 1), ("c", 0)]);
        assert_eq!(render_lines(&tree, 3), render_lines(&tree, 3));
    }
}
