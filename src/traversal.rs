//! Bounded walk over a module's reasons.
//!
//! A depth-first walk is what produces correctly nested output, but on its
//! own it would print a module once per path reaching it, including long
//! redundant chains found before the direct one. So the walk runs in two
//! phases: a breadth-first pre-pass records the shallowest depth at which
//! each identity appears, and the depth-first pass then skips any
//! occurrence deeper than that record, as well as anything it has already
//! emitted.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::graph::{ModuleId, Reason, ReasonGraph};
use crate::logger::Sink;

/// Hop and sibling limits for both phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub max_depth: usize,
    pub max_width: usize,
}

/// Where an identity was first seen during the breadth-first pre-pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitRecord {
    pub depth: usize,
    pub width: usize,
}

/// One accepted depth-first visit, in pre-order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalEvent<'g> {
    pub label: &'g str,
    pub module: ModuleId,
    pub depth: usize,
    /// Value of the sibling counter when the event was emitted.
    pub width: usize,
}

struct Frame {
    module: ModuleId,
    depth: usize,
    next: usize,
    width: usize,
}

pub struct ReasonsTraversal<'g> {
    graph: &'g ReasonGraph,
    root: ModuleId,
    bounds: Bounds,
}

impl<'g> ReasonsTraversal<'g> {
    pub fn new(graph: &'g ReasonGraph, root: ModuleId, bounds: Bounds) -> Self {
        Self {
            graph,
            root,
            bounds,
        }
    }

    /// Breadth-first pre-pass. Every level but the first is capped at
    /// `max_width` reasons per module; excess reasons are dropped.
    ///
    /// A module's reasons are enqueued at most once: a later expansion of
    /// the same module could only reach identities already recorded at a
    /// shallower or equal depth.
    pub fn breadth_first(&self) -> HashMap<&'g str, VisitRecord> {
        let mut records: HashMap<&'g str, VisitRecord> = HashMap::new();
        let mut expanded: HashSet<ModuleId> = HashSet::new();
        let mut queue: VecDeque<(Reason, VisitRecord)> = self
            .graph
            .reasons(self.root)
            .iter()
            .enumerate()
            .map(|(width, &reason)| (reason, VisitRecord { depth: 0, width }))
            .collect();

        while let Some((reason, at)) = queue.pop_front() {
            if at.depth >= self.bounds.max_depth {
                continue;
            }
            if let Some(id) = reason.module.filter(|&id| expanded.insert(id)) {
                let next = self
                    .graph
                    .reasons(id)
                    .iter()
                    .take(self.bounds.max_width)
                    .enumerate()
                    .map(|(width, &r)| {
                        let depth = at.depth + 1;
                        (r, VisitRecord { depth, width })
                    });
                queue.extend(next);
            }
            if let Some(target) = self.graph.named_target(reason) {
                records.entry(target.identity.as_str()).or_insert(at);
            }
        }

        records
    }

    /// Run both phases, calling `emit` for every accepted visit. Skipped
    /// visits and stop conditions are reported to `sink` at debug level.
    pub fn traverse(&self, sink: &mut dyn Sink, mut emit: impl FnMut(TraversalEvent<'g>)) {
        let records = self.breadth_first();
        let mut emitted: HashSet<&'g str> = HashSet::new();
        let mut stack: Vec<Frame> = Vec::new();
        self.enter(self.root, 0, sink, &mut stack);

        while let Some(frame) = stack.last_mut() {
            let depth = frame.depth;
            let pad = " ".repeat(depth);
            if frame.width >= self.bounds.max_width {
                sink.debug(&format!(
                    "[DFT] {pad} Traversal stopped: too wide (width:{} >= maxStackWidth:{})",
                    frame.width, self.bounds.max_width
                ));
                stack.pop();
                continue;
            }
            let Some(&reason) = self.graph.reasons(frame.module).get(frame.next) else {
                stack.pop();
                continue;
            };
            frame.next += 1;

            let Some(target) = self.graph.named_target(reason) else {
                frame.width += 1;
                continue;
            };
            let identity = target.identity.as_str();

            // A shallower route to this module exists; this one would be a
            // redundant, longer chain.
            if records.get(identity).is_some_and(|r| r.depth < depth) {
                sink.debug(&format!("[DFT] {pad}Ignore from BFT: {identity}"));
                continue;
            }
            if emitted.contains(identity) {
                sink.debug(&format!("[DFT] {pad}Ignore from DFT: {identity}"));
                continue;
            }

            let width = frame.width;
            frame.width += 1;
            emit(TraversalEvent {
                label: identity,
                module: target.id,
                depth,
                width,
            });
            emitted.insert(identity);
            sink.debug(&format!("[DFT] {pad}Recurse for: {identity}"));
            self.enter(target.id, depth + 1, sink, &mut stack);
        }
    }

    /// Collect every event of a traversal.
    pub fn events(&self, sink: &mut dyn Sink) -> Vec<TraversalEvent<'g>> {
        let mut events = Vec::new();
        self.traverse(sink, |event| events.push(event));
        events
    }

    fn enter(&self, module: ModuleId, depth: usize, sink: &mut dyn Sink, stack: &mut Vec<Frame>) {
        let pad = " ".repeat(depth);
        if depth >= self.bounds.max_depth {
            sink.debug(&format!(
                "[DFT] {pad}Recurse stopped: too deep (depth:{depth} >= maxStackDepth:{})",
                self.bounds.max_depth
            ));
            return;
        }
        if self.graph.reasons(module).is_empty() {
            sink.debug(&format!("[DFT] {pad}Recurse stopped: no child"));
            return;
        }
        stack.push(Frame {
            module,
            depth,
            next: 0,
            width: 0,
        });
    }
}
