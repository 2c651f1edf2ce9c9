use crate::graph_analysis::domain::{
    DependencyGraph, Direction, NodeStatus, PackageRecord, TraversalNode,
};
use std::collections::HashMap;

/// Names on the path from the traversal root to the node being visited.
///
/// Nodes are emitted in pre-order, so the path of any popped frame is the
/// first `frame.depth` entries of the previous path. `counts` mirrors
/// `names` for constant-time membership checks.
#[derive(Default)]
struct AncestorPath<'a> {
    names: Vec<&'a str>,
    counts: HashMap<&'a str, usize>,
}

impl<'a> AncestorPath<'a> {
    fn truncate(&mut self, depth: usize) {
        while self.names.len() > depth {
            if let Some(name) = self.names.pop() {
                if let Some(count) = self.counts.get_mut(name) {
                    *count -= 1;
                    if *count == 0 {
                        self.counts.remove(name);
                    }
                }
            }
        }
    }

    fn push(&mut self, name: &'a str) {
        self.names.push(name);
        *self.counts.entry(name).or_insert(0) += 1;
    }

    fn contains(&self, name: &str) -> bool {
        self.counts.contains_key(name)
    }
}

/// A pending visit on the work stack
struct Frame<'a> {
    name: &'a str,
    depth: usize,
    is_last: bool,
}

/// TreeTraversal iterator for depth- and cycle-bounded tree walks
///
/// Emits `TraversalNode`s lazily in pre-order, depth-first, visiting
/// children in edge-list order. Uses an explicit work stack and a flat
/// ancestor path, so arbitrarily deep graphs cannot overflow the call stack.
///
/// Cycle detection is path-scoped: a name is `Circular` only when it is
/// already an ancestor on the current root-to-node path. A dependency
/// shared by two branches (a diamond) is emitted as `Found` under both.
///
/// Traversal never fails: unknown names (including an unknown root) are
/// emitted as `NotFound` leaves.
pub struct TreeTraversal<'a> {
    graph: &'a DependencyGraph,
    direction: Direction,
    max_depth: Option<usize>,
    stack: Vec<Frame<'a>>,
    path: AncestorPath<'a>,
}

impl<'a> TreeTraversal<'a> {
    /// Starts a traversal at `root`.
    ///
    /// `max_depth` is exclusive: with `Some(n)` no node at depth `>= n` is
    /// emitted, so `Some(0)` yields nothing and `Some(1)` only the root.
    /// `None` means unlimited.
    pub fn new(
        graph: &'a DependencyGraph,
        root: &'a str,
        direction: Direction,
        max_depth: Option<usize>,
    ) -> Self {
        let mut traversal = Self {
            graph,
            direction,
            max_depth,
            stack: Vec::new(),
            path: AncestorPath::default(),
        };
        traversal.schedule(Frame {
            name: root,
            depth: 0,
            is_last: true,
        });
        traversal
    }

    /// Walks `dependencies` edges
    pub fn forward(graph: &'a DependencyGraph, root: &'a str, max_depth: Option<usize>) -> Self {
        Self::new(graph, root, Direction::Forward, max_depth)
    }

    /// Walks `required_by` edges
    pub fn reverse(graph: &'a DependencyGraph, root: &'a str, max_depth: Option<usize>) -> Self {
        Self::new(graph, root, Direction::Reverse, max_depth)
    }

    fn within_depth(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |limit| depth < limit)
    }

    fn schedule(&mut self, frame: Frame<'a>) {
        if self.within_depth(frame.depth) {
            self.stack.push(frame);
        }
    }

    fn edges(&self, record: &'a PackageRecord) -> &'a [String] {
        match self.direction {
            Direction::Forward => record.dependencies(),
            Direction::Reverse => record.required_by(),
        }
    }

    fn node(
        &self,
        frame: &Frame<'a>,
        status: NodeStatus,
        version: &str,
        child_count: usize,
    ) -> TraversalNode {
        TraversalNode {
            name: frame.name.to_string(),
            version: version.to_string(),
            depth: frame.depth,
            is_last: frame.is_last,
            status,
            direction: self.direction,
            child_count,
        }
    }
}

impl<'a> Iterator for TreeTraversal<'a> {
    type Item = TraversalNode;

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.stack.pop()?;
        self.path.truncate(frame.depth);

        let Some(record) = self.graph.get(frame.name) else {
            return Some(self.node(&frame, NodeStatus::NotFound, "", 0));
        };

        if self.path.contains(frame.name) {
            return Some(self.node(&frame, NodeStatus::Circular, record.version(), 0));
        }

        let children = self.edges(record);
        let node = self.node(&frame, NodeStatus::Found, record.version(), children.len());
        self.path.push(frame.name);

        // Reverse push so the first child is popped first
        let last_index = children.len().saturating_sub(1);
        for (position, child) in children.iter().enumerate().rev() {
            self.schedule(Frame {
                name: child,
                depth: frame.depth + 1,
                is_last: position == last_index,
            });
        }

        Some(node)
    }
}
