/// Which edge set a traversal follows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Follows `dependencies` ("what does this package need")
    Forward,
    /// Follows `required_by` ("what needs this package")
    Reverse,
}

/// Outcome of visiting a single name during a traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStatus {
    Found,
    /// The name is referenced but has no record in the graph
    NotFound,
    /// The name is already an ancestor on the current path
    Circular,
}

/// One visited package in one traversal, in emission (pre-)order
///
/// Nodes carry everything the tree renderer needs, so rendering never has
/// to consult the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalNode {
    pub name: String,
    /// Empty when unknown or when the package was not found
    pub version: String,
    pub depth: usize,
    pub is_last: bool,
    pub status: NodeStatus,
    pub direction: Direction,
    /// Number of edges in the followed direction (0 unless `Found`)
    pub child_count: usize,
}

impl TraversalNode {
    pub fn is_found(&self) -> bool {
        self.status == NodeStatus::Found
    }
}
