pub mod dependency_graph;
pub mod package_record;
pub mod statistics;
pub mod traversal_node;

pub use dependency_graph::DependencyGraph;
pub use package_record::PackageRecord;
pub use statistics::{GraphStatistics, RankedPackage};
pub use traversal_node::{Direction, NodeStatus, TraversalNode};
