use super::RecordNormalizer;
use crate::graph_analysis::domain::{DependencyGraph, PackageRecord};
use serde_json::Value;

/// GraphBuilder service for assembling the dependency graph
///
/// Pure construction logic with no I/O; building never fails.
pub struct GraphBuilder;

impl GraphBuilder {
    /// Builds a graph from normalized records (last write wins on duplicate names)
    pub fn build(records: Vec<PackageRecord>) -> DependencyGraph {
        DependencyGraph::new(records)
    }

    /// Normalizes raw snapshot entries and builds a graph from them
    pub fn from_entries(entries: &[Value]) -> DependencyGraph {
        Self::build(RecordNormalizer::normalize_all(entries))
    }
}
