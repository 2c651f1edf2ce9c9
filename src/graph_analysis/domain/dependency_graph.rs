use super::PackageRecord;
use std::collections::HashMap;

/// DependencyGraph aggregate mapping package names to their records
///
/// The graph is read-only once built. Records are stored in first-insertion
/// order so that whole-graph iteration is deterministic.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    records: Vec<PackageRecord>,
    index: HashMap<String, usize>,
}

impl DependencyGraph {
    /// Builds a graph keyed by record name.
    ///
    /// A record whose name was already seen replaces the earlier record
    /// in place (last write wins, position of the first write is kept).
    pub fn new(records: impl IntoIterator<Item = PackageRecord>) -> Self {
        let mut graph = Self::default();
        for record in records {
            match graph.index.get(record.name()) {
                Some(&position) => graph.records[position] = record,
                None => {
                    graph
                        .index
                        .insert(record.name().to_string(), graph.records.len());
                    graph.records.push(record);
                }
            }
        }
        graph
    }

    pub fn get(&self, name: &str) -> Option<&PackageRecord> {
        self.index.get(name).map(|&position| &self.records[position])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Records in first-insertion order
    pub fn records(&self) -> impl Iterator<Item = &PackageRecord> {
        self.records.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(PackageRecord::name)
    }

    pub fn package_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Raw forward edge count (duplicates included)
    pub fn edge_count(&self) -> usize {
        self.records.iter().map(|r| r.dependencies().len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_graph_lookup() {
        let graph = DependencyGraph::new(vec![
            PackageRecord::new("a").with_dependencies(["b"]),
            PackageRecord::new("b"),
        ]);

        assert_eq!(graph.package_count(), 2);
        assert!(graph.contains("a"));
        assert!(!graph.contains("c"));
        assert_eq!(graph.get("a").unwrap().dependencies(), ["b"]);
        assert!(graph.get("c").is_none());
    }

    #[test]
    fn test_dependency_graph_last_write_wins() {
        let graph = DependencyGraph::new(vec![
            PackageRecord::new("a").with_version("1.0"),
            PackageRecord::new("b"),
            PackageRecord::new("a").with_version("2.0"),
        ]);

        assert_eq!(graph.package_count(), 2);
        assert_eq!(graph.get("a").unwrap().version(), "2.0");
        // The replaced key keeps its original slot
        assert_eq!(graph.names().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_dependency_graph_edge_count_counts_duplicates() {
        let graph = DependencyGraph::new(vec![
            PackageRecord::new("a").with_dependencies(["b", "b", "c"]),
            PackageRecord::new("b").with_dependencies(["c"]),
        ]);

        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_dependency_graph_empty() {
        let graph = DependencyGraph::new(Vec::new());
        assert!(graph.is_empty());
        assert_eq!(graph.package_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }
}
