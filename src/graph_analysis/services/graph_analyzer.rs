use crate::graph_analysis::domain::{DependencyGraph, GraphStatistics, RankedPackage};
use std::collections::{HashMap, HashSet};

/// GraphAnalyzer service for whole-graph aggregates
///
/// Every operation is a pure function of the graph: nothing is cached or
/// mutated, so calls are repeatable and safe from any number of threads.
pub struct GraphAnalyzer;

impl GraphAnalyzer {
    /// Packages that no record lists as a dependency, sorted by name
    pub fn root_packages(graph: &DependencyGraph) -> Vec<String> {
        let depended_on: HashSet<&str> = graph
            .records()
            .flat_map(|record| record.dependencies())
            .map(String::as_str)
            .collect();

        Self::sorted(graph.names().filter(|name| !depended_on.contains(name)))
    }

    /// Packages without dependencies, sorted by name
    pub fn leaf_packages(graph: &DependencyGraph) -> Vec<String> {
        Self::sorted(
            graph
                .records()
                .filter(|record| record.dependencies().is_empty())
                .map(|record| record.name()),
        )
    }

    /// The `top_n` names listed most often across all dependency lists
    ///
    /// Occurrences are counted literally: a record listing the same
    /// dependency twice contributes two. Names need not be graph keys.
    /// Equal counts keep the order in which names were first encountered.
    pub fn top_most_depended_on(graph: &DependencyGraph, top_n: usize) -> Vec<RankedPackage> {
        let mut order: Vec<&str> = Vec::new();
        let mut counts: HashMap<&str, usize> = HashMap::new();

        for dependency in graph.records().flat_map(|record| record.dependencies()) {
            let count = counts.entry(dependency.as_str()).or_insert_with(|| {
                order.push(dependency.as_str());
                0
            });
            *count += 1;
        }

        Self::ranked(
            order
                .into_iter()
                .map(|name| RankedPackage::new(name, counts[name])),
            top_n,
        )
    }

    /// The `top_n` packages with the longest dependency lists
    pub fn top_most_dependencies(graph: &DependencyGraph, top_n: usize) -> Vec<RankedPackage> {
        Self::ranked(
            graph
                .records()
                .map(|record| RankedPackage::new(record.name(), record.dependencies().len())),
            top_n,
        )
    }

    pub fn summary_statistics(graph: &DependencyGraph) -> GraphStatistics {
        let total_packages = graph.package_count();
        let total_dependencies = graph.edge_count();
        let average_dependencies = if total_packages == 0 {
            0.0
        } else {
            total_dependencies as f64 / total_packages as f64
        };

        GraphStatistics {
            total_packages,
            total_dependencies,
            average_dependencies,
            root_count: Self::root_packages(graph).len(),
            leaf_count: Self::leaf_packages(graph).len(),
        }
    }

    fn sorted<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
        let mut names: Vec<String> = names.map(String::from).collect();
        names.sort();
        names
    }

    /// Descending by count; `sort_by` is stable so ties keep input order
    fn ranked(entries: impl Iterator<Item = RankedPackage>, top_n: usize) -> Vec<RankedPackage> {
        let mut entries: Vec<RankedPackage> = entries.collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries.truncate(top_n);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_analysis::domain::PackageRecord;

    fn graph(entries: &[(&str, &[&str])]) -> DependencyGraph {
        DependencyGraph::new(entries.iter().map(|(name, deps)| {
            PackageRecord::new(*name).with_dependencies(deps.iter().copied())
        }))
    }

    fn ranking(entries: &[RankedPackage]) -> Vec<(&str, usize)> {
        entries.iter().map(|e| (e.name.as_str(), e.count)).collect()
    }

    #[test]
    fn test_roots_and_leaves() {
        let g = graph(&[("A", &[]), ("B", &["A"])]);
        assert_eq!(GraphAnalyzer::root_packages(&g), vec!["B"]);
        assert_eq!(GraphAnalyzer::leaf_packages(&g), vec!["A"]);
    }

    #[test]
    fn test_roots_and_leaves_are_sorted() {
        let g = graph(&[("zsh", &[]), ("curl", &["zlib"]), ("bat", &[]), ("zlib", &[])]);
        assert_eq!(GraphAnalyzer::root_packages(&g), vec!["bat", "curl", "zsh"]);
        assert_eq!(GraphAnalyzer::leaf_packages(&g), vec!["bat", "zlib", "zsh"]);
    }

    #[test]
    fn test_root_and_leaf_overlap_only_for_isolated_packages() {
        let g = graph(&[
            ("isolated", &[]),
            ("top", &["mid"]),
            ("mid", &["bottom"]),
            ("bottom", &[]),
        ]);
        let roots = GraphAnalyzer::root_packages(&g);
        let leaves = GraphAnalyzer::leaf_packages(&g);
        let both: Vec<&String> = roots.iter().filter(|r| leaves.contains(r)).collect();
        assert_eq!(both, vec!["isolated"]);
    }

    #[test]
    fn test_roots_ignore_dangling_dependency_names() {
        let g = graph(&[("A", &["ghost"])]);
        assert_eq!(GraphAnalyzer::root_packages(&g), vec!["A"]);
    }

    #[test]
    fn test_top_most_depended_on_counts_and_ties() {
        let g = graph(&[
            ("app", &["zlib", "openssl@3", "ghost"]),
            ("curl", &["openssl@3", "zlib"]),
            ("wget", &["openssl@3"]),
        ]);

        let top = GraphAnalyzer::top_most_depended_on(&g, 10);
        // zlib and ghost tie with 2 and 1; zlib was seen first
        assert_eq!(ranking(&top), vec![("openssl@3", 3), ("zlib", 2), ("ghost", 1)]);
    }

    #[test]
    fn test_top_most_depended_on_counts_duplicates_literally() {
        let g = graph(&[("A", &["B", "B"]), ("C", &["D"])]);
        let top = GraphAnalyzer::top_most_depended_on(&g, 10);
        assert_eq!(ranking(&top), vec![("B", 2), ("D", 1)]);
    }

    #[test]
    fn test_top_most_depended_on_zero_is_empty() {
        let g = graph(&[("A", &["B"]), ("B", &[])]);
        assert!(GraphAnalyzer::top_most_depended_on(&g, 0).is_empty());
        assert!(GraphAnalyzer::top_most_dependencies(&g, 0).is_empty());
    }

    #[test]
    fn test_top_most_dependencies_truncates_and_keeps_tie_order() {
        let g = graph(&[
            ("a", &["x"]),
            ("b", &["x", "y", "z"]),
            ("c", &["x", "y"]),
            ("d", &["y", "z"]),
            ("e", &[]),
        ]);

        let top = GraphAnalyzer::top_most_dependencies(&g, 3);
        assert_eq!(ranking(&top), vec![("b", 3), ("c", 2), ("d", 2)]);
    }

    #[test]
    fn test_summary_statistics() {
        let g = graph(&[("A", &["B", "C"]), ("B", &["C"]), ("C", &[])]);
        let stats = GraphAnalyzer::summary_statistics(&g);

        assert_eq!(stats.total_packages, 3);
        assert_eq!(stats.total_dependencies, 3);
        assert_eq!(stats.average_dependencies, 1.0);
        assert_eq!(stats.root_count, 1);
        assert_eq!(stats.leaf_count, 1);
    }

    #[test]
    fn test_summary_statistics_empty_graph() {
        let stats = GraphAnalyzer::summary_statistics(&DependencyGraph::default());

        assert_eq!(stats.total_packages, 0);
        assert_eq!(stats.total_dependencies, 0);
        assert_eq!(stats.average_dependencies, 0.0);
        assert_eq!(stats.root_count, 0);
        assert_eq!(stats.leaf_count, 0);
    }

    #[test]
    fn test_summary_statistics_average_is_exact_ratio() {
        let g = graph(&[("A", &["B", "C"]), ("B", &["C"]), ("C", &[]), ("D", &["A", "B", "C"])]);
        let stats = GraphAnalyzer::summary_statistics(&g);
        assert_eq!(stats.average_dependencies, 6.0 / 4.0);
    }
}
