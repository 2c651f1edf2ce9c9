/// Summary figures for a whole dependency graph
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStatistics {
    pub total_packages: usize,
    /// Raw forward edge count, duplicates included
    pub total_dependencies: usize,
    pub average_dependencies: f64,
    pub root_count: usize,
    pub leaf_count: usize,
}

/// A package name paired with the count it was ranked by
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedPackage {
    pub name: String,
    pub count: usize,
}

impl RankedPackage {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}
