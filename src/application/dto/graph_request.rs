use std::path::PathBuf;

/// Which view of the dependency graph to present
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphView {
    /// Summary statistics and top-N rankings
    Statistics,
    /// Every package with version and edge counts
    List,
    /// Packages nothing depends on
    Roots,
    /// Packages without dependencies
    Leaves,
    /// Dependency tree of one package; reverse follows `required_by`
    Tree { package: String, reverse: bool },
}

/// Presentation options shared by the graph views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub show_versions: bool,
    pub use_color: bool,
    /// Exclusive depth bound for trees; `None` is unlimited
    pub max_depth: Option<usize>,
    /// Length of each ranking in the statistics view
    pub top_n: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_versions: false,
            use_color: false,
            max_depth: None,
            top_n: 10,
        }
    }
}

/// GraphRequest - Internal request DTO for the graph exploration use case
#[derive(Debug, Clone)]
pub struct GraphRequest {
    /// Path to the snapshot JSON written by `collect --format json`
    pub snapshot_path: PathBuf,
    pub view: GraphView,
    pub options: DisplayOptions,
}

impl GraphRequest {
    pub fn new(snapshot_path: PathBuf, view: GraphView, options: DisplayOptions) -> Self {
        Self {
            snapshot_path,
            view,
            options,
        }
    }
}
