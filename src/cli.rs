use brew_deps::application::dto::{DisplayOptions, GraphRequest, GraphView, OutputFormat};
use brew_deps::config::ConfigFile;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default snapshot path read by `graph`
pub const DEFAULT_SNAPSHOT: &str = "brew-packages.json";

/// Default number of concurrent package queries
pub const DEFAULT_MAX_WORKERS: usize = 10;

/// Default ranking length in the statistics view
pub const DEFAULT_TOP: usize = 10;

/// Explore Homebrew dependency graphs and collect installed-package reports
#[derive(Parser, Debug)]
#[command(name = "brew-deps")]
#[command(version)]
#[command(about = "Explore Homebrew dependency graphs and collect installed-package reports", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Explore the dependency graph stored in a snapshot file
    Graph(GraphArgs),
    /// Query brew for every installed formula and cask
    Collect(CollectArgs),
}

/// Options shared by both subcommands
#[derive(clap::Args, Debug, Default)]
pub struct CommonArgs {
    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to a config file (defaults to ./brew-deps.config.yml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct GraphArgs {
    /// Snapshot JSON written by `brew-deps collect --format json`
    #[arg(default_value = DEFAULT_SNAPSHOT)]
    pub snapshot: PathBuf,

    /// Show the dependency tree of this package
    #[arg(short, long)]
    pub package: Option<String>,

    /// Show what depends on the package instead of what it depends on
    #[arg(short, long)]
    pub reverse: bool,

    /// Maximum tree depth; negative means unlimited
    #[arg(short, long, allow_negative_numbers = true)]
    pub depth: Option<i64>,

    /// Show dependency statistics (default view)
    #[arg(long)]
    pub stats: bool,

    /// Show packages nothing depends on
    #[arg(long)]
    pub roots: bool,

    /// Show packages without dependencies
    #[arg(long)]
    pub leaves: bool,

    /// List every package
    #[arg(long)]
    pub list: bool,

    /// Show versions in trees
    #[arg(short = 'v', long)]
    pub versions: bool,

    /// Number of packages in each statistics ranking
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl GraphArgs {
    /// Picks the view: stats, then list, roots, leaves, then a package tree
    pub fn view(&self) -> GraphView {
        if self.stats {
            GraphView::Statistics
        } else if self.list {
            GraphView::List
        } else if self.roots {
            GraphView::Roots
        } else if self.leaves {
            GraphView::Leaves
        } else if let Some(package) = &self.package {
            GraphView::Tree {
                package: package.clone(),
                reverse: self.reverse,
            }
        } else {
            GraphView::Statistics
        }
    }

    /// Builds the request, letting flags override the config file
    pub fn to_request(&self, config: &ConfigFile, color_supported: bool) -> GraphRequest {
        let no_color = self.common.no_color || config.no_color.unwrap_or(false);
        let depth = self.depth.or(config.depth).unwrap_or(-1);

        GraphRequest::new(
            self.snapshot.clone(),
            self.view(),
            DisplayOptions {
                show_versions: self.versions || config.show_versions.unwrap_or(false),
                use_color: color_supported && !no_color,
                max_depth: depth_bound(depth),
                top_n: self.top.or(config.top).unwrap_or(DEFAULT_TOP),
            },
        )
    }
}

#[derive(clap::Args, Debug)]
pub struct CollectArgs {
    /// Output format: json or text
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Maximum number of packages queried in parallel
    #[arg(long, value_name = "N")]
    pub max_workers: Option<usize>,

    /// Timeout for each brew command, in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Collection settings after merging flags, config file and defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectSettings {
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub max_workers: usize,
    pub timeout_secs: u64,
    pub use_color: bool,
}

impl CollectArgs {
    /// Merges flags over the config file over built-in defaults
    ///
    /// # Errors
    /// Returns an error for a zero worker count or timeout, or a config
    /// file format that is not recognized.
    pub fn settings(
        &self,
        config: &ConfigFile,
        color_supported: bool,
    ) -> Result<CollectSettings, String> {
        let format = match (self.format, config.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(name)) => name.parse()?,
            (None, None) => OutputFormat::default(),
        };

        let max_workers = self
            .max_workers
            .or(config.max_workers)
            .unwrap_or(DEFAULT_MAX_WORKERS);
        if max_workers == 0 {
            return Err("--max-workers must be greater than 0".to_string());
        }

        let timeout_secs = self
            .timeout
            .or(config.timeout_secs)
            .unwrap_or(brew_deps::adapters::outbound::homebrew::DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err("--timeout must be greater than 0".to_string());
        }

        let no_color = self.common.no_color || config.no_color.unwrap_or(false);

        Ok(CollectSettings {
            format,
            output: self.output.clone(),
            max_workers,
            timeout_secs,
            // Report files are always written without escape codes
            use_color: color_supported && !no_color && self.output.is_none(),
        })
    }
}

/// Maps a signed depth flag to an exclusive bound; negative is unlimited
pub fn depth_bound(depth: i64) -> Option<usize> {
    usize::try_from(depth).ok()
}
