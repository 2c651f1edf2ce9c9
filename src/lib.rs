//! brew-deps - Homebrew dependency explorer
//!
//! This library builds an explorable dependency graph from a snapshot of
//! installed Homebrew formulas, and collects that snapshot by querying the
//! `brew` CLI. It follows hexagonal architecture and Domain-Driven Design
//! principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`graph_analysis`): Graph model, traversal and analysis
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```
//! use brew_deps::prelude::*;
//! use serde_json::json;
//!
//! let graph = GraphBuilder::from_entries(&[
//!     json!({"name": "wget", "dependencies": ["openssl@3"]}),
//!     json!({"name": "openssl@3", "required_by": ["wget"]}),
//! ]);
//!
//! let renderer = TreeRenderer::new(RenderOptions::default());
//! let lines = renderer.render(TreeTraversal::forward(&graph, "wget", None));
//! assert_eq!(lines, vec!["└── wget [1 deps]", "    └── openssl@3"]);
//!
//! assert_eq!(GraphAnalyzer::root_packages(&graph), vec!["wget"]);
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod graph_analysis;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        GraphTextFormatter, JsonReportFormatter, RenderOptions, TextReportFormatter, TreeRenderer,
    };
    pub use crate::adapters::outbound::homebrew::BrewCliClient;
    pub use crate::application::dto::{
        DisplayOptions, GraphRequest, GraphView, OutputFormat, ReportRequest,
    };
    pub use crate::application::read_models::{
        PackageInfo, PackageKind, PackageReport, QueryStatus, ReportSummary,
    };
    pub use crate::application::use_cases::{CollectReportUseCase, ExploreGraphUseCase};
    pub use crate::graph_analysis::domain::{
        DependencyGraph, Direction, GraphStatistics, NodeStatus, PackageRecord, RankedPackage,
        TraversalNode,
    };
    pub use crate::graph_analysis::services::{
        GraphAnalyzer, GraphBuilder, RecordNormalizer, TreeTraversal,
    };
    pub use crate::ports::outbound::{
        OutputPresenter, PackageSource, ProgressReporter, ReportFormatter, Snapshot,
        SnapshotReader,
    };
    pub use crate::shared::error::BrewDepsError;
    pub use crate::shared::Result;
}
