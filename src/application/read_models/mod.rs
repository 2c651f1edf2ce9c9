//! Read models for query and presentation
//!
//! View-oriented structs produced by the use cases and consumed by the
//! output formatters.

pub mod package_report;

pub use package_report::{PackageInfo, PackageKind, PackageReport, QueryStatus, ReportSummary};
