//! Package report read model
//!
//! The serialized form of `PackageReport` is the snapshot format that the
//! graph explorer loads, so field names here are part of the file contract.

use chrono::{DateTime, Local};
use serde::Serialize;

/// Kind of installed Homebrew package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageKind {
    /// Command-line tool or library
    Formula,
    /// GUI application
    Cask,
}

impl PackageKind {
    pub fn label(&self) -> &'static str {
        match self {
            PackageKind::Formula => "Formula (CLI/Library)",
            PackageKind::Cask => "Cask (GUI Application)",
        }
    }
}

impl std::fmt::Display for PackageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackageKind::Formula => write!(f, "formula"),
            PackageKind::Cask => write!(f, "cask"),
        }
    }
}

/// Whether querying a package succeeded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryStatus {
    Success,
    Error,
}

/// Collected information for one installed package
///
/// `dependencies` and `required_by` are only present for formulas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PackageKind,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_by: Option<Vec<String>>,
    pub homepage: String,
    pub version: String,
    pub status: QueryStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PackageInfo {
    /// Creates a successful entry with empty fields
    pub fn new(name: impl Into<String>, kind: PackageKind) -> Self {
        let edges = match kind {
            PackageKind::Formula => Some(Vec::new()),
            PackageKind::Cask => None,
        };
        Self {
            name: name.into(),
            kind,
            description: String::new(),
            dependencies: edges.clone(),
            required_by: edges,
            homepage: String::new(),
            version: String::new(),
            status: QueryStatus::Success,
            error: None,
        }
    }

    /// Creates an error entry for a package whose query failed outright
    pub fn failed(name: impl Into<String>, kind: PackageKind, error: impl Into<String>) -> Self {
        Self {
            status: QueryStatus::Error,
            error: Some(error.into()),
            ..Self::new(name, kind)
        }
    }

    pub fn is_error(&self) -> bool {
        self.status == QueryStatus::Error
    }
}

/// Package counts per kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub total_formulas: usize,
    pub total_casks: usize,
    pub total_packages: usize,
}

/// Full installed-package report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageReport {
    pub generated_at: DateTime<Local>,
    pub summary: ReportSummary,
    pub formulas: Vec<PackageInfo>,
    pub casks: Vec<PackageInfo>,
}

impl PackageReport {
    /// Splits packages by kind and sorts each section by name
    pub fn from_packages(packages: Vec<PackageInfo>, generated_at: DateTime<Local>) -> Self {
        let (mut formulas, mut casks): (Vec<_>, Vec<_>) = packages
            .into_iter()
            .partition(|info| info.kind == PackageKind::Formula);
        formulas.sort_by(|a, b| a.name.cmp(&b.name));
        casks.sort_by(|a, b| a.name.cmp(&b.name));

        Self {
            generated_at,
            summary: ReportSummary {
                total_formulas: formulas.len(),
                total_casks: casks.len(),
                total_packages: formulas.len() + casks.len(),
            },
            formulas,
            casks,
        }
    }
}
