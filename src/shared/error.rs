use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Application error (missing snapshot, unknown package, I/O error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for snapshot loading, graph queries and reports.
///
/// The graph core itself never fails; these cover the surrounding layers.
#[derive(Debug, Error)]
pub enum BrewDepsError {
    #[error("Snapshot file not found: {path}\n\n💡 Hint: Generate one with `brew-deps collect --format json -o {path}`")]
    SnapshotNotFound { path: PathBuf },

    #[error("Invalid JSON in snapshot file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file was produced by `brew-deps collect --format json`")]
    SnapshotParseError { path: PathBuf, details: String },

    #[error("No formulas found in snapshot file: {path}")]
    EmptySnapshot { path: PathBuf },

    #[error("Package '{name}' not found in graph.\n\n💡 Hint: Use `brew-deps graph --list` to see all known packages")]
    PackageNotFound { name: String },

    #[error("No Homebrew packages found.\n\n💡 Hint: Please verify that Homebrew is installed and `brew list` works")]
    NoInstalledPackages,

    #[error("Failed to run brew: {details}\n\n💡 Hint: Please verify that the `brew` executable is on your PATH")]
    BrewUnavailable { details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
