use crate::application::read_models::{PackageInfo, PackageKind};
use crate::shared::Result;
use async_trait::async_trait;

/// PackageSource port for querying the package manager
///
/// This port abstracts the external package-manager CLI used to discover
/// installed packages and their metadata.
///
/// # Async Support
/// Methods are async so the collector can keep several queries in flight.
/// Implementations must be `Send + Sync` to support concurrent access.
#[async_trait]
pub trait PackageSource: Send + Sync {
    /// Lists the names of all installed packages of `kind`
    ///
    /// # Errors
    /// Returns an error only when the package manager itself cannot be run;
    /// an empty installation yields an empty list.
    async fn list_installed(&self, kind: PackageKind) -> Result<Vec<String>>;

    /// Queries metadata for one installed package
    ///
    /// Individual sub-queries that fail or time out leave their fields empty.
    ///
    /// # Errors
    /// Returns an error if the package could not be queried at all; callers
    /// turn this into an error-status entry instead of aborting the batch.
    async fn fetch_package_info(&self, name: &str, kind: PackageKind) -> Result<PackageInfo>;
}
