use crate::application::dto::ReportRequest;
use crate::application::read_models::{PackageInfo, PackageKind, PackageReport};
use crate::ports::outbound::{PackageSource, ProgressReporter};
use crate::shared::error::BrewDepsError;
use crate::shared::Result;
use chrono::Local;
use futures::stream::{self, StreamExt};


/// CollectReportUseCase - Queries every installed package into a report
///
/// Packages are queried concurrently with at most `max_workers` in flight.
/// A package whose query fails becomes an error entry; the batch carries on.
///
/// # Type Parameters
/// * `PS` - PackageSource implementation
/// * `PR` - ProgressReporter implementation
pub struct CollectReportUseCase<PS, PR> {
    package_source: PS,
    progress_reporter: PR,
}

impl<PS, PR> CollectReportUseCase<PS, PR>
where
    PS: PackageSource,
    PR: ProgressReporter,
{
    pub fn new(package_source: PS, progress_reporter: PR) -> Self {
        Self {
            package_source,
            progress_reporter,
        }
    }

    /// Executes the collection
    ///
    /// # Errors
    /// Fails when the package source is unavailable or reports no installed
    /// packages at all.
    pub async fn execute(&self, request: ReportRequest) -> Result<PackageReport> {
        let jobs = self.list_installed_packages().await?;
        let packages = self.gather_package_info(jobs, request.max_workers).await;

        Ok(PackageReport::from_packages(packages, Local::now()))
    }

    async fn list_installed_packages(&self) -> Result<Vec<(String, PackageKind)>> {
        self.progress_reporter
            .report("🔍 Fetching installed packages...");

        let (formulas, casks) = futures::join!(
            self.package_source.list_installed(PackageKind::Formula),
            self.package_source.list_installed(PackageKind::Cask),
        );
        let (formulas, casks) = (formulas?, casks?);

        if formulas.is_empty() && casks.is_empty() {
            return Err(BrewDepsError::NoInstalledPackages.into());
        }

        self.progress_reporter.report(&format!(
            "✅ Found {} formula(s) and {} cask(s)",
            formulas.len(),
            casks.len()
        ));

        Ok(formulas
            .into_iter()
            .map(|name| (name, PackageKind::Formula))
            .chain(casks.into_iter().map(|name| (name, PackageKind::Cask)))
            .collect())
    }

    async fn gather_package_info(
        &self,
        jobs: Vec<(String, PackageKind)>,
        max_workers: usize,
    ) -> Vec<PackageInfo> {
        self.progress_reporter
            .report("📦 Gathering package information (this may take a moment)...");

        let total = jobs.len();
        let mut results = stream::iter(jobs)
            .map(|(name, kind)| async move {
                let result = self.package_source.fetch_package_info(&name, kind).await;
                (name, kind, result)
            })
            .buffer_unordered(max_workers.max(1));

        let mut packages = Vec::with_capacity(total);
        let mut failures = 0;
        while let Some((name, kind, result)) = results.next().await {
            self.progress_reporter
                .report_progress(packages.len() + 1, total, Some(&name));

            let info = match result {
                Ok(info) => info,
                Err(e) => {
                    failures += 1;
                    self.progress_reporter
                        .report_error(&format!("⚠️  Error processing {}: {}", name, e));
                    PackageInfo::failed(name, kind, e.to_string())
                }
            };
            packages.push(info);
        }

        let message = if failures > 0 {
            format!(
                "✅ Collected {} package(s), {} with errors",
                packages.len(),
                failures
            )
        } else {
            format!("✅ Collected {} package(s)", packages.len())
        };
        self.progress_reporter.report_completion(&message);

        packages
    }
}
