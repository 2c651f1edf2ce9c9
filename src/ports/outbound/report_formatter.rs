use crate::application::read_models::PackageReport;
use crate::shared::Result;

/// ReportFormatter port for formatting collected package reports
///
/// This port abstracts the formatting logic for the supported report
/// formats (JSON snapshot, human-readable text).
pub trait ReportFormatter {
    /// Formats the report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &PackageReport) -> Result<String>;
}
