/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, package manager, console).
pub mod output_presenter;
pub mod package_source;
pub mod progress_reporter;
pub mod report_formatter;
pub mod snapshot_reader;

pub use output_presenter::OutputPresenter;
pub use package_source::PackageSource;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
pub use snapshot_reader::{Snapshot, SnapshotReader};
