/// Mock implementations for testing
mod mock_package_source;
mod mock_progress_reporter;
mod mock_snapshot_reader;

pub use mock_package_source::MockPackageSource;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_snapshot_reader::MockSnapshotReader;
