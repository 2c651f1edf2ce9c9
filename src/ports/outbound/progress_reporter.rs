/// ProgressReporter port for user-facing progress and diagnostics
///
/// This port abstracts progress reporting (e.g., to stderr) so that stdout
/// only ever carries the requested output.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress of a batch operation
    ///
    /// # Arguments
    /// * `current` - Items completed so far
    /// * `total` - Total expected items
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
