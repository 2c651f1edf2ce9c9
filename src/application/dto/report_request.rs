/// ReportRequest - Internal request DTO for the report collection use case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRequest {
    /// Maximum number of packages queried concurrently
    pub max_workers: usize,
}

impl ReportRequest {
    pub fn new(max_workers: usize) -> Self {
        Self {
            max_workers: max_workers.max(1),
        }
    }
}

impl Default for ReportRequest {
    fn default() -> Self {
        Self::new(10)
    }
}
