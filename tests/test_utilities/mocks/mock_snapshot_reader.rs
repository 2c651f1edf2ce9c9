use brew_deps::prelude::*;
use std::path::Path;

/// Mock SnapshotReader serving snapshot JSON from memory
pub struct MockSnapshotReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockSnapshotReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl SnapshotReader for MockSnapshotReader {
    fn read_snapshot(&self, path: &Path) -> Result<Snapshot> {
        if self.should_fail {
            return Err(BrewDepsError::SnapshotNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }
        serde_json::from_str(&self.content).map_err(|e| {
            BrewDepsError::SnapshotParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
