use crate::ports::outbound::{Snapshot, SnapshotReader};
use crate::shared::error::BrewDepsError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading package snapshots from disk
///
/// This adapter implements the SnapshotReader port.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Validate file is a regular file
    /// - Check file size limits
    fn safe_read_file(&self, path: &Path, file_type: &str) -> Result<String> {
        let file_size = validate_regular_file(path, file_type)?;
        validate_file_size(file_size, path, MAX_FILE_SIZE)?;

        fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_type, e))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotReader for FileSystemReader {
    fn read_snapshot(&self, path: &Path) -> Result<Snapshot> {
        if !path.exists() {
            return Err(BrewDepsError::SnapshotNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let content = self.safe_read_file(path, "snapshot").map_err(|e| {
            BrewDepsError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
        })?;

        serde_json::from_str(&content).map_err(|e| {
            BrewDepsError::SnapshotParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_snapshot_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("brew-packages.json");
        fs::write(
            &path,
            r#"{"formulas": [{"name": "wget", "dependencies": ["openssl@3"]}, {"name": "openssl@3"}]}"#,
        )
        .unwrap();

        let snapshot = FileSystemReader::new().read_snapshot(&path).unwrap();
        assert_eq!(snapshot.formulas.len(), 2);
        assert_eq!(snapshot.formulas[0]["name"], "wget");
    }

    #[test]
    fn test_read_snapshot_missing_formulas_key() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("brew-packages.json");
        fs::write(&path, r#"{"casks": []}"#).unwrap();

        let snapshot = FileSystemReader::new().read_snapshot(&path).unwrap();
        assert!(snapshot.formulas.is_empty());
    }

    #[test]
    fn test_read_snapshot_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        let result = FileSystemReader::new().read_snapshot(&path);
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Snapshot file not found"));
    }

    #[test]
    fn test_read_snapshot_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let result = FileSystemReader::new().read_snapshot(&path);
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Invalid JSON"));
    }

    #[test]
    fn test_read_snapshot_rejects_non_object() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("array.json");
        fs::write(&path, r#"[{"name": "wget"}]"#).unwrap();

        assert!(FileSystemReader::new().read_snapshot(&path).is_err());
    }

    #[test]
    fn test_read_snapshot_directory() {
        let temp_dir = TempDir::new().unwrap();

        let result = FileSystemReader::new().read_snapshot(temp_dir.path());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Failed to read file"));
    }
}
