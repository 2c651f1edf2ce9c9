use crate::shared::Result;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::Path;

/// Raw content of an exported package snapshot
///
/// Entries are kept as untyped JSON; turning them into records is the job
/// of the record normalizer, not of the reader.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub formulas: Vec<Value>,
}

/// `"formulas": null` reads the same as a missing list
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<Value>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// SnapshotReader port for loading a package snapshot
///
/// This port abstracts where the snapshot JSON comes from (usually a file
/// written earlier by `brew-deps collect --format json`).
pub trait SnapshotReader {
    /// Reads and parses the snapshot at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The snapshot file does not exist or cannot be read
    /// - The content is not a JSON object
    fn read_snapshot(&self, path: &Path) -> Result<Snapshot>;
}
