use crate::graph_analysis::domain::PackageRecord;
use serde_json::Value;

/// RecordNormalizer service for turning loosely-shaped entries into records
///
/// Snapshot entries come from a JSON export where every field may be
/// missing or carry an unexpected type. This is the single place where
/// field presence is checked; everything downstream works on
/// fixed-shape `PackageRecord`s.
pub struct RecordNormalizer;

impl RecordNormalizer {
    /// Normalizes a sequence of raw entries, dropping those without a usable name
    pub fn normalize_all<'a, I>(entries: I) -> Vec<PackageRecord>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        entries.into_iter().filter_map(Self::normalize).collect()
    }

    /// Normalizes a single entry
    ///
    /// Returns `None` when the entry is not an object or its `name` is
    /// missing, not a string, or empty. Missing or mistyped optional fields
    /// fall back to empty values.
    pub fn normalize(entry: &Value) -> Option<PackageRecord> {
        let fields = entry.as_object()?;
        let name = fields.get("name").and_then(Value::as_str)?;
        if name.is_empty() {
            return None;
        }

        Some(
            PackageRecord::new(name)
                .with_description(Self::string_field(entry, "description"))
                .with_version(Self::string_field(entry, "version"))
                .with_dependencies(Self::name_list(entry, "dependencies"))
                .with_required_by(Self::name_list(entry, "required_by")),
        )
    }

    fn string_field<'a>(entry: &'a Value, key: &str) -> &'a str {
        entry.get(key).and_then(Value::as_str).unwrap_or_default()
    }

    fn name_list<'a>(entry: &'a Value, key: &str) -> Vec<&'a str> {
        entry
            .get(key)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}
