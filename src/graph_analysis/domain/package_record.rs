/// PackageRecord value object representing one installed package
///
/// Every field except `name` may be empty. Names listed in `dependencies`
/// and `required_by` are plain references and are not guaranteed to exist
/// in the graph the record ends up in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackageRecord {
    name: String,
    description: String,
    version: String,
    dependencies: Vec<String>,
    required_by: Vec<String>,
}

impl PackageRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_required_by<I, S>(mut self, required_by: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_by = required_by.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Forward edges in declared order
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// Reverse edges in declared order
    pub fn required_by(&self) -> &[String] {
        &self.required_by
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_record_defaults() {
        let record = PackageRecord::new("wget");
        assert_eq!(record.name(), "wget");
        assert_eq!(record.description(), "");
        assert_eq!(record.version(), "");
        assert!(record.dependencies().is_empty());
        assert!(record.required_by().is_empty());
    }

    #[test]
    fn test_package_record_builder_keeps_edge_order() {
        let record = PackageRecord::new("wget")
            .with_version("1.24.5")
            .with_description("Internet file retriever")
            .with_dependencies(["openssl@3", "libidn2", "gettext"])
            .with_required_by(["youtube-dl"]);

        assert_eq!(record.version(), "1.24.5");
        assert_eq!(record.description(), "Internet file retriever");
        assert_eq!(record.dependencies(), ["openssl@3", "libidn2", "gettext"]);
        assert_eq!(record.required_by(), ["youtube-dl"]);
    }
}
