use async_trait::async_trait;
use brew_deps::prelude::*;
use std::collections::HashMap;

/// Mock PackageSource backed by canned package information
#[derive(Default)]
pub struct MockPackageSource {
    packages: Vec<PackageInfo>,
    failures: HashMap<String, String>,
}

impl MockPackageSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an installed formula with its edges
    pub fn with_formula(
        mut self,
        name: &str,
        version: &str,
        deps: &[&str],
        required_by: &[&str],
    ) -> Self {
        let mut info = PackageInfo::new(name, PackageKind::Formula);
        info.version = version.to_string();
        info.dependencies = Some(deps.iter().map(|s| s.to_string()).collect());
        info.required_by = Some(required_by.iter().map(|s| s.to_string()).collect());
        self.packages.push(info);
        self
    }

    /// Adds an installed cask
    pub fn with_cask(mut self, name: &str, version: &str) -> Self {
        let mut info = PackageInfo::new(name, PackageKind::Cask);
        info.version = version.to_string();
        self.packages.push(info);
        self
    }

    /// Adds an installed formula whose query fails
    pub fn with_failing_formula(mut self, name: &str, error: &str) -> Self {
        self.packages.push(PackageInfo::new(name, PackageKind::Formula));
        self.failures.insert(name.to_string(), error.to_string());
        self
    }
}

#[async_trait]
impl PackageSource for MockPackageSource {
    async fn list_installed(&self, kind: PackageKind) -> Result<Vec<String>> {
        Ok(self
            .packages
            .iter()
            .filter(|info| info.kind == kind)
            .map(|info| info.name.clone())
            .collect())
    }

    async fn fetch_package_info(&self, name: &str, kind: PackageKind) -> Result<PackageInfo> {
        if let Some(error) = self.failures.get(name) {
            anyhow::bail!("{}", error);
        }
        self.packages
            .iter()
            .find(|info| info.name == name && info.kind == kind)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Mock package not found: {}", name))
    }
}
