use crate::application::read_models::{PackageInfo, PackageKind};
use crate::ports::outbound::PackageSource;
use crate::shared::error::BrewDepsError;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::io::ErrorKind;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Default per-invocation timeout for brew commands
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Default, Deserialize)]
struct BrewInfoDocument {
    #[serde(default)]
    formulae: Vec<BrewFormula>,
    #[serde(default)]
    casks: Vec<BrewCask>,
}

#[derive(Debug, Default, Deserialize)]
struct BrewFormula {
    #[serde(default)]
    desc: Option<String>,
    #[serde(default)]
    homepage: Option<String>,
    #[serde(default)]
    versions: BrewVersions,
    #[serde(default)]
    dependencies: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct BrewVersions {
    #[serde(default)]
    stable: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct BrewCask {
    #[serde(default)]
    desc: Option<String>,
    #[serde(default)]
    homepage: Option<String>,
    #[serde(default)]
    version: Option<String>,
}

/// BrewCliClient adapter for querying Homebrew through its CLI
///
/// This adapter implements the PackageSource port by running `brew list`,
/// `brew info --json=v2` and `brew uses --installed`.
///
/// Every invocation is bounded by a timeout. A command that exits with a
/// failure status, times out, or prints unparseable JSON simply contributes
/// nothing; only a `brew` binary that cannot be started is an error.
pub struct BrewCliClient {
    program: String,
    timeout: Duration,
}

impl BrewCliClient {
    /// Creates a client for the `brew` found on PATH
    pub fn new(timeout: Duration) -> Self {
        Self::with_program("brew", timeout)
    }

    /// Creates a client that runs `program` instead of `brew`
    pub fn with_program(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    /// Runs the package manager with `args`
    ///
    /// Returns `Ok(None)` when the command fails or times out, and the
    /// trimmed stdout otherwise.
    async fn run(&self, args: &[&str]) -> Result<Option<String>> {
        let child = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output();

        match tokio::time::timeout(self.timeout, child).await {
            Err(_elapsed) => Ok(None),
            Ok(Err(e)) if e.kind() == ErrorKind::NotFound => Err(BrewDepsError::BrewUnavailable {
                details: format!("`{}` was not found", self.program),
            }
            .into()),
            Ok(Err(e)) => Err(BrewDepsError::BrewUnavailable {
                details: e.to_string(),
            }
            .into()),
            Ok(Ok(output)) if output.status.success() => Ok(Some(
                String::from_utf8_lossy(&output.stdout).trim().to_string(),
            )),
            Ok(Ok(_)) => Ok(None),
        }
    }

    async fn fetch_formula(&self, name: &str) -> Result<PackageInfo> {
        // One brew process per worker at a time
        let info_args = ["info", "--json=v2", name];
        let uses_args = ["uses", "--installed", name];

        let mut info = PackageInfo::new(name, PackageKind::Formula);
        if let Some(json) = self.run(&info_args).await? {
            apply_formula_json(&mut info, &json);
        }
        if let Some(output) = self.run(&uses_args).await? {
            info.required_by = Some(parse_name_lines(&output));
        }
        Ok(info)
    }

    async fn fetch_cask(&self, name: &str) -> Result<PackageInfo> {
        let mut info = PackageInfo::new(name, PackageKind::Cask);
        let info_args = ["info", "--cask", "--json=v2", name];
        if let Some(json) = self.run(&info_args).await? {
            apply_cask_json(&mut info, &json);
        }
        Ok(info)
    }
}

#[async_trait]
impl PackageSource for BrewCliClient {
    async fn list_installed(&self, kind: PackageKind) -> Result<Vec<String>> {
        let flag = match kind {
            PackageKind::Formula => "--formula",
            PackageKind::Cask => "--cask",
        };
        Ok(self
            .run(&["list", flag])
            .await?
            .map(|output| parse_name_lines(&output))
            .unwrap_or_default())
    }

    async fn fetch_package_info(&self, name: &str, kind: PackageKind) -> Result<PackageInfo> {
        match kind {
            PackageKind::Formula => self.fetch_formula(name).await,
            PackageKind::Cask => self.fetch_cask(name).await,
        }
    }
}

/// Splits command output into names, dropping blank lines
fn parse_name_lines(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

fn apply_formula_json(info: &mut PackageInfo, json: &str) {
    let Ok(document) = serde_json::from_str::<BrewInfoDocument>(json) else {
        return;
    };
    let Some(formula) = document.formulae.into_iter().next() else {
        return;
    };

    info.description = formula.desc.unwrap_or_default();
    info.homepage = formula.homepage.unwrap_or_default();
    info.version = formula.versions.stable.unwrap_or_default();
    info.dependencies = Some(formula.dependencies);
}

fn apply_cask_json(info: &mut PackageInfo, json: &str) {
    let Ok(document) = serde_json::from_str::<BrewInfoDocument>(json) else {
        return;
    };
    let Some(cask) = document.casks.into_iter().next() else {
        return;
    };

    info.description = cask.desc.unwrap_or_default();
    info.homepage = cask.homepage.unwrap_or_default();
    info.version = cask.version.unwrap_or_default();
}
