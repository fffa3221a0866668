//! Package configuration loading
//!
//! The configuration is a JSON object keyed by package name:
//!
//! ```json
//! {
//!   "requests": {"source": "pypi", "stable": "2.31.0"},
//!   "ggplot2": {"source": "cran", "link": "https://cran.r-project.org/web/packages/ggplot2/index.html"}
//! }
//! ```
//!
//! Key order in the file is the order packages are checked in.

use crate::domain::PackageRecord;
use crate::error::ConfigError;
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "packages.json";

/// On-disk form of one package entry
#[derive(Debug, Deserialize)]
struct PackageEntry {
    source: String,
    #[serde(default)]
    stable: Option<String>,
    #[serde(default, rename = "pre-release")]
    prerelease: Option<String>,
    #[serde(default)]
    link: Option<String>,
}

/// Tracked packages loaded from a configuration file
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PackageConfig {
    /// Path the configuration was loaded from
    pub path: PathBuf,
    /// Package records in file order
    pub packages: Vec<PackageRecord>,
}

impl PackageConfig {
    /// Load the configuration from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::not_found(path));
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_error(path, e))?;
        Self::parse(&content, path)
    }

    /// Parse configuration content; `path` is used for error messages only
    pub fn parse(content: &str, path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let entries: IndexMap<String, PackageEntry> = serde_json::from_str(content)
            .map_err(|e| ConfigError::json_parse_error(&path, e.to_string()))?;

        let packages = entries
            .into_iter()
            .map(|(name, entry)| PackageRecord {
                name,
                source: entry.source,
                stable_version: entry.stable,
                prerelease_version: entry.prerelease,
                link: entry.link,
            })
            .collect();

        Ok(Self { path, packages })
    }

    /// Returns the number of tracked packages
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Returns true if no packages are tracked
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Returns the record for a package
    pub fn get(&self, name: &str) -> Option<&PackageRecord> {
        self.packages.iter().find(|p| p.name == name)
    }
}
