//! Package record tracked across runs

use serde::{Deserialize, Serialize};

/// One tracked package and the last state recorded for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    /// Package identifier, unique within a configuration
    pub name: String,
    /// Source name as written in the configuration
    pub source: String,
    /// Last recorded stable version
    pub stable_version: Option<String>,
    /// Last recorded pre-release version
    pub prerelease_version: Option<String>,
    /// Link to the last observed release
    pub link: Option<String>,
}

impl PackageRecord {
    /// Creates a record with no recorded versions
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            stable_version: None,
            prerelease_version: None,
            link: None,
        }
    }

    /// Sets the recorded stable version
    pub fn with_stable(mut self, version: impl Into<String>) -> Self {
        self.stable_version = Some(version.into());
        self
    }

    /// Sets the recorded pre-release version
    pub fn with_prerelease(mut self, version: impl Into<String>) -> Self {
        self.prerelease_version = Some(version.into());
        self
    }

    /// Sets the recorded link
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Recorded stable version, empty when none was recorded
    pub fn stable(&self) -> &str {
        self.stable_version.as_deref().unwrap_or("")
    }

    /// Recorded pre-release version, empty when none was recorded
    pub fn prerelease(&self) -> &str {
        self.prerelease_version.as_deref().unwrap_or("")
    }
}
