//! Observation returned by a source adapter for one check

use serde::{Deserialize, Serialize};

/// Marker text that classifies a version string as a pre-release
const PRERELEASE_MARKER: &str = "pre-release";

/// Latest release seen upstream for one package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Opaque version token
    pub version: String,
    /// Whether the version is a stable release
    pub is_stable: bool,
    /// Canonical link for the release
    pub link: String,
}

impl Observation {
    /// Creates a new Observation
    pub fn new(version: impl Into<String>, is_stable: bool, link: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            is_stable,
            link: link.into(),
        }
    }

    /// Creates an Observation, classifying stability from the version text itself
    pub fn classified(version: impl Into<String>, link: impl Into<String>) -> Self {
        let version = version.into();
        let is_stable = Self::classify(&version);
        Self::new(version, is_stable, link)
    }

    /// Returns true when the text does not carry the pre-release marker
    ///
    /// Every adapter applies this same rule. It is a plain substring check, so
    /// tokens such as `2.0.0rc1` are still reported as stable.
    pub fn classify(text: &str) -> bool {
        !text.contains(PRERELEASE_MARKER)
    }
}
