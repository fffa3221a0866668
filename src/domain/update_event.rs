//! Update event types produced by the evaluator

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of what a check found for one package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateKind {
    /// A new stable version was recorded
    Stable,
    /// A new pre-release version was recorded
    Prerelease,
    /// Nothing changed upstream
    #[serde(rename = "none")]
    NoChange,
    /// The package could not be checked
    Error,
}

impl UpdateKind {
    /// Returns true for kinds that mutated the package record
    pub fn is_update(&self) -> bool {
        matches!(self, UpdateKind::Stable | UpdateKind::Prerelease)
    }

    /// Get the plain label
    pub fn label(&self) -> &'static str {
        match self {
            UpdateKind::Stable => "stable",
            UpdateKind::Prerelease => "prerelease",
            UpdateKind::NoChange => "none",
            UpdateKind::Error => "error",
        }
    }
}

impl fmt::Display for UpdateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Verdict for one package in one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateEvent {
    /// Package name
    pub package: String,
    /// What the check found
    pub kind: UpdateKind,
    /// Version carried by a stable or pre-release update
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Link carried by a stable or pre-release update
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Error message for a failed check
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UpdateEvent {
    fn new(package: impl Into<String>, kind: UpdateKind) -> Self {
        Self {
            package: package.into(),
            kind,
            version: None,
            link: None,
            error: None,
        }
    }

    /// Creates a stable update event
    pub fn stable(
        package: impl Into<String>,
        version: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            version: Some(version.into()),
            link: Some(link.into()),
            ..Self::new(package, UpdateKind::Stable)
        }
    }

    /// Creates a pre-release update event
    pub fn prerelease(
        package: impl Into<String>,
        version: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            version: Some(version.into()),
            link: Some(link.into()),
            ..Self::new(package, UpdateKind::Prerelease)
        }
    }

    /// Creates an event for a package with no new version
    pub fn no_change(package: impl Into<String>) -> Self {
        Self::new(package, UpdateKind::NoChange)
    }

    /// Creates an event for a package that could not be checked
    pub fn error(package: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::new(package, UpdateKind::Error)
        }
    }

    /// Returns true if the record was updated
    pub fn is_update(&self) -> bool {
        self.kind.is_update()
    }

    /// Returns true if the check failed
    pub fn is_error(&self) -> bool {
        self.kind == UpdateKind::Error
    }
}

impl fmt::Display for UpdateEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            UpdateKind::Stable | UpdateKind::Prerelease => write!(
                f,
                "{}: {} {}",
                self.package,
                self.kind,
                self.version.as_deref().unwrap_or("")
            ),
            UpdateKind::NoChange => write!(f, "{}: no change", self.package),
            UpdateKind::Error => write!(
                f,
                "{}: error ({})",
                self.package,
                self.error.as_deref().unwrap_or("unknown error")
            ),
        }
    }
}
