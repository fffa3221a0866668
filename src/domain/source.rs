//! Source kind definitions for supported upstream registries

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported upstream registries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Python Package Index
    Pypi,
    /// Comprehensive R Archive Network
    Cran,
    /// Bioconductor software packages
    Bioconductor,
    /// GitHub release pages
    Github,
}

impl SourceKind {
    /// Returns the configuration key for this source
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Pypi => "pypi",
            SourceKind::Cran => "cran",
            SourceKind::Bioconductor => "bioconductor",
            SourceKind::Github => "github",
        }
    }

    /// Returns the display name for this source
    pub fn display_name(&self) -> &'static str {
        match self {
            SourceKind::Pypi => "PyPI",
            SourceKind::Cran => "CRAN",
            SourceKind::Bioconductor => "Bioconductor",
            SourceKind::Github => "GitHub",
        }
    }

    /// Returns all supported sources
    pub fn all() -> &'static [SourceKind] {
        &[
            SourceKind::Pypi,
            SourceKind::Cran,
            SourceKind::Bioconductor,
            SourceKind::Github,
        ]
    }
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SourceKind::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown source '{}'", s))
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_known_sources() {
        assert_eq!("pypi".parse::<SourceKind>().unwrap(), SourceKind::Pypi);
        assert_eq!("cran".parse::<SourceKind>().unwrap(), SourceKind::Cran);
        assert_eq!(
            "bioconductor".parse::<SourceKind>().unwrap(),
            SourceKind::Bioconductor
        );
        assert_eq!("github".parse::<SourceKind>().unwrap(), SourceKind::Github);
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        assert!("PyPI".parse::<SourceKind>().is_err());
        assert!("GITHUB".parse::<SourceKind>().is_err());
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "npm".parse::<SourceKind>().unwrap_err();
        assert!(err.contains("npm"));
    }

    #[test]
    fn test_as_str_round_trips_all() {
        for kind in SourceKind::all() {
            assert_eq!(kind.as_str().parse::<SourceKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", SourceKind::Pypi), "PyPI");
        assert_eq!(format!("{}", SourceKind::Cran), "CRAN");
        assert_eq!(format!("{}", SourceKind::Github), "GitHub");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&SourceKind::Bioconductor).unwrap();
        assert_eq!(json, "\"bioconductor\"");
    }
}
