//! Application error types using thiserror
//!
//! Error hierarchy:
//! - AppError: Fatal startup errors (configuration, HTTP client)
//! - ConfigError: Issues loading the package configuration (fatal)
//! - SourceError: Issues checking one package upstream (recoverable per package)

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The shared HTTP client could not be built
    #[error("failed to create HTTP client: {message}")]
    HttpClient { message: String },
}

/// Errors related to the package configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read configuration file
    #[error("failed to read configuration file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },
}

/// Errors related to checking a package upstream
#[derive(Error, Debug)]
pub enum SourceError {
    /// Source name is not one of the supported registries
    #[error("unknown source '{source_name}' for package '{package}'")]
    UnknownSource {
        package: String,
        source_name: String,
    },

    /// Package has no page in the registry
    #[error("package '{package}' not found on {source_name}")]
    PackageNotFound {
        package: String,
        source_name: String,
    },

    /// Page did not match the expected extraction rule
    #[error("malformed response from {source_name} for '{package}': {message}")]
    MalformedResponse {
        package: String,
        source_name: String,
        message: String,
    },

    /// Network request failed
    #[error("failed to fetch package '{package}' from {source_name}: {message}")]
    Network {
        package: String,
        source_name: String,
        message: String,
    },

    /// Timeout
    #[error("timeout while fetching '{package}' from {source_name}")]
    Timeout {
        package: String,
        source_name: String,
    },
}

impl AppError {
    /// Creates a new HttpClient error
    pub fn http_client(message: impl Into<String>) -> Self {
        AppError::HttpClient {
            message: message.into(),
        }
    }
}

impl ConfigError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ConfigError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConfigError::JsonParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl SourceError {
    /// Creates a new UnknownSource error
    pub fn unknown_source(package: impl Into<String>, source_name: impl Into<String>) -> Self {
        SourceError::UnknownSource {
            package: package.into(),
            source_name: source_name.into(),
        }
    }

    /// Creates a new PackageNotFound error
    pub fn package_not_found(package: impl Into<String>, source_name: impl Into<String>) -> Self {
        SourceError::PackageNotFound {
            package: package.into(),
            source_name: source_name.into(),
        }
    }

    /// Creates a new MalformedResponse error
    pub fn malformed_response(
        package: impl Into<String>,
        source_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        SourceError::MalformedResponse {
            package: package.into(),
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Creates a new Network error
    pub fn network(
        package: impl Into<String>,
        source_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        SourceError::Network {
            package: package.into(),
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(package: impl Into<String>, source_name: impl Into<String>) -> Self {
        SourceError::Timeout {
            package: package.into(),
            source_name: source_name.into(),
        }
    }

    /// Returns true for errors meaning "no usable data upstream"
    ///
    /// Timeouts and malformed pages are grouped with a missing page.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            SourceError::PackageNotFound { .. }
                | SourceError::MalformedResponse { .. }
                | SourceError::Timeout { .. }
        )
    }

    /// Returns the package this error refers to
    pub fn package(&self) -> &str {
        match self {
            SourceError::UnknownSource { package, .. }
            | SourceError::PackageNotFound { package, .. }
            | SourceError::MalformedResponse { package, .. }
            | SourceError::Network { package, .. }
            | SourceError::Timeout { package, .. } => package,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_not_found() {
        let err = ConfigError::not_found("/path/to/packages.json");
        let msg = format!("{}", err);
        assert!(msg.contains("configuration file not found"));
        assert!(msg.contains("packages.json"));
    }

    #[test]
    fn test_config_error_json_parse() {
        let err = ConfigError::json_parse_error("/path/to/packages.json", "expected value");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to parse JSON"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn test_config_error_read() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ConfigError::read_error("/etc/packages.json", io);
        let msg = format!("{}", err);
        assert!(msg.contains("failed to read"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_source_error_unknown_source() {
        let err = SourceError::unknown_source("foo", "npm");
        let msg = format!("{}", err);
        assert!(msg.contains("unknown source 'npm'"));
        assert!(msg.contains("foo"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_source_error_package_not_found() {
        let err = SourceError::package_not_found("ggplot3", "CRAN");
        let msg = format!("{}", err);
        assert!(msg.contains("package 'ggplot3' not found on CRAN"));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_source_error_malformed_is_not_found() {
        let err = SourceError::malformed_response("foo", "PyPI", "no release version element");
        assert!(err.is_not_found());
        assert!(err.to_string().contains("no release version element"));
    }

    #[test]
    fn test_source_error_timeout_is_not_found() {
        let err = SourceError::timeout("foo", "GitHub");
        assert!(err.is_not_found());
        assert!(err.to_string().contains("timeout"));
    }

    #[test]
    fn test_source_error_network() {
        let err = SourceError::network("foo", "PyPI", "connection refused");
        assert!(err.to_string().contains("connection refused"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_source_error_package() {
        assert_eq!(SourceError::timeout("foo", "PyPI").package(), "foo");
        assert_eq!(SourceError::unknown_source("bar", "x").package(), "bar");
    }

    #[test]
    fn test_app_error_from_config_error() {
        let app_err: AppError = ConfigError::not_found("/missing.json").into();
        assert!(app_err.to_string().contains("configuration file not found"));
    }

    #[test]
    fn test_app_error_http_client() {
        let app_err = AppError::http_client("no TLS backend");
        let msg = app_err.to_string();
        assert_eq!(msg, "failed to create HTTP client: no TLS backend");
        assert!(!msg.contains("''"));
    }
}
