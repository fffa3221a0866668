//! PyPI project page adapter
//!
//! Reads the release history of a project page.
//! Page: https://pypi.org/project/{package}/#history

use crate::domain::{Observation, SourceKind};
use crate::error::SourceError;
use crate::registry::{extract, HttpClient, SourceAdapter};
use async_trait::async_trait;

/// PyPI base URL
const PYPI_URL: &str = "https://pypi.org";

/// Class of the element holding a release version in the history list
const RELEASE_VERSION_CLASS: &str = "release__version";

/// PyPI adapter
pub struct PyPIAdapter {
    client: HttpClient,
    base_url: String,
}

impl PyPIAdapter {
    /// Create a new PyPI adapter
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, PYPI_URL)
    }

    /// Create a PyPI adapter against another host (for testing)
    pub fn with_base_url(client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Build the history page URL for a package
    fn build_url(&self, package: &str) -> String {
        format!("{}/project/{}/#history", self.base_url, package)
    }

    /// Build the release link for a package version
    fn build_link(&self, package: &str, version: &str) -> String {
        format!("{}/project/{}/{}/", self.base_url, package, version)
    }

    /// Extract the newest release from a history page
    ///
    /// The release element carries a `pre-release` badge for pre-releases, so
    /// stability is decided on the whole element text and the version is its
    /// first line.
    fn parse_page(&self, package: &str, html: &str) -> Result<Observation, SourceError> {
        let text = extract::paragraph_with_class(html, RELEASE_VERSION_CLASS).ok_or_else(|| {
            SourceError::malformed_response(
                package,
                self.source().display_name(),
                "no release version element",
            )
        })?;

        let is_stable = Observation::classify(&text);
        let version = text.lines().next().unwrap_or("").trim();
        if version.is_empty() {
            return Err(SourceError::malformed_response(
                package,
                self.source().display_name(),
                "empty release version",
            ));
        }

        Ok(Observation::new(
            version,
            is_stable,
            self.build_link(package, version),
        ))
    }
}

#[async_trait]
impl SourceAdapter for PyPIAdapter {
    fn source(&self) -> SourceKind {
        SourceKind::Pypi
    }

    async fn fetch(&self, package: &str) -> Result<Observation, SourceError> {
        let url = self.build_url(package);
        let html = self
            .client
            .get_text(&url, package, self.source().display_name())
            .await?;
        self.parse_page(package, &html)
    }
}
