//! GitHub releases page adapter
//!
//! Reads the tag of the release badged `Latest`.
//! Page: https://github.com/{owner}/{repo}/releases.html

use crate::domain::{Observation, SourceKind};
use crate::error::SourceError;
use crate::registry::{extract, HttpClient, SourceAdapter};
use async_trait::async_trait;

/// GitHub base URL
const GITHUB_URL: &str = "https://github.com";

/// GitHub releases adapter
pub struct GitHubAdapter {
    client: HttpClient,
    base_url: String,
}

impl GitHubAdapter {
    /// Create a new GitHub adapter
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, GITHUB_URL)
    }

    /// Create a GitHub adapter against another host (for testing)
    pub fn with_base_url(client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Build the releases page URL; `package` is `owner/repo`
    fn build_url(&self, package: &str) -> String {
        format!("{}/{}/releases.html", self.base_url, package)
    }

    fn parse_page(&self, package: &str, html: &str, url: &str) -> Result<Observation, SourceError> {
        let tag = extract::latest_release_tag(html).ok_or_else(|| {
            SourceError::malformed_response(
                package,
                self.source().display_name(),
                "no release marked Latest",
            )
        })?;
        Ok(Observation::classified(tag, url))
    }
}

#[async_trait]
impl SourceAdapter for GitHubAdapter {
    fn source(&self) -> SourceKind {
        SourceKind::Github
    }

    async fn fetch(&self, package: &str) -> Result<Observation, SourceError> {
        let url = self.build_url(package);
        let html = self
            .client
            .get_text(&url, package, self.source().display_name())
            .await?;
        self.parse_page(package, &html, &url)
    }
}
