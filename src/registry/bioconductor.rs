//! Bioconductor package page adapter
//!
//! Reads the version row of a software package's landing page.
//! Page: https://www.bioconductor.org/packages/release/bioc/html/{package}.html

use crate::domain::{Observation, SourceKind};
use crate::error::SourceError;
use crate::registry::{extract, HttpClient, SourceAdapter};
use async_trait::async_trait;

/// Bioconductor base URL
const BIOCONDUCTOR_URL: &str = "https://www.bioconductor.org";

/// Label of the table cell preceding the version
const VERSION_LABEL: &str = "Version";

/// Bioconductor adapter
pub struct BioconductorAdapter {
    client: HttpClient,
    base_url: String,
}

impl BioconductorAdapter {
    /// Create a new Bioconductor adapter
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, BIOCONDUCTOR_URL)
    }

    /// Create a Bioconductor adapter against another host (for testing)
    pub fn with_base_url(client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Build the package page URL
    fn build_url(&self, package: &str) -> String {
        format!(
            "{}/packages/release/bioc/html/{}.html",
            self.base_url, package
        )
    }

    fn parse_page(&self, package: &str, html: &str, url: &str) -> Result<Observation, SourceError> {
        match extract::labeled_cell(html, VERSION_LABEL) {
            Some(version) if !version.is_empty() => Ok(Observation::classified(version, url)),
            _ => Err(SourceError::malformed_response(
                package,
                self.source().display_name(),
                format!("no '{}' row", VERSION_LABEL),
            )),
        }
    }
}

#[async_trait]
impl SourceAdapter for BioconductorAdapter {
    fn source(&self) -> SourceKind {
        SourceKind::Bioconductor
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
