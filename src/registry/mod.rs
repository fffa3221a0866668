//! Source adapters for fetching the latest release of a package
//!
//! This module provides:
//! - HTTP client shared foundation with retry logic
//! - Markup extraction rules
//! - PyPI, CRAN, Bioconductor and GitHub adapters
//! - The registry mapping each source kind to its adapter

mod bioconductor;
mod client;
mod cran;
pub mod extract;
mod github;
mod pypi;

pub use bioconductor::BioconductorAdapter;
pub use client::{HttpClient, DEFAULT_TIMEOUT, MAX_RETRIES};
pub use cran::CranAdapter;
pub use github::GitHubAdapter;
pub use pypi::PyPIAdapter;

use crate::domain::{Observation, SourceKind};
use crate::error::SourceError;
use async_trait::async_trait;
use std::collections::HashMap;

/// Trait for source adapters
#[async_trait]
pub trait SourceAdapter: Send + Sync {
    /// Get the source this adapter handles
    fn source(&self) -> SourceKind;

    /// Fetch the latest release of a package
    async fn fetch(&self, package: &str) -> Result<Observation, SourceError>;
}

/// Create a source adapter for the given source kind
pub fn create_adapter(source: SourceKind, client: HttpClient) -> Box<dyn SourceAdapter> {
    match source {
        SourceKind::Pypi => Box::new(PyPIAdapter::new(client)),
        SourceKind::Cran => Box::new(CranAdapter::new(client)),
        SourceKind::Bioconductor => Box::new(BioconductorAdapter::new(client)),
        SourceKind::Github => Box::new(GitHubAdapter::new(client)),
    }
}

/// Create a source adapter pointed at another host (for testing)
pub fn create_adapter_with_base_url(
    source: SourceKind,
    client: HttpClient,
    base_url: &str,
) -> Box<dyn SourceAdapter> {
    match source {
        SourceKind::Pypi => Box::new(PyPIAdapter::with_base_url(client, base_url)),
        SourceKind::Cran => Box::new(CranAdapter::with_base_url(client, base_url)),
        SourceKind::Bioconductor => Box::new(BioconductorAdapter::with_base_url(client, base_url)),
        SourceKind::Github => Box::new(GitHubAdapter::with_base_url(client, base_url)),
    }
}

/// Adapters keyed by source kind, built once at startup
pub struct Registry {
    adapters: HashMap<SourceKind, Box<dyn SourceAdapter>>,
}

impl Registry {
    /// Create a registry with an adapter for every supported source
    pub fn new(client: HttpClient) -> Self {
        SourceKind::all()
            .iter()
            .fold(Self::empty(), |registry, &source| {
                registry.with_adapter(create_adapter(source, client.clone()))
            })
    }

    /// Create a registry with every adapter pointed at one host (for testing)
    pub fn with_base_url(client: HttpClient, base_url: &str) -> Self {
        SourceKind::all()
            .iter()
            .fold(Self::empty(), |registry, &source| {
                registry.with_adapter(create_adapter_with_base_url(
                    source,
                    client.clone(),
                    base_url,
                ))
            })
    }

    /// Create a registry with no adapters
    pub fn empty() -> Self {
        Self {
            adapters: HashMap::new(),
        }
    }

    /// Register an adapter under the source it reports, replacing any previous one
    pub fn with_adapter(mut self, adapter: Box<dyn SourceAdapter>) -> Self {
        self.adapters.insert(adapter.source(), adapter);
        self
    }

    /// Find the adapter for a configured source name
    pub fn resolve(
        &self,
        package: &str,
        source_name: &str,
    ) -> Result<&dyn SourceAdapter, SourceError> {
        source_name
            .parse::<SourceKind>()
            .ok()
            .and_then(|source| self.adapters.get(&source))
            .map(|adapter| adapter.as_ref())
            .ok_or_else(|| SourceError::unknown_source(package, source_name))
    }
}
