use crate::error::{Error, Result};
use drover_core::{Catalog, TARGET_PLATFORM};

/// The known-good-versions-with-downloads catalog published for
/// Chrome for Testing
pub const CATALOG_URL: &str =
    "https://googlechromelabs.github.io/chrome-for-testing/known-good-versions-with-downloads.json";

/// Fetches the driver catalog and resolves download URLs against it.
///
/// Every resolution re-fetches the catalog; nothing is cached between
/// calls.
pub struct CatalogClient {
    http: reqwest::Client,
    endpoint: String,
}

impl CatalogClient {
    /// Client against the public catalog endpoint
    pub fn new() -> Self {
        Self::with_endpoint(CATALOG_URL)
    }

    /// Client against an alternative catalog endpoint
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// The underlying HTTP client, shared with the archive download
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Resolve the chromedriver download URL whose catalog version best
    /// matches `version` for the target platform
    pub async fn resolve_download_url(&self, version: &str) -> Result<String> {
        if version.trim().is_empty() {
            return Err(Error::EmptyVersion);
        }

        tracing::debug!("Fetching driver catalog from: {}", self.endpoint);

        let response = self.http.get(&self.endpoint).send().await?;
        if !response.status().is_success() {
            return Err(Error::HttpStatus {
                status: response.status(),
                url: self.endpoint.clone(),
            });
        }

        let body = response.text().await?;
        let catalog = Catalog::from_json(&body)?;

        let entry = catalog
            .best_match(version)
            .ok_or(Error::Catalog(drover_core::Error::EmptyCatalog))?;
        tracing::info!("Best catalog match for {}: {}", version, entry.version);

        let url = entry.download_url(TARGET_PLATFORM)?;
        Ok(url.to_string())
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}
