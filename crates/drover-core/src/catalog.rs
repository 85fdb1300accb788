use crate::error::{Error, Result};
use crate::similarity;
use serde::{Deserialize, Serialize};

/// The platform whose chromedriver build every lookup filters on
pub const TARGET_PLATFORM: &str = "mac-x64";

/// Top-level known-good-versions catalog document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub timestamp: String,
    pub versions: Vec<CatalogEntry>,
}

/// One published Chrome-for-Testing build
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub version: String,
    // Early catalog entries predate chromedriver builds and omit the key
    #[serde(default)]
    pub downloads: Downloads,
}

/// Per-artifact download lists; only chromedriver is consumed here
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Downloads {
    #[serde(default)]
    pub chromedriver: Vec<PlatformDownload>,
}

/// A single per-platform chromedriver download
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformDownload {
    pub platform: String,
    pub url: String,
}

impl Catalog {
    /// Parse a catalog from its JSON representation
    pub fn from_json(content: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(content)?;
        tracing::debug!("Parsed catalog with {} versions", catalog.versions.len());
        Ok(catalog)
    }

    /// Find the entry whose version string is most similar to `version`.
    ///
    /// The running best is replaced only on strict improvement, so equal
    /// ratios resolve to the earliest entry in catalog order. Returns
    /// `None` only when the catalog has no versions.
    pub fn best_match(&self, version: &str) -> Option<&CatalogEntry> {
        let mut best: Option<(f64, &CatalogEntry)> = None;

        for entry in &self.versions {
            let score = similarity::ratio(&entry.version, version);
            match best {
                Some((best_score, _)) if score <= best_score => {}
                _ => best = Some((score, entry)),
            }
        }

        best.map(|(_, entry)| entry)
    }
}

impl CatalogEntry {
    /// Download URL of this entry's chromedriver build for `platform`
    pub fn download_url(&self, platform: &str) -> Result<&str> {
        self.downloads
            .chromedriver
            .iter()
            .find(|download| download.platform == platform)
            .map(|download| download.url.as_str())
            .ok_or_else(|| Error::PlatformNotFound(platform.to_string()))
    }
}
