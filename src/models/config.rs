//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Catalog source settings
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Card list and search behavior settings
    #[serde(default)]
    pub display: DisplayConfig,

    /// Video metadata lookup settings
    #[serde(default)]
    pub videos: VideoConfig,

    /// Site identity used for share links
    #[serde(default)]
    pub site: SiteConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.catalog.source.trim().is_empty() {
            return Err(AppError::validation("catalog.source is empty"));
        }
        if self.catalog.timeout_secs == 0 {
            return Err(AppError::validation("catalog.timeout_secs must be > 0"));
        }
        if self.display.articles_per_page == 0 {
            return Err(AppError::validation(
                "display.articles_per_page must be > 0",
            ));
        }
        if self.videos.api_base.trim().is_empty() {
            return Err(AppError::validation("videos.api_base is empty"));
        }
        url::Url::parse(&self.site.page_url)
            .map_err(|e| AppError::validation(format!("site.page_url is invalid: {e}")))?;
        Ok(())
    }
}

/// Catalog source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog location: a local file path or an http(s) URL
    #[serde(default = "defaults::catalog_source")]
    pub source: String,

    /// Request timeout in seconds for remote catalogs
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: defaults::catalog_source(),
            timeout_secs: defaults::timeout(),
            user_agent: defaults::user_agent(),
        }
    }
}

/// Card list and search behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Fixed page size for the card list
    #[serde(default = "defaults::articles_per_page")]
    pub articles_per_page: usize,

    /// Idle window for coalescing search input, in milliseconds
    #[serde(default = "defaults::search_debounce_ms")]
    pub search_debounce_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            articles_per_page: defaults::articles_per_page(),
            search_debounce_ms: defaults::search_debounce_ms(),
        }
    }
}

/// Video metadata lookup settings.
///
/// Without an API key the lookup is skipped entirely and videos are
/// rendered embed-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoConfig {
    /// YouTube Data API key; empty means embed-only rendering
    #[serde(default)]
    pub api_key: String,

    /// Base URL of the metadata API
    #[serde(default = "defaults::video_api_base")]
    pub api_base: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: defaults::video_api_base(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Site identity used when building share links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Canonical page URL shared via Twitter/LinkedIn/email
    #[serde(default = "defaults::page_url")]
    pub page_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            page_url: defaults::page_url(),
        }
    }
}

mod defaults {
    pub fn catalog_source() -> String {
        "articles.json".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; techblog/0.1)".into()
    }
    pub fn articles_per_page() -> usize {
        6
    }
    pub fn search_debounce_ms() -> u64 {
        300
    }
    pub fn video_api_base() -> String {
        "https://www.googleapis.com/youtube/v3".into()
    }
    pub fn page_url() -> String {
        "https://techblog.example/".into()
    }
}
