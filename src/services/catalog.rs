//! Catalog loading.
//!
//! The catalog is a static JSON document (`{ "articles": [...] }`) fetched
//! once at startup, either from a local file or over HTTP. A load failure
//! is fatal to the initial display: no partial catalog is ever accepted,
//! the collection stays empty, and the caller shows a retry-capable error.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::models::{Catalog, CatalogConfig};
use crate::utils::http;

/// A read-only source for the article catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Where this source reads from, for error context.
    fn location(&self) -> String;

    /// Load and decode the full catalog.
    async fn load(&self) -> Result<Catalog>;
}

/// Catalog stored in a local JSON file.
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<Catalog> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| AppError::catalog(self.location(), e))?;
        Catalog::from_json(&bytes).map_err(|e| AppError::catalog(self.location(), e))
    }
}

/// Catalog served over HTTP.
pub struct HttpCatalogSource {
    url: String,
    client: reqwest::Client,
}

impl HttpCatalogSource {
    pub fn new(url: impl Into<String>, config: &CatalogConfig) -> Result<Self> {
        Ok(Self {
            url: url.into(),
            client: http::create_client(&config.user_agent, config.timeout_secs)?,
        })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    fn location(&self) -> String {
        self.url.clone()
    }

    async fn load(&self) -> Result<Catalog> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| AppError::catalog(&self.url, e))?;

        let response = response
            .error_for_status()
            .map_err(|e| AppError::catalog(&self.url, e))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::catalog(&self.url, e))?;
        Catalog::from_json(&bytes).map_err(|e| AppError::catalog(&self.url, e))
    }
}

/// Pick the catalog source implied by the configured location: http(s)
/// URLs go over the network, everything else is a local path.
pub fn source_for(config: &CatalogConfig) -> Result<Box<dyn CatalogSource>> {
    let source = config.source.trim();
    if source.starts_with("http://") || source.starts_with("https://") {
        Ok(Box::new(HttpCatalogSource::new(source, config)?))
    } else {
        Ok(Box::new(FileCatalogSource::new(source)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn file_source_loads_valid_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"articles": [{{
                "id": 1, "title": "T", "excerpt": "E", "content": "C",
                "category": "web", "author": "A", "date": "2024-01-01"
            }}]}}"#
        )
        .unwrap();

        let source = FileCatalogSource::new(file.path());
        let catalog = source.load().await.unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.articles[0].title, "T");
    }

    #[tokio::test]
    async fn file_source_missing_file_is_fatal() {
        let source = FileCatalogSource::new("/nonexistent/articles.json");
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, AppError::Catalog { .. }));
    }

    #[tokio::test]
    async fn file_source_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let source = FileCatalogSource::new(file.path());
        assert!(source.load().await.is_err());
    }

    #[test]
    fn source_selection_by_scheme() {
        let mut config = CatalogConfig::default();
        config.source = "https://example.com/articles.json".to_string();
        let source = source_for(&config).unwrap();
        assert_eq!(source.location(), "https://example.com/articles.json");

        config.source = "data/articles.json".to_string();
        let source = source_for(&config).unwrap();
        assert_eq!(source.location(), "data/articles.json");
    }
}
