//! Video metadata lookup.
//!
//! Resolves display metadata (title, description, view/like counts) for the
//! YouTube video IDs attached to an article. The lookup is best-effort:
//! without an API key it is skipped entirely, and if any video in a batch
//! fails, the whole batch falls back to embed-only rendering so the result
//! stays consistent. A failure here is never surfaced to the user.

use futures::future::join_all;
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::VideoConfig;
use crate::utils::http;

/// How the video section of an article should be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoSection {
    /// Plain iframes only, no fetched metadata.
    Embedded(Vec<String>),
    /// Iframes enriched with fetched metadata.
    Detailed(Vec<VideoInfo>),
}

/// Fetched metadata for one video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub view_count: Option<u64>,
    pub like_count: Option<u64>,
}

/// Wire format of the metadata API response.
#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    id: String,
    snippet: Snippet,
    statistics: Option<Statistics>,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    title: String,
    #[serde(default)]
    description: String,
}

/// Counts arrive as JSON strings, not numbers.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Statistics {
    #[serde(default)]
    view_count: Option<String>,
    #[serde(default)]
    like_count: Option<String>,
}

/// Client for the video metadata API.
pub struct VideoLookup {
    config: VideoConfig,
    client: reqwest::Client,
}

impl VideoLookup {
    pub fn new(config: VideoConfig) -> Result<Self> {
        let client = http::create_client(
            "Mozilla/5.0 (compatible; techblog/0.1)",
            config.timeout_secs,
        )?;
        Ok(Self { config, client })
    }

    /// Whether metadata lookup is enabled at all.
    pub fn has_credentials(&self) -> bool {
        !self.config.api_key.trim().is_empty()
    }

    /// Resolve the video section for a batch of IDs.
    ///
    /// No credential, or any failure within the batch, yields
    /// `VideoSection::Embedded` for ALL requested IDs; there is no partial
    /// success state.
    pub async fn resolve(&self, ids: &[String]) -> VideoSection {
        if ids.is_empty() {
            return VideoSection::Embedded(Vec::new());
        }
        if !self.has_credentials() {
            return VideoSection::Embedded(ids.to_vec());
        }

        let lookups = ids.iter().map(|id| self.fetch_one(id));
        let results: Vec<Result<VideoInfo>> = join_all(lookups).await;

        let mut infos = Vec::with_capacity(ids.len());
        for result in results {
            match result {
                Ok(info) => infos.push(info),
                Err(e) => {
                    log::warn!("Video lookup failed, falling back to embeds: {}", e);
                    return VideoSection::Embedded(ids.to_vec());
                }
            }
        }
        VideoSection::Detailed(infos)
    }

    /// Fetch metadata for a single video ID.
    async fn fetch_one(&self, id: &str) -> Result<VideoInfo> {
        let url = format!(
            "{}/videos?part=snippet,statistics&id={}&key={}",
            self.config.api_base.trim_end_matches('/'),
            id,
            self.config.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?;

        let body: VideoListResponse = response.json().await?;
        let item = body
            .items
            .into_iter()
            .next()
            .ok_or_else(|| AppError::video(format!("video {} not found", id)))?;

        Ok(VideoInfo {
            id: item.id,
            title: item.snippet.title,
            description: item.snippet.description,
            view_count: item
                .statistics
                .as_ref()
                .and_then(|s| s.view_count.as_deref())
                .and_then(|v| v.parse().ok()),
            like_count: item
                .statistics
                .as_ref()
                .and_then(|s| s.like_count.as_deref())
                .and_then(|v| v.parse().ok()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(api_key: &str, api_base: &str) -> VideoLookup {
        let mut config = VideoConfig::default();
        config.api_key = api_key.to_string();
        config.api_base = api_base.to_string();
        config.timeout_secs = 1;
        VideoLookup::new(config).unwrap()
    }

    #[tokio::test]
    async fn no_credential_skips_lookup_entirely() {
        let lookup = lookup("", "https://unreachable.invalid");
        let ids = vec!["abc".to_string(), "def".to_string()];
        let section = lookup.resolve(&ids).await;
        assert_eq!(section, VideoSection::Embedded(ids));
    }

    #[tokio::test]
    async fn empty_batch_is_empty_embeds() {
        let lookup = lookup("key", "https://unreachable.invalid");
        assert_eq!(lookup.resolve(&[]).await, VideoSection::Embedded(vec![]));
    }

    #[tokio::test]
    async fn batch_failure_falls_back_to_embeds_for_all() {
        // Unresolvable host: every fetch in the batch errors, and the whole
        // batch must degrade to embed-only with no partial success.
        let lookup = lookup("key", "https://unreachable.invalid");
        let ids = vec!["abc".to_string(), "def".to_string()];
        let section = lookup.resolve(&ids).await;
        assert_eq!(section, VideoSection::Embedded(ids));
    }

    #[test]
    fn response_decoding_with_string_counts() {
        let json = r#"{
            "items": [{
                "id": "abc",
                "snippet": { "title": "A Video", "description": "About things" },
                "statistics": { "viewCount": "1234567", "likeCount": "890" }
            }]
        }"#;
        let response: VideoListResponse = serde_json::from_str(json).unwrap();
        let item = &response.items[0];
        assert_eq!(item.snippet.title, "A Video");
        assert_eq!(item.statistics.as_ref().unwrap().view_count.as_deref(), Some("1234567"));
    }

    #[test]
    fn response_decoding_without_statistics() {
        let json = r#"{"items": [{"id": "x", "snippet": {"title": "T"}}]}"#;
        let response: VideoListResponse = serde_json::from_str(json).unwrap();
        assert!(response.items[0].statistics.is_none());
        assert_eq!(response.items[0].snippet.description, "");
    }
}
