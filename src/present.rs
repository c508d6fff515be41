// src/present.rs

//! Article detail presentation.
//!
//! Expands an article into the full rendering payload consumed by a
//! presentation surface: header metadata, formatted body, optional video
//! section, optional resources, and share links. Card summaries for the
//! list view are built here too.

use url::Url;

use crate::error::Result;
use crate::format::format_content;
use crate::models::{Article, Resource, SiteConfig};
use crate::services::{VideoLookup, VideoSection};
use crate::utils::format_date;

/// Summary payload for one article card in the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCard {
    pub id: u64,
    pub title: String,
    pub excerpt: String,
    pub category_label: String,
    pub category_icon: &'static str,
    pub date_display: String,
    pub image: Option<String>,
    pub views: u64,
    pub likes: u64,
    pub read_time: String,
}

/// Full rendering payload for the article detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDetail {
    pub title: String,
    pub category_label: String,
    pub date_display: String,
    pub author: String,
    pub read_time: String,
    pub views: u64,
    pub likes: u64,
    pub tags: Vec<String>,
    /// Body, already formatted to HTML exactly once.
    pub body_html: String,
    /// `None` when the article has no attached videos.
    pub videos: Option<VideoSection>,
    pub resources: Vec<Resource>,
    pub share: ShareLinks,
}

/// Share targets for an article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLinks {
    pub twitter: String,
    pub linkedin: String,
    pub email: String,
}

impl ShareLinks {
    /// Build share links for a title and the configured page URL.
    pub fn build(title: &str, site: &SiteConfig) -> Result<Self> {
        let page = site.page_url.as_str();

        let twitter = Url::parse_with_params(
            "https://twitter.com/intent/tweet",
            &[("text", title), ("url", page)],
        )?
        .to_string();

        let linkedin = Url::parse_with_params(
            "https://www.linkedin.com/sharing/share-offsite/",
            &[("url", page)],
        )?
        .to_string();

        let mut email = Url::parse("mailto:")?;
        email
            .query_pairs_mut()
            .append_pair("subject", title)
            .append_pair("body", &format!("Sharing this article: {}", page));

        Ok(Self {
            twitter,
            linkedin,
            email: email.to_string(),
        })
    }
}

/// Build the card summary for one article.
pub fn build_card(article: &Article) -> ArticleCard {
    ArticleCard {
        id: article.id,
        title: article.title.clone(),
        excerpt: article.excerpt.clone(),
        category_label: article.category.display_name().to_string(),
        category_icon: article.category.icon(),
        date_display: format_date(&article.date),
        image: article.image.clone(),
        views: article.views,
        likes: article.likes,
        read_time: article.read_time.clone(),
    }
}

/// Expand an article into its full detail payload.
///
/// Video metadata is resolved asynchronously through `videos`; any failure
/// there degrades to embed-only rendering and never propagates.
pub async fn present_article(
    article: &Article,
    videos: &VideoLookup,
    site: &SiteConfig,
) -> Result<ArticleDetail> {
    let video_section = if article.youtube_videos.is_empty() {
        None
    } else {
        Some(videos.resolve(&article.youtube_videos).await)
    };

    Ok(ArticleDetail {
        title: article.title.clone(),
        category_label: article.category.display_name().to_string(),
        date_display: format_date(&article.date),
        author: article.author.clone(),
        read_time: article.read_time.clone(),
        views: article.views,
        likes: article.likes,
        tags: article.tags.clone(),
        body_html: format_content(&article.content),
        videos: video_section,
        resources: article.resources.clone(),
        share: ShareLinks::build(&article.title, site)?,
    })
}
