//! Article and catalog data structures.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// A single blog article, immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    /// Unique identifier within the catalog
    pub id: u64,

    /// Article title
    pub title: String,

    /// Short summary shown on the card
    pub excerpt: String,

    /// Full body text, may contain markdown-like syntax
    pub content: String,

    /// Category slug
    pub category: Category,

    /// Author display name
    pub author: String,

    /// Publication date as an ISO date string (YYYY-MM-DD)
    pub date: String,

    /// Estimated reading time display string (e.g. "8 min")
    #[serde(rename = "readTime", default)]
    pub read_time: String,

    /// View counter, display only
    #[serde(default)]
    pub views: u64,

    /// Like counter, display only
    #[serde(default)]
    pub likes: u64,

    /// Optional cover image URL
    #[serde(default)]
    pub image: Option<String>,

    /// Tags used for search matching
    #[serde(default)]
    pub tags: Vec<String>,

    /// Optional YouTube video identifiers
    #[serde(rename = "youtubeVideos", default)]
    pub youtube_videos: Vec<String>,

    /// Optional external resource links
    #[serde(default)]
    pub resources: Vec<Resource>,
}

/// An external resource link attached to an article.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resource {
    pub title: String,
    pub url: String,
}

/// Article category.
///
/// The recognized set is closed; anything else is carried verbatim and
/// displayed as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Programming,
    Web,
    Security,
    Databases,
    Systems,
    Ai,
    History,
    Other(String),
}

impl Category {
    /// Slug as it appears in the catalog file.
    pub fn slug(&self) -> &str {
        match self {
            Category::Programming => "programming",
            Category::Web => "web",
            Category::Security => "security",
            Category::Databases => "databases",
            Category::Systems => "systems",
            Category::Ai => "ai",
            Category::History => "history",
            Category::Other(s) => s,
        }
    }

    /// Human-readable display name; unrecognized slugs fall back verbatim.
    pub fn display_name(&self) -> &str {
        match self {
            Category::Programming => "Programming",
            Category::Web => "Web Development",
            Category::Security => "Cybersecurity",
            Category::Databases => "Databases",
            Category::Systems => "Systems",
            Category::Ai => "Artificial Intelligence",
            Category::History => "History",
            Category::Other(s) => s,
        }
    }

    /// The recognized categories, in display order.
    pub fn known() -> [Category; 7] {
        [
            Category::Programming,
            Category::Web,
            Category::Security,
            Category::Databases,
            Category::Systems,
            Category::Ai,
            Category::History,
        ]
    }

    /// Icon class used when an article has no cover image.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Programming => "fa-code",
            Category::Web => "fa-globe",
            Category::Security => "fa-shield-alt",
            Category::Databases => "fa-database",
            Category::Systems => "fa-server",
            Category::Ai => "fa-brain",
            Category::History | Category::Other(_) => "fa-file-alt",
        }
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        match s.as_str() {
            "programming" => Category::Programming,
            "web" => Category::Web,
            "security" => Category::Security,
            "databases" => Category::Databases,
            "systems" => Category::Systems,
            "ai" => Category::Ai,
            "history" => Category::History,
            _ => Category::Other(s),
        }
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.slug().to_string()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// The full article catalog as loaded from the external data file.
///
/// Wire format: `{ "articles": [ ... ] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub articles: Vec<Article>,
}

impl Catalog {
    /// Decode a catalog from raw JSON bytes and validate it.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let catalog: Catalog = serde_json::from_slice(bytes)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Validate catalog invariants: article IDs must be unique.
    pub fn validate(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for article in &self.articles {
            if !seen.insert(article.id) {
                return Err(AppError::validation(format!(
                    "duplicate article id {}",
                    article.id
                )));
            }
        }
        Ok(())
    }

    /// Look up an article by ID.
    pub fn find(&self, id: u64) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
