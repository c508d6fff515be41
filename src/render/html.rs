//! HTML surface.
//!
//! Materializes the blog page markup: article cards, the
//! empty/error/loading states, and the modal article detail with video and
//! resource sections. All dynamic text goes through `escape_html`.

use crate::format::escape_html;
use crate::models::RenderMode;
use crate::present::{ArticleCard, ArticleDetail};
use crate::services::{VideoInfo, VideoSection};
use crate::utils::format_count;

use super::Surface;

/// What the card container currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum ListState {
    #[default]
    Cards,
    Empty,
    Error(String),
    Loading,
}

/// A [`Surface`] that materializes HTML strings.
#[derive(Debug, Default)]
pub struct HtmlSurface {
    cards: Vec<String>,
    state: ListState,
    detail: Option<String>,
    load_more_visible: bool,
}

impl HtmlSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The card container contents.
    pub fn article_list(&self) -> String {
        match &self.state {
            ListState::Cards => self.cards.join("\n"),
            ListState::Empty => empty_html(),
            ListState::Error(message) => error_html(message),
            ListState::Loading => loading_html(),
        }
    }

    /// The detail container contents, if a detail view is open.
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn load_more_visible(&self) -> bool {
        self.load_more_visible
    }

    /// Number of visible cards.
    pub fn card_count(&self) -> usize {
        match self.state {
            ListState::Cards => self.cards.len(),
            _ => 0,
        }
    }
}

impl Surface for HtmlSurface {
    fn render_cards(&mut self, cards: &[ArticleCard], _mode: RenderMode) {
        // Both modes replace the container contents; the mode only changes
        // which window the controller hands over.
        self.state = ListState::Cards;
        self.cards = cards.iter().map(card_html).collect();
    }

    fn render_empty(&mut self) {
        self.state = ListState::Empty;
        self.cards.clear();
    }

    fn render_error(&mut self, message: &str) {
        self.state = ListState::Error(message.to_string());
        self.cards.clear();
    }

    fn render_detail(&mut self, detail: &ArticleDetail) {
        self.detail = Some(detail_html(detail));
    }

    fn set_load_more_visible(&mut self, visible: bool) {
        self.load_more_visible = visible;
    }

    fn set_loading(&mut self, loading: bool) {
        if loading {
            self.state = ListState::Loading;
            self.cards.clear();
        } else if self.state == ListState::Loading {
            self.state = ListState::Cards;
        }
    }
}

fn card_html(card: &ArticleCard) -> String {
    let image = match &card.image {
        Some(url) => format!(
            "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
            escape_html(url),
            escape_html(&card.title)
        ),
        None => format!("<i class=\"fas {}\"></i>", card.category_icon),
    };

    format!(
        "<div class=\"article-card\" data-id=\"{id}\">\
         <div class=\"article-image\">{image}</div>\
         <div class=\"article-content\">\
         <div class=\"article-meta\">\
         <span class=\"article-category\">{category}</span>\
         <span class=\"article-date\">{date}</span>\
         </div>\
         <h3 class=\"article-title\">{title}</h3>\
         <p class=\"article-excerpt\">{excerpt}</p>\
         <div class=\"article-footer\">\
         <span class=\"read-more\">Read more</span>\
         <div class=\"article-stats\">\
         <span>{views} views</span>\
         <span>{likes} likes</span>\
         <span>{read_time}</span>\
         </div></div></div></div>",
        id = card.id,
        image = image,
        category = escape_html(&card.category_label),
        date = escape_html(&card.date_display),
        title = escape_html(&card.title),
        excerpt = escape_html(&card.excerpt),
        views = card.views,
        likes = card.likes,
        read_time = escape_html(&card.read_time),
    )
}

fn empty_html() -> String {
    "<div class=\"no-articles\">\
     <h3>No articles found</h3>\
     <p>Try different search terms or filters.</p>\
     </div>"
        .to_string()
}

fn error_html(message: &str) -> String {
    format!(
        "<div class=\"error-message\">\
         <h3>Something went wrong</h3>\
         <p>{}</p>\
         <button class=\"retry-btn\">Try again</button>\
         </div>",
        escape_html(message)
    )
}

fn loading_html() -> String {
    "<div class=\"loading-articles\"><p>Loading articles...</p></div>".to_string()
}

fn detail_html(detail: &ArticleDetail) -> String {
    let tags = if detail.tags.is_empty() {
        String::new()
    } else {
        let spans: Vec<String> = detail
            .tags
            .iter()
            .map(|t| format!("<span class=\"tag\">#{}</span>", escape_html(t)))
            .collect();
        format!("<div class=\"article-tags\">{}</div>", spans.join(""))
    };

    let videos = match &detail.videos {
        Some(section) => video_section_html(section),
        None => String::new(),
    };

    let resources = if detail.resources.is_empty() {
        String::new()
    } else {
        let items: Vec<String> = detail
            .resources
            .iter()
            .map(|r| {
                format!(
                    "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a></li>",
                    escape_html(&r.url),
                    escape_html(&r.title)
                )
            })
            .collect();
        format!(
            "<section class=\"article-resources\"><h3>Additional Resources</h3>\
             <ul>{}</ul></section>",
            items.join("")
        )
    };

    format!(
        "<article class=\"modal-article\">\
         <header class=\"modal-header\">\
         <div class=\"article-meta\">\
         <span class=\"article-category\">{category}</span>\
         <span class=\"article-date\">{date}</span>\
         </div>\
         <h1>{title}</h1>\
         <div class=\"article-info\">\
         <span>{author}</span>\
         <span>{read_time}</span>\
         <span>{views} views</span>\
         <span>{likes} likes</span>\
         </div>{tags}</header>\
         <div class=\"modal-body\">\
         <div class=\"article-content-text\">{body}</div>\
         {videos}{resources}</div>\
         <footer class=\"modal-footer\">\
         <div class=\"share-buttons\">\
         <h4>Share article:</h4>\
         <a href=\"{twitter}\" target=\"_blank\" class=\"share-btn twitter\">Twitter</a>\
         <a href=\"{linkedin}\" target=\"_blank\" class=\"share-btn linkedin\">LinkedIn</a>\
         <a href=\"{email}\" class=\"share-btn email\">Email</a>\
         </div></footer></article>",
        category = escape_html(&detail.category_label),
        date = escape_html(&detail.date_display),
        title = escape_html(&detail.title),
        author = escape_html(&detail.author),
        read_time = escape_html(&detail.read_time),
        views = detail.views,
        likes = detail.likes,
        tags = tags,
        body = detail.body_html,
        videos = videos,
        resources = resources,
        twitter = escape_html(&detail.share.twitter),
        linkedin = escape_html(&detail.share.linkedin),
        email = escape_html(&detail.share.email),
    )
}

fn video_section_html(section: &VideoSection) -> String {
    let inner = match section {
        VideoSection::Embedded(ids) => ids.iter().map(|id| embed_html(id)).collect::<Vec<_>>(),
        VideoSection::Detailed(infos) => infos.iter().map(detailed_video_html).collect(),
    };
    if inner.is_empty() {
        return String::new();
    }
    format!(
        "<section class=\"youtube-videos\"><h3>Related Videos</h3>\
         <div class=\"youtube-container\">{}</div></section>",
        inner.join("")
    )
}

fn embed_html(id: &str) -> String {
    let id = escape_html(id);
    format!(
        "<div class=\"youtube-video\">\
         <div class=\"video-embed\">\
         <iframe src=\"https://www.youtube.com/embed/{id}\" \
         frameborder=\"0\" allowfullscreen loading=\"lazy\"></iframe>\
         </div>\
         <div class=\"video-info\"><h4>Related video</h4>\
         <a href=\"https://www.youtube.com/watch?v={id}\" target=\"_blank\" \
         rel=\"noopener\">Watch on YouTube</a>\
         </div></div>"
    )
}

fn detailed_video_html(info: &VideoInfo) -> String {
    let description = if info.description.is_empty() {
        String::new()
    } else {
        let short: String = info.description.chars().take(100).collect();
        format!("<p>{}...</p>", escape_html(&short))
    };

    let stats = match (info.view_count, info.like_count) {
        (None, None) => String::new(),
        (views, likes) => format!(
            "<div class=\"video-stats\">\
             <span>{} views</span><span>{} likes</span></div>",
            views.map(format_count).unwrap_or_default(),
            likes.map(format_count).unwrap_or_default()
        ),
    };

    let id = escape_html(&info.id);
    format!(
        "<div class=\"youtube-video\">\
         <div class=\"video-embed\">\
         <iframe src=\"https://www.youtube.com/embed/{id}\" \
         frameborder=\"0\" allowfullscreen loading=\"lazy\"></iframe>\
         </div>\
         <div class=\"video-info\"><h4>{title}</h4>{description}{stats}\
         <a href=\"https://www.youtube.com/watch?v={id}\" target=\"_blank\" \
         rel=\"noopener\">Watch on YouTube</a>\
         </div></div>",
        title = escape_html(&info.title),
        description = description,
        stats = stats,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::present::ShareLinks;

    fn sample_card(id: u64) -> ArticleCard {
        ArticleCard {
            id,
            title: format!("Card {}", id),
            excerpt: "Excerpt".to_string(),
            category_label: "Web Development".to_string(),
            category_icon: "fa-globe",
            date_display: "March 1, 2024".to_string(),
            image: None,
            views: 10,
            likes: 2,
            read_time: "4 min".to_string(),
        }
    }

    fn sample_detail() -> ArticleDetail {
        ArticleDetail {
            title: "T <script>".to_string(),
            category_label: "Systems".to_string(),
            date_display: "March 1, 2024".to_string(),
            author: "A".to_string(),
            read_time: "4 min".to_string(),
            views: 10,
            likes: 2,
            tags: vec!["os".to_string()],
            body_html: "<p>body</p>".to_string(),
            videos: None,
            resources: vec![],
            share: ShareLinks {
                twitter: "https://twitter.com/intent/tweet?text=T".to_string(),
                linkedin: "https://www.linkedin.com/sharing/share-offsite/?url=x".to_string(),
                email: "mailto:?subject=T".to_string(),
            },
        }
    }

    #[test]
    fn render_cards_replaces_visible_set() {
        let mut surface = HtmlSurface::new();
        surface.render_cards(&[sample_card(1), sample_card(2)], RenderMode::Replace);
        assert_eq!(surface.card_count(), 2);

        surface.render_cards(&[sample_card(3)], RenderMode::Replace);
        assert_eq!(surface.card_count(), 1);
        assert!(surface.article_list().contains("Card 3"));
    }

    #[test]
    fn empty_state_replaces_cards() {
        let mut surface = HtmlSurface::new();
        surface.render_cards(&[sample_card(1)], RenderMode::Replace);
        surface.render_empty();
        assert_eq!(surface.card_count(), 0);
        assert!(surface.article_list().contains("No articles found"));
    }

    #[test]
    fn error_state_carries_message_and_retry() {
        let mut surface = HtmlSurface::new();
        surface.render_error("Could not load articles. Please reload the page.");
        let html = surface.article_list();
        assert!(html.contains("Could not load articles"));
        assert!(html.contains("retry-btn"));
    }

    #[test]
    fn loading_state_clears_on_finish() {
        let mut surface = HtmlSurface::new();
        surface.set_loading(true);
        assert!(surface.article_list().contains("Loading articles"));
        surface.set_loading(false);
        assert_eq!(surface.article_list(), "");
    }

    #[test]
    fn detail_escapes_title() {
        let mut surface = HtmlSurface::new();
        surface.render_detail(&sample_detail());
        let html = surface.detail().unwrap();
        assert!(html.contains("T &lt;script&gt;"));
        assert!(html.contains("share-btn twitter"));
        assert!(!html.contains("youtube-videos"));
    }

    #[test]
    fn embedded_videos_render_iframes_only() {
        let html = video_section_html(&VideoSection::Embedded(vec![
            "abc".to_string(),
            "def".to_string(),
        ]));
        assert_eq!(html.matches("<iframe").count(), 2);
        assert!(html.contains("youtube.com/embed/abc"));
        assert!(!html.contains("video-stats"));
    }

    #[test]
    fn detailed_video_renders_stats() {
        let html = video_section_html(&VideoSection::Detailed(vec![VideoInfo {
            id: "abc".to_string(),
            title: "A Video".to_string(),
            description: "d".repeat(150),
            view_count: Some(1_234_567),
            like_count: Some(890),
        }]));
        assert!(html.contains("A Video"));
        assert!(html.contains("1.2M views"));
        assert!(html.contains("890 likes"));
        // Description is truncated to 100 characters.
        assert!(html.contains(&format!("{}...", "d".repeat(100))));
    }

    #[test]
    fn card_without_image_falls_back_to_icon() {
        let html = card_html(&sample_card(1));
        assert!(html.contains("fas fa-globe"));
        assert!(!html.contains("<img"));
    }
}
