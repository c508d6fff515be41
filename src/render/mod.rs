// src/render/mod.rs

//! Presentation port.
//!
//! The core logic never touches a concrete UI. It drives a [`Surface`],
//! which owns the attachment points the surrounding presentation layer
//! provides (card container, detail container, load-more control). The
//! bundled [`HtmlSurface`] materializes HTML strings; tests use a
//! recording surface instead.

mod html;

pub use html::HtmlSurface;

use crate::models::RenderMode;
use crate::present::{ArticleCard, ArticleDetail};

/// Attachment points the core renders into.
pub trait Surface {
    /// Materialize the visible card set. `Replace` discards the previous
    /// set; `Append` re-renders the cumulative set from the start.
    fn render_cards(&mut self, cards: &[ArticleCard], mode: RenderMode);

    /// Show the distinct empty state for a filter/search with no results.
    fn render_empty(&mut self);

    /// Show a retry-capable error state in place of the card list.
    fn render_error(&mut self, message: &str);

    /// Show the detail view for one article.
    fn render_detail(&mut self, detail: &ArticleDetail);

    /// Toggle the "load more" control.
    fn set_load_more_visible(&mut self, visible: bool);

    /// Toggle the loading indicator over the card list.
    fn set_loading(&mut self, loading: bool);
}
