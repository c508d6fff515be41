// src/controller.rs

//! View-state controller.
//!
//! Owns the loaded catalog, the single active [`ViewState`], and the
//! presentation surface. All mutations happen synchronously inside these
//! methods; the only suspension points are the catalog load at startup and
//! the video metadata lookup when a detail view opens.

use crate::engine::{filter_articles, page_window};
use crate::error::{AppError, Result};
use crate::models::{Catalog, Category, Config, RenderMode, SiteConfig, ViewState};
use crate::present::{build_card, present_article, ArticleCard};
use crate::render::Surface;
use crate::services::{CatalogSource, VideoLookup};

/// Message shown when the catalog cannot be loaded.
const CATALOG_ERROR_MESSAGE: &str = "Error loading articles. Please reload the page.";

/// Drives the article list and detail views against a presentation surface.
pub struct Controller<S: Surface> {
    catalog: Catalog,
    view: ViewState,
    surface: S,
    videos: VideoLookup,
    site: SiteConfig,
}

impl<S: Surface> Controller<S> {
    /// Create a controller with an empty catalog.
    pub fn new(config: &Config, surface: S) -> Result<Self> {
        Ok(Self {
            catalog: Catalog::default(),
            view: ViewState::new(config.display.articles_per_page),
            surface,
            videos: VideoLookup::new(config.videos.clone())?,
            site: config.site.clone(),
        })
    }

    /// Load the catalog and render the initial view.
    ///
    /// A load failure is fatal to the initial display: the collection stays
    /// empty and a retry-capable error state is rendered. No partial
    /// catalog is ever accepted.
    pub async fn initialize(&mut self, source: &dyn CatalogSource) -> Result<()> {
        self.surface.set_loading(true);
        match source.load().await {
            Ok(catalog) => {
                log::info!(
                    "Loaded {} articles from {}",
                    catalog.len(),
                    source.location()
                );
                self.catalog = catalog;
                self.surface.set_loading(false);
                self.refresh();
                Ok(())
            }
            Err(e) => {
                log::error!("Catalog load failed from {}: {}", source.location(), e);
                self.surface.set_loading(false);
                self.surface.render_error(CATALOG_ERROR_MESSAGE);
                self.surface.set_load_more_visible(false);
                Err(e)
            }
        }
    }

    /// Apply a category filter ("all" is `None`) and re-render from page 1.
    pub fn set_filter(&mut self, filter: Option<Category>) {
        self.view.set_filter(filter);
        self.refresh();
    }

    /// Apply a search term and re-render from page 1. The term is
    /// lowercased here; raw input events should be coalesced through
    /// [`crate::utils::debounce::Debouncer`] before they reach this.
    pub fn set_search(&mut self, term: &str) {
        self.view.set_search_term(term);
        self.refresh();
    }

    /// The "load more" action: advance one page and re-render the
    /// cumulative set from the start.
    pub fn load_more(&mut self) {
        self.view.next_page();
        self.render(RenderMode::Append);
    }

    /// Re-derive the filtered view and render the current page window.
    pub fn refresh(&mut self) {
        self.render(RenderMode::Replace);
    }

    fn render(&mut self, mode: RenderMode) {
        let filtered = filter_articles(
            &self.catalog.articles,
            self.view.filter.as_ref(),
            &self.view.search_term,
        );

        if filtered.is_empty() && mode == RenderMode::Replace {
            self.surface.render_empty();
            self.surface.set_load_more_visible(false);
            return;
        }

        let window = page_window(filtered.len(), self.view.page, self.view.per_page, mode);
        let cards: Vec<ArticleCard> = filtered[window.start..window.end]
            .iter()
            .map(|article| build_card(article))
            .collect();

        self.surface.render_cards(&cards, mode);
        self.surface.set_load_more_visible(window.has_more);
    }

    /// Open the detail view for one article, resolving video metadata on
    /// the way. Video failures degrade silently to embed-only rendering.
    pub async fn open_article(&mut self, id: u64) -> Result<()> {
        let article = self
            .catalog
            .find(id)
            .ok_or(AppError::ArticleNotFound(id))?;
        let detail = present_article(article, &self.videos, &self.site).await?;
        self.surface.render_detail(&detail);
        Ok(())
    }

    /// Number of articles matching the active filter and search term.
    pub fn filtered_count(&self) -> usize {
        filter_articles(
            &self.catalog.articles,
            self.view.filter.as_ref(),
            &self.view.search_term,
        )
        .len()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
