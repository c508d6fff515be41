//! View state for the article list.

use super::Category;

/// How the card list should be materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Show only the current page window.
    Replace,
    /// Show everything from the start through the current page boundary.
    Append,
}

/// The active filter/search/pagination selection.
///
/// One instance lives inside the controller; it is re-derived on every
/// filter, search, or pagination action and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Active category constraint, `None` means "all"
    pub filter: Option<Category>,

    /// Lowercase search fragment, empty means no constraint
    pub search_term: String,

    /// 1-based page index
    pub page: usize,

    /// Fixed page size
    pub per_page: usize,
}

impl ViewState {
    /// Create a fresh view state showing everything.
    pub fn new(per_page: usize) -> Self {
        Self {
            filter: None,
            search_term: String::new(),
            page: 1,
            per_page,
        }
    }

    /// Apply a category filter and reset pagination.
    pub fn set_filter(&mut self, filter: Option<Category>) {
        self.filter = filter;
        self.page = 1;
    }

    /// Apply a search term (lowercased) and reset pagination.
    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_lowercase();
        self.page = 1;
    }

    /// Advance to the next page for the "load more" path.
    pub fn next_page(&mut self) {
        self.page += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_change_resets_page() {
        let mut view = ViewState::new(6);
        view.page = 3;
        view.set_filter(Some(Category::Web));
        assert_eq!(view.page, 1);
        assert_eq!(view.filter, Some(Category::Web));
    }

    #[test]
    fn search_term_is_lowercased_and_resets_page() {
        let mut view = ViewState::new(6);
        view.page = 2;
        view.set_search_term("RuSt");
        assert_eq!(view.search_term, "rust");
        assert_eq!(view.page, 1);
    }

    #[test]
    fn next_page_increments() {
        let mut view = ViewState::new(6);
        view.next_page();
        assert_eq!(view.page, 2);
    }
}
