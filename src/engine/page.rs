//! Page window arithmetic for the card list.
//!
//! Two materialization modes exist:
//!
//! - `Replace`: show only the current page window `[(p-1)*s, p*s)`.
//! - `Append`: the "load more" path re-renders the cumulative range
//!   `[0, p*s)` from the start. The original front end recomputed the slice
//!   from index 0 on this path, and that behavior is kept as the contract.

use crate::models::RenderMode;

/// A half-open index range into the filtered article list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start: usize,
    pub end: usize,
    /// Whether more items exist beyond `page * per_page`.
    pub has_more: bool,
}

impl PageWindow {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Compute the visible window into a filtered list of `len` items.
///
/// `page` is 1-based. The window end is clamped to `len`; `has_more`
/// reports whether the unclamped page boundary leaves items unseen.
pub fn page_window(len: usize, page: usize, per_page: usize, mode: RenderMode) -> PageWindow {
    let page = page.max(1);
    let boundary = page.saturating_mul(per_page);
    let start = match mode {
        RenderMode::Replace => ((page - 1).saturating_mul(per_page)).min(len),
        RenderMode::Append => 0,
    };
    PageWindow {
        start,
        end: boundary.min(len),
        has_more: boundary < len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_first_page_clamps_to_len() {
        let w = page_window(2, 1, 6, RenderMode::Replace);
        assert_eq!((w.start, w.end), (0, 2));
        assert!(!w.has_more);
    }

    #[test]
    fn replace_visible_count_is_min_of_page_size_and_len() {
        let w = page_window(40, 1, 6, RenderMode::Replace);
        assert_eq!(w.len(), 6);
        assert!(w.has_more);
    }

    #[test]
    fn replace_second_page_is_single_window() {
        let w = page_window(7, 2, 6, RenderMode::Replace);
        assert_eq!((w.start, w.end), (6, 7));
        assert!(!w.has_more);
    }

    #[test]
    fn append_renders_from_start() {
        let w = page_window(7, 2, 6, RenderMode::Append);
        assert_eq!((w.start, w.end), (0, 7));
        assert!(!w.has_more);
    }

    #[test]
    fn append_never_decreases_visible_count() {
        let mut previous = 0;
        for page in 1..=5 {
            let w = page_window(23, page, 6, RenderMode::Append);
            assert!(w.len() >= previous);
            previous = w.len();
        }
        assert_eq!(previous, 23);
    }

    #[test]
    fn empty_list_yields_empty_window() {
        let w = page_window(0, 1, 6, RenderMode::Replace);
        assert!(w.is_empty());
        assert!(!w.has_more);
    }

    #[test]
    fn page_beyond_end_is_empty_not_panicking() {
        let w = page_window(4, 3, 6, RenderMode::Replace);
        assert_eq!((w.start, w.end), (4, 4));
        assert!(w.is_empty());
    }
}
