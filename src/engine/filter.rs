//! Category and text-search filtering.
//!
//! Pure functions over the loaded catalog: no ranking, no scoring. Result
//! order always equals source order, and identical inputs always yield
//! identical output.

use crate::models::{Article, Category};

/// Derive the filtered view of the catalog.
///
/// An article is kept when the category constraint is satisfied (exact
/// match, or no constraint) AND the search term is empty or a
/// case-insensitive substring of the title, excerpt, content, or any tag.
///
/// `term` is expected to be lowercase already; `ViewState::set_search_term`
/// guarantees this on the controller path.
pub fn filter_articles<'a>(
    articles: &'a [Article],
    filter: Option<&Category>,
    term: &str,
) -> Vec<&'a Article> {
    articles
        .iter()
        .filter(|article| matches_category(article, filter) && matches_search(article, term))
        .collect()
}

fn matches_category(article: &Article, filter: Option<&Category>) -> bool {
    match filter {
        None => true,
        Some(category) => article.category == *category,
    }
}

fn matches_search(article: &Article, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    article.title.to_lowercase().contains(term)
        || article.excerpt.to_lowercase().contains(term)
        || article.content.to_lowercase().contains(term)
        || article
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Article, Category};

    fn article(id: u64, category: Category, title: &str, tags: &[&str]) -> Article {
        Article {
            id,
            title: title.to_string(),
            excerpt: "excerpt".to_string(),
            content: "content body".to_string(),
            category,
            author: "a".to_string(),
            date: "2024-01-01".to_string(),
            read_time: "3 min".to_string(),
            views: 0,
            likes: 0,
            image: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            youtube_videos: vec![],
            resources: vec![],
        }
    }

    fn sample_set() -> Vec<Article> {
        vec![
            article(1, Category::Programming, "Intro to Rust", &["rust"]),
            article(2, Category::Web, "CSS Grid Deep Dive", &["css", "layout"]),
            article(3, Category::Security, "Debugging TLS", &["debug", "tls"]),
        ]
    }

    #[test]
    fn all_with_empty_term_is_identity() {
        let articles = sample_set();
        let filtered = filter_articles(&articles, None, "");
        assert_eq!(filtered.len(), articles.len());
        let ids: Vec<u64> = filtered.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn filtering_is_deterministic() {
        let articles = sample_set();
        let first = filter_articles(&articles, Some(&Category::Web), "grid");
        let second = filter_articles(&articles, Some(&Category::Web), "grid");
        let a: Vec<u64> = first.iter().map(|a| a.id).collect();
        let b: Vec<u64> = second.iter().map(|a| a.id).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn category_filter_is_exact() {
        let articles = sample_set();
        let filtered = filter_articles(&articles, Some(&Category::Programming), "");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn unmatched_term_yields_empty() {
        let articles = sample_set();
        assert!(filter_articles(&articles, None, "kubernetes").is_empty());
    }

    #[test]
    fn term_matches_tags_case_insensitively() {
        let articles = sample_set();
        // Tag is "debug"; term arrives lowercased by the view state.
        let filtered = filter_articles(&articles, None, "debug");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 3);

        // Mixed-case tag content still matches a lowercase term.
        let mut articles = sample_set();
        articles[0].tags = vec!["DeBuG".to_string()];
        let filtered = filter_articles(&articles, None, "debug");
        let ids: Vec<u64> = filtered.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn category_and_term_must_both_match() {
        let articles = sample_set();
        assert!(filter_articles(&articles, Some(&Category::Web), "debug").is_empty());
    }

    #[test]
    fn order_is_preserved() {
        let articles = sample_set();
        let filtered = filter_articles(&articles, None, "e");
        let ids: Vec<u64> = filtered.iter().map(|a| a.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }
}
