// src/engine/mod.rs

//! Core filtering and pagination for the article list.

mod filter;
mod page;

pub use filter::filter_articles;
pub use page::{page_window, PageWindow};
