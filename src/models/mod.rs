// src/models/mod.rs

//! Domain models for the blog engine.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod article;
mod config;
mod view;

// Re-export all public types
pub use article::{Article, Catalog, Category, Resource};
pub use config::{CatalogConfig, Config, DisplayConfig, SiteConfig, VideoConfig};
pub use view::{RenderMode, ViewState};
