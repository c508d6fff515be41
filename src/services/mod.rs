//! Service layer for the blog engine.
//!
//! This module contains the external collaborators:
//! - Catalog loading (`CatalogSource`, `FileCatalogSource`, `HttpCatalogSource`)
//! - Video metadata lookup (`VideoLookup`)

mod catalog;
mod videos;

pub use catalog::{source_for, CatalogSource, FileCatalogSource, HttpCatalogSource};
pub use videos::{VideoInfo, VideoLookup, VideoSection};
