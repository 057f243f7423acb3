//! HDHub Scraper Core Library
//!
//! This crate provides the core scraping functionality for HDHub4u:
//! catalog search, per-title watch-link resolution, and the static
//! category/genre navigation tables.
//!
//! # Features
//! - Search movies and series by free-text query
//! - Resolve externally hosted watch links, per episode where the page has them
//! - Combined search-and-resolve pipeline with bounded concurrency
//! - Fixed browser identity headers with a bounded request timeout

pub mod catalog;
pub mod client;
pub mod error;
pub mod parser;
pub mod scraper;
pub mod types;

// Re-export main types for convenience
pub use catalog::{CatalogFilter, CATEGORIES, GENRES};
pub use client::{ClientConfig, HdhubClient};
pub use error::{HdhubError, Result};
pub use scraper::HdhubScraper;
pub use types::{Episode, Movie, Provider, ResolvedMovie, SearchResponse, WatchInfo, WatchLink};
