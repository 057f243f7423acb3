//! HTML parsers for HDHub4u pages
//!
//! This module contains parsers for extracting data from catalog HTML:
//! - `search`: parse listing pages (search results and the recent-titles feed)
//! - `links`: parse per-title detail pages into episodes with watch links

pub mod links;
pub mod search;

// Re-export main parsing functions
pub use links::{classify_provider, parse_watch_links};
pub use search::{clean_title, parse_search_results};
