//! Data types for the HDHub scraper
//!
//! This module contains the core data structures used throughout the library.
//! All types implement Serialize/Deserialize so the API surface can pass them
//! through as JSON unchanged; field names match the wire format consumers of
//! the service already depend on.

use serde::{Deserialize, Serialize};

/// Known external stream host, classified by which domain a URL matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provider {
    /// hubstream.art
    HubStream,
    /// hdstream4u.com
    #[serde(rename = "HDStream")]
    HdStream,
}

/// A single catalog listing hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Display title with the promotional prefix stripped
    pub title: String,
    /// Absolute URL of the title's detail page
    pub link: String,
    /// Poster thumbnail, where the listing provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// One externally hosted playback URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchLink {
    /// Host classification for the URL
    #[serde(rename = "type")]
    pub provider: Provider,
    /// The playback URL
    pub url: String,
}

/// A labeled group of watch links
///
/// Series pages yield one entry per episode marker; movie pages yield a
/// single entry labeled "Movie". `watch_links` is never empty: episodes
/// that resolve to zero endpoints are discarded during extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// Label taken from the episode marker
    pub episode: String,
    pub watch_links: Vec<WatchLink>,
}

/// Parsed detail page: descriptive heading plus episode list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchInfo {
    /// Heading text from the detail page; descriptive only, may be empty
    pub title: String,
    pub episodes: Vec<Episode>,
}

/// A search hit with its watch links resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedMovie {
    pub title: String,
    pub episodes: Vec<Episode>,
}

/// Combined result of the search-and-resolve pipeline
///
/// `success` reflects the search stage only: a search that succeeds but
/// resolves zero titles is still a successful, empty result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    #[serde(default)]
    pub movies: Vec<ResolvedMovie>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchResponse {
    /// Successful result, possibly with zero resolved movies
    pub fn success(movies: Vec<ResolvedMovie>, message: impl Into<String>) -> Self {
        Self {
            success: true,
            movies,
            message: message.into(),
            error: None,
        }
    }

    /// Failed result carrying the underlying cause
    pub fn failure(message: impl Into<String>, error: impl ToString) -> Self {
        Self {
            success: false,
            movies: Vec::new(),
            message: message.into(),
            error: Some(error.to_string()),
        }
    }
}
