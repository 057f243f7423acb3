//! Main HDHub scraper API
//!
//! This module provides the high-level API for scraping HDHub4u. It combines
//! the HTTP client with the parsers: catalog search, per-title watch-link
//! resolution, and the combined search-and-resolve pipeline.

use futures::stream::{self, StreamExt};

use crate::client::HdhubClient;
use crate::error::{HdhubError, Result};
use crate::parser::{parse_search_results, parse_watch_links};
use crate::types::{Movie, ResolvedMovie, SearchResponse, WatchInfo};

/// Detail pages fetched concurrently while resolving a result set
const MAX_CONCURRENT_RESOLVES: usize = 4;

/// High-level scraper API for HDHub4u
///
/// Provides methods for searching the catalog, listing recent titles, and
/// resolving watch links. All operations are asynchronous; the scraper
/// itself is immutable and safe to share across requests.
///
/// # Example
/// ```no_run
/// use hdhub_core::HdhubScraper;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let scraper = HdhubScraper::new()?;
///
///     let result = scraper.search_and_get_watch_links("peaky blinders", 1).await;
///     println!("{}", result.message);
///
///     Ok(())
/// }
/// ```
pub struct HdhubScraper {
    client: HdhubClient,
}

impl HdhubScraper {
    /// Create a new scraper with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        let client = HdhubClient::new()?;
        Ok(Self { client })
    }

    /// Create a new scraper with a custom client.
    ///
    /// This is useful for testing or when you need a custom base URL or
    /// timeout.
    ///
    /// # Arguments
    /// * `client` - Pre-configured HdhubClient instance
    pub fn with_client(client: HdhubClient) -> Self {
        Self { client }
    }

    /// Search the catalog by free-text query.
    ///
    /// Result order follows the listing's document order, which is the
    /// catalog's own ranking.
    ///
    /// # Arguments
    /// * `query` - Search query string
    /// * `page` - Page number (1-based)
    ///
    /// # Returns
    /// * `Ok(Vec<Movie>)` with the matching titles, possibly empty
    /// * `Err(HdhubError::InvalidQuery)` if the query is blank
    /// * `Err(HdhubError::InvalidPage)` if `page` is 0
    pub async fn search_movies(&self, query: &str, page: u32) -> Result<Vec<Movie>> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(HdhubError::InvalidQuery);
        }
        if page == 0 {
            return Err(HdhubError::InvalidPage(page));
        }

        let url = format!(
            "{}/page/{}/?s={}",
            self.client.base_url(),
            page,
            urlencoding::encode(trimmed)
        );
        let html = self.client.fetch(&url).await?;

        Ok(parse_search_results(&html))
    }

    /// List the recent-titles feed without a query filter.
    ///
    /// # Arguments
    /// * `page` - Page number (1-based)
    pub async fn get_movies(&self, page: u32) -> Result<Vec<Movie>> {
        if page == 0 {
            return Err(HdhubError::InvalidPage(page));
        }

        let url = format!("{}/page/{}/", self.client.base_url(), page);
        let html = self.client.fetch(&url).await?;

        Ok(parse_search_results(&html))
    }

    /// Resolve the watch links behind a detail page URL.
    ///
    /// # Arguments
    /// * `link` - Absolute URL of the title's detail page
    ///
    /// # Returns
    /// * `Ok(WatchInfo)` with the page title and at least one episode
    /// * `Err(HdhubError::InvalidLink)` if the link is blank
    /// * `Err(HdhubError::NoLinksFound)` if the page yields no watch links
    pub async fn get_watch_links(&self, link: &str) -> Result<WatchInfo> {
        if link.trim().is_empty() {
            return Err(HdhubError::InvalidLink);
        }

        let html = self.client.fetch(link).await?;
        parse_watch_links(&html)
    }

    /// Search the catalog and resolve watch links for every hit.
    ///
    /// The search itself failing fails the whole call. A title that fails
    /// to resolve — dead detail page, no recognizable links — is logged and
    /// dropped; the remaining titles are unaffected. Detail pages are
    /// fetched concurrently with a fixed bound, and the result preserves
    /// search order regardless of fetch completion order.
    ///
    /// # Arguments
    /// * `query` - Search query string
    /// * `page` - Page number (1-based)
    pub async fn search_and_get_watch_links(&self, query: &str, page: u32) -> SearchResponse {
        let movies = match self.search_movies(query, page).await {
            Ok(movies) => movies,
            Err(error) => return SearchResponse::failure("Failed to search movies", error),
        };

        let resolved: Vec<ResolvedMovie> = stream::iter(movies)
            .map(|movie| self.resolve_movie(movie))
            .buffered(MAX_CONCURRENT_RESOLVES)
            .filter_map(|movie| async move { movie })
            .collect()
            .await;

        let message = format!(
            "Found {} movies with watch links matching \"{}\"",
            resolved.len(),
            query
        );
        SearchResponse::success(resolved, message)
    }

    /// Resolve one search hit, mapping any failure to `None`.
    async fn resolve_movie(&self, movie: Movie) -> Option<ResolvedMovie> {
        match self.get_watch_links(&movie.link).await {
            Ok(info) => Some(ResolvedMovie {
                title: movie.title,
                episodes: info.episodes,
            }),
            Err(error) => {
                tracing::warn!(
                    title = %movie.title,
                    link = %movie.link,
                    %error,
                    "skipping title: watch links unavailable"
                );
                None
            }
        }
    }
}
