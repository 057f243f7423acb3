//! Listing parser for HDHub4u
//!
//! Parses HTML from catalog listing pages (search results and the recent
//! titles feed) into an ordered list of titles with detail links.

use scraper::{ElementRef, Html, Selector};

use crate::types::Movie;

/// Promotional prefix the catalog prepends to listing titles
const PROMO_PREFIX: &str = "Download";

/// Clean a raw listing title.
///
/// Drops the first occurrence of the promotional prefix and trims
/// surrounding whitespace.
///
/// # Examples
/// ```
/// use hdhub_core::parser::clean_title;
///
/// assert_eq!(clean_title("Download Peaky Blinders (2013)"), "Peaky Blinders (2013)");
/// assert_eq!(clean_title("  Peaky Blinders  "), "Peaky Blinders");
/// ```
pub fn clean_title(raw: &str) -> String {
    raw.replacen(PROMO_PREFIX, "", 1).trim().to_string()
}

/// Parse a catalog listing page into an ordered list of movies.
///
/// Walks the direct children of the `.recent-movies` container in document
/// order; that order is the result ranking. Children missing either a title
/// or a detail link are skipped without error, and a page with no listing
/// container yields an empty list rather than an error.
///
/// # Arguments
/// * `html` - Raw HTML content of the listing page
pub fn parse_search_results(html: &str) -> Vec<Movie> {
    let document = Html::parse_document(html);
    let mut movies = Vec::new();

    let Ok(container_selector) = Selector::parse(".recent-movies") else {
        return movies;
    };

    for container in document.select(&container_selector) {
        for child in container.children().filter_map(ElementRef::wrap) {
            if let Some(movie) = parse_listing_item(&child) {
                movies.push(movie);
            }
        }
    }

    movies
}

/// Parse a single listing child into a movie entry.
///
/// The title comes from the poster image's alt text, the link from the
/// child's first anchor. Returns `None` when either is missing or empty.
fn parse_listing_item(element: &ElementRef) -> Option<Movie> {
    let img_selector = Selector::parse("figure img").ok()?;
    let link_selector = Selector::parse("a").ok()?;

    let img = element.select(&img_selector).next();
    let raw_title = img.and_then(|img| img.value().attr("alt"))?;
    let link = element.select(&link_selector).next()?.value().attr("href")?;

    let title = clean_title(raw_title);
    if title.is_empty() || link.is_empty() {
        return None;
    }

    let image = img
        .and_then(|img| img.value().attr("src"))
        .map(str::to_string);

    Some(Movie {
        title,
        link: link.to_string(),
        image,
    })
}
