//! Watch-link parser for HDHub4u detail pages
//!
//! Detail pages come in two layouts. Series pages carry `h4` episode markers
//! holding a color-styled label span, each followed by another `h4` with the
//! actual stream anchors. Movie pages scatter stream anchors through the body
//! with no per-episode structure. The parser runs a structured pass over the
//! flattened heading list first, then falls back to a flat whole-document
//! scan when that pass finds nothing.

use scraper::{ElementRef, Html, Selector};

use crate::error::{HdhubError, Result};
use crate::types::{Episode, Provider, WatchInfo, WatchLink};

/// Known stream hosts in collection order. New hosts are additive entries.
const STREAM_HOSTS: &[(&str, Provider)] = &[
    ("hubstream.art", Provider::HubStream),
    ("hdstream4u.com", Provider::HdStream),
];

/// Label for the synthetic episode produced by the fallback pass
const FLAT_EPISODE_LABEL: &str = "Movie";

/// Classify a URL against the known stream hosts.
///
/// # Examples
/// ```
/// use hdhub_core::parser::classify_provider;
/// use hdhub_core::Provider;
///
/// assert_eq!(classify_provider("https://hubstream.art/v/abc"), Some(Provider::HubStream));
/// assert_eq!(classify_provider("https://example.com/v/abc"), None);
/// ```
pub fn classify_provider(url: &str) -> Option<Provider> {
    STREAM_HOSTS
        .iter()
        .find(|(host, _)| url.contains(host))
        .map(|&(_, provider)| provider)
}

/// Parse a detail page into its descriptive title and episode list.
///
/// # Arguments
/// * `html` - Raw HTML content of the detail page
///
/// # Returns
/// * `Ok(WatchInfo)` when at least one episode with watch links was found
/// * `Err(HdhubError::NoLinksFound)` when both passes come up empty — the
///   caller uses this to treat the title as unresolved
pub fn parse_watch_links(html: &str) -> Result<WatchInfo> {
    let document = Html::parse_document(html);

    let title = extract_page_title(&document).unwrap_or_default();

    let mut episodes = parse_episode_sections(&document);
    if episodes.is_empty() {
        episodes = parse_flat_links(&document);
    }

    if episodes.is_empty() {
        return Err(HdhubError::NoLinksFound);
    }

    Ok(WatchInfo { title, episodes })
}

/// Structured pass over the flattened `h4` list.
///
/// Marker heading at index `i` pairs with the heading at `i + 1`, which
/// holds that episode's stream anchors. Markers whose paired heading yields
/// no known-host anchors are discarded.
fn parse_episode_sections(document: &Html) -> Vec<Episode> {
    let Ok(heading_selector) = Selector::parse("h4") else {
        return Vec::new();
    };

    let headings: Vec<ElementRef> = document.select(&heading_selector).collect();
    let mut episodes = Vec::new();

    for (i, heading) in headings.iter().enumerate() {
        let Some(label) = episode_label(heading) else {
            continue;
        };
        let Some(section) = headings.get(i + 1) else {
            continue;
        };

        let watch_links = collect_section_links(section);
        if !watch_links.is_empty() {
            episodes.push(Episode {
                episode: label,
                watch_links,
            });
        }
    }

    episodes
}

/// Extract the episode label from a heading, if it is an episode marker.
///
/// Marker spans are styled with the catalog's orange label color. Style
/// attributes vary in spacing between page versions, so the color is matched
/// with a whitespace-tolerant pattern.
fn episode_label(heading: &ElementRef) -> Option<String> {
    let span_selector = Selector::parse("span[style]").ok()?;
    let color = regex_lite::Regex::new(r"color:\s*#ff9900").ok()?;

    for span in heading.select(&span_selector) {
        let style = span.value().attr("style").unwrap_or_default();
        if color.is_match(style) {
            let label = span.text().collect::<String>().trim().to_string();
            if !label.is_empty() {
                return Some(label);
            }
        }
    }

    None
}

/// Collect an episode section's watch links: the first anchor per known
/// host, in host table order.
fn collect_section_links(section: &ElementRef) -> Vec<WatchLink> {
    let Ok(anchor_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    let mut links = Vec::new();
    for &(host, provider) in STREAM_HOSTS {
        let url = section
            .select(&anchor_selector)
            .filter_map(|anchor| anchor.value().attr("href"))
            .find(|href| href.contains(host));

        if let Some(url) = url {
            links.push(WatchLink {
                provider,
                url: url.to_string(),
            });
        }
    }

    links
}

/// Fallback pass: every known-host anchor anywhere in the document, grouped
/// by host in table order, as one synthetic episode.
fn parse_flat_links(document: &Html) -> Vec<Episode> {
    let Ok(anchor_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    let mut watch_links = Vec::new();
    for &(host, provider) in STREAM_HOSTS {
        for anchor in document.select(&anchor_selector) {
            if let Some(href) = anchor.value().attr("href") {
                if href.contains(host) {
                    watch_links.push(WatchLink {
                        provider,
                        url: href.to_string(),
                    });
                }
            }
        }
    }

    if watch_links.is_empty() {
        return Vec::new();
    }

    vec![Episode {
        episode: FLAT_EPISODE_LABEL.to_string(),
        watch_links,
    }]
}

/// Descriptive page title: the first `h2` span styled with the catalog's
/// title font. Metadata only, never used as an identity key.
fn extract_page_title(document: &Html) -> Option<String> {
    let span_selector = Selector::parse("h2 span[style]").ok()?;
    let font = regex_lite::Regex::new(r"font-family:\s*'Open Sans'").ok()?;

    for span in document.select(&span_selector) {
        let style = span.value().attr("style").unwrap_or_default();
        if font.is_match(style) {
            let title = span.text().collect::<String>().trim().to_string();
            if !title.is_empty() {
                return Some(title);
            }
        }
    }

    None
}
