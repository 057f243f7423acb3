//! Integration tests for the search-and-resolve pipeline
//!
//! These tests use wiremock to stand in for the catalog site and exercise
//! the full flow end-to-end: listing extraction, per-title resolution,
//! partial-failure recovery, and ordering.

use hdhub_core::{ClientConfig, HdhubClient, HdhubScraper, Provider};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Scraper pointed at a mock catalog.
fn test_scraper(server: &MockServer) -> HdhubScraper {
    let client = HdhubClient::with_config(ClientConfig {
        base_url: server.uri(),
        timeout_secs: 5,
    })
    .expect("client");
    HdhubScraper::with_client(client)
}

/// Listing page with one complete child per given (title, link) pair.
fn listing_page(entries: &[(&str, String)]) -> String {
    let children: String = entries
        .iter()
        .map(|(title, link)| {
            format!(
                r#"<li><a href="{link}"><figure><img src="{link}poster.jpg" alt="Download {title}"></figure></a></li>"#
            )
        })
        .collect();
    format!(r#"<html><body><ul class="recent-movies">{children}</ul></body></html>"#)
}

/// Detail page in the flat movie layout with one anchor per host.
fn detail_page(slug: &str) -> String {
    format!(
        r#"<html><body>
        <h2><span style="font-family: 'Open Sans';">{slug}</span></h2>
        <p><a href="https://hubstream.art/v/{slug}">Watch</a></p>
        <p><a href="https://hdstream4u.com/v/{slug}">Watch HD</a></p>
        </body></html>"#
    )
}

#[tokio::test]
async fn search_and_resolve_happy_path() {
    let server = MockServer::start().await;
    let base = server.uri();

    let entries: Vec<(&str, String)> = vec![
        ("First Title", format!("{base}/first/")),
        ("Second Title", format!("{base}/second/")),
        ("Third Title", format!("{base}/third/")),
    ];

    Mock::given(method("GET"))
        .and(path("/page/1/"))
        .and(query_param("s", "peaky blinders"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_page(&entries)))
        .mount(&server)
        .await;

    for slug in ["first", "second", "third"] {
        Mock::given(method("GET"))
            .and(path(format!("/{slug}/")))
            .respond_with(ResponseTemplate::new(200).set_body_string(detail_page(slug)))
            .mount(&server)
            .await;
    }

    let scraper = test_scraper(&server);
    let response = scraper
        .search_and_get_watch_links("peaky blinders", 1)
        .await;

    assert!(response.success);
    assert_eq!(
        response.message,
        "Found 3 movies with watch links matching \"peaky blinders\""
    );
    assert_eq!(response.movies.len(), 3);
    assert_eq!(response.movies[0].title, "First Title");
    assert_eq!(response.movies[1].title, "Second Title");
    assert_eq!(response.movies[2].title, "Third Title");

    let episode = &response.movies[0].episodes[0];
    assert_eq!(episode.episode, "Movie");
    assert_eq!(episode.watch_links.len(), 2);
    assert_eq!(episode.watch_links[0].provider, Provider::HubStream);
}

#[tokio::test]
async fn one_failing_title_does_not_sink_the_batch() {
    let server = MockServer::start().await;
    let base = server.uri();

    let entries: Vec<(String, String)> = (1..=5)
        .map(|i| (format!("Title {i}"), format!("{base}/title-{i}/")))
        .collect();
    let entry_refs: Vec<(&str, String)> = entries
        .iter()
        .map(|(title, link)| (title.as_str(), link.clone()))
        .collect();

    Mock::given(method("GET"))
        .and(path("/page/1/"))
        .and(query_param("s", "title"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_page(&entry_refs)))
        .mount(&server)
        .await;

    for i in 1..=5 {
        let template = if i == 3 {
            // Dead detail page for the third hit only
            ResponseTemplate::new(500)
        } else {
            ResponseTemplate::new(200).set_body_string(detail_page(&format!("title-{i}")))
        };
        Mock::given(method("GET"))
            .and(path(format!("/title-{i}/")))
            .respond_with(template)
            .mount(&server)
            .await;
    }

    let scraper = test_scraper(&server);
    let response = scraper.search_and_get_watch_links("title", 1).await;

    assert!(response.success);
    assert_eq!(response.movies.len(), 4);

    // Search order survives the hole left by the failed title
    let titles: Vec<&str> = response.movies.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Title 1", "Title 2", "Title 4", "Title 5"]);
}

#[tokio::test]
async fn title_with_no_recognizable_links_is_skipped() {
    let server = MockServer::start().await;
    let base = server.uri();

    let entries: Vec<(&str, String)> = vec![
        ("Good", format!("{base}/good/")),
        ("Linkless", format!("{base}/linkless/")),
    ];

    Mock::given(method("GET"))
        .and(path("/page/1/"))
        .and(query_param("s", "q"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_page(&entries)))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/good/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(detail_page("good")))
        .mount(&server)
        .await;

    // 200 with markup the extractor cannot use
    Mock::given(method("GET"))
        .and(path("/linkless/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body><p>come back later</p></body></html>"),
        )
        .mount(&server)
        .await;

    let scraper = test_scraper(&server);
    let response = scraper.search_and_get_watch_links("q", 1).await;

    assert!(response.success);
    assert_eq!(response.movies.len(), 1);
    assert_eq!(response.movies[0].title, "Good");
}

#[tokio::test]
async fn failed_search_is_fatal() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/page/1/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let scraper = test_scraper(&server);
    let response = scraper.search_and_get_watch_links("anything", 1).await;

    assert!(!response.success);
    assert_eq!(response.message, "Failed to search movies");
    assert_eq!(response.error.as_deref(), Some("HTTP error! status: 503"));
}

#[tokio::test]
async fn empty_search_result_is_successful() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/page/1/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html><body>no results</body></html>"),
        )
        .mount(&server)
        .await;

    let scraper = test_scraper(&server);
    let response = scraper.search_and_get_watch_links("obscure", 1).await;

    assert!(response.success);
    assert!(response.movies.is_empty());
    assert_eq!(
        response.message,
        "Found 0 movies with watch links matching \"obscure\""
    );
}

#[tokio::test]
async fn requests_carry_the_fixed_identity() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/page/2/"))
        .and(header("Cookie", "xla=s4t"))
        .and(header("Referer", "https://google.com"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html><body></body></html>"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let scraper = test_scraper(&server);
    let movies = scraper.get_movies(2).await.unwrap();
    assert!(movies.is_empty());
}
