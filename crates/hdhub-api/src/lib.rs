//! HDHub Scraper HTTP API
//!
//! This crate exposes `hdhub-core` over HTTP: search endpoints with input
//! validation, a health check, and a service description at the root.
//!
//! All responses carry permissive cross-origin headers. Input errors are
//! rejected with 400 before the core runs; a failed upstream search maps to
//! 404 with the core's result body; a panic escaping a handler maps to a
//! generic 500 body with the panic message.

pub mod handlers;

use std::sync::Arc;

use axum::{http::Method, routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use hdhub_core::HdhubScraper;

/// Shared application state
///
/// Holds one immutable scraper reused across requests. The scraper carries
/// no per-call state, so no locking is needed.
#[derive(Clone)]
pub struct AppState {
    scraper: Arc<HdhubScraper>,
}

impl AppState {
    /// Create state with a default scraper.
    ///
    /// # Errors
    /// Returns an error string if the scraper cannot be created.
    pub fn new() -> Result<Self, String> {
        let scraper = HdhubScraper::new().map_err(|e| e.to_string())?;
        Ok(Self::with_scraper(scraper))
    }

    /// Create state around a pre-configured scraper.
    ///
    /// Tests use this to point the scraper at a mock catalog.
    pub fn with_scraper(scraper: HdhubScraper) -> Self {
        Self {
            scraper: Arc::new(scraper),
        }
    }

    /// The shared scraper.
    pub fn scraper(&self) -> &HdhubScraper {
        &self.scraper
    }
}

/// Create the API router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::service_info))
        .route("/health", get(handlers::health))
        .route("/search", get(handlers::search_by_query))
        .route("/search/:query", get(handlers::search_by_path))
        .layer(CatchPanicLayer::custom(handlers::internal_error))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
