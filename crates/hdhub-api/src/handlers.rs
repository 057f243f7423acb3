//! Request handlers for the HDHub scraper API
//!
//! Input validation happens here, before the core is invoked: a blank query
//! or a bad page number never reaches the scraper.

use std::any::Any;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Deserialize;
use serde_json::json;

use crate::AppState;

/// Query-string parameters accepted by the search endpoints
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Query text for the `/search?q=` form
    q: Option<String>,
    /// Raw page value; validated in `parse_page`
    page: Option<String>,
}

/// Search with the query as a path segment: `GET /search/{query}?page=N`
pub async fn search_by_path(
    State(state): State<AppState>,
    Path(query): Path<String>,
    Query(params): Query<SearchParams>,
) -> Response {
    run_search(&state, Some(query.as_str()), params.page.as_deref()).await
}

/// Search with the query as a parameter: `GET /search?q={query}&page=N`
pub async fn search_by_query(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    run_search(&state, params.q.as_deref(), params.page.as_deref()).await
}

async fn run_search(state: &AppState, query: Option<&str>, page: Option<&str>) -> Response {
    let query = match validate_query(query) {
        Ok(query) => query,
        Err(response) => return response,
    };
    let page = match parse_page(page) {
        Ok(page) => page,
        Err(response) => return response,
    };

    let result = state.scraper().search_and_get_watch_links(&query, page).await;

    let status = if result.success {
        StatusCode::OK
    } else {
        // Upstream search failed; the core's result body goes out verbatim
        StatusCode::NOT_FOUND
    };
    (status, Json(result)).into_response()
}

/// Health check: `GET /health`
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}

/// Service description at the root: `GET /`
pub async fn service_info() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Welcome to HDHub Scraper API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "search": {
                "path": "/search/{query}",
                "example": "/search/peaky+blinders",
                "query": "/search?q=peaky+blinders",
                "parameters": {
                    "page": "optional (default: 1)"
                }
            },
            "health": "/health"
        }
    }))
}

/// Map a panic escaping a handler to the generic 500 body.
///
/// The panic message is attached for diagnostics; backtraces are not.
pub fn internal_error(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!(%details, "handler panicked");

    let body = json!({
        "success": false,
        "message": "Internal server error",
        "error": details,
    });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

fn validate_query(query: Option<&str>) -> Result<String, Response> {
    match query {
        Some(query) if !query.trim().is_empty() => Ok(query.to_string()),
        _ => Err(bad_request(
            "Search query is required and must be a non-empty string",
        )),
    }
}

/// Absent page defaults to 1; non-numeric or zero is the caller's error.
fn parse_page(raw: Option<&str>) -> Result<u32, Response> {
    match raw {
        None => Ok(1),
        Some(value) => match value.parse::<u32>() {
            Ok(page) if page >= 1 => Ok(page),
            _ => Err(bad_request("Page number must be a positive integer")),
        },
    }
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "success": false, "message": message })),
    )
        .into_response()
}
