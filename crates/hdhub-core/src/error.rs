//! Error types for the HDHub scraper
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Error type for HDHub scraper operations
#[derive(Error, Debug)]
pub enum HdhubError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream returned a non-success status code
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// Search query was empty or whitespace-only
    #[error("Invalid search query")]
    InvalidQuery,

    /// Page numbers are 1-based
    #[error("Invalid page number: {0}")]
    InvalidPage(u32),

    /// Detail page link was empty
    #[error("Invalid link")]
    InvalidLink,

    /// Neither extraction pass found any watch links on the detail page
    #[error("No watch links found")]
    NoLinksFound,
}

/// Result type alias for HDHub scraper operations
pub type Result<T> = std::result::Result<T, HdhubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_status() {
        let error = HdhubError::Status(503);
        assert_eq!(error.to_string(), "HTTP error! status: 503");
    }

    #[test]
    fn test_error_display_invalid_query() {
        let error = HdhubError::InvalidQuery;
        assert_eq!(error.to_string(), "Invalid search query");
    }

    #[test]
    fn test_error_display_invalid_page() {
        let error = HdhubError::InvalidPage(0);
        assert_eq!(error.to_string(), "Invalid page number: 0");
    }

    #[test]
    fn test_error_display_invalid_link() {
        let error = HdhubError::InvalidLink;
        assert_eq!(error.to_string(), "Invalid link");
    }

    #[test]
    fn test_error_display_no_links_found() {
        let error = HdhubError::NoLinksFound;
        assert_eq!(error.to_string(), "No watch links found");
    }
}
