//! Error types for the Letterboxd scraper
//!
//! Provides a single error enum with human-readable messages
//! and string serialization for JSON reports.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all scraper operations
///
/// Implements Display for human-readable messages and Serialize
/// so a failed film can be written into a JSON report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScrapeError {
    /// Browser session could not be launched or driven
    #[error("Browser error: {0}")]
    Browser(String),

    /// A page failed to load
    #[error("Navigation to {url} failed: {message}")]
    Navigation { url: String, message: String },

    /// A required element was not present in the rendered page
    #[error("Page structure mismatch: {0}")]
    StructureMismatch(String),

    /// Failed to parse HTML content or a selector
    #[error("Failed to parse HTML: {0}")]
    ParseError(String),

    /// Empty or malformed film slug
    #[error("Invalid film slug: {0}")]
    InvalidSlug(String),

    /// Report could not be encoded
    #[error("Failed to encode report: {0}")]
    Encode(String),
}

impl ScrapeError {
    pub(crate) fn navigation(url: &str, message: impl ToString) -> Self {
        Self::Navigation {
            url: url.to_string(),
            message: message.to_string(),
        }
    }
}

impl From<chromiumoxide::error::CdpError> for ScrapeError {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        ScrapeError::Browser(err.to_string())
    }
}

impl From<serde_json::Error> for ScrapeError {
    fn from(err: serde_json::Error) -> Self {
        ScrapeError::Encode(err.to_string())
    }
}

impl Serialize for ScrapeError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for scraper operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_browser() {
        let error = ScrapeError::Browser("chrome not found".to_string());
        assert_eq!(error.to_string(), "Browser error: chrome not found");
    }

    #[test]
    fn test_error_display_navigation() {
        let error = ScrapeError::navigation("https://letterboxd.com/film/x/", "net::ERR_TIMED_OUT");
        assert_eq!(
            error.to_string(),
            "Navigation to https://letterboxd.com/film/x/ failed: net::ERR_TIMED_OUT"
        );
    }

    #[test]
    fn test_error_display_structure_mismatch() {
        let error = ScrapeError::StructureMismatch("li.poster-container".to_string());
        assert_eq!(error.to_string(), "Page structure mismatch: li.poster-container");
    }

    #[test]
    fn test_error_display_parse_error() {
        let error = ScrapeError::ParseError("invalid selector".to_string());
        assert_eq!(error.to_string(), "Failed to parse HTML: invalid selector");
    }

    #[test]
    fn test_error_display_invalid_slug() {
        let error = ScrapeError::InvalidSlug("".to_string());
        assert_eq!(error.to_string(), "Invalid film slug: ");
    }

    #[test]
    fn test_error_serialize() {
        let error = ScrapeError::StructureMismatch("#watch".to_string());
        let json = serde_json::to_string(&error).expect("Serialization should succeed");
        assert_eq!(json, "\"Page structure mismatch: #watch\"");
    }

    #[test]
    fn test_error_from_json_error() {
        let json_error = serde_json::from_str::<Vec<String>>("[").unwrap_err();
        let error = ScrapeError::from(json_error);
        match &error {
            ScrapeError::Encode(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected Encode error"),
        }
        assert!(error.to_string().starts_with("Failed to encode report: "));
    }

    #[test]
    fn test_error_clone_and_eq() {
        let error = ScrapeError::navigation("https://letterboxd.com/film/x/", "net::ERR_FAILED");
        assert_eq!(error.clone(), error);
        assert_ne!(error, ScrapeError::Browser("net::ERR_FAILED".to_string()));
    }
}
