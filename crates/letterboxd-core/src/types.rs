//! Core data types for the Letterboxd scraper
//!
//! Contains the main data structures used throughout the library.

use serde::{Deserialize, Serialize};

use crate::error::ScrapeError;

/// A film found on the popular listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Film {
    /// URL path segment naming the film (e.g., "the-batman")
    pub slug: String,

    /// Display title, from the poster `alt` text or derived from the slug
    pub title: String,

    /// Full URL to the film's detail page
    pub url: String,
}

/// Streaming availability for one film
///
/// `outcome` is `Ok` with the (possibly empty) list of service names, or
/// the error that prevented the detail page from being read. Its serialized
/// form is the report line (see `format_json_line`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilmResult {
    pub film: Film,
    pub outcome: Result<Vec<String>, ScrapeError>,
}

impl FilmResult {
    /// Service names, empty when the lookup failed
    pub fn services(&self) -> &[String] {
        match &self.outcome {
            Ok(services) => services,
            Err(_) => &[],
        }
    }
}
