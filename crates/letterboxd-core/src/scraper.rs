//! Main scraper API for letterboxd.com
//!
//! Combines a page source with the listing and "where to watch" parsers
//! to run the two phases: popular films first, then each film's page.

use tracing::{info, warn};

use crate::config::ScraperConfig;
use crate::error::{Result, ScrapeError};
use crate::parser::{
    WATCH_READY_SELECTOR, listing_ready_selector, parse_listing, parse_streaming_services,
};
use crate::rate_limit::RateLimiter;
use crate::session::PageSource;
use crate::types::{Film, FilmResult};
use crate::url::build_film_url;

/// Two-phase scraper for popular films and their streaming services
///
/// Visits pages strictly one at a time through the owned page source.
pub struct LetterboxdScraper<S> {
    source: S,
    config: ScraperConfig,
    rate_limiter: RateLimiter,
}

impl<S: PageSource> LetterboxdScraper<S> {
    /// Create a scraper that loads pages through `source`
    pub fn new(source: S, config: ScraperConfig) -> Self {
        let rate_limiter = RateLimiter::new(config.courtesy_delay);
        Self {
            source,
            config,
            rate_limiter,
        }
    }

    /// Fetch the popular listing and return up to `film_limit` films
    ///
    /// # Returns
    /// Films in listing order, empty if the page structure is not recognised
    ///
    /// # Errors
    /// - `Navigation` if the listing page cannot be loaded
    /// - `ParseError` if HTML parsing fails
    pub async fn fetch_popular(&mut self) -> Result<Vec<Film>> {
        info!(url = %self.config.listing_url, "fetching popular films");

        let html = self
            .source
            .render(
                &self.config.listing_url,
                &listing_ready_selector(),
                &self.config.listing_wait,
            )
            .await?;

        let films = parse_listing(&html, self.config.film_limit)?;
        info!(count = films.len(), "found films");
        Ok(films)
    }

    /// Fetch the streaming services listed for one film
    ///
    /// Waits out the courtesy delay since the previous film page first.
    ///
    /// # Arguments
    /// * `slug` - Film slug from the listing
    ///
    /// # Returns
    /// Service names, empty when the film page has no "where to watch" entries
    ///
    /// # Errors
    /// - `InvalidSlug` if slug is empty or whitespace only
    /// - `Navigation` if the film page cannot be loaded
    pub async fn fetch_streaming(&mut self, slug: &str) -> Result<Vec<String>> {
        let trimmed = slug.trim();
        if trimmed.is_empty() {
            return Err(ScrapeError::InvalidSlug(
                "Film slug cannot be empty".to_string(),
            ));
        }

        self.rate_limiter.acquire().await;

        let url = build_film_url(trimmed);
        let html = self
            .source
            .render(&url, WATCH_READY_SELECTOR, &self.config.detail_wait)
            .await?;

        parse_streaming_services(&html)
    }

    /// Run both phases, handing each film's result to `sink` as soon as it is known
    ///
    /// A failure on one film page is recorded in that film's result and the
    /// run moves on to the next film.
    ///
    /// # Returns
    /// Number of films processed
    ///
    /// # Errors
    /// Only listing failures abort the run
    pub async fn run<F>(&mut self, mut sink: F) -> Result<usize>
    where
        F: FnMut(FilmResult),
    {
        let films = self.fetch_popular().await?;
        let total = films.len();

        for (index, film) in films.into_iter().enumerate() {
            let outcome = self.fetch_streaming(&film.slug).await;

            match &outcome {
                Ok(services) => info!(
                    film = %film.slug,
                    position = index + 1,
                    total,
                    services = services.len(),
                    "fetched streaming info"
                ),
                Err(e) => warn!(film = %film.slug, error = %e, "streaming lookup failed"),
            }

            sink(FilmResult { film, outcome });
        }

        Ok(total)
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Give back the page source, e.g. to close a browser session
    pub fn into_source(self) -> S {
        self.source
    }
}
