//! Report lines for scraped films

use serde::Serialize;

use crate::error::{Result, ScrapeError};
use crate::types::FilmResult;

/// Shown when a film has no streaming services
pub const NO_SERVICES: &str = "(none)";

/// Output format for report lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// `slug: Service, Service`
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Serialize)]
struct FilmReport<'a> {
    slug: &'a str,
    title: &'a str,
    url: &'a str,
    services: &'a [String],
    error: Option<&'a ScrapeError>,
}

/// Formats one film result as a report line in the given format
pub fn format_line(result: &FilmResult, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(format_text_line(result)),
        ReportFormat::Json => format_json_line(result),
    }
}

/// `a: Netflix, MUBI`, `b: (none)` or `c: (error: ...)`
pub fn format_text_line(result: &FilmResult) -> String {
    let detail = match &result.outcome {
        Ok(services) if services.is_empty() => NO_SERVICES.to_string(),
        Ok(services) => services.join(", "),
        Err(e) => format!("(error: {})", e),
    };
    format!("{}: {}", result.film.slug, detail)
}

/// Single-line JSON object with slug, title, url, services and error
pub fn format_json_line(result: &FilmResult) -> Result<String> {
    let report = FilmReport {
        slug: &result.film.slug,
        title: &result.film.title,
        url: &result.film.url,
        services: result.services(),
        error: result.outcome.as_ref().err(),
    };
    Ok(serde_json::to_string(&report)?)
}
