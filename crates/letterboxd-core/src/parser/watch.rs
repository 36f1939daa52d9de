//! "Where to watch" parser for letterboxd.com film pages
//!
//! Reads the streaming service entries from a rendered film page.
//! Service names come from the entry's class tokens (`-netflix`,
//! `-amazon`, ...), not from visible text.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::error::{Result, ScrapeError};

/// Selector for the "where to watch" panel
pub const WATCH_SECTION_SELECTOR: &str = "#watch";

/// Render readiness check for film pages
///
/// Matches once the panel holds service entries or a "not streaming"
/// notice, not just the empty panel shell.
pub const WATCH_READY_SELECTOR: &str =
    "#watch section.services p.service, #watch .no-services, #watch .not-streaming";

const SERVICE_ENTRY_SELECTOR: &str = "section.services p.service";

/// Class tokens on entries that are UI controls, not services
const NON_SERVICE_TOKENS: &[&str] = &["showmore"];

/// Class token prefix to canonical service name
///
/// When several prefixes match, the longest one wins.
const SERVICE_NAMES: &[(&str, &str)] = &[
    ("amazon", "Amazon"),
    ("amazon-prime", "Amazon Prime Video"),
    ("amazonprimevideo", "Amazon Prime Video"),
    ("apple-itunes", "Apple TV"),
    ("apple-tv-plus", "Apple TV+"),
    ("criterion", "Criterion Channel"),
    ("disney", "Disney+"),
    ("google-play", "Google Play"),
    ("hbo", "Max"),
    ("hulu", "Hulu"),
    ("kanopy", "Kanopy"),
    ("max", "Max"),
    ("mubi", "MUBI"),
    ("netflix", "Netflix"),
    ("paramount", "Paramount+"),
    ("peacock", "Peacock"),
    ("plex", "Plex"),
    ("shudder", "Shudder"),
    ("tubi", "Tubi"),
    ("vudu", "Fandango at Home"),
    ("youtube", "YouTube"),
];

/// Parses a film page and returns its streaming services
///
/// # Arguments
/// * `html` - Rendered HTML of a film detail page
///
/// # Returns
/// Service names in page order with duplicates removed. Empty when the
/// page has no "where to watch" panel or the panel lists no services;
/// the two cases are not distinguished.
///
/// # Errors
/// Returns `ParseError` if a built-in selector fails to parse
pub fn parse_streaming_services(html: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);

    let watch_selector = parse_selector(WATCH_SECTION_SELECTOR)?;
    let Some(watch) = document.select(&watch_selector).next() else {
        debug!("film page has no where-to-watch section");
        return Ok(Vec::new());
    };

    let entry_selector = parse_selector(SERVICE_ENTRY_SELECTOR)?;
    let mut services: Vec<String> = Vec::new();

    for entry in watch.select(&entry_selector) {
        if let Some(name) = service_from_entry(&entry)
            && !services.contains(&name)
        {
            services.push(name);
        }
    }

    Ok(services)
}

/// Resolves one `p.service` entry to a service name
///
/// Uses the first `-`-prefixed class token. Entries whose token marks a UI
/// control are skipped.
fn service_from_entry(entry: &ElementRef) -> Option<String> {
    let token = entry
        .value()
        .classes()
        .find_map(|class| class.strip_prefix('-'))?;

    if NON_SERVICE_TOKENS.contains(&token) {
        return None;
    }

    Some(service_name(token))
}

/// Maps a class token (without its leading `-`) to a service name
///
/// Unknown tokens pass through as a title-cased label, so a service that
/// is missing from the table still shows up in the report.
pub fn service_name(token: &str) -> String {
    SERVICE_NAMES
        .iter()
        .filter(|(prefix, _)| token.starts_with(prefix))
        .max_by_key(|(prefix, _)| prefix.len())
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| crate::url::humanize_slug(token))
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| ScrapeError::ParseError(format!("Invalid selector {}: {:?}", selector, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn film_page(entries: &str) -> String {
        format!(
            r#"
            <html><body>
            <div id="watch">
                <h3>Where to watch</h3>
                <section class="services">{entries}</section>
            </div>
            </body></html>
            "#
        )
    }

    #[test]
    fn test_single_amazon_entry() {
        let html = film_page(r##"<p class="service -amazon"><a href="#">Amazon</a></p>"##);
        let services = parse_streaming_services(&html).unwrap();
        assert_eq!(services, vec!["Amazon".to_string()]);
    }

    #[test]
    fn test_showmore_entry_is_skipped() {
        let html = film_page(
            r##"
            <p class="service -netflix">Netflix</p>
            <p class="service -showmore"><a href="#">More services</a></p>
            "##,
        );
        let services = parse_streaming_services(&html).unwrap();
        assert_eq!(services, vec!["Netflix".to_string()]);
    }

    #[test]
    fn test_only_showmore_yields_empty() {
        let html = film_page(r#"<p class="service -showmore">More</p>"#);
        assert!(parse_streaming_services(&html).unwrap().is_empty());
    }

    #[test]
    fn test_missing_watch_section_is_empty() {
        let html = "<html><body><section class=\"film-header\">Title</section></body></html>";
        let services = parse_streaming_services(html).unwrap();
        assert!(services.is_empty());
    }

    #[test]
    fn test_watch_section_without_services_is_empty() {
        let html = r#"<div id="watch"><p>Not streaming.</p></div>"#;
        assert!(parse_streaming_services(html).unwrap().is_empty());
    }

    #[test]
    fn test_services_outside_watch_section_are_ignored() {
        let html = r#"
        <section class="services"><p class="service -netflix"></p></section>
        <div id="watch"><section class="services"><p class="service -mubi"></p></section></div>
        "#;
        let services = parse_streaming_services(html).unwrap();
        assert_eq!(services, vec!["MUBI".to_string()]);
    }

    #[test]
    fn test_duplicates_removed_in_page_order() {
        let html = film_page(
            r#"
            <p class="service -netflix"></p>
            <p class="service -amazon"></p>
            <p class="service -netflix"></p>
            "#,
        );
        let services = parse_streaming_services(&html).unwrap();
        assert_eq!(services, vec!["Netflix".to_string(), "Amazon".to_string()]);
    }

    #[test]
    fn test_unknown_token_passes_through() {
        let html = film_page(r#"<p class="service -film-movement-plus"></p>"#);
        let services = parse_streaming_services(&html).unwrap();
        assert_eq!(services, vec!["Film Movement Plus".to_string()]);
    }

    #[test]
    fn test_entry_without_dash_token_is_skipped() {
        let html = film_page(r#"<p class="service"></p><p class="service -hulu"></p>"#);
        let services = parse_streaming_services(&html).unwrap();
        assert_eq!(services, vec!["Hulu".to_string()]);
    }

    #[test]
    fn test_service_name_longest_prefix_wins() {
        assert_eq!(service_name("amazon"), "Amazon");
        assert_eq!(service_name("amazon-prime"), "Amazon Prime Video");
        assert_eq!(service_name("amazon-prime-with-ads"), "Amazon Prime Video");
        assert_eq!(service_name("apple-tv-plus-us"), "Apple TV+");
        assert_eq!(service_name("netflix-basic-with-ads"), "Netflix");
    }

    #[test]
    fn test_service_name_unknown() {
        assert_eq!(service_name("crunchyroll"), "Crunchyroll");
    }

    fn ready_matches(html: &str) -> bool {
        let selector = Selector::parse(WATCH_READY_SELECTOR).unwrap();
        Html::parse_document(html).select(&selector).next().is_some()
    }

    #[test]
    fn test_ready_selector_waits_past_empty_panel() {
        assert!(!ready_matches(&film_page("")));
        assert!(!ready_matches("<html><body></body></html>"));
    }

    #[test]
    fn test_ready_selector_matches_rendered_entries() {
        assert!(ready_matches(&film_page(r#"<p class="service -netflix"></p>"#)));
    }

    #[test]
    fn test_ready_selector_matches_not_streaming_notice() {
        let html = r#"<div id="watch"><p class="no-services">Not streaming.</p></div>"#;
        assert!(ready_matches(html));
    }
}
