//! Popular listing parser for letterboxd.com
//!
//! Parses the rendered "popular this week" page and extracts films in
//! the order their posters appear.

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::error::{Result, ScrapeError};
use crate::types::Film;
use crate::url::{build_film_url, extract_film_slug, humanize_slug};

/// One way of locating film containers on the listing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerStrategy {
    pub name: &'static str,
    pub selector: &'static str,
}

/// Container strategies in the order they are tried
pub const CONTAINER_STRATEGIES: &[ContainerStrategy] = &[
    ContainerStrategy {
        name: "poster-container",
        selector: "li.poster-container",
    },
    ContainerStrategy {
        name: "poster-list",
        selector: "ul.poster-list li",
    },
    ContainerStrategy {
        name: "listitem",
        selector: "li.listitem",
    },
];

/// Attributes that carry the film slug directly
const SLUG_ATTRIBUTES: &[&str] = &["data-film-slug", "data-item-slug"];

/// Selector matching any container strategy, used as the render readiness check
pub fn listing_ready_selector() -> String {
    CONTAINER_STRATEGIES
        .iter()
        .map(|s| s.selector)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parses listing HTML and returns up to `limit` films
///
/// # Arguments
/// * `html` - Rendered HTML of the listing page
/// * `limit` - Maximum number of films to return
///
/// # Returns
/// Films in page order, empty if no strategy finds any container
///
/// # Errors
/// Returns `ParseError` if a built-in selector fails to parse
pub fn parse_listing(html: &str, limit: usize) -> Result<Vec<Film>> {
    let document = Html::parse_document(html);

    let containers = match find_containers(&document) {
        Ok(containers) => containers,
        Err(ScrapeError::StructureMismatch(tried)) => {
            warn!(tried = %tried, "no film containers found on listing page");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e),
    };

    let films = containers
        .iter()
        .filter_map(parse_film_container)
        .take(limit)
        .collect();

    Ok(films)
}

/// Applies the container strategies in order, returning the first non-empty match
///
/// # Errors
/// `StructureMismatch` listing every selector tried when none match
pub fn find_containers(document: &Html) -> Result<Vec<ElementRef<'_>>> {
    for strategy in CONTAINER_STRATEGIES {
        let selector = parse_selector(strategy.selector)?;
        let containers: Vec<_> = document.select(&selector).collect();

        if !containers.is_empty() {
            debug!(
                strategy = strategy.name,
                count = containers.len(),
                "listing containers matched"
            );
            return Ok(containers);
        }
        debug!(strategy = strategy.name, "no containers, trying next strategy");
    }

    Err(ScrapeError::StructureMismatch(listing_ready_selector()))
}

/// Extracts a film from one container, `None` if no slug can be found
fn parse_film_container(container: &ElementRef) -> Option<Film> {
    let (slug, title) = match slug_from_attributes(container) {
        Some((slug, holder)) => {
            let title = image_alt(&holder);
            (slug, title)
        }
        None => {
            let slug = slug_from_link(container)?;
            let title = image_alt(container);
            (slug, title)
        }
    };

    let title = title.unwrap_or_else(|| humanize_slug(&slug));
    let url = build_film_url(&slug);

    Some(Film { slug, title, url })
}

/// Finds a slug attribute on the container itself or any descendant
///
/// Returns the slug together with the element carrying it.
fn slug_from_attributes<'a>(container: &ElementRef<'a>) -> Option<(String, ElementRef<'a>)> {
    container
        .descendants()
        .filter_map(ElementRef::wrap)
        .find_map(|element| {
            SLUG_ATTRIBUTES
                .iter()
                .filter_map(|attr| element.value().attr(attr))
                .map(str::trim)
                .find(|slug| !slug.is_empty())
                .map(|slug| (slug.to_string(), element))
        })
}

/// Falls back to the first link that points at a film page
fn slug_from_link(container: &ElementRef) -> Option<String> {
    let link_selector = Selector::parse("a[href]").ok()?;

    container
        .select(&link_selector)
        .filter_map(|a| a.value().attr("href"))
        .find_map(extract_film_slug)
}

fn image_alt(element: &ElementRef) -> Option<String> {
    let img_selector = Selector::parse("img[alt]").ok()?;

    element
        .select(&img_selector)
        .filter_map(|img| img.value().attr("alt"))
        .map(|alt| alt.trim().to_string())
        .find(|alt| !alt.is_empty())
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| ScrapeError::ParseError(format!("Invalid selector {}: {:?}", selector, e)))
}
