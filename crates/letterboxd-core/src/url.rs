//! URL helper functions for letterboxd.com
//!
//! Provides the listing URL, film URL construction and slug extraction.

pub const BASE_URL: &str = "https://letterboxd.com";

const HOST: &str = "letterboxd.com";

/// Listing of films popular this week
pub const POPULAR_THIS_WEEK_URL: &str = "https://letterboxd.com/films/popular/this/week/";

/// Builds the film detail page URL from its slug
///
/// # Example
/// ```
/// use letterboxd_core::url::build_film_url;
/// let url = build_film_url("the-batman");
/// assert_eq!(url, "https://letterboxd.com/film/the-batman/");
/// ```
pub fn build_film_url(slug: &str) -> String {
    format!("{}/film/{}/", BASE_URL, urlencoding::encode(slug))
}

/// Extracts the film slug from a link target
///
/// Accepts relative paths (`/film/the-batman/`), absolute URLs on
/// letterboxd.com or one of its subdomains over either scheme, and
/// protocol-relative `//letterboxd.com/...` links. Query strings and
/// fragments are ignored. Links that do not point at a film page return
/// `None`.
///
/// # Example
/// ```
/// use letterboxd_core::url::extract_film_slug;
/// assert_eq!(extract_film_slug("/film/abc/"), Some("abc".to_string()));
/// assert_eq!(extract_film_slug("/films/popular/"), None);
/// ```
pub fn extract_film_slug(href: &str) -> Option<String> {
    let path = strip_origin(href)?;
    let path = path.split(['?', '#']).next().unwrap_or(path);

    let mut parts = path.trim_start_matches('/').split('/');
    if parts.next()? != "film" {
        return None;
    }

    let slug = parts.next()?;
    if slug.is_empty() {
        return None;
    }

    Some(slug.to_string())
}

/// Removes `scheme://host` or `//host` from a link, leaving its path
///
/// Returns `None` for links to other sites.
fn strip_origin(href: &str) -> Option<&str> {
    let rest = match href.split_once("://") {
        Some((scheme, rest)) if !scheme.contains(['/', '?', '#']) => rest,
        _ => match href.strip_prefix("//") {
            Some(rest) => rest,
            None => return Some(href),
        },
    };

    let (authority, path) = match rest.find(['/', '?', '#']) {
        Some(index) => rest.split_at(index),
        None => (rest, ""),
    };

    // Drop credentials and port
    let host = authority.rsplit('@').next().unwrap_or(authority);
    let host = host.split(':').next().unwrap_or(host).to_ascii_lowercase();

    if host == HOST || host.ends_with(&format!(".{}", HOST)) {
        Some(path)
    } else {
        None
    }
}

/// Turns a slug into a readable title (`the-batman` -> `The Batman`)
pub fn humanize_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
