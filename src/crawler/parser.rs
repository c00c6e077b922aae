//! HTML link extraction
//!
//! This module handles parsing HTML content to find the links to follow.

use crate::url::is_allowed_domain;
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Extracts all links from `<a href>` tags as absolute URLs
///
/// # Link Extraction Rules
///
/// - Relative links are resolved against `base_url`
/// - Fragments are removed, so `page#a` and `page#b` are the same link
/// - Duplicates are dropped, keeping the first occurrence
/// - `javascript:`, `mailto:`, `tel:`, `data:` and fragment-only links are skipped
/// - Only HTTP and HTTPS URLs are returned
///
/// # Example
///
/// ```
/// use sumi_harvest::crawler::extract_links;
/// use url::Url;
///
/// let html = r#"<a href="/budget">Budget</a><a href="/budget#part-2">Part 2</a>"#;
/// let base_url = Url::parse("https://www.finance.gov.pk/").unwrap();
/// let links = extract_links(html, &base_url);
/// assert_eq!(links.len(), 1);
/// assert_eq!(links[0].as_str(), "https://www.finance.gov.pk/budget");
/// ```
pub fn extract_links(html: &str, base_url: &Url) -> Vec<Url> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();
    let mut seen = HashSet::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(absolute_url) = resolve_link(href, base_url) {
                    if seen.insert(absolute_url.as_str().to_string()) {
                        links.push(absolute_url);
                    }
                }
            }
        }
    }

    links
}

/// Extracts the links that may enter the frontier
///
/// Same as [`extract_links`], restricted to hosts matching one of the
/// allowed domain suffixes.
pub fn discover_links(html: &str, base_url: &Url, allowed_suffixes: &[String]) -> Vec<Url> {
    extract_links(html, base_url)
        .into_iter()
        .filter(|link| is_allowed_domain(link, allowed_suffixes))
        .collect()
}

/// Resolves a link href to an absolute URL and validates it
///
/// Returns None if the link should be excluded:
/// - javascript:, mailto:, tel: schemes
/// - data: URIs
/// - Invalid URLs
/// - Non-HTTP(S) URLs after resolution
fn resolve_link(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    let lower = href.to_lowercase();
    if lower.starts_with("javascript:")
        || lower.starts_with("mailto:")
        || lower.starts_with("tel:")
        || lower.starts_with("data:")
    {
        return None;
    }

    // Same page anchors
    if href.starts_with('#') {
        return None;
    }

    let mut absolute_url = base_url.join(href).ok()?;
    if absolute_url.scheme() != "http" && absolute_url.scheme() != "https" {
        return None;
    }
    absolute_url.set_fragment(None);

    Some(absolute_url)
}
