//! URL handling module for Sumi-Harvest
//!
//! This module provides domain extraction and the domain allow-list check
//! applied to every discovered link.

mod domain;
mod matcher;

// Re-export main functions
pub use domain::extract_domain;
pub use matcher::matches_suffix;

use url::Url;

/// Checks whether a URL may enter the frontier
///
/// A URL is allowed when its scheme is HTTP or HTTPS and its host matches at
/// least one of the allowed domain suffixes.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use sumi_harvest::url::is_allowed_domain;
///
/// let suffixes = vec![".gov.pk".to_string(), ".edu".to_string()];
///
/// let url = Url::parse("https://fabs.gov.pk/reports").unwrap();
/// assert!(is_allowed_domain(&url, &suffixes));
///
/// let url = Url::parse("https://example.com/").unwrap();
/// assert!(!is_allowed_domain(&url, &suffixes));
///
/// let url = Url::parse("ftp://files.mit.edu/").unwrap();
/// assert!(!is_allowed_domain(&url, &suffixes));
/// ```
pub fn is_allowed_domain(url: &Url, suffixes: &[String]) -> bool {
    if url.scheme() != "http" && url.scheme() != "https" {
        return false;
    }

    match extract_domain(url) {
        Some(domain) => suffixes
            .iter()
            .any(|suffix| matches_suffix(suffix, &domain)),
        None => false,
    }
}
