//! Robots.txt handling module
//!
//! This module provides functionality for fetching, parsing, and caching robots.txt files.

mod cache;
mod parser;

pub use cache::RobotsCache;
pub use parser::RobotsRuleset;

use crate::HarvestError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Fetches and parses a robots.txt file
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `robots_url` - Absolute URL of the robots.txt file
/// * `timeout` - Request timeout
///
/// # Returns
///
/// * `Ok(RobotsRuleset)` - Successfully fetched and parsed robots.txt
/// * `Err(HarvestError)` - Transport failure or non-2xx status
pub async fn fetch_robots(
    client: &Client,
    robots_url: &str,
    timeout: Duration,
) -> Result<RobotsRuleset, HarvestError> {
    let response = client
        .get(robots_url)
        .timeout(timeout)
        .send()
        .await?
        .error_for_status()?;
    let body = response.text().await?;
    Ok(RobotsRuleset::parse(&body))
}

/// Derives the robots.txt URL for a page from its scheme, host and port
///
/// # Example
///
/// ```
/// use url::Url;
/// use sumi_harvest::robots::robots_url_for;
///
/// let url = Url::parse("https://www.finance.gov.pk/budget/2024?lang=en").unwrap();
/// assert_eq!(robots_url_for(&url), "https://www.finance.gov.pk/robots.txt");
/// ```
pub fn robots_url_for(url: &Url) -> String {
    format!("{}/robots.txt", url.origin().ascii_serialization())
}

/// Returns the path and query of a URL as matched against disallow prefixes
pub fn request_path(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}
