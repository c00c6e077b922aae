use url::Url;

/// Extracts the domain from a URL
///
/// This function retrieves the host portion of a URL and converts it to lowercase.
/// If the URL has no host (e.g. `mailto:` or `data:` URLs), it returns None.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use sumi_harvest::url::extract_domain;
///
/// let url = Url::parse("https://www.finance.gov.pk/budget").unwrap();
/// assert_eq!(extract_domain(&url), Some("www.finance.gov.pk".to_string()));
///
/// let url = Url::parse("https://FABS.GOV.PK/").unwrap();
/// assert_eq!(extract_domain(&url), Some("fabs.gov.pk".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}
