/// Checks if a host matches an allowed domain suffix
///
/// A suffix matches on label boundaries only. The leading dot is optional:
/// ".gov.pk" and "gov.pk" both match:
///    - "gov.pk" (the bare suffix)
///    - "finance.gov.pk" (single subdomain)
///    - "www.finance.gov.pk" (nested subdomains)
///
/// Both arguments are compared case-insensitively.
///
/// # Examples
///
/// ```
/// use sumi_harvest::url::matches_suffix;
///
/// assert!(matches_suffix(".gov.pk", "www.finance.gov.pk"));
/// assert!(matches_suffix(".edu", "mit.edu"));
/// assert!(!matches_suffix(".gov", "government.com"));
/// assert!(!matches_suffix(".gov.pk", "example.com"));
/// ```
pub fn matches_suffix(suffix: &str, host: &str) -> bool {
    let base = suffix.trim_start_matches('.').to_lowercase();
    if base.is_empty() {
        return false;
    }

    let host = host.to_lowercase();
    host == base || host.ends_with(&format!(".{}", base))
}
