use crate::config::types::{
    Config, CrawlerConfig, HttpConfig, OutputConfig, MAX_CRAWL_DELAY_SECONDS,
};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_http_config(&config.http)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    // max_depth >= 0 is always true for u32, so no check needed

    validate_seed_urls(&config.seed_urls)?;

    if config.min_words < 1 {
        return Err(ConfigError::Validation(
            "min_words must be >= 1".to_string(),
        ));
    }

    if config.save_interval_words < 1 {
        return Err(ConfigError::Validation(
            "save_interval_words must be >= 1".to_string(),
        ));
    }

    if !config.crawl_delay_seconds.is_finite() || config.crawl_delay_seconds < 0.0 {
        return Err(ConfigError::Validation(format!(
            "crawl_delay_seconds must be a non-negative number, got {}",
            config.crawl_delay_seconds
        )));
    }

    if config.crawl_delay_seconds > MAX_CRAWL_DELAY_SECONDS {
        return Err(ConfigError::Validation(format!(
            "crawl_delay_seconds must be at most {}, got {}",
            MAX_CRAWL_DELAY_SECONDS, config.crawl_delay_seconds
        )));
    }

    if config.allowed_domain_suffixes.is_empty() {
        return Err(ConfigError::Validation(
            "allowed_domain_suffixes must contain at least one suffix".to_string(),
        ));
    }

    for suffix in &config.allowed_domain_suffixes {
        validate_domain_suffix(suffix)?;
    }

    Ok(())
}

/// Validates seed URLs: at least one, each an absolute HTTP(S) URL
fn validate_seed_urls(seeds: &[String]) -> Result<(), ConfigError> {
    if seeds.is_empty() {
        return Err(ConfigError::Validation(
            "seed_urls must contain at least one URL".to_string(),
        ));
    }

    for seed in seeds {
        let url = Url::parse(seed)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid seed URL '{}': {}", seed, e)))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::Validation(format!(
                "Seed URL '{}' must use HTTP or HTTPS scheme",
                seed
            )));
        }

        if url.host_str().is_none() {
            return Err(ConfigError::InvalidUrl(format!(
                "Seed URL '{}' has no host",
                seed
            )));
        }
    }

    Ok(())
}

/// Validates HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.robots_timeout_seconds < 1 {
        return Err(ConfigError::Validation(
            "robots_timeout_seconds must be >= 1".to_string(),
        ));
    }

    if config.fetch_timeout_seconds < 1 {
        return Err(ConfigError::Validation(
            "fetch_timeout_seconds must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    for (name, value) in [
        ("dataset_path", &config.dataset_path),
        ("scraped_urls_path", &config.scraped_urls_path),
        ("skipped_log_path", &config.skipped_log_path),
        ("summary_path", &config.summary_path),
    ] {
        if value.is_empty() {
            return Err(ConfigError::Validation(format!("{} cannot be empty", name)));
        }
    }

    Ok(())
}

/// Validates an allowed-domain suffix such as ".gov.pk" or "edu"
fn validate_domain_suffix(suffix: &str) -> Result<(), ConfigError> {
    let domain = suffix.strip_prefix('.').unwrap_or(suffix);

    if domain.is_empty() {
        return Err(ConfigError::InvalidPattern(format!(
            "Domain suffix '{}' is empty",
            suffix
        )));
    }

    if !domain
        .chars()
        .all(|c| c.is_alphanumeric() || c == '.' || c == '-')
    {
        return Err(ConfigError::InvalidPattern(format!(
            "Domain suffix '{}' contains invalid characters",
            suffix
        )));
    }

    if domain.starts_with('.')
        || domain.ends_with('.')
        || domain.starts_with('-')
        || domain.ends_with('-')
    {
        return Err(ConfigError::InvalidPattern(format!(
            "Domain suffix '{}' cannot start or end with '.' or '-'",
            suffix
        )));
    }

    if domain.contains("..") {
        return Err(ConfigError::InvalidPattern(format!(
            "Domain suffix '{}' cannot contain consecutive dots",
            suffix
        )));
    }

    Ok(())
}
