//! Sumi-Harvest: a focused text-corpus crawler
//!
//! This crate crawls a small set of seed government and academic sites,
//! respecting robots.txt, and accumulates a deduplicated plain-text corpus
//! of cleaned paragraphs until a target word count is reached.

pub mod config;
pub mod content;
pub mod crawler;
pub mod output;
pub mod robots;
pub mod url;

use thiserror::Error;

/// Main error type for Sumi-Harvest operations
///
/// Only failures that must abort the run end up here. Per-URL problems
/// (policy denials, transport errors, rejected content) are reported as
/// [`crawler::Skip`] and [`content::Rejection`] values instead.
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    #[error("IO error on {path}: {source}")]
    Output {
        path: String,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid domain pattern: {0}")]
    InvalidPattern(String),
}

/// Errors raised while turning fetched bytes into text
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("PDF extractor panicked: {0}")]
    PdfPanic(String),
}

/// Result type alias for Sumi-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{Crawler, Skip, Visit};
pub use url::{extract_domain, is_allowed_domain, matches_suffix};
