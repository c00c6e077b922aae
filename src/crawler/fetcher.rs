//! HTTP fetcher implementation
//!
//! This module handles all page requests for the crawler, including:
//! - Building the HTTP client with the configured user agent
//! - GET requests with a per-request timeout
//! - Content-Type classification
//! - Error classification
//!
//! Nothing is retried: a failed request is final for that URL.

use crate::config::HttpConfig;
use crate::content::ContentKind;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// A successfully fetched response
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// The URL that was requested
    pub url: Url,
    /// Final URL after redirects; relative links resolve against it
    pub final_url: Url,
    /// HTTP status code
    pub status_code: u16,
    /// Content-Type header value (lowercased, empty if missing)
    pub content_type: String,
    /// Broad content type used for dispatch
    pub kind: ContentKind,
    /// Raw response body
    pub body: Vec<u8>,
    /// Decoded markup, for non-PDF responses only
    html: Option<String>,
}

impl FetchedPage {
    /// Builds a page from a response body
    pub fn new(url: Url, final_url: Url, status_code: u16, content_type: &str, body: Vec<u8>) -> Self {
        let content_type = content_type.to_lowercase();
        let kind = ContentKind::from_content_type(&content_type);
        let html = if kind.is_pdf() {
            None
        } else {
            Some(String::from_utf8_lossy(&body).into_owned())
        };

        Self {
            url,
            final_url,
            status_code,
            content_type,
            kind,
            body,
            html,
        }
    }

    /// Returns the decoded markup of a non-PDF page
    pub fn html(&self) -> Option<&str> {
        self.html.as_deref()
    }
}

/// Why a fetch failed
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The server answered with a non-2xx status
    #[error("HTTP {status_code} for url: {url}")]
    Status { status_code: u16, url: String },

    /// The request timed out
    #[error("Request timeout for url: {url}")]
    Timeout { url: String },

    /// DNS, connection, TLS or body transfer failure
    #[error("{error}")]
    Network { error: String },
}

/// Builds an HTTP client with proper configuration
///
/// TLS certificates are verified and redirects are followed with reqwest's
/// default policy.
///
/// # Example
///
/// ```no_run
/// use sumi_harvest::config::HttpConfig;
/// use sumi_harvest::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .connect_timeout(config.fetch_timeout())
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
/// * `timeout` - Timeout for the whole request, body included
///
/// # Returns
///
/// The fetched page, or the classified failure
pub async fn fetch_page(client: &Client, url: &Url, timeout: Duration) -> Result<FetchedPage, FetchError> {
    let response = client
        .get(url.clone())
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status_code: status.as_u16(),
            url: url.to_string(),
        });
    }

    let final_url = response.url().clone();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    let body = response
        .bytes()
        .await
        .map_err(|e| classify_error(url, e))?;

    Ok(FetchedPage::new(
        url.clone(),
        final_url,
        status.as_u16(),
        &content_type,
        body.to_vec(),
    ))
}

fn classify_error(url: &Url, e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else if e.is_connect() {
        FetchError::Network {
            error: format!("Connection failed for url: {}", url),
        }
    } else {
        FetchError::Network {
            error: e.to_string(),
        }
    }
}
