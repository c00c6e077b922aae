//! Robots.txt caching implementation
//!
//! Rulesets are fetched lazily, once per robots.txt URL, and kept for the
//! whole run. Failed fetches are cached as allow-all and never retried.

use crate::robots::{fetch_robots, request_path, robots_url_for, RobotsRuleset};
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

/// Per-run cache of robots.txt rulesets keyed by robots.txt URL
#[derive(Debug)]
pub struct RobotsCache {
    rules: HashMap<String, RobotsRuleset>,
    timeout: Duration,
}

impl RobotsCache {
    /// Creates an empty cache
    ///
    /// # Arguments
    ///
    /// * `timeout` - Timeout applied to each robots.txt request
    pub fn new(timeout: Duration) -> Self {
        Self {
            rules: HashMap::new(),
            timeout,
        }
    }

    /// Checks whether a URL may be fetched, fetching robots.txt on first use
    ///
    /// Fails open: if robots.txt cannot be retrieved for any reason the host
    /// is treated as fully open for the rest of the run.
    pub async fn is_allowed(&mut self, client: &Client, url: &Url) -> bool {
        let robots_url = robots_url_for(url);

        if !self.rules.contains_key(&robots_url) {
            let ruleset = match fetch_robots(client, &robots_url, self.timeout).await {
                Ok(ruleset) => {
                    tracing::debug!(
                        "Loaded robots.txt from {} ({} disallow rules)",
                        robots_url,
                        ruleset.disallowed_prefixes().len()
                    );
                    ruleset
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to read robots.txt for {}, assuming open access: {}",
                        robots_url,
                        e
                    );
                    RobotsRuleset::allow_all()
                }
            };
            self.rules.insert(robots_url.clone(), ruleset);
        }

        self.rules
            .get(&robots_url)
            .map(|ruleset| ruleset.is_allowed(&request_path(url)))
            .unwrap_or(true)
    }

    /// Returns the cached ruleset for a robots.txt URL, if any
    pub fn get(&self, robots_url: &str) -> Option<&RobotsRuleset> {
        self.rules.get(robots_url)
    }

    /// Seeds the cache with a known ruleset
    pub fn insert(&mut self, robots_url: impl Into<String>, ruleset: RobotsRuleset) {
        self.rules.insert(robots_url.into(), ruleset);
    }

    /// Number of hosts with a cached ruleset
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
