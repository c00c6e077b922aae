//! Crawler coordinator - main harvest orchestration logic
//!
//! This module contains the traversal loop that ties everything together:
//! - Depth and visited checks for each frontier entry
//! - Robots.txt policy and page fetching
//! - Content extraction, dedup and paragraph filtering
//! - Dataset persistence and audit records
//! - Link expansion until the word target is reached

use crate::config::Config;
use crate::content::filter::{self, MIN_WORDS_EXCLUSIVE};
use crate::content::{
    self, ContentKind, DedupIndex, PdfExtractSource, PdfTextSource, Rejection, REASON_DUPLICATE,
};
use crate::crawler::fetcher::{build_http_client, fetch_page, FetchedPage};
use crate::crawler::frontier::{Frontier, QueuedUrl};
use crate::crawler::parser::discover_links;
use crate::output::{count_skips, crossed_interval, write_summary, AuditLog, Dataset, RunSummary};
use crate::robots::RobotsCache;
use crate::HarvestError;
use chrono::Utc;
use reqwest::Client;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use url::Url;

/// Why a frontier entry was not processed
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Skip {
    #[error("Maximum recursion depth exceeded")]
    DepthExceeded,

    #[error("Already visited")]
    AlreadyVisited,

    #[error("Blocked by robots.txt")]
    RobotsDenied,

    #[error("Request error: {0}")]
    Request(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// What a processed page contributed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageReport {
    pub kind: ContentKind,
    /// Paragraphs appended to the dataset
    pub paragraphs_accepted: usize,
    /// Words appended to the dataset
    pub words_accepted: u64,
    /// In-domain links to follow, in discovery order
    pub links: Vec<Url>,
}

/// Outcome of visiting one frontier entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visit {
    Processed(PageReport),
    Skipped(Skip),
}

/// Main crawler structure
///
/// Owns all mutable state of a run: the visited set, robots cache, dedup
/// index, dataset and audit log.
pub struct Crawler {
    config: Config,
    client: Client,
    robots: RobotsCache,
    dedup: DedupIndex,
    visited: HashSet<String>,
    dataset: Dataset,
    audit: AuditLog,
    pdf_source: Box<dyn PdfTextSource>,
    frontier: Frontier,
    config_hash: Option<String>,
    pages_visited: u64,
    pages_fetched: u64,
}

impl Crawler {
    /// Creates a new crawler instance
    ///
    /// # Arguments
    ///
    /// * `config` - The harvest configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - Successfully created crawler
    /// * `Err(HarvestError)` - The HTTP client could not be built
    pub fn new(config: Config) -> Result<Self, HarvestError> {
        let client = build_http_client(&config.http)?;
        let robots = RobotsCache::new(config.http.robots_timeout());
        let dataset = Dataset::new(&config.output.dataset_path);
        let audit = AuditLog::new(
            &config.output.skipped_log_path,
            &config.output.scraped_urls_path,
        );

        Ok(Self {
            config,
            client,
            robots,
            dedup: DedupIndex::new(),
            visited: HashSet::new(),
            dataset,
            audit,
            pdf_source: Box::new(PdfExtractSource),
            frontier: Frontier::new(),
            config_hash: None,
            pages_visited: 0,
            pages_fetched: 0,
        })
    }

    /// Replaces the PDF text source
    pub fn with_pdf_source(mut self, source: impl PdfTextSource + 'static) -> Self {
        self.pdf_source = Box::new(source);
        self
    }

    /// Records the configuration hash in the run summary
    pub fn with_config_hash(mut self, hash: impl Into<String>) -> Self {
        self.config_hash = Some(hash.into());
        self
    }

    /// Runs a complete harvest
    ///
    /// This will:
    /// 1. Remove artifacts left by a previous run
    /// 2. Crawl each seed in order until the word target is met
    /// 3. Flush the dataset
    /// 4. Write the markdown summary
    ///
    /// Only I/O failures on the output artifacts abort the run.
    pub async fn run(&mut self) -> Result<RunSummary, HarvestError> {
        let started_at = Utc::now();
        self.reset_artifacts()?;

        let seeds = self.config.crawler.seed_urls.clone();
        for seed in &seeds {
            if self.target_reached() {
                tracing::info!(
                    "Target of {} words reached, skipping remaining seeds",
                    self.config.crawler.min_words
                );
                break;
            }

            let seed_url = Url::parse(seed)?;
            tracing::info!("Crawling seed: {}", seed_url);
            self.crawl(&seed_url).await?;
            tokio::time::sleep(self.config.crawler.crawl_delay()).await;
        }

        self.dataset.flush()?;

        let summary = self.summary(started_at);
        write_summary(&summary, Path::new(&self.config.output.summary_path))?;
        tracing::info!(
            "Harvest finished: {} words in {} paragraphs from {} pages ({} distinct texts seen)",
            summary.word_count,
            summary.paragraphs,
            summary.pages_scraped,
            self.dedup.len()
        );

        Ok(summary)
    }

    /// Crawls depth-first from a single seed
    ///
    /// Once the word target is reached, URLs already queued are still
    /// visited but no new links are gathered from them.
    pub async fn crawl(&mut self, seed: &Url) -> Result<(), HarvestError> {
        self.frontier.push(seed.clone(), 0);

        while let Some(QueuedUrl { url, depth }) = self.frontier.pop() {
            let visit = match self.visit(&url, depth).await {
                Ok(visit) => visit,
                Err(e @ HarvestError::Output { .. }) => return Err(e),
                Err(e) => {
                    tracing::error!("Unexpected error processing {}: {}", url, e);
                    let skip = Skip::Unexpected(e.to_string());
                    self.audit.log_skip(&skip.to_string(), Some(url.as_str()), None)?;
                    Visit::Skipped(skip)
                }
            };

            if let Visit::Processed(report) = visit {
                self.frontier.push_children(report.links, depth + 1);
            }
        }

        Ok(())
    }

    /// Processes a single frontier entry
    ///
    /// This method:
    /// 1. Checks the depth limit and the visited set
    /// 2. Waits the crawl delay (non-seed entries only)
    /// 3. Checks robots.txt
    /// 4. Fetches the page
    /// 5. Extracts and accepts its text
    /// 6. Collects in-domain links while the target is not reached
    pub async fn visit(&mut self, url: &Url, depth: u32) -> Result<Visit, HarvestError> {
        if depth > self.config.crawler.max_depth {
            return self.skip(url, Skip::DepthExceeded);
        }

        if !self.visited.insert(url.as_str().to_string()) {
            return Ok(Visit::Skipped(Skip::AlreadyVisited));
        }
        self.pages_visited += 1;

        if depth > 0 {
            tokio::time::sleep(self.config.crawler.crawl_delay()).await;
        }

        if !self.robots.is_allowed(&self.client, url).await {
            tracing::info!("URL {} disallowed by robots.txt", url);
            return self.skip(url, Skip::RobotsDenied);
        }

        let page = match fetch_page(&self.client, url, self.config.http.fetch_timeout()).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!("Failed to fetch {}: {}", url, e);
                return self.skip(url, Skip::Request(e.to_string()));
            }
        };
        self.pages_fetched += 1;
        tracing::debug!(
            "Fetched {} (status {}, content-type '{}', {} bytes)",
            page.final_url,
            page.status_code,
            page.content_type,
            page.body.len()
        );

        let (paragraphs_accepted, words_accepted) = self.accept_content(&page)?;

        let links = match page.html() {
            Some(html) if !self.target_reached() => {
                discover_links(html, &page.final_url, &self.config.crawler.allowed_domain_suffixes)
            }
            _ => Vec::new(),
        };

        Ok(Visit::Processed(PageReport {
            kind: page.kind,
            paragraphs_accepted,
            words_accepted,
            links,
        }))
    }

    /// Runs a fetched page through extraction, dedup and paragraph filtering
    ///
    /// Returns the number of paragraphs and words added to the dataset.
    fn accept_content(&mut self, page: &FetchedPage) -> Result<(usize, u64), HarvestError> {
        let extracted = match content::extract(page, self.pdf_source.as_ref()) {
            Ok(extracted) => extracted,
            Err(rejection) => {
                self.audit.log_rejection(&rejection)?;
                return Ok((0, 0));
            }
        };

        if extracted.text.is_empty() {
            return Ok((0, 0));
        }

        if !self.dedup.admit(&extracted.text) {
            tracing::debug!("Duplicate content at {}", page.url);
            self.audit
                .log_rejection(&Rejection::text(REASON_DUPLICATE, &extracted.text))?;
            return Ok((0, 0));
        }

        let words_before = self.dataset.word_count();
        let mut accepted = 0;

        for line in extracted.text.lines() {
            match filter::clean(line) {
                Ok(paragraph) if filter::word_count(&paragraph) > MIN_WORDS_EXCLUSIVE => {
                    self.dataset.push(paragraph);
                    accepted += 1;
                }
                Ok(_) => {}
                Err(rejection) => self.audit.log_rejection(&rejection)?,
            }
        }

        let words_after = self.dataset.word_count();
        if accepted > 0 {
            self.audit.log_scrape(page.url.as_str(), extracted.description)?;

            if crossed_interval(words_before, words_after, self.config.crawler.save_interval_words) {
                self.dataset.flush()?;
            }
        }

        tracing::info!(
            "Processed {}: {} paragraphs, {}/{} words",
            page.url,
            accepted,
            words_after,
            self.config.crawler.min_words
        );

        Ok((accepted, words_after - words_before))
    }

    fn skip(&mut self, url: &Url, skip: Skip) -> Result<Visit, HarvestError> {
        self.audit.log_skip(&skip.to_string(), Some(url.as_str()), None)?;
        Ok(Visit::Skipped(skip))
    }

    fn reset_artifacts(&mut self) -> Result<(), HarvestError> {
        self.dataset.remove_file()?;
        self.audit.reset()
    }

    fn summary(&self, started_at: chrono::DateTime<Utc>) -> RunSummary {
        RunSummary {
            started_at,
            finished_at: Utc::now(),
            config_hash: self.config_hash.clone(),
            seeds: self.config.crawler.seed_urls.clone(),
            target_words: self.config.crawler.min_words,
            word_count: self.dataset.word_count(),
            paragraphs: self.dataset.paragraphs().len(),
            pages_visited: self.pages_visited,
            pages_fetched: self.pages_fetched,
            pages_scraped: self.audit.scraped().len(),
            skip_counts: count_skips(&self.audit),
        }
    }

    /// Whether the corpus has reached the configured size
    pub fn target_reached(&self) -> bool {
        self.dataset.word_count() >= self.config.crawler.min_words
    }

    pub fn word_count(&self) -> u64 {
        self.dataset.word_count()
    }

    pub fn paragraphs(&self) -> &[String] {
        self.dataset.paragraphs()
    }

    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }

    pub fn has_visited(&self, url: &Url) -> bool {
        self.visited.contains(url.as_str())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Runs a harvest with the given configuration
///
/// # Example
///
/// ```no_run
/// use sumi_harvest::config::load_config;
/// use sumi_harvest::crawler::harvest;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("harvest.toml"))?;
/// let summary = harvest(config).await?;
/// println!("{} words", summary.word_count);
/// # Ok(())
/// # }
/// ```
pub async fn harvest(config: Config) -> Result<RunSummary, HarvestError> {
    let mut crawler = Crawler::new(config)?;
    crawler.run().await
}
