use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure for Sumi-Harvest
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Seed URLs, crawled in order
    #[serde(rename = "seed-urls")]
    pub seed_urls: Vec<String>,

    /// Target corpus size; link expansion stops once it is reached
    #[serde(rename = "min-words")]
    pub min_words: u64,

    /// Fixed delay before every child visit and after each seed (seconds)
    #[serde(rename = "crawl-delay-seconds")]
    pub crawl_delay_seconds: f64,

    /// Maximum link depth from a seed
    #[serde(rename = "max-depth")]
    pub max_depth: u32,

    /// The dataset is flushed each time the word count crosses a multiple of this
    #[serde(rename = "save-interval-words")]
    pub save_interval_words: u64,

    /// Host suffixes that discovered links must match (e.g. ".gov.pk")
    #[serde(rename = "allowed-domain-suffixes")]
    pub allowed_domain_suffixes: Vec<String>,
}

/// Longest accepted crawl delay (seconds)
pub const MAX_CRAWL_DELAY_SECONDS: f64 = 3600.0;

impl CrawlerConfig {
    /// Returns the crawl delay as a Duration
    ///
    /// Out-of-range values are clamped to `0..=MAX_CRAWL_DELAY_SECONDS`; NaN
    /// yields no delay.
    pub fn crawl_delay(&self) -> Duration {
        let seconds = self.crawl_delay_seconds.clamp(0.0, MAX_CRAWL_DELAY_SECONDS);
        Duration::try_from_secs_f64(seconds).unwrap_or(Duration::ZERO)
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            seed_urls: vec![
                "https://www.finance.gov.pk/".to_string(),
                "https://fabs.gov.pk/".to_string(),
                "http://www.pbs.gov.pk/".to_string(),
            ],
            min_words: 1_000_000,
            crawl_delay_seconds: 1.0,
            max_depth: 10,
            save_interval_words: 100_000,
            allowed_domain_suffixes: vec![
                ".gov.pk".to_string(),
                ".edu.pk".to_string(),
                ".gov".to_string(),
                ".edu".to_string(),
            ],
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Timeout for robots.txt requests (seconds)
    #[serde(rename = "robots-timeout-seconds")]
    pub robots_timeout_seconds: u64,

    /// Timeout for page requests (seconds)
    #[serde(rename = "fetch-timeout-seconds")]
    pub fetch_timeout_seconds: u64,
}

impl HttpConfig {
    pub fn robots_timeout(&self) -> Duration {
        Duration::from_secs(self.robots_timeout_seconds)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_seconds)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (compatible; AcademicCrawler/1.0)".to_string(),
            robots_timeout_seconds: 5,
            fetch_timeout_seconds: 10,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Corpus file, one paragraph per line
    #[serde(rename = "dataset-path")]
    pub dataset_path: String,

    /// Log of pages that contributed text
    #[serde(rename = "scraped-urls-path")]
    pub scraped_urls_path: String,

    /// Log of skipped URLs and rejected text
    #[serde(rename = "skipped-log-path")]
    pub skipped_log_path: String,

    /// Markdown run summary
    #[serde(rename = "summary-path")]
    pub summary_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dataset_path: "pakistan_dataset.txt".to_string(),
            scraped_urls_path: "scraped_urls.txt".to_string(),
            skipped_log_path: "skipped_content.log".to_string(),
            summary_path: "crawl_summary.md".to_string(),
        }
    }
}
