//! Shared fixtures for the integration tests

use sumi_harvest::config::{Config, CrawlerConfig, HttpConfig, OutputConfig};
use sumi_harvest::content::PdfTextSource;
use sumi_harvest::ContentError;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// 12 words
pub const PARAGRAPH_12: &str =
    "The provincial assembly approved the development plan for rural water supply schemes.";

/// 15 words
pub const PARAGRAPH_15: &str =
    "Enrollment in public universities increased over the last decade according to the education ministry figures.";

/// 5 words
pub const PARAGRAPH_5: &str = "Offices remain open on weekdays.";

/// 14 words
pub const PARAGRAPH_14: &str =
    "Wheat procurement targets were revised after the irrigation department reported lower canal water availability.";

/// Creates a test configuration whose artifacts live in `dir`
pub fn create_test_config(dir: &TempDir, seeds: Vec<String>) -> Config {
    let artifact = |name: &str| dir.path().join(name).display().to_string();
    Config {
        crawler: CrawlerConfig {
            seed_urls: seeds,
            min_words: 10_000,
            crawl_delay_seconds: 0.0,
            max_depth: 10,
            save_interval_words: 100_000,
            allowed_domain_suffixes: vec!["127.0.0.1".to_string()],
        },
        http: HttpConfig {
            user_agent: "TestBot/1.0".to_string(),
            robots_timeout_seconds: 2,
            fetch_timeout_seconds: 2,
        },
        output: OutputConfig {
            dataset_path: artifact("dataset.txt"),
            scraped_urls_path: artifact("scraped_urls.txt"),
            skipped_log_path: artifact("skipped_content.log"),
            summary_path: artifact("crawl_summary.md"),
        },
    }
}

/// Wraps paragraphs (and optional links) in a minimal HTML document
pub fn html_page(paragraphs: &[&str], links: &[&str]) -> String {
    let mut body = String::from("<html><body>\n");
    for paragraph in paragraphs {
        body.push_str(&format!("<p>{}</p>\n", paragraph));
    }
    if !links.is_empty() {
        body.push_str("<nav>\n");
        for link in links {
            body.push_str(&format!("<a href=\"{}\">Next</a>\n", link));
        }
        body.push_str("</nav>\n");
    }
    body.push_str("</body></html>");
    body
}

/// Mounts an HTML page at `route`
pub async fn mount_html(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/html"))
        .mount(server)
        .await;
}

/// Mounts a page at `route` that must never be requested
pub async fn mount_never(server: &MockServer, route: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<p>unreachable</p>", "text/html"))
        .expect(0)
        .mount(server)
        .await;
}

/// PDF source returning fixed page texts regardless of the document bytes
pub struct FixedPdf(pub Vec<String>);

impl PdfTextSource for FixedPdf {
    fn page_texts(&self, _bytes: &[u8]) -> Result<Vec<String>, ContentError> {
        Ok(self.0.clone())
    }
}
