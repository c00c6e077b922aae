//! End-to-end crawl tests against mock sites

use crate::support::{
    create_test_config, html_page, mount_html, mount_never, PARAGRAPH_12, PARAGRAPH_14,
    PARAGRAPH_15, PARAGRAPH_5,
};
use sumi_harvest::content::{HTML_DESCRIPTION, REASON_DUPLICATE, REASON_SHORT_OR_BLOCKED};
use sumi_harvest::crawler::{Crawler, Skip, Visit};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_full_crawl_single_page_word_count() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_html(
        &mock_server,
        "/",
        html_page(
            &[PARAGRAPH_12, PARAGRAPH_15, PARAGRAPH_5],
            &["/child", "https://example.com/elsewhere"],
        ),
    )
    .await;
    mount_html(&mock_server, "/child", html_page(&["Under construction"], &[])).await;

    let dir = tempfile::tempdir().unwrap();
    let seed = format!("{}/", base_url);
    let config = create_test_config(&dir, vec![seed.clone()]);

    let mut crawler = Crawler::new(config).expect("Failed to create crawler");
    let summary = crawler.run().await.expect("Crawl failed");

    assert_eq!(summary.word_count, 27);
    assert_eq!(crawler.word_count(), 27);
    assert_eq!(crawler.paragraphs(), &[PARAGRAPH_12.to_string(), PARAGRAPH_15.to_string()]);

    // Exactly one page contributed text
    let scraped = crawler.audit().scraped();
    assert_eq!(scraped.len(), 1);
    assert_eq!(scraped[0].url, seed);
    assert_eq!(scraped[0].description, HTML_DESCRIPTION);

    // The short paragraph was rejected and logged
    assert!(crawler
        .audit()
        .skipped()
        .iter()
        .any(|r| r.reason == REASON_SHORT_OR_BLOCKED
            && r.snippet.as_deref() == Some(PARAGRAPH_5)));

    let child = Url::parse(&format!("{}/child", base_url)).unwrap();
    let elsewhere = Url::parse("https://example.com/elsewhere").unwrap();
    assert!(crawler.has_visited(&child));
    assert!(!crawler.has_visited(&elsewhere));

    let dataset = std::fs::read_to_string(dir.path().join("dataset.txt")).unwrap();
    assert_eq!(dataset, format!("{}\n{}\n", PARAGRAPH_12, PARAGRAPH_15));

    let scraped_log = std::fs::read_to_string(dir.path().join("scraped_urls.txt")).unwrap();
    assert_eq!(
        scraped_log,
        format!("URL: {} | Description: {}\n", seed, HTML_DESCRIPTION)
    );

    assert!(dir.path().join("crawl_summary.md").exists());
}

#[tokio::test]
async fn test_duplicate_pages_counted_once() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_html(&mock_server, "/", html_page(&[PARAGRAPH_15], &["/a", "/b"])).await;
    mount_html(&mock_server, "/a", html_page(&[PARAGRAPH_12], &[])).await;
    mount_html(&mock_server, "/b", html_page(&[PARAGRAPH_12], &[])).await;

    let dir = tempfile::tempdir().unwrap();
    let config = create_test_config(&dir, vec![format!("{}/", base_url)]);

    let mut crawler = Crawler::new(config).expect("Failed to create crawler");
    crawler.run().await.expect("Crawl failed");

    assert_eq!(crawler.word_count(), 27);
    assert_eq!(crawler.audit().scraped().len(), 2);

    let duplicates: Vec<_> = crawler
        .audit()
        .skipped()
        .iter()
        .filter(|r| r.reason == REASON_DUPLICATE)
        .collect();
    assert_eq!(duplicates.len(), 1);
    assert_eq!(duplicates[0].snippet.as_deref(), Some(PARAGRAPH_12));
}

#[tokio::test]
async fn test_crawl_with_depth_limit() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_html(&mock_server, "/", html_page(&[PARAGRAPH_12], &["/level1"])).await;
    mount_html(&mock_server, "/level1", html_page(&[PARAGRAPH_15], &["/level2"])).await;
    mount_html(&mock_server, "/level2", html_page(&[PARAGRAPH_14], &["/level3"])).await;

    // Should never be called with max_depth=2
    mount_never(&mock_server, "/level3").await;

    let dir = tempfile::tempdir().unwrap();
    let mut config = create_test_config(&dir, vec![format!("{}/", base_url)]);
    config.crawler.max_depth = 2;

    let mut crawler = Crawler::new(config).expect("Failed to create crawler");
    crawler.run().await.expect("Crawl failed");

    assert_eq!(crawler.word_count(), 12 + 15 + 14);

    let level3 = format!("{}/level3", base_url);
    let depth_skip = crawler
        .audit()
        .skipped()
        .iter()
        .find(|r| r.url.as_deref() == Some(level3.as_str()))
        .expect("depth skip recorded");
    assert_eq!(depth_skip.reason, "Maximum recursion depth exceeded");
    assert!(!crawler.has_visited(&Url::parse(&level3).unwrap()));

    // Wiremock verifies expect(0) when the mock server drops
}

#[tokio::test]
async fn test_target_reached_stops_crawl() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_html(&mock_server, "/first", html_page(&[PARAGRAPH_12], &["/more"])).await;
    mount_never(&mock_server, "/more").await;
    mount_never(&mock_server, "/second").await;

    let dir = tempfile::tempdir().unwrap();
    let mut config = create_test_config(
        &dir,
        vec![format!("{}/first", base_url), format!("{}/second", base_url)],
    );
    config.crawler.min_words = 10;

    let mut crawler = Crawler::new(config).expect("Failed to create crawler");
    let summary = crawler.run().await.expect("Crawl failed");

    assert!(summary.target_reached());
    assert_eq!(summary.word_count, 12);
    assert_eq!(summary.pages_visited, 1);
}

#[tokio::test]
async fn test_queued_siblings_visited_after_target_without_expansion() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_html(&mock_server, "/", html_page(&[PARAGRAPH_12], &["/a", "/b"])).await;
    mount_html(&mock_server, "/a", html_page(&[PARAGRAPH_15], &["/a/deeper"])).await;

    // Queued before the target was met, so still fetched and accepted
    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(html_page(&[PARAGRAPH_14], &["/b/deeper"]), "text/html"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    // Links found after the target was met are never followed
    mount_never(&mock_server, "/a/deeper").await;
    mount_never(&mock_server, "/b/deeper").await;

    let dir = tempfile::tempdir().unwrap();
    let mut config = create_test_config(&dir, vec![format!("{}/", base_url)]);
    config.crawler.min_words = 20;

    let mut crawler = Crawler::new(config).expect("Failed to create crawler");
    let summary = crawler.run().await.expect("Crawl failed");

    assert_eq!(summary.word_count, 12 + 15 + 14);
    assert_eq!(summary.pages_visited, 3);
    assert!(crawler.has_visited(&Url::parse(&format!("{}/b", base_url)).unwrap()));
    assert_eq!(crawler.audit().scraped().len(), 3);
}

#[tokio::test]
async fn test_each_url_fetched_once() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(html_page(&[PARAGRAPH_12], &["/a", "/a#part-2", "/"]), "text/html"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(html_page(&[PARAGRAPH_15], &["/", "/a"]), "text/html"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let seed = format!("{}/", base_url);
    let config = create_test_config(&dir, vec![seed.clone(), seed]);

    let mut crawler = Crawler::new(config).expect("Failed to create crawler");
    let summary = crawler.run().await.expect("Crawl failed");

    assert_eq!(summary.pages_visited, 2);
    assert_eq!(crawler.word_count(), 27);

    // Already-visited entries leave no skip record
    assert!(crawler.audit().skipped().is_empty());
}

#[tokio::test]
async fn test_save_interval_flushes_mid_crawl() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    mount_html(&mock_server, "/", html_page(&[PARAGRAPH_12, PARAGRAPH_15], &[])).await;

    let dir = tempfile::tempdir().unwrap();
    let mut config = create_test_config(&dir, vec![]);
    config.crawler.save_interval_words = 20;

    let mut crawler = Crawler::new(config).expect("Failed to create crawler");
    let url = Url::parse(&format!("{}/", base_url)).unwrap();
    let visit = crawler.visit(&url, 0).await.expect("Visit failed");

    match visit {
        Visit::Processed(report) => {
            assert_eq!(report.paragraphs_accepted, 2);
            assert_eq!(report.words_accepted, 27);
        }
        other => panic!("unexpected visit outcome: {:?}", other),
    }

    // Crossing 20 words saved the dataset before the run ended
    let dataset = std::fs::read_to_string(dir.path().join("dataset.txt")).unwrap();
    assert_eq!(dataset.lines().count(), 2);
}

#[tokio::test]
async fn test_no_flush_before_interval() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    mount_html(&mock_server, "/", html_page(&[PARAGRAPH_12], &[])).await;

    let dir = tempfile::tempdir().unwrap();
    let config = create_test_config(&dir, vec![]);

    let mut crawler = Crawler::new(config).expect("Failed to create crawler");
    let url = Url::parse(&format!("{}/", base_url)).unwrap();
    crawler.visit(&url, 0).await.expect("Visit failed");

    assert_eq!(crawler.word_count(), 12);
    assert!(!dir.path().join("dataset.txt").exists());
}

#[tokio::test]
async fn test_http_error_is_logged_as_skip() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = create_test_config(&dir, vec![]);

    let mut crawler = Crawler::new(config).expect("Failed to create crawler");
    let url = Url::parse(&format!("{}/missing", base_url)).unwrap();
    let visit = crawler.visit(&url, 0).await.expect("Visit failed");

    let expected = format!("HTTP 404 for url: {}", url);
    assert_eq!(visit, Visit::Skipped(Skip::Request(expected.clone())));

    let log = std::fs::read_to_string(dir.path().join("skipped_content.log")).unwrap();
    assert_eq!(
        log,
        format!("Skipped URL: {} | Reason: Request error: {}\n", url, expected)
    );
}

#[tokio::test]
async fn test_blocklisted_url_not_scraped() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    mount_html(&mock_server, "/", html_page(&[PARAGRAPH_12], &["/news/latest"])).await;
    mount_html(&mock_server, "/news/latest", html_page(&[PARAGRAPH_15], &[])).await;

    let dir = tempfile::tempdir().unwrap();
    let config = create_test_config(&dir, vec![format!("{}/", base_url)]);

    let mut crawler = Crawler::new(config).expect("Failed to create crawler");
    crawler.run().await.expect("Crawl failed");

    assert_eq!(crawler.word_count(), 12);
    let news_url = format!("{}/news/latest", base_url);
    assert!(crawler
        .audit()
        .skipped()
        .iter()
        .any(|r| r.url.as_deref() == Some(news_url.as_str())
            && r.reason == "URL contains blog/news/article"));
}

#[tokio::test]
async fn test_rerun_clears_previous_artifacts() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    mount_html(&mock_server, "/", html_page(&[PARAGRAPH_12], &[])).await;

    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("dataset.txt"), "stale corpus line\n").unwrap();
    std::fs::write(dir.path().join("scraped_urls.txt"), "URL: stale | Description: x\n").unwrap();

    let config = create_test_config(&dir, vec![format!("{}/", base_url)]);
    let mut crawler = Crawler::new(config).expect("Failed to create crawler");
    crawler.run().await.expect("Crawl failed");

    let dataset = std::fs::read_to_string(dir.path().join("dataset.txt")).unwrap();
    assert_eq!(dataset, format!("{}\n", PARAGRAPH_12));
    let scraped = std::fs::read_to_string(dir.path().join("scraped_urls.txt")).unwrap();
    assert!(!scraped.contains("stale"));
}
