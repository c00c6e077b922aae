//! Robots.txt handling during a crawl

use crate::support::{create_test_config, html_page, mount_html, mount_never, FixedPdf, PARAGRAPH_12};
use sumi_harvest::content::PDF_DESCRIPTION;
use sumi_harvest::crawler::Crawler;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_robots_txt_respect() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("User-agent: *\nDisallow: /private\n", "text/plain"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    mount_html(
        &mock_server,
        "/",
        html_page(&[], &["/private/report.pdf", "/public/report.pdf"]),
    )
    .await;

    // Should never be called
    mount_never(&mock_server, "/private/report.pdf").await;

    Mock::given(method("GET"))
        .and(path("/public/report.pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(b"%PDF-1.4".to_vec(), "application/pdf"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = create_test_config(&dir, vec![format!("{}/", base_url)]);

    let mut crawler = Crawler::new(config)
        .expect("Failed to create crawler")
        .with_pdf_source(FixedPdf(vec![PARAGRAPH_12.to_string()]));
    crawler.run().await.expect("Crawl failed");

    assert_eq!(crawler.word_count(), 12);

    let private_url = format!("{}/private/report.pdf", base_url);
    let denied = crawler
        .audit()
        .skipped()
        .iter()
        .find(|r| r.url.as_deref() == Some(private_url.as_str()))
        .expect("robots denial recorded");
    assert_eq!(denied.reason, "Blocked by robots.txt");

    let scraped = crawler.audit().scraped();
    assert_eq!(scraped.len(), 1);
    assert_eq!(scraped[0].url, format!("{}/public/report.pdf", base_url));
    assert_eq!(scraped[0].description, PDF_DESCRIPTION);
}

#[tokio::test]
async fn test_robots_failure_fails_open() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    mount_html(&mock_server, "/", html_page(&[PARAGRAPH_12], &["/next"])).await;
    mount_html(&mock_server, "/next", html_page(&["Under construction"], &[])).await;

    let dir = tempfile::tempdir().unwrap();
    let config = create_test_config(&dir, vec![format!("{}/", base_url)]);

    let mut crawler = Crawler::new(config).expect("Failed to create crawler");
    crawler.run().await.expect("Crawl failed");

    // Both pages fetched, robots.txt requested only once
    assert_eq!(crawler.word_count(), 12);
    assert!(crawler
        .audit()
        .skipped()
        .iter()
        .all(|r| r.reason != "Blocked by robots.txt"));
}
