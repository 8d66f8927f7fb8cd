//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end.

use sitemap_builder::config::{Config, CrawlerConfig, HttpConfig, UserAgentConfig};
use sitemap_builder::crawler::{crawl_site, Crawler, HttpFetcher};
use sitemap_builder::state::PageOutcome;
use sitemap_builder::{encode_sitemap, Link, LinkScope, PageError, SitemapError};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration with the given depth and concurrency
fn create_test_config(max_depth: u32, concurrency: usize) -> Config {
    Config {
        crawler: CrawlerConfig {
            max_depth,
            concurrency,
            ..CrawlerConfig::default()
        },
        user_agent: UserAgentConfig {
            crawler_name: "TestBot".to_string(),
            crawler_version: "2.0".to_string(),
            contact_url: Some("https://example.com/bot".to_string()),
        },
        ..Config::default()
    }
}

fn http_crawler(config: &Config) -> Crawler<HttpFetcher> {
    let fetcher = HttpFetcher::from_config(&config.http, &config.user_agent)
        .expect("Failed to build HTTP client");
    Crawler::with_fetcher(fetcher, config.crawler.clone())
}

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "text/html")
}

async fn mount_page(server: &MockServer, page: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(page))
        .respond_with(html(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_depth_one_crawl_over_http() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r#"<html><body><a href="/a">A</a> <a href="/b">B</a></body></html>"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Depth-1 pages are leaves and must never be requested
    for page in ["/a", "/b", "/c"] {
        Mock::given(method("GET"))
            .and(path(page))
            .respond_with(html(r#"<a href="/c">C</a>"#))
            .expect(0)
            .mount(&mock_server)
            .await;
    }

    let config = create_test_config(1, 4);
    let report = http_crawler(&config)
        .crawl(Link::bare(format!("{}/", base_url)))
        .await;

    assert_eq!(
        report.hrefs(),
        vec![
            format!("{}/", base_url),
            format!("{}/a", base_url),
            format!("{}/b", base_url)
        ]
    );
    assert!(report.failures.is_empty());
}

#[tokio::test]
async fn test_failed_pages_are_listed_and_skipped() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"
        <a href="/missing">Missing</a>
        <a href="/created">Created</a>
        <a href="/ok">Ok</a>
        "#,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/created"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_raw(br#"<a href="/hidden">Hidden</a>"#.to_vec(), "text/html"),
        )
        .mount(&mock_server)
        .await;

    mount_page(&mock_server, "/ok", r#"<a href="/deeper">Deeper</a>"#).await;
    mount_page(&mock_server, "/deeper", "<p>end</p>").await;

    let config = create_test_config(3, 2);
    let report = http_crawler(&config)
        .crawl(Link::bare(format!("{}/", base_url)))
        .await;

    assert_eq!(
        report.hrefs(),
        vec![
            format!("{}/", base_url),
            format!("{}/missing", base_url),
            format!("{}/created", base_url),
            format!("{}/ok", base_url),
            format!("{}/deeper", base_url)
        ]
    );
    assert_eq!(report.count(PageOutcome::FetchFailed), 2);
    assert!(matches!(
        report.failures[0].error,
        PageError::Status { status: 404, .. }
    ));
    assert!(matches!(
        report.failures[1].error,
        PageError::Status { status: 201, .. }
    ));
    assert_eq!(report.outcome_of(&format!("{}/hidden", base_url)), None);
}

#[tokio::test]
async fn test_non_html_content_is_a_parse_failure() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/report.pdf">Report</a><a href="/page">Page</a>"#,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/report.pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(b"%PDF-1.4".to_vec(), "application/pdf"))
        .mount(&mock_server)
        .await;

    mount_page(&mock_server, "/page", "<p>no links</p>").await;

    let config = create_test_config(2, 1);
    let report = http_crawler(&config)
        .crawl(Link::bare(format!("{}/", base_url)))
        .await;

    assert_eq!(
        report.outcome_of(&format!("{}/report.pdf", base_url)),
        Some(PageOutcome::ParseFailed)
    );
    assert_eq!(
        report.outcome_of(&format!("{}/page", base_url)),
        Some(PageOutcome::Expanded)
    );
    assert!(report.failures[0].error.is_parse());
}

#[tokio::test]
async fn test_crawl_site_produces_sitemap() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // Fetched once as the seed check and once by the crawl
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r#"<nav><a href="/about">About</a><a href="/blog?page=1&sort=new">Blog</a></nav>"#,
        ))
        .expect(2)
        .mount(&mock_server)
        .await;

    mount_page(&mock_server, "/about", r#"<a href="/">Home</a>"#).await;
    mount_page(&mock_server, "/blog", r#"<a href="/about">About</a>"#).await;

    let config = create_test_config(3, 4);
    let report = crawl_site(&config, &format!("{}/", base_url))
        .await
        .expect("Crawl should succeed");

    let xml = encode_sitemap(&report.links()).expect("Encoding should succeed");

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));
    assert!(xml.contains(&format!("<loc>{}/</loc>", base_url)));
    assert!(xml.contains(&format!("<loc>{}/about</loc>", base_url)));
    assert!(xml.contains(&format!("<loc>{}/blog?page=1&amp;sort=new</loc>", base_url)));
    assert_eq!(xml.matches("<url>").count(), 3);
}

#[tokio::test]
async fn test_user_agent_header_is_sent() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header(
            "user-agent",
            "Mozilla/5.0 (compatible; TestBot/2.0; +https://example.com/bot)",
        ))
        .respond_with(html("<p>hello</p>"))
        .mount(&mock_server)
        .await;

    let config = create_test_config(2, 1);
    let report = crawl_site(&config, &format!("{}/", base_url))
        .await
        .expect("Seed should be reachable with the configured user agent");

    assert_eq!(report.hrefs(), vec![format!("{}/", base_url)]);
    assert_eq!(report.count(PageOutcome::Expanded), 1);
}

#[tokio::test]
async fn test_unreachable_seed_is_fatal() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(3, 1);
    let result = crawl_site(&config, &format!("{}/", base_url)).await;

    assert!(matches!(
        result,
        Err(SitemapError::Seed(PageError::Status { status: 500, .. }))
    ));
}

#[tokio::test]
async fn test_invalid_seed_url_is_rejected() {
    let config = create_test_config(3, 1);

    let result = crawl_site(&config, "ftp://example.com/").await;

    assert!(matches!(result, Err(SitemapError::Config(_))));
}

#[tokio::test]
async fn test_seed_origin_scope_over_http() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<a href="docs/">Docs</a><a href="https://example.org/">External</a>"#,
    )
    .await;
    mount_page(
        &mock_server,
        "/docs/",
        r#"<a href="intro#start">Intro</a><a href="../">Home</a>"#,
    )
    .await;
    mount_page(&mock_server, "/docs/intro", "<p>intro</p>").await;

    let mut config = create_test_config(3, 2);
    config.crawler.scope = LinkScope::SeedOrigin;
    let report = http_crawler(&config)
        .crawl(Link::bare(format!("{}/", base_url)))
        .await;

    assert_eq!(
        report.hrefs(),
        vec![
            format!("{}/", base_url),
            format!("{}/docs/", base_url),
            format!("{}/docs/intro", base_url)
        ]
    );
    assert!(report.failures.is_empty());
}

#[tokio::test]
async fn test_http_timeout_fails_single_page() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/slow">Slow</a><a href="/fast">Fast</a>"#,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(html("<p>late</p>").set_delay(std::time::Duration::from_secs(3)))
        .mount(&mock_server)
        .await;

    mount_page(&mock_server, "/fast", "<p>fast</p>").await;

    let mut config = create_test_config(2, 2);
    config.http = HttpConfig {
        timeout_secs: 1,
        connect_timeout_secs: 1,
    };
    let report = http_crawler(&config)
        .crawl(Link::bare(format!("{}/", base_url)))
        .await;

    assert_eq!(
        report.outcome_of(&format!("{}/slow", base_url)),
        Some(PageOutcome::FetchFailed)
    );
    assert_eq!(
        report.outcome_of(&format!("{}/fast", base_url)),
        Some(PageOutcome::Expanded)
    );
    assert!(matches!(
        report.failures[0].error,
        PageError::Request { .. }
    ));
}
