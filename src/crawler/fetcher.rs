//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building HTTP clients with a descriptive user agent string
//! - GET requests to fetch page content
//! - Strict status validation (only `200 OK` is a success)
//! - Rejecting responses that declare a non-HTML content type

use crate::config::{HttpConfig, UserAgentConfig};
use crate::PageError;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Source of page bodies for the crawl engine
///
/// Implementations perform one fetch per call and do not retry. The engine
/// treats any error as a failure of that single page.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches the HTML body of the page at `url`
    async fn fetch(&self, url: &str) -> Result<String, PageError>;
}

/// Builds an HTTP client with proper configuration
///
/// Redirects follow reqwest's default policy.
///
/// # Arguments
///
/// * `http` - Timeout settings
/// * `user_agent` - The user agent configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use sitemap_builder::config::{HttpConfig, UserAgentConfig};
/// use sitemap_builder::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default(), &UserAgentConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    http: &HttpConfig,
    user_agent: &UserAgentConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.header_value())
        .timeout(Duration::from_secs(http.timeout_secs))
        .connect_timeout(Duration::from_secs(http.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches pages over HTTP with a shared reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Wraps an already configured client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a fetcher from configuration
    pub fn from_config(
        http: &HttpConfig,
        user_agent: &UserAgentConfig,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self::new(build_http_client(http, user_agent)?))
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    /// # Request Flow
    ///
    /// | Condition | Result |
    /// |-----------|--------|
    /// | Request/network failure | `PageError::Request` |
    /// | Status other than 200 | `PageError::Status` |
    /// | Content-Type present and not HTML | `PageError::Parse` |
    /// | Body cannot be decoded | `PageError::Parse` |
    async fn fetch(&self, url: &str) -> Result<String, PageError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| PageError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(PageError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        if let Some(content_type) = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
        {
            if !is_html_content_type(content_type) {
                return Err(PageError::Parse {
                    url: url.to_string(),
                    message: format!("expected HTML, got {}", content_type),
                });
            }
        }

        response.text().await.map_err(|e| PageError::Parse {
            url: url.to_string(),
            message: format!("failed to read body: {}", e),
        })
    }
}

/// Returns true if a Content-Type header value names an HTML document
fn is_html_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();

    essence == "text/html" || essence == "application/xhtml+xml"
}
