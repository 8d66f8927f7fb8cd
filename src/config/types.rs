use crate::url::LinkScope;
use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure for Sitemap Builder
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default, rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Maximum number of links deep to traverse from the seed
    #[serde(rename = "max-depth")]
    pub max_depth: u32,

    /// Maximum number of concurrent page fetches within one BFS level
    pub concurrency: usize,

    /// Which links count as internal
    pub scope: LinkScope,

    /// Overall crawl deadline in seconds
    #[serde(rename = "deadline-secs")]
    pub deadline_secs: Option<u64>,
}

impl CrawlerConfig {
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline_secs.map(Duration::from_secs)
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            concurrency: 4,
            scope: LinkScope::default(),
            deadline_secs: None,
        }
    }
}

/// HTTP transport configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Per-request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Connection establishment timeout (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            connect_timeout_secs: 5,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: Option<String>,
}

impl UserAgentConfig {
    /// Formats the `User-Agent` header value
    ///
    /// `Mozilla/5.0 (compatible; Name/Version)`, or
    /// `Mozilla/5.0 (compatible; Name/Version; +ContactURL)` when a contact
    /// URL is configured.
    pub fn header_value(&self) -> String {
        match &self.contact_url {
            Some(contact) => format!(
                "Mozilla/5.0 (compatible; {}/{}; +{})",
                self.crawler_name, self.crawler_version, contact
            ),
            None => format!(
                "Mozilla/5.0 (compatible; {}/{})",
                self.crawler_name, self.crawler_version
            ),
        }
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "SitemapBuilder".to_string(),
            crawler_version: "1.0".to_string(),
            contact_url: None,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// File to write the sitemap to; stdout when unset
    #[serde(rename = "sitemap-path")]
    pub sitemap_path: Option<String>,
}
