//! Sitemap Builder: a breadth-first site crawler
//!
//! This crate discovers the internally reachable pages of a website, starting
//! from a seed URL, and encodes them as a sitemaps.org XML document.

pub mod config;
pub mod crawler;
pub mod output;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for Sitemap Builder operations
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("no links to traverse")]
    EmptySeed,

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to fetch seed page: {0}")]
    Seed(#[source] PageError),

    #[error("Failed to encode sitemap: {0}")]
    Encoding(String),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors for a single page during a crawl
///
/// These never abort a crawl. The engine records them against the page and
/// moves on to the rest of the frontier.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("fetching URL {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("fetching URL {url}: received status code {status}")]
    Status { url: String, status: u16 },

    #[error("parsing HTML from {url}: {message}")]
    Parse { url: String, message: String },

    #[error("fetching URL {url}: crawl deadline exceeded")]
    DeadlineExceeded { url: String },

    #[error("fetch task for {url} was aborted")]
    Aborted { url: String },
}

impl PageError {
    /// The URL the failure belongs to
    pub fn url(&self) -> &str {
        match self {
            Self::Request { url, .. }
            | Self::Status { url, .. }
            | Self::Parse { url, .. }
            | Self::DeadlineExceeded { url }
            | Self::Aborted { url } => url,
        }
    }

    /// Returns true if the page was fetched but its body could not be used
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Sitemap Builder operations
pub type Result<T> = std::result::Result<T, SitemapError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{CrawlReport, Crawler, HttpFetcher, PageFetcher};
pub use output::encode_sitemap;
pub use state::Link;
pub use url::{resolve, LinkScope, Resolved};
