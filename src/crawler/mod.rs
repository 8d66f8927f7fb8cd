//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching behind the [`PageFetcher`] seam
//! - HTML parsing and link extraction
//! - Level-by-level fetch scheduling with a concurrency limit
//! - Breadth-first crawl coordination

mod coordinator;
mod fetcher;
mod parser;
mod report;
mod scheduler;

pub use coordinator::Crawler;
pub use fetcher::{build_http_client, HttpFetcher, PageFetcher};
pub use parser::{extract_links, extract_same_origin_links, links_on_page, parse_html};
pub use report::{CrawlReport, CrawledPage, PageFailure};
pub use scheduler::{LevelOutcome, Scheduler};

use crate::config::{validate_seed_url, Config};
use crate::state::Link;
use crate::SitemapError;

/// Runs a complete crawl of the site at `seed_url`
///
/// This is the main entry point used by the binary. It will:
/// 1. Validate the seed URL
/// 2. Build the HTTP fetcher from the configuration
/// 3. Fetch the seed page once, so an unreachable site fails fast
/// 4. Run the breadth-first crawl from the seed
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl completed (individual pages may have failed)
/// * `Err(SitemapError::Seed)` - The seed page could not be fetched
/// * `Err(SitemapError)` - Invalid seed URL or HTTP client failure
pub async fn crawl_site(config: &Config, seed_url: &str) -> Result<CrawlReport, SitemapError> {
    let seed = validate_seed_url(seed_url)?;
    let fetcher = HttpFetcher::from_config(&config.http, &config.user_agent)?;

    tracing::info!("Fetching seed page {}", seed);
    fetcher
        .fetch(seed.as_str())
        .await
        .map_err(SitemapError::Seed)?;

    let crawler = Crawler::with_fetcher(fetcher, config.crawler.clone());
    Ok(crawler.crawl(Link::bare(String::from(seed))).await)
}
