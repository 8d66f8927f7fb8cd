//! Output module for the sitemap and crawl statistics
//!
//! This module handles:
//! - Encoding the crawl result as sitemap XML
//! - Writing the sitemap to a file or stdout
//! - Crawl statistics for the `--stats` flag

mod sitemap;
pub mod stats;

pub use sitemap::{encode as encode_sitemap, MAX_URLS, SITEMAP_NAMESPACE};
pub use stats::{print_statistics, CrawlStatistics};

use crate::SitemapError;
use std::io::Write;
use std::path::Path;

/// Writes a sitemap document to `path`, or to stdout when no path is given
pub fn write_sitemap(xml: &str, path: Option<&Path>) -> Result<(), SitemapError> {
    match path {
        Some(path) => {
            std::fs::write(path, xml)?;
            tracing::info!("Sitemap written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(xml.as_bytes())?;
            if !xml.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
        }
    }
    Ok(())
}
