//! Crawl report types
//!
//! A [`CrawlReport`] is the terminal output of one crawl run: the result
//! sequence in BFS order, plus what happened to each page along the way.

use crate::state::{Link, PageOutcome};
use crate::PageError;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// A page in the result sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawledPage {
    /// The link as it was discovered
    pub link: Link,

    /// BFS distance from the seed
    pub depth: u32,

    /// What the engine did with the page
    pub outcome: PageOutcome,
}

/// A page that could not be expanded
#[derive(Debug)]
pub struct PageFailure {
    pub url: String,
    pub error: PageError,
}

/// Result of one crawl run
#[derive(Debug)]
pub struct CrawlReport {
    /// Pages in BFS discovery order
    pub pages: Vec<CrawledPage>,

    /// Pages that failed to fetch or parse, in the order they were processed
    pub failures: Vec<PageFailure>,

    /// True if the crawl stopped at its deadline with work left in the frontier
    pub truncated: bool,

    /// When the crawl started
    pub started_at: DateTime<Utc>,

    /// When the crawl finished
    pub finished_at: Option<DateTime<Utc>>,

    /// Wall-clock duration of the crawl
    pub elapsed: Duration,
}

impl CrawlReport {
    /// Creates an empty report for a crawl starting now
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            failures: Vec::new(),
            truncated: false,
            started_at: Utc::now(),
            finished_at: None,
            elapsed: Duration::ZERO,
        }
    }

    /// Appends a page to the result sequence
    pub fn push(&mut self, link: Link, depth: u32, outcome: PageOutcome) {
        self.pages.push(CrawledPage {
            link,
            depth,
            outcome,
        });
    }

    /// Records a page failure
    pub fn record_failure(&mut self, error: PageError) {
        self.failures.push(PageFailure {
            url: error.url().to_string(),
            error,
        });
    }

    /// Stamps the finish time
    pub fn finish(&mut self, elapsed: Duration) {
        self.finished_at = Some(Utc::now());
        self.elapsed = elapsed;
    }

    /// The result sequence, in BFS order
    pub fn links(&self) -> Vec<Link> {
        self.pages.iter().map(|p| p.link.clone()).collect()
    }

    /// Consumes the report and returns the result sequence
    pub fn into_links(self) -> Vec<Link> {
        self.pages.into_iter().map(|p| p.link).collect()
    }

    /// The hrefs of the result sequence, in BFS order
    pub fn hrefs(&self) -> Vec<&str> {
        self.pages.iter().map(|p| p.link.href()).collect()
    }

    /// Number of pages that ended with the given outcome
    pub fn count(&self, outcome: PageOutcome) -> usize {
        self.pages.iter().filter(|p| p.outcome == outcome).count()
    }

    /// Outcome recorded for a URL, if it is in the result
    pub fn outcome_of(&self, href: &str) -> Option<PageOutcome> {
        self.pages
            .iter()
            .find(|p| p.link.href() == href)
            .map(|p| p.outcome)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl Default for CrawlReport {
    fn default() -> Self {
        Self::new()
    }
}
