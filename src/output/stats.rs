//! Statistics generation from a crawl report
//!
//! This module derives per-run counters from a [`CrawlReport`] and prints
//! them for the `--stats` flag.

use crate::crawler::CrawlReport;
use crate::state::PageOutcome;
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Crawl statistics summary
#[derive(Debug, Clone)]
pub struct CrawlStatistics {
    /// Total number of pages in the result
    pub total_pages: u64,

    /// Count of pages by outcome
    pub pages_by_outcome: HashMap<PageOutcome, u64>,

    /// Count of pages per BFS depth
    pub depth_breakdown: BTreeMap<u32, u64>,

    /// Failed URLs with their error messages, in processing order
    pub failures: Vec<(String, String)>,

    /// Whether the crawl stopped at its deadline
    pub truncated: bool,

    /// Wall-clock duration of the crawl
    pub elapsed: Duration,
}

impl CrawlStatistics {
    /// Collects statistics from a finished crawl
    pub fn from_report(report: &CrawlReport) -> Self {
        let mut pages_by_outcome = HashMap::new();
        let mut depth_breakdown = BTreeMap::new();

        for page in &report.pages {
            *pages_by_outcome.entry(page.outcome).or_insert(0) += 1;
            *depth_breakdown.entry(page.depth).or_insert(0) += 1;
        }

        let failures = report
            .failures
            .iter()
            .map(|f| (f.url.clone(), f.error.to_string()))
            .collect();

        Self {
            total_pages: report.len() as u64,
            pages_by_outcome,
            depth_breakdown,
            failures,
            truncated: report.truncated,
            elapsed: report.elapsed,
        }
    }

    /// Number of pages with the given outcome
    pub fn count(&self, outcome: PageOutcome) -> u64 {
        self.pages_by_outcome.get(&outcome).copied().unwrap_or(0)
    }

    /// Share of fetched pages that were expanded, as a percentage
    pub fn success_rate(&self) -> f64 {
        let expanded = self.count(PageOutcome::Expanded);
        let attempted = expanded
            + self.count(PageOutcome::FetchFailed)
            + self.count(PageOutcome::ParseFailed);

        if attempted == 0 {
            0.0
        } else {
            (expanded as f64 / attempted as f64) * 100.0
        }
    }
}

/// Prints statistics to stderr in a formatted manner
///
/// Stdout is reserved for the sitemap itself.
pub fn print_statistics(stats: &CrawlStatistics) {
    eprintln!("=== Crawl Statistics ===\n");

    eprintln!("Overview:");
    eprintln!("  Total pages listed: {}", stats.total_pages);
    eprintln!("  Elapsed: {:.2}s", stats.elapsed.as_secs_f64());
    if stats.truncated {
        eprintln!("  Stopped at deadline: yes");
    }
    eprintln!();

    eprintln!("Pages by Outcome:");
    for outcome in PageOutcome::all() {
        let count = stats.count(outcome);
        if count == 0 {
            continue;
        }
        let percentage = if stats.total_pages > 0 {
            (count as f64 / stats.total_pages as f64) * 100.0
        } else {
            0.0
        };
        eprintln!("  {}: {} ({:.1}%)", outcome, count, percentage);
    }
    eprintln!();

    eprintln!("Pages by Depth:");
    for (depth, count) in &stats.depth_breakdown {
        eprintln!("  {}: {}", depth, count);
    }
    eprintln!();

    if !stats.failures.is_empty() {
        eprintln!("Failures ({}):", stats.failures.len());
        for (url, error) in &stats.failures {
            eprintln!("  - {}: {}", url, error);
        }
        eprintln!();
    }

    eprintln!(
        "Success Rate: {:.1}% ({} pages expanded)",
        stats.success_rate(),
        stats.count(PageOutcome::Expanded)
    );
}
