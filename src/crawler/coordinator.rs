//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the breadth-first crawl loop. It owns the frontier,
//! the visited set and the result sequence for one run, and hands each BFS
//! level to the [`Scheduler`] for fetching.

use crate::config::CrawlerConfig;
use crate::crawler::fetcher::PageFetcher;
use crate::crawler::report::CrawlReport;
use crate::crawler::scheduler::Scheduler;
use crate::state::{CrawlNode, Frontier, Link, PageOutcome, VisitedSet};
use crate::SitemapError;
use std::sync::Arc;
use tokio::time::Instant;
use url::{Origin, Url};

/// Main crawler structure
///
/// # Example
///
/// ```no_run
/// use sitemap_builder::config::{CrawlerConfig, HttpConfig, UserAgentConfig};
/// use sitemap_builder::crawler::{Crawler, HttpFetcher};
/// use sitemap_builder::Link;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let fetcher = HttpFetcher::from_config(&HttpConfig::default(), &UserAgentConfig::default())?;
/// let crawler = Crawler::with_fetcher(fetcher, CrawlerConfig::default());
/// let report = crawler.crawl(Link::bare("https://example.com/")).await;
/// println!("{} pages", report.len());
/// # Ok(())
/// # }
/// ```
pub struct Crawler<F: ?Sized> {
    fetcher: Arc<F>,
    config: CrawlerConfig,
}

impl<F: PageFetcher + 'static> Crawler<F> {
    /// Creates a crawler that owns its fetcher
    pub fn with_fetcher(fetcher: F, config: CrawlerConfig) -> Self {
        Self::new(Arc::new(fetcher), config)
    }
}

impl<F: PageFetcher + ?Sized + 'static> Crawler<F> {
    /// Creates a crawler around a shared fetcher
    pub fn new(fetcher: Arc<F>, config: CrawlerConfig) -> Self {
        Self { fetcher, config }
    }

    pub fn config(&self) -> &CrawlerConfig {
        &self.config
    }

    /// Crawls starting from the first link of `seeds`
    ///
    /// Only `seeds[0]` is used as the root of the traversal. Any further seed
    /// links are ignored; prefer [`Crawler::crawl`], which takes one seed.
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlReport)` - The crawl ran (individual pages may have failed)
    /// * `Err(SitemapError::EmptySeed)` - `seeds` was empty; nothing was fetched
    pub async fn crawl_from(&self, seeds: &[Link]) -> Result<CrawlReport, SitemapError> {
        let (root, ignored) = seeds.split_first().ok_or(SitemapError::EmptySeed)?;

        if !ignored.is_empty() {
            tracing::warn!(
                "Only the first of {} seed links is used as the crawl root",
                seeds.len()
            );
        }

        Ok(self.crawl(root.clone()).await)
    }

    /// Runs a breadth-first crawl from a single seed link
    ///
    /// # Crawl Loop
    ///
    /// 1. Take the next BFS level from the frontier
    /// 2. Append every node of the level to the result sequence
    /// 3. If the level is at `max_depth`, its nodes are leaves; stop there
    /// 4. Otherwise fetch the level (concurrently, see [`Scheduler`])
    /// 5. Walk the outcomes in frontier order: failures are recorded and
    ///    skipped, and each unvisited neighbor is marked and enqueued at
    ///    `depth + 1`
    ///
    /// Merging outcomes in frontier order makes the result identical to a
    /// one-fetch-at-a-time BFS, whatever the concurrency.
    pub async fn crawl(&self, seed: Link) -> CrawlReport {
        let start_time = Instant::now();
        let deadline = self.config.deadline().map(|limit| start_time + limit);
        let seed_origin = origin_of(seed.href());

        tracing::info!(
            "Starting crawl of {} (max depth {}, concurrency {}, scope {})",
            seed.href(),
            self.config.max_depth,
            self.config.concurrency,
            self.config.scope
        );

        let scheduler = Scheduler::new(
            Arc::clone(&self.fetcher),
            self.config.concurrency,
            self.config.scope,
            seed_origin,
            deadline,
        );

        let mut report = CrawlReport::new();
        let mut visited = VisitedSet::new();
        let mut frontier = Frontier::new();

        visited.mark(seed.href());
        frontier.push(CrawlNode::new(seed, 0));

        while let Some(level) = frontier.pop_level() {
            if matches!(deadline, Some(deadline) if Instant::now() >= deadline) {
                let remaining = level.len() + frontier.len();
                tracing::warn!(
                    "Crawl deadline reached, {} discovered pages were not visited",
                    remaining
                );
                for node in level.into_iter().chain(frontier.drain()) {
                    report.push(node.link, node.depth, PageOutcome::Unvisited);
                }
                report.truncated = true;
                break;
            }

            let depth = level[0].depth;

            // Leaf level by depth policy
            if depth >= self.config.max_depth {
                for node in level {
                    report.push(node.link, node.depth, PageOutcome::DepthLimited);
                }
                continue;
            }

            tracing::debug!("Expanding level {} ({} pages)", depth, level.len());
            let outcomes = scheduler.expand_level(&level).await;

            for (node, outcome) in level.into_iter().zip(outcomes) {
                match outcome {
                    Ok(neighbors) => {
                        for neighbor in neighbors {
                            if visited.mark(neighbor.href()) {
                                frontier.push(CrawlNode::new(neighbor, node.depth + 1));
                            }
                        }
                        report.push(node.link, node.depth, PageOutcome::Expanded);
                    }
                    Err(error) => {
                        tracing::warn!("Failed to fetch {}: {}", node.href(), error);
                        let outcome = if error.is_parse() {
                            PageOutcome::ParseFailed
                        } else {
                            PageOutcome::FetchFailed
                        };
                        report.push(node.link, node.depth, outcome);
                        report.record_failure(error);
                    }
                }
            }

            tracing::info!(
                "Progress: level {} done, {} pages listed, {} in frontier",
                depth,
                report.len(),
                frontier.len()
            );
        }

        report.finish(start_time.elapsed());

        tracing::info!(
            "Crawl completed: {} pages listed, {} failed, in {:?}",
            report.len(),
            report.failures.len(),
            report.elapsed
        );

        report
    }
}

/// Origin of the seed URL, or a fresh opaque origin if it does not parse
fn origin_of(href: &str) -> Origin {
    match Url::parse(href) {
        Ok(url) => url.origin(),
        Err(_) => Origin::new_opaque(),
    }
}
