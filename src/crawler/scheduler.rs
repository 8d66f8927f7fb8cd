//! Scheduler for fetching one BFS level at a time
//!
//! This module handles:
//! - Fanning out the fetches of a level as tokio tasks
//! - Global concurrency limiting via a semaphore
//! - Bounding each fetch by the crawl deadline
//! - Returning per-node outcomes in frontier order, so the caller can merge
//!   them as if the level had been fetched sequentially

use crate::crawler::fetcher::PageFetcher;
use crate::crawler::parser::links_on_page;
use crate::state::{CrawlNode, Link};
use crate::url::LinkScope;
use crate::PageError;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio::time::{timeout_at, Instant};
use url::Origin;

/// Links found on a page, or the reason the page could not be expanded
pub type LevelOutcome = Result<Vec<Link>, PageError>;

/// Scheduler fetches every node of a level concurrently
///
/// The scheduler coordinates:
/// - Global concurrency limits (at most `concurrency` fetches in flight)
/// - The optional crawl deadline for each fetch
/// - Link extraction for each fetched body, under the configured scope
pub struct Scheduler<F: ?Sized> {
    /// Source of page bodies
    fetcher: Arc<F>,

    /// Global semaphore for limiting concurrent fetches
    permits: Arc<Semaphore>,

    /// Which links count as internal
    scope: LinkScope,

    /// Origin of the seed, used by `LinkScope::SeedOrigin`
    seed_origin: Origin,

    /// Point in time after which fetches are abandoned
    deadline: Option<Instant>,
}

impl<F: PageFetcher + ?Sized + 'static> Scheduler<F> {
    /// Creates a new scheduler
    ///
    /// # Arguments
    ///
    /// * `fetcher` - Shared page fetcher
    /// * `concurrency` - Maximum fetches in flight (values below 1 are treated as 1)
    /// * `scope` - Link scope for extraction
    /// * `seed_origin` - Origin of the crawl seed
    /// * `deadline` - Optional crawl deadline
    pub fn new(
        fetcher: Arc<F>,
        concurrency: usize,
        scope: LinkScope,
        seed_origin: Origin,
        deadline: Option<Instant>,
    ) -> Self {
        Self {
            fetcher,
            permits: Arc::new(Semaphore::new(concurrency.max(1))),
            scope,
            seed_origin,
            deadline,
        }
    }

    /// Fetches and extracts every node of a level
    ///
    /// Returns once all fetches have finished. The outcome at index `i`
    /// belongs to `nodes[i]`.
    pub async fn expand_level(&self, nodes: &[CrawlNode]) -> Vec<LevelOutcome> {
        let mut tasks = JoinSet::new();

        for (index, node) in nodes.iter().enumerate() {
            let fetcher = Arc::clone(&self.fetcher);
            let permits = Arc::clone(&self.permits);
            let seed_origin = self.seed_origin.clone();
            let scope = self.scope;
            let deadline = self.deadline;
            let depth = node.depth;
            let url = node.href().to_string();

            tasks.spawn(async move {
                let _permit = match permits.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(_) => return (index, Err(PageError::Aborted { url })),
                };

                tracing::debug!("Fetching [depth {}]: {}", depth, url);

                let fetched = match deadline {
                    Some(deadline) => match timeout_at(deadline, fetcher.fetch(&url)).await {
                        Ok(result) => result,
                        Err(_) => Err(PageError::DeadlineExceeded { url: url.clone() }),
                    },
                    None => fetcher.fetch(&url).await,
                };

                let outcome =
                    fetched.map(|body| links_on_page(&body, &url, scope, &seed_origin));
                (index, outcome)
            });
        }

        let mut slots: Vec<Option<LevelOutcome>> = nodes.iter().map(|_| None).collect();

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, outcome)) => slots[index] = Some(outcome),
                Err(e) => tracing::warn!("Fetch task failed: {}", e),
            }
        }

        slots
            .into_iter()
            .zip(nodes)
            .map(|(slot, node)| {
                slot.unwrap_or_else(|| {
                    Err(PageError::Aborted {
                        url: node.href().to_string(),
                    })
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Fetcher that records the highest number of overlapping fetches
    struct SlowFetcher {
        in_flight: AtomicUsize,
        peak: AtomicUsize,
    }

    impl SlowFetcher {
        fn new() -> Self {
            Self {
                in_flight: AtomicUsize::new(0),
                peak: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl PageFetcher for SlowFetcher {
        async fn fetch(&self, url: &str) -> Result<String, PageError> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(20)).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            if url.ends_with("/missing") {
                return Err(PageError::Status {
                    url: url.to_string(),
                    status: 404,
                });
            }
            Ok(format!(r#"<a href="{}/child">child</a>"#, url.trim_end_matches('/')))
        }
    }

    fn level(paths: &[&str]) -> Vec<CrawlNode> {
        paths
            .iter()
            .map(|p| CrawlNode::new(Link::bare(format!("https://s.test{}", p)), 1))
            .collect()
    }

    fn scheduler(fetcher: Arc<SlowFetcher>, concurrency: usize) -> Scheduler<SlowFetcher> {
        let origin = url::Url::parse("https://s.test/").unwrap().origin();
        Scheduler::new(fetcher, concurrency, LinkScope::PagePrefix, origin, None)
    }

    #[tokio::test]
    async fn test_outcomes_follow_node_order() {
        let fetcher = Arc::new(SlowFetcher::new());
        let nodes = level(&["/a", "/missing", "/b"]);

        let outcomes = scheduler(fetcher, 3).expand_level(&nodes).await;

        assert_eq!(outcomes.len(), 3);
        assert_eq!(
            outcomes[0].as_ref().unwrap()[0].href(),
            "https://s.test/a/child"
        );
        assert!(matches!(
            outcomes[1],
            Err(PageError::Status { status: 404, .. })
        ));
        assert_eq!(
            outcomes[2].as_ref().unwrap()[0].href(),
            "https://s.test/b/child"
        );
    }

    #[tokio::test]
    async fn test_concurrency_limit_is_respected() {
        let fetcher = Arc::new(SlowFetcher::new());
        let nodes = level(&["/1", "/2", "/3", "/4", "/5", "/6"]);

        scheduler(Arc::clone(&fetcher), 2)
            .expand_level(&nodes)
            .await;

        assert!(fetcher.peak.load(Ordering::SeqCst) <= 2);
    }

    #[tokio::test]
    async fn test_single_permit_is_sequential() {
        let fetcher = Arc::new(SlowFetcher::new());
        let nodes = level(&["/1", "/2", "/3"]);

        scheduler(Arc::clone(&fetcher), 1)
            .expand_level(&nodes)
            .await;

        assert_eq!(fetcher.peak.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_level() {
        let fetcher = Arc::new(SlowFetcher::new());
        let outcomes = scheduler(fetcher, 4).expand_level(&[]).await;
        assert!(outcomes.is_empty());
    }
}
