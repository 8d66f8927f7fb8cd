//! State module for tracking crawl progress
//!
//! This module holds the values the crawl engine works with during one run.
//!
//! # Components
//!
//! - `Link`: An anchor href with its visible text
//! - `CrawlNode` / `Frontier`: Links waiting to be processed, with their BFS depth
//! - `VisitedSet`: Every URL that has been enqueued in this run
//! - `PageOutcome`: What happened to each page in the result

mod link;
mod node;
mod page_outcome;
mod visited;

// Re-export main types
pub use link::Link;
pub use node::{CrawlNode, Frontier};
pub use page_outcome::PageOutcome;
pub use visited::VisitedSet;
