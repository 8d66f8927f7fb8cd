use crate::state::Link;
use std::collections::VecDeque;

/// A link waiting in the frontier, with its distance from the seed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlNode {
    pub link: Link,
    pub depth: u32,
}

impl CrawlNode {
    pub fn new(link: Link, depth: u32) -> Self {
        Self { link, depth }
    }

    pub fn href(&self) -> &str {
        self.link.href()
    }
}

/// FIFO queue of discovered but not yet processed nodes
///
/// Nodes are pushed with non-decreasing depth, so the queue is always made of
/// at most two runs: the current level followed by the next one.
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<CrawlNode>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node to the back of the queue
    pub fn push(&mut self, node: CrawlNode) {
        debug_assert!(
            self.queue.back().map_or(true, |last| last.depth <= node.depth),
            "frontier depth must not decrease"
        );
        self.queue.push_back(node);
    }

    /// Removes the node at the front of the queue
    pub fn pop(&mut self) -> Option<CrawlNode> {
        self.queue.pop_front()
    }

    /// Removes every node that shares the depth of the front node
    ///
    /// Returns `None` when the frontier is empty. The returned nodes keep
    /// their queue order.
    pub fn pop_level(&mut self) -> Option<Vec<CrawlNode>> {
        let depth = self.queue.front()?.depth;
        let end = self
            .queue
            .iter()
            .position(|node| node.depth != depth)
            .unwrap_or(self.queue.len());
        Some(self.queue.drain(..end).collect())
    }

    /// Removes and returns all remaining nodes in queue order
    pub fn drain(&mut self) -> Vec<CrawlNode> {
        self.queue.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(path: &str, depth: u32) -> CrawlNode {
        CrawlNode::new(Link::bare(format!("https://x.test{}", path)), depth)
    }

    #[test]
    fn test_fifo_order() {
        let mut frontier = Frontier::new();
        frontier.push(node("/a", 0));
        frontier.push(node("/b", 1));
        assert_eq!(frontier.pop().unwrap().href(), "https://x.test/a");
        assert_eq!(frontier.pop().unwrap().href(), "https://x.test/b");
        assert!(frontier.pop().is_none());
    }

    #[test]
    fn test_pop_level_takes_only_front_depth() {
        let mut frontier = Frontier::new();
        frontier.push(node("/a", 1));
        frontier.push(node("/b", 1));
        frontier.push(node("/c", 2));

        let level = frontier.pop_level().unwrap();
        let hrefs: Vec<&str> = level.iter().map(|n| n.href()).collect();
        assert_eq!(hrefs, vec!["https://x.test/a", "https://x.test/b"]);
        assert_eq!(frontier.len(), 1);

        let next = frontier.pop_level().unwrap();
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].depth, 2);
        assert!(frontier.pop_level().is_none());
    }

    #[test]
    fn test_drain_empties_frontier() {
        let mut frontier = Frontier::new();
        frontier.push(node("/a", 0));
        frontier.push(node("/b", 1));
        assert_eq!(frontier.drain().len(), 2);
        assert!(frontier.is_empty());
    }
}
