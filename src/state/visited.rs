use std::collections::HashSet;

/// URLs that have been enqueued during one crawl run
///
/// Entries are write-once and the set never shrinks. Marking is a single
/// check-then-insert, and it takes `&mut self`, so the owner of the set is the
/// only one who can decide whether a URL gets enqueued.
#[derive(Debug, Default)]
pub struct VisitedSet {
    urls: HashSet<String>,
}

impl VisitedSet {
    /// Creates an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a URL as visited
    ///
    /// Returns true if the URL was not in the set before this call.
    pub fn mark(&mut self, url: &str) -> bool {
        if self.urls.contains(url) {
            return false;
        }
        self.urls.insert(url.to_string())
    }

    /// Returns true if the URL has already been marked
    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}
