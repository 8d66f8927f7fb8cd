/// Anchor link discovered on a page
///
/// The href is the identity of a link. The text is kept for display only and
/// plays no part in deduplication or crawl decisions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Link {
    href: String,
    text: String,
}

impl Link {
    /// Creates a link from an absolute href and its visible text
    pub fn new(href: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            text: text.into(),
        }
    }

    /// Creates a link with no visible text, e.g. a seed URL
    pub fn bare(href: impl Into<String>) -> Self {
        Self::new(href, String::new())
    }

    /// The absolute URL of the link
    pub fn href(&self) -> &str {
        &self.href
    }

    /// The whitespace-normalized visible text of the anchor
    pub fn text(&self) -> &str {
        &self.text
    }
}
