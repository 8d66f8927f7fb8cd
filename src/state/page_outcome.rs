/// Outcome definitions for pages listed in a crawl result
///
/// Every link in the result sequence ends the crawl in exactly one of these.
use std::fmt;

/// What the crawl engine did with a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PageOutcome {
    // ===== Success =====
    /// Page was fetched and its links were followed
    Expanded,

    // ===== Leaf States =====
    /// Page sits at the maximum depth and was not fetched
    DepthLimited,

    /// Page was still in the frontier when the crawl deadline passed
    Unvisited,

    // ===== Error States =====
    /// Request failed, or the server answered with something other than 200
    FetchFailed,

    /// Page was fetched but the body was not usable HTML
    ParseFailed,
}

impl PageOutcome {
    /// Returns true if the page was fetched and expanded
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Expanded)
    }

    /// Returns true if the page was intentionally not fetched
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::DepthLimited | Self::Unvisited)
    }

    /// Returns true if fetching or parsing the page failed
    pub fn is_error(&self) -> bool {
        matches!(self, Self::FetchFailed | Self::ParseFailed)
    }

    /// Short machine-readable name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expanded => "expanded",
            Self::DepthLimited => "depth_limited",
            Self::Unvisited => "unvisited",
            Self::FetchFailed => "fetch_failed",
            Self::ParseFailed => "parse_failed",
        }
    }

    /// Returns all possible outcomes
    pub fn all() -> [Self; 5] {
        [
            Self::Expanded,
            Self::DepthLimited,
            Self::Unvisited,
            Self::FetchFailed,
            Self::ParseFailed,
        ]
    }
}

impl fmt::Display for PageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
