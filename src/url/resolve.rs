use url::{ParseError, Url};

/// Outcome of resolving an href against a base URL
///
/// Resolution never fails. When either side cannot be parsed the href is
/// carried through untouched as [`Resolved::Verbatim`], so malformed markup
/// produces a questionable sitemap entry instead of aborting a crawl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// An absolute URL in `url::Url` serialization
    Canonical(String),
    /// The href as written, because it could not be resolved
    Verbatim(String),
}

impl Resolved {
    /// Returns the resolved value as a string slice
    pub fn as_str(&self) -> &str {
        match self {
            Self::Canonical(s) | Self::Verbatim(s) => s,
        }
    }

    /// Consumes the value and returns the underlying string
    pub fn into_string(self) -> String {
        match self {
            Self::Canonical(s) | Self::Verbatim(s) => s,
        }
    }

    /// Returns true if the value is a parsed absolute URL
    pub fn is_canonical(&self) -> bool {
        matches!(self, Self::Canonical(_))
    }
}

/// Resolves a possibly relative href against a base URL
///
/// # Resolution Steps
///
/// 1. If `href` parses on its own it is absolute; return its canonical form
/// 2. Otherwise parse `base` and apply RFC 3986 reference resolution
///    (`/path`, `../path`, `?query`, `#fragment`, and `""` which yields the base)
/// 3. If `href` is not a valid reference, or `base` does not parse, return
///    `href` verbatim
///
/// # Examples
///
/// ```
/// use sitemap_builder::url::resolve;
///
/// assert_eq!(resolve("https://a.com/x/", "../y").as_str(), "https://a.com/y");
/// assert_eq!(resolve("https://a.com", "/about").as_str(), "https://a.com/about");
/// ```
pub fn resolve(base: &str, href: &str) -> Resolved {
    match Url::parse(href) {
        Ok(absolute) => return Resolved::Canonical(absolute.into()),
        Err(ParseError::RelativeUrlWithoutBase) => {}
        Err(e) => {
            tracing::trace!("Keeping unparseable href {:?} verbatim: {}", href, e);
            return Resolved::Verbatim(href.to_string());
        }
    }

    let base = match Url::parse(base) {
        Ok(base) => base,
        Err(_) => return Resolved::Verbatim(href.to_string()),
    };

    match base.join(href) {
        Ok(joined) => Resolved::Canonical(joined.into()),
        Err(_) => Resolved::Verbatim(href.to_string()),
    }
}
