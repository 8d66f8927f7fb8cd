use url::{Origin, Url};

/// Checks whether a raw href belongs to the site being crawled
///
/// A link is internal when it is root-relative (starts with `/`) or when it
/// starts with the literal `base_domain` string. This is a plain prefix test on
/// the text of the href, not a host comparison: with a base of
/// `https://example.com`, the href `https://example.com.evil.com/` is
/// considered internal, and `https://example.com/b` is not internal to a base
/// of `https://example.com/a`.
///
/// # Examples
///
/// ```
/// use sitemap_builder::url::is_internal_link;
///
/// assert!(is_internal_link("/about", "https://a.com"));
/// assert!(is_internal_link("https://a.com/x", "https://a.com"));
/// assert!(!is_internal_link("https://other.com/x", "https://a.com"));
/// ```
pub fn is_internal_link(href: &str, base_domain: &str) -> bool {
    href.starts_with('/') || href.starts_with(base_domain)
}

/// Returns true if the URL is an HTTP(S) URL with the given origin
pub fn is_same_origin(url: &Url, origin: &Origin) -> bool {
    matches!(url.scheme(), "http" | "https") && url.origin() == *origin
}
