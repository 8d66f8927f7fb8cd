//! HTML parser for extracting internal links
//!
//! This module walks a parsed document in document order and collects the
//! `<a href>` links that belong to the site being crawled, together with their
//! visible text.

use crate::state::Link;
use crate::url::{is_internal_link, is_same_origin, resolve, LinkScope};
use scraper::{ElementRef, Html};
use std::collections::HashSet;
use url::{Origin, Url};

/// Parses an HTML body into a document tree
///
/// The html5ever parser recovers from malformed markup, so this never fails.
pub fn parse_html(body: &str) -> Html {
    Html::parse_document(body)
}

/// Extracts the internal links below `root`
///
/// # Link Extraction Rules
///
/// - Only `<a>` elements with an `href` attribute are considered
/// - A link is internal when the raw href starts with `/` or with `base_domain`
/// - Root-relative hrefs are resolved against `base_domain`; prefixed absolute
///   hrefs are kept as written
/// - Within one call, the first anchor for a given href wins, text included
///
/// # Arguments
///
/// * `root` - Element to start the depth-first walk from
/// * `base_domain` - Prefix that marks an absolute href as internal, and base
///   for resolving root-relative hrefs
///
/// # Example
///
/// ```
/// use sitemap_builder::crawler::{extract_links, parse_html};
///
/// let html = r#"<a href="/about">About us</a><a href="https://other.com/">Elsewhere</a>"#;
/// let document = parse_html(html);
/// let links = extract_links(document.root_element(), "https://a.com");
/// assert_eq!(links.len(), 1);
/// assert_eq!(links[0].href(), "https://a.com/about");
/// assert_eq!(links[0].text(), "About us");
/// ```
pub fn extract_links(root: ElementRef<'_>, base_domain: &str) -> Vec<Link> {
    collect_anchors(root, |href| {
        if !is_internal_link(href, base_domain) {
            return None;
        }

        if href.starts_with('/') {
            Some(resolve(base_domain, href).into_string())
        } else {
            Some(href.to_string())
        }
    })
}

/// Extracts the links below `root` that resolve to the seed's origin
///
/// Every href is resolved against `page_url`, so relative paths such as
/// `about.html` and `../up` are followed too. Fragments are dropped from the
/// resolved URL, so `page#a` and `page#b` count as one link.
pub fn extract_same_origin_links(
    root: ElementRef<'_>,
    page_url: &Url,
    origin: &Origin,
) -> Vec<Link> {
    collect_anchors(root, |href| {
        let resolved = resolve(page_url.as_str(), href.trim());
        if !resolved.is_canonical() {
            return None;
        }

        let mut absolute = Url::parse(resolved.as_str()).ok()?;
        if !is_same_origin(&absolute, origin) {
            return None;
        }

        absolute.set_fragment(None);
        Some(absolute.into())
    })
}

/// Parses a page body and extracts its links under the given scope
///
/// With `LinkScope::PagePrefix` the page's own URL is the base domain for the
/// prefix test. Parsing and extraction happen in one synchronous call so the
/// document tree is dropped before the caller awaits anything.
pub fn links_on_page(body: &str, page_url: &str, scope: LinkScope, seed_origin: &Origin) -> Vec<Link> {
    let document = parse_html(body);
    let root = document.root_element();

    match scope {
        LinkScope::PagePrefix => extract_links(root, page_url),
        LinkScope::SeedOrigin => match Url::parse(page_url) {
            Ok(page_url) => extract_same_origin_links(root, &page_url, seed_origin),
            Err(e) => {
                tracing::debug!("Cannot resolve links on {}: {}", page_url, e);
                Vec::new()
            }
        },
    }
}

/// Walks the tree in document order and keeps the first anchor per href
///
/// `classify` maps a raw href to its absolute form, or `None` to drop it.
fn collect_anchors<F>(root: ElementRef<'_>, mut classify: F) -> Vec<Link>
where
    F: FnMut(&str) -> Option<String>,
{
    let mut links = Vec::new();
    let mut seen = HashSet::new();

    for node in root.descendants() {
        let anchor = match ElementRef::wrap(node) {
            Some(element) if element.value().name() == "a" => element,
            _ => continue,
        };

        let href = match anchor.value().attr("href") {
            Some(href) => href,
            None => continue,
        };

        let absolute = match classify(href) {
            Some(absolute) => absolute,
            None => continue,
        };

        if seen.insert(absolute.clone()) {
            links.push(Link::new(absolute, anchor_text(anchor)));
        }
    }

    links
}

/// Visible text of an element: all descendant text nodes, whitespace-collapsed
fn anchor_text(element: ElementRef<'_>) -> String {
    normalize_whitespace(&element.text().collect::<String>())
}

/// Collapses runs of whitespace to a single space and trims both ends
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
