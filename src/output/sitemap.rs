//! Sitemap XML encoding
//!
//! Projects the crawl result into a sitemaps.org `<urlset>` document. Only
//! `Link::href` is used; anchor text is dropped.

use crate::state::Link;
use crate::SitemapError;
use quick_xml::se::Serializer;
use serde::Serialize;

/// Namespace of the sitemaps.org protocol, version 0.9
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Largest number of URLs a single sitemap file may list
pub const MAX_URLS: usize = 50_000;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

#[derive(Debug, Serialize)]
#[serde(rename = "urlset")]
struct UrlSet<'a> {
    #[serde(rename = "@xmlns")]
    xmlns: &'a str,
    url: Vec<UrlEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct UrlEntry<'a> {
    loc: &'a str,
}

/// Encodes links as a sitemap document
///
/// Entries keep the order of `links`. The output starts with an XML
/// declaration and is indented by two spaces.
///
/// # Example
///
/// ```
/// use sitemap_builder::{encode_sitemap, Link};
///
/// let xml = encode_sitemap(&[Link::bare("https://example.com/")]).unwrap();
/// assert!(xml.contains("<loc>https://example.com/</loc>"));
/// ```
pub fn encode(links: &[Link]) -> Result<String, SitemapError> {
    if links.len() > MAX_URLS {
        tracing::warn!(
            "Sitemap lists {} URLs, more than the protocol limit of {}",
            links.len(),
            MAX_URLS
        );
    }

    let urlset = UrlSet {
        xmlns: SITEMAP_NAMESPACE,
        url: links
            .iter()
            .map(|link| UrlEntry { loc: link.href() })
            .collect(),
    };

    let mut xml = String::from(XML_DECLARATION);
    let mut serializer = Serializer::new(&mut xml);
    serializer.indent(' ', 2);
    urlset
        .serialize(serializer)
        .map_err(|e| SitemapError::Encoding(e.to_string()))?;

    Ok(xml)
}
