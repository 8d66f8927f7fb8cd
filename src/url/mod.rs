//! URL handling module for Sitemap Builder
//!
//! This module provides href resolution against a base URL and the policies
//! that decide which links are internal to the site being crawled.

mod resolve;
mod scope;

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

// Re-export main functions
pub use resolve::{resolve, Resolved};
pub use scope::{is_internal_link, is_same_origin};

/// Policy for classifying a link as internal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkScope {
    /// Root-relative hrefs, plus hrefs that start with the URL of the page
    /// they were found on. The boundary follows the last fetched page.
    #[default]
    PagePrefix,
    /// Any href that resolves to the seed's scheme, host and port
    SeedOrigin,
}

impl LinkScope {
    /// Returns the configuration name of this scope
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PagePrefix => "page-prefix",
            Self::SeedOrigin => "seed-origin",
        }
    }
}

impl fmt::Display for LinkScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LinkScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "page-prefix" => Ok(Self::PagePrefix),
            "seed-origin" => Ok(Self::SeedOrigin),
            other => Err(format!(
                "unknown link scope '{}', expected 'page-prefix' or 'seed-origin'",
                other
            )),
        }
    }
}
