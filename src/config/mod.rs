//! Configuration module for Sitemap Builder
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every setting has a default, so a configuration file is optional.
//!
//! # Example
//!
//! ```no_run
//! use sitemap_builder::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("sitemap.toml")).unwrap();
//! println!("Crawler will use max depth: {}", config.crawler.max_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, HttpConfig, OutputConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default, parse_config};
pub use validation::{validate, validate_seed_url};
