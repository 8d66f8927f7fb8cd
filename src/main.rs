//! Sitemap Builder main entry point
//!
//! This is the command-line interface: it crawls one site and prints its
//! sitemap.

use anyhow::Context;
use clap::Parser;
use sitemap_builder::config::{load_config_or_default, validate, Config};
use sitemap_builder::crawler::crawl_site;
use sitemap_builder::output::{encode_sitemap, print_statistics, write_sitemap, CrawlStatistics};
use sitemap_builder::LinkScope;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Sitemap Builder: crawls a website breadth-first and emits an XML sitemap
///
/// Pages are followed from the seed URL up to the maximum link depth. The
/// sitemap is written to stdout unless an output file is given; logs go to
/// stderr.
#[derive(Parser, Debug)]
#[command(name = "sitemap-builder")]
#[command(version = "1.0.0")]
#[command(about = "Builds an XML sitemap by crawling a website", long_about = None)]
struct Cli {
    /// URL to fetch and crawl
    #[arg(long, default_value = "https://gophercises.com")]
    url: String,

    /// Maximum number of links deep to traverse [default: 3]
    #[arg(long)]
    depth: Option<u32>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Maximum number of pages fetched at once
    #[arg(long)]
    concurrency: Option<usize>,

    /// Which links count as internal
    #[arg(long, value_name = "page-prefix|seed-origin")]
    scope: Option<LinkScope>,

    /// Stop crawling after this many seconds
    #[arg(long, value_name = "SECS")]
    deadline: Option<u64>,

    /// Write the sitemap to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print crawl statistics to stderr when done
    #[arg(long)]
    stats: bool,
}

impl Cli {
    /// Applies command-line overrides on top of the loaded configuration
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(depth) = self.depth {
            config.crawler.max_depth = depth;
        }
        if let Some(concurrency) = self.concurrency {
            config.crawler.concurrency = concurrency;
        }
        if let Some(scope) = self.scope {
            config.crawler.scope = scope;
        }
        if let Some(deadline) = self.deadline {
            config.crawler.deadline_secs = Some(deadline);
        }
        if let Some(output) = &self.output {
            config.output.sitemap_path = Some(output.display().to_string());
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let mut config = load_config_or_default(cli.config.as_deref()).with_context(|| {
        match &cli.config {
            Some(path) => format!("Failed to load configuration from {}", path.display()),
            None => "Failed to load default configuration".to_string(),
        }
    })?;
    cli.apply_overrides(&mut config);
    validate(&config).context("Invalid configuration")?;

    tracing::info!("Max depth: {}", config.crawler.max_depth);
    tracing::info!("Fetching URL: {}", cli.url);

    let report = crawl_site(&config, &cli.url)
        .await
        .with_context(|| format!("Failed to crawl {}", cli.url))?;

    if report.truncated {
        tracing::warn!("Crawl stopped at its deadline; the sitemap is partial");
    }

    let xml = encode_sitemap(&report.links()).context("Failed to encode sitemap")?;
    let output_path = config.output.sitemap_path.as_deref().map(Path::new);
    write_sitemap(&xml, output_path).context("Failed to write sitemap")?;

    if cli.stats {
        print_statistics(&CrawlStatistics::from_report(&report));
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so stdout carries only the sitemap.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitemap_builder=info,warn"),
            1 => EnvFilter::new("sitemap_builder=debug,info"),
            2 => EnvFilter::new("sitemap_builder=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
