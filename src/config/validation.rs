use crate::config::types::{Config, CrawlerConfig, HttpConfig, OutputConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Upper bound for concurrent fetches within one level
const MAX_CONCURRENCY: usize = 64;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_http_config(&config.http)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    // max_depth >= 0 is always true for u32, so no check needed

    if config.concurrency < 1 || config.concurrency > MAX_CONCURRENCY {
        return Err(ConfigError::Validation(format!(
            "concurrency must be between 1 and {}, got {}",
            MAX_CONCURRENCY, config.concurrency
        )));
    }

    if config.deadline_secs == Some(0) {
        return Err(ConfigError::Validation(
            "deadline_secs must be >= 1 when set".to_string(),
        ));
    }

    Ok(())
}

/// Validates HTTP transport configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs > config.timeout_secs {
        return Err(ConfigError::Validation(format!(
            "connect_timeout_secs ({}) cannot exceed timeout_secs ({})",
            config.connect_timeout_secs, config.timeout_secs
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Validate crawler name: non-empty, alphanumeric + hyphens only
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    if config.crawler_version.trim().is_empty() {
        return Err(ConfigError::Validation(
            "crawler_version cannot be empty".to_string(),
        ));
    }

    if let Some(contact_url) = &config.contact_url {
        Url::parse(contact_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact_url: {}", e)))?;
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if let Some(path) = &config.sitemap_path {
        if path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "sitemap_path cannot be empty".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validates a seed URL given on the command line
///
/// The seed must be an absolute HTTP(S) URL with a host.
pub fn validate_seed_url(seed: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(seed)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid seed URL '{}': {}", seed, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "Seed URL '{}' must use http or https",
            seed
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "Seed URL '{}' has no host",
            seed
        )));
    }

    Ok(url)
}
