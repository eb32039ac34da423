//! Client configuration
//!
//! Connection settings for the GitLab instance: base URL, the private
//! token used on authenticated runner endpoints, and the request timeout.

use std::time::Duration;

/// GitLab connection configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the GitLab instance (e.g., "https://gitlab.example.com")
    pub base_url: String,

    /// Private token for authenticated runner endpoints (secret)
    pub private_token: String,

    /// Timeout applied to each HTTP request
    pub timeout: Duration,
}

/// Parses the request timeout from its environment value
///
/// An unset variable falls back to the 30 second default; a value that
/// is set but not a number of seconds is an error, not a silent default.
fn parse_timeout(raw: Option<&str>) -> anyhow::Result<Duration> {
    match raw {
        Some(value) => {
            let secs = value.parse::<u64>().map_err(|_| {
                anyhow::anyhow!(
                    "GITLAB_CLIENT_TIMEOUT must be a whole number of seconds, got '{}'",
                    value
                )
            })?;
            Ok(Duration::from_secs(secs))
        }
        None => Ok(Duration::from_secs(30)),
    }
}

impl ClientConfig {
    /// Creates a new configuration with the default timeout
    pub fn new(base_url: impl Into<String>, private_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            private_token: private_token.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - GITLAB_URL (required)
    /// - GITLAB_TOKEN (required)
    /// - GITLAB_CLIENT_TIMEOUT (optional, seconds, default: 30; a
    ///   malformed value is an error)
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url = std::env::var("GITLAB_URL")
            .map_err(|_| anyhow::anyhow!("GITLAB_URL environment variable not set"))?;

        let private_token = std::env::var("GITLAB_TOKEN")
            .map_err(|_| anyhow::anyhow!("GITLAB_TOKEN environment variable not set"))?;

        let timeout_var = std::env::var("GITLAB_CLIENT_TIMEOUT").ok();
        let timeout = parse_timeout(timeout_var.as_deref())?;

        Ok(Self {
            base_url,
            private_token,
            timeout,
        })
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.base_url.is_empty() {
            anyhow::bail!("base_url cannot be empty");
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!("base_url must start with http:// or https://");
        }

        if self.private_token.is_empty() {
            anyhow::bail!("private_token cannot be empty");
        }

        if self.timeout.as_secs() == 0 {
            anyhow::bail!("timeout must be greater than 0");
        }

        Ok(())
    }
}
