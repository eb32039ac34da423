//! Glider HTTP Client
//!
//! A simple, type-safe HTTP client for the GitLab Runners REST API.
//!
//! This crate provides the remote half of the runner registration
//! provider: registering new runners, fetching runner details, applying
//! partial updates, and removing registrations. The adapter consumes it
//! through the [`RunnersApi`] trait so tests can substitute a mock.
//!
//! # Example
//!
//! ```no_run
//! use glider_client::{GitlabClient, RunnersApi};
//! use glider_core::dto::runner::RegisterRunnerRequest;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = GitlabClient::new("https://gitlab.example.com", "glpat-secret");
//!
//!     let registered = client.register_new_runner(&RegisterRunnerRequest {
//!         token: "registration-token".to_string(),
//!         description: Some("docker builder".to_string()),
//!         active: true,
//!         locked: false,
//!         run_untagged: true,
//!         tag_list: None,
//!         maximum_timeout: None,
//!     }).await?;
//!
//!     println!("Registered runner: {}", registered.id);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
mod runners;

// Re-export commonly used types
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use runners::RunnersApi;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// Name of the header GitLab expects the personal/admin token in
const PRIVATE_TOKEN_HEADER: &str = "PRIVATE-TOKEN";

/// HTTP client for the GitLab Runners API
///
/// Registration authenticates through the registration token carried in
/// the request body; details lookup, update, and removal authenticate
/// through the configured private token header.
#[derive(Debug, Clone)]
pub struct GitlabClient {
    /// Base URL of the GitLab instance (e.g., "https://gitlab.example.com")
    base_url: String,
    /// Private token sent on authenticated endpoints
    private_token: String,
    /// HTTP client instance
    client: Client,
}

impl GitlabClient {
    /// Create a new GitLab client
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the GitLab instance
    /// * `private_token` - Token for authenticated runner endpoints
    ///
    /// # Example
    /// ```
    /// use glider_client::GitlabClient;
    ///
    /// let client = GitlabClient::new("https://gitlab.example.com", "glpat-secret");
    /// ```
    pub fn new(base_url: impl Into<String>, private_token: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            private_token: private_token.into(),
            client: Client::new(),
        }
    }

    /// Create a new GitLab client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the GitLab instance
    /// * `private_token` - Token for authenticated runner endpoints
    /// * `client` - A configured reqwest Client
    pub fn with_client(
        base_url: impl Into<String>,
        private_token: impl Into<String>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            private_token: private_token.into(),
            client,
        }
    }

    /// Create a client from a validated configuration
    ///
    /// Applies the configured request timeout to the underlying HTTP
    /// client.
    pub fn from_config(config: &ClientConfig) -> anyhow::Result<Self> {
        config.validate()?;

        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self::with_client(
            config.base_url.clone(),
            config.private_token.clone(),
            client,
        ))
    }

    /// Get the base URL of the GitLab instance
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the runners collection endpoint
    fn runners_url(&self) -> String {
        format!("{}/api/v4/runners", self.base_url)
    }

    /// URL of a single runner endpoint
    fn runner_url(&self, id: u64) -> String {
        format!("{}/api/v4/runners/{}", self.base_url, id)
    }

    /// Value for the private token header
    fn private_token(&self) -> &str {
        &self.private_token
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error
    /// if the request failed, or deserializes the response body if
    /// successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Parse(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response whose body is irrelevant (e.g., DELETE)
    ///
    /// This method checks the status code and returns an error if the
    /// request failed.
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = GitlabClient::new("https://gitlab.example.com", "secret");
        assert_eq!(client.base_url(), "https://gitlab.example.com");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = GitlabClient::new("https://gitlab.example.com/", "secret");
        assert_eq!(client.base_url(), "https://gitlab.example.com");
    }

    #[test]
    fn test_runner_urls() {
        let client = GitlabClient::new("https://gitlab.example.com", "secret");
        assert_eq!(
            client.runners_url(),
            "https://gitlab.example.com/api/v4/runners"
        );
        assert_eq!(
            client.runner_url(42),
            "https://gitlab.example.com/api/v4/runners/42"
        );
    }

    #[test]
    fn test_client_from_config() {
        let config = ClientConfig::new("https://gitlab.example.com", "secret");
        let client = GitlabClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "https://gitlab.example.com");
    }
}
