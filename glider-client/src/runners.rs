//! Runner API endpoints
//!
//! The four calls the registration provider needs:
//! - Registering a new runner (registration token in the body)
//! - Fetching runner details, with not-found as a first-class outcome
//! - Applying a partial update to a runner
//! - Removing a runner registration

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::error::Result;
use crate::{GitlabClient, PRIVATE_TOKEN_HEADER};
use glider_core::dto::runner::{
    RegisterRunnerRequest, RegisteredRunner, RunnerDetails, UpdateRunnerRequest,
};

/// Remote runner API consumed by the adapter
///
/// Trait-based so the adapter can be tested against a mock instead of a
/// live GitLab instance.
#[async_trait]
pub trait RunnersApi: Send + Sync {
    /// Register a new runner
    ///
    /// Authenticates through the registration token in the request body.
    ///
    /// # Returns
    /// The server-assigned id and the runner authentication token; the
    /// token is only ever returned by this call.
    async fn register_new_runner(
        &self,
        request: &RegisterRunnerRequest,
    ) -> Result<RegisteredRunner>;

    /// Fetch details for a runner
    ///
    /// # Returns
    /// `Ok(None)` when the runner does not exist; callers must not treat
    /// absence as a failure.
    async fn get_runner_details(&self, id: u64) -> Result<Option<RunnerDetails>>;

    /// Apply a partial update to a runner
    ///
    /// Fields left `None` in the request are not transmitted.
    async fn update_runner_details(&self, id: u64, request: &UpdateRunnerRequest) -> Result<()>;

    /// Remove a runner registration
    async fn remove_runner(&self, id: u64) -> Result<()>;
}

// Lets the host hand the same client to several adapters.
#[async_trait]
impl<T: RunnersApi + ?Sized> RunnersApi for std::sync::Arc<T> {
    async fn register_new_runner(
        &self,
        request: &RegisterRunnerRequest,
    ) -> Result<RegisteredRunner> {
        (**self).register_new_runner(request).await
    }

    async fn get_runner_details(&self, id: u64) -> Result<Option<RunnerDetails>> {
        (**self).get_runner_details(id).await
    }

    async fn update_runner_details(&self, id: u64, request: &UpdateRunnerRequest) -> Result<()> {
        (**self).update_runner_details(id, request).await
    }

    async fn remove_runner(&self, id: u64) -> Result<()> {
        (**self).remove_runner(id).await
    }
}

#[async_trait]
impl RunnersApi for GitlabClient {
    async fn register_new_runner(
        &self,
        request: &RegisterRunnerRequest,
    ) -> Result<RegisteredRunner> {
        tracing::debug!("registering runner at {}", self.base_url());
        let response = self
            .client
            .post(self.runners_url())
            .json(request)
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn get_runner_details(&self, id: u64) -> Result<Option<RunnerDetails>> {
        tracing::debug!("fetching details for runner {}", id);
        let response = self
            .client
            .get(self.runner_url(id))
            .header(PRIVATE_TOKEN_HEADER, self.private_token())
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!("runner {} not found", id);
            return Ok(None);
        }

        self.handle_response(response).await.map(Some)
    }

    async fn update_runner_details(&self, id: u64, request: &UpdateRunnerRequest) -> Result<()> {
        tracing::debug!("updating runner {}", id);
        let response = self
            .client
            .put(self.runner_url(id))
            .header(PRIVATE_TOKEN_HEADER, self.private_token())
            .json(request)
            .send()
            .await?;

        self.handle_empty_response(response).await
    }

    async fn remove_runner(&self, id: u64) -> Result<()> {
        tracing::debug!("removing runner {}", id);
        let response = self
            .client
            .delete(self.runner_url(id))
            .header(PRIVATE_TOKEN_HEADER, self.private_token())
            .send()
            .await?;

        self.handle_empty_response(response).await
    }
}
