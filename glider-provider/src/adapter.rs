//! Runner registration adapter
//!
//! Translates between the declared [`RunnerResource`] and the remote
//! runner API. Each entry point is synchronous from the host's point of
//! view and issues at most one remote call; create and update follow a
//! successful write with a full read so computed fields stay in sync.

use glider_client::RunnersApi;
use glider_core::domain::patch::RunnerPatch;
use glider_core::domain::runner::RunnerResource;
use glider_core::dto::runner::{RegisterRunnerRequest, RunnerDetails, UpdateRunnerRequest};

use crate::error::{AdapterError, Result};

/// Adapter reconciling a declared runner registration with the remote API
///
/// Generic over [`RunnersApi`] so the remote side can be mocked in tests.
/// Holds no state of its own; every operation works on the resource value
/// the host passes in.
#[derive(Debug, Clone)]
pub struct RunnerAdapter<C> {
    client: C,
}

impl<C: RunnersApi> RunnerAdapter<C> {
    /// Creates an adapter over the given client handle
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Registers the declared runner with the remote service
    ///
    /// Requires `registration_token`; rejects a configured `name` before
    /// any remote call. On success the server-assigned id and the runner
    /// authentication token are captured, then a full read populates the
    /// computed fields. On failure the error propagates and no identity
    /// is committed.
    pub async fn create(&self, resource: &mut RunnerResource) -> Result<()> {
        if resource.name.is_some() {
            return Err(AdapterError::NameNotSupported);
        }

        let request = register_request(resource)?;

        tracing::debug!("registering runner");
        let registered = self.client.register_new_runner(&request).await?;

        resource.id = Some(registered.id);
        resource.token = Some(registered.token);
        tracing::info!("Runner registered: {}", registered.id);

        self.read(resource).await
    }

    /// Refreshes the resource from remote observed state
    ///
    /// A runner the remote side no longer knows is not an error: the
    /// identity is cleared so the host drops the entity from state and
    /// recreates it on the next apply if still declared.
    pub async fn read(&self, resource: &mut RunnerResource) -> Result<()> {
        let id = resource.id.ok_or(AdapterError::MissingId)?;

        tracing::debug!("reading runner {}", id);
        match self.client.get_runner_details(id).await? {
            Some(details) => {
                apply_details(resource, details);
                Ok(())
            }
            None => {
                tracing::debug!("runner {} not found, clearing identity", id);
                resource.clear_identity();
                Ok(())
            }
        }
    }

    /// Applies a host-computed partial update, then re-reads
    ///
    /// Only the fields set in the patch are transmitted; the remote API
    /// has true partial-patch semantics. `registration_token` and `name`
    /// force replacement and can never appear in a patch.
    pub async fn update(&self, resource: &mut RunnerResource, patch: &RunnerPatch) -> Result<()> {
        let id = resource.id.ok_or(AdapterError::MissingId)?;
        let request = UpdateRunnerRequest::from(patch);

        tracing::debug!("updating runner {}", id);
        self.client.update_runner_details(id, &request).await?;

        self.read(resource).await
    }

    /// De-registers the runner on the remote side
    ///
    /// No local mutation: the host removes the entity from state only
    /// after this returns without error.
    pub async fn delete(&self, resource: &RunnerResource) -> Result<()> {
        let id = resource.id.ok_or(AdapterError::MissingId)?;

        tracing::debug!("removing runner {}", id);
        self.client.remove_runner(id).await?;
        tracing::info!("Runner removed: {}", id);

        Ok(())
    }

    /// Builds a fully populated resource from an externally supplied id
    ///
    /// Delegates entirely to read and fails only if the read itself
    /// fails: an id the remote side does not know comes back as an
    /// absent resource, and rejecting it is the host's call.
    pub async fn import(&self, id: u64) -> Result<RunnerResource> {
        let mut resource = RunnerResource {
            id: Some(id),
            ..RunnerResource::default()
        };

        self.read(&mut resource).await?;

        Ok(resource)
    }
}

/// Builds the registration request from the declared resource
fn register_request(resource: &RunnerResource) -> Result<RegisterRunnerRequest> {
    let token = resource
        .registration_token
        .clone()
        .ok_or(AdapterError::MissingRegistrationToken)?;

    Ok(RegisterRunnerRequest {
        token,
        description: resource.description.clone(),
        // The booleans are always transmitted, defaults included, so the
        // remote side cannot apply defaults of its own.
        active: resource.active,
        locked: resource.locked,
        run_untagged: resource.run_untagged,
        tag_list: if resource.tags.is_empty() {
            None
        } else {
            Some(resource.tags.iter().cloned().collect())
        },
        maximum_timeout: resource.maximum_timeout,
    })
}

/// Overwrites the resource from remote observed state
///
/// Every field is taken from the response except `token`: the API stops
/// returning the authentication token after registration, and an empty or
/// absent value must not erase the one captured at creation.
fn apply_details(resource: &mut RunnerResource, details: RunnerDetails) {
    resource.id = Some(details.id);
    resource.active = details.active;
    resource.description = details.description;
    resource.ip_address = details.ip_address;
    resource.is_shared = Some(details.is_shared);
    resource.contacted_at = details.contacted_at;
    resource.online = details.online;
    resource.status = details.status;
    resource.projects = details.projects;
    if let Some(token) = details.token
        && !token.is_empty()
    {
        resource.token = Some(token);
    }
    resource.tags = details.tag_list.into_iter().collect();
    resource.locked = details.locked;
    resource.access_level = details.access_level;
    resource.maximum_timeout = details.maximum_timeout;
    resource.groups = details.groups;
    resource.name = details.name;
    resource.version = details.version;
    resource.revision = details.revision;
    resource.platform = details.platform;
    resource.architecture = details.architecture;
    resource.run_untagged = details.run_untagged;
}
