//! Runner DTOs
//!
//! Wire payloads for the GitLab v4 Runners endpoints: registration,
//! details lookup, and partial update.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::patch::RunnerPatch;
use crate::domain::runner::{AccessLevel, RunnerGroup, RunnerProject};

/// Body of `POST /api/v4/runners`
///
/// The three boolean flags are always serialized, even when they carry
/// their defaults: omitting them would let the remote side apply its own
/// defaults, which have drifted from ours in the past.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRunnerRequest {
    /// Registration token (authenticates the call)
    pub token: String,

    /// Runner description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the runner accepts jobs
    pub active: bool,

    /// Whether the runner is locked to its current projects
    pub locked: bool,

    /// Whether the runner picks up untagged jobs
    pub run_untagged: bool,

    /// Tags, as a list in set order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_list: Option<Vec<String>>,

    /// Maximum job timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_timeout: Option<u32>,
}

/// Response of `POST /api/v4/runners`
///
/// Registration returns only the identity and the runner authentication
/// token; everything else comes from a follow-up details lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisteredRunner {
    /// Server-assigned runner identifier
    pub id: u64,

    /// Runner authentication token; only ever returned here
    pub token: String,
}

/// Response of `GET /api/v4/runners/:id`
///
/// Serde defaults keep this tolerant of fields the server omits; newer
/// GitLab versions drop `token` from this response entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunnerDetails {
    /// Runner identifier
    pub id: u64,

    /// Runner description
    #[serde(default)]
    pub description: Option<String>,

    /// Last IP address the runner contacted from
    #[serde(default)]
    pub ip_address: Option<String>,

    /// Whether the runner accepts jobs
    #[serde(default = "default_true")]
    pub active: bool,

    /// Whether this is an instance-wide shared runner
    #[serde(default)]
    pub is_shared: bool,

    /// Runner name as known to the server
    #[serde(default)]
    pub name: Option<String>,

    /// Whether the runner is currently online
    #[serde(default)]
    pub online: Option<bool>,

    /// Runner status string, e.g. "online", "stale"
    #[serde(default)]
    pub status: Option<String>,

    /// Last contact time
    #[serde(default)]
    pub contacted_at: Option<DateTime<Utc>>,

    /// Runner authentication token; empty or absent after registration
    #[serde(default)]
    pub token: Option<String>,

    /// Tags the runner is registered with
    #[serde(default)]
    pub tag_list: Vec<String>,

    /// Whether the runner picks up untagged jobs
    #[serde(default = "default_true")]
    pub run_untagged: bool,

    /// Whether the runner is locked to its current projects
    #[serde(default)]
    pub locked: bool,

    /// Protection level
    #[serde(default)]
    pub access_level: AccessLevel,

    /// Maximum job timeout in seconds
    #[serde(default)]
    pub maximum_timeout: Option<u32>,

    /// Runner agent version
    #[serde(default)]
    pub version: Option<String>,

    /// Runner agent revision
    #[serde(default)]
    pub revision: Option<String>,

    /// Platform the runner executes on
    #[serde(default)]
    pub platform: Option<String>,

    /// CPU architecture of the runner host
    #[serde(default)]
    pub architecture: Option<String>,

    /// Projects the runner is assigned to
    #[serde(default)]
    pub projects: Vec<RunnerProject>,

    /// Groups the runner is assigned to
    #[serde(default)]
    pub groups: Vec<RunnerGroup>,
}

fn default_true() -> bool {
    true
}

/// Body of `PUT /api/v4/runners/:id`
///
/// Every field is optional; fields left `None` are omitted so the remote
/// side applies true partial-patch semantics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateRunnerRequest {
    /// New description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New active flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// New tag list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_list: Option<Vec<String>>,

    /// New run-untagged flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_untagged: Option<bool>,

    /// New locked flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,

    /// New protection level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_level: Option<AccessLevel>,

    /// New maximum job timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_timeout: Option<u32>,
}

impl From<&RunnerPatch> for UpdateRunnerRequest {
    fn from(patch: &RunnerPatch) -> Self {
        UpdateRunnerRequest {
            description: patch.description.clone(),
            active: patch.active,
            tag_list: patch
                .tags
                .as_ref()
                .map(|tags| tags.iter().cloned().collect()),
            run_untagged: patch.run_untagged,
            locked: patch.locked,
            access_level: patch.access_level,
            maximum_timeout: patch.maximum_timeout,
        }
    }
}
