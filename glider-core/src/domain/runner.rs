//! Runner resource domain model
//!
//! Represents a registered CI runner as declared in configuration and
//! observed from the GitLab API. The resource is an explicit value type:
//! the host passes it into each adapter operation and the operation
//! mutates it in place, so there is no shared attribute bag between calls.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Protection level of a runner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    /// Runner picks up jobs from any ref
    #[default]
    NotProtected,

    /// Runner only picks up jobs from protected refs
    RefProtected,
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessLevel::NotProtected => write!(f, "not_protected"),
            AccessLevel::RefProtected => write!(f, "ref_protected"),
        }
    }
}

/// A project the runner is assigned to (server-computed association)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerProject {
    /// Project identifier
    pub id: u64,

    /// Project name
    pub name: String,

    /// Full namespaced path (e.g., "group/project")
    #[serde(default)]
    pub path_with_namespace: Option<String>,
}

/// A group the runner is assigned to (server-computed association)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerGroup {
    /// Group identifier
    pub id: u64,

    /// Group name
    pub name: String,

    /// Web URL of the group
    #[serde(default)]
    pub web_url: Option<String>,
}

/// Declared and observed state of a registered runner
///
/// User-settable fields carry the schema defaults via `Default`;
/// server-computed fields start out `None` and are filled in by reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunnerResource {
    /// Server-assigned identifier; `None` means the runner is absent
    /// (not yet created, or no longer known to the remote side)
    pub id: Option<u64>,

    /// Registration token consumed at creation time (secret, force-new)
    pub registration_token: Option<String>,

    /// Human-readable description
    pub description: Option<String>,

    /// Runner name. Declared but not accepted at registration time; only
    /// ever populated from reads. Changing it forces replacement.
    pub name: Option<String>,

    /// Whether the runner accepts jobs
    pub active: bool,

    /// Whether the runner is locked to its current projects
    pub locked: bool,

    /// Whether the runner picks up untagged jobs
    pub run_untagged: bool,

    /// Tags the runner is registered with
    pub tags: BTreeSet<String>,

    /// Protection level
    pub access_level: AccessLevel,

    /// Maximum job timeout in seconds
    pub maximum_timeout: Option<u32>,

    /// Runner agent version (server-computed)
    pub version: Option<String>,

    /// Runner agent revision (server-computed)
    pub revision: Option<String>,

    /// Platform the runner executes on (server-computed)
    pub platform: Option<String>,

    /// CPU architecture of the runner host (server-computed)
    pub architecture: Option<String>,

    /// Last IP address the runner contacted from (server-computed)
    pub ip_address: Option<String>,

    /// Whether this is an instance-wide shared runner (server-computed)
    pub is_shared: Option<bool>,

    /// Last contact time (server-computed)
    pub contacted_at: Option<DateTime<Utc>>,

    /// Whether the runner is currently online (server-computed)
    pub online: Option<bool>,

    /// Runner status string, e.g. "online", "stale" (server-computed)
    pub status: Option<String>,

    /// Runner authentication token captured from the registration
    /// response (secret). The API stops returning it after registration,
    /// so reads never erase a previously captured value.
    pub token: Option<String>,

    /// Projects the runner is assigned to (server-computed)
    pub projects: Vec<RunnerProject>,

    /// Groups the runner is assigned to (server-computed)
    pub groups: Vec<RunnerGroup>,
}

impl Default for RunnerResource {
    fn default() -> Self {
        Self {
            id: None,
            registration_token: None,
            description: None,
            name: None,
            active: true,
            locked: false,
            run_untagged: true,
            tags: BTreeSet::new(),
            access_level: AccessLevel::default(),
            maximum_timeout: None,
            version: None,
            revision: None,
            platform: None,
            architecture: None,
            ip_address: None,
            is_shared: None,
            contacted_at: None,
            online: None,
            status: None,
            token: None,
            projects: Vec::new(),
            groups: Vec::new(),
        }
    }
}

impl RunnerResource {
    /// Creates a resource ready for registration with the given token
    pub fn new(registration_token: impl Into<String>) -> Self {
        Self {
            registration_token: Some(registration_token.into()),
            ..Self::default()
        }
    }

    /// Marks the resource as absent on the remote side
    ///
    /// Called when a read discovers the runner no longer exists; the host
    /// drops the entity from state and recreates it on the next apply if
    /// it is still declared.
    pub fn clear_identity(&mut self) {
        self.id = None;
    }

    /// Whether the resource currently has no remote identity
    pub fn is_absent(&self) -> bool {
        self.id.is_none()
    }
}
