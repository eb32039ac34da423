//! Runner update patch
//!
//! An explicit partial-update structure: the host computes the diff
//! between previous and desired declared state and hands the adapter an
//! already-built patch. The adapter never inspects "has this changed"
//! itself. Fields left `None` are omitted from the outgoing request.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::runner::AccessLevel;

/// Partial update to a registered runner
///
/// Covers exactly the attributes the remote API accepts in an update;
/// `registration_token` and `name` force replacement and never appear.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunnerPatch {
    /// New description
    pub description: Option<String>,

    /// New active flag
    pub active: Option<bool>,

    /// New tag set
    pub tags: Option<BTreeSet<String>>,

    /// New run-untagged flag
    pub run_untagged: Option<bool>,

    /// New locked flag
    pub locked: Option<bool>,

    /// New protection level
    pub access_level: Option<AccessLevel>,

    /// New maximum job timeout in seconds
    pub maximum_timeout: Option<u32>,
}

impl RunnerPatch {
    /// Whether the patch carries no changes at all
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.active.is_none()
            && self.tags.is_none()
            && self.run_untagged.is_none()
            && self.locked.is_none()
            && self.access_level.is_none()
            && self.maximum_timeout.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_patch_is_empty() {
        assert!(RunnerPatch::default().is_empty());
    }

    #[test]
    fn test_single_field_patch_is_not_empty() {
        let patch = RunnerPatch {
            description: Some("updated".to_string()),
            ..RunnerPatch::default()
        };
        assert!(!patch.is_empty());
    }
}
