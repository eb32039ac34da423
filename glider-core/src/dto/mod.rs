//! DTOs
//!
//! Wire payloads exchanged with the GitLab Runners REST API.

pub mod runner;
