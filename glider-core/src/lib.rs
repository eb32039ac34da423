//! Glider Core
//!
//! Core types for the glider GitLab runner registration provider.
//!
//! This crate contains:
//! - Domain types: the declared+observed runner state (RunnerResource, RunnerPatch)
//! - DTOs: wire payloads for the GitLab Runners REST API

pub mod domain;
pub mod dto;
