//! Domain types
//!
//! Core entities for runner registration: the runner resource itself
//! and the partial-update patch applied to it.

pub mod patch;
pub mod runner;
