//! Glider Provider
//!
//! The runner registration adapter: maps a declared [`RunnerResource`]
//! onto the GitLab Runners REST API and reconciles declared state with
//! remote observed state.
//!
//! The declarative host drives the lifecycle. It owns persisted state and
//! diffing, and calls the adapter's entry points with an explicit
//! resource value and (for updates) an already-computed patch; the
//! adapter translates fields, issues at most one remote call per entry
//! point (create and update re-read afterwards), and mutates the resource
//! in place. The attribute contract the host consumes lives in
//! [`schema`].
//!
//! [`RunnerResource`]: glider_core::domain::runner::RunnerResource

mod adapter;
mod error;
pub mod schema;

pub use adapter::RunnerAdapter;
pub use error::{AdapterError, Result};
