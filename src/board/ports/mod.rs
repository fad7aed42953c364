//! Port contracts for the team board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod remote;

pub use remote::{RemoteTaskError, RemoteTaskResult, RemoteTaskService};
