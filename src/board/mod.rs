//! Team board status-transition core.
//!
//! This module implements the board bounded context: partitioning a shared
//! task collection into ordered workflow stages, gating stage transitions by
//! actor capability, applying a requested transition optimistically to the
//! local task store, and reconciling with the authoritative remote service
//! (confirm on success, reload-and-rollback on failure). The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
