//! Teamboard: client-side core for a shared team task board.
//!
//! This crate maintains a client-visible view of a shared task collection,
//! organised into ordered workflow stages, and lets an authorised actor move
//! a task between stages while keeping the local view and the authoritative
//! remote service consistent under latency and failure.
//!
//! # Architecture
//!
//! Teamboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`board`]: Task store, stage partitioning, permissions, and the
//!   optimistic status-transition controller

pub mod board;
