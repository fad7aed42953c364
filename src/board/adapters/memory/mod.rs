//! In-memory adapters for board ports.

mod remote;

pub use remote::InMemoryRemoteTaskService;
