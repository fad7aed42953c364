//! Domain model for the team board.
//!
//! The board domain models the client-side task collection, the fixed
//! workflow stage enumeration, actor capabilities, and stage partitioning,
//! while keeping all infrastructure concerns outside of the domain boundary.

mod actor;
mod board;
mod error;
mod ids;
mod stage;
mod store;
mod task;

pub use actor::{Actor, Capability, Role};
pub use board::{BoardColumns, StageColumn};
pub use error::{ParseRoleError, ParseStageError};
pub use ids::TaskId;
pub use stage::Stage;
pub use store::TaskStore;
pub use task::{Employee, Priority, Task};
