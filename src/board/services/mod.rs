//! Application services for the team board.

mod transition;

pub use transition::{
    BoardError, BoardResult, BoardService, IgnoreReason, TransitionOutcome, TransitionRequest,
};
