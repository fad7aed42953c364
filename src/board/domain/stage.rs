//! Workflow stage enumeration.

use super::ParseStageError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow stage of a task on the team board.
///
/// The variant order is the fixed display order of the board columns. Order
/// is significant for display only: any stage may transition to any other
/// stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stage {
    /// Task has been created but work has not started.
    Created,
    /// Task is being worked on.
    InProgress,
    /// Task work is finished and awaits sign-off.
    Resolved,
    /// Task has been signed off.
    Done,
}

impl Stage {
    /// All stages in fixed board display order.
    pub const ORDER: [Self; 4] = [Self::Created, Self::InProgress, Self::Resolved, Self::Done];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::InProgress => "IN_PROGRESS",
            Self::Resolved => "RESOLVED",
            Self::Done => "DONE",
        }
    }

    /// Returns the human-readable column label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Created => "Created",
            Self::InProgress => "In progress",
            Self::Resolved => "Resolved",
            Self::Done => "Done",
        }
    }
}

impl TryFrom<&str> for Stage {
    type Error = ParseStageError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "CREATED" => Ok(Self::Created),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "RESOLVED" => Ok(Self::Resolved),
            "DONE" => Ok(Self::Done),
            _ => Err(ParseStageError(value.to_owned())),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
