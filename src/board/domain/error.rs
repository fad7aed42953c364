//! Error types for board domain parsing.

use thiserror::Error;

/// Error returned while parsing workflow stages from wire values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown workflow stage: {0}")]
pub struct ParseStageError(pub String);

/// Error returned while parsing actor roles from wire values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown actor role: {0}")]
pub struct ParseRoleError(pub String);
