//! Remote task service port: the authoritative persistence collaborator.

use crate::board::domain::{Stage, Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for remote task service operations.
pub type RemoteTaskResult<T> = Result<T, RemoteTaskError>;

/// Contract of the authoritative remote task service.
///
/// The board core is agnostic to the transport behind this port; only the
/// success or failure outcome matters to the transition controller.
#[async_trait]
pub trait RemoteTaskService: Send + Sync {
    /// Returns the full authoritative task snapshot, in service order.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteTaskError`] when the snapshot cannot be retrieved.
    async fn list_tasks(&self) -> RemoteTaskResult<Vec<Task>>;

    /// Requests persistence of one task's workflow stage.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteTaskError::Rejected`] when the service refuses the
    /// change or [`RemoteTaskError::Transport`] when the call itself fails.
    async fn set_task_status(&self, task_id: TaskId, status: Stage) -> RemoteTaskResult<()>;
}

/// Errors returned by remote task service implementations.
///
/// The transition controller treats every variant identically (rollback via
/// full reload); the distinction exists so adapters can report honestly.
#[derive(Debug, Clone, Error)]
pub enum RemoteTaskError {
    /// The service refused the requested change.
    #[error("remote service rejected status change for task {task_id}: {reason}")]
    Rejected {
        /// Task the rejected change targeted.
        task_id: TaskId,
        /// Service-provided rejection reason.
        reason: String,
    },

    /// The call failed before a service-level answer was obtained.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl RemoteTaskError {
    /// Wraps a transport-level failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Builds a service-level rejection.
    pub fn rejected(task_id: TaskId, reason: impl Into<String>) -> Self {
        Self::Rejected {
            task_id,
            reason: reason.into(),
        }
    }
}
