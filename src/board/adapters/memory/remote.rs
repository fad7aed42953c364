//! In-memory remote task service for board tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::board::{
    domain::{Stage, Task, TaskId},
    ports::{RemoteTaskError, RemoteTaskResult, RemoteTaskService},
};

/// Thread-safe in-memory stand-in for the authoritative remote service.
///
/// Holds its own task snapshot, applies confirmed status changes to it, and
/// supports scripted failures plus a log of every `set_task_status` call so
/// tests can assert that short-circuited requests never reach the remote.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRemoteTaskService {
    state: Arc<RwLock<InMemoryRemoteState>>,
}

#[derive(Debug, Default)]
struct InMemoryRemoteState {
    tasks: Vec<Task>,
    status_calls: Vec<(TaskId, Stage)>,
    list_failures: VecDeque<RemoteTaskError>,
    status_failures: VecDeque<RemoteTaskError>,
}

impl InMemoryRemoteTaskService {
    /// Creates a service with an empty task snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service seeded with a task snapshot.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let service = Self::new();
        if let Ok(mut state) = service.state.write() {
            state.tasks = tasks;
        }
        service
    }

    /// Replaces the authoritative snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteTaskError::Transport`] when internal state is
    /// poisoned.
    pub fn set_tasks(&self, tasks: Vec<Task>) -> RemoteTaskResult<()> {
        let mut state = self.write_state()?;
        state.tasks = tasks;
        Ok(())
    }

    /// Queues a failure for the next `list_tasks` call.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteTaskError::Transport`] when internal state is
    /// poisoned.
    pub fn fail_next_list_tasks(&self, err: RemoteTaskError) -> RemoteTaskResult<()> {
        let mut state = self.write_state()?;
        state.list_failures.push_back(err);
        Ok(())
    }

    /// Queues a failure for the next `set_task_status` call.
    ///
    /// The call is still recorded in the call log before failing.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteTaskError::Transport`] when internal state is
    /// poisoned.
    pub fn fail_next_set_status(&self, err: RemoteTaskError) -> RemoteTaskResult<()> {
        let mut state = self.write_state()?;
        state.status_failures.push_back(err);
        Ok(())
    }

    /// Returns every `set_task_status` call received so far, in order.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteTaskError::Transport`] when internal state is
    /// poisoned.
    pub fn status_calls(&self) -> RemoteTaskResult<Vec<(TaskId, Stage)>> {
        let state = self.read_state()?;
        Ok(state.status_calls.clone())
    }

    fn read_state(&self) -> RemoteTaskResult<RwLockReadGuard<'_, InMemoryRemoteState>> {
        self.state
            .read()
            .map_err(|err| RemoteTaskError::transport(std::io::Error::other(err.to_string())))
    }

    fn write_state(&self) -> RemoteTaskResult<RwLockWriteGuard<'_, InMemoryRemoteState>> {
        self.state
            .write()
            .map_err(|err| RemoteTaskError::transport(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl RemoteTaskService for InMemoryRemoteTaskService {
    async fn list_tasks(&self) -> RemoteTaskResult<Vec<Task>> {
        let mut state = self.write_state()?;
        if let Some(err) = state.list_failures.pop_front() {
            return Err(err);
        }
        Ok(state.tasks.clone())
    }

    async fn set_task_status(&self, task_id: TaskId, status: Stage) -> RemoteTaskResult<()> {
        let mut state = self.write_state()?;
        state.status_calls.push((task_id, status));
        if let Some(err) = state.status_failures.pop_front() {
            return Err(err);
        }

        let task = state
            .tasks
            .iter_mut()
            .find(|task| task.id() == task_id)
            .ok_or_else(|| RemoteTaskError::rejected(task_id, "task not found"))?;
        task.set_stage(status);
        Ok(())
    }
}
