//! Status-transition controller: optimistic apply with rollback-by-reload.

use crate::board::{
    domain::{Actor, BoardColumns, Capability, Stage, Task, TaskId, TaskStore},
    ports::{RemoteTaskError, RemoteTaskService},
};
use std::sync::{
    Arc, RwLock, RwLockReadGuard, RwLockWriteGuard,
    atomic::{AtomicBool, Ordering},
};
use thiserror::Error;
use tracing::{debug, warn};

/// A requested stage transition, resolved from a drag gesture.
///
/// The gesture boundary reduces whatever event shape the interaction layer
/// produces to this three-tuple; a drop outside any valid target arrives
/// with no destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRequest {
    task_id: TaskId,
    source: Stage,
    destination: Option<Stage>,
}

impl TransitionRequest {
    /// Creates a transition request from resolved gesture coordinates.
    #[must_use]
    pub const fn new(task_id: TaskId, source: Stage, destination: Option<Stage>) -> Self {
        Self {
            task_id,
            source,
            destination,
        }
    }

    /// Returns the identifier of the task being moved.
    #[must_use]
    pub const fn task_id(self) -> TaskId {
        self.task_id
    }

    /// Returns the stage the task was dragged from.
    #[must_use]
    pub const fn source(self) -> Stage {
        self.source
    }

    /// Returns the stage the task was dropped on, if any.
    #[must_use]
    pub const fn destination(self) -> Option<Stage> {
        self.destination
    }
}

/// Why a transition request was dropped without touching the store or the
/// remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The actor lacks full transition capability.
    NotPermitted,
    /// The gesture resolved to no drop target.
    NoDestination,
    /// Source and destination stage are the same.
    SameStage,
}

/// Outcome of a transition request.
#[derive(Debug, Clone)]
pub enum TransitionOutcome {
    /// The optimistic state was confirmed by the remote service.
    Completed,
    /// Confirmation failed; the store was resynchronised from the remote
    /// snapshot, discarding the optimistic state.
    RolledBack(RemoteTaskError),
    /// A precondition failed and the request was dropped silently.
    Ignored(IgnoreReason),
}

/// Errors surfaced by board service operations.
///
/// Precondition failures are not errors (see [`TransitionOutcome::Ignored`]);
/// an error here means a load could not complete or internal state is
/// unusable.
#[derive(Debug, Clone, Error)]
pub enum BoardError {
    /// A remote load failed, leaving the store with its previous contents.
    #[error(transparent)]
    Remote(#[from] RemoteTaskError),

    /// The task store lock was poisoned by a panicking writer.
    #[error("task store lock poisoned")]
    StorePoisoned,
}

/// Board service result type.
pub type BoardResult<T> = Result<T, BoardError>;

/// Clears the busy flag when dropped, so the indicator is never left stuck
/// after the remote round trip resolves on either branch.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn engage(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// The status-transition controller.
///
/// Owns the client-side [`TaskStore`] and orchestrates a requested move:
/// permission check, optimistic apply, remote confirmation, and rollback via
/// full reload when confirmation fails. Store mutations are serialised
/// through a single writer lock; the lock is never held across I/O, so
/// concurrent transitions on different tasks do not block one another.
pub struct BoardService<R>
where
    R: RemoteTaskService,
{
    remote: Arc<R>,
    store: RwLock<TaskStore>,
    updating: AtomicBool,
}

impl<R> BoardService<R>
where
    R: RemoteTaskService,
{
    /// Creates a board service with an empty store.
    #[must_use]
    pub fn new(remote: Arc<R>) -> Self {
        Self {
            remote,
            store: RwLock::new(TaskStore::new()),
            updating: AtomicBool::new(false),
        }
    }

    /// Replaces the store wholesale with the authoritative remote snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Remote`] when the snapshot cannot be retrieved;
    /// the store then keeps its previous contents.
    pub async fn load(&self) -> BoardResult<()> {
        let tasks = self.remote.list_tasks().await?;
        debug!(count = tasks.len(), "loaded task snapshot");
        self.write_store()?.replace_all(tasks);
        Ok(())
    }

    /// Returns the current store contents partitioned into board columns.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StorePoisoned`] when the store lock is
    /// poisoned.
    pub fn columns(&self) -> BoardResult<BoardColumns> {
        Ok(BoardColumns::partition(self.read_store()?.tasks()))
    }

    /// Returns a snapshot of the current store contents in store order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StorePoisoned`] when the store lock is
    /// poisoned.
    pub fn tasks_snapshot(&self) -> BoardResult<Vec<Task>> {
        Ok(self.read_store()?.tasks().to_vec())
    }

    /// Returns `true` while a remote confirmation round trip is in flight.
    #[must_use]
    pub fn is_updating(&self) -> bool {
        self.updating.load(Ordering::SeqCst)
    }

    /// Handles a requested stage transition.
    ///
    /// Preconditions are checked in order: actors without full capability,
    /// gestures with no resolvable destination, and same-stage moves are all
    /// dropped silently. Once they pass, the identified task's stage is
    /// rewritten optimistically before the confirmation call is issued, so
    /// the new partitioning is observable under network latency. A failed
    /// confirmation triggers a full reload, discarding the optimistic state
    /// in favour of the authoritative snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Remote`] when the rollback reload itself fails
    /// (the store then keeps its current, possibly optimistic, contents) and
    /// [`BoardError::StorePoisoned`] when the store lock is poisoned.
    pub async fn request_transition(
        &self,
        request: TransitionRequest,
        actor: Option<&Actor>,
    ) -> BoardResult<TransitionOutcome> {
        if Capability::of(actor) != Capability::Full {
            debug!(task_id = %request.task_id(), "transition dropped: actor not permitted");
            return Ok(TransitionOutcome::Ignored(IgnoreReason::NotPermitted));
        }
        let Some(destination) = request.destination() else {
            return Ok(TransitionOutcome::Ignored(IgnoreReason::NoDestination));
        };
        if request.source() == destination {
            return Ok(TransitionOutcome::Ignored(IgnoreReason::SameStage));
        }

        // Optimistic apply, released before any I/O. A task id absent from
        // the store mutates nothing; the confirmation is still issued.
        self.write_store()?.set_stage(request.task_id(), destination);

        let confirmation = {
            let _busy = BusyGuard::engage(&self.updating);
            self.remote
                .set_task_status(request.task_id(), destination)
                .await
        };

        match confirmation {
            Ok(()) => Ok(TransitionOutcome::Completed),
            Err(err) => {
                warn!(
                    task_id = %request.task_id(),
                    destination = %destination,
                    error = %err,
                    "status confirmation failed, reloading authoritative snapshot"
                );
                self.load().await?;
                Ok(TransitionOutcome::RolledBack(err))
            }
        }
    }

    fn read_store(&self) -> BoardResult<RwLockReadGuard<'_, TaskStore>> {
        self.store.read().map_err(|_| BoardError::StorePoisoned)
    }

    fn write_store(&self) -> BoardResult<RwLockWriteGuard<'_, TaskStore>> {
        self.store.write().map_err(|_| BoardError::StorePoisoned)
    }
}
