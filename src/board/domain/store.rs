//! In-memory task store: the client-side source of truth between reloads.

use super::{Stage, Task, TaskId};
use std::collections::HashSet;

/// Ordered in-memory collection of task records.
///
/// The store is populated wholesale on load, replacing prior contents
/// entirely, and mutated in place one task at a time. Task identifiers are
/// unique within the store at all times; relative order follows the order of
/// the last loaded snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Creates a store pre-populated from a snapshot.
    #[must_use]
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let mut store = Self::new();
        store.replace_all(tasks);
        store
    }

    /// Replaces the entire contents with an authoritative snapshot.
    ///
    /// Snapshot order is preserved. Should a snapshot carry duplicate task
    /// identifiers, the first occurrence wins, upholding the id-uniqueness
    /// invariant without failing the load.
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        let mut seen = HashSet::new();
        self.tasks = tasks
            .into_iter()
            .filter(|task| seen.insert(task.id()))
            .collect();
    }

    /// Rewrites the stage of the single identified task.
    ///
    /// All other tasks are untouched. Returns `true` when the task was
    /// found, `false` when the identifier is not in the store.
    pub fn set_stage(&mut self, id: TaskId, stage: Stage) -> bool {
        self.tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .map(|task| task.set_stage(stage))
            .is_some()
    }

    /// Looks up a task by identifier.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns the stored tasks in snapshot order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of stored tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
