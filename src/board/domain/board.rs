//! Stage partitioning of the task collection into board columns.

use super::{Stage, Task};

/// One board column: a stage and the tasks currently partitioned under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageColumn {
    stage: Stage,
    tasks: Vec<Task>,
}

impl StageColumn {
    /// Returns the column's stage.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns the tasks in this column, in store order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks in this column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the column holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// The task collection partitioned by workflow stage, one column per stage
/// in fixed board order.
///
/// Partitioning is a pure function of the current task collection: it holds
/// no memory of its own and is re-derivable at any time. Every task lands in
/// exactly one column, with an absent stage partitioning under
/// [`Stage::Created`], and relative order within a column follows store
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardColumns {
    columns: Vec<StageColumn>,
}

impl BoardColumns {
    /// Partitions a task collection into board columns.
    #[must_use]
    pub fn partition(tasks: &[Task]) -> Self {
        let columns = Stage::ORDER
            .iter()
            .map(|&stage| StageColumn {
                stage,
                tasks: tasks
                    .iter()
                    .filter(|task| task.effective_stage() == stage)
                    .cloned()
                    .collect(),
            })
            .collect();
        Self { columns }
    }

    /// Returns the columns in fixed board order.
    #[must_use]
    pub fn columns(&self) -> &[StageColumn] {
        &self.columns
    }

    /// Returns the tasks partitioned under the given stage.
    #[must_use]
    pub fn column(&self, stage: Stage) -> &[Task] {
        self.columns
            .iter()
            .find(|column| column.stage == stage)
            .map_or(&[], |column| column.tasks.as_slice())
    }

    /// Returns the total number of tasks across all columns.
    #[must_use]
    pub fn total(&self) -> usize {
        self.columns.iter().map(StageColumn::len).sum()
    }
}
