//! Task record and related display types.

use super::{Stage, TaskId};
use serde::{Deserialize, Serialize};

/// Display-only task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    /// Low priority.
    Low,
    /// Medium priority.
    Medium,
    /// High priority.
    High,
}

/// Employee a task is assigned to.
///
/// Read-only reference data: the board core never mutates employee records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    name: String,
    surname: String,
    email: String,
}

impl Employee {
    /// Creates an employee reference.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            email: email.into(),
        }
    }

    /// Returns the employee's given name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the employee's surname.
    #[must_use]
    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Returns the employee's email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// A task as served by the remote task service.
///
/// Field names on the wire follow the remote payload: the workflow stage is
/// serialised as `status` and the assignee as `employee`. The stage may be
/// absent in a snapshot; [`Task::effective_stage`] applies the defaulting
/// rule without rewriting the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(rename = "status", default)]
    stage: Option<Stage>,
    #[serde(default)]
    priority: Option<Priority>,
    #[serde(rename = "employee", default)]
    assignee: Option<Employee>,
}

impl Task {
    /// Creates a task with only its identity set.
    #[must_use]
    pub const fn new(id: TaskId) -> Self {
        Self {
            id,
            title: None,
            description: None,
            stage: None,
            priority: None,
            assignee: None,
        }
    }

    /// Sets the display title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the free-text description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the workflow stage.
    #[must_use]
    pub const fn with_stage(mut self, stage: Stage) -> Self {
        self.stage = Some(stage);
        self
    }

    /// Sets the display priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the assigned employee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: Employee) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the display title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the stored workflow stage, if any.
    #[must_use]
    pub const fn stage(&self) -> Option<Stage> {
        self.stage
    }

    /// Returns the stage used for board partitioning.
    ///
    /// A task with an absent stage partitions under [`Stage::Created`]; the
    /// stored value is left untouched.
    #[must_use]
    pub fn effective_stage(&self) -> Stage {
        self.stage.unwrap_or(Stage::Created)
    }

    /// Returns the display priority, if any.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Returns the assigned employee, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<&Employee> {
        self.assignee.as_ref()
    }

    /// Rewrites the workflow stage in place.
    pub(crate) const fn set_stage(&mut self, stage: Stage) {
        self.stage = Some(stage);
    }
}
