//! Actor roles and transition capabilities.

use super::ParseRoleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of an authenticated actor, as issued by the authentication
/// collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Head-of-team manager with full control over the board.
    HeadManager,
    /// HR manager with oversight access only.
    HrManager,
    /// Regular employee.
    Employee,
}

impl Role {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HeadManager => "HEAD_MANAGER",
            Self::HrManager => "HR_MANAGER",
            Self::Employee => "EMPLOYEE",
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "HEAD_MANAGER" => Ok(Self::HeadManager),
            "HR_MANAGER" => Ok(Self::HrManager),
            "EMPLOYEE" => Ok(Self::Employee),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The currently authenticated actor.
///
/// An absent actor is modelled as `Option<&Actor>` at the call sites rather
/// than as hidden ambient state, so the permission gate stays pure and
/// testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    role: Role,
}

impl Actor {
    /// Creates an actor with the given role.
    #[must_use]
    pub const fn new(role: Role) -> Self {
        Self { role }
    }

    /// Returns the actor's role.
    #[must_use]
    pub const fn role(self) -> Role {
        self.role
    }
}

/// Transition capability derived from an actor role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// May initiate stage transitions anywhere on the board.
    Full,
    /// May view the board but not move tasks.
    ReadOnly,
    /// No board capability.
    None,
}

impl Capability {
    /// Maps an actor role to its board capability.
    ///
    /// Head managers get [`Capability::Full`], HR managers get
    /// [`Capability::ReadOnly`], every other role (including an absent
    /// actor) gets [`Capability::None`]. Pure and total.
    #[must_use]
    pub const fn for_role(role: Option<Role>) -> Self {
        match role {
            Some(Role::HeadManager) => Self::Full,
            Some(Role::HrManager) => Self::ReadOnly,
            Some(Role::Employee) | None => Self::None,
        }
    }

    /// Convenience mapping from an optional actor.
    #[must_use]
    pub fn of(actor: Option<&Actor>) -> Self {
        Self::for_role(actor.map(|a| a.role()))
    }
}
