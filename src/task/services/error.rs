//! Error taxonomy for task board use cases.
//!
//! Every variant renders to the exact message callers see inside
//! [`Outcome::Failure`](crate::Outcome::Failure).

use std::fmt;
use thiserror::Error;

/// Kind of entity a lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    /// A task record.
    Task,
    /// An agent record.
    Agent,
    /// A project record.
    Project,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Task => "Task",
            Self::Agent => "Agent",
            Self::Project => "Project",
        })
    }
}

/// Categorized use-case failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UseCaseError {
    /// A domain invariant was violated while constructing an entity.
    #[error("Enterprise rule violation: {0}")]
    EnterpriseRule(String),

    /// The requested record does not exist.
    #[error("{0} not found")]
    NotFound(Entity),

    /// The repository failed, or returned data that could not be used.
    #[error("Unexpected adapter error: {0}")]
    Adapter(String),

    /// Any other failure while constructing or mutating an entity.
    #[error("Unexpected enterprise error: {0}")]
    UnexpectedEnterprise(String),
}

impl UseCaseError {
    pub(crate) fn enterprise_rule(err: impl fmt::Display) -> Self {
        Self::EnterpriseRule(err.to_string())
    }

    pub(crate) fn adapter(err: impl fmt::Display) -> Self {
        Self::Adapter(err.to_string())
    }

    pub(crate) fn unexpected_enterprise(err: impl fmt::Display) -> Self {
        Self::UnexpectedEnterprise(err.to_string())
    }
}

/// Result type used inside use cases before conversion to an outcome.
pub type UseCaseResult<T> = Result<T, UseCaseError>;
