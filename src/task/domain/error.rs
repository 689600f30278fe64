//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task cost is below the minimum of one unit.
    #[error("Cost must be at least 1")]
    InvalidCost(i64),
}

/// Error returned while parsing a task status from an external name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseStatusError(pub String);

/// Error returned while parsing a task tag from an external name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task tag: {0}")]
pub struct ParseTagError(pub String);
