//! Explicit success-or-failure outcome returned across the use-case boundary.
//!
//! Use cases never propagate errors to their callers. Every failure is
//! rendered into a human-readable message and carried by
//! [`Outcome::Failure`], so adapters only ever branch on two variants.

use std::fmt;

/// Result of a use-case invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Outcome<T> {
    /// The use case completed and produced a value.
    Success(T),
    /// The use case failed with a human-readable message.
    Failure(String),
}

impl<T> Outcome<T> {
    /// Builds a failure from any displayable error.
    pub fn failure(error: impl fmt::Display) -> Self {
        Self::Failure(error.to_string())
    }

    /// Returns `true` when the outcome carries a value.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` when the outcome carries a failure message.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns the success value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the failure message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Consumes the outcome and returns the success value, if any.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Consumes the outcome and returns the failure message, if any.
    #[must_use]
    pub fn into_error(self) -> Option<String> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts the outcome into a standard [`Result`] with the failure
    /// message as the error.
    ///
    /// # Errors
    ///
    /// Returns the failure message when the outcome is a failure.
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: fmt::Display,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::failure(error),
        }
    }
}

impl<T: fmt::Debug> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "Success(value={value:?})"),
            Self::Failure(error) => write!(f, "Failure(error={error})"),
        }
    }
}
