//! Task priority tags.

use super::ParseTagError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Priority tag attached to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tag {
    /// Needs attention before anything else.
    HighPriority,
    /// Regular priority.
    MediumPriority,
    /// Can wait.
    LowPriority,
}

impl Tag {
    /// Returns the canonical name used in persisted records and requests.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HighPriority => "HIGH_PRIORITY",
            Self::MediumPriority => "MEDIUM_PRIORITY",
            Self::LowPriority => "LOW_PRIORITY",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighPriority => "High Priority",
            Self::MediumPriority => "Medium Priority",
            Self::LowPriority => "Low Priority",
        }
    }

    /// Parses a list of external tag names, failing on the first unknown one.
    ///
    /// # Errors
    ///
    /// Returns [`ParseTagError`] naming the first unrecognized tag.
    pub fn parse_all<I, S>(names: I) -> Result<Vec<Self>, ParseTagError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| Self::try_from(name.as_ref()))
            .collect()
    }
}

impl TryFrom<&str> for Tag {
    type Error = ParseTagError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "HIGH_PRIORITY" => Ok(Self::HighPriority),
            "MEDIUM_PRIORITY" => Ok(Self::MediumPriority),
            "LOW_PRIORITY" => Ok(Self::LowPriority),
            _ => Err(ParseTagError(value.to_owned())),
        }
    }
}

impl FromStr for Tag {
    type Err = ParseTagError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(value)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
