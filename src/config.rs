//! Task board configuration.
//!
//! Configuration holds the business defaults applied when a caller omits
//! optional task fields. Defaults are plain data and are copied into every
//! request, so no call can observe another call's tag list.
//!
//! A representative JSON document is:
//!
//! ```json
//! {
//!   "default_description": "",
//!   "default_cost": 1,
//!   "default_tags": ["LOW_PRIORITY"]
//! }
//! ```
//!
//! Every key is optional.

use crate::task::domain::{Tag, TaskDomainError};
use serde::{Deserialize, Serialize};
use std::io::Read;
use thiserror::Error;

/// Errors raised while loading a [`BoardConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON or names an unknown tag.
    #[error("malformed board configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed but violates an enterprise rule.
    #[error("invalid board configuration: {0}")]
    Invalid(#[from] TaskDomainError),
}

/// Defaults applied by the task board services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    default_description: String,
    default_cost: i64,
    default_tags: Vec<Tag>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_description: String::new(),
            default_cost: 1,
            default_tags: vec![Tag::LowPriority],
        }
    }
}

impl BoardConfig {
    /// Parses configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown tag names
    /// and [`ConfigError::Invalid`] when the default cost is below one.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validated()
    }

    /// Parses configuration from a JSON reader.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] under the same conditions as
    /// [`BoardConfig::from_json_str`].
    pub fn from_reader(reader: impl Read) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_reader(reader)?;
        config.validated()
    }

    /// Sets the description applied when a request omits one.
    #[must_use]
    pub fn with_default_description(mut self, description: impl Into<String>) -> Self {
        self.default_description = description.into();
        self
    }

    /// Sets the cost applied when a request omits one.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `cost` is below one.
    pub fn with_default_cost(mut self, cost: i64) -> Result<Self, ConfigError> {
        self.default_cost = cost;
        self.validated()
    }

    /// Sets the tags applied when a request omits them.
    #[must_use]
    pub fn with_default_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.default_tags = tags.into_iter().collect();
        self
    }

    /// Returns the default description.
    #[must_use]
    pub fn default_description(&self) -> &str {
        &self.default_description
    }

    /// Returns the default cost.
    #[must_use]
    pub const fn default_cost(&self) -> i64 {
        self.default_cost
    }

    /// Returns the default tags.
    #[must_use]
    pub fn default_tags(&self) -> &[Tag] {
        &self.default_tags
    }

    /// Returns the default tags as canonical names, freshly allocated.
    #[must_use]
    pub fn default_tag_names(&self) -> Vec<String> {
        self.default_tags
            .iter()
            .map(|tag| tag.as_str().to_owned())
            .collect()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.default_cost < 1 {
            return Err(TaskDomainError::InvalidCost(self.default_cost).into());
        }
        Ok(self)
    }
}
