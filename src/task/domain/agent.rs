//! Agents and projects: immutable value types referenced by tasks.

use super::{AgentId, ProjectId};
use serde::{Deserialize, Serialize};

/// An agent that can be assigned tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    id: Option<AgentId>,
    name: String,
}

impl Agent {
    /// Creates an agent that has not been persisted yet.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Reconstructs a persisted agent.
    #[must_use]
    pub fn with_id(id: AgentId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }

    /// Returns the agent identifier, if persisted.
    #[must_use]
    pub const fn id(&self) -> Option<&AgentId> {
        self.id.as_ref()
    }

    /// Returns the agent name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A project grouping related tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: Option<ProjectId>,
    name: String,
}

impl Project {
    /// Creates a project that has not been persisted yet.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Reconstructs a persisted project.
    #[must_use]
    pub fn with_id(id: ProjectId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }

    /// Returns the project identifier, if persisted.
    #[must_use]
    pub const fn id(&self) -> Option<&ProjectId> {
        self.id.as_ref()
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
