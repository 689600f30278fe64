//! Plain records exchanged with repository adapters.
//!
//! Records carry only strings and integers so any storage can hold them.
//! Enumerations are stored by canonical name (for example `"TODO"` or
//! `"MEDIUM_PRIORITY"`) and parsed back when a use case rehydrates an
//! entity.

use serde::{Deserialize, Serialize};

/// Storage-facing behaviour shared by every record kind.
pub trait Record: Clone + Send + Sync + 'static {
    /// Returns the repository-issued identifier, if assigned.
    fn id(&self) -> Option<&str>;

    /// Sets the repository-issued identifier.
    fn set_id(&mut self, id: String);

    /// Returns the optimistic-concurrency version.
    fn version(&self) -> u64;

    /// Sets the optimistic-concurrency version.
    fn set_version(&mut self, version: u64);
}

/// Persisted form of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Identifier issued by the repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    /// Task title.
    pub title: String,
    /// Task description.
    #[serde(default)]
    pub description: String,
    /// Task cost.
    pub cost: i64,
    /// Canonical status name.
    pub status: String,
    /// Canonical tag names.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Identifier of the assigned agent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Identifier of the associated project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    /// Optimistic-concurrency version; zero until first stored.
    #[serde(default)]
    pub version: u64,
}

/// Persisted form of an agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRecord {
    /// Identifier issued by the repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
    /// Agent name.
    pub name: String,
    /// Optimistic-concurrency version; zero until first stored.
    #[serde(default)]
    pub version: u64,
}

/// Persisted form of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Identifier issued by the repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// Project name.
    pub name: String,
    /// Optimistic-concurrency version; zero until first stored.
    #[serde(default)]
    pub version: u64,
}

macro_rules! impl_record {
    ($record:ty, $id:ident) => {
        impl Record for $record {
            fn id(&self) -> Option<&str> {
                self.$id.as_deref()
            }

            fn set_id(&mut self, id: String) {
                self.$id = Some(id);
            }

            fn version(&self) -> u64 {
                self.version
            }

            fn set_version(&mut self, version: u64) {
                self.version = version;
            }
        }
    };
}

impl_record!(TaskRecord, task_id);
impl_record!(AgentRecord, agent_id);
impl_record!(ProjectRecord, project_id);
