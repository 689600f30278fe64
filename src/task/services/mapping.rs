//! Conversion between domain entities and persisted records.

use crate::task::domain::{
    Agent, AgentId, ParseStatusError, ParseTagError, PersistedTaskData, Project, ProjectId,
    Status, Tag, Task, TaskDomainError, TaskId,
};
use crate::task::ports::{AgentRecord, ProjectRecord, TaskRecord};
use thiserror::Error;

/// Reasons a stored record cannot be turned back into an entity.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub(crate) enum RecordError {
    #[error("stored task record has no identifier")]
    MissingTaskId,

    #[error(transparent)]
    Status(#[from] ParseStatusError),

    #[error(transparent)]
    Tag(#[from] ParseTagError),

    #[error(transparent)]
    Domain(#[from] TaskDomainError),
}

/// Serializes a task. The version is left at zero for the caller to set.
pub(crate) fn task_to_record(task: &Task) -> TaskRecord {
    TaskRecord {
        task_id: task.id().map(|id| id.as_str().to_owned()),
        title: task.title().to_owned(),
        description: task.description().to_owned(),
        cost: i64::try_from(task.cost()).unwrap_or(i64::MAX),
        status: task.status().as_str().to_owned(),
        tags: task.tags().iter().map(|tag| tag.as_str().to_owned()).collect(),
        assignee: task
            .assignee()
            .and_then(Agent::id)
            .map(|id| id.as_str().to_owned()),
        project: task
            .project()
            .and_then(Project::id)
            .map(|id| id.as_str().to_owned()),
        version: 0,
    }
}

/// Rebuilds a task, re-validating cost, status, and tag names.
///
/// Associations are not rehydrated; only their identifiers live in the
/// record.
pub(crate) fn task_from_record(record: &TaskRecord) -> Result<Task, RecordError> {
    let id = record
        .task_id
        .as_deref()
        .map(TaskId::from)
        .ok_or(RecordError::MissingTaskId)?;
    Ok(Task::from_persisted(PersistedTaskData {
        id,
        title: record.title.clone(),
        description: record.description.clone(),
        cost: record.cost,
        status: Status::try_from(record.status.as_str())?,
        tags: Tag::parse_all(&record.tags)?,
    })?)
}

pub(crate) fn agent_to_record(agent: &Agent) -> AgentRecord {
    AgentRecord {
        agent_id: agent.id().map(|id| id.as_str().to_owned()),
        name: agent.name().to_owned(),
        version: 0,
    }
}

/// Rebuilds an agent under the identifier it was looked up by.
pub(crate) fn agent_from_record(id: &str, record: &AgentRecord) -> Agent {
    Agent::with_id(AgentId::from(id), record.name.clone())
}

pub(crate) fn project_to_record(project: &Project) -> ProjectRecord {
    ProjectRecord {
        project_id: project.id().map(|id| id.as_str().to_owned()),
        name: project.name().to_owned(),
        version: 0,
    }
}

/// Rebuilds a project under the identifier it was looked up by.
pub(crate) fn project_from_record(id: &str, record: &ProjectRecord) -> Project {
    Project::with_id(ProjectId::from(id), record.name.clone())
}
