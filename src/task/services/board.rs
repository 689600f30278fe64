//! Use cases for creating, fetching, and assigning tasks.
//!
//! [`TaskBoardService`] constructs or rehydrates domain entities, lets them
//! enforce their rules, and delegates storage to the repository ports. Each
//! public operation returns an [`Outcome`]; errors never escape.
//!
//! Read-modify-write operations ([`TaskBoardService::assign_task`],
//! [`TaskBoardService::set_task_project`]) carry the version of the record
//! they read into the upsert, so a concurrent writer that got there first
//! makes the later write fail instead of being silently overwritten.

use super::error::{Entity, UseCaseError, UseCaseResult};
use super::mapping::{
    RecordError, agent_from_record, agent_to_record, project_from_record, project_to_record,
    task_from_record, task_to_record,
};
use crate::Outcome;
use crate::config::BoardConfig;
use crate::task::{
    domain::{Agent, Project, SharedTask, Status, Tag, Task, makespan_boundaries, track_statuses},
    ports::{
        AgentRecord, AgentRepository, ProjectRecord, ProjectRepository, TaskRecord,
        TaskRepository,
    },
};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Request payload for creating a task.
///
/// Omitted fields take the service's configured defaults at call time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    cost: Option<i64>,
    tags: Option<Vec<String>>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            cost: None,
            tags: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task cost.
    #[must_use]
    pub const fn with_cost(mut self, cost: i64) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Sets the tag names, e.g. `"HIGH_PRIORITY"`.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }
}

/// Planning view over every stored task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskBoardSummary {
    /// Makespan with unlimited agents working in parallel.
    pub min_makespan: u64,
    /// Makespan with every task done one after another.
    pub max_makespan: u64,
    /// Task count per status; absent statuses are omitted.
    pub statuses: BTreeMap<Status, usize>,
    /// Number of stored tasks.
    pub total: usize,
}

/// Task board orchestration service.
#[derive(Clone)]
pub struct TaskBoardService<T, A, P>
where
    T: TaskRepository,
    A: AgentRepository,
    P: ProjectRepository,
{
    tasks: Arc<T>,
    agents: Arc<A>,
    projects: Arc<P>,
    config: Arc<BoardConfig>,
}

impl<T, A, P> TaskBoardService<T, A, P>
where
    T: TaskRepository,
    A: AgentRepository,
    P: ProjectRepository,
{
    /// Creates a service using the default [`BoardConfig`].
    #[must_use]
    pub fn new(tasks: Arc<T>, agents: Arc<A>, projects: Arc<P>) -> Self {
        Self::with_config(tasks, agents, projects, BoardConfig::default())
    }

    /// Creates a service with explicit configuration.
    #[must_use]
    pub fn with_config(
        tasks: Arc<T>,
        agents: Arc<A>,
        projects: Arc<P>,
        config: BoardConfig,
    ) -> Self {
        Self {
            tasks,
            agents,
            projects,
            config: Arc::new(config),
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Creates and stores a task.
    ///
    /// Fails with an enterprise rule violation when the cost is below one
    /// and with an unexpected enterprise error when a tag name is unknown.
    pub async fn create_task(&self, request: CreateTaskRequest) -> Outcome<TaskRecord> {
        settle("create_task", self.try_create_task(request).await)
    }

    /// Fetches a task record by identifier.
    pub async fn get_task(&self, task_id: &str) -> Outcome<TaskRecord> {
        settle("get_task", self.fetch_task(task_id).await)
    }

    /// Returns every stored task record.
    pub async fn list_tasks(&self) -> Outcome<Vec<TaskRecord>> {
        let result = self.tasks.list().await.map_err(UseCaseError::adapter);
        settle("list_tasks", result)
    }

    /// Creates and stores an agent.
    pub async fn create_agent(&self, name: &str) -> Outcome<AgentRecord> {
        let record = agent_to_record(&Agent::new(name));
        let result = self.agents.create(record).await.map_err(UseCaseError::adapter);
        if let Ok(stored) = &result {
            tracing::info!(agent_id = ?stored.agent_id, "created agent");
        }
        settle("create_agent", result)
    }

    /// Fetches an agent record by identifier.
    pub async fn get_agent(&self, agent_id: &str) -> Outcome<AgentRecord> {
        settle("get_agent", self.fetch_agent(agent_id).await)
    }

    /// Returns every stored agent record.
    pub async fn list_agents(&self) -> Outcome<Vec<AgentRecord>> {
        let result = self.agents.list().await.map_err(UseCaseError::adapter);
        settle("list_agents", result)
    }

    /// Creates and stores a project.
    pub async fn create_project(&self, name: &str) -> Outcome<ProjectRecord> {
        let record = project_to_record(&Project::new(name));
        let result = self
            .projects
            .create(record)
            .await
            .map_err(UseCaseError::adapter);
        settle("create_project", result)
    }

    /// Fetches a project record by identifier.
    pub async fn get_project(&self, project_id: &str) -> Outcome<ProjectRecord> {
        settle("get_project", self.fetch_project(project_id).await)
    }

    /// Assigns a task to an agent and stores the updated task.
    ///
    /// A stored task that no longer satisfies the domain rules is reported
    /// as an adapter error.
    pub async fn assign_task(&self, task_id: &str, agent_id: &str) -> Outcome<TaskRecord> {
        settle("assign_task", self.try_assign_task(task_id, agent_id).await)
    }

    /// Associates a task with a project and stores the updated task.
    pub async fn set_task_project(&self, task_id: &str, project_id: &str) -> Outcome<TaskRecord> {
        settle(
            "set_task_project",
            self.try_set_task_project(task_id, project_id).await,
        )
    }

    /// Summarizes makespan bounds and status counts over every stored task.
    pub async fn plan_tasks(&self) -> Outcome<TaskBoardSummary> {
        settle("plan_tasks", self.try_plan_tasks().await)
    }

    async fn try_create_task(&self, request: CreateTaskRequest) -> UseCaseResult<TaskRecord> {
        let record = self.new_task_record(request)?;
        let stored = self
            .tasks
            .create(record)
            .await
            .map_err(UseCaseError::adapter)?;
        tracing::info!(task_id = ?stored.task_id, cost = stored.cost, "created task");
        Ok(stored)
    }

    fn new_task_record(&self, request: CreateTaskRequest) -> UseCaseResult<TaskRecord> {
        let CreateTaskRequest {
            title,
            description,
            cost,
            tags,
        } = request;
        let tag_names = tags.unwrap_or_else(|| self.config.default_tag_names());
        let parsed_tags =
            Tag::parse_all(&tag_names).map_err(UseCaseError::unexpected_enterprise)?;
        let task = Task::new(
            title,
            description.unwrap_or_else(|| self.config.default_description().to_owned()),
            cost.unwrap_or_else(|| self.config.default_cost()),
            parsed_tags,
        )
        .map_err(UseCaseError::enterprise_rule)?;
        Ok(task_to_record(&task))
    }

    async fn try_assign_task(&self, task_id: &str, agent_id: &str) -> UseCaseResult<TaskRecord> {
        let task_record = self.fetch_task(task_id).await?;
        let agent_record = self.fetch_agent(agent_id).await?;

        let updated = assign_record(&task_record, agent_from_record(agent_id, &agent_record))
            .map_err(UseCaseError::adapter)?;
        let stored = self
            .tasks
            .upsert(updated)
            .await
            .map_err(UseCaseError::adapter)?;
        tracing::info!(task_id, agent_id, "assigned task");
        Ok(stored)
    }

    async fn try_set_task_project(
        &self,
        task_id: &str,
        project_id: &str,
    ) -> UseCaseResult<TaskRecord> {
        let task_record = self.fetch_task(task_id).await?;
        let project_record = self.fetch_project(project_id).await?;

        let updated = project_record_update(
            &task_record,
            project_from_record(project_id, &project_record),
        )
        .map_err(UseCaseError::adapter)?;
        let stored = self
            .tasks
            .upsert(updated)
            .await
            .map_err(UseCaseError::adapter)?;
        tracing::info!(task_id, project_id, "attached task to project");
        Ok(stored)
    }

    async fn try_plan_tasks(&self) -> UseCaseResult<TaskBoardSummary> {
        let records = self.tasks.list().await.map_err(UseCaseError::adapter)?;
        summarize(&records).map_err(UseCaseError::adapter)
    }

    async fn fetch_task(&self, task_id: &str) -> UseCaseResult<TaskRecord> {
        self.tasks
            .get(task_id)
            .await
            .map_err(UseCaseError::adapter)?
            .ok_or(UseCaseError::NotFound(Entity::Task))
    }

    async fn fetch_agent(&self, agent_id: &str) -> UseCaseResult<AgentRecord> {
        self.agents
            .get(agent_id)
            .await
            .map_err(UseCaseError::adapter)?
            .ok_or(UseCaseError::NotFound(Entity::Agent))
    }

    async fn fetch_project(&self, project_id: &str) -> UseCaseResult<ProjectRecord> {
        self.projects
            .get(project_id)
            .await
            .map_err(UseCaseError::adapter)?
            .ok_or(UseCaseError::NotFound(Entity::Project))
    }
}

/// Converts a use-case result into an outcome, logging failures.
fn settle<V>(operation: &'static str, result: UseCaseResult<V>) -> Outcome<V> {
    if let Err(err) = &result {
        tracing::warn!(operation, error = %err, "use case failed");
    }
    Outcome::from(result)
}

/// Rehydrates the task, assigns it, and re-serializes it for an upsert.
fn assign_record(stored: &TaskRecord, agent: Agent) -> Result<TaskRecord, RecordError> {
    let mut task = task_from_record(stored)?;
    task.assign(agent);
    Ok(TaskRecord {
        project: stored.project.clone(),
        version: stored.version,
        ..task_to_record(&task)
    })
}

/// Rehydrates the task, sets its project, and re-serializes it for an
/// upsert.
fn project_record_update(
    stored: &TaskRecord,
    project: Project,
) -> Result<TaskRecord, RecordError> {
    let mut task = task_from_record(stored)?;
    task.set_project(project);
    Ok(TaskRecord {
        assignee: stored.assignee.clone(),
        version: stored.version,
        ..task_to_record(&task)
    })
}

fn summarize(records: &[TaskRecord]) -> Result<TaskBoardSummary, RecordError> {
    let tasks = records
        .iter()
        .map(|record| task_from_record(record).map(Task::into_shared))
        .collect::<Result<Vec<SharedTask>, _>>()?;
    let (min_makespan, max_makespan) = makespan_boundaries(&tasks);
    Ok(TaskBoardSummary {
        min_makespan,
        max_makespan,
        statuses: track_statuses(&tasks),
        total: tasks.len(),
    })
}
