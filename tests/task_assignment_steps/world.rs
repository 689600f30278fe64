//! Shared world state for task assignment BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use taskboard::task::{
    adapters::memory::InMemoryRepository,
    ports::{AgentRecord, ProjectRecord, TaskRecord},
    services::{TaskBoardService, TaskBoardSummary},
};

/// Service type used by the BDD world.
pub type TestBoardService = TaskBoardService<
    InMemoryRepository<TaskRecord>,
    InMemoryRepository<AgentRecord>,
    InMemoryRepository<ProjectRecord>,
>;

/// Scenario world for task assignment behaviour tests.
pub struct TaskAssignmentWorld {
    pub service: TestBoardService,
    pub last_task: Option<TaskRecord>,
    pub last_agent: Option<AgentRecord>,
    pub last_summary: Option<TaskBoardSummary>,
    pub last_failure: Option<String>,
}

impl TaskAssignmentWorld {
    /// Creates a world backed by empty in-memory repositories.
    #[must_use]
    pub fn new() -> Self {
        let service = TaskBoardService::new(
            Arc::new(InMemoryRepository::new()),
            Arc::new(InMemoryRepository::new()),
            Arc::new(InMemoryRepository::new()),
        );

        Self {
            service,
            last_task: None,
            last_agent: None,
            last_summary: None,
            last_failure: None,
        }
    }

    /// Returns the identifier of the most recently stored task.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been stored in this scenario.
    pub fn task_id(&self) -> Result<String, eyre::Report> {
        self.last_task
            .as_ref()
            .and_then(|task| task.task_id.clone())
            .ok_or_else(|| eyre::eyre!("missing stored task in scenario world"))
    }

    /// Returns the identifier of the most recently registered agent.
    ///
    /// # Errors
    ///
    /// Returns an error when no agent has been registered in this scenario.
    pub fn agent_id(&self) -> Result<String, eyre::Report> {
        self.last_agent
            .as_ref()
            .and_then(|agent| agent.agent_id.clone())
            .ok_or_else(|| eyre::eyre!("missing registered agent in scenario world"))
    }
}

impl Default for TaskAssignmentWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskAssignmentWorld {
    TaskAssignmentWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
