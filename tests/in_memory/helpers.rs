//! Shared test helpers for in-memory task board integration tests.

use std::sync::Arc;

use rstest::fixture;
use taskboard::task::{
    adapters::memory::InMemoryRepository,
    ports::{AgentRecord, ProjectRecord, TaskRecord},
    services::TaskBoardService,
};

/// Service type wired to in-memory repositories.
pub type TestBoard = TaskBoardService<
    InMemoryRepository<TaskRecord>,
    InMemoryRepository<AgentRecord>,
    InMemoryRepository<ProjectRecord>,
>;

/// Repositories shared with the service so tests can inspect or seed them.
pub struct BoardHarness {
    /// Task store backing the service.
    pub tasks: Arc<InMemoryRepository<TaskRecord>>,
    /// Service under test.
    pub board: TestBoard,
}

/// Provides a service backed by fresh in-memory repositories.
#[fixture]
pub fn harness() -> BoardHarness {
    let tasks = Arc::new(InMemoryRepository::new());
    let board = TaskBoardService::new(
        Arc::clone(&tasks),
        Arc::new(InMemoryRepository::new()),
        Arc::new(InMemoryRepository::new()),
    );
    BoardHarness { tasks, board }
}
