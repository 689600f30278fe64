//! Port contracts for task, agent, and project persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the task board
//! services.

pub mod records;
pub mod repository;

pub use records::{AgentRecord, ProjectRecord, Record, TaskRecord};
pub use repository::{
    AgentRepository, ProjectRepository, Repository, RepositoryError, RepositoryResult,
    TaskRepository,
};
