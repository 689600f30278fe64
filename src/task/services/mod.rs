//! Application services for task board orchestration.

mod board;
mod error;
mod mapping;

pub use board::{CreateTaskRequest, TaskBoardService, TaskBoardSummary};
pub use error::{Entity, UseCaseError, UseCaseResult};
