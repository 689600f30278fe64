//! Domain model for tasks, agents, and projects.
//!
//! The domain enforces the enterprise rules: task cost is at least one,
//! status moves only forward, and the dependency graph reachable from a
//! task never revisits a node. Persistence stays outside this boundary.

mod agent;
mod error;
mod ids;
mod planning;
mod status;
mod tag;
mod task;

pub use agent::{Agent, Project};
pub use error::{ParseStatusError, ParseTagError, TaskDomainError};
pub use ids::{AgentId, ProjectId, TaskId};
pub use planning::{makespan_boundaries, makespan_of_costs, tally_statuses, track_statuses};
pub use status::Status;
pub use tag::Tag;
pub use task::{PersistedTaskData, SharedTask, Task, validate_dependencies};
