//! Repository port for record persistence and lookup.

use super::{AgentRecord, ProjectRecord, Record, TaskRecord};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Record persistence contract.
///
/// Creation and replacement are separate operations: [`Repository::create`]
/// only inserts, while [`Repository::upsert`] inserts or replaces by
/// identifier and guards replacement with the record version.
#[async_trait]
pub trait Repository<R: Record>: Send + Sync {
    /// Stores a new record and returns it with a freshly issued identifier
    /// and version `1`.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::IdAlreadyAssigned`] when the record already
    /// carries an identifier.
    async fn create(&self, record: R) -> RepositoryResult<R>;

    /// Inserts the record, or replaces the stored record with the same
    /// identifier, and returns it with its new version.
    ///
    /// A record without an identifier is created. Replacement requires the
    /// record's version to match the stored version.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::StaleRecord`] when the stored record has
    /// been replaced since this one was read.
    async fn upsert(&self, record: R) -> RepositoryResult<R>;

    /// Finds a record by identifier.
    ///
    /// Returns `None` when the record does not exist.
    async fn get(&self, id: &str) -> RepositoryResult<Option<R>>;

    /// Returns every stored record in insertion order.
    async fn list(&self) -> RepositoryResult<Vec<R>>;
}

/// Repository of [`TaskRecord`]s.
pub trait TaskRepository: Repository<TaskRecord> {}

impl<T: Repository<TaskRecord> + ?Sized> TaskRepository for T {}

/// Repository of [`AgentRecord`]s.
pub trait AgentRepository: Repository<AgentRecord> {}

impl<T: Repository<AgentRecord> + ?Sized> AgentRepository for T {}

/// Repository of [`ProjectRecord`]s.
pub trait ProjectRepository: Repository<ProjectRecord> {}

impl<T: Repository<ProjectRecord> + ?Sized> ProjectRepository for T {}

/// Errors returned by repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// `create` received a record that already has an identifier.
    #[error("record already has identifier {0}")]
    IdAlreadyAssigned(String),

    /// The record was modified since it was read.
    #[error("stale record {id}: stored version is {expected}, write carried {found}")]
    StaleRecord {
        /// Identifier of the contested record.
        id: String,
        /// Version currently stored.
        expected: u64,
        /// Version carried by the rejected write.
        found: u64,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
