//! In-memory repository for task board records.

use crate::task::ports::{Record, Repository, RepositoryError, RepositoryResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory repository for any record kind.
///
/// Identifiers are issued as decimal counters starting at `"1"`, and
/// [`Repository::list`] returns records in insertion order.
pub struct InMemoryRepository<R> {
    state: Arc<RwLock<InMemoryState<R>>>,
}

struct InMemoryState<R> {
    records: Vec<R>,
    index: HashMap<String, usize>,
    last_issued: u64,
}

impl<R> InMemoryState<R> {
    fn issue_id(&mut self) -> String {
        loop {
            self.last_issued += 1;
            let candidate = self.last_issued.to_string();
            if !self.index.contains_key(&candidate) {
                return candidate;
            }
        }
    }

    fn insert(&mut self, id: String, record: R) {
        self.index.insert(id, self.records.len());
        self.records.push(record);
    }
}

impl<R> Default for InMemoryState<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
            last_issued: 0,
        }
    }
}

impl<R> InMemoryRepository<R> {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R> Default for InMemoryRepository<R> {
    fn default() -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryState::default())),
        }
    }
}

impl<R> Clone for InMemoryRepository<R> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<R> fmt::Debug for InMemoryRepository<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryRepository").finish_non_exhaustive()
    }
}

fn lock_error(err: impl fmt::Display) -> RepositoryError {
    RepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl<R: Record> Repository<R> for InMemoryRepository<R> {
    async fn create(&self, mut record: R) -> RepositoryResult<R> {
        if let Some(id) = record.id() {
            return Err(RepositoryError::IdAlreadyAssigned(id.to_owned()));
        }
        let mut state = self.state.write().map_err(lock_error)?;

        let id = state.issue_id();
        record.set_id(id.clone());
        record.set_version(1);
        state.insert(id, record.clone());
        Ok(record)
    }

    async fn upsert(&self, mut record: R) -> RepositoryResult<R> {
        let mut state = self.state.write().map_err(lock_error)?;

        let Some(id) = record.id().map(ToOwned::to_owned) else {
            let issued = state.issue_id();
            record.set_id(issued.clone());
            record.set_version(1);
            state.insert(issued, record.clone());
            return Ok(record);
        };

        let Some(position) = state.index.get(&id).copied() else {
            record.set_version(1);
            state.insert(id, record.clone());
            return Ok(record);
        };

        let stored = state
            .records
            .get_mut(position)
            .ok_or_else(|| lock_error(format!("index points past stored record {id}")))?;
        if stored.version() != record.version() {
            return Err(RepositoryError::StaleRecord {
                id,
                expected: stored.version(),
                found: record.version(),
            });
        }
        record.set_version(stored.version() + 1);
        *stored = record.clone();
        Ok(record)
    }

    async fn get(&self, id: &str) -> RepositoryResult<Option<R>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .index
            .get(id)
            .and_then(|position| state.records.get(*position))
            .cloned())
    }

    async fn list(&self) -> RepositoryResult<Vec<R>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.records.clone())
    }
}
