//! In-memory adapters used as reference semantics and in tests.

mod repository;

pub use repository::InMemoryRepository;
