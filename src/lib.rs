//! Taskboard: tasks, dependencies, and agent assignment.
//!
//! This crate models tasks that agents complete, validates the dependency
//! relationships between tasks, and exposes use cases (create, fetch,
//! assign) that enforce domain rules before delegating storage to a
//! repository.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`task`]: Task, agent, and project domain, ports, adapters, and services
//! - [`config`]: Defaults applied by the services
//! - [`outcome`]: The success-or-failure value returned by every use case

pub mod config;
pub mod outcome;
pub mod task;

pub use outcome::Outcome;
