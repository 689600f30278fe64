//! Task board: tasks, agents, and projects.
//!
//! This module models tasks completed by agents, the dependencies between
//! tasks, and the use cases that create, fetch, and assign them. It follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
