//! Adapter implementations for the task board repository ports.

pub mod memory;
