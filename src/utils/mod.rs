//! Shared helpers for the orchestrator and provider bindings.

pub mod domain;
pub mod fs;
