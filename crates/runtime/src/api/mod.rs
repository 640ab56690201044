//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! the plugin host can stay focused on lifecycle orchestration.

pub mod errors;

pub use errors::{LifecycleError, Result};
