//! Unified error types surfaced by the plugin host.
//!
//! Plugins never return errors to the host; these only describe the host
//! being driven out of order by its caller.
use thiserror::Error;

use crate::plugin::PluginState;

pub type Result<T> = std::result::Result<T, LifecycleError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error("plugin cannot move from {from} to {to}")]
    InvalidTransition { from: PluginState, to: PluginState },

    #[error("plugin is {state}, expected running")]
    NotRunning { state: PluginState },

    #[error("no plugin loaded")]
    NoPlugin,
}
