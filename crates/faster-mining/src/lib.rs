//! Faster Mining: scales the mining power of every tool in the item registry.
//!
//! On start the plugin walks the host's asset map once and multiplies each
//! positive tool spec power by the configured multiplier, in place. The
//! mutation is shared with every other consumer of the asset and lasts for
//! the lifetime of the process.
//!
//! - [`patcher`] holds the bulk pass and its counters
//! - [`plugin`] adapts the patcher to the host lifecycle
//! - [`config`] reads the multiplier and trace settings
//!
//! Passes are not idempotent: running again (including via
//! [`ToolPowerPatcher::reconfigure`]) multiplies already-scaled values.
pub mod config;
pub mod error;
pub mod patcher;
pub mod plugin;

pub use config::PatcherConfig;
pub use error::PatchError;
pub use patcher::{PassSummary, ToolPowerPatcher};
pub use plugin::FasterMining;
