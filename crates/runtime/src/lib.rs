//! Plugin host runtime for the game server.
//!
//! This crate owns the in-memory item asset map and drives plugins through
//! their lifecycle. Consumers build a [`PluginHost`] around an
//! [`ItemRegistry`](game_core::ItemRegistry), load a [`Plugin`], then start
//! and stop it; command surfaces reach a running plugin through
//! [`PluginHost::with_running`].
//!
//! Modules are organized by responsibility:
//! - [`plugin`] hosts the lifecycle trait, state machine and host
//! - [`api`] exposes the error types surfaced to callers
//! - [`oracle`] provides the asset map reused by loaders and tests
pub mod api;
pub mod oracle;
pub mod plugin;

pub use api::{LifecycleError, Result};
pub use oracle::AssetMap;
pub use plugin::{Plugin, PluginHost, PluginState};
