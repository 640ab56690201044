//! Host that owns the asset registry and drives a plugin's lifecycle.

use game_core::ItemRegistry;
use tracing::{debug, info};

use super::{Plugin, PluginState};
use crate::api::{LifecycleError, Result};

/// Owns one plugin and the registry it operates on.
///
/// The host is the only path through which a plugin sees the registry:
/// lifecycle callbacks receive it as an argument, and command surfaces reach
/// it via [`PluginHost::with_running`]. Every call takes `&mut self`, so
/// plugin work is serialized by construction.
pub struct PluginHost<P, R> {
    plugin: Option<P>,
    registry: R,
    state: PluginState,
}

impl<P, R> PluginHost<P, R>
where
    P: Plugin,
    R: ItemRegistry,
{
    pub fn new(registry: R) -> Self {
        Self {
            plugin: None,
            registry,
            state: PluginState::Unloaded,
        }
    }

    pub fn state(&self) -> PluginState {
        self.state
    }

    pub fn plugin(&self) -> Option<&P> {
        self.plugin.as_ref()
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Takes ownership of `plugin` and invokes its load callback.
    ///
    /// Loading after a stop replaces the previous plugin instance.
    pub fn load(&mut self, plugin: P) -> Result<()> {
        self.transition(PluginState::Loaded)?;
        let plugin = self.plugin.insert(plugin);
        info!(target: "runtime::plugin", plugin = plugin.name(), "Loading plugin");
        plugin.on_load();
        self.state = PluginState::Loaded;
        Ok(())
    }

    /// Starts the loaded plugin, handing it the registry.
    pub fn start(&mut self) -> Result<()> {
        self.transition(PluginState::Running)?;
        let plugin = self.plugin.as_mut().ok_or(LifecycleError::NoPlugin)?;
        info!(target: "runtime::plugin", plugin = plugin.name(), "Starting plugin");
        plugin.on_start(&mut self.registry);
        self.state = PluginState::Running;
        Ok(())
    }

    /// Stops the running plugin. The plugin stays owned by the host.
    pub fn stop(&mut self) -> Result<()> {
        self.transition(PluginState::Stopped)?;
        let plugin = self.plugin.as_mut().ok_or(LifecycleError::NoPlugin)?;
        info!(target: "runtime::plugin", plugin = plugin.name(), "Stopping plugin");
        plugin.on_stop();
        self.state = PluginState::Stopped;
        Ok(())
    }

    /// Runs `f` against the running plugin and the registry.
    ///
    /// This is the entry point for command surfaces that invoke plugin
    /// operations after startup.
    pub fn with_running<T>(
        &mut self,
        f: impl FnOnce(&mut P, &mut dyn ItemRegistry) -> T,
    ) -> Result<T> {
        if self.state != PluginState::Running {
            return Err(LifecycleError::NotRunning { state: self.state });
        }
        let plugin = self.plugin.as_mut().ok_or(LifecycleError::NoPlugin)?;
        debug!(target: "runtime::plugin", plugin = plugin.name(), "Dispatching command");
        let registry: &mut dyn ItemRegistry = &mut self.registry;
        Ok(f(plugin, registry))
    }

    /// Consumes the host, returning the plugin (if any) and the registry.
    pub fn into_parts(self) -> (Option<P>, R) {
        (self.plugin, self.registry)
    }

    fn transition(&self, next: PluginState) -> Result<()> {
        if self.state.can_transition_to(next) {
            Ok(())
        } else {
            Err(LifecycleError::InvalidTransition {
                from: self.state,
                to: next,
            })
        }
    }
}
