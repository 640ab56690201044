//! Plugin lifecycle for host-controlled extensions.
//!
//! A plugin is constructed by its owner, handed to a [`PluginHost`], and from
//! then on only reacts to lifecycle callbacks. Callbacks return nothing:
//! whatever goes wrong inside a plugin is logged by the plugin and never
//! reaches the host.
//!
//! # State Machine
//!
//! ```text
//! Unloaded ──load──▶ Loaded ──start──▶ Running ──stop──▶ Stopped
//!    ▲                                                      │
//!    └──────────────────────── load ◀───────────────────────┘
//! ```
mod host;

pub use host::PluginHost;

use game_core::ItemRegistry;

/// Lifecycle state of a hosted plugin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum PluginState {
    #[default]
    Unloaded,
    Loaded,
    Running,
    Stopped,
}

impl PluginState {
    /// Returns true if the host may move from `self` to `next`.
    pub const fn can_transition_to(self, next: PluginState) -> bool {
        matches!(
            (self, next),
            (Self::Unloaded | Self::Stopped, Self::Loaded)
                | (Self::Loaded, Self::Running)
                | (Self::Running, Self::Stopped)
        )
    }
}

/// Extension loaded, started and stopped by the host.
pub trait Plugin {
    /// Returns a human-readable name (used in logging).
    fn name(&self) -> &'static str;

    /// Called once after the host takes ownership of the plugin.
    fn on_load(&mut self) {}

    /// Called when the host starts the plugin, with the host's asset registry.
    fn on_start(&mut self, registry: &mut dyn ItemRegistry);

    /// Called when the host stops the plugin.
    fn on_stop(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::PluginState::*;

    #[test]
    fn legal_transitions() {
        assert!(Unloaded.can_transition_to(Loaded));
        assert!(Loaded.can_transition_to(Running));
        assert!(Running.can_transition_to(Stopped));
        assert!(Stopped.can_transition_to(Loaded));
    }

    #[test]
    fn illegal_transitions() {
        assert!(!Unloaded.can_transition_to(Running));
        assert!(!Loaded.can_transition_to(Stopped));
        assert!(!Running.can_transition_to(Loaded));
        assert!(!Stopped.can_transition_to(Running));
        assert!(!Running.can_transition_to(Running));
    }

    #[test]
    fn state_displays_snake_case() {
        assert_eq!(Running.to_string(), "running");
    }
}
