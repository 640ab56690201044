//! Host lifecycle adapter for the tool-power patcher.
use game_core::ItemRegistry;
use runtime::Plugin;
use tracing::{info, warn};

use crate::config::PatcherConfig;
use crate::error::PatchError;
use crate::patcher::{PassSummary, ToolPowerPatcher};

const TARGET: &str = "faster_mining::plugin";

/// The Faster Mining plugin.
///
/// Constructed once by its owner and handed to the host. Start runs one
/// pass; stop only reports. Nothing raised inside a callback reaches the
/// host.
#[derive(Debug, Clone, Default)]
pub struct FasterMining {
    patcher: ToolPowerPatcher,
    last_pass: Option<PassSummary>,
}

impl FasterMining {
    pub const NAME: &'static str = "FasterMining";

    pub fn new(config: PatcherConfig) -> Self {
        Self {
            patcher: ToolPowerPatcher::new(config),
            last_pass: None,
        }
    }

    pub fn multiplier(&self) -> f32 {
        self.patcher.multiplier()
    }

    pub fn tools_modified(&self) -> usize {
        self.patcher.tools_modified()
    }

    pub fn specs_modified(&self) -> usize {
        self.patcher.specs_modified()
    }

    /// Summary of the last pass that reached the registry.
    pub fn last_pass(&self) -> Option<&PassSummary> {
        self.last_pass.as_ref()
    }

    /// Applies a new multiplier and re-runs the pass on `registry`.
    ///
    /// See [`ToolPowerPatcher::reconfigure`]; the effect compounds with
    /// earlier passes.
    pub fn reconfigure(
        &mut self,
        multiplier: f32,
        registry: &mut dyn ItemRegistry,
    ) -> Result<PassSummary, PatchError> {
        let result = self.patcher.reconfigure(multiplier, registry);
        self.record(&result);
        result
    }

    fn record(&mut self, result: &Result<PassSummary, PatchError>) {
        match result {
            Ok(summary) => self.last_pass = Some(*summary),
            Err(PatchError::RegistryUnavailable) => self.last_pass = None,
            Err(_) => {}
        }
    }
}

impl Plugin for FasterMining {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn on_load(&mut self) {
        info!(
            target: TARGET,
            multiplier = self.patcher.multiplier(),
            "Plugin loaded"
        );
    }

    fn on_start(&mut self, registry: &mut dyn ItemRegistry) {
        let result = self.patcher.run_full_pass(registry);
        self.record(&result);
        match result {
            Ok(summary) => info!(
                target: TARGET,
                tools_modified = summary.tools_modified,
                specs_modified = summary.specs_modified,
                "Mining power boosted"
            ),
            Err(err) => warn!(
                target: TARGET,
                error = %err,
                "Plugin started without boosting any tools"
            ),
        }
    }

    fn on_stop(&mut self) {
        info!(
            target: TARGET,
            multiplier = self.patcher.multiplier(),
            tools_modified = self.patcher.tools_modified(),
            specs_modified = self.patcher.specs_modified(),
            "Plugin stopped"
        );
    }
}

#[cfg(test)]
mod tests {
    use game_core::{ItemDefinition, ItemId, PowerSpec, ToolSpec};
    use runtime::{AssetMap, PluginHost, PluginState};

    use super::*;

    fn registry() -> AssetMap {
        AssetMap::from_definitions([ItemDefinition::tool(
            "pickaxe",
            vec![ToolSpec::new("rock", 1.25)],
        )])
    }

    fn pickaxe_power(host: &PluginHost<FasterMining, AssetMap>) -> f32 {
        host.registry()
            .definition(&ItemId::from("pickaxe"))
            .and_then(ItemDefinition::tool_data)
            .map(|tool| tool.specs[0].power())
            .unwrap_or_default()
    }

    #[test]
    fn load_does_not_touch_registry() {
        let mut host = PluginHost::new(registry());
        host.load(FasterMining::default()).unwrap();

        assert_eq!(pickaxe_power(&host), 1.25);
        assert!(host.plugin().unwrap().last_pass().is_none());
    }

    #[test]
    fn start_runs_one_pass_and_stop_keeps_counts() {
        let mut host = PluginHost::new(registry());
        host.load(FasterMining::default()).unwrap();
        host.start().unwrap();
        host.stop().unwrap();

        let plugin = host.plugin().unwrap();
        assert_eq!(pickaxe_power(&host), 2.5);
        assert_eq!(plugin.tools_modified(), 1);
        assert_eq!(plugin.specs_modified(), 1);
        assert_eq!(host.state(), PluginState::Stopped);
    }

    #[test]
    fn unavailable_registry_does_not_fail_start() {
        let mut host = PluginHost::new(AssetMap::unloaded());
        host.load(FasterMining::default()).unwrap();

        assert!(host.start().is_ok());
        assert_eq!(host.state(), PluginState::Running);
        assert_eq!(host.plugin().unwrap().specs_modified(), 0);
        assert!(host.plugin().unwrap().last_pass().is_none());
    }

    #[test]
    fn reconfigure_through_host_command() {
        let mut host = PluginHost::new(registry());
        host.load(FasterMining::default()).unwrap();
        host.start().unwrap();

        let summary = host
            .with_running(|plugin, registry| plugin.reconfigure(4.0, registry))
            .unwrap()
            .unwrap();

        assert_eq!(summary.specs_modified, 1);
        assert_eq!(pickaxe_power(&host), 10.0);
        assert_eq!(host.plugin().unwrap().multiplier(), 4.0);
    }

    #[test]
    fn rejected_reconfigure_keeps_last_pass() {
        let mut host = PluginHost::new(registry());
        host.load(FasterMining::default()).unwrap();
        host.start().unwrap();

        let result = host
            .with_running(|plugin, registry| plugin.reconfigure(-1.5, registry))
            .unwrap();

        assert_eq!(result, Err(PatchError::InvalidMultiplier(-1.5)));
        let plugin = host.plugin().unwrap();
        assert_eq!(plugin.multiplier(), 2.0);
        assert_eq!(plugin.last_pass().map(|s| s.specs_modified), Some(1));
        assert_eq!(pickaxe_power(&host), 2.5);
    }
}
