//! Bulk tool-power pass over the item registry.
//!
//! A pass visits every item, skips those without a tool capability, and for
//! each tool spec with a strictly positive power writes `power * multiplier`
//! back into the spec. Failures are contained at the smallest scope:
//!
//! | Failure                       | Scope       | Effect                              |
//! |-------------------------------|-------------|-------------------------------------|
//! | registry returns no item set  | pass        | abort, counters stay at zero        |
//! | tool capability lookup fails  | item        | item skipped, pass continues        |
//! | power write rejected          | spec        | spec not counted, next spec         |
use game_core::{ItemAsset, ItemId, ItemRegistry};
use tracing::{debug, error, info, warn};

use crate::config::{PatcherConfig, validate_multiplier};
use crate::error::PatchError;

const TARGET: &str = "faster_mining::patcher";

/// Totals collected over one pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassSummary {
    /// Items returned by the registry.
    pub items_scanned: usize,
    /// Items that expose a tool capability.
    pub tools_seen: usize,
    /// Tools with at least one modified spec.
    pub tools_modified: usize,
    /// Specs whose power was rewritten.
    pub specs_modified: usize,
    /// Specs left alone because their power was not positive.
    pub specs_skipped: usize,
    /// Specs whose power write was rejected.
    pub specs_failed: usize,
    /// Items skipped because their tool capability could not be read.
    pub items_failed: usize,
}

/// Multiplies the power of every tool spec in a registry.
///
/// The patcher never owns the registry: every operation borrows it for the
/// duration of the call. Counters describe the most recent pass only.
#[derive(Debug, Clone)]
pub struct ToolPowerPatcher {
    config: PatcherConfig,
    tools_modified: usize,
    specs_modified: usize,
}

impl ToolPowerPatcher {
    pub fn new(config: PatcherConfig) -> Self {
        Self {
            config,
            tools_modified: 0,
            specs_modified: 0,
        }
    }

    pub fn multiplier(&self) -> f32 {
        self.config.multiplier
    }

    pub fn tools_modified(&self) -> usize {
        self.tools_modified
    }

    pub fn specs_modified(&self) -> usize {
        self.specs_modified
    }

    /// Runs one pass over `registry` with the current multiplier.
    ///
    /// Every positive power is multiplied again on each call; two passes with
    /// multiplier `m` scale a power by `m * m`.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::RegistryUnavailable`] if the registry has no item
    /// set. Per-item and per-spec failures are logged and counted in the
    /// returned summary instead.
    pub fn run_full_pass(
        &mut self,
        registry: &mut dyn ItemRegistry,
    ) -> Result<PassSummary, PatchError> {
        self.reset_counters();

        let Some(items) = registry.items_mut() else {
            error!(target: TARGET, "Item registry unavailable, aborting pass");
            return Err(PatchError::RegistryUnavailable);
        };

        info!(
            target: TARGET,
            items = items.len(),
            multiplier = self.config.multiplier,
            "Scanning item registry"
        );

        let mut summary = PassSummary {
            items_scanned: items.len(),
            ..PassSummary::default()
        };

        for (id, item) in items {
            if let Err(err) = self.patch_item(id, item, &mut summary) {
                summary.items_failed += 1;
                error!(
                    target: TARGET,
                    item = %id,
                    error = %err,
                    kind = err.as_str(),
                    cause = %source_of(&err),
                    "Failed to process item, skipping"
                );
            }
        }

        summary.tools_modified = self.tools_modified;
        summary.specs_modified = self.specs_modified;

        info!(
            target: TARGET,
            tools_seen = summary.tools_seen,
            tools_modified = summary.tools_modified,
            specs_modified = summary.specs_modified,
            specs_skipped = summary.specs_skipped,
            specs_failed = summary.specs_failed,
            items_failed = summary.items_failed,
            "Tool power pass complete"
        );

        Ok(summary)
    }

    /// Replaces the multiplier and immediately runs a new pass.
    ///
    /// Powers already scaled by earlier passes are scaled again, so the
    /// effect compounds rather than replacing the previous multiplier.
    ///
    /// # Errors
    ///
    /// A non-positive or non-finite multiplier returns
    /// [`PatchError::InvalidMultiplier`] and leaves the multiplier, the
    /// counters and the registry untouched.
    pub fn reconfigure(
        &mut self,
        multiplier: f32,
        registry: &mut dyn ItemRegistry,
    ) -> Result<PassSummary, PatchError> {
        let multiplier = match validate_multiplier(multiplier) {
            Ok(multiplier) => multiplier,
            Err(err) => {
                warn!(
                    target: TARGET,
                    multiplier,
                    "Rejected multiplier, keeping current settings"
                );
                return Err(err);
            }
        };

        info!(
            target: TARGET,
            previous = self.config.multiplier,
            multiplier,
            "Multiplier reconfigured, re-running pass"
        );
        self.config.multiplier = multiplier;
        self.reset_counters();
        self.run_full_pass(registry)
    }

    fn reset_counters(&mut self) {
        self.tools_modified = 0;
        self.specs_modified = 0;
    }

    /// Patches the specs of one item. Only a failing tool lookup is an error.
    fn patch_item(
        &mut self,
        id: &ItemId,
        item: &mut dyn ItemAsset,
        summary: &mut PassSummary,
    ) -> Result<(), PatchError> {
        let tool = match item.tool_mut() {
            Ok(Some(tool)) => tool,
            Ok(None) => return Ok(()),
            Err(source) => {
                return Err(PatchError::Item {
                    item: id.clone(),
                    source,
                });
            }
        };
        summary.tools_seen += 1;

        let specs = match tool.specs_mut() {
            Some(specs) if !specs.is_empty() => specs,
            _ => {
                debug!(target: TARGET, item = %id, "Tool has no specs");
                return Ok(());
            }
        };

        let multiplier = self.config.multiplier;
        let mut modified = 0usize;
        let mut first_change = None;

        for (index, spec) in specs.into_iter().enumerate() {
            let before = spec.power();
            if before.is_nan() || before <= 0.0 {
                summary.specs_skipped += 1;
                continue;
            }

            let after = before * multiplier;
            if let Err(source) = spec.write_power(after) {
                summary.specs_failed += 1;
                let err = PatchError::FieldWrite {
                    item: id.clone(),
                    index,
                    source,
                };
                error!(
                    target: TARGET,
                    error = %err,
                    kind = err.as_str(),
                    cause = %source_of(&err),
                    "Power write rejected"
                );
                continue;
            }

            modified += 1;
            self.specs_modified += 1;
            if first_change.is_none() {
                first_change = Some((before, after));
            }

            if self.specs_modified <= self.config.trace_limit {
                info!(
                    target: TARGET,
                    item = %id,
                    spec = index,
                    before,
                    after,
                    "Patched spec"
                );
            }
        }

        if let Some((before, after)) = first_change {
            self.tools_modified += 1;
            if self.tools_modified <= self.config.trace_limit {
                info!(
                    target: TARGET,
                    item = %id,
                    specs = modified,
                    before,
                    after,
                    "Patched tool"
                );
            }
        }

        Ok(())
    }
}

impl Default for ToolPowerPatcher {
    fn default() -> Self {
        Self::new(PatcherConfig::default())
    }
}

fn source_of(err: &PatchError) -> String {
    std::error::Error::source(err)
        .map(ToString::to_string)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use game_core::{AssetError, ItemCategory, ItemDefinition, PowerSpec, ToolAsset, ToolSpec};
    use runtime::AssetMap;

    use super::*;

    fn power_of(map: &AssetMap, id: &str) -> Vec<f32> {
        map.definition(&ItemId::from(id))
            .and_then(ItemDefinition::tool_data)
            .map(|tool| tool.specs.iter().map(PowerSpec::power).collect())
            .unwrap_or_default()
    }

    /// Items A (no tool), B (specs 1.0 and -1.0), C (spec 3.0).
    fn scenario_registry() -> AssetMap {
        AssetMap::from_definitions([
            ItemDefinition::new("a", ItemCategory::Material, 64),
            ItemDefinition::tool(
                "b",
                vec![ToolSpec::new("rock", 1.0), ToolSpec::new("soil", -1.0)],
            ),
            ItemDefinition::tool("c", vec![ToolSpec::new("wood", 3.0)]),
        ])
    }

    #[test]
    fn scenario_pass_scales_positive_specs() {
        let mut registry = scenario_registry();
        let mut patcher = ToolPowerPatcher::default();

        let summary = patcher.run_full_pass(&mut registry).unwrap();

        assert_eq!(power_of(&registry, "b"), [2.0, -1.0]);
        assert_eq!(power_of(&registry, "c"), [6.0]);
        assert_eq!(patcher.tools_modified(), 2);
        assert_eq!(patcher.specs_modified(), 2);
        assert_eq!(summary.items_scanned, 3);
        assert_eq!(summary.tools_seen, 2);
        assert_eq!(summary.specs_skipped, 1);
    }

    #[test]
    fn zero_power_is_never_touched() {
        let mut registry = AssetMap::from_definitions([ItemDefinition::tool(
            "fist",
            vec![ToolSpec::new("rock", 0.0), ToolSpec::new("soil", -0.0)],
        )]);
        let mut patcher = ToolPowerPatcher::default();

        let summary = patcher.run_full_pass(&mut registry).unwrap();

        assert_eq!(power_of(&registry, "fist"), [0.0, 0.0]);
        assert_eq!(summary.tools_modified, 0);
        assert_eq!(summary.specs_skipped, 2);
    }

    #[test]
    fn repeated_passes_compound() {
        let mut registry = scenario_registry();
        let mut patcher = ToolPowerPatcher::new(PatcherConfig::with_multiplier(1.5).unwrap());

        patcher.run_full_pass(&mut registry).unwrap();
        patcher.run_full_pass(&mut registry).unwrap();

        assert_eq!(power_of(&registry, "c"), [3.0 * 1.5 * 1.5]);
        assert_eq!(patcher.specs_modified(), 2, "counters reset per pass");
    }

    #[test]
    fn counts_multiple_specs_on_one_tool_once() {
        let mut registry = AssetMap::from_definitions([ItemDefinition::tool(
            "drill",
            vec![
                ToolSpec::new("rock", 1.0),
                ToolSpec::new("ore", 2.0),
                ToolSpec::new("soil", 0.5),
            ],
        )]);
        let mut patcher = ToolPowerPatcher::default();

        patcher.run_full_pass(&mut registry).unwrap();

        assert_eq!(patcher.tools_modified(), 1);
        assert_eq!(patcher.specs_modified(), 3);
    }

    #[test]
    fn tool_without_specs_is_skipped() {
        let mut registry = AssetMap::from_definitions([ItemDefinition::tool("blank", vec![])]);
        let mut patcher = ToolPowerPatcher::default();

        let summary = patcher.run_full_pass(&mut registry).unwrap();

        assert_eq!(summary.tools_seen, 1);
        assert_eq!(summary.tools_modified, 0);
    }

    #[test]
    fn empty_registry_completes_with_zero_counts() {
        let mut registry = AssetMap::new();
        let mut patcher = ToolPowerPatcher::default();

        let summary = patcher.run_full_pass(&mut registry).unwrap();

        assert_eq!(summary, PassSummary::default());
    }

    #[test]
    fn unavailable_registry_aborts_and_resets_counters() {
        let mut patcher = ToolPowerPatcher::default();
        patcher.run_full_pass(&mut scenario_registry()).unwrap();
        assert_eq!(patcher.specs_modified(), 2);

        let err = patcher.run_full_pass(&mut AssetMap::unloaded()).unwrap_err();

        assert_eq!(err, PatchError::RegistryUnavailable);
        assert!(err.is_fatal());
        assert_eq!(patcher.tools_modified(), 0);
        assert_eq!(patcher.specs_modified(), 0);
    }

    #[test]
    fn locked_spec_is_not_counted_and_pass_continues() {
        let mut registry = AssetMap::from_definitions([
            ItemDefinition::tool(
                "a_pick",
                vec![ToolSpec::new("rock", 1.0).locked(), ToolSpec::new("ore", 2.0)],
            ),
            ItemDefinition::tool("b_pick", vec![ToolSpec::new("rock", 1.0).locked()]),
        ]);
        let mut patcher = ToolPowerPatcher::default();

        let summary = patcher.run_full_pass(&mut registry).unwrap();

        assert_eq!(power_of(&registry, "a_pick"), [1.0, 4.0]);
        assert_eq!(power_of(&registry, "b_pick"), [1.0]);
        assert_eq!(summary.specs_failed, 2);
        assert_eq!(summary.specs_modified, 1);
        assert_eq!(summary.tools_modified, 1);
    }

    #[test]
    fn overflowing_power_is_rejected_by_tool_spec() {
        let mut registry = AssetMap::from_definitions([ItemDefinition::tool(
            "huge",
            vec![ToolSpec::new("rock", f32::MAX)],
        )]);
        let mut patcher = ToolPowerPatcher::default();

        let summary = patcher.run_full_pass(&mut registry).unwrap();

        assert_eq!(power_of(&registry, "huge"), [f32::MAX]);
        assert_eq!(summary.specs_failed, 1);
        assert_eq!(summary.specs_modified, 0);
    }

    /// Item whose tool capability cannot be resolved.
    struct Broken;

    impl ItemAsset for Broken {
        fn tool_mut(&mut self) -> Result<Option<&mut dyn ToolAsset>, AssetError> {
            Err(AssetError::ToolUnresolved {
                item: ItemId::from("broken"),
                reason: "parent asset missing".into(),
            })
        }
    }

    /// Registry mixing a broken item with a healthy tool.
    struct MixedRegistry {
        ids: [ItemId; 2],
        broken: Broken,
        healthy: ItemDefinition,
    }

    impl ItemRegistry for MixedRegistry {
        fn items_mut(&mut self) -> Option<Vec<(&ItemId, &mut dyn ItemAsset)>> {
            let [broken_id, healthy_id] = &self.ids;
            Some(vec![
                (broken_id, &mut self.broken as &mut dyn ItemAsset),
                (healthy_id, &mut self.healthy as &mut dyn ItemAsset),
            ])
        }

        fn item_count(&self) -> Option<usize> {
            Some(self.ids.len())
        }
    }

    #[test]
    fn item_failure_is_contained() {
        let mut registry = MixedRegistry {
            ids: [ItemId::from("broken"), ItemId::from("pick")],
            broken: Broken,
            healthy: ItemDefinition::tool("pick", vec![ToolSpec::new("rock", 2.5)]),
        };
        let mut patcher = ToolPowerPatcher::default();

        let summary = patcher.run_full_pass(&mut registry).unwrap();

        assert_eq!(summary.items_failed, 1);
        assert_eq!(summary.tools_modified, 1);
        assert_eq!(registry.healthy.tool_data().unwrap().specs[0].power(), 5.0);
    }

    #[test]
    fn reconfigure_compounds_on_scaled_values() {
        let mut registry = scenario_registry();
        let mut patcher = ToolPowerPatcher::default();
        patcher.run_full_pass(&mut registry).unwrap();

        let summary = patcher.reconfigure(3.0, &mut registry).unwrap();

        assert_eq!(patcher.multiplier(), 3.0);
        assert_eq!(power_of(&registry, "c"), [18.0]);
        assert_eq!(power_of(&registry, "b"), [6.0, -1.0]);
        assert_eq!(summary.specs_modified, 2);
    }

    #[test]
    fn reconfigure_rejects_non_positive_multiplier() {
        let mut registry = scenario_registry();
        let mut patcher = ToolPowerPatcher::default();
        patcher.run_full_pass(&mut registry).unwrap();

        for value in [0.0, -1.5, f32::NAN, f32::INFINITY] {
            let err = patcher.reconfigure(value, &mut registry).unwrap_err();
            assert!(matches!(err, PatchError::InvalidMultiplier(_)));
        }

        assert_eq!(patcher.multiplier(), 2.0);
        assert_eq!(patcher.tools_modified(), 2);
        assert_eq!(patcher.specs_modified(), 2);
        assert_eq!(power_of(&registry, "c"), [6.0]);
    }
}
