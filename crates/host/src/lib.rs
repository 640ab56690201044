//! Minimal game-server host that boots the Faster Mining plugin.
//!
//! The host loads an item catalog into an [`AssetMap`], hands it to a
//! [`PluginHost`], and walks the plugin through load, start and stop. An
//! optional reconfigure step stands in for an admin command issued while
//! the plugin is running.
pub mod config;

pub use config::HostConfig;

use anyhow::{Context, Result};
use faster_mining::{FasterMining, PassSummary, PatchError};
use game_content::ItemLoader;
use runtime::{AssetMap, PluginHost};
use tracing::{info, warn};

/// Outcome of one host session.
#[derive(Debug)]
pub struct SessionReport {
    pub multiplier: f32,
    pub tools_modified: usize,
    pub specs_modified: usize,
    /// Registry state after the plugin stopped.
    pub registry: AssetMap,
}

/// Loads the catalog, runs the plugin lifecycle once and returns the result.
pub fn run_session(config: &HostConfig) -> Result<SessionReport> {
    let items = ItemLoader::load(&config.catalog)?;
    info!(
        target: "mining_host",
        items = items.len(),
        catalog = %config.catalog.display(),
        "Item catalog loaded"
    );

    let mut host = PluginHost::new(AssetMap::from_definitions(items));
    host.load(FasterMining::new(config.patcher))?;
    host.start()?;

    if let Some(multiplier) = config.reconfigure {
        let outcome =
            host.with_running(|plugin, registry| plugin.reconfigure(multiplier, registry))?;
        log_reconfigure(multiplier, outcome);
    }

    host.stop()?;

    let (plugin, registry) = host.into_parts();
    let plugin = plugin.context("plugin missing after stop")?;
    Ok(SessionReport {
        multiplier: plugin.multiplier(),
        tools_modified: plugin.tools_modified(),
        specs_modified: plugin.specs_modified(),
        registry,
    })
}

fn log_reconfigure(multiplier: f32, outcome: Result<PassSummary, PatchError>) {
    match outcome {
        Ok(summary) => info!(
            target: "mining_host",
            multiplier,
            specs_modified = summary.specs_modified,
            "Reconfigure applied"
        ),
        Err(err) => warn!(target: "mining_host", multiplier, error = %err, "Reconfigure ignored"),
    }
}
