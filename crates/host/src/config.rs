//! Host configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use faster_mining::PatcherConfig;

/// Configuration required to boot the host and its plugin.
#[derive(Clone, Debug)]
pub struct HostConfig {
    /// RON item catalog loaded into the asset map.
    pub catalog: PathBuf,
    /// Plugin settings.
    pub patcher: PatcherConfig,
    /// Multiplier applied through `reconfigure` after start, if any.
    pub reconfigure: Option<f32>,
}

impl HostConfig {
    pub fn new(catalog: impl Into<PathBuf>) -> Self {
        Self {
            catalog: catalog.into(),
            patcher: PatcherConfig::default(),
            reconfigure: None,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MINING_CATALOG` - Path to the RON item catalog (required)
    /// - `FASTER_MINING_RECONFIGURE` - Multiplier to apply after start (optional)
    /// - `FASTER_MINING_*` - Plugin settings, see [`PatcherConfig::from_env`]
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`HostConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let catalog = lookup("MINING_CATALOG").context("MINING_CATALOG is not set")?;

        let reconfigure = lookup("FASTER_MINING_RECONFIGURE")
            .map(|raw| {
                raw.trim()
                    .parse::<f32>()
                    .with_context(|| format!("FASTER_MINING_RECONFIGURE is not a number: {raw}"))
            })
            .transpose()?;

        Ok(Self {
            catalog: PathBuf::from(catalog),
            patcher: PatcherConfig::from_lookup(&lookup),
            reconfigure,
        })
    }
}
