//! Patcher configuration and environment loader.
use std::env;

use tracing::warn;

use crate::error::PatchError;

/// Settings for a [`ToolPowerPatcher`](crate::ToolPowerPatcher).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PatcherConfig {
    /// Factor applied to every positive tool spec power.
    pub multiplier: f32,
    /// Number of tools and specs that get a detailed before/after log line.
    pub trace_limit: usize,
}

impl PatcherConfig {
    pub const DEFAULT_MULTIPLIER: f32 = 2.0;
    pub const DEFAULT_TRACE_LIMIT: usize = 3;

    pub const fn new() -> Self {
        Self {
            multiplier: Self::DEFAULT_MULTIPLIER,
            trace_limit: Self::DEFAULT_TRACE_LIMIT,
        }
    }

    /// Creates a config with the given multiplier, rejecting non-positive or
    /// non-finite values.
    pub fn with_multiplier(multiplier: f32) -> Result<Self, PatchError> {
        Ok(Self {
            multiplier: validate_multiplier(multiplier)?,
            ..Self::new()
        })
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `FASTER_MINING_MULTIPLIER` - Power multiplier (default: 2.0)
    /// - `FASTER_MINING_TRACE_LIMIT` - Tools/specs traced per pass (default: 3)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`PatcherConfig::from_env`] with a custom variable source.
    ///
    /// Unparseable or invalid values fall back to the defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new();

        if let Some(raw) = lookup("FASTER_MINING_MULTIPLIER") {
            match raw.trim().parse::<f32>() {
                Ok(value) => match validate_multiplier(value) {
                    Ok(value) => config.multiplier = value,
                    Err(err) => warn!(
                        target: "faster_mining::config",
                        value = raw.as_str(),
                        error = %err,
                        "Ignoring FASTER_MINING_MULTIPLIER"
                    ),
                },
                Err(_) => warn!(
                    target: "faster_mining::config",
                    value = raw.as_str(),
                    "FASTER_MINING_MULTIPLIER is not a number, using default"
                ),
            }
        }

        if let Some(limit) =
            lookup("FASTER_MINING_TRACE_LIMIT").and_then(|raw| raw.trim().parse().ok())
        {
            config.trace_limit = limit;
        }

        config
    }
}

impl Default for PatcherConfig {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn validate_multiplier(value: f32) -> Result<f32, PatchError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(PatchError::InvalidMultiplier(value))
    }
}
