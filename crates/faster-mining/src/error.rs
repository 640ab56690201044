//! Failures of a tool-power pass.
//!
//! Only [`PatchError::RegistryUnavailable`] aborts a pass. Item and field
//! failures are contained at the item or spec that raised them and reported
//! through the log; [`PatchError::InvalidMultiplier`] is returned by
//! `reconfigure` without touching any state.
use game_core::{AssetError, ItemId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PatchError {
    #[error("item registry is unavailable")]
    RegistryUnavailable,

    #[error("failed to process item '{item}'")]
    Item {
        item: ItemId,
        #[source]
        source: AssetError,
    },

    #[error("failed to write power of spec #{index} on item '{item}'")]
    FieldWrite {
        item: ItemId,
        index: usize,
        #[source]
        source: AssetError,
    },

    #[error("multiplier must be a positive finite number, got {0}")]
    InvalidMultiplier(f32),
}

impl PatchError {
    /// Returns true if the error aborted the whole pass.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::RegistryUnavailable)
    }

    /// Short machine-readable kind, delegating to the asset error where present.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RegistryUnavailable => "registry_unavailable",
            Self::Item { source, .. } | Self::FieldWrite { source, .. } => source.as_str(),
            Self::InvalidMultiplier(_) => "invalid_multiplier",
        }
    }
}
