//! Asset access errors.
//!
//! Raised by item, tool and spec accessors when the host's asset data cannot
//! be read or written. Registry-level absence is not an error here: the
//! registry signals it by returning no item set.

use crate::env::ItemId;

/// Errors that occur when reading or writing item asset data.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum AssetError {
    /// The spec is locked by the host and rejects writes.
    #[error("tool spec field `{field}` is locked")]
    FieldLocked { field: &'static str },

    /// The written value is NaN or infinite.
    #[error("power value {value} is not finite")]
    NonFinitePower { value: f32 },

    /// The item's tool capability could not be resolved.
    #[error("tool capability of item '{item}' could not be resolved: {reason}")]
    ToolUnresolved { item: ItemId, reason: String },
}

impl AssetError {
    /// Returns a short machine-friendly label for log fields.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FieldLocked { .. } => "field_locked",
            Self::NonFinitePower { .. } => "non_finite_power",
            Self::ToolUnresolved { .. } => "tool_unresolved",
        }
    }
}
