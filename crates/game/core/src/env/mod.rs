//! Traits describing the host's mutable item asset map.
//!
//! The host owns every item definition; plugins only see them through these
//! object-safe accessors. Each layer mirrors one level of the asset tree:
//! registry → item → tool capability → power spec. Writes to a spec's power
//! go exclusively through [`PowerSpec::write_power`], which lets the owning
//! type validate or refuse the change.
mod items;

pub use items::{ItemCategory, ItemDefinition, ItemId, ToolData, ToolSpec};

use crate::error::AssetError;

/// Registry of all item assets known to the host.
pub trait ItemRegistry {
    /// Returns every registered item keyed by id.
    ///
    /// `None` means the asset map is not available (not loaded yet, or torn
    /// down). An empty vector is a valid, available registry.
    fn items_mut(&mut self) -> Option<Vec<(&ItemId, &mut dyn ItemAsset)>>;

    /// Number of registered items, if the asset map is available.
    fn item_count(&self) -> Option<usize>;
}

/// A single item asset.
pub trait ItemAsset {
    /// Returns the tool capability of this item, if it has one.
    fn tool_mut(&mut self) -> Result<Option<&mut dyn ToolAsset>, AssetError>;
}

/// Tool capability attached to an item.
pub trait ToolAsset {
    /// Returns the tool's specs in declaration order.
    ///
    /// `None` when the tool has no spec table at all.
    fn specs_mut(&mut self) -> Option<Vec<&mut dyn PowerSpec>>;
}

/// Read access and controlled write access to a spec's power value.
pub trait PowerSpec {
    fn power(&self) -> f32;

    /// Replaces the power value in place.
    fn write_power(&mut self, value: f32) -> Result<(), AssetError>;
}
