use std::fmt;

use crate::env::{ItemAsset, PowerSpec, ToolAsset};
use crate::error::AssetError;

/// Stable string identifier of an item asset (e.g. `"tool_pickaxe_iron"`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Broad item category used by inventory and crafting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ItemCategory {
    Tool,
    Weapon,
    Block,
    Consumable,
    #[default]
    Material,
}

/// Item definition with common fields and an optional tool capability.
///
/// # Design: Base + Capability Pattern
///
/// - Base fields (id, category, max_stack) exist on every item
/// - `tool` is present only for items usable in gathering (pickaxes, hatchets, shovels)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: ItemId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: ItemCategory,
    #[cfg_attr(feature = "serde", serde(default = "default_max_stack"))]
    pub max_stack: u16,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tool: Option<ToolData>,
}

#[cfg(feature = "serde")]
fn default_max_stack() -> u16 {
    1
}

impl ItemDefinition {
    pub fn new(id: impl Into<ItemId>, category: ItemCategory, max_stack: u16) -> Self {
        Self {
            id: id.into(),
            category,
            max_stack,
            tool: None,
        }
    }

    /// Creates a non-stackable tool item with the given specs.
    pub fn tool(id: impl Into<ItemId>, specs: Vec<ToolSpec>) -> Self {
        Self {
            tool: Some(ToolData::new(specs)),
            ..Self::new(id, ItemCategory::Tool, 1)
        }
    }

    pub fn tool_data(&self) -> Option<&ToolData> {
        self.tool.as_ref()
    }
}

impl ItemAsset for ItemDefinition {
    fn tool_mut(&mut self) -> Result<Option<&mut dyn ToolAsset>, AssetError> {
        Ok(self.tool.as_mut().map(|tool| tool as &mut dyn ToolAsset))
    }
}

/// Tool capability: the gathering specs of a tool item.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToolData {
    #[cfg_attr(feature = "serde", serde(default))]
    pub specs: Vec<ToolSpec>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub durability: Option<u32>,
}

impl ToolData {
    pub fn new(specs: Vec<ToolSpec>) -> Self {
        Self {
            specs,
            durability: None,
        }
    }
}

impl ToolAsset for ToolData {
    fn specs_mut(&mut self) -> Option<Vec<&mut dyn PowerSpec>> {
        Some(
            self.specs
                .iter_mut()
                .map(|spec| spec as &mut dyn PowerSpec)
                .collect(),
        )
    }
}

/// One gathering configuration of a tool.
///
/// `power` has no inherent setter: it can only be changed through
/// [`PowerSpec::write_power`], which refuses locked specs and non-finite values.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToolSpec {
    /// Block material this spec gathers (e.g. `"rock"`, `"soil"`).
    pub gather_type: String,
    power: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub quality: u32,
    /// Locked specs are owned by the host and reject power writes.
    #[cfg_attr(feature = "serde", serde(default))]
    locked: bool,
}

impl ToolSpec {
    pub fn new(gather_type: impl Into<String>, power: f32) -> Self {
        Self {
            gather_type: gather_type.into(),
            power,
            quality: 0,
            locked: false,
        }
    }

    /// Marks the spec as host-locked.
    #[must_use]
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

impl PowerSpec for ToolSpec {
    fn power(&self) -> f32 {
        self.power
    }

    /// Rejects locked specs and non-finite values, including a product that
    /// overflowed `f32` to infinity; such specs keep their previous power.
    fn write_power(&mut self, value: f32) -> Result<(), AssetError> {
        if self.locked {
            return Err(AssetError::FieldLocked { field: "power" });
        }
        if !value.is_finite() {
            return Err(AssetError::NonFinitePower { value });
        }
        self.power = value;
        Ok(())
    }
}
