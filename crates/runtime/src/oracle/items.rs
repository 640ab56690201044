//! In-memory [`game_core::ItemRegistry`] backed by an ordered map.
use std::collections::BTreeMap;

use game_core::{ItemAsset, ItemDefinition, ItemId, ItemRegistry};

/// Item asset map owned by the host.
///
/// Definitions are keyed by id and iterated in id order. An unloaded map
/// reports no item set at all, which plugins treat as the registry being
/// unavailable.
#[derive(Clone, Debug)]
pub struct AssetMap {
    definitions: BTreeMap<ItemId, ItemDefinition>,
    loaded: bool,
}

impl AssetMap {
    pub fn new() -> Self {
        Self {
            definitions: BTreeMap::new(),
            loaded: true,
        }
    }

    /// Creates a map that has not finished loading.
    pub fn unloaded() -> Self {
        Self {
            definitions: BTreeMap::new(),
            loaded: false,
        }
    }

    pub fn from_definitions(definitions: impl IntoIterator<Item = ItemDefinition>) -> Self {
        let mut map = Self::new();
        for def in definitions {
            map.add_definition(def);
        }
        map
    }

    /// Add an item definition, replacing any definition with the same id.
    pub fn add_definition(&mut self, def: ItemDefinition) {
        self.definitions.insert(def.id.clone(), def);
    }

    pub fn definition(&self, id: &ItemId) -> Option<&ItemDefinition> {
        self.definitions.get(id)
    }
}

impl Default for AssetMap {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemRegistry for AssetMap {
    fn items_mut(&mut self) -> Option<Vec<(&ItemId, &mut dyn ItemAsset)>> {
        if !self.loaded {
            return None;
        }
        Some(
            self.definitions
                .iter_mut()
                .map(|(id, def)| (id, def as &mut dyn ItemAsset))
                .collect(),
        )
    }

    fn item_count(&self) -> Option<usize> {
        self.loaded.then_some(self.definitions.len())
    }
}
