//! Item asset model and registry access traits shared across the server.
//!
//! `game-core` defines the item definitions the host's asset map stores
//! (items, tool capabilities and their power specs) together with the
//! object-safe traits plugins use to walk and patch those assets. Concrete
//! registries live in the `runtime` crate; loaders in `game-content`.
pub mod env;
pub mod error;

pub use env::{
    ItemAsset, ItemCategory, ItemDefinition, ItemId, ItemRegistry, PowerSpec, ToolAsset,
    ToolData, ToolSpec,
};
pub use error::AssetError;
