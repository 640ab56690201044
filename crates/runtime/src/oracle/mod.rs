//! Runtime implementations of the `game-core` asset traits.
//!
//! The asset map is the single owner of item definitions for the lifetime of
//! the process; plugins mutate it in place through the registry traits.
mod items;

pub use items::AssetMap;
