//! Data-driven content definitions and loaders.
//!
//! This crate reads item catalogs from RON data files into `game-core`
//! definitions. Content is handed to the host, which owns it for the rest of
//! the process; plugins only ever see it through the registry traits.

pub mod loaders;

pub use loaders::{ItemCatalog, ItemLoader, LoadResult};
