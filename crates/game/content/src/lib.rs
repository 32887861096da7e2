//! Static game content and configuration loaders.
//!
//! This crate houses the read-only content of the dungeon crawler:
//! - Item catalog and the starting kit
//! - Enemy templates (two encounter pools and one boss per path)
//! - Narrative catalog and the two path sequences
//! - Game configuration (data-driven via TOML)
//!
//! Content is exposed through the game-core oracle traits by
//! [`StaticContent`] and never appears in game state except as `'static`
//! references.

pub mod enemies;
pub mod items;
pub mod registry;
pub mod scenarios;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use registry::StaticContent;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult};
