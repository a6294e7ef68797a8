//! Data-driven content definitions and loaders.
//!
//! This crate houses the built-in roster and encounter table and provides
//! loaders for RON/TOML data files:
//! - Party roster (RON)
//! - Encounter sequence (RON)
//! - Game configuration and element tables (TOML)
//!
//! All loaders use gem-core types directly with serde for RON/TOML
//! deserialization. Content is validated when a session is built from it.

pub mod defaults;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use defaults::{DefaultContent, GameContent};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, EncounterLoader, PartyLoader};
