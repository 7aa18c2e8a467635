//! Static game content and loaders.
//!
//! This crate houses the class and monster tables the game ships with and
//! loaders that read replacement or additional tables from RON data files:
//! - Class templates (base attributes per class)
//! - Monster templates (level, attributes, experience reward, AI pattern)
//!
//! Content is consumed through [`game_core::TemplateOracle`] and never
//! appears in character state.

pub mod builtin;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use builtin::{builtin_classes, builtin_monsters, builtin_snapshot};

#[cfg(feature = "loaders")]
pub use loaders::{ClassLoader, ContentFactory, MonsterLoader};
