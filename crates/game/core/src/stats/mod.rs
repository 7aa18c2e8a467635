//! Stat system.
//!
//! ```text
//! [ Attributes: base (template) + bonus (allocated) ]
//!      ↓
//! [ Derived Stats: pure function of final attributes and level ]
//!      ↓
//! [ Resources: current/max HP and MP held by CharacterStats ]
//! ```
//!
//! Players and monsters share the same [`CharacterStats`] block; the
//! wrappers in [`crate::actor`] decide which operations each may use.

pub mod allocation;
pub mod attributes;
pub mod character;
pub mod derived;

pub use allocation::AllocationError;
pub use attributes::{AttributeKind, AttributeSet};
pub use character::{CharacterStats, StatsSummary, TemplateRef};
pub use derived::{DerivedStatKind, DerivedStats};
