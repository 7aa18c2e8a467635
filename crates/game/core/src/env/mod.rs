//! Read-only environment: template data and randomness.
//!
//! Oracles expose static template tables and random draws so the stat,
//! combat and battle code stays free of hard coupling to concrete sources.
mod error;
mod rng;
mod snapshot;
mod templates;

pub use error::ConfigError;
pub use rng::{PcgRng, RngOracle, compute_seed, roll_context};
pub use snapshot::TemplateSnapshot;
pub use templates::{AiPattern, ClassTemplate, MonsterTemplate, TemplateOracle};
