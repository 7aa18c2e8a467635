//! Headless battle client.
//!
//! Composition root around `game-core`: reads configuration from the
//! environment, resolves templates through `game-content`, and drives
//! scripted battles the way a presentation layer would.

pub mod config;
pub mod logging;
pub mod session;

pub use config::ClientConfig;
pub use session::{AutoPilot, Choice, EncounterReport, SessionReport, run_encounter, run_session};
