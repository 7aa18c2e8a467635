//! Per-encounter battle state machine.
//!
//! ```text
//! PlayerTurn ──attack/flee──▶ MonsterTurn ──monster acts──▶ PlayerTurn ...
//!      │                           │
//!      └──────────────┬────────────┘
//!                     ▼
//!         Ended { Victory | Defeat | Fled }
//! ```
//!
//! A [`Battle`] borrows the player for its whole lifetime and owns the
//! monster it was started with; the monster is dropped with the battle.

mod engine;
mod errors;
mod event;
mod phase;

pub use engine::{Battle, TurnAction, TurnReport};
pub use errors::BattleError;
pub use event::BattleEvent;
pub use phase::{BattleOutcome, BattlePhase};
