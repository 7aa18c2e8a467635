//! Owners of a stat block.
//!
//! [`Player`] and [`Monster`] both wrap a [`CharacterStats`]; neither inherits
//! from the other. Combat code works against the [`Combatant`] trait.

mod monster;
mod persist;
mod player;

pub use monster::{Monster, MonsterAction};
pub use persist::PersistedCharacter;
pub use player::Player;

use crate::stats::CharacterStats;

/// Anything that can attack and be attacked.
pub trait Combatant {
    fn name(&self) -> &str;

    fn stats(&self) -> &CharacterStats;

    /// Apply damage to current HP. Returns true if the combatant is now dead.
    fn take_damage(&mut self, amount: u32) -> bool;

    fn is_dead(&self) -> bool {
        self.stats().is_dead()
    }
}
