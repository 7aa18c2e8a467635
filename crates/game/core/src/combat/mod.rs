//! Combat resolution system.
//!
//! Pure functions over two [`Combatant`](crate::actor::Combatant)s. Random
//! draws are passed in, never drawn here, so every function is deterministic.
//!
//! # Core Functions
//!
//! - `resolve_attack`: Complete attack resolution (hit check + critical + damage)
//! - `calculate_hit_chance`: Accuracy vs Evasion calculation (unclamped)
//! - `calculate_damage`: Attack vs Defense with a minimum of 1
//! - `attempt_flee`: Dexterity-based escape check (unclamped)

pub mod damage;
pub mod flee;
pub mod hit;
pub mod result;

pub use damage::calculate_damage;
pub use flee::{attempt_flee, flee_chance};
pub use hit::{calculate_hit_chance, check_critical, check_hit};
pub use result::{AttackOutcome, AttackResult, AttackRolls, resolve_attack};
