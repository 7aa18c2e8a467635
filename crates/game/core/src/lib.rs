//! Deterministic combat and progression rules shared by every frontend.
//!
//! `game-core` defines the canonical stat model, attack resolution, experience
//! curve and battle flow, and exposes pure APIs a presentation layer calls
//! into. Template data (classes, monsters) is supplied from outside through
//! [`env::TemplateOracle`]; supporting crates depend on the types re-exported
//! here.
pub mod actor;
pub mod battle;
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod progression;
pub mod stats;

pub use actor::{Combatant, Monster, MonsterAction, PersistedCharacter, Player};
pub use battle::{
    Battle, BattleError, BattleEvent, BattleOutcome, BattlePhase, TurnAction, TurnReport,
};
pub use combat::{AttackOutcome, AttackResult, AttackRolls};
pub use config::GameConfig;
pub use env::{
    AiPattern, ClassTemplate, ConfigError, MonsterTemplate, PcgRng, RngOracle, TemplateOracle,
    TemplateSnapshot,
};
pub use error::{ErrorSeverity, GameError};
pub use progression::{ExperienceGain, LevelUps, level_for_total_experience, required_experience};
pub use stats::{
    AllocationError, AttributeKind, AttributeSet, CharacterStats, DerivedStatKind, DerivedStats,
    StatsSummary, TemplateRef,
};
