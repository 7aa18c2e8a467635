use core::fmt;

use crate::combat::AttackResult;

/// One line of the battle log.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    Appeared { monster: String },
    Attack(AttackResult),
    FleeSucceeded,
    FleeFailed,
    Victory { monster: String },
    ExperienceGained(u64),
    LevelUp(u32),
    Defeat,
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Appeared { monster } => write!(f, "{monster} appeared!"),
            Self::Attack(result) => write!(f, "{result}"),
            Self::FleeSucceeded => f.write_str("Got away safely!"),
            Self::FleeFailed => f.write_str("Couldn't escape!"),
            Self::Victory { monster } => write!(f, "Defeated {monster}!"),
            Self::ExperienceGained(exp) => write!(f, "Gained {exp} experience!"),
            Self::LevelUp(level) => write!(f, "Level up! Reached Lv.{level}!"),
            Self::Defeat => f.write_str("You were defeated..."),
        }
    }
}
