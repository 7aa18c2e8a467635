/// How a battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BattleOutcome {
    Victory,
    Defeat,
    Fled,
}

/// Whose move it is, or how the battle ended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattlePhase {
    #[default]
    PlayerTurn,
    MonsterTurn,
    Ended(BattleOutcome),
}

impl BattlePhase {
    pub const fn is_player_turn(&self) -> bool {
        matches!(self, Self::PlayerTurn)
    }

    pub const fn is_ended(&self) -> bool {
        matches!(self, Self::Ended(_))
    }

    pub const fn outcome(&self) -> Option<BattleOutcome> {
        match self {
            Self::Ended(outcome) => Some(*outcome),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PlayerTurn => "player_turn",
            Self::MonsterTurn => "monster_turn",
            Self::Ended(_) => "ended",
        }
    }
}
