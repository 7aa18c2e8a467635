//! Errors surfaced when the battle is driven out of order.

use crate::error::{ErrorSeverity, GameError};

use super::phase::{BattleOutcome, BattlePhase};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    #[error("not the player's turn (phase: {})", .0.as_str())]
    NotPlayerTurn(BattlePhase),

    #[error("not the monster's turn (phase: {})", .0.as_str())]
    NotMonsterTurn(BattlePhase),

    #[error("battle already ended: {0}")]
    AlreadyEnded(BattleOutcome),
}

impl BattleError {
    /// Error for acting during `phase`; `player_expected` names whose turn was required.
    pub(crate) fn out_of_turn(phase: BattlePhase, player_expected: bool) -> Self {
        match (phase, player_expected) {
            (BattlePhase::Ended(outcome), _) => Self::AlreadyEnded(outcome),
            (phase, true) => Self::NotPlayerTurn(phase),
            (phase, false) => Self::NotMonsterTurn(phase),
        }
    }
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotPlayerTurn(_) => "BATTLE_NOT_PLAYER_TURN",
            Self::NotMonsterTurn(_) => "BATTLE_NOT_MONSTER_TURN",
            Self::AlreadyEnded(_) => "BATTLE_ALREADY_ENDED",
        }
    }
}
