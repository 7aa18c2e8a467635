//! Configuration errors.
//!
//! Raised while building players and monsters from template data. These are
//! fatal for the construction that raised them: the caller must not continue
//! with a half-built character or battle.

use crate::error::{ErrorSeverity, GameError};
use crate::stats::AttributeKind;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// No class template with this id.
    #[error("unknown class template '{0}'")]
    UnknownClass(String),

    /// No monster template with this id.
    #[error("unknown monster template '{0}'")]
    UnknownMonster(String),

    /// Level outside `[1, MAX_LEVEL]`.
    #[error("level {0} is out of range")]
    LevelOutOfRange(u32),

    /// Template attribute above `GameConfig::MAX_BASE_ATTRIBUTE`.
    #[error("{template}: base {attribute} of {value} exceeds the maximum of {max}")]
    AttributeOutOfRange {
        template: String,
        attribute: AttributeKind,
        value: u32,
        max: u32,
    },

    /// Allocated bonus exceeds what the level grants.
    #[error("{allocated} bonus points allocated but level grants only {budget}")]
    OverAllocated { allocated: u32, budget: u32 },
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use ConfigError::*;
        match self {
            UnknownClass(_) => "CONFIG_UNKNOWN_CLASS",
            UnknownMonster(_) => "CONFIG_UNKNOWN_MONSTER",
            LevelOutOfRange(_) => "CONFIG_LEVEL_OUT_OF_RANGE",
            AttributeOutOfRange { .. } => "CONFIG_ATTRIBUTE_OUT_OF_RANGE",
            OverAllocated { .. } => "CONFIG_OVER_ALLOCATED",
        }
    }
}
