//! Attribute point allocation.
//!
//! Invariant: `available_points == point_budget(level) - bonus.total()` after
//! every operation. Failed operations leave the stat block untouched.

use crate::error::{ErrorSeverity, GameError};

use super::attributes::AttributeKind;
use super::character::CharacterStats;

/// Why an allocation or de-allocation was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AllocationError {
    #[error("allocation amount must be positive")]
    ZeroAmount,

    #[error("requested {requested} points but only {available} are available")]
    InsufficientPoints { requested: u32, available: u32 },

    #[error("cannot remove {requested} points from {attribute}: only {allocated} allocated")]
    InsufficientBonus {
        attribute: AttributeKind,
        requested: u32,
        allocated: u32,
    },

    #[error("unknown attribute '{0}'")]
    UnknownAttribute(String),
}

impl GameError for AllocationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroAmount => "ALLOCATION_ZERO_AMOUNT",
            Self::InsufficientPoints { .. } => "ALLOCATION_INSUFFICIENT_POINTS",
            Self::InsufficientBonus { .. } => "ALLOCATION_INSUFFICIENT_BONUS",
            Self::UnknownAttribute(_) => "ALLOCATION_UNKNOWN_ATTRIBUTE",
        }
    }
}

impl CharacterStats {
    /// Move `amount` available points into `attribute`.
    pub fn try_allocate(
        &mut self,
        attribute: AttributeKind,
        amount: u32,
    ) -> Result<(), AllocationError> {
        if amount == 0 {
            return Err(AllocationError::ZeroAmount);
        }
        if self.available_points < amount {
            return Err(AllocationError::InsufficientPoints {
                requested: amount,
                available: self.available_points,
            });
        }

        *self.bonus_attributes.get_mut(attribute) += amount;
        self.available_points -= amount;
        Ok(())
    }

    /// Return `amount` points from `attribute` to the available pool.
    pub fn try_deallocate(
        &mut self,
        attribute: AttributeKind,
        amount: u32,
    ) -> Result<(), AllocationError> {
        if amount == 0 {
            return Err(AllocationError::ZeroAmount);
        }
        let allocated = self.bonus_attributes.get(attribute);
        if allocated < amount {
            return Err(AllocationError::InsufficientBonus {
                attribute,
                requested: amount,
                allocated,
            });
        }

        *self.bonus_attributes.get_mut(attribute) -= amount;
        self.available_points += amount;
        Ok(())
    }

    /// Allocate by attribute key (`"str"`, `"dex"`, ...).
    pub fn allocate_by_key(&mut self, key: &str, amount: u32) -> Result<(), AllocationError> {
        let attribute = parse_key(key)?;
        self.try_allocate(attribute, amount)
    }

    /// De-allocate by attribute key (`"str"`, `"dex"`, ...).
    pub fn deallocate_by_key(&mut self, key: &str, amount: u32) -> Result<(), AllocationError> {
        let attribute = parse_key(key)?;
        self.try_deallocate(attribute, amount)
    }

    /// Returns true if the points were allocated.
    pub fn allocate_point(&mut self, attribute: AttributeKind, amount: u32) -> bool {
        self.try_allocate(attribute, amount).is_ok()
    }

    /// Returns true if the points were returned to the pool.
    pub fn deallocate_point(&mut self, attribute: AttributeKind, amount: u32) -> bool {
        self.try_deallocate(attribute, amount).is_ok()
    }

    /// Clear every allocation and recompute the available pool from level.
    pub fn reset_allocations(&mut self) {
        self.bonus_attributes = super::AttributeSet::ZERO;
        self.available_points = self.computed_available_points();
    }
}

fn parse_key(key: &str) -> Result<AttributeKind, AllocationError> {
    key.parse()
        .map_err(|_| AllocationError::UnknownAttribute(key.to_string()))
}
