//! Persisted character shape.
//!
//! Only the class, level and allocated bonus survive a round trip. Experience
//! progress toward the next level and current HP/MP are not kept: a restored
//! character starts at full HP/MP with its point pool recomputed.

use crate::config::GameConfig;
use crate::env::{ConfigError, TemplateOracle};
use crate::stats::AttributeSet;

use super::Player;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersistedCharacter {
    pub class_id: String,
    pub level: u32,
    pub bonus_attributes: AttributeSet,
}

impl Player {
    pub fn to_persisted(&self) -> PersistedCharacter {
        PersistedCharacter {
            class_id: self.class_id().to_string(),
            level: self.stats().level(),
            bonus_attributes: *self.stats().bonus_attributes(),
        }
    }

    /// Rebuild a player from persisted data.
    ///
    /// Rejects unknown classes, out-of-range levels and bonus allocations
    /// larger than the level's point budget, including totals that overflow.
    pub fn from_persisted(
        data: &PersistedCharacter,
        templates: &(impl TemplateOracle + ?Sized),
    ) -> Result<Self, ConfigError> {
        let budget = GameConfig::point_budget(data.level);
        if GameConfig::is_valid_level(data.level) {
            match data.bonus_attributes.checked_total() {
                Some(allocated) if allocated <= budget => {}
                // a sum past u32::MAX is reported saturated
                allocated => {
                    return Err(ConfigError::OverAllocated {
                        allocated: allocated.unwrap_or(u32::MAX),
                        budget,
                    });
                }
            }
        }

        let mut player = Player::new(Player::DEFAULT_NAME, &data.class_id, data.level, templates)?;

        let stats = player.stats_mut();
        stats.bonus_attributes = data.bonus_attributes;
        stats.available_points = stats.computed_available_points();
        stats.rest();

        Ok(player)
    }
}
