//! Experience curve and leveling.
//!
//! Leveling is the only place `max_hp`/`max_mp` are refreshed outside of a
//! rest, and experience-driven level-ups fully heal the character.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::stats::CharacterStats;

/// Levels crossed by a single experience grant, ascending.
pub type LevelUps = ArrayVec<u32, { GameConfig::MAX_LEVEL as usize }>;

/// Experience needed to advance from `level` to `level + 1`.
///
/// Formula: floor(100 × 1.2^(level-1))
pub fn required_experience(level: u32) -> u64 {
    let exponent = level.saturating_sub(1) as i32;
    (GameConfig::EXP_BASE * GameConfig::EXP_GROWTH.powi(exponent)).floor() as u64
}

/// Level a fresh level-1 character reaches when granted `total` experience
/// in one go. Capped at `MAX_LEVEL`.
pub fn level_for_total_experience(total: u64) -> u32 {
    let mut level = 1;
    let mut remaining = total;
    while level < GameConfig::MAX_LEVEL {
        let threshold = required_experience(level);
        if remaining < threshold {
            break;
        }
        remaining -= threshold;
        level += 1;
    }
    level
}

/// Outcome of [`CharacterStats::gain_experience`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExperienceGain {
    pub exp_gained: u64,
    pub leveled_up_to: LevelUps,
    pub current_level: u32,
}

impl ExperienceGain {
    pub fn leveled_up(&self) -> bool {
        !self.leveled_up_to.is_empty()
    }
}

impl CharacterStats {
    /// Add experience and apply every level-up it pays for.
    ///
    /// Each level-up recomputes the threshold, the point pool and the
    /// resource maximums, then fully heals. At `MAX_LEVEL` leftover
    /// experience is kept but not applied.
    pub fn gain_experience(&mut self, amount: u64) -> ExperienceGain {
        self.current_experience = self.current_experience.saturating_add(amount);
        let mut leveled_up_to = LevelUps::new();

        while self.current_experience >= self.required_experience
            && self.level < GameConfig::MAX_LEVEL
        {
            self.current_experience -= self.required_experience;
            self.advance_level();
            self.restore_full();
            leveled_up_to.push(self.level);

            tracing::debug!(
                "{} reached level {} ({} / {} exp)",
                self.display_name,
                self.level,
                self.current_experience,
                self.required_experience
            );
        }

        ExperienceGain {
            exp_gained: amount,
            leveled_up_to,
            current_level: self.level,
        }
    }

    /// Advance one level without spending experience.
    ///
    /// Current HP/MP are kept (clamped), not healed. Returns false at
    /// `MAX_LEVEL` without mutating anything.
    pub fn level_up_manual(&mut self) -> bool {
        if self.level >= GameConfig::MAX_LEVEL {
            return false;
        }
        self.advance_level();
        true
    }

    fn advance_level(&mut self) {
        self.level += 1;
        self.required_experience = required_experience(self.level);
        self.available_points = self.computed_available_points();
        self.refresh_maximums();
    }
}
