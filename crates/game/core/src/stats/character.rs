//! The shared stat block used by players and monsters alike.

use crate::config::GameConfig;
use crate::progression::required_experience;

use super::attributes::AttributeSet;
use super::derived::DerivedStats;

/// Template a stat block was created from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemplateRef {
    /// Player class template id (e.g. `"beginner"`).
    Class(String),
    /// Monster template id (e.g. `"slime"`).
    Monster(String),
}

impl TemplateRef {
    pub fn id(&self) -> &str {
        match self {
            TemplateRef::Class(id) | TemplateRef::Monster(id) => id,
        }
    }
}

/// Level, attributes, experience and current resources of one combatant.
///
/// Only the inputs are stored; [`DerivedStats`] are recomputed on demand.
/// `max_hp`/`max_mp` are cached snapshots refreshed on level change and rest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterStats {
    pub(crate) template: TemplateRef,
    pub(crate) display_name: String,
    pub(crate) level: u32,
    pub(crate) base_attributes: AttributeSet,
    pub(crate) bonus_attributes: AttributeSet,
    pub(crate) current_experience: u64,
    pub(crate) required_experience: u64,
    pub(crate) available_points: u32,
    pub(crate) current_hp: u32,
    pub(crate) current_mp: u32,
    pub(crate) max_hp: u32,
    pub(crate) max_mp: u32,
}

impl CharacterStats {
    /// Create a fresh stat block at `level` with no allocated points.
    ///
    /// `level` is clamped into `[1, MAX_LEVEL]`; HP and MP start full.
    pub fn new(
        template: TemplateRef,
        display_name: impl Into<String>,
        base_attributes: AttributeSet,
        level: u32,
    ) -> Self {
        let level = level.clamp(1, GameConfig::MAX_LEVEL);
        let mut stats = Self {
            template,
            display_name: display_name.into(),
            level,
            base_attributes,
            bonus_attributes: AttributeSet::ZERO,
            current_experience: 0,
            required_experience: required_experience(level),
            available_points: GameConfig::point_budget(level),
            current_hp: 0,
            current_mp: 0,
            max_hp: 0,
            max_mp: 0,
        };
        stats.refresh_maximums();
        stats.current_hp = stats.max_hp;
        stats.current_mp = stats.max_mp;
        stats
    }

    pub fn template(&self) -> &TemplateRef {
        &self.template
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn base_attributes(&self) -> &AttributeSet {
        &self.base_attributes
    }

    pub fn bonus_attributes(&self) -> &AttributeSet {
        &self.bonus_attributes
    }

    pub fn current_experience(&self) -> u64 {
        self.current_experience
    }

    pub fn required_experience(&self) -> u64 {
        self.required_experience
    }

    pub fn available_points(&self) -> u32 {
        self.available_points
    }

    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    pub fn current_mp(&self) -> u32 {
        self.current_mp
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn max_mp(&self) -> u32 {
        self.max_mp
    }

    /// Base plus bonus attributes.
    pub fn final_attributes(&self) -> AttributeSet {
        self.base_attributes.combined(&self.bonus_attributes)
    }

    pub fn derived_stats(&self) -> DerivedStats {
        DerivedStats::compute(&self.final_attributes(), self.level)
    }

    /// Points implied by level and allocations.
    pub(crate) fn computed_available_points(&self) -> u32 {
        GameConfig::point_budget(self.level).saturating_sub(self.bonus_attributes.total())
    }

    /// Recompute `max_hp`/`max_mp` from the current derived stats and clamp
    /// current values into range.
    pub(crate) fn refresh_maximums(&mut self) {
        let derived = self.derived_stats();
        self.max_hp = derived.hp;
        self.max_mp = derived.mp;
        self.current_hp = self.current_hp.min(self.max_hp);
        self.current_mp = self.current_mp.min(self.max_mp);
    }

    /// Set current HP and MP to their maximums.
    pub(crate) fn restore_full(&mut self) {
        self.current_hp = self.max_hp;
        self.current_mp = self.max_mp;
    }

    // ===== combat-session resources =====

    /// Apply damage; HP never drops below zero. Returns true if now dead.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        self.current_hp = self.current_hp.saturating_sub(amount);
        self.is_dead()
    }

    /// Restore up to `amount` HP without exceeding the maximum.
    ///
    /// Returns the HP actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.max_hp.saturating_sub(self.current_hp));
        self.current_hp += healed;
        healed
    }

    /// Restore up to `amount` MP without exceeding the maximum.
    ///
    /// Returns the MP actually restored.
    pub fn restore_mp(&mut self, amount: u32) -> u32 {
        let restored = amount.min(self.max_mp.saturating_sub(self.current_mp));
        self.current_mp += restored;
        restored
    }

    pub fn is_dead(&self) -> bool {
        self.current_hp == 0
    }

    /// Full rest: maximums are recomputed from the current attributes and
    /// both resources are refilled.
    pub fn rest(&mut self) {
        self.refresh_maximums();
        self.restore_full();
    }

    /// Everything a status screen needs in one value.
    pub fn summary(&self) -> StatsSummary {
        StatsSummary {
            level: self.level,
            template: self.template.clone(),
            available_points: self.available_points,
            primary: self.final_attributes(),
            derived: self.derived_stats(),
        }
    }
}

/// Snapshot of a character's stat block for display.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatsSummary {
    pub level: u32,
    pub template: TemplateRef,
    pub available_points: u32,
    pub primary: AttributeSet,
    pub derived: DerivedStats,
}
