use crate::env::{AiPattern, ConfigError, TemplateOracle};
use crate::stats::{CharacterStats, TemplateRef};

use super::Combatant;

/// Action a monster chooses on its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MonsterAction {
    Attack,
}

/// A monster spawned from a template for one encounter.
///
/// Monsters never allocate points, so only shared access to the stat block
/// is exposed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Monster {
    description: String,
    color: String,
    exp_reward: u64,
    ai_pattern: AiPattern,
    stats: CharacterStats,
}

impl Monster {
    /// Spawn a fresh monster at full HP/MP.
    pub fn spawn(
        monster_id: &str,
        templates: &(impl TemplateOracle + ?Sized),
    ) -> Result<Self, ConfigError> {
        let template = templates
            .monster(monster_id)
            .ok_or_else(|| ConfigError::UnknownMonster(monster_id.to_string()))?;

        template.validate()?;

        Ok(Self {
            description: template.description.clone(),
            color: template.color.clone(),
            exp_reward: template.exp_reward,
            ai_pattern: template.ai_pattern,
            stats: CharacterStats::new(
                TemplateRef::Monster(template.id.clone()),
                template.name.clone(),
                template.base_attributes,
                template.level,
            ),
        })
    }

    pub fn name(&self) -> &str {
        self.stats.display_name()
    }

    pub fn stats(&self) -> &CharacterStats {
        &self.stats
    }

    pub fn monster_id(&self) -> &str {
        self.stats.template().id()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn exp_reward(&self) -> u64 {
        self.exp_reward
    }

    pub fn ai_pattern(&self) -> AiPattern {
        self.ai_pattern
    }

    /// Choose this turn's action.
    pub fn decide_action(&self) -> MonsterAction {
        match self.ai_pattern {
            AiPattern::Basic => MonsterAction::Attack,
        }
    }
}

impl Combatant for Monster {
    fn name(&self) -> &str {
        self.stats.display_name()
    }

    fn stats(&self) -> &CharacterStats {
        &self.stats
    }

    fn take_damage(&mut self, amount: u32) -> bool {
        self.stats.take_damage(amount)
    }
}
