use crate::env::{ConfigError, TemplateOracle};
use crate::stats::{CharacterStats, TemplateRef};

use super::Combatant;

/// A player character built from a class template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    stats: CharacterStats,
}

impl Player {
    pub const DEFAULT_NAME: &'static str = "Player";

    /// Create a level-`level` character of class `class_id`.
    pub fn new(
        name: impl Into<String>,
        class_id: &str,
        level: u32,
        templates: &(impl TemplateOracle + ?Sized),
    ) -> Result<Self, ConfigError> {
        let class = templates
            .class(class_id)
            .ok_or_else(|| ConfigError::UnknownClass(class_id.to_string()))?;

        class.validate()?;
        if !crate::config::GameConfig::is_valid_level(level) {
            return Err(ConfigError::LevelOutOfRange(level));
        }

        Ok(Self {
            stats: CharacterStats::new(
                TemplateRef::Class(class.id.clone()),
                name,
                class.base_attributes,
                level,
            ),
        })
    }

    pub fn name(&self) -> &str {
        self.stats.display_name()
    }

    /// Class template id.
    pub fn class_id(&self) -> &str {
        self.stats.template().id()
    }

    pub fn stats(&self) -> &CharacterStats {
        &self.stats
    }

    /// Mutable access for allocation, progression and recovery.
    pub fn stats_mut(&mut self) -> &mut CharacterStats {
        &mut self.stats
    }
}

impl Combatant for Player {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ClassTemplate, TemplateSnapshot};
    use crate::stats::AttributeSet;

    fn templates() -> TemplateSnapshot {
        TemplateSnapshot::new(
            vec![ClassTemplate::new("beginner", "Beginner", AttributeSet::uniform(5))],
            Vec::new(),
        )
    }

    #[test]
    fn builds_from_class_template() {
        let player = Player::new("Hero", "beginner", 1, &templates()).unwrap();

        assert_eq!(player.name(), "Hero");
        assert_eq!(player.class_id(), "beginner");
        assert_eq!(player.stats().max_hp(), 185);
        assert_eq!(player.stats().max_mp(), 130);
    }

    #[test]
    fn unknown_class_is_fatal() {
        let err = Player::new("Hero", "paladin", 1, &templates()).unwrap_err();
        assert_eq!(err, ConfigError::UnknownClass("paladin".into()));
        assert_eq!(
            crate::error::GameError::severity(&err),
            crate::error::ErrorSeverity::Fatal
        );
    }

    #[test]
    fn level_must_be_in_range() {
        assert_eq!(
            Player::new("Hero", "beginner", 0, &templates()).unwrap_err(),
            ConfigError::LevelOutOfRange(0)
        );
        assert_eq!(
            Player::new("Hero", "beginner", 101, &templates()).unwrap_err(),
            ConfigError::LevelOutOfRange(101)
        );
    }

    #[test]
    fn oversized_class_is_rejected() {
        let templates = TemplateSnapshot::new(
            vec![ClassTemplate::new("giant", "Giant", AttributeSet::uniform(u32::MAX))],
            Vec::new(),
        );

        assert!(matches!(
            Player::new("Hero", "giant", 1, &templates).unwrap_err(),
            ConfigError::AttributeOutOfRange { value: u32::MAX, .. }
        ));
    }
}
