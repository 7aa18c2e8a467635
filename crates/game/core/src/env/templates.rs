//! Template definitions and the oracle interface that serves them.
//!
//! Templates are read-only configuration supplied by the surrounding
//! application (see the `game-content` crate). The core only looks them up
//! by id when building a player or spawning a monster.

use crate::config::GameConfig;
use crate::stats::AttributeSet;

use super::error::ConfigError;

fn check_base_attributes(template: &str, attributes: &AttributeSet) -> Result<(), ConfigError> {
    match attributes.first_above(GameConfig::MAX_BASE_ATTRIBUTE) {
        Some((attribute, value)) => Err(ConfigError::AttributeOutOfRange {
            template: template.to_string(),
            attribute,
            value,
            max: GameConfig::MAX_BASE_ATTRIBUTE,
        }),
        None => Ok(()),
    }
}

/// Player class template (e.g. `"beginner"`).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassTemplate {
    pub id: String,
    pub name: String,
    pub base_attributes: AttributeSet,
}

impl ClassTemplate {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        base_attributes: AttributeSet,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            base_attributes,
        }
    }

    /// Reject base attributes above `GameConfig::MAX_BASE_ATTRIBUTE`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_base_attributes(&self.id, &self.base_attributes)
    }
}

/// Monster behaviour policy.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AiPattern {
    /// Attacks every turn.
    #[default]
    Basic,
}

/// Monster template (e.g. `"slime"`).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterTemplate {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Display color as `#rrggbb`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub color: String,
    pub level: u32,
    pub base_attributes: AttributeSet,
    pub exp_reward: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ai_pattern: AiPattern,
}

impl MonsterTemplate {
    /// Create a template with empty description/color and the basic AI.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        level: u32,
        base_attributes: AttributeSet,
        exp_reward: u64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            color: String::new(),
            level,
            base_attributes,
            exp_reward,
            ai_pattern: AiPattern::Basic,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_ai_pattern(mut self, ai_pattern: AiPattern) -> Self {
        self.ai_pattern = ai_pattern;
        self
    }

    /// Reject levels outside `[1, MAX_LEVEL]` and oversized base attributes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !GameConfig::is_valid_level(self.level) {
            return Err(ConfigError::LevelOutOfRange(self.level));
        }
        check_base_attributes(&self.id, &self.base_attributes)
    }
}

/// Read-only lookup of class and monster templates by id.
pub trait TemplateOracle {
    fn class(&self, id: &str) -> Option<&ClassTemplate>;

    fn monster(&self, id: &str) -> Option<&MonsterTemplate>;

    /// Ids of every class template, in catalog order.
    fn class_ids(&self) -> Vec<&str>;

    /// Ids of every monster template, in catalog order.
    fn monster_ids(&self) -> Vec<&str>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::AttributeKind;

    #[test]
    fn class_validation_caps_base_attributes() {
        let ok = ClassTemplate::new("mage", "Mage", AttributeSet::new(2, 4, 3, 12, 9));
        assert_eq!(ok.validate(), Ok(()));

        let huge =
            ClassTemplate::new("giant", "Giant", AttributeSet::new(10, 0, 300_000_000, 0, 0));
        assert_eq!(
            huge.validate(),
            Err(ConfigError::AttributeOutOfRange {
                template: "giant".to_string(),
                attribute: AttributeKind::Vit,
                value: 300_000_000,
                max: GameConfig::MAX_BASE_ATTRIBUTE,
            })
        );
    }

    #[test]
    fn monster_validation_checks_level_first() {
        let zero = MonsterTemplate::new("egg", "Egg", 0, AttributeSet::uniform(u32::MAX), 1);
        assert_eq!(zero.validate(), Err(ConfigError::LevelOutOfRange(0)));

        let edge = MonsterTemplate::new(
            "wall",
            "Wall",
            1,
            AttributeSet::uniform(GameConfig::MAX_BASE_ATTRIBUTE),
            1,
        );
        assert_eq!(edge.validate(), Ok(()));
    }
}
