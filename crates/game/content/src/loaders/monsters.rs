//! Monster catalog loader.

use std::path::Path;

use game_core::MonsterTemplate;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, ensure_unique_ids, read_file};

/// Monster catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonsterCatalog {
    pub monsters: Vec<MonsterTemplate>,
}

/// Loader for monster templates from RON files.
pub struct MonsterLoader;

impl MonsterLoader {
    /// Load monster templates from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<MonsterTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid monster catalog {}: {}", path.display(), e))
    }

    /// Parse and validate a monster catalog from RON text.
    ///
    /// Every entry must be spawnable: non-blank id, level in
    /// `[1, MAX_LEVEL]` and base attributes within `MAX_BASE_ATTRIBUTE`.
    pub fn parse(content: &str) -> LoadResult<Vec<MonsterTemplate>> {
        let catalog: MonsterCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse monster catalog RON: {}", e))?;

        ensure_unique_ids("monster", catalog.monsters.iter().map(|m| m.id.as_str()))?;
        for monster in &catalog.monsters {
            if monster.id.trim().is_empty() {
                anyhow::bail!("Monster '{}' has an empty id", monster.name);
            }
            monster
                .validate()
                .map_err(|e| anyhow::anyhow!("Monster '{}' is invalid: {}", monster.id, e))?;
        }

        Ok(catalog.monsters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::AiPattern;

    #[test]
    fn optional_fields_default() {
        let monsters = MonsterLoader::parse(
            r#"(
                monsters: [
                    (
                        id: "bat",
                        name: "Bat",
                        level: 2,
                        base_attributes: (str: 2, dex: 7, vit: 2, int: 1, spr: 1),
                        exp_reward: 15,
                    ),
                ],
            )"#,
        )
        .unwrap();

        let bat = &monsters[0];
        assert_eq!(bat.description, "");
        assert_eq!(bat.color, "");
        assert_eq!(bat.ai_pattern, AiPattern::Basic);
        assert_eq!(bat.exp_reward, 15);
    }

    #[test]
    fn rejects_level_zero() {
        let err = MonsterLoader::parse(
            r#"(monsters: [
                (id: "egg", name: "Egg", level: 0,
                 base_attributes: (str: 0, dex: 0, vit: 1, int: 0, spr: 0), exp_reward: 1),
            ])"#,
        )
        .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("Monster 'egg' is invalid"));
        assert!(message.contains("level 0 is out of range"));
    }

    #[test]
    fn rejects_blank_id() {
        let err = MonsterLoader::parse(
            r#"(monsters: [
                (id: "  ", name: "Ghost", level: 3,
                 base_attributes: (str: 1, dex: 1, vit: 1, int: 1, spr: 1), exp_reward: 5),
            ])"#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("Monster 'Ghost' has an empty id"));
    }

    #[test]
    fn rejects_oversized_attributes() {
        let err = MonsterLoader::parse(
            r#"(monsters: [
                (id: "titan", name: "Titan", level: 5,
                 base_attributes: (str: 1, dex: 1, vit: 300000000, int: 1, spr: 1), exp_reward: 5),
            ])"#,
        )
        .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("Monster 'titan' is invalid"));
        assert!(message.contains("300000000 exceeds the maximum"));
    }
}
