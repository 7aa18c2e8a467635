//! Client runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use game_core::{AttributeKind, GameConfig};

/// Everything the `battle` binary needs to run a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub seed: u64,
    pub player_class: String,
    pub player_level: u32,
    pub player_name: String,
    /// Monster ids fought in order.
    pub monsters: Vec<String>,
    /// Flee once current HP drops below this share of max HP.
    pub flee_below_hp_percent: Option<u32>,
    /// Attribute that receives every point gained on level-up.
    pub auto_allocate: Option<AttributeKind>,
    /// Round cap per encounter; one round is a player action plus the reply.
    pub max_rounds: u32,
    /// Visit the inn between encounters.
    pub rest_between_battles: bool,
    pub content_dir: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            player_class: "beginner".to_string(),
            player_level: 1,
            player_name: game_core::Player::DEFAULT_NAME.to_string(),
            monsters: vec!["slime".to_string(), "goblin".to_string()],
            flee_below_hp_percent: None,
            auto_allocate: None,
            max_rounds: 100,
            rest_between_battles: true,
            content_dir: None,
            log_dir: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BATTLE_SEED` - Seed for every roll in the session (default: 0)
    /// - `PLAYER_CLASS` - Class template id (default: beginner)
    /// - `PLAYER_LEVEL` - Starting level, clamped to 1..=100 (default: 1)
    /// - `PLAYER_NAME` - Display name (default: Player)
    /// - `BATTLE_MONSTERS` - Comma separated monster ids (default: slime,goblin)
    /// - `FLEE_BELOW_HP_PERCENT` - Flee threshold, unset to never flee
    /// - `AUTO_ALLOCATE` - Attribute key (str/dex/vit/int/spr) for new points
    /// - `MAX_ROUNDS` - Round cap per encounter (default: 100)
    /// - `REST_BETWEEN_BATTLES` - Full recovery between encounters (default: true)
    /// - `CONTENT_DIR` - Directory holding classes.ron / monsters.ron
    /// - `LOG_DIR` - Directory for the log file, unset for stderr only
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(seed) = read_var::<u64>(&lookup, "BATTLE_SEED") {
            config.seed = seed;
        }

        if let Some(class) = lookup("PLAYER_CLASS").filter(|s| !s.trim().is_empty()) {
            config.player_class = class.trim().to_string();
        }

        if let Some(level) = read_var::<u32>(&lookup, "PLAYER_LEVEL") {
            config.player_level = level.clamp(1, GameConfig::MAX_LEVEL);
        }

        if let Some(name) = lookup("PLAYER_NAME").filter(|s| !s.trim().is_empty()) {
            config.player_name = name;
        }

        if let Some(list) = lookup("BATTLE_MONSTERS") {
            config.monsters = list
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect();
        }

        config.flee_below_hp_percent =
            read_var::<u32>(&lookup, "FLEE_BELOW_HP_PERCENT").map(|p| p.min(100));

        config.auto_allocate = read_var::<AttributeKind>(&lookup, "AUTO_ALLOCATE");

        if let Some(rounds) = read_var::<u32>(&lookup, "MAX_ROUNDS") {
            config.max_rounds = rounds.max(1);
        }

        if let Some(rest) = read_var::<bool>(&lookup, "REST_BETWEEN_BATTLES") {
            config.rest_between_battles = rest;
        }

        config.content_dir = lookup("CONTENT_DIR").map(PathBuf::from);
        config.log_dir = lookup("LOG_DIR").map(PathBuf::from);

        config
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> ClientConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClientConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        assert_eq!(config_from(&[]), ClientConfig::default());
    }

    #[test]
    fn parses_every_variable() {
        let config = config_from(&[
            ("BATTLE_SEED", "42"),
            ("PLAYER_CLASS", "warrior"),
            ("PLAYER_LEVEL", "7"),
            ("PLAYER_NAME", "Aria"),
            ("BATTLE_MONSTERS", "goblin, slime,,goblin"),
            ("FLEE_BELOW_HP_PERCENT", "30"),
            ("AUTO_ALLOCATE", "VIT"),
            ("MAX_ROUNDS", "0"),
            ("REST_BETWEEN_BATTLES", "false"),
            ("CONTENT_DIR", "data"),
        ]);

        assert_eq!(config.seed, 42);
        assert_eq!(config.player_class, "warrior");
        assert_eq!(config.player_level, 7);
        assert_eq!(config.player_name, "Aria");
        assert_eq!(config.monsters, vec!["goblin", "slime", "goblin"]);
        assert_eq!(config.flee_below_hp_percent, Some(30));
        assert_eq!(config.auto_allocate, Some(AttributeKind::Vit));
        assert_eq!(config.max_rounds, 1);
        assert!(!config.rest_between_battles);
        assert_eq!(config.content_dir, Some(PathBuf::from("data")));
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = config_from(&[
            ("BATTLE_SEED", "abc"),
            ("PLAYER_LEVEL", "500"),
            ("AUTO_ALLOCATE", "luck"),
        ]);

        assert_eq!(config.seed, 0);
        assert_eq!(config.player_level, GameConfig::MAX_LEVEL);
        assert_eq!(config.auto_allocate, None);
    }
}
