//! Escape from battle.

use crate::actor::Combatant;
use crate::config::GameConfig;

/// Flee chance for `player` escaping `monster`.
///
/// # Formula
///
/// ```text
/// chance = 50 + (player DEX - monster DEX)
/// ```
///
/// Uses final dexterity attributes. Unclamped: the chance may exceed 100
/// (always escapes) or fall below 0 (never escapes).
pub fn flee_chance(
    player: &(impl Combatant + ?Sized),
    monster: &(impl Combatant + ?Sized),
) -> i64 {
    let player_dex = i64::from(player.stats().final_attributes().dex);
    let monster_dex = i64::from(monster.stats().final_attributes().dex);
    GameConfig::FLEE_BASE_CHANCE + (player_dex - monster_dex)
}

/// Returns true if the escape succeeds. `roll` is a uniform draw in `[0, 100)`.
pub fn attempt_flee(
    player: &(impl Combatant + ?Sized),
    monster: &(impl Combatant + ?Sized),
    roll: f64,
) -> bool {
    roll < flee_chance(player, monster) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::{Monster, Player};
    use crate::env::{ClassTemplate, MonsterTemplate, TemplateSnapshot};
    use crate::stats::AttributeSet;

    fn templates() -> TemplateSnapshot {
        TemplateSnapshot::new(
            vec![
                ClassTemplate::new("runner", "Runner", AttributeSet::new(0, 50, 0, 0, 0)),
                ClassTemplate::new("sloth", "Sloth", AttributeSet::ZERO),
            ],
            vec![
                MonsterTemplate::new("statue", "Statue", 1, AttributeSet::ZERO, 1),
                MonsterTemplate::new("hare", "Hare", 1, AttributeSet::new(0, 80, 0, 0, 0), 1),
            ],
        )
    }

    #[test]
    fn high_dexterity_always_escapes() {
        let templates = templates();
        let player = Player::new("Hero", "runner", 1, &templates).unwrap();
        let monster = Monster::spawn("statue", &templates).unwrap();

        assert_eq!(flee_chance(&player, &monster), 100);
        assert!(attempt_flee(&player, &monster, 0.0));
        assert!(attempt_flee(&player, &monster, 99.999));
    }

    #[test]
    fn chance_is_not_clamped() {
        let templates = templates();
        let player = Player::new("Hero", "sloth", 1, &templates).unwrap();
        let monster = Monster::spawn("hare", &templates).unwrap();

        assert_eq!(flee_chance(&player, &monster), -30);
        assert!(!attempt_flee(&player, &monster, 0.0));
    }

    #[test]
    fn roll_must_be_strictly_below_chance() {
        let templates = templates();
        let player = Player::new("Hero", "sloth", 1, &templates).unwrap();
        let monster = Monster::spawn("statue", &templates).unwrap();

        assert_eq!(flee_chance(&player, &monster), 50);
        assert!(attempt_flee(&player, &monster, 49.9));
        assert!(!attempt_flee(&player, &monster, 50.0));
    }
}
