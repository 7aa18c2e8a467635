mod common;

use common::{player, templates};
use game_core::combat::{
    attempt_flee, calculate_damage, calculate_hit_chance, flee_chance, resolve_attack,
};
use game_core::{AttackOutcome, AttackRolls, Combatant, Monster};

#[test]
fn minimum_damage_when_defense_exceeds_attack() {
    let attacker = player("weakling", 1);
    let mut defender = Monster::spawn("turtle", &templates()).unwrap();
    assert_eq!(attacker.stats().derived_stats().attack, 20);
    assert_eq!(defender.stats().derived_stats().defense, 25);

    let hp_before = defender.stats().current_hp();
    let result = resolve_attack(&attacker, &mut defender, AttackRolls::new(0.0, 99.0));

    assert_eq!(result.outcome, AttackOutcome::Hit);
    assert_eq!(result.damage, Some(1));
    assert_eq!(defender.stats().current_hp(), hp_before - 1);
}

#[test]
fn critical_multiplies_after_the_floor() {
    assert_eq!(calculate_damage(20, 25, false), 1);
    assert_eq!(calculate_damage(20, 25, true), 1);
    assert_eq!(calculate_damage(26, 15, true), 16);
    assert_eq!(calculate_damage(30, 10, true), 30);
}

#[test]
fn miss_deals_no_damage() {
    let attacker = player("beginner", 1);
    let mut defender = Monster::spawn("slime", &templates()).unwrap();
    let chance = calculate_hit_chance(
        attacker.stats().derived_stats().accuracy,
        defender.stats().derived_stats().evasion,
    );
    assert_eq!(chance, 73);

    let result = resolve_attack(&attacker, &mut defender, AttackRolls::new(73.5, 0.0));

    assert_eq!(result.outcome, AttackOutcome::Miss);
    assert_eq!(result.damage, None);
    assert!(!result.is_dead);
    assert_eq!(defender.stats().current_hp(), defender.stats().max_hp());
    assert_eq!(result.to_string(), "Hero's attack missed!");
}

#[test]
fn roll_equal_to_chance_still_hits() {
    let attacker = player("beginner", 1);
    let mut defender = Monster::spawn("slime", &templates()).unwrap();

    let result = resolve_attack(&attacker, &mut defender, AttackRolls::new(73.0, 50.0));

    assert_eq!(result.outcome, AttackOutcome::Hit);
    assert_eq!(result.damage, Some(11));
    assert_eq!(result.to_string(), "Hero attacks! 11 damage to Slime!");
}

#[test]
fn lethal_hit_reports_death_and_floors_hp() {
    let mut attacker = player("beginner", 1);
    let mut defender = Monster::spawn("slime", &templates()).unwrap();
    defender.take_damage(defender.stats().max_hp() - 5);

    let result = resolve_attack(&attacker, &mut defender, AttackRolls::new(0.0, 0.0));

    assert_eq!(result.outcome, AttackOutcome::Critical);
    assert_eq!(result.damage, Some(16));
    assert!(result.is_dead);
    assert_eq!(defender.stats().current_hp(), 0);

    // monsters hit back through the same resolver
    let result = resolve_attack(&defender, &mut attacker, AttackRolls::new(0.0, 99.0));
    assert_eq!(result.damage, Some(1));
}

#[test]
fn flee_with_dexterity_50_against_0_always_succeeds() {
    let runner = player("runner", 1);
    let statue = Monster::spawn("statue", &templates()).unwrap();

    assert_eq!(flee_chance(&runner, &statue), 100);
    for roll in [0.0, 25.0, 50.0, 99.0, 99.9999] {
        assert!(attempt_flee(&runner, &statue, roll));
    }
}
