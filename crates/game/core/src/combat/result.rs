//! Combat result types and attack resolution.

use core::fmt;

use crate::actor::Combatant;

use super::damage::calculate_damage;
use super::hit::{calculate_hit_chance, check_critical, check_hit};

/// Outcome of an attack attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AttackOutcome {
    /// Attack missed the target.
    Miss,
    /// Attack hit the target.
    Hit,
    /// Critical hit (damage × 1.5).
    Critical,
}

/// The two uniform `[0, 100)` draws an attack may consume.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttackRolls {
    pub hit: f64,
    pub critical: f64,
}

impl AttackRolls {
    pub const fn new(hit: f64, critical: f64) -> Self {
        Self { hit, critical }
    }
}

/// Result of a combat resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    /// Whether the attack hit, missed, or was critical.
    pub outcome: AttackOutcome,

    pub attacker: String,

    pub defender: String,

    /// Damage dealt (None if miss).
    pub damage: Option<u32>,

    /// Whether the defender is at 0 HP after this attack.
    pub is_dead: bool,
}

impl fmt::Display for AttackResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.outcome, self.damage) {
            (AttackOutcome::Critical, Some(damage)) => write!(
                f,
                "{} lands a critical hit! {} damage to {}!",
                self.attacker, damage, self.defender
            ),
            (AttackOutcome::Hit, Some(damage)) => write!(
                f,
                "{} attacks! {} damage to {}!",
                self.attacker, damage, self.defender
            ),
            _ => write!(f, "{}'s attack missed!", self.attacker),
        }
    }
}

/// Resolve a complete attack and apply its damage to `defender`.
///
/// 1. Hit check: miss when `rolls.hit` exceeds accuracy - evasion
/// 2. Critical check against the attacker's critical rate
/// 3. Damage: attack - defense, minimum 1, × 1.5 on critical
/// 4. Defender HP reduced, floored at 0
pub fn resolve_attack<A, D>(attacker: &A, defender: &mut D, rolls: AttackRolls) -> AttackResult
where
    A: Combatant + ?Sized,
    D: Combatant + ?Sized,
{
    let attacker_stats = attacker.stats().derived_stats();
    let defender_stats = defender.stats().derived_stats();

    let hit_chance = calculate_hit_chance(attacker_stats.accuracy, defender_stats.evasion);
    if !check_hit(hit_chance, rolls.hit) {
        return AttackResult {
            outcome: AttackOutcome::Miss,
            attacker: attacker.name().to_string(),
            defender: defender.name().to_string(),
            damage: None,
            is_dead: defender.is_dead(),
        };
    }

    let is_critical = check_critical(attacker_stats.critical, rolls.critical);
    let damage = calculate_damage(attacker_stats.attack, defender_stats.defense, is_critical);
    let is_dead = defender.take_damage(damage);

    AttackResult {
        outcome: if is_critical {
            AttackOutcome::Critical
        } else {
            AttackOutcome::Hit
        },
        attacker: attacker.name().to_string(),
        defender: defender.name().to_string(),
        damage: Some(damage),
        is_dead,
    }
}
