//! Damage calculation and application.

use crate::config::GameConfig;

/// Calculate damage from an attack.
///
/// # Formula
///
/// ```text
/// damage = max(MIN_DAMAGE, attack - defense)
///
/// if critical:
///     damage = floor(damage × 1.5)
/// ```
///
/// The minimum is applied before the critical multiplier.
pub fn calculate_damage(attack: u32, defense: u32, is_critical: bool) -> u32 {
    let damage = attack.saturating_sub(defense).max(GameConfig::MIN_DAMAGE);

    if is_critical {
        let scaled = u64::from(damage) * u64::from(GameConfig::CRIT_MULTIPLIER_TENTHS) / 10;
        u32::try_from(scaled).unwrap_or(u32::MAX)
    } else {
        damage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defense_subtracts_from_attack() {
        assert_eq!(calculate_damage(26, 18, false), 8);
    }

    #[test]
    fn defense_above_attack_still_deals_one() {
        assert_eq!(calculate_damage(20, 25, false), 1);
        assert_eq!(calculate_damage(0, 0, false), 1);
    }

    #[test]
    fn critical_floors_after_minimum() {
        assert_eq!(calculate_damage(26, 18, true), 12);
        assert_eq!(calculate_damage(27, 18, true), 13);
        // max(1, -5) = 1, then floor(1.5) = 1
        assert_eq!(calculate_damage(20, 25, true), 1);
        assert_eq!(calculate_damage(22, 20, true), 3);
    }

    #[test]
    fn critical_on_huge_attack_saturates() {
        assert_eq!(calculate_damage(u32::MAX, 0, true), u32::MAX);
    }
}
