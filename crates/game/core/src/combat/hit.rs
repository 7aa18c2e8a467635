//! Hit chance and critical checks.

/// Calculate hit chance based on accuracy vs evasion.
///
/// # Formula
///
/// ```text
/// hit_chance = accuracy - evasion
/// ```
///
/// The result is deliberately left unclamped: a chance of 100 or more can
/// never miss, and a negative chance can never hit.
pub fn calculate_hit_chance(accuracy: u32, evasion: u32) -> i64 {
    i64::from(accuracy) - i64::from(evasion)
}

/// Check if an attack lands.
///
/// # Arguments
///
/// * `hit_chance` - Result of [`calculate_hit_chance`]
/// * `roll` - Uniform draw in `[0, 100)`
///
/// # Returns
///
/// `true` unless the roll exceeds the hit chance.
pub fn check_hit(hit_chance: i64, roll: f64) -> bool {
    roll <= hit_chance as f64
}

/// Check if a landed attack is critical.
///
/// `roll` is a uniform draw in `[0, 100)`; strictly below `critical` crits.
pub fn check_critical(critical: u32, roll: f64) -> bool {
    roll < f64::from(critical)
}
