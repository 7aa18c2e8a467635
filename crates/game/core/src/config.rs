/// Game balance constants.
///
/// Every formula in the crate reads its tunables from here so balance changes
/// stay in one place. Fractional coefficients are expressed in tenths to keep
/// resolution in exact integer arithmetic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameConfig;

impl GameConfig {
    // ===== progression =====
    /// Highest reachable level.
    pub const MAX_LEVEL: u32 = 100;
    /// Allocatable attribute points granted per level above 1.
    pub const POINTS_PER_LEVEL: u32 = 5;
    /// Experience required to leave level 1.
    pub const EXP_BASE: f64 = 100.0;
    /// Per-level growth factor of the experience curve.
    pub const EXP_GROWTH: f64 = 1.2;

    // ===== templates =====
    /// Largest base attribute a template may declare.
    pub const MAX_BASE_ATTRIBUTE: u32 = 9_999;

    // ===== combat =====
    /// Damage dealt by any hit that lands, regardless of defense.
    pub const MIN_DAMAGE: u32 = 1;
    /// Critical damage multiplier in tenths (15 = x1.5).
    pub const CRIT_MULTIPLIER_TENTHS: u32 = 15;
    /// Flee chance before the dexterity difference is applied.
    pub const FLEE_BASE_CHANCE: i64 = 50;

    /// Total allocatable points at `level`.
    pub const fn point_budget(level: u32) -> u32 {
        level.saturating_sub(1) * Self::POINTS_PER_LEVEL
    }

    /// Returns true if `level` lies in `[1, MAX_LEVEL]`.
    pub const fn is_valid_level(level: u32) -> bool {
        level >= 1 && level <= Self::MAX_LEVEL
    }
}
