//! Derived Stats - combat values computed from attributes and level.
//!
//! These are NOT stored - always recomputed from the final attributes when
//! needed, so allocation and level changes are reflected immediately.

use super::attributes::AttributeSet;

/// Derived combat statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedStats {
    /// Maximum health.
    pub hp: u32,

    /// Maximum mana.
    pub mp: u32,

    /// Physical attack power.
    pub attack: u32,

    /// Physical defense, subtracted from incoming attack.
    pub defense: u32,

    /// Hit rating (percent scale).
    pub accuracy: u32,

    /// Dodge rating (percent scale), subtracted from the attacker's accuracy.
    pub evasion: u32,

    /// Critical strike chance in percent.
    pub critical: u32,

    /// Resistance to spirit attacks.
    pub spirit_resist: u32,
}

impl DerivedStats {
    /// Compute derived stats from final attributes and level.
    ///
    /// Formulas (floored once, evaluated in tenths):
    /// - HP: 100 + VIT×15 + Level×10
    /// - MP: 50 + INT×10 + SPR×5 + Level×5
    /// - Attack: 10 + STR×2.5 + DEX×0.5 + Level
    /// - Defense: 5 + VIT×2 + STR×0.5 + Level×0.5
    /// - Accuracy: 75 + DEX×0.8 + Level×0.2
    /// - Evasion: 5 + DEX×0.5 + Level×0.1
    /// - Critical: 5 + DEX×0.3 + STR×0.1
    /// - SpiritResist: SPR×2 + INT×0.5 + Level×0.3
    ///
    /// Evaluated in `u64`; results beyond `u32::MAX` saturate.
    pub fn compute(attrs: &AttributeSet, level: u32) -> Self {
        let [str, dex, vit, int, spr, level] =
            [attrs.str, attrs.dex, attrs.vit, attrs.int, attrs.spr, level].map(u64::from);

        Self {
            hp: whole(100 + vit * 15 + level * 10),
            mp: whole(50 + int * 10 + spr * 5 + level * 5),
            attack: tenths(100 + str * 25 + dex * 5 + level * 10),
            defense: tenths(50 + vit * 20 + str * 5 + level * 5),
            accuracy: tenths(750 + dex * 8 + level * 2),
            evasion: tenths(50 + dex * 5 + level),
            critical: tenths(50 + dex * 3 + str),
            spirit_resist: tenths(spr * 20 + int * 5 + level * 3),
        }
    }
}

fn whole(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Floor a value expressed in tenths.
fn tenths(value: u64) -> u32 {
    whole(value / 10)
}

/// Identifies one derived stat, for presentation metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum DerivedStatKind {
    Hp,
    Mp,
    Attack,
    Defense,
    Accuracy,
    Evasion,
    Critical,
    SpiritResist,
}

impl DerivedStatKind {
    pub const ALL: [DerivedStatKind; 8] = [
        Self::Hp,
        Self::Mp,
        Self::Attack,
        Self::Defense,
        Self::Accuracy,
        Self::Evasion,
        Self::Critical,
        Self::SpiritResist,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Hp => "HP",
            Self::Mp => "MP",
            Self::Attack => "Attack",
            Self::Defense => "Defense",
            Self::Accuracy => "Accuracy",
            Self::Evasion => "Evasion",
            Self::Critical => "Critical",
            Self::SpiritResist => "Spirit Resist",
        }
    }

    /// Suffix shown after the value ("%" for chance-like stats).
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Accuracy | Self::Evasion | Self::Critical => "%",
            _ => "",
        }
    }

    pub const fn get(&self, stats: &DerivedStats) -> u32 {
        match self {
            Self::Hp => stats.hp,
            Self::Mp => stats.mp,
            Self::Attack => stats.attack,
            Self::Defense => stats.defense,
            Self::Accuracy => stats.accuracy,
            Self::Evasion => stats.evasion,
            Self::Critical => stats.critical,
            Self::SpiritResist => stats.spirit_resist,
        }
    }
}
