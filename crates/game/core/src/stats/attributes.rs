//! Primary attributes - the five numbers every combatant is built from.
//!
//! Attribute keys round-trip through their short lowercase form
//! (`"str"`, `"dex"`, `"vit"`, `"int"`, `"spr"`), which is also the form
//! used in content files and persisted data.

/// One of the five primary attributes.
#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum AttributeKind {
    /// Strength: physical attack and defense.
    Str,
    /// Dexterity: accuracy, evasion, critical rate.
    Dex,
    /// Vitality: HP and physical defense.
    Vit,
    /// Intellect: MP and magic power.
    Int,
    /// Spirit: MP recovery and spirit resistance.
    Spr,
}

impl AttributeKind {
    /// All attributes in display order.
    pub const ALL: [AttributeKind; 5] = [Self::Str, Self::Dex, Self::Vit, Self::Int, Self::Spr];

    /// Upper-case label used on status screens.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Str => "STR",
            Self::Dex => "DEX",
            Self::Vit => "VIT",
            Self::Int => "INT",
            Self::Spr => "SPR",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Str => "Strength",
            Self::Dex => "Dexterity",
            Self::Vit => "Vitality",
            Self::Int => "Intellect",
            Self::Spr => "Spirit",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::Str => "Affects physical attack and defense",
            Self::Dex => "Affects accuracy, evasion and critical rate",
            Self::Vit => "Affects HP and physical defense",
            Self::Int => "Affects MP and magic attack",
            Self::Spr => "Affects MP recovery and spirit resistance",
        }
    }
}

/// A full set of the five attributes. Values are never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeSet {
    pub str: u32,
    pub dex: u32,
    pub vit: u32,
    pub int: u32,
    pub spr: u32,
}

impl AttributeSet {
    /// All attributes zero.
    pub const ZERO: Self = Self::new(0, 0, 0, 0, 0);

    pub const fn new(str: u32, dex: u32, vit: u32, int: u32, spr: u32) -> Self {
        Self {
            str,
            dex,
            vit,
            int,
            spr,
        }
    }

    /// Every attribute set to `value`.
    pub const fn uniform(value: u32) -> Self {
        Self::new(value, value, value, value, value)
    }

    pub const fn get(&self, kind: AttributeKind) -> u32 {
        match kind {
            AttributeKind::Str => self.str,
            AttributeKind::Dex => self.dex,
            AttributeKind::Vit => self.vit,
            AttributeKind::Int => self.int,
            AttributeKind::Spr => self.spr,
        }
    }

    pub fn get_mut(&mut self, kind: AttributeKind) -> &mut u32 {
        match kind {
            AttributeKind::Str => &mut self.str,
            AttributeKind::Dex => &mut self.dex,
            AttributeKind::Vit => &mut self.vit,
            AttributeKind::Int => &mut self.int,
            AttributeKind::Spr => &mut self.spr,
        }
    }

    /// Sum of all five attributes, saturating at `u32::MAX`.
    pub const fn total(&self) -> u32 {
        self.str
            .saturating_add(self.dex)
            .saturating_add(self.vit)
            .saturating_add(self.int)
            .saturating_add(self.spr)
    }

    /// Sum of all five attributes, or `None` if it does not fit in a `u32`.
    pub fn checked_total(&self) -> Option<u32> {
        self.str
            .checked_add(self.dex)?
            .checked_add(self.vit)?
            .checked_add(self.int)?
            .checked_add(self.spr)
    }

    /// First attribute whose value exceeds `cap`, in display order.
    pub fn first_above(&self, cap: u32) -> Option<(AttributeKind, u32)> {
        self.iter().find(|&(_, value)| value > cap)
    }

    /// Elementwise sum, saturating.
    #[must_use]
    pub const fn combined(&self, other: &AttributeSet) -> Self {
        Self::new(
            self.str.saturating_add(other.str),
            self.dex.saturating_add(other.dex),
            self.vit.saturating_add(other.vit),
            self.int.saturating_add(other.int),
            self.spr.saturating_add(other.spr),
        )
    }

    /// Iterate `(kind, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeKind, u32)> + '_ {
        AttributeKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }
}
