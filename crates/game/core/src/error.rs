//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (`ConfigError`, `AllocationError`, `BattleError`)
//! live next to the code that raises them; this module provides the shared
//! classification they all implement.

/// Severity level of an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: allocating more points than available, acting out of turn
    Validation,

    /// Construction cannot continue.
    ///
    /// Examples: unknown class or monster template
    Fatal,
}

impl ErrorSeverity {
    /// Returns a lowercase label for log fields.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Error codes are `SCREAMING_SNAKE_CASE`, prefixed by the error family
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}
