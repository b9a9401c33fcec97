//! Common error infrastructure for game-core.
//!
//! Rule violations are defined in [`crate::action::ActionError`] next to the
//! handlers that raise them. This module holds the classification shared by
//! every error the engine can surface.

/// Severity level of an error, used for logging priorities and for deciding
/// whether the caller may simply try something else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The request is legal in principle but not right now.
    ///
    /// Examples: not your turn, wrong phase, target out of range
    Recoverable,

    /// The request references something that does not exist or is malformed.
    ///
    /// Examples: unknown player, unknown item, unknown location
    Validation,

    /// Unexpected state inconsistency. Indicates a bug.
    Internal,

    /// Game state can no longer be trusted.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all game-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for the Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for this error variant, suitable for metrics and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
