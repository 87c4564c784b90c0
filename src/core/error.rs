//! Error types for board engine operations.
//!
//! Every failure is local and synchronous: the offending call aborts before
//! touching the board, and the engine stays usable afterwards.

use thiserror::Error;

/// Why a space argument was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpaceFault {
    /// Index outside `0..=13`.
    OutOfRange,
    /// A store was passed where a pit is required.
    Store,
    /// The requested stone count was negative.
    NegativeCount { count: i64 },
    /// The resulting stone count does not fit in an `i64`.
    Overflow,
}

impl std::fmt::Display for SpaceFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpaceFault::OutOfRange => write!(f, "must be between 0 and 13"),
            SpaceFault::Store => write!(f, "stores cannot be sown"),
            SpaceFault::NegativeCount { count } => write!(f, "count {count} is negative"),
            SpaceFault::Overflow => write!(f, "stone count overflows"),
        }
    }
}

/// Errors that can occur in the board engine.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// Space index out of range, a store used as a pit, or a bad count.
    #[error("Invalid space {space}: {reason}")]
    InvalidSpace { space: i64, reason: SpaceFault },

    /// Player-relative pit index outside 0-5.
    #[error("Invalid pit {pit} (must be 0-5)")]
    InvalidPit { pit: i64 },

    /// Notification text longer than the display budget.
    #[error("Notification is {len} characters, limit is {max}")]
    InvalidNotification { len: usize, max: usize },

    /// Mutating call on a finished game.
    #[error("Game is over")]
    GameOver,

    /// Configuration failed to parse or validate.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl EngineError {
    pub(crate) fn out_of_range(space: i64) -> Self {
        Self::InvalidSpace {
            space,
            reason: SpaceFault::OutOfRange,
        }
    }

    pub(crate) fn overflow(space: i64) -> Self {
        Self::InvalidSpace {
            space,
            reason: SpaceFault::Overflow,
        }
    }

    /// True for any `InvalidSpace` variant regardless of the fault.
    #[must_use]
    pub fn is_invalid_space(&self) -> bool {
        matches!(self, Self::InvalidSpace { .. })
    }
}

/// Result type alias for board engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::out_of_range(14);
        assert_eq!(err.to_string(), "Invalid space 14: must be between 0 and 13");

        let err = EngineError::InvalidSpace {
            space: 3,
            reason: SpaceFault::NegativeCount { count: -2 },
        };
        assert_eq!(err.to_string(), "Invalid space 3: count -2 is negative");

        let err = EngineError::overflow(0);
        assert_eq!(err.to_string(), "Invalid space 0: stone count overflows");

        let err = EngineError::InvalidNotification { len: 20, max: 16 };
        assert_eq!(err.to_string(), "Notification is 20 characters, limit is 16");
    }

    #[test]
    fn test_is_invalid_space() {
        assert!(EngineError::out_of_range(-1).is_invalid_space());
        assert!(!EngineError::GameOver.is_invalid_space());
        assert!(!EngineError::InvalidPit { pit: 6 }.is_invalid_space());
    }
}
