//! Errors raised by the ladder engine.

use thiserror::Error;

/// Validation failures of engine operations.
///
/// All of these indicate a caller bug (e.g. a stale selection), never a
/// transient condition, so none of them is worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DuelError {
    /// `start` was given fewer than two options.
    #[error("at least 2 candidates are required, got {found}")]
    InsufficientCandidates { found: usize },

    /// `pick` named a candidate outside the current pair.
    #[error("'{label}' is not part of the current pair")]
    InvalidSelection { label: String },

    /// `revive` named a candidate that is not eliminated.
    #[error("'{label}' is not in the graveyard")]
    CandidateNotInGraveyard { label: String },

    /// A mutating call was made after the ladder completed.
    #[error("tournament already finished")]
    TournamentFinished,

    /// A stored ladder could not be rebuilt.
    #[error("inconsistent ladder snapshot: {reason}")]
    InvalidSnapshot { reason: String },
}

/// Result type for engine operations.
pub type DuelResult<T> = Result<T, DuelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = DuelError::InsufficientCandidates { found: 1 };
        assert_eq!(err.to_string(), "at least 2 candidates are required, got 1");

        let err = DuelError::InvalidSelection {
            label: "Oslo".into(),
        };
        assert_eq!(err.to_string(), "'Oslo' is not part of the current pair");

        let err = DuelError::CandidateNotInGraveyard {
            label: "Rest".into(),
        };
        assert_eq!(err.to_string(), "'Rest' is not in the graveyard");

        assert_eq!(
            DuelError::TournamentFinished.to_string(),
            "tournament already finished"
        );

        let err = DuelError::InvalidSnapshot {
            reason: "no active candidates".into(),
        };
        assert_eq!(
            err.to_string(),
            "inconsistent ladder snapshot: no active candidates"
        );
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DuelError>();
    }
}
