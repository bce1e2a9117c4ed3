//! Common error infrastructure for padel-core.
//!
//! Scoring itself cannot fail: every input is drawn from a closed enum. Errors
//! only appear at the edges (building a [`MatchConfig`](crate::MatchConfig)
//! and checking a snapshot against its invariants), and each of them is
//! classified through [`ScoreError`] so frontends can decide how loudly to
//! report it.

/// Severity level of an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should be corrected by whoever supplied it.
    ///
    /// Examples: even best-of count, blank player name
    Validation,

    /// Unexpected state inconsistency.
    ///
    /// These indicate bugs in the transition rules and should be investigated.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }
}

/// Common trait for all padel-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for the Display/Error impl
/// - Classify severity by who has to fix it, not by impact
pub trait ScoreError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}
