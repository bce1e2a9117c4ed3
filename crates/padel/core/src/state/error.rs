//! Snapshot invariant violations.
//!
//! Correct transitions never produce these; the engine asserts on them in
//! debug builds and the tests check for their absence.

use crate::error::{ErrorSeverity, ScoreError};
use crate::state::{PerTeam, Team};

/// A snapshot that breaks one of the scoring invariants.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("team {team} has {points} raw points, more than 40")]
    PointsOverflow { team: Team, points: u8 },

    #[error("team {holder} holds advantage under golden point")]
    AdvantageUnderGoldenPoint { holder: Team },

    #[error("team {holder} holds advantage at {}-{}, not deuce", .points.a, .points.b)]
    AdvantageWithoutDeuce { holder: Team, points: PerTeam<u8> },

    #[error("regular points {}-{} recorded during a tiebreak", .points.a, .points.b)]
    PointsDuringTiebreak { points: PerTeam<u8> },

    #[error("tiebreak points {}-{} left over outside a tiebreak", .tiebreak.a, .tiebreak.b)]
    StaleTiebreakPoints { tiebreak: PerTeam<u32> },

    #[error("tiebreak active at {}-{} games", .games.a, .games.b)]
    TiebreakWithoutSixAll { games: PerTeam<u32> },

    #[error("tiebreak at {}-{} should already have ended the set", .tiebreak.a, .tiebreak.b)]
    UnresolvedTiebreak { tiebreak: PerTeam<u32> },

    #[error("games at {}-{} should already have ended the set", .games.a, .games.b)]
    UnresolvedSet { games: PerTeam<u32> },

    #[error("team {winner} recorded as match winner with only {sets} sets")]
    UnearnedWinner { winner: Team, sets: u32 },
}

impl ScoreError for InvariantViolation {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        use InvariantViolation::*;
        match self {
            PointsOverflow { .. } => "STATE_POINTS_OVERFLOW",
            AdvantageUnderGoldenPoint { .. } => "STATE_ADVANTAGE_UNDER_GOLDEN_POINT",
            AdvantageWithoutDeuce { .. } => "STATE_ADVANTAGE_WITHOUT_DEUCE",
            PointsDuringTiebreak { .. } => "STATE_POINTS_DURING_TIEBREAK",
            StaleTiebreakPoints { .. } => "STATE_STALE_TIEBREAK_POINTS",
            TiebreakWithoutSixAll { .. } => "STATE_TIEBREAK_WITHOUT_SIX_ALL",
            UnresolvedTiebreak { .. } => "STATE_UNRESOLVED_TIEBREAK",
            UnresolvedSet { .. } => "STATE_UNRESOLVED_SET",
            UnearnedWinner { .. } => "STATE_UNEARNED_WINNER",
        }
    }
}
