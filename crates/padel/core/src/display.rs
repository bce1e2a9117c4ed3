//! Score labels derived from a snapshot.
use crate::state::{MatchState, Team};

/// Label for a raw point count outside deuce.
pub fn point_label(points: u8) -> &'static str {
    match points {
        0 => "0",
        1 => "15",
        2 => "30",
        _ => "40",
    }
}

/// Current game score as `(team A, team B)` labels.
///
/// During a tiebreak the raw tiebreak points are shown instead.
pub fn game_score_label(state: &MatchState) -> (String, String) {
    if state.in_tiebreak {
        return (state.tiebreak.a.to_string(), state.tiebreak.b.to_string());
    }

    if state.is_deuce() {
        let (a, b) = match state.advantage {
            None => ("40", "40"),
            Some(Team::A) => ("AD", "40"),
            Some(Team::B) => ("40", "AD"),
        };
        return (a.to_string(), b.to_string());
    }

    (
        point_label(state.points.a).to_string(),
        point_label(state.points.b).to_string(),
    )
}
