use crate::config::{MatchConfig, TiebreakMode};
use crate::state::{MatchState, PerTeam, Team};

use super::{Applied, Resolution, Transition};

/// Awards one rallied point to `winner`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointAction {
    pub winner: Team,
}

impl Transition for PointAction {
    fn apply(&self, state: &MatchState, config: &MatchConfig) -> Applied {
        let mut next = *state;

        let resolution = if next.in_tiebreak {
            tiebreak_point(&mut next, self.winner, config)
        } else {
            game_point(&mut next, self.winner, config)
        };

        // Boundaries already placed the new server on the starting side.
        if !resolution.resets_side() {
            next.server_side = next.server_side.flip();
        }

        Applied::new(next, resolution)
    }
}

fn tiebreak_point(state: &mut MatchState, winner: Team, config: &MatchConfig) -> Resolution {
    state.tiebreak[winner] += 1;

    if state.tiebreak[winner] >= MatchConfig::TIEBREAK_POINTS
        && state.tiebreak.gap() >= MatchConfig::WINNING_MARGIN
    {
        return win_set(state, winner, config);
    }

    Resolution::Point { winner }
}

fn game_point(state: &mut MatchState, winner: Team, config: &MatchConfig) -> Resolution {
    let deuce = MatchConfig::DEUCE_POINTS;

    if state.points.a < deuce || state.points.b < deuce {
        state.points[winner] += 1;
        if state.points[winner] >= MatchConfig::POINTS_TO_WIN_GAME {
            return win_game(state, winner, config);
        }
        return Resolution::Point { winner };
    }

    if config.golden_point {
        return win_game(state, winner, config);
    }

    match state.advantage {
        None => {
            state.advantage = Some(winner);
            Resolution::Advantage { holder: winner }
        }
        Some(holder) if holder == winner => win_game(state, winner, config),
        Some(_) => {
            state.advantage = None;
            Resolution::Deuce
        }
    }
}

fn win_game(state: &mut MatchState, winner: Team, config: &MatchConfig) -> Resolution {
    state.games[winner] += 1;

    let six_all = PerTeam::splat(MatchConfig::GAMES_PER_SET);
    if state.games == six_all && config.tiebreak_mode == TiebreakMode::Tiebreak7 {
        state.reset_game_points();
        state.in_tiebreak = true;
        state.tiebreak = PerTeam::splat(0);
        state.pass_serve(config.start_server_side);
        return Resolution::TiebreakStarted { winner };
    }

    if state.games.gap() >= MatchConfig::WINNING_MARGIN
        && state.games[winner] >= MatchConfig::GAMES_PER_SET
    {
        return win_set(state, winner, config);
    }

    state.reset_game_points();
    state.pass_serve(config.start_server_side);
    Resolution::Game { winner }
}

fn win_set(state: &mut MatchState, winner: Team, config: &MatchConfig) -> Resolution {
    state.sets[winner] += 1;
    if state.winner.is_none() && state.sets[winner] >= config.sets_to_win() {
        state.winner = Some(winner);
    }
    state.games = PerTeam::splat(0);
    state.reset_game_points();
    state.in_tiebreak = false;
    state.tiebreak = PerTeam::splat(0);
    state.pass_serve(config.start_server_side);
    Resolution::Set { winner }
}
