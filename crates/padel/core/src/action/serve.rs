//! Manual serve and side corrections.
//!
//! None of these touch the score; they only rewrite serve bookkeeping when the
//! recorded server does not match what happened on court.
use crate::config::MatchConfig;
use crate::state::MatchState;

use super::{Applied, Resolution, Transition};

/// Flips the server's side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FlipSide;

impl Transition for FlipSide {
    fn apply(&self, state: &MatchState, _config: &MatchConfig) -> Applied {
        let mut next = *state;
        next.server_side = next.server_side.flip();

        let side = next.server_side;
        Applied::new(next, Resolution::SideFlipped { side })
    }
}

/// Hands the serve to the other team as if a service game had ended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SwitchTeam;

impl Transition for SwitchTeam {
    fn apply(&self, state: &MatchState, config: &MatchConfig) -> Applied {
        let mut next = *state;
        next.pass_serve(config.start_server_side);

        let (team, slot) = next.server();
        Applied::new(next, Resolution::ServeSwitched { team, slot })
    }
}

/// Swaps which teammate of the serving team is serving.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SwitchPlayer;

impl Transition for SwitchPlayer {
    fn apply(&self, state: &MatchState, _config: &MatchConfig) -> Applied {
        let mut next = *state;
        let team = next.serving_team;
        next.serving_player[team] = next.serving_player[team].toggle();

        let slot = next.serving_player[team];
        Applied::new(next, Resolution::ServerSwitched { team, slot })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{PerTeam, PlayerSlot, Side, Team};

    fn mid_game() -> (MatchState, MatchConfig) {
        let config = MatchConfig::default();
        let mut state = MatchState::new(&config);
        state.games = PerTeam::new(2, 3);
        state.points = PerTeam::new(1, 2);
        state.server_side = Side::Left;
        (state, config)
    }

    #[test]
    fn flip_side_only_moves_the_server() {
        let (state, config) = mid_game();

        let applied = FlipSide.apply(&state, &config);

        assert_eq!(applied.resolution, Resolution::SideFlipped { side: Side::Right });
        assert_eq!(
            applied.state,
            MatchState {
                server_side: Side::Right,
                ..state
            }
        );
    }

    #[test]
    fn switch_team_passes_serve_and_resets_side() {
        let (state, config) = mid_game();

        let applied = SwitchTeam.apply(&state, &config);

        assert_eq!(
            applied.resolution,
            Resolution::ServeSwitched {
                team: Team::B,
                slot: PlayerSlot::Second
            }
        );
        assert_eq!(applied.state.server_side, Side::Right);
        assert_eq!(applied.state.points, state.points);
        assert_eq!(applied.state.games, state.games);
    }

    #[test]
    fn switch_player_twice_restores_the_server() {
        let (state, config) = mid_game();

        let once = SwitchPlayer.apply(&state, &config);
        assert_eq!(once.state.server(), (Team::A, PlayerSlot::Second));
        assert_eq!(once.state.server_side, state.server_side);

        let twice = SwitchPlayer.apply(&once.state, &config);
        assert_eq!(twice.state, state);
    }
}
