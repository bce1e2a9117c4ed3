//! Match state snapshots.
//!
//! A [`MatchState`] is an immutable value describing the score and the serve
//! at one instant. Transitions never mutate a stored snapshot; they copy the
//! current one, adjust the copy and hand it to the engine's history.
mod error;
mod types;

pub use error::InvariantViolation;
pub use types::{PerTeam, PlayerSlot, Side, Team};

use crate::config::{MatchConfig, TiebreakMode};

/// Canonical snapshot of a match in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState {
    pub sets: PerTeam<u32>,
    /// First team to reach the sets needed for the match. Never cleared by
    /// later sets; only undo takes it back.
    pub winner: Option<Team>,
    /// Games won in the current set.
    pub games: PerTeam<u32>,
    /// Raw points in the current game (0..=3, displayed as 0/15/30/40).
    pub points: PerTeam<u8>,
    /// Team holding advantage at deuce. Never set under golden point.
    pub advantage: Option<Team>,

    /// While set, `tiebreak` counts replace `points`.
    pub in_tiebreak: bool,
    pub tiebreak: PerTeam<u32>,

    pub serving_team: Team,
    /// Player each team sends to serve on its next (or current) service turn.
    pub serving_player: PerTeam<PlayerSlot>,
    pub server_side: Side,
}

impl MatchState {
    /// Builds the starting snapshot for `config`.
    ///
    /// The first serving team starts with its configured player; the receiving
    /// team starts at [`PlayerSlot::First`] and is rotated when the serve first
    /// passes to it.
    pub fn new(config: &MatchConfig) -> Self {
        let mut serving_player = PerTeam::splat(PlayerSlot::First);
        serving_player[config.first_server] = config.first_server_slot;

        Self {
            sets: PerTeam::splat(0),
            winner: None,
            games: PerTeam::splat(0),
            points: PerTeam::splat(0),
            advantage: None,
            in_tiebreak: false,
            tiebreak: PerTeam::splat(0),
            serving_team: config.first_server,
            serving_player,
            server_side: config.start_server_side,
        }
    }

    /// Returns the team and player currently serving.
    pub fn server(&self) -> (Team, PlayerSlot) {
        (self.serving_team, self.serving_player[self.serving_team])
    }

    /// Both teams at 40 in a regular game.
    pub fn is_deuce(&self) -> bool {
        !self.in_tiebreak
            && self.points.a == MatchConfig::DEUCE_POINTS
            && self.points.b == MatchConfig::DEUCE_POINTS
    }

    /// Passes the serve to the other team, rotates that team's server and
    /// puts them on the starting side.
    pub(crate) fn pass_serve(&mut self, start_side: Side) {
        let receiver = self.serving_team.other();
        self.serving_team = receiver;
        self.serving_player[receiver] = self.serving_player[receiver].toggle();
        self.server_side = start_side;
    }

    pub(crate) fn reset_game_points(&mut self) {
        self.points = PerTeam::splat(0);
        self.advantage = None;
    }

    /// Checks the invariants every snapshot produced by the engine upholds.
    pub fn validate(&self, config: &MatchConfig) -> Result<(), InvariantViolation> {
        for (team, &points) in self.points.iter() {
            if points > MatchConfig::DEUCE_POINTS {
                return Err(InvariantViolation::PointsOverflow { team, points });
            }
        }

        let needed = config.sets_to_win();
        if let Some(winner) = self.winner.filter(|&team| self.sets[team] < needed) {
            return Err(InvariantViolation::UnearnedWinner {
                winner,
                sets: self.sets[winner],
            });
        }

        if let Some(holder) = self.advantage {
            if config.golden_point {
                return Err(InvariantViolation::AdvantageUnderGoldenPoint { holder });
            }
            if !self.is_deuce() {
                return Err(InvariantViolation::AdvantageWithoutDeuce {
                    holder,
                    points: self.points,
                });
            }
        }

        if self.in_tiebreak {
            self.validate_tiebreak(config)?;
        } else {
            if self.tiebreak != PerTeam::splat(0) {
                return Err(InvariantViolation::StaleTiebreakPoints {
                    tiebreak: self.tiebreak,
                });
            }
            self.validate_games(config)?;
        }

        Ok(())
    }

    fn validate_tiebreak(&self, config: &MatchConfig) -> Result<(), InvariantViolation> {
        let six_all = PerTeam::splat(MatchConfig::GAMES_PER_SET);
        if config.tiebreak_mode != TiebreakMode::Tiebreak7 || self.games != six_all {
            return Err(InvariantViolation::TiebreakWithoutSixAll { games: self.games });
        }
        if self.points != PerTeam::splat(0) || self.advantage.is_some() {
            return Err(InvariantViolation::PointsDuringTiebreak {
                points: self.points,
            });
        }

        let leader = self.tiebreak.a.max(self.tiebreak.b);
        if leader >= MatchConfig::TIEBREAK_POINTS
            && self.tiebreak.gap() >= MatchConfig::WINNING_MARGIN
        {
            return Err(InvariantViolation::UnresolvedTiebreak {
                tiebreak: self.tiebreak,
            });
        }

        Ok(())
    }

    fn validate_games(&self, config: &MatchConfig) -> Result<(), InvariantViolation> {
        let leader = self.games.a.max(self.games.b);

        if leader >= MatchConfig::GAMES_PER_SET && self.games.gap() >= MatchConfig::WINNING_MARGIN
        {
            return Err(InvariantViolation::UnresolvedSet { games: self.games });
        }

        // 6-6 always opens a tiebreak in this mode, so neither team can pass 6.
        if config.tiebreak_mode == TiebreakMode::Tiebreak7
            && (leader > MatchConfig::GAMES_PER_SET
                || self.games == PerTeam::splat(MatchConfig::GAMES_PER_SET))
        {
            return Err(InvariantViolation::UnresolvedSet { games: self.games });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_copies_configured_server() {
        let config = MatchConfig::builder()
            .first_server(Team::B, PlayerSlot::Second)
            .start_server_side(Side::Left)
            .build()
            .unwrap();

        let state = MatchState::new(&config);

        assert_eq!(state.sets, PerTeam::splat(0));
        assert_eq!(state.winner, None);
        assert_eq!(state.games, PerTeam::splat(0));
        assert_eq!(state.points, PerTeam::splat(0));
        assert_eq!(state.advantage, None);
        assert!(!state.in_tiebreak);
        assert_eq!(state.server(), (Team::B, PlayerSlot::Second));
        assert_eq!(state.serving_player[Team::A], PlayerSlot::First);
        assert_eq!(state.server_side, Side::Left);
        assert_eq!(state.validate(&config), Ok(()));
    }

    #[test]
    fn pass_serve_rotates_only_the_receiving_team() {
        let config = MatchConfig::default();
        let mut state = MatchState::new(&config);
        state.server_side = Side::Left;

        state.pass_serve(Side::Right);

        assert_eq!(state.server(), (Team::B, PlayerSlot::Second));
        assert_eq!(state.serving_player[Team::A], PlayerSlot::First);
        assert_eq!(state.server_side, Side::Right);
    }

    #[test]
    fn validate_rejects_points_past_forty() {
        let config = MatchConfig::default();
        let mut state = MatchState::new(&config);
        state.points.b = 4;

        assert_eq!(
            state.validate(&config),
            Err(InvariantViolation::PointsOverflow {
                team: Team::B,
                points: 4
            })
        );
    }

    #[test]
    fn validate_rejects_advantage_outside_deuce() {
        let config = MatchConfig::builder().golden_point(false).build().unwrap();
        let mut state = MatchState::new(&config);
        state.points = PerTeam::new(3, 2);
        state.advantage = Some(Team::A);

        assert!(matches!(
            state.validate(&config),
            Err(InvariantViolation::AdvantageWithoutDeuce { holder: Team::A, .. })
        ));

        state.points.b = 3;
        assert_eq!(state.validate(&config), Ok(()));

        let golden = MatchConfig::default();
        assert!(matches!(
            state.validate(&golden),
            Err(InvariantViolation::AdvantageUnderGoldenPoint { .. })
        ));
    }

    #[test]
    fn validate_rejects_unresolved_sets_and_tiebreaks() {
        let config = MatchConfig::default();
        let mut state = MatchState::new(&config);

        state.games = PerTeam::new(6, 4);
        assert!(matches!(
            state.validate(&config),
            Err(InvariantViolation::UnresolvedSet { .. })
        ));

        state.games = PerTeam::new(6, 6);
        assert!(matches!(
            state.validate(&config),
            Err(InvariantViolation::UnresolvedSet { .. })
        ));

        state.in_tiebreak = true;
        state.tiebreak = PerTeam::new(8, 6);
        assert!(matches!(
            state.validate(&config),
            Err(InvariantViolation::UnresolvedTiebreak { .. })
        ));

        state.tiebreak = PerTeam::new(8, 7);
        assert_eq!(state.validate(&config), Ok(()));
    }

    #[test]
    fn validate_rejects_a_winner_short_of_sets() {
        let config = MatchConfig::default();
        let mut state = MatchState::new(&config);
        state.sets = PerTeam::new(1, 0);
        state.winner = Some(Team::A);

        assert_eq!(
            state.validate(&config),
            Err(InvariantViolation::UnearnedWinner {
                winner: Team::A,
                sets: 1
            })
        );

        state.sets.a = 2;
        assert_eq!(state.validate(&config), Ok(()));
    }

    #[test]
    fn advantage_mode_allows_long_sets_but_no_tiebreak() {
        let config = MatchConfig::builder()
            .tiebreak_mode(TiebreakMode::Advantage)
            .build()
            .unwrap();
        let mut state = MatchState::new(&config);

        state.games = PerTeam::new(9, 8);
        assert_eq!(state.validate(&config), Ok(()));

        state.games = PerTeam::new(6, 6);
        state.in_tiebreak = true;
        assert!(matches!(
            state.validate(&config),
            Err(InvariantViolation::TiebreakWithoutSixAll { .. })
        ));
    }
}
