//! Match engine: config, history and the single execution path.
//!
//! The [`MatchEngine`] is the authoritative reducer for [`MatchState`]. Every
//! mutating call runs one [`Transition`] against the current snapshot and
//! appends the result; undo pops it again. Nothing here can fail.

mod history;

pub use history::MatchHistory;

use crate::action::{Resolution, ScoreAction, Transition};
use crate::config::MatchConfig;
use crate::display;
use crate::state::{MatchState, Team};

/// Live scorer for a single match.
#[derive(Clone, Debug)]
pub struct MatchEngine {
    config: MatchConfig,
    history: MatchHistory,
    /// Maximum number of retained snapshots, if bounded.
    undo_horizon: Option<usize>,
}

impl MatchEngine {
    /// Starts a match from `config` with unbounded history.
    pub fn new(config: MatchConfig) -> Self {
        let initial = MatchState::new(&config);
        tracing::debug!(
            first_server = %config.first_server,
            golden_point = config.golden_point,
            tiebreak = %config.tiebreak_mode,
            "match created"
        );

        Self {
            config,
            history: MatchHistory::new(initial),
            undo_horizon: None,
        }
    }

    /// Starts a match that keeps at most `limit` snapshots (minimum 1).
    pub fn with_undo_horizon(config: MatchConfig, limit: usize) -> Self {
        let mut engine = Self::new(config);
        engine.undo_horizon = Some(limit.max(1));
        engine
    }

    /// Runs `action` against the current snapshot and appends the result.
    pub fn execute(&mut self, action: &ScoreAction) -> Resolution {
        let applied = action.apply(self.history.current(), &self.config);

        debug_assert!(
            applied.state.validate(&self.config).is_ok(),
            "{action:?} produced an invalid snapshot: {:?}",
            applied.state.validate(&self.config)
        );

        log_resolution(action, &applied.resolution, &applied.state);

        self.history.push(applied.state);
        if let Some(limit) = self.undo_horizon {
            let dropped = self.history.retain_recent(limit);
            if dropped > 0 {
                tracing::trace!(dropped, limit, "history compacted");
            }
        }

        applied.resolution
    }

    pub fn point(&mut self, winner: Team) {
        self.execute(&ScoreAction::Point(winner));
    }

    pub fn flip_side(&mut self) {
        self.execute(&ScoreAction::FlipSide);
    }

    pub fn switch_team(&mut self) {
        self.execute(&ScoreAction::SwitchTeam);
    }

    pub fn switch_player(&mut self) {
        self.execute(&ScoreAction::SwitchPlayer);
    }

    /// Removes the latest snapshot. No-op at the oldest retained snapshot.
    pub fn undo(&mut self) {
        if self.history.undo() {
            tracing::debug!(remaining = self.history.len(), "undo");
        } else {
            tracing::trace!("undo ignored at initial snapshot");
        }
    }

    pub fn current_state(&self) -> &MatchState {
        self.history.current()
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn history(&self) -> &MatchHistory {
        &self.history
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Name of the player currently serving.
    pub fn server_player_name(&self) -> &str {
        let (team, slot) = self.current_state().server();
        self.config.player_name(team, slot)
    }

    pub fn game_score_label(&self) -> (String, String) {
        display::game_score_label(self.current_state())
    }

    /// Team that has taken the match, if any.
    ///
    /// The first team to reach `sets_to_win` keeps the result. Scoring is not
    /// halted; further points keep counting but never change the winner.
    pub fn match_winner(&self) -> Option<Team> {
        self.current_state().winner
    }
}

fn log_resolution(action: &ScoreAction, resolution: &Resolution, state: &MatchState) {
    match *resolution {
        Resolution::Game { winner } => tracing::info!(
            %winner,
            games = ?(state.games.a, state.games.b),
            "game"
        ),
        Resolution::TiebreakStarted { winner } => tracing::info!(
            %winner,
            serving = %state.serving_team,
            "tiebreak started"
        ),
        Resolution::Set { winner } => tracing::info!(
            %winner,
            sets = ?(state.sets.a, state.sets.b),
            match_winner = ?state.winner,
            "set"
        ),
        _ => tracing::debug!(
            ?action,
            resolution = resolution.as_str(),
            "action executed"
        ),
    }
}
