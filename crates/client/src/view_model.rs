//! Framework-agnostic scoreboard projection of the engine.
//!
//! Widgets read a [`ScoreboardView`] and never touch the engine directly.
use padel_core::{MatchConfig, MatchEngine, PerTeam, Resolution, Team};

/// One team's column on the scoreboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamColumn {
    pub name: String,
    pub sets: u32,
    pub games: u32,
    /// Game score label, or raw tiebreak points during a tiebreak.
    pub points: String,
    pub serving: bool,
}

/// Everything the terminal needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreboardView {
    pub teams: PerTeam<TeamColumn>,
    pub sets_line: String,
    pub games_line: String,
    pub in_tiebreak: bool,
    /// `"<player> (<team>) • <SIDE>"`.
    pub server_line: String,
    pub winner_banner: Option<String>,
    pub can_undo: bool,
}

impl ScoreboardView {
    pub fn from_engine(engine: &MatchEngine) -> Self {
        let state = engine.current_state();
        let config = engine.config();
        let (points_a, points_b) = engine.game_score_label();
        let points = PerTeam::new(points_a, points_b);

        let teams = PerTeam::new(Team::A, Team::B).map(|team| TeamColumn {
            name: config.team_name(team).to_string(),
            sets: state.sets[team],
            games: state.games[team],
            points: points[team].clone(),
            serving: state.serving_team == team,
        });

        let server_line = format!(
            "{} ({}) • {}",
            engine.server_player_name(),
            config.team_name(state.serving_team),
            state.server_side
        );

        let winner_banner = engine
            .match_winner()
            .map(|team| format!("{} win the match", config.team_name(team)));

        Self {
            teams,
            sets_line: format!("Sets {} - {}", state.sets.a, state.sets.b),
            games_line: format!("Games {} - {}", state.games.a, state.games.b),
            in_tiebreak: state.in_tiebreak,
            server_line,
            winner_banner,
            can_undo: engine.can_undo(),
        }
    }
}

/// Status-line message for the outcome of an action.
pub fn describe(resolution: &Resolution, config: &MatchConfig) -> String {
    match *resolution {
        Resolution::Point { winner } => format!("Point {}", config.team_name(winner)),
        Resolution::Advantage { holder } => format!("Advantage {}", config.team_name(holder)),
        Resolution::Deuce => "Deuce".to_string(),
        Resolution::Game { winner } => format!("Game {}", config.team_name(winner)),
        Resolution::TiebreakStarted { winner } => {
            format!("Game {}, tiebreak to 7", config.team_name(winner))
        }
        Resolution::Set { winner } => format!("Set {}", config.team_name(winner)),
        Resolution::SideFlipped { side } => format!("Server moved to {side}"),
        Resolution::ServeSwitched { team, slot } => format!(
            "Serve passed to {} ({})",
            config.player_name(team, slot),
            config.team_name(team)
        ),
        Resolution::ServerSwitched { team, slot } => format!(
            "{} now serving for {}",
            config.player_name(team, slot),
            config.team_name(team)
        ),
    }
}
