//! Match-format parameters fixed at setup time.
use crate::error::{ErrorSeverity, ScoreError};
use crate::state::{PerTeam, PlayerSlot, Side, Team};

/// Rule applied when the game score reaches 6–6.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum TiebreakMode {
    /// Play a tiebreak to 7 points (two clear) at 6–6.
    #[default]
    #[strum(to_string = "tb7", serialize = "tiebreak")]
    Tiebreak7,
    /// Keep playing advantage games until one team leads by two games.
    #[strum(to_string = "advantage", serialize = "continue")]
    Advantage,
}

/// Immutable match configuration.
///
/// Created once per match and owned by the engine for its whole lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchConfig {
    /// Deuce is decided by a single sudden-death point instead of advantage.
    pub golden_point: bool,
    pub best_of_sets: u8,
    pub tiebreak_mode: TiebreakMode,
    pub team_names: PerTeam<String>,
    pub players: PerTeam<[String; 2]>,
    /// Team serving the first game.
    pub first_server: Team,
    /// Player of `first_server` serving the first game.
    pub first_server_slot: PlayerSlot,
    /// Side every new service turn starts from.
    pub start_server_side: Side,
}

impl MatchConfig {
    // ===== scoring law =====
    /// Raw point count that ends a game outside deuce (0, 15, 30, 40, game).
    pub const POINTS_TO_WIN_GAME: u8 = 4;
    /// Raw point count at which both teams sit at 40.
    pub const DEUCE_POINTS: u8 = 3;
    pub const GAMES_PER_SET: u32 = 6;
    pub const TIEBREAK_POINTS: u32 = 7;
    /// Lead required to close out a set or a tiebreak.
    pub const WINNING_MARGIN: u32 = 2;

    pub const DEFAULT_BEST_OF_SETS: u8 = 3;

    pub fn builder() -> MatchConfigBuilder {
        MatchConfigBuilder::new()
    }

    /// Number of sets a team needs to take the match.
    pub const fn sets_to_win(&self) -> u32 {
        (self.best_of_sets / 2 + 1) as u32
    }

    pub fn team_name(&self, team: Team) -> &str {
        &self.team_names[team]
    }

    pub fn player_name(&self, team: Team, slot: PlayerSlot) -> &str {
        &self.players[team][slot.index()]
    }

    /// Checks the parameters a builder can get wrong.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.best_of_sets == 0 || self.best_of_sets % 2 == 0 {
            return Err(ConfigError::InvalidBestOf {
                best_of: self.best_of_sets,
            });
        }

        for (team, name) in self.team_names.iter() {
            if name.trim().is_empty() {
                return Err(ConfigError::EmptyTeamName { team });
            }
        }

        for (team, names) in self.players.iter() {
            for slot in [PlayerSlot::First, PlayerSlot::Second] {
                if names[slot.index()].trim().is_empty() {
                    return Err(ConfigError::EmptyPlayerName { team, slot });
                }
            }
        }

        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            golden_point: true,
            best_of_sets: Self::DEFAULT_BEST_OF_SETS,
            tiebreak_mode: TiebreakMode::Tiebreak7,
            team_names: PerTeam::new("Team A".to_string(), "Team B".to_string()),
            players: PerTeam::new(
                ["A1".to_string(), "A2".to_string()],
                ["B1".to_string(), "B2".to_string()],
            ),
            first_server: Team::A,
            first_server_slot: PlayerSlot::First,
            start_server_side: Side::Right,
        }
    }
}

/// Builder for [`MatchConfig`], starting from the defaults.
#[derive(Clone, Debug, Default)]
pub struct MatchConfigBuilder {
    config: MatchConfig,
}

impl MatchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn golden_point(mut self, enabled: bool) -> Self {
        self.config.golden_point = enabled;
        self
    }

    pub fn best_of_sets(mut self, best_of: u8) -> Self {
        self.config.best_of_sets = best_of;
        self
    }

    pub fn tiebreak_mode(mut self, mode: TiebreakMode) -> Self {
        self.config.tiebreak_mode = mode;
        self
    }

    pub fn team_name(mut self, team: Team, name: impl Into<String>) -> Self {
        self.config.team_names[team] = name.into();
        self
    }

    pub fn players(
        mut self,
        team: Team,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        self.config.players[team] = [first.into(), second.into()];
        self
    }

    pub fn first_server(mut self, team: Team, slot: PlayerSlot) -> Self {
        self.config.first_server = team;
        self.config.first_server_slot = slot;
        self
    }

    pub fn start_server_side(mut self, side: Side) -> Self {
        self.config.start_server_side = side;
        self
    }

    pub fn build(self) -> Result<MatchConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Rejected match configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("best-of count must be odd and non-zero (got {best_of})")]
    InvalidBestOf { best_of: u8 },

    #[error("team {team} has an empty name")]
    EmptyTeamName { team: Team },

    #[error("team {team} player {} has an empty name", .slot.index() + 1)]
    EmptyPlayerName { team: Team, slot: PlayerSlot },
}

impl ScoreError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidBestOf { .. } => "CONFIG_INVALID_BEST_OF",
            Self::EmptyTeamName { .. } => "CONFIG_EMPTY_TEAM_NAME",
            Self::EmptyPlayerName { .. } => "CONFIG_EMPTY_PLAYER_NAME",
        }
    }
}
