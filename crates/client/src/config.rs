//! Match setup loaded from environment variables.
//!
//! Environment variables:
//! - `PADEL_GOLDEN_POINT` - Golden point at deuce (default: true)
//! - `PADEL_BEST_OF` - Best-of-sets count (default: 3)
//! - `PADEL_TIEBREAK` - `tb7` or `advantage` (default: tb7)
//! - `PADEL_TEAM_A`, `PADEL_TEAM_B` - Team names
//! - `PADEL_PLAYERS_A`, `PADEL_PLAYERS_B` - Player names as `first,second`
//! - `PADEL_FIRST_SERVER` - `a` or `b` (default: a)
//! - `PADEL_FIRST_PLAYER` - `1` or `2` (default: 1)
//! - `PADEL_START_SIDE` - `right` or `left` (default: right)
//! - `PADEL_UNDO_HORIZON` - Maximum snapshots kept for undo (default: unbounded)
//! - `PADEL_SESSION_ID` - Log session folder name
//! - `PADEL_LOG_DIR` - Overrides the log directory
use std::env;
use std::path::PathBuf;

use padel_core::{
    ConfigError, ErrorSeverity, MatchConfig, PlayerSlot, ScoreError, Side, Team, TiebreakMode,
};

/// Everything the client needs before the first point is played.
#[derive(Clone, Debug, Default)]
pub struct MatchSetup {
    pub match_config: MatchConfig,
    pub client: ClientConfig,
}

/// Client-side settings that do not affect scoring.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub session_id: Option<String>,
    pub log_dir: Option<PathBuf>,
    pub undo_horizon: Option<usize>,
}

impl MatchSetup {
    /// Construct the setup from process environment variables.
    pub fn from_env() -> Result<Self, EnvConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construct the setup from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, EnvConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = MatchConfig::builder();
        let defaults = MatchConfig::default();

        if let Some(enabled) = read(&lookup, "PADEL_GOLDEN_POINT", "true or false", parse_bool)? {
            builder = builder.golden_point(enabled);
        }
        if let Some(best_of) = read(&lookup, "PADEL_BEST_OF", "an odd number", |v| {
            v.parse::<u8>().ok()
        })? {
            builder = builder.best_of_sets(best_of);
        }
        if let Some(mode) = read(&lookup, "PADEL_TIEBREAK", "tb7 or advantage", |v| {
            v.parse::<TiebreakMode>().ok()
        })? {
            builder = builder.tiebreak_mode(mode);
        }

        for (team, name_key, players_key) in [
            (Team::A, "PADEL_TEAM_A", "PADEL_PLAYERS_A"),
            (Team::B, "PADEL_TEAM_B", "PADEL_PLAYERS_B"),
        ] {
            if let Some(name) = non_empty(&lookup, name_key) {
                builder = builder.team_name(team, name);
            }
            if let Some([first, second]) =
                read(&lookup, players_key, "two names separated by a comma", parse_pair)?
            {
                builder = builder.players(team, first, second);
            }
        }

        let first_server = read(&lookup, "PADEL_FIRST_SERVER", "a or b", |v| {
            v.parse::<Team>().ok()
        })?
        .unwrap_or(defaults.first_server);
        let first_slot = read(&lookup, "PADEL_FIRST_PLAYER", "1 or 2", parse_slot)?
            .unwrap_or(defaults.first_server_slot);
        builder = builder.first_server(first_server, first_slot);

        if let Some(side) = read(&lookup, "PADEL_START_SIDE", "right or left", |v| {
            v.parse::<Side>().ok()
        })? {
            builder = builder.start_server_side(side);
        }

        let client = ClientConfig {
            session_id: non_empty(&lookup, "PADEL_SESSION_ID"),
            log_dir: non_empty(&lookup, "PADEL_LOG_DIR").map(PathBuf::from),
            undo_horizon: read(&lookup, "PADEL_UNDO_HORIZON", "a positive number", |v| {
                v.parse::<usize>().ok().filter(|&n| n > 0)
            })?,
        };

        Ok(Self {
            match_config: builder.build()?,
            client,
        })
    }
}

/// Environment variable that could not be turned into a valid setup.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EnvConfigError {
    #[error("{key}={value:?} is invalid, expected {expected}")]
    Invalid {
        key: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl EnvConfigError {
    /// One-line report tagged with severity and error code.
    pub fn summary(&self) -> String {
        format!(
            "invalid match setup [{} {}]: {self}",
            self.severity().as_str(),
            self.error_code()
        )
    }
}

impl ScoreError for EnvConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Invalid { .. } => "ENV_INVALID_VALUE",
            Self::Config(err) => err.error_code(),
        }
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn read<T, F, P>(
    lookup: &F,
    key: &'static str,
    expected: &'static str,
    parse: P,
) -> Result<Option<T>, EnvConfigError>
where
    F: Fn(&str) -> Option<String>,
    P: Fn(&str) -> Option<T>,
{
    let Some(value) = non_empty(lookup, key) else {
        return Ok(None);
    };

    parse(&value).map(Some).ok_or(EnvConfigError::Invalid {
        key,
        value,
        expected,
    })
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_slot(value: &str) -> Option<PlayerSlot> {
    let number: usize = value.parse().ok()?;
    PlayerSlot::from_index(number.checked_sub(1)?)
}

fn parse_pair(value: &str) -> Option<[String; 2]> {
    let (first, second) = value.split_once(',')?;
    let (first, second) = (first.trim(), second.trim());
    if first.is_empty() || second.is_empty() || second.contains(',') {
        return None;
    }
    Some([first.to_string(), second.to_string()])
}
