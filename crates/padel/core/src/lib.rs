//! Deterministic scoring rules for a two-team padel match.
//!
//! `padel-core` defines the canonical scoring law (points, games, sets,
//! tiebreaks, serve rotation) as pure transitions over immutable
//! [`MatchState`] snapshots. All mutation flows through
//! [`engine::MatchEngine`], which keeps the snapshot history that undo walks
//! back through. Presentation layers only read snapshots and call the
//! engine's mutators.
pub mod action;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod state;

pub use action::{
    Applied, FlipSide, PointAction, Resolution, ScoreAction, SwitchPlayer, SwitchTeam, Transition,
};
pub use config::{ConfigError, MatchConfig, MatchConfigBuilder, TiebreakMode};
pub use display::{game_score_label, point_label};
pub use engine::{MatchEngine, MatchHistory};
pub use error::{ErrorSeverity, ScoreError};
pub use state::{InvariantViolation, MatchState, PerTeam, PlayerSlot, Side, Team};
