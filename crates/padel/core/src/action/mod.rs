//! Scoring actions and the transitions they drive.
//!
//! Every action is a pure function from (config, current snapshot) to the
//! next snapshot. [`ScoreAction`] is the value form handed to
//! [`MatchEngine::execute`](crate::MatchEngine::execute); each concrete
//! action implements [`Transition`].
//!
//! # Module Structure
//!
//! - `point`: rallied points, including game, tiebreak and set resolution
//! - `serve`: manual serve/side corrections

mod point;
mod serve;

pub use point::PointAction;
pub use serve::{FlipSide, SwitchPlayer, SwitchTeam};

use crate::config::MatchConfig;
use crate::state::{MatchState, PlayerSlot, Side, Team};

/// Defines how an action turns one snapshot into the next.
pub trait Transition {
    fn apply(&self, state: &MatchState, config: &MatchConfig) -> Applied;
}

/// Result of applying a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Applied {
    pub state: MatchState,
    pub resolution: Resolution,
}

impl Applied {
    pub(crate) fn new(state: MatchState, resolution: Resolution) -> Self {
        Self { state, resolution }
    }
}

/// What a transition did to the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Resolution {
    /// Plain point inside a game or tiebreak.
    Point { winner: Team },
    /// Deuce broken, `holder` now has advantage.
    Advantage { holder: Team },
    /// Advantage lost, back to deuce.
    Deuce,
    Game { winner: Team },
    /// Games reached 6-6 and the tiebreak began.
    TiebreakStarted { winner: Team },
    Set { winner: Team },

    SideFlipped { side: Side },
    ServeSwitched { team: Team, slot: PlayerSlot },
    ServerSwitched { team: Team, slot: PlayerSlot },
}

impl Resolution {
    /// Game, tiebreak and set boundaries put the new server on the starting
    /// side instead of flipping it.
    pub const fn resets_side(&self) -> bool {
        matches!(
            self,
            Resolution::Game { .. } | Resolution::TiebreakStarted { .. } | Resolution::Set { .. }
        )
    }

    /// True for the manual serve/side corrections.
    pub const fn is_correction(&self) -> bool {
        matches!(
            self,
            Resolution::SideFlipped { .. }
                | Resolution::ServeSwitched { .. }
                | Resolution::ServerSwitched { .. }
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::Point { .. } => "point",
            Resolution::Advantage { .. } => "advantage",
            Resolution::Deuce => "deuce",
            Resolution::Game { .. } => "game",
            Resolution::TiebreakStarted { .. } => "tiebreak_started",
            Resolution::Set { .. } => "set",
            Resolution::SideFlipped { .. } => "side_flipped",
            Resolution::ServeSwitched { .. } => "serve_switched",
            Resolution::ServerSwitched { .. } => "server_switched",
        }
    }
}

/// Any operation that appends a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScoreAction {
    /// Award one rallied point.
    Point(Team),
    /// Flip the server's side.
    FlipSide,
    /// Hand the serve to the other team.
    SwitchTeam,
    /// Swap which teammate of the serving team serves.
    SwitchPlayer,
}

impl Transition for ScoreAction {
    fn apply(&self, state: &MatchState, config: &MatchConfig) -> Applied {
        match *self {
            ScoreAction::Point(winner) => PointAction { winner }.apply(state, config),
            ScoreAction::FlipSide => FlipSide.apply(state, config),
            ScoreAction::SwitchTeam => SwitchTeam.apply(state, config),
            ScoreAction::SwitchPlayer => SwitchPlayer.apply(state, config),
        }
    }
}
