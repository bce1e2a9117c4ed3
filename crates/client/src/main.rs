//! Padel scoreboard binary.
//!
//! Loads the match setup from the environment (and `.env`), installs file
//! logging, then hands the terminal to the scoreboard loop.
//!
//! ```bash
//! PADEL_TEAM_A=Lions PADEL_PLAYERS_A=Ana,Bea cargo run -p padel-client
//! ```
use anyhow::{Context, Result};
use padel_core::{MatchEngine, Team};
use padel_client::{App, MatchSetup, logging, presentation::terminal};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let setup = MatchSetup::from_env().map_err(|err| anyhow::anyhow!(err.summary()))?;
    let _log_guard = logging::setup_logging(&setup.client)?;

    let config = setup.match_config;
    tracing::info!(
        team_a = config.team_name(Team::A),
        team_b = config.team_name(Team::B),
        best_of = config.best_of_sets,
        golden_point = config.golden_point,
        tiebreak = %config.tiebreak_mode,
        "starting match"
    );

    let engine = match setup.client.undo_horizon {
        Some(limit) => MatchEngine::with_undo_horizon(config, limit),
        None => MatchEngine::new(config),
    };

    let mut terminal = terminal::init().context("initializing terminal")?;
    let _terminal_guard = terminal::TerminalGuard;

    App::new(engine).run(&mut terminal)
}
