//! Terminal scoreboard for a live padel match.
//!
//! The binary in `main.rs` is the composition root; everything it wires
//! together lives here so it can be tested without a terminal.
pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod presentation;
pub mod view_model;

pub use app::App;
pub use config::{ClientConfig, EnvConfigError, MatchSetup};
