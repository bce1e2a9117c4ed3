//! Input loop tying the engine and the terminal together.
use std::ops::ControlFlow;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use padel_core::MatchEngine;

use crate::input::{KeyAction, handle_key};
use crate::presentation::{terminal::Tui, ui};
use crate::view_model::{ScoreboardView, describe};

const READY: &str = "Ready";

pub struct App {
    engine: MatchEngine,
    status: String,
}

impl App {
    pub fn new(engine: MatchEngine) -> Self {
        Self {
            engine,
            status: READY.to_string(),
        }
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Applies one decoded key. Breaks when the user asked to quit.
    pub fn handle(&mut self, action: KeyAction) -> ControlFlow<()> {
        match action {
            KeyAction::Score(action) => {
                let resolution = self.engine.execute(&action);
                let message = describe(&resolution, self.engine.config());
                self.status = if resolution.is_correction() {
                    format!("Corrected: {message}")
                } else {
                    message
                };
            }
            KeyAction::Undo => {
                self.status = if self.engine.can_undo() {
                    self.engine.undo();
                    "Undone".to_string()
                } else {
                    "Nothing to undo".to_string()
                };
            }
            KeyAction::Quit => return ControlFlow::Break(()),
            KeyAction::None => {}
        }
        ControlFlow::Continue(())
    }

    /// Blocks on terminal input until quit, redrawing after every key.
    pub fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        tracing::info!("scoreboard started");
        self.render(terminal)?;

        loop {
            let Event::Key(key) = event::read()? else {
                // Resize and focus events only need a redraw.
                self.render(terminal)?;
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if self.handle(handle_key(key)).is_break() {
                break;
            }
            self.render(terminal)?;
        }

        tracing::info!(
            snapshots = self.engine.history_len(),
            winner = ?self.engine.match_winner(),
            "scoreboard closed"
        );
        Ok(())
    }

    fn render(&self, terminal: &mut Tui) -> Result<()> {
        let view = ScoreboardView::from_engine(&self.engine);
        ui::render(terminal, &view, &self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use padel_core::{MatchConfig, ScoreAction, Team};

    fn app() -> App {
        App::new(MatchEngine::new(MatchConfig::default()))
    }

    #[test]
    fn scoring_updates_the_status() {
        let mut app = app();

        let flow = app.handle(KeyAction::Score(ScoreAction::Point(Team::A)));

        assert!(flow.is_continue());
        assert_eq!(app.status(), "Point Team A");
        assert_eq!(app.engine().history_len(), 2);
    }

    #[test]
    fn corrections_are_marked_in_the_status() {
        let mut app = app();

        app.handle(KeyAction::Score(ScoreAction::FlipSide));
        assert_eq!(app.status(), "Corrected: Server moved to LEFT");

        app.handle(KeyAction::Score(ScoreAction::Point(Team::B)));
        assert_eq!(app.status(), "Point Team B");
    }

    #[test]
    fn undo_reports_when_there_is_nothing_left() {
        let mut app = app();
        assert_eq!(app.status(), "Ready");

        app.handle(KeyAction::Undo);
        assert_eq!(app.status(), "Nothing to undo");

        app.handle(KeyAction::Score(ScoreAction::SwitchTeam));
        app.handle(KeyAction::Undo);
        assert_eq!(app.status(), "Undone");
        assert_eq!(app.engine().history_len(), 1);
    }

    #[test]
    fn quit_breaks_the_loop() {
        let mut app = app();
        assert!(app.handle(KeyAction::None).is_continue());
        assert!(app.handle(KeyAction::Quit).is_break());
    }
}
