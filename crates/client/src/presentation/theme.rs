//! Colors and emphasis for the scoreboard.
use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub fn team_name(serving: bool) -> Style {
        let style = Style::default().add_modifier(Modifier::BOLD);
        if serving {
            style.fg(Color::Yellow)
        } else {
            style.fg(Color::White)
        }
    }

    pub fn counter() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn points() -> Style {
        Style::default()
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tiebreak() -> Style {
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    }

    pub fn server() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn banner() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::LightYellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn help() -> Style {
        Style::default().fg(Color::DarkGray)
    }
}
