//! Frame rendering for the scoreboard.
use anyhow::Result;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::input::KEY_HELP;
use crate::presentation::{terminal::Tui, theme::Theme};
use crate::view_model::{ScoreboardView, TeamColumn};

pub fn render(terminal: &mut Tui, view: &ScoreboardView, status: &str) -> Result<()> {
    terminal.draw(|frame| draw(frame, view, status))?;
    Ok(())
}

/// Draws one frame: header, team columns, server, status and key help.
pub fn draw(frame: &mut Frame, view: &ScoreboardView, status: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(6),    // Team columns
            Constraint::Length(3), // Server
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    render_header(frame, chunks[0], view);
    render_teams(frame, chunks[1], view);
    render_server(frame, chunks[2], view);

    let status = Paragraph::new(Span::styled(status.to_string(), Theme::status()))
        .block(Block::default().borders(Borders::ALL).title(" Last "));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new(Span::styled(KEY_HELP, Theme::help())).alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn render_header(frame: &mut Frame, area: Rect, view: &ScoreboardView) {
    let line = match &view.winner_banner {
        Some(banner) => Line::from(Span::styled(format!(" {banner} "), Theme::banner())),
        None => {
            let mut spans = vec![
                Span::styled(view.sets_line.as_str(), Theme::counter()),
                Span::raw("  |  "),
                Span::styled(view.games_line.as_str(), Theme::counter()),
            ];
            if view.in_tiebreak {
                spans.push(Span::raw("  |  "));
                spans.push(Span::styled("TIEBREAK", Theme::tiebreak()));
            }
            Line::from(spans)
        }
    };

    let header = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Padel "));
    frame.render_widget(header, area);
}

fn render_teams(frame: &mut Frame, area: Rect, view: &ScoreboardView) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (column, (_, team)) in columns.iter().zip(view.teams.iter()) {
        frame.render_widget(team_panel(team, view.in_tiebreak), *column);
    }
}

fn team_panel(team: &TeamColumn, in_tiebreak: bool) -> Paragraph<'_> {
    let title = if team.serving {
        format!(" ● {} ", team.name)
    } else {
        format!(" {} ", team.name)
    };
    let points_label = if in_tiebreak { "Tiebreak" } else { "Points" };

    let lines = vec![
        Line::from(vec![
            Span::raw("Sets   "),
            Span::styled(team.sets.to_string(), Theme::counter()),
        ]),
        Line::from(vec![
            Span::raw("Games  "),
            Span::styled(team.games.to_string(), Theme::counter()),
        ]),
        Line::from(vec![
            Span::raw(format!("{points_label:<7}")),
            Span::styled(team.points.as_str(), Theme::points()),
        ]),
    ];

    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(title, Theme::team_name(team.serving))),
    )
}

fn render_server(frame: &mut Frame, area: Rect, view: &ScoreboardView) {
    let server = Paragraph::new(Span::styled(view.server_line.as_str(), Theme::server()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Serving "));
    frame.render_widget(server, area);
}
