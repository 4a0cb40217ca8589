//! Session panel: current phase and remaining time.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::timer::Phase;

use super::colors;
use super::utils::format_clock;

/// Draws the phase label and the countdown.
///
/// While idle the countdown area stays empty; the panel invites the user to
/// start a session instead.
pub fn draw_session_panel(frame: &mut Frame, area: Rect, app: &App) {
    let phase = app.timer.phase();

    let (accent, hint) = match phase {
        Phase::Idle => (colors::IDLE, "press 's' to start a session"),
        Phase::Work => (colors::WORK, "stay focused"),
        Phase::ShortBreak => (colors::BREAK, "stretch your legs"),
        Phase::LongBreak => (colors::BREAK, "you earned this one"),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
        .border_set(symbols::border::ROUNDED)
        .title(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled("Session", Style::default().fg(Color::White).bold()),
            Span::styled(" ", Style::default()),
        ]));

    // Remaining time, or an empty line while idle
    let clock_line = match app.timer.remaining_seconds() {
        Some(seconds) => Line::from(Span::styled(
            format_clock(seconds),
            Style::default().fg(accent).bold(),
        )),
        None => Line::from(""),
    };

    // Rounds still ahead of the current one, shown only while active
    let rounds_line = match app.timer.remaining_rounds() {
        Some(rounds) => Line::from(Span::styled(
            format!("{rounds} of {} rounds left after this one", app.timer.rounds()),
            Style::default().fg(colors::MUTED),
        )),
        None => Line::from(Span::styled(
            format!("{} rounds configured", app.timer.rounds()),
            Style::default().fg(colors::MUTED),
        )),
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            phase.label(),
            Style::default().fg(accent).bold(),
        )),
        clock_line,
        rounds_line,
        Line::from(Span::styled(hint, Style::default().fg(colors::MUTED))),
    ];

    let panel = Paragraph::new(content)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(panel, area);
}
