//! Help overlay rendering.

use ratatui::{
    style::{Color, Style, Stylize},
    symbols,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::constants::dialog;

use super::colors;
use super::utils::centered_rect;

/// Draws a help overlay popup.
pub fn draw_help_overlay(frame: &mut Frame) {
    let area = centered_rect(dialog::HELP_WIDTH, dialog::HELP_HEIGHT, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let help = Paragraph::new(get_help_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::PRIMARY))
                .border_set(symbols::border::DOUBLE)
                .title(Line::from(vec![
                    Span::styled(" Help ", Style::default().fg(Color::White).bold()),
                    Span::styled(
                        "- Press any key to close ",
                        Style::default().fg(colors::MUTED),
                    ),
                ])),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help, area);
}

/// Returns the help text content.
fn get_help_text() -> Text<'static> {
    let key_style = Style::default().fg(colors::KEY).bold();
    let desc_style = Style::default().fg(Color::White);
    let section_style = Style::default().fg(colors::PRIMARY).bold();

    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("    {key:<10}"), key_style),
            Span::styled(desc, desc_style),
        ])
    };

    Text::from(vec![
        Line::from(""),
        Line::from(Span::styled("  TIMER", section_style)),
        Line::from(""),
        entry("s", "start a session (restarts if already running)"),
        entry("x", "stop and return to idle"),
        Line::from(""),
        Line::from(Span::styled("  SETTINGS", section_style)),
        Line::from(""),
        entry("j / ↓", "select the next setting"),
        entry("k / ↑", "select the previous setting"),
        entry("Enter", "edit the selected setting (idle only)"),
        entry("r", "restore the default settings (idle only)"),
        Line::from(""),
        Line::from(Span::styled("  SESSION SHAPE", section_style)),
        Line::from(""),
        Line::from(Span::styled(
            "    Each round is a work interval followed by a short break.",
            Style::default().fg(colors::MUTED),
        )),
        Line::from(Span::styled(
            "    The final round ends with the long break instead, and the",
            Style::default().fg(colors::MUTED),
        )),
        Line::from(Span::styled(
            "    timer returns to idle when it finishes.",
            Style::default().fg(colors::MUTED),
        )),
        Line::from(""),
        Line::from(Span::styled("  GENERAL", section_style)),
        Line::from(""),
        entry("?", "toggle this help"),
        entry("q", "quit"),
    ])
}
