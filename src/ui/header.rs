//! Header rendering with ASCII art logo.

use chrono::Local;
use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::timer::Phase;

use super::colors;

/// Returns the color for the phase chip in the header.
fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Idle => colors::IDLE,
        Phase::Work => colors::WORK,
        Phase::ShortBreak | Phase::LongBreak => colors::BREAK,
    }
}

/// Draws the header with ASCII art logo, phase chip, and wall clock.
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let border_style = Style::default().fg(colors::BORDER);
    let dim_style = Style::default().fg(Color::Rgb(55, 65, 81));
    let muted_style = Style::default().fg(Color::Rgb(75, 85, 99));
    let logo_style = Style::default().fg(colors::PRIMARY).bold();

    // Phase chip next to the logo
    let phase = app.timer.phase();
    let chip_style = Style::default().fg(phase_color(phase)).bold();
    let chip_marker = if phase.is_active() { " ● " } else { " ○ " };

    // Top border with the phase chip
    let line0 = Line::from(vec![
        Span::styled("┏", Style::default().fg(colors::ACCENT)),
        Span::styled("━━━━━━━━━━━━━━━━━━━━━", border_style),
        Span::styled("┓", Style::default().fg(colors::PRIMARY)),
        Span::styled("░▒▓", dim_style),
        Span::styled("┃", border_style),
        Span::styled(chip_marker, chip_style),
        Span::styled(phase.label().to_uppercase(), chip_style),
        Span::styled(" ┃", border_style),
        Span::styled("▓▒░", dim_style),
        Span::styled("╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍", dim_style),
    ]);

    // Logo line 1 + info panel top
    let line1 = Line::from(vec![
        Span::styled("┃", Style::default().fg(colors::ACCENT)),
        Span::styled(" ▀█▀ █▀█ █▀▄▀█ █▀█  ", logo_style),
        Span::styled("┃", Style::default().fg(colors::PRIMARY)),
        Span::styled("  ╭───────────────────────────╮", border_style),
    ]);

    // Logo line 2 + POMODORO::TUI title
    let line2 = Line::from(vec![
        Span::styled("┃", Style::default().fg(colors::ACCENT)),
        Span::styled("  █  █ █ █ ▀ █ █ █  ", logo_style),
        Span::styled("┃", Style::default().fg(colors::PRIMARY)),
        Span::styled("  │ ", border_style),
        Span::styled("◆", Style::default().fg(colors::ACCENT)),
        Span::styled(" POMODORO", Style::default().fg(colors::PRIMARY).bold()),
        Span::styled("::", muted_style),
        Span::styled("TIMER", Style::default().fg(colors::KEY).bold()),
        Span::styled(" ▸▸ ", muted_style),
        Span::styled("TUI", Style::default().fg(colors::ACCENT).bold()),
        Span::styled(" ◆ │", border_style),
    ]);

    // Logo line 3 + info tags
    let line3 = Line::from(vec![
        Span::styled("┃", Style::default().fg(colors::ACCENT)),
        Span::styled("  █  █▄█ █   █ █▄█  ", logo_style),
        Span::styled("┃", Style::default().fg(colors::PRIMARY)),
        Span::styled("  │ ", border_style),
        Span::styled("▪", Style::default().fg(colors::SECONDARY)),
        Span::styled(" FOCUS ", Style::default().fg(colors::MUTED)),
        Span::styled("│", dim_style),
        Span::styled(" ▪", Style::default().fg(colors::SUCCESS)),
        Span::styled(" BREAKS ", Style::default().fg(colors::MUTED)),
        Span::styled("│", dim_style),
        Span::styled(" ▪", Style::default().fg(colors::WARNING)),
        Span::styled(format!(" v{} │", env!("CARGO_PKG_VERSION")), border_style),
    ]);

    // Info panel bottom
    let line4 = Line::from(vec![
        Span::styled("┃", Style::default().fg(colors::ACCENT)),
        Span::styled("                    ", logo_style),
        Span::styled("┃", Style::default().fg(colors::PRIMARY)),
        Span::styled("  ╰───────────────────────────╯", border_style),
    ]);

    // Bottom border + wall clock
    let line5 = Line::from(vec![
        Span::styled("┗", Style::default().fg(colors::ACCENT)),
        Span::styled("━━━━━━━━━━━━━━━━━━━━━", border_style),
        Span::styled("┛", Style::default().fg(colors::PRIMARY)),
        Span::styled("  ╾╢", border_style),
        Span::styled(" ⬢  ", Style::default().fg(colors::SECONDARY)),
        Span::styled(
            Local::now().format("%H:%M:%S").to_string(),
            Style::default().fg(colors::SECONDARY).bold(),
        ),
        Span::styled(" ╟╼", border_style),
    ]);

    let header = Paragraph::new(vec![line0, line1, line2, line3, line4, line5]);
    frame.render_widget(header, area);
}
