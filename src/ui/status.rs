//! Status bar and commands bar rendering.

use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, View};

use super::colors;

/// Draws the commands bar showing available actions for the current view.
pub fn draw_commands_bar(frame: &mut Frame, area: Rect, app: &App) {
    let commands = get_commands_for_view(&app.current_view, app.timer.phase().is_active());

    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default())];

    for (i, (key, desc)) in commands.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(colors::BORDER)));
        }
        spans.push(Span::styled(*key, Style::default().fg(colors::KEY).bold()));
        spans.push(Span::styled(" ", Style::default()));
        spans.push(Span::styled(*desc, Style::default().fg(colors::MUTED)));
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(colors::BORDER));

    let commands_widget = Paragraph::new(Line::from(spans)).block(block);

    frame.render_widget(commands_widget, area);
}

/// Returns the list of commands available for a given view.
fn get_commands_for_view(view: &View, timer_active: bool) -> Vec<(&'static str, &'static str)> {
    match view {
        View::Main if timer_active => vec![
            ("x", "stop"),
            ("s", "restart"),
            ("?", "help"),
            ("q", "quit"),
        ],
        View::Main => vec![
            ("j/k", "select"),
            ("Enter", "edit"),
            ("s", "start"),
            ("r", "reset defaults"),
            ("?", "help"),
            ("q", "quit"),
        ],
        View::Editing(_) => vec![("Enter", "save"), ("Esc", "cancel")],
    }
}

/// Draws the status bar at the bottom (for messages).
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let (text, style) = if let Some(status) = &app.status {
        let style = if status.is_error {
            Style::default().fg(colors::ERROR)
        } else {
            Style::default().fg(colors::SUCCESS)
        };
        (format!(" {} ", status.text), style)
    } else {
        (" Ready".to_string(), Style::default().fg(colors::MUTED))
    };

    let status = Paragraph::new(text).style(style);
    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_commands_include_editing() {
        let commands = get_commands_for_view(&View::Main, false);
        assert!(commands.iter().any(|(key, _)| *key == "Enter"));
        assert!(commands.iter().any(|(key, _)| *key == "s"));
        assert!(commands.iter().any(|(key, _)| *key == "r"));
    }

    #[test]
    fn test_running_commands_drop_editing() {
        let commands = get_commands_for_view(&View::Main, true);
        assert!(!commands.iter().any(|(key, _)| *key == "Enter"));
        assert!(commands.iter().any(|(key, _)| *key == "x"));
    }

    #[test]
    fn test_edit_dialog_commands() {
        let commands =
            get_commands_for_view(&View::Editing(crate::app::SettingsField::Work), false);
        assert_eq!(commands, vec![("Enter", "save"), ("Esc", "cancel")]);
    }
}
