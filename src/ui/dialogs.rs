//! Edit dialog rendering.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

use crate::app::{App, SettingsField};
use crate::constants::dialog;

use super::colors;
use super::utils::centered_rect;

/// Block cursor character for input fields.
pub(crate) const BLOCK_CURSOR: &str = "█";

/// Input field prompt indicator.
pub(crate) const INPUT_INDICATOR: &str = "› ";

/// Prompt text for a settings field.
fn prompt_for(field: SettingsField) -> &'static str {
    match field {
        SettingsField::Work => "Work interval, in minutes:",
        SettingsField::ShortBreak => "Short break, in minutes:",
        SettingsField::LongBreak => "Long break, in minutes:",
        SettingsField::Rounds => "Work intervals per session:",
    }
}

/// Draws the settings edit dialog over the main screen.
pub fn draw_edit_dialog(frame: &mut Frame, field: SettingsField, app: &App) {
    let area = centered_rect(dialog::INPUT_WIDTH, dialog::INPUT_HEIGHT, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::PRIMARY))
        .border_set(symbols::border::DOUBLE)
        .title(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled(field.title(), Style::default().fg(Color::White).bold()),
            Span::styled(" ", Style::default()),
        ]))
        .padding(Padding::uniform(1));

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            prompt_for(field),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("  {INPUT_INDICATOR}"),
                Style::default().fg(colors::MUTED),
            ),
            Span::styled(&app.input_buffer, Style::default().fg(Color::White)),
            Span::styled(
                BLOCK_CURSOR,
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled("Enter", Style::default().fg(colors::KEY).bold()),
            Span::styled(" save  ", Style::default().fg(colors::MUTED)),
            Span::styled("Esc", Style::default().fg(colors::KEY).bold()),
            Span::styled(" cancel", Style::default().fg(colors::MUTED)),
        ]),
    ];

    let dialog_widget = Paragraph::new(content)
        .block(block)
        .alignment(Alignment::Left);

    frame.render_widget(dialog_widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_has_a_prompt() {
        for field in SettingsField::ALL {
            assert!(!prompt_for(field).is_empty());
        }
    }

    #[test]
    fn test_duration_prompts_mention_minutes() {
        assert!(prompt_for(SettingsField::Work).contains("minutes"));
        assert!(prompt_for(SettingsField::ShortBreak).contains("minutes"));
        assert!(prompt_for(SettingsField::LongBreak).contains("minutes"));
    }
}
