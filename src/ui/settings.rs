//! Settings panel: the four configurable values with a selection cursor.

use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::app::{App, SettingsField};

use super::colors;
use super::utils::format_minutes;

/// Draws the settings list. The selected row is highlighted; while the timer
/// runs the whole list dims to signal that edits are locked.
pub fn draw_settings_panel(frame: &mut Frame, area: Rect, app: &App) {
    let locked = app.timer.phase().is_active();

    let title = if locked {
        Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled("Settings", Style::default().fg(Color::White).bold()),
            Span::styled(" (locked while running) ", Style::default().fg(colors::MUTED)),
        ])
    } else {
        Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled("Settings", Style::default().fg(Color::White).bold()),
            Span::styled(" ", Style::default()),
        ])
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
        .border_set(symbols::border::ROUNDED)
        .title(title);

    let items: Vec<ListItem> = SettingsField::ALL
        .iter()
        .enumerate()
        .map(|(index, field)| list_item(app, *field, index == app.selected_index, locked))
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

fn list_item(app: &App, field: SettingsField, selected: bool, locked: bool) -> ListItem<'static> {
    let value = match field {
        SettingsField::Work => format_minutes(app.timer.work_seconds()),
        SettingsField::ShortBreak => format_minutes(app.timer.short_break_seconds()),
        SettingsField::LongBreak => format_minutes(app.timer.long_break_seconds()),
        SettingsField::Rounds => format!("{} rounds", app.timer.rounds()),
    };

    let (marker, label_style, value_style) = if selected {
        (
            " › ",
            Style::default()
                .fg(colors::SELECTION_TEXT)
                .bg(colors::SELECTION)
                .bold(),
            Style::default()
                .fg(colors::SELECTION_TEXT)
                .bg(colors::SELECTION),
        )
    } else if locked {
        (
            "   ",
            Style::default().fg(colors::MUTED),
            Style::default().fg(colors::MUTED),
        )
    } else {
        (
            "   ",
            Style::default().fg(Color::White),
            Style::default().fg(colors::SECONDARY),
        )
    };

    ListItem::new(Line::from(vec![
        Span::styled(marker, Style::default().fg(colors::KEY)),
        Span::styled(format!("{:<14}", field.title()), label_style),
        Span::styled(value, value_style),
    ]))
}
