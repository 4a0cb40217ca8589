//! UI rendering module.
//!
//! This module handles all the terminal UI rendering using Ratatui.
//! Each screen region is rendered by a separate submodule for clarity.

mod colors;
mod dialogs;
mod header;
mod help;
mod session;
mod settings;
mod status;
mod utils;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, View};
use crate::constants::layout;

use dialogs::draw_edit_dialog;
use header::draw_header;
use help::draw_help_overlay;
use session::draw_session_panel;
use settings::draw_settings_panel;
use status::{draw_commands_bar, draw_status_bar};

/// Main draw function - renders every screen region.
pub fn draw(frame: &mut Frame, app: &App) {
    // Main layout: header, session panel, settings, commands bar, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(layout::HEADER_HEIGHT),
            Constraint::Length(layout::SESSION_HEIGHT),
            Constraint::Min(0), // Settings panel
            Constraint::Length(layout::COMMANDS_BAR_HEIGHT),
            Constraint::Length(layout::STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app);
    draw_session_panel(frame, chunks[1], app);
    draw_settings_panel(frame, chunks[2], app);
    draw_commands_bar(frame, chunks[3], app);
    draw_status_bar(frame, chunks[4], app);

    // The edit dialog sits on top of the main screen
    if let View::Editing(field) = app.current_view {
        draw_edit_dialog(frame, field, app);
    }

    // Help overlay on top of everything
    if app.show_help {
        draw_help_overlay(frame);
    }
}
