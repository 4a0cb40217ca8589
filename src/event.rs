//! Event handling module.
//!
//! This module handles keyboard and terminal events using crossterm.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::constants::POLL_TIMEOUT;

/// Represents the different actions a user can take in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Move the settings selection up
    Up,
    /// Move the settings selection down
    Down,
    /// Edit the selected setting / submit the edit dialog
    Enter,
    /// Cancel the edit dialog
    Back,
    /// Start a Pomodoro session
    StartTimer,
    /// Stop the running session
    StopTimer,
    /// Restore the default settings
    Reset,
    /// Show help
    Help,
    /// Character input (for the edit dialog)
    Char(char),
    /// Backspace key (for the edit dialog)
    Backspace,
}

/// Handles terminal events and converts them to application actions.
pub struct EventHandler {
    /// Timeout for polling events
    poll_timeout: Duration,
}

impl EventHandler {
    /// Creates a new event handler with default settings.
    pub fn new() -> Self {
        Self {
            poll_timeout: POLL_TIMEOUT,
        }
    }

    /// Polls for the next event and converts it to an Action.
    ///
    /// Returns Ok(None) if no event is available within the timeout.
    /// Returns Ok(Some(action)) if a key event was converted to an action.
    pub fn next(&self) -> io::Result<Option<Action>> {
        if event::poll(self.poll_timeout)? {
            if let Event::Key(key_event) = event::read()? {
                // Only process key press events (not releases)
                if key_event.kind == KeyEventKind::Press {
                    return Ok(self.key_to_action(key_event));
                }
            }
        }
        Ok(None)
    }

    /// Polls for edit-dialog events (for text entry).
    ///
    /// This captures character input and special keys for text editing.
    pub fn next_input(&self) -> io::Result<Option<Action>> {
        if event::poll(self.poll_timeout)? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press {
                    return Ok(self.key_to_input_action(key_event));
                }
            }
        }
        Ok(None)
    }

    /// Converts a key event to an edit-dialog action.
    pub(crate) fn key_to_input_action(&self, key: KeyEvent) -> Option<Action> {
        // Check for Ctrl+C (quit)
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match key.code {
            KeyCode::Enter => Some(Action::Enter),
            KeyCode::Esc => Some(Action::Back),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Char(c) => Some(Action::Char(c)),
            _ => None,
        }
    }

    /// Converts a key event to an application action.
    pub(crate) fn key_to_action(&self, key: KeyEvent) -> Option<Action> {
        // Check for Ctrl+C first (quit)
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        // Map keys to actions
        match key.code {
            // Navigation
            KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
            KeyCode::Enter => Some(Action::Enter),
            KeyCode::Esc => Some(Action::Back),

            // Actions
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('s') => Some(Action::StartTimer),
            KeyCode::Char('x') => Some(Action::StopTimer),
            KeyCode::Char('r') => Some(Action::Reset),
            KeyCode::Char('?') | KeyCode::F(1) => Some(Action::Help),

            // No matching action
            _ => None,
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn make_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn make_ctrl_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_vim_navigation_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('j'))),
            Some(Action::Down)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('k'))),
            Some(Action::Up)
        );
    }

    #[test]
    fn test_arrow_navigation_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Up)),
            Some(Action::Up)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Down)),
            Some(Action::Down)
        );
    }

    #[test]
    fn test_quit_actions() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('q'))),
            Some(Action::Quit)
        );
        assert_eq!(
            handler.key_to_action(make_ctrl_key_event(KeyCode::Char('c'))),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_timer_control_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('s'))),
            Some(Action::StartTimer)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('x'))),
            Some(Action::StopTimer)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('r'))),
            Some(Action::Reset)
        );
    }

    #[test]
    fn test_help_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('?'))),
            Some(Action::Help)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::F(1))),
            Some(Action::Help)
        );
    }

    #[test]
    fn test_unknown_key_returns_none() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('z'))),
            None
        );
        assert_eq!(handler.key_to_action(make_key_event(KeyCode::F(12))), None);
    }

    #[test]
    fn test_input_mode_actions() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_input_action(make_key_event(KeyCode::Enter)),
            Some(Action::Enter)
        );
        assert_eq!(
            handler.key_to_input_action(make_key_event(KeyCode::Esc)),
            Some(Action::Back)
        );
        assert_eq!(
            handler.key_to_input_action(make_key_event(KeyCode::Backspace)),
            Some(Action::Backspace)
        );
        assert_eq!(
            handler.key_to_input_action(make_key_event(KeyCode::Char('7'))),
            Some(Action::Char('7'))
        );
    }

    #[test]
    fn test_input_mode_ctrl_c_quits() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_input_action(make_ctrl_key_event(KeyCode::Char('c'))),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_input_mode_keeps_command_keys_as_text() {
        let handler = EventHandler::new();

        // While editing, 's' and 'q' are text, not commands.
        assert_eq!(
            handler.key_to_input_action(make_key_event(KeyCode::Char('s'))),
            Some(Action::Char('s'))
        );
        assert_eq!(
            handler.key_to_input_action(make_key_event(KeyCode::Char('q'))),
            Some(Action::Char('q'))
        );
    }
}
