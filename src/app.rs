//! Application state and logic.
//!
//! This module contains the application state, view management, and event
//! handling logic. It is the boundary between the keyboard and the timer:
//! every edit is validated and phase-guarded here before a setter is called,
//! and timer events are turned into status-bar messages.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;

use crate::event::Action;
use crate::timer::{Phase, Timer, TimerConfig, TimerEvent};
use crate::validation;

/// Longest input accepted by the edit dialog. Validation caps values at three
/// digits anyway; this only stops the buffer growing unbounded.
const MAX_INPUT_LEN: usize = 8;

/// The different views/screens in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// The main screen: session panel plus settings list
    Main,
    /// Editing one settings field in a dialog
    Editing(SettingsField),
}

/// The four editable settings, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    /// Work interval length (minutes)
    Work,
    /// Short break length (minutes)
    ShortBreak,
    /// Long break length (minutes)
    LongBreak,
    /// Work intervals per session
    Rounds,
}

impl SettingsField {
    /// All fields in the order the settings list shows them.
    pub const ALL: [SettingsField; 4] = [
        SettingsField::Work,
        SettingsField::ShortBreak,
        SettingsField::LongBreak,
        SettingsField::Rounds,
    ];

    /// Display name for the settings list and edit dialog.
    pub fn title(&self) -> &'static str {
        match self {
            SettingsField::Work => "Work time",
            SettingsField::ShortBreak => "Short break",
            SettingsField::LongBreak => "Long break",
            SettingsField::Rounds => "Rounds",
        }
    }
}

/// Status message to display to the user.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// The message text
    pub text: String,
    /// Whether this is an error message
    pub is_error: bool,
}

/// Main application state.
pub struct App {
    /// The Pomodoro state machine
    pub timer: Timer,
    /// Current view/screen
    pub current_view: View,
    /// Which settings field the cursor is on
    pub selected_index: usize,
    /// Current input buffer for the edit dialog
    pub input_buffer: String,
    /// Status message to display
    pub status: Option<StatusMessage>,
    /// Help overlay visibility
    pub show_help: bool,
    /// Phase changes observed by the timer subscription, drained into
    /// status messages after each action or tick
    phase_changes: Rc<RefCell<Vec<(Phase, Phase)>>>,
}

impl App {
    /// Creates the application around a timer with the given configuration.
    pub fn new(config: TimerConfig) -> Self {
        let mut timer = Timer::with_config(config);

        let phase_changes = Rc::new(RefCell::new(Vec::new()));
        let recorder = Rc::clone(&phase_changes);
        timer.subscribe(move |event| {
            if let TimerEvent::PhaseChanged { from, to } = event {
                recorder.borrow_mut().push((from, to));
            }
        });

        Self {
            timer,
            current_view: View::Main,
            selected_index: 0,
            input_buffer: String::new(),
            status: None,
            show_help: false,
            phase_changes,
        }
    }

    /// The settings field the cursor is currently on.
    pub fn selected_field(&self) -> SettingsField {
        SettingsField::ALL[self.selected_index]
    }

    /// Advances the timer by one second and reports any phase change.
    pub fn tick(&mut self) {
        self.timer.tick();
        self.announce_phase_changes();
    }

    /// Handles an action and returns true if the app should quit.
    pub fn handle_event(&mut self, action: Action) -> Result<bool> {
        // Handle help toggle from any view
        if action == Action::Help {
            self.show_help = !self.show_help;
            return Ok(false);
        }

        // If help is showing, any key closes it
        if self.show_help {
            self.show_help = false;
            return Ok(false);
        }

        // Handle the edit dialog
        if let View::Editing(field) = self.current_view {
            self.handle_edit_action(action, field);
            return Ok(false);
        }

        // Main view
        match action {
            Action::Quit => return Ok(true),
            Action::Up => self.select_previous_field(),
            Action::Down => self.select_next_field(),
            Action::Enter => self.begin_edit(),
            Action::StartTimer => self.start_timer(),
            Action::StopTimer => self.stop_timer(),
            Action::Reset => self.reset_settings(),
            _ => {}
        }
        Ok(false)
    }

    // --- Settings selection ---

    fn select_previous_field(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    fn select_next_field(&mut self) {
        if self.selected_index + 1 < SettingsField::ALL.len() {
            self.selected_index += 1;
        }
    }

    // --- Edit dialog ---

    /// Opens the edit dialog for the selected field, pre-filled with the
    /// current value. Refused while the timer is running so a live session
    /// can never be reconfigured.
    fn begin_edit(&mut self) {
        if self.timer.phase().is_active() {
            self.set_status("Stop the timer to change settings", true);
            return;
        }

        let field = self.selected_field();
        self.input_buffer = self.current_value_text(field);
        self.current_view = View::Editing(field);
    }

    /// The selected field's current value, as the user would type it.
    pub fn current_value_text(&self, field: SettingsField) -> String {
        match field {
            SettingsField::Work => (self.timer.work_seconds() / 60).to_string(),
            SettingsField::ShortBreak => (self.timer.short_break_seconds() / 60).to_string(),
            SettingsField::LongBreak => (self.timer.long_break_seconds() / 60).to_string(),
            SettingsField::Rounds => self.timer.rounds().to_string(),
        }
    }

    fn handle_edit_action(&mut self, action: Action, field: SettingsField) {
        match action {
            Action::Enter => self.submit_edit(field),
            Action::Back => {
                // Cancel: the field keeps showing the timer's current value.
                self.input_buffer.clear();
                self.current_view = View::Main;
            }
            Action::Char(c) => {
                if !c.is_control() && self.input_buffer.len() < MAX_INPUT_LEN {
                    self.input_buffer.push(c);
                }
            }
            Action::Backspace => {
                self.input_buffer.pop();
            }
            _ => {}
        }
    }

    /// Validates the buffer and stores it through the timer's guarded setter.
    /// Invalid input leaves the dialog open with an error message; nothing
    /// invalid ever reaches the timer.
    fn submit_edit(&mut self, field: SettingsField) {
        let result = match field {
            SettingsField::Work => validation::parse_minutes(&self.input_buffer)
                .and_then(|minutes| {
                    self.timer
                        .set_work_seconds(minutes * 60)
                        .map(|()| minutes)
                        .map_err(|e| e.to_string())
                }),
            SettingsField::ShortBreak => validation::parse_minutes(&self.input_buffer)
                .and_then(|minutes| {
                    self.timer
                        .set_short_break_seconds(minutes * 60)
                        .map(|()| minutes)
                        .map_err(|e| e.to_string())
                }),
            SettingsField::LongBreak => validation::parse_minutes(&self.input_buffer)
                .and_then(|minutes| {
                    self.timer
                        .set_long_break_seconds(minutes * 60)
                        .map(|()| minutes)
                        .map_err(|e| e.to_string())
                }),
            SettingsField::Rounds => validation::parse_rounds(&self.input_buffer)
                .and_then(|rounds| {
                    self.timer
                        .set_rounds(rounds)
                        .map(|()| u64::from(rounds))
                        .map_err(|e| e.to_string())
                }),
        };

        match result {
            Ok(value) => {
                let unit = if field == SettingsField::Rounds {
                    "rounds"
                } else {
                    "min"
                };
                self.set_status(&format!("{} set to {value} {unit}", field.title()), false);
                self.input_buffer.clear();
                self.current_view = View::Main;
            }
            Err(message) => {
                self.set_status(&message, true);
            }
        }
    }

    // --- Timer controls ---

    fn start_timer(&mut self) {
        self.timer.start();
        self.announce_phase_changes();
    }

    fn stop_timer(&mut self) {
        self.timer.stop();
        self.announce_phase_changes();
    }

    fn reset_settings(&mut self) {
        match self.timer.reset_to_defaults() {
            Ok(()) => self.set_status("Settings restored to defaults", false),
            Err(e) => self.set_status(&e.to_string(), true),
        }
    }

    /// Turns phase changes recorded by the subscription into status messages.
    fn announce_phase_changes(&mut self) {
        let changes: Vec<(Phase, Phase)> = self.phase_changes.borrow_mut().drain(..).collect();
        for (from, to) in changes {
            let text = match (from, to) {
                (Phase::Idle, Phase::Work) => "Session started - time to focus",
                (_, Phase::Work) => "Break's over - back to work",
                (_, Phase::ShortBreak) => "Round done - take a short break",
                (_, Phase::LongBreak) => "Last round done - enjoy the long break",
                (Phase::LongBreak, Phase::Idle) => "Session complete",
                (_, Phase::Idle) => "Timer stopped",
            };
            self.set_status(text, false);
        }
    }

    /// Sets the status bar message.
    pub fn set_status(&mut self, text: &str, is_error: bool) {
        self.status = Some(StatusMessage {
            text: text.to_string(),
            is_error,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::Phase;

    fn test_app() -> App {
        App::new(TimerConfig {
            work_seconds: 3,
            short_break_seconds: 2,
            long_break_seconds: 4,
            rounds: 2,
        })
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_event(Action::Char(c)).unwrap();
        }
    }

    #[test]
    fn test_quit_from_main_view() {
        let mut app = test_app();
        assert!(app.handle_event(Action::Quit).unwrap());
    }

    #[test]
    fn test_field_selection_stays_in_bounds() {
        let mut app = test_app();

        app.handle_event(Action::Up).unwrap();
        assert_eq!(app.selected_field(), SettingsField::Work);

        for _ in 0..10 {
            app.handle_event(Action::Down).unwrap();
        }
        assert_eq!(app.selected_field(), SettingsField::Rounds);
    }

    #[test]
    fn test_edit_flow_updates_the_timer() {
        let mut app = test_app();

        app.handle_event(Action::Enter).unwrap();
        assert_eq!(app.current_view, View::Editing(SettingsField::Work));
        // Pre-filled with the current value in minutes (3 s rounds down to 0).
        app.input_buffer.clear();

        type_text(&mut app, "25");
        app.handle_event(Action::Enter).unwrap();

        assert_eq!(app.current_view, View::Main);
        assert_eq!(app.timer.work_seconds(), 25 * 60);
        assert!(!app.status.as_ref().unwrap().is_error);
    }

    #[test]
    fn test_edit_refused_while_running() {
        let mut app = test_app();
        app.handle_event(Action::StartTimer).unwrap();

        app.handle_event(Action::Enter).unwrap();

        // The dialog never opens and the value is untouched.
        assert_eq!(app.current_view, View::Main);
        assert_eq!(app.timer.work_seconds(), 3);
        assert!(app.status.as_ref().unwrap().is_error);
    }

    #[test]
    fn test_invalid_input_never_reaches_the_timer() {
        let mut app = test_app();

        app.handle_event(Action::Enter).unwrap();
        app.input_buffer.clear();
        type_text(&mut app, "0");
        app.handle_event(Action::Enter).unwrap();

        // Still editing, error shown, timer unchanged.
        assert_eq!(app.current_view, View::Editing(SettingsField::Work));
        assert!(app.status.as_ref().unwrap().is_error);
        assert_eq!(app.timer.work_seconds(), 3);
    }

    #[test]
    fn test_cancel_edit_keeps_current_value() {
        let mut app = test_app();

        app.handle_event(Action::Enter).unwrap();
        type_text(&mut app, "99");
        app.handle_event(Action::Back).unwrap();

        assert_eq!(app.current_view, View::Main);
        assert_eq!(app.timer.work_seconds(), 3);
    }

    #[test]
    fn test_start_stop_controls() {
        let mut app = test_app();

        app.handle_event(Action::StartTimer).unwrap();
        assert_eq!(app.timer.phase(), Phase::Work);
        assert_eq!(app.status.as_ref().unwrap().text, "Session started - time to focus");

        app.handle_event(Action::StopTimer).unwrap();
        assert_eq!(app.timer.phase(), Phase::Idle);
        assert_eq!(app.status.as_ref().unwrap().text, "Timer stopped");
    }

    #[test]
    fn test_reset_refused_while_running() {
        let mut app = test_app();
        app.handle_event(Action::StartTimer).unwrap();

        app.handle_event(Action::Reset).unwrap();

        assert!(app.status.as_ref().unwrap().is_error);
        assert_eq!(app.timer.work_seconds(), 3);
    }

    #[test]
    fn test_reset_restores_defaults_while_idle() {
        let mut app = test_app();

        app.handle_event(Action::Reset).unwrap();

        assert_eq!(app.timer.work_seconds(), 1500);
        assert_eq!(app.timer.short_break_seconds(), 300);
        assert_eq!(app.timer.long_break_seconds(), 900);
        assert_eq!(app.timer.rounds(), 4);
    }

    #[test]
    fn test_ticks_announce_phase_changes() {
        let mut app = test_app();
        app.handle_event(Action::StartTimer).unwrap();

        // 3-second work interval completes into the short break.
        app.tick();
        app.tick();
        app.tick();

        assert_eq!(app.timer.phase(), Phase::ShortBreak);
        assert_eq!(
            app.status.as_ref().unwrap().text,
            "Round done - take a short break"
        );
    }

    #[test]
    fn test_help_toggle_and_any_key_close() {
        let mut app = test_app();

        app.handle_event(Action::Help).unwrap();
        assert!(app.show_help);

        app.handle_event(Action::StartTimer).unwrap();
        assert!(!app.show_help);
        // The key that closed help is swallowed.
        assert_eq!(app.timer.phase(), Phase::Idle);
    }
}
