//! Application-wide constants.
//!
//! Centralizes magic numbers and configuration values for maintainability.

use std::time::Duration;

/// Event polling timeout - balances responsiveness with CPU usage.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// How often the countdown advances. One tick per elapsed second.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Compiled-in default configuration (the classic Pomodoro schedule).
pub mod defaults {
    /// Work interval: 25 minutes.
    pub const WORK_SECONDS: u64 = 25 * 60;
    /// Short break: 5 minutes.
    pub const SHORT_BREAK_SECONDS: u64 = 5 * 60;
    /// Long break: 15 minutes.
    pub const LONG_BREAK_SECONDS: u64 = 15 * 60;
    /// Work intervals per session.
    pub const ROUNDS: u32 = 4;
}

/// Bounds enforced on user-entered settings.
pub mod limits {
    /// Longest accepted duration, in minutes.
    pub const MAX_MINUTES: u64 = 999;
    /// Most rounds a session may contain.
    pub const MAX_ROUNDS: u32 = 99;
}

/// Layout dimensions for the main UI structure.
pub mod layout {
    /// Header height including ASCII art and info panel.
    pub const HEADER_HEIGHT: u16 = 6;
    /// Session panel (phase + countdown) height.
    pub const SESSION_HEIGHT: u16 = 7;
    /// Commands bar height.
    pub const COMMANDS_BAR_HEIGHT: u16 = 3;
    /// Status bar height.
    pub const STATUS_BAR_HEIGHT: u16 = 1;
}

/// Dialog dimensions (percentages of screen size).
pub mod dialog {
    /// Help overlay width percentage.
    pub const HELP_WIDTH: u16 = 60;
    /// Help overlay height percentage.
    pub const HELP_HEIGHT: u16 = 70;
    /// Edit dialog width percentage.
    pub const INPUT_WIDTH: u16 = 50;
    /// Edit dialog height percentage.
    pub const INPUT_HEIGHT: u16 = 25;
}
