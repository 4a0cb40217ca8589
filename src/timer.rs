//! The Pomodoro timer state machine.
//!
//! This is the headless core of the application: it owns the configured
//! durations, the current phase, the countdown, and the round counter, and it
//! advances exactly one second per `tick()`. Everything UI-related lives
//! elsewhere and only talks to the timer through its getters, guarded setters,
//! and the subscription mechanism.

use std::fmt;

use crate::constants::defaults;

/// The timer's current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not counting down; the only phase in which settings may change.
    Idle,
    /// A work interval.
    Work,
    /// The break between work intervals.
    ShortBreak,
    /// The final break that ends a session.
    LongBreak,
}

impl Phase {
    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Idle => "Preparing",
            Phase::Work => "Work",
            Phase::ShortBreak => "Short break",
            Phase::LongBreak => "Long break",
        }
    }

    /// Whether the timer is counting down in this phase.
    pub fn is_active(&self) -> bool {
        *self != Phase::Idle
    }
}

/// Events pushed to subscribers as the timer advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Fired after every `tick()`, idle ticks included, so observers can
    /// refresh fields that do not depend on the countdown.
    Tick,
    /// Fired whenever the phase changes, before the accompanying `Tick`.
    PhaseChanged { from: Phase, to: Phase },
}

/// Error returned when a configuration change is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    /// Settings can only change while the timer is idle.
    NotIdle,
}

impl fmt::Display for TimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerError::NotIdle => write!(f, "timer is running; stop it to change settings"),
        }
    }
}

impl std::error::Error for TimerError {}

/// The four user-configurable values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    /// Length of a work interval, in seconds.
    pub work_seconds: u64,
    /// Length of the break between work intervals, in seconds.
    pub short_break_seconds: u64,
    /// Length of the session-ending break, in seconds.
    pub long_break_seconds: u64,
    /// How many work intervals a session contains.
    pub rounds: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_seconds: defaults::WORK_SECONDS,
            short_break_seconds: defaults::SHORT_BREAK_SECONDS,
            long_break_seconds: defaults::LONG_BREAK_SECONDS,
            rounds: defaults::ROUNDS,
        }
    }
}

/// Observer callback registered via [`Timer::subscribe`].
type Subscriber = Box<dyn FnMut(TimerEvent)>;

/// The Pomodoro countdown state machine.
///
/// Phase transitions are fully determined by the current phase, the countdown
/// reaching zero, and the round counter:
///
/// ```text
/// Idle --start--> Work --0s--> ShortBreak --0s--> Work (next round)
///                   |                               |
///                   +--0s, no rounds left--> LongBreak --0s--> Idle
/// ```
pub struct Timer {
    config: TimerConfig,
    phase: Phase,
    remaining_seconds: u64,
    remaining_rounds: u32,
    subscribers: Vec<Subscriber>,
}

impl Timer {
    /// Creates an idle timer with the default configuration.
    pub fn new() -> Self {
        Self::with_config(TimerConfig::default())
    }

    /// Creates an idle timer with the given configuration.
    ///
    /// The configuration is trusted to hold positive values; parsing and
    /// range checks happen at the input boundary (see `validation`).
    pub fn with_config(config: TimerConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
            remaining_seconds: 0,
            remaining_rounds: 0,
            subscribers: Vec::new(),
        }
    }

    /// Registers an observer. All subscribers receive every event.
    pub fn subscribe(&mut self, f: impl FnMut(TimerEvent) + 'static) {
        self.subscribers.push(Box::new(f));
    }

    /// Begins a session: resets the round counter and enters the first WORK
    /// phase. Safe to call while already active; the session restarts cleanly
    /// from a full work interval.
    pub fn start(&mut self) {
        let from = self.phase;
        self.remaining_rounds = self.config.rounds;
        self.enter_work();
        if from != self.phase {
            self.emit(TimerEvent::PhaseChanged { from, to: self.phase });
        }
    }

    /// Returns to idle from any phase.
    pub fn stop(&mut self) {
        let from = self.phase;
        self.phase = Phase::Idle;
        if from != self.phase {
            self.emit(TimerEvent::PhaseChanged { from, to: self.phase });
        }
    }

    /// Advances the timer by one second.
    ///
    /// Called exactly once per elapsed second by the drive loop. Idle ticks
    /// change nothing but still notify subscribers.
    pub fn tick(&mut self) {
        let before = self.phase;
        match self.phase {
            Phase::Idle => {}
            Phase::Work => self.advance_work(),
            Phase::ShortBreak | Phase::LongBreak => self.advance_break(),
        }
        if before != self.phase {
            self.emit(TimerEvent::PhaseChanged { from: before, to: self.phase });
        }
        self.emit(TimerEvent::Tick);
    }

    fn advance_work(&mut self) {
        self.remaining_seconds -= 1;
        if self.remaining_seconds == 0 {
            if self.remaining_rounds == 0 {
                // Last round: the session ends with the long break.
                self.enter_long_break();
            } else {
                self.enter_short_break();
            }
        }
    }

    fn advance_break(&mut self) {
        self.remaining_seconds -= 1;
        if self.remaining_seconds == 0 {
            if self.phase == Phase::LongBreak {
                self.phase = Phase::Idle;
            } else {
                self.enter_work();
            }
        }
    }

    fn enter_work(&mut self) {
        // A short break is only entered with rounds left, and start() refills
        // the counter, so this never underflows.
        self.remaining_rounds -= 1;
        self.remaining_seconds = self.config.work_seconds;
        self.phase = Phase::Work;
    }

    fn enter_short_break(&mut self) {
        self.remaining_seconds = self.config.short_break_seconds;
        self.phase = Phase::ShortBreak;
    }

    fn enter_long_break(&mut self) {
        self.remaining_seconds = self.config.long_break_seconds;
        self.phase = Phase::LongBreak;
    }

    fn emit(&mut self, event: TimerEvent) {
        for subscriber in &mut self.subscribers {
            subscriber(event);
        }
    }

    // --- Getters ---

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seconds left in the current phase, or `None` while idle.
    pub fn remaining_seconds(&self) -> Option<u64> {
        if self.phase.is_active() {
            Some(self.remaining_seconds)
        } else {
            None
        }
    }

    /// Work intervals left after the current one, or `None` while idle.
    pub fn remaining_rounds(&self) -> Option<u32> {
        if self.phase.is_active() {
            Some(self.remaining_rounds)
        } else {
            None
        }
    }

    /// The current configuration.
    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    pub fn work_seconds(&self) -> u64 {
        self.config.work_seconds
    }

    pub fn short_break_seconds(&self) -> u64 {
        self.config.short_break_seconds
    }

    pub fn long_break_seconds(&self) -> u64 {
        self.config.long_break_seconds
    }

    pub fn rounds(&self) -> u32 {
        self.config.rounds
    }

    // --- Guarded setters ---

    /// Sets the work interval length. Fails unless idle.
    pub fn set_work_seconds(&mut self, seconds: u64) -> Result<(), TimerError> {
        self.ensure_idle()?;
        self.config.work_seconds = seconds;
        Ok(())
    }

    /// Sets the short break length. Fails unless idle.
    pub fn set_short_break_seconds(&mut self, seconds: u64) -> Result<(), TimerError> {
        self.ensure_idle()?;
        self.config.short_break_seconds = seconds;
        Ok(())
    }

    /// Sets the long break length. Fails unless idle.
    pub fn set_long_break_seconds(&mut self, seconds: u64) -> Result<(), TimerError> {
        self.ensure_idle()?;
        self.config.long_break_seconds = seconds;
        Ok(())
    }

    /// Sets the number of rounds per session. Fails unless idle.
    pub fn set_rounds(&mut self, rounds: u32) -> Result<(), TimerError> {
        self.ensure_idle()?;
        self.config.rounds = rounds;
        Ok(())
    }

    /// Restores the default configuration. Fails unless idle; never touches
    /// the phase or countdown state.
    pub fn reset_to_defaults(&mut self) -> Result<(), TimerError> {
        self.ensure_idle()?;
        self.config = TimerConfig::default();
        Ok(())
    }

    fn ensure_idle(&self) -> Result<(), TimerError> {
        if self.phase.is_active() {
            Err(TimerError::NotIdle)
        } else {
            Ok(())
        }
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
