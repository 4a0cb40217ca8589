//! tomatui - a terminal Pomodoro timer
//!
//! Counts down work and break intervals across a configurable number of
//! rounds. Run with: tomatui [OPTIONS]

mod app;
mod constants;
mod event;
mod timer;
mod ui;
mod validation;

use std::env;
use std::time::Instant;

use anyhow::{Context, Result};

use crate::app::{App, View};
use crate::constants::TICK_INTERVAL;
use crate::event::EventHandler;
use crate::timer::TimerConfig;

/// Parses command line arguments into a timer configuration.
///
/// Supports:
/// - `-w, --work <MINUTES>` work interval length
/// - `-s, --short-break <MINUTES>` short break length
/// - `-l, --long-break <MINUTES>` long break length
/// - `-r, --rounds <COUNT>` work intervals per session
/// - `-h, --help` to show usage
///
/// Overrides go through the same validation as interactive edits, so a bad
/// value fails here instead of reaching the timer.
fn parse_args() -> TimerConfig {
    let args: Vec<String> = env::args().collect();
    let mut config = TimerConfig::default();

    // Simple argument parsing using iterator
    let mut args_iter = args.iter().skip(1); // Skip program name

    while let Some(arg) = args_iter.next() {
        match arg.as_str() {
            "-w" | "--work" => {
                config.work_seconds = minutes_value(&mut args_iter, arg) * 60;
            }
            "-s" | "--short-break" => {
                config.short_break_seconds = minutes_value(&mut args_iter, arg) * 60;
            }
            "-l" | "--long-break" => {
                config.long_break_seconds = minutes_value(&mut args_iter, arg) * 60;
            }
            "-r" | "--rounds" => {
                let value = expect_value(&mut args_iter, arg);
                config.rounds = validation::parse_rounds(&value).unwrap_or_else(|e| {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                });
            }
            "-h" | "--help" => {
                println!("tomatui - a terminal Pomodoro timer");
                println!();
                println!("Usage: tomatui [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -w, --work <MINUTES>         Work interval length (default 25)");
                println!("  -s, --short-break <MINUTES>  Short break length (default 5)");
                println!("  -l, --long-break <MINUTES>   Long break length (default 15)");
                println!("  -r, --rounds <COUNT>         Work intervals per session (default 4)");
                println!("  -h, --help                   Show this help message");
                println!();
                println!("All settings can also be changed from inside the app while idle.");
                std::process::exit(0);
            }
            other => {
                eprintln!("Error: Unknown argument '{}'", other);
                eprintln!("Use --help for usage information");
                std::process::exit(1);
            }
        }
    }

    config
}

/// Pulls the value following a flag, exiting with a usage error if missing.
fn expect_value<'a>(args_iter: &mut impl Iterator<Item = &'a String>, flag: &str) -> String {
    match args_iter.next() {
        Some(value) => value.clone(),
        None => {
            eprintln!("Error: {flag} requires a value");
            std::process::exit(1);
        }
    }
}

/// Pulls and validates a minutes value following a flag.
fn minutes_value<'a>(args_iter: &mut impl Iterator<Item = &'a String>, flag: &str) -> u64 {
    let value = expect_value(args_iter, flag);
    validation::parse_minutes(&value).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

/// Entry point for the application.
fn main() -> Result<()> {
    // Parse command line arguments
    let config = parse_args();

    // Initialize the terminal
    let terminal = ratatui::init();

    // Create the application
    let app = App::new(config);

    // Run the application
    let result = run_app(terminal, app);

    // Restore the terminal to its original state
    ratatui::restore();

    // Return the result
    result
}

/// Main application loop.
///
/// This function runs the TUI event loop:
/// 1. Draw the current UI state
/// 2. Fire any ticks that have come due
/// 3. Handle user input events
/// 4. Repeat until the user quits
///
/// Ticks are scheduled against a monotonic clock rather than counted from
/// poll iterations, so a stalled terminal catches up instead of drifting.
fn run_app(mut terminal: ratatui::DefaultTerminal, mut app: App) -> Result<()> {
    // Create the event handler
    let event_handler = EventHandler::new();

    let mut next_tick = Instant::now() + TICK_INTERVAL;

    // Main loop
    loop {
        // Draw the UI
        terminal
            .draw(|frame| ui::draw(frame, &app))
            .context("Failed to draw UI")?;

        // Fire every tick that has come due since the last pass
        while Instant::now() >= next_tick {
            app.tick();
            next_tick += TICK_INTERVAL;
        }

        // Use different event handling for the edit dialog vs normal mode
        let event = if matches!(app.current_view, View::Editing(_)) {
            event_handler.next_input()?
        } else {
            event_handler.next()?
        };

        // Handle events (keyboard input, etc.)
        if let Some(action) = event {
            // Process the event and check if we should quit
            if app.handle_event(action)? {
                break;
            }
        }
    }

    Ok(())
}
