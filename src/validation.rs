//! Input validation for user-provided settings.
//!
//! All text typed into the edit dialog (and every CLI override) passes
//! through here before it can reach the timer, so the state machine never
//! stores a zero, negative, or non-numeric value.

use crate::constants::limits;

/// Parses a duration entered in minutes.
///
/// Rules:
/// - Must be a whole number of minutes
/// - Must be at least 1
/// - Must be at most `limits::MAX_MINUTES`
pub fn parse_minutes(input: &str) -> Result<u64, String> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err("Enter a number of minutes".to_string());
    }

    let minutes: u64 = trimmed
        .parse()
        .map_err(|_| format!("'{trimmed}' is not a whole number of minutes"))?;

    if minutes == 0 {
        return Err("Duration must be at least 1 minute".to_string());
    }

    if minutes > limits::MAX_MINUTES {
        return Err(format!(
            "Duration must be {} minutes or less",
            limits::MAX_MINUTES
        ));
    }

    Ok(minutes)
}

/// Parses a round count.
///
/// Rules:
/// - Must be a whole number
/// - Must be at least 1
/// - Must be at most `limits::MAX_ROUNDS`
pub fn parse_rounds(input: &str) -> Result<u32, String> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err("Enter a number of rounds".to_string());
    }

    let rounds: u32 = trimmed
        .parse()
        .map_err(|_| format!("'{trimmed}' is not a whole number of rounds"))?;

    if rounds == 0 {
        return Err("There must be at least 1 round".to_string());
    }

    if rounds > limits::MAX_ROUNDS {
        return Err(format!("At most {} rounds are supported", limits::MAX_ROUNDS));
    }

    Ok(rounds)
}
