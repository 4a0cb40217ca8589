//! Small rendering helpers shared by the UI submodules.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Returns a rect centered in `area`, sized as percentages of it.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Formats a countdown as zero-padded `MM:SS`.
///
/// Minutes widen past two digits rather than wrapping, so a 100-minute
/// work interval reads `100:00`.
pub fn format_clock(seconds: u64) -> String {
    let minutes = seconds / 60;
    let secs = seconds % 60;
    format!("{minutes:02}:{secs:02}")
}

/// Formats a configured duration as whole minutes.
pub fn format_minutes(seconds: u64) -> String {
    format!("{} min", seconds / 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock_zero_pads() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(5), "00:05");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(600), "10:00");
        assert_eq!(format_clock(1500), "25:00");
    }

    #[test]
    fn test_format_clock_widens_past_an_hour() {
        assert_eq!(format_clock(6000), "100:00");
        assert_eq!(format_clock(6059), "100:59");
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(1500), "25 min");
        assert_eq!(format_minutes(60), "1 min");
    }

    #[test]
    fn test_centered_rect_is_inside_the_area() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(50, 50, area);

        assert!(rect.x >= area.x && rect.right() <= area.right());
        assert!(rect.y >= area.y && rect.bottom() <= area.bottom());
        assert_eq!(rect.width, 50);
        assert_eq!(rect.height, 20);
    }
}
