//! Format - Formatting Utilities

use chrono::{DateTime, Local};

/// Format just the time portion
pub fn format_time(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M:%S").to_string()
}

/// Compact timestamp used in file names
pub fn format_file_stamp(dt: &DateTime<Local>) -> String {
    dt.format("%Y%m%d-%H%M%S").to_string()
}

/// "Front Entrance • 14:35"
pub fn location_line(location: &str, time: &str) -> String {
    format!("{location} • {time}")
}

/// Height of a bar relative to the tallest one
pub fn bar_height(value: u32, max: u32, plot_height: f32) -> f32 {
    if max == 0 {
        0.0
    } else {
        plot_height * value as f32 / max as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_line_joins_with_bullet() {
        assert_eq!(location_line("Parking Lot", "10:35"), "Parking Lot • 10:35");
    }

    #[test]
    fn bar_height_scales_to_max() {
        assert_eq!(bar_height(25, 25, 180.0), 180.0);
        assert_eq!(bar_height(0, 25, 180.0), 0.0);
        assert_eq!(bar_height(5, 0, 180.0), 0.0);
        assert!((bar_height(4, 8, 100.0) - 50.0).abs() < f32::EPSILON);
    }
}
