//! Clock - Wall Clock for the Feed Overlay

use chrono::{DateTime, Local};

use crate::utils::format::format_time;

/// Source of "current local time" for display
pub trait Clock {
    fn now(&self) -> DateTime<Local>;

    /// Current time as shown on the feed (`HH:MM:SS`)
    fn now_display(&self) -> String {
        format_time(&self.now())
    }
}

/// The system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock stuck at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn fixed_clock_formats_time_of_day() {
        let at = Local
            .with_ymd_and_hms(2025, 3, 7, 14, 35, 9)
            .single()
            .expect("unambiguous local time");
        assert_eq!(FixedClock(at).now_display(), "14:35:09");
    }
}
