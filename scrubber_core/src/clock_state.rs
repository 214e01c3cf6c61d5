//! Time model - the day/month/year/hour/minute value the scrubber edits
//!
//! Each scrub step moves the clock exactly one minute. Hours run 0 through 24
//! with 24 as an end-of-day marker: the day only changes when stepping
//! forward from 24:59 or backward from 00:00.

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};
use chrono_tz::Tz;

use crate::error::ConfigError;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Last hour value before the day rolls forward
pub const END_OF_DAY_HOUR: u32 = 24;

/// Direction of one scrub step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Editable clock value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockState {
    /// Day of month. Not carried into the month, so it may leave 1..=31.
    pub day: i32,
    /// Month, 0-based
    pub month: u32,
    pub year: i32,
    /// 0..=24
    pub hours: u32,
    /// 0..=59
    pub minutes: u32,
}

impl ClockState {
    /// Seed from epoch milliseconds in `tz`, or the system zone when `None`.
    pub fn from_epoch_millis(millis: i64, tz: Option<Tz>) -> Result<Self, ConfigError> {
        let utc =
            DateTime::from_timestamp_millis(millis).ok_or(ConfigError::InvalidStartTime(millis))?;
        Ok(match tz {
            Some(tz) => Self::from_datetime(&utc.with_timezone(&tz)),
            None => Self::from_datetime(&utc.with_timezone(&Local)),
        })
    }

    pub fn from_datetime<Z: TimeZone>(dt: &DateTime<Z>) -> Self {
        Self {
            day: dt.day() as i32,
            month: dt.month0(),
            year: dt.year(),
            hours: dt.hour(),
            minutes: dt.minute(),
        }
    }

    /// Move one minute in `direction`. Returns `true` if the day changed.
    pub fn step(&mut self, direction: Direction) -> bool {
        match direction {
            Direction::Backward => {
                if self.hours == 0 && self.minutes == 0 {
                    self.day -= 1;
                    self.hours = END_OF_DAY_HOUR;
                    self.minutes = 59;
                    return true;
                }
                if self.minutes == 0 {
                    self.minutes = 59;
                    self.hours -= 1;
                } else {
                    self.minutes -= 1;
                }
            }
            Direction::Forward => {
                if self.hours == END_OF_DAY_HOUR && self.minutes == 59 {
                    self.day += 1;
                    self.hours = 0;
                    self.minutes = 0;
                    return true;
                }
                if self.minutes < 59 {
                    self.minutes += 1;
                } else {
                    self.hours += 1;
                    self.minutes = 0;
                }
            }
        }
        false
    }

    /// Format the date as "Day Month Year"
    pub fn format_date(&self) -> String {
        let month_name = MONTH_NAMES
            .get(self.month as usize)
            .copied()
            .unwrap_or("Unknown");
        format!("{} {} {}", self.day, month_name, self.year)
    }

    /// Format the time as "HH:MM"
    pub fn format_time(&self) -> String {
        format!("{:02}:{:02}", self.hours, self.minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn at(day: i32, hours: u32, minutes: u32) -> ClockState {
        ClockState {
            day,
            month: 2,
            year: 2024,
            hours,
            minutes,
        }
    }

    #[test]
    fn test_seed_from_epoch() {
        let millis = Utc
            .with_ymd_and_hms(2024, 3, 15, 10, 30, 0)
            .unwrap()
            .timestamp_millis();
        let clock = ClockState::from_epoch_millis(millis, Some(chrono_tz::UTC)).unwrap();
        assert_eq!(clock, at(15, 10, 30));
        assert_eq!(clock.format_date(), "15 March 2024");
        assert_eq!(clock.format_time(), "10:30");
    }

    #[test]
    fn test_seed_respects_zone() {
        let millis = Utc
            .with_ymd_and_hms(2024, 3, 15, 23, 30, 0)
            .unwrap()
            .timestamp_millis();
        let clock =
            ClockState::from_epoch_millis(millis, Some(chrono_tz::Asia::Tokyo)).unwrap();
        assert_eq!(clock.day, 16);
        assert_eq!(clock.format_time(), "08:30");
    }

    #[test]
    fn test_forward_minute() {
        let mut clock = at(15, 10, 30);
        assert!(!clock.step(Direction::Forward));
        assert_eq!(clock.format_time(), "10:31");
    }

    #[test]
    fn test_backward_minute() {
        let mut clock = at(15, 10, 30);
        assert!(!clock.step(Direction::Backward));
        assert_eq!(clock.format_time(), "10:29");
    }

    #[test]
    fn test_forward_hour_carry() {
        let mut clock = at(15, 10, 59);
        clock.step(Direction::Forward);
        assert_eq!(clock, at(15, 11, 0));
    }

    #[test]
    fn test_forward_into_end_of_day_marker() {
        // 23:59 moves to the 24:00 marker, not to the next day
        let mut clock = at(15, 23, 59);
        assert!(!clock.step(Direction::Forward));
        assert_eq!(clock, at(15, 24, 0));
        assert_eq!(clock.format_time(), "24:00");
    }

    #[test]
    fn test_forward_day_rollover() {
        let mut clock = at(15, 24, 59);
        assert!(clock.step(Direction::Forward));
        assert_eq!(clock, at(16, 0, 0));
        assert_eq!(clock.format_date(), "16 March 2024");
    }

    #[test]
    fn test_backward_day_rollover() {
        let mut clock = at(15, 0, 0);
        assert!(clock.step(Direction::Backward));
        assert_eq!(clock, at(14, 24, 59));
    }

    #[test]
    fn test_backward_hour_borrow() {
        let mut clock = at(15, 1, 0);
        assert!(!clock.step(Direction::Backward));
        assert_eq!(clock, at(15, 0, 59));
    }

    #[test]
    fn test_day_only_changes_at_boundaries() {
        let mut clock = at(15, 0, 1);
        for _ in 0..(25 * 60 - 2) {
            assert!(!clock.step(Direction::Forward));
            assert_eq!(clock.day, 15);
        }
        assert_eq!(clock, at(15, 24, 59));
        assert!(clock.step(Direction::Forward));
        assert_eq!(clock.day, 16);
    }

    #[test]
    fn test_day_is_not_carried_into_month() {
        let mut clock = at(1, 0, 0);
        clock.step(Direction::Backward);
        assert_eq!(clock.format_date(), "0 March 2024");
    }
}
