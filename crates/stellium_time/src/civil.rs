//! Civil calendar date/time with minute precision.
//!
//! Provides `CivilDateTime`, the parsed form of user-facing date/time
//! input. Conversion to a `Moment` goes through [`crate::zone::normalize`].

use std::fmt;

use crate::error::TimeError;

use serde::Serialize;

/// Civil calendar date/time, minute precision, no timezone attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CivilDateTime {
    /// Astronomical year numbering: 0 = 1 BCE, -1 = 2 BCE.
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl CivilDateTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    /// Parse `YYYY-MM-DD` and `HH:MM` strings into a validated value.
    ///
    /// The year field is signed (`-0584-05-28` is accepted); months, days,
    /// hours, and minutes are range-checked, including leap-day handling.
    pub fn parse(date: &str, time: &str) -> Result<Self, TimeError> {
        let (year, month, day) = parse_date_fields(date)?;
        let (hour, minute) = parse_time_fields(time)?;

        if !(1..=12).contains(&month) {
            return Err(TimeError::MalformedInput(format!("month {month} out of range")));
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(TimeError::MalformedInput(format!(
                "day {day} out of range for {year:04}-{month:02}"
            )));
        }
        if hour > 23 {
            return Err(TimeError::MalformedInput(format!("hour {hour} out of range")));
        }
        if minute > 59 {
            return Err(TimeError::MalformedInput(format!("minute {minute} out of range")));
        }

        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
        })
    }

    /// Day of month plus fractional time of day, the form the Julian Day
    /// conversion consumes.
    pub fn day_fraction(&self) -> f64 {
        self.day as f64 + self.hour as f64 / 24.0 + self.minute as f64 / 1440.0
    }
}

impl fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

/// Split `YYYY-MM-DD` into signed year, month, day.
fn parse_date_fields(date: &str) -> Result<(i32, u32, u32), TimeError> {
    let malformed = || TimeError::MalformedInput(format!("date '{date}' is not YYYY-MM-DD"));

    // A leading '-' belongs to the year, not a separator.
    let (sign, rest) = match date.strip_prefix('-') {
        Some(rest) => (-1i32, rest),
        None => (1i32, date),
    };
    let mut parts = rest.splitn(3, '-');
    let year: i32 = parts
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(malformed)?;
    let month: u32 = parts
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(malformed)?;
    let day: u32 = parts
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(malformed)?;
    Ok((sign * year, month, day))
}

/// Split `HH:MM` into hour and minute.
fn parse_time_fields(time: &str) -> Result<(u32, u32), TimeError> {
    let malformed = || TimeError::MalformedInput(format!("time '{time}' is not HH:MM"));
    let mut parts = time.splitn(2, ':');
    let hour: u32 = parts
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(malformed)?;
    let minute: u32 = parts
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(malformed)?;
    Ok((hour, minute))
}

/// Days in a month under the proleptic Gregorian leap rule.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic() {
        let c = CivilDateTime::parse("1962-07-02", "23:33").unwrap();
        assert_eq!((c.year, c.month, c.day, c.hour, c.minute), (1962, 7, 2, 23, 33));
    }

    #[test]
    fn parse_negative_year() {
        let c = CivilDateTime::parse("-0584-05-28", "12:00").unwrap();
        assert_eq!(c.year, -584);
        assert_eq!(c.month, 5);
    }

    #[test]
    fn rejects_garbage_date() {
        assert!(matches!(
            CivilDateTime::parse("not-a-date", "12:00"),
            Err(TimeError::MalformedInput(_))
        ));
    }

    #[test]
    fn rejects_month_13() {
        assert!(CivilDateTime::parse("2024-13-01", "00:00").is_err());
    }

    #[test]
    fn rejects_feb_30() {
        assert!(CivilDateTime::parse("2024-02-30", "00:00").is_err());
    }

    #[test]
    fn accepts_leap_day() {
        assert!(CivilDateTime::parse("2024-02-29", "00:00").is_ok());
        assert!(CivilDateTime::parse("2023-02-29", "00:00").is_err());
    }

    #[test]
    fn rejects_hour_24() {
        assert!(CivilDateTime::parse("2024-01-01", "24:00").is_err());
    }

    #[test]
    fn day_fraction_noon() {
        let c = CivilDateTime::new(2000, 1, 1, 12, 0);
        assert!((c.day_fraction() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn display_iso_like() {
        let c = CivilDateTime::new(1962, 7, 3, 4, 33);
        assert_eq!(c.to_string(), "1962-07-03T04:33");
    }
}
