//! Civil time normalization and Julian Day primitives.
//!
//! This crate provides:
//! - Calendar ↔ Julian Date conversions (proleptic Gregorian, astronomical
//!   year numbering)
//! - `CivilDateTime` parsing and display
//! - `ZoneSpec` (fixed UTC offset or named IANA zone) and `normalize()`,
//!   which turns a local civil date/time into a [`Moment`]
//! - GMST/LST for the house-angle computations downstream

pub mod civil;
pub mod error;
pub mod julian;
pub mod sidereal;
pub mod zone;

use serde::Serialize;

pub use civil::CivilDateTime;
pub use error::TimeError;
pub use julian::{J2000_JD, calendar_to_jd, jd_to_calendar};
pub use sidereal::{earth_rotation_angle_rad, gmst_rad, local_sidereal_time_rad};
pub use zone::{ZoneSpec, normalize};

/// An instant on the continuous astronomical time scale: a Julian Day
/// count referenced to Universal Time.
///
/// This is the primary time type used throughout the engine. It wraps an
/// `f64`, is immutable once constructed, and carries no timezone — the
/// Time Normalizer resolves civil input to UT before a `Moment` exists.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Moment {
    jd_ut: f64,
}

impl Moment {
    /// Create a moment from a Julian Date in UT.
    pub const fn from_jd_ut(jd: f64) -> Self {
        Self { jd_ut: jd }
    }

    /// Julian Date in UT.
    pub const fn jd_ut(self) -> f64 {
        self.jd_ut
    }

    /// Julian centuries since J2000.0.
    pub fn centuries_since_j2000(self) -> f64 {
        (self.jd_ut - J2000_JD) / 36525.0
    }

    /// Break the moment back into a UTC calendar date/time.
    ///
    /// Seconds are rounded to the nearest minute; a `Moment` built by
    /// [`normalize`] from minute-resolution input round-trips exactly.
    pub fn to_civil_utc(self) -> CivilDateTime {
        let (year, month, day_frac) = jd_to_calendar(self.jd_ut);
        let total_minutes = (day_frac.fract() * 1440.0).round() as u32;
        if total_minutes == 1440 {
            // Rounded up to midnight: the date parts carry too. Re-derive
            // them a full minute forward; the time is 00:00 regardless.
            let (year, month, day_frac) = jd_to_calendar(self.jd_ut + 1.0 / 1440.0);
            return CivilDateTime {
                year,
                month,
                day: day_frac.floor() as u32,
                hour: 0,
                minute: 0,
            };
        }
        CivilDateTime {
            year,
            month,
            day: day_frac.floor() as u32,
            hour: total_minutes / 60,
            minute: total_minutes % 60,
        }
    }

    /// A new moment offset by a number of days (may be fractional or
    /// negative).
    pub fn plus_days(self, days: f64) -> Self {
        Self {
            jd_ut: self.jd_ut + days,
        }
    }
}
