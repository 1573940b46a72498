//! Timezone specification and civil → UT normalization.
//!
//! A `ZoneSpec` is either a fixed UTC offset in hours (no daylight-saving
//! rule is ever applied) or an IANA zone name resolved through the
//! embedded tz database. `normalize` attaches the resolved offset to the
//! civil time and reduces it to a [`Moment`].
//!
//! Named-zone edge policy: an ambiguous local time (fall-back overlap)
//! takes the earlier offset; a nonexistent local time (spring-forward gap)
//! resolves through the zone's post-transition offset. Both choices are
//! deterministic.

use chrono::{LocalResult, NaiveDate, Offset, TimeZone};
use chrono_tz::Tz;

use crate::Moment;
use crate::civil::CivilDateTime;
use crate::error::TimeError;
use crate::julian::calendar_to_jd;

/// How a civil time relates to UTC.
#[derive(Debug, Clone, PartialEq)]
pub enum ZoneSpec {
    /// Fixed offset from UTC in hours, east positive. Never adjusted for
    /// daylight saving.
    FixedHours(f64),
    /// IANA zone name, e.g. `America/New_York`.
    Named(String),
}

impl ZoneSpec {
    /// Human-readable label, e.g. `UTC-5 (fixed)` or the zone name.
    pub fn label(&self) -> String {
        match self {
            Self::FixedHours(h) => format!("UTC{h:+} (fixed)"),
            Self::Named(name) => name.clone(),
        }
    }
}

/// Normalize a local civil date/time to a [`Moment`].
///
/// Identical inputs always yield bit-identical output; nothing here reads
/// the process clock.
pub fn normalize(date: &str, time: &str, zone: &ZoneSpec) -> Result<Moment, TimeError> {
    let civil = CivilDateTime::parse(date, time)?;
    normalize_civil(civil, zone)
}

/// Normalize an already-parsed civil date/time to a [`Moment`].
pub fn normalize_civil(civil: CivilDateTime, zone: &ZoneSpec) -> Result<Moment, TimeError> {
    let offset_hours = match zone {
        ZoneSpec::FixedHours(h) => *h,
        ZoneSpec::Named(name) => named_zone_offset_hours(civil, name)?,
    };
    let jd_local = calendar_to_jd(civil.year, civil.month, civil.day_fraction());
    Ok(Moment::from_jd_ut(jd_local - offset_hours / 24.0))
}

/// Resolve the UTC offset of a named zone at a given local civil time.
fn named_zone_offset_hours(civil: CivilDateTime, name: &str) -> Result<f64, TimeError> {
    let tz: Tz = name
        .parse()
        .map_err(|_| TimeError::UnknownTimezone(name.to_string()))?;

    let naive = NaiveDate::from_ymd_opt(civil.year, civil.month, civil.day)
        .and_then(|d| d.and_hms_opt(civil.hour, civil.minute, 0))
        .ok_or_else(|| {
            TimeError::MalformedInput(format!(
                "{civil} is outside the representable range for named-zone resolution"
            ))
        })?;

    let offset_seconds = match tz.offset_from_local_datetime(&naive) {
        LocalResult::Single(o) => o.fix().local_minus_utc(),
        LocalResult::Ambiguous(earlier, _) => earlier.fix().local_minus_utc(),
        // Spring-forward gap: the instant does not exist locally; use the
        // offset in force just after the transition.
        LocalResult::None => tz.offset_from_utc_datetime(&naive).fix().local_minus_utc(),
    };
    Ok(offset_seconds as f64 / 3600.0)
}
