//! CSV range export: one row per time step over [start, end].
//!
//! The batch is fail-fast: the first failing step aborts the export with
//! the step index attached, so no row is ever silently skipped.

use std::fmt::Write as _;

use serde::Serialize;
use stellium_time::Moment;

use stellium_core::Ephemeris;

use crate::error::RangeExportError;
use crate::resolver::{ayanamsa, resolve_positions};
use crate::snapshot::{ChartConfig, ZodiacMode};

/// Step granularity of a range export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ExportStep {
    Hour,
    SixHours,
    #[default]
    Day,
}

impl ExportStep {
    /// Step length in days.
    pub const fn days(self) -> f64 {
        match self {
            Self::Hour => 1.0 / 24.0,
            Self::SixHours => 0.25,
            Self::Day => 1.0,
        }
    }

    /// Parse a CLI spelling.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "hour" | "1h" => Some(Self::Hour),
            "6h" | "six-hours" | "sixhours" => Some(Self::SixHours),
            "day" | "1d" => Some(Self::Day),
            _ => None,
        }
    }
}

/// Export body longitudes over a time range as CSV text.
///
/// The header names a timestamp column plus one column per configured
/// body; each row carries the UTC timestamp and the longitudes (in the
/// chart's zodiac mode) to six decimal places. The range is inclusive of
/// `start` and of any step landing on `end`.
pub fn export_range_csv<E: Ephemeris + ?Sized>(
    eph: &E,
    start: Moment,
    end: Moment,
    step: ExportStep,
    config: &ChartConfig,
) -> Result<String, RangeExportError> {
    let bodies = config.bodies();
    let flags = stellium_core::PositionFlags {
        center: config.center,
        node_variant: config.node_variant,
    };

    let mut csv = String::from("timestamp");
    for body in &bodies {
        csv.push(',');
        csv.push_str(body.name());
    }
    csv.push('\n');

    let mut index = 0usize;
    loop {
        let moment = start.plus_days(index as f64 * step.days());
        // Half-second slack so accumulated float error cannot drop the
        // final step.
        if moment.jd_ut() > end.jd_ut() + 0.5 / 86_400.0 {
            break;
        }
        let ayan = ayanamsa(eph, moment, config.ayanamsa)
            .map_err(|source| RangeExportError { step: index, source })?;
        let positions = resolve_positions(eph, moment, &bodies, flags, ayan)
            .map_err(|source| RangeExportError { step: index, source })?;

        let _ = write!(csv, "{}", moment.to_civil_utc());
        for p in &positions {
            let lon = match config.zodiac_mode {
                ZodiacMode::Tropical => p.tropical_deg,
                ZodiacMode::Sidereal => p.sidereal_deg,
            };
            let _ = write!(csv, ",{lon:.6}");
        }
        csv.push('\n');
        index += 1;
    }

    Ok(csv)
}
