//! Error types for chart computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use stellium_core::EphemerisError;
use stellium_time::TimeError;

/// Errors from the chart engine.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Error from civil-time normalization.
    Time(TimeError),
    /// Error reported by the ephemeris oracle.
    Ephemeris(EphemerisError),
    /// Latitude or longitude outside its valid range.
    InvalidCoordinate { latitude_deg: f64, longitude_deg: f64 },
    /// House algorithm numerically unstable at this latitude.
    DegenerateHouses { latitude_deg: f64 },
    /// The requested combination of body and frame flags is undefined.
    UnsupportedQuery(&'static str),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::InvalidCoordinate {
                latitude_deg,
                longitude_deg,
            } => write!(
                f,
                "invalid coordinates: latitude {latitude_deg}, longitude {longitude_deg}"
            ),
            Self::DegenerateHouses { latitude_deg } => write!(
                f,
                "house system degenerate at latitude {latitude_deg} deg"
            ),
            Self::UnsupportedQuery(msg) => write!(f, "unsupported query: {msg}"),
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::Ephemeris(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<EphemerisError> for ChartError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}

/// Failure of a batch range export: the first failing time step aborts
/// the whole batch.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeExportError {
    /// Zero-based index of the failing time step.
    pub step: usize,
    pub source: ChartError,
}

impl Display for RangeExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "range export failed at step {}: {}", self.step, self.source)
    }
}

impl Error for RangeExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}
