//! Chart computation engine.
//!
//! Turns a [`Moment`](stellium_time::Moment) and an optional observer
//! location into a [`ChartSnapshot`]: tropical and sidereal longitudes
//! for the chart points, house cusps and angles, and detected aspects.
//! Every operation is a pure function of its inputs; planetary positions
//! come from whatever [`Ephemeris`](stellium_core::Ephemeris) oracle the
//! caller supplies, and the snapshot is returned by value with no state
//! retained anywhere.

pub mod aspects;
pub mod error;
pub mod export;
pub mod houses;
pub mod resolver;
pub mod snapshot;
pub mod zodiac;

pub use aspects::{AspectDefinition, AspectHit, DEFAULT_ASPECTS, aspects_with_orbs, detect,
    separation_deg};
pub use error::{ChartError, RangeExportError};
pub use export::{ExportStep, export_range_csv};
pub use houses::MAX_TIME_BASED_LATITUDE_DEG;
pub use resolver::{AyanamsaConfig, BodyPosition, resolve_positions, sidereal_longitude,
    tropical_longitude};
pub use snapshot::{ChartConfig, ChartSnapshot, Location, ZodiacMode, compute_chart};
pub use zodiac::{SIGN_GLYPHS, SIGN_NAMES, format_zodiac, sign_index, sign_name};
