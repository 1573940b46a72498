//! Shared vocabulary and the ephemeris oracle contract.
//!
//! The engine depends on exactly three oracle capabilities — body
//! positions, ayanamsa, and house cusps — expressed here as the
//! [`Ephemeris`] trait. Any backend implementing them with the stated
//! semantics (continuous Julian-Day input, degrees output) can drive the
//! chart computation; the engine itself never computes a planet.

use std::error::Error;
use std::fmt::{Display, Formatter};

use serde::Serialize;
use stellium_time::Moment;

/// Celestial points a chart can carry.
///
/// The ten classical planets exist as oracle queries. The node points are
/// computed points: only the north node is ever queried; the south node is
/// always derived as `north + 180°` by the Resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    NorthNode,
    SouthNode,
}

/// The ten classical planets, in traditional chart order.
pub const CLASSICAL_BODIES: [Body; 10] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

/// All chart points including the node pair.
pub const ALL_BODIES: [Body; 12] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
    Body::NorthNode,
    Body::SouthNode,
];

impl Body {
    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
            Self::NorthNode => "North Node",
            Self::SouthNode => "South Node",
        }
    }

    /// Display glyph.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Sun => "☉",
            Self::Moon => "☽",
            Self::Mercury => "☿",
            Self::Venus => "♀",
            Self::Mars => "♂",
            Self::Jupiter => "♃",
            Self::Saturn => "♄",
            Self::Uranus => "♅",
            Self::Neptune => "♆",
            Self::Pluto => "♇",
            Self::NorthNode => "☊",
            Self::SouthNode => "☋",
        }
    }

    /// Whether this is one of the two lunar node points.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::NorthNode | Self::SouthNode)
    }

    /// All chart points.
    pub const fn all() -> &'static [Body] {
        &ALL_BODIES
    }

    /// Parse a display name (case-insensitive, `north-node` accepted).
    pub fn from_name(s: &str) -> Option<Self> {
        let lower = s.to_ascii_lowercase();
        let key = lower.replace(['-', '_'], " ");
        ALL_BODIES
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(&key))
    }
}

/// Computation center forwarded to the oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Center {
    /// Observer at the Earth's center (default).
    #[default]
    Geocentric,
    /// Observer at the Sun's center. Node points are undefined here.
    Heliocentric,
}

/// Which lunar-node model the oracle should use for the north node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum NodeVariant {
    /// Osculating node: mean motion plus short-period perturbations.
    #[default]
    True,
    /// Mean node: smooth polynomial motion only.
    Mean,
}

/// Sidereal reference frames the ayanamsa can be anchored to.
///
/// Each frame reduces to one parameter, its ayanamsa value at J2000.0;
/// published reference values are carried here so backends agree on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum AyanamsaFrame {
    /// Fagan-Bradley: the primary Western sidereal frame (default, matching
    /// the original chart service).
    #[default]
    FaganBradley,
    /// Lahiri (Chitrapaksha), the Indian government standard.
    Lahiri,
    /// Krishnamurti Paddhati, minimal offset from Lahiri.
    Krishnamurti,
    /// B.V. Raman, zero year ~397 CE.
    Raman,
}

/// All frames in enum order.
pub const ALL_AYANAMSA_FRAMES: [AyanamsaFrame; 4] = [
    AyanamsaFrame::FaganBradley,
    AyanamsaFrame::Lahiri,
    AyanamsaFrame::Krishnamurti,
    AyanamsaFrame::Raman,
];

impl AyanamsaFrame {
    /// Reference ayanamsa at J2000.0 in degrees.
    pub const fn reference_j2000_deg(self) -> f64 {
        match self {
            Self::FaganBradley => 24.736,
            Self::Lahiri => 23.853,
            Self::Krishnamurti => 23.850,
            Self::Raman => 22.370,
        }
    }

    /// All defined frames.
    pub const fn all() -> &'static [AyanamsaFrame] {
        &ALL_AYANAMSA_FRAMES
    }
}

/// The three supported house division algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum HouseSystem {
    /// Cusp 1 is exactly the Ascendant; cusps 30° apart.
    #[default]
    EqualAscCusp,
    /// The Ascendant falls at the middle of house 1; cusp 1 is Asc − 15°.
    EqualAscMid,
    /// Placidus: time-based semi-arc trisection. The only variant whose
    /// cusps are not evenly spaced.
    Placidus,
}

/// All house systems in enum order.
pub const ALL_HOUSE_SYSTEMS: [HouseSystem; 3] = [
    HouseSystem::EqualAscCusp,
    HouseSystem::EqualAscMid,
    HouseSystem::Placidus,
];

impl HouseSystem {
    /// All defined systems.
    pub const fn all() -> &'static [HouseSystem] {
        &ALL_HOUSE_SYSTEMS
    }

    /// Whether cusps are a 30°-spaced fan derived from the Ascendant.
    pub const fn is_equal_division(self) -> bool {
        matches!(self, Self::EqualAscCusp | Self::EqualAscMid)
    }

    /// Whether the algorithm degenerates near the poles.
    pub const fn latitude_dependent(self) -> bool {
        matches!(self, Self::Placidus)
    }
}

/// Frame flags forwarded with every position query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PositionFlags {
    pub center: Center,
    /// Only consulted for node queries.
    pub node_variant: NodeVariant,
}

/// Ecliptic position returned by the oracle. Longitude may arrive outside
/// [0, 360); callers normalize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EclipticCoords {
    pub lon_deg: f64,
    pub lat_deg: f64,
    pub distance_au: f64,
}

/// House cusps and chart angles returned by the oracle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HouseAngles {
    /// Twelve cusp longitudes, house 1 first.
    pub cusps_deg: [f64; 12],
    pub ascendant_deg: f64,
    pub midheaven_deg: f64,
}

/// Oracle errors.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The oracle cannot compute this body at this time.
    OutOfRange { body: Body, jd_ut: f64 },
    /// The query is structurally unsupported (e.g. a south-node or
    /// heliocentric-node position).
    UnsupportedQuery(&'static str),
    /// Backend-specific failure.
    Backend(String),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { body, jd_ut } => {
                write!(f, "ephemeris out of range for {} at JD {jd_ut}", body.name())
            }
            Self::UnsupportedQuery(msg) => write!(f, "unsupported query: {msg}"),
            Self::Backend(msg) => write!(f, "ephemeris backend error: {msg}"),
        }
    }
}

impl Error for EphemerisError {}

/// The external ephemeris oracle contract.
///
/// Implementations must be deterministic functions of their arguments.
/// The engine imposes no locking: a `Send + Sync` oracle may be shared
/// across threads via `Arc`, and each chart computation is independent.
pub trait Ephemeris {
    /// Ecliptic position of a body at a moment, tropical frame, degrees.
    fn position(
        &self,
        moment: Moment,
        body: Body,
        flags: PositionFlags,
    ) -> Result<EclipticCoords, EphemerisError>;

    /// Ayanamsa of the given sidereal frame at a moment, degrees.
    fn ayanamsa(&self, moment: Moment, frame: AyanamsaFrame) -> Result<f64, EphemerisError>;

    /// House cusps and angles for an observer, degrees.
    ///
    /// Backends may return equal-division cusps for the equal systems; the
    /// House Calculator re-derives those from the Ascendant regardless, so
    /// only the Placidus cusps and the Asc/MC angles must be accurate.
    fn houses(
        &self,
        moment: Moment,
        latitude_deg: f64,
        longitude_deg: f64,
        system: HouseSystem,
    ) -> Result<HouseAngles, EphemerisError>;
}

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_deg(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classical_bodies_count() {
        assert_eq!(CLASSICAL_BODIES.len(), 10);
        assert!(CLASSICAL_BODIES.iter().all(|b| !b.is_node()));
    }

    #[test]
    fn all_bodies_has_both_nodes() {
        assert_eq!(ALL_BODIES.len(), 12);
        assert!(Body::NorthNode.is_node());
        assert!(Body::SouthNode.is_node());
    }

    #[test]
    fn from_name_roundtrip() {
        for b in ALL_BODIES {
            assert_eq!(Body::from_name(b.name()), Some(b));
        }
        assert_eq!(Body::from_name("north-node"), Some(Body::NorthNode));
        assert_eq!(Body::from_name("sun"), Some(Body::Sun));
        assert_eq!(Body::from_name("Vulcan"), None);
    }

    #[test]
    fn equal_division_flags() {
        assert!(HouseSystem::EqualAscCusp.is_equal_division());
        assert!(HouseSystem::EqualAscMid.is_equal_division());
        assert!(!HouseSystem::Placidus.is_equal_division());
        assert!(HouseSystem::Placidus.latitude_dependent());
    }

    #[test]
    fn frame_references_in_range() {
        for &frame in AyanamsaFrame::all() {
            let v = frame.reference_j2000_deg();
            assert!((22.0..=25.0).contains(&v), "{frame:?} = {v}");
        }
    }

    #[test]
    fn normalize_deg_wraps() {
        assert!((normalize_deg(-10.0) - 350.0).abs() < 1e-12);
        assert!((normalize_deg(370.0) - 10.0).abs() < 1e-12);
        assert_eq!(normalize_deg(360.0), 0.0);
    }
}
