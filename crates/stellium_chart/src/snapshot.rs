//! Chart assembly: one moment, resolved positions, optional houses,
//! detected aspects, bundled into a `ChartSnapshot` returned by value.

use serde::Serialize;
use stellium_core::{
    Body, CLASSICAL_BODIES, Center, Ephemeris, HouseAngles, HouseSystem, NodeVariant,
    PositionFlags,
};
use stellium_time::Moment;

use crate::aspects::{AspectDefinition, AspectHit, DEFAULT_ASPECTS, detect};
use crate::error::ChartError;
use crate::houses;
use crate::resolver::{AyanamsaConfig, BodyPosition, resolve_positions};

/// Which frame's longitudes feed the aspect grid and the sign labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ZodiacMode {
    #[default]
    Tropical,
    Sidereal,
}

/// Observer location in degrees, east-positive longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

/// Full chart configuration. The default mirrors the service this engine
/// replaces: geocentric, true node, nodes included, Fagan-Bradley frame,
/// tropical zodiac, equal houses, 6 deg orbs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    pub center: Center,
    pub node_variant: NodeVariant,
    /// Include the node pair among the chart points. Ignored (treated as
    /// false) in the heliocentric frame, where nodes are undefined.
    pub include_nodes: bool,
    pub ayanamsa: AyanamsaConfig,
    pub zodiac_mode: ZodiacMode,
    pub house_system: HouseSystem,
    pub aspects: Vec<AspectDefinition>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            center: Center::Geocentric,
            node_variant: NodeVariant::True,
            include_nodes: true,
            ayanamsa: AyanamsaConfig::default(),
            zodiac_mode: ZodiacMode::Tropical,
            house_system: HouseSystem::EqualAscCusp,
            aspects: DEFAULT_ASPECTS.to_vec(),
        }
    }
}

impl ChartConfig {
    /// The chart points implied by this configuration. A heliocentric
    /// chart carries neither the Sun (the origin) nor the node points.
    pub fn bodies(&self) -> Vec<Body> {
        match self.center {
            Center::Geocentric => {
                let mut bodies = CLASSICAL_BODIES.to_vec();
                if self.include_nodes {
                    bodies.push(Body::NorthNode);
                    bodies.push(Body::SouthNode);
                }
                bodies
            }
            Center::Heliocentric => CLASSICAL_BODIES
                .into_iter()
                .filter(|&b| b != Body::Sun)
                .collect(),
        }
    }

    fn flags(&self) -> PositionFlags {
        PositionFlags {
            center: self.center,
            node_variant: self.node_variant,
        }
    }
}

/// Everything a renderer needs for one chart. Owned by the caller; the
/// engine keeps no reference to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSnapshot {
    pub moment: Moment,
    pub ayanamsa_deg: f64,
    pub zodiac_mode: ZodiacMode,
    pub positions: Vec<BodyPosition>,
    pub houses: Option<HouseAngles>,
    pub aspects: Vec<AspectHit>,
}

impl ChartSnapshot {
    /// The longitude of each point in the chart's zodiac mode, parallel
    /// to `positions`.
    pub fn display_longitudes(&self) -> Vec<f64> {
        self.positions
            .iter()
            .map(|p| match self.zodiac_mode {
                ZodiacMode::Tropical => p.tropical_deg,
                ZodiacMode::Sidereal => p.sidereal_deg,
            })
            .collect()
    }
}

/// Compute a full chart at one moment. Houses are computed only when a
/// location is given; aspects always are, over the configured zodiac
/// mode's longitudes.
pub fn compute_chart<E: Ephemeris + ?Sized>(
    eph: &E,
    moment: Moment,
    location: Option<Location>,
    config: &ChartConfig,
) -> Result<ChartSnapshot, ChartError> {
    let bodies = config.bodies();
    let ayanamsa_deg = crate::resolver::ayanamsa(eph, moment, config.ayanamsa)?;
    let positions = resolve_positions(eph, moment, &bodies, config.flags(), ayanamsa_deg)?;

    let houses = match location {
        Some(loc) => Some(houses::compute(
            eph,
            moment,
            loc.latitude_deg,
            loc.longitude_deg,
            config.house_system,
        )?),
        None => None,
    };

    let snapshot = ChartSnapshot {
        moment,
        ayanamsa_deg,
        zodiac_mode: config.zodiac_mode,
        positions,
        houses,
        aspects: Vec::new(),
    };
    let longitudes = snapshot.display_longitudes();
    let aspects = detect(&bodies, &longitudes, &config.aspects);

    Ok(ChartSnapshot { aspects, ..snapshot })
}
