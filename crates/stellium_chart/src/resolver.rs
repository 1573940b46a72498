//! Position resolution: tropical longitudes from the oracle, sidereal
//! longitudes by ayanamsa subtraction.

use serde::Serialize;
use stellium_core::{
    AyanamsaFrame, Body, Center, Ephemeris, PositionFlags, normalize_deg,
};
use stellium_time::Moment;

use crate::error::ChartError;

/// Sidereal frame plus an additive calibration correction in degrees.
///
/// The correction exists so callers can reproduce alternate published
/// variants of a frame without redefining the frame itself. It defaults
/// to zero and may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct AyanamsaConfig {
    pub frame: AyanamsaFrame,
    pub extra_offset_deg: f64,
}

impl AyanamsaConfig {
    pub fn new(frame: AyanamsaFrame) -> Self {
        Self {
            frame,
            extra_offset_deg: 0.0,
        }
    }
}

/// Tropical and sidereal longitude of one chart point at one moment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyPosition {
    pub body: Body,
    pub tropical_deg: f64,
    pub sidereal_deg: f64,
}

/// Tropical ecliptic longitude of a body, normalized to [0, 360).
///
/// The south node is never sent to the oracle: it is derived from the
/// north node as `north + 180`. Node queries in the heliocentric frame
/// are rejected before the oracle sees them.
pub fn tropical_longitude<E: Ephemeris + ?Sized>(
    eph: &E,
    moment: Moment,
    body: Body,
    flags: PositionFlags,
) -> Result<f64, ChartError> {
    if body.is_node() && flags.center == Center::Heliocentric {
        return Err(ChartError::UnsupportedQuery(
            "lunar nodes are undefined in the heliocentric frame",
        ));
    }
    let queried = if body == Body::SouthNode {
        Body::NorthNode
    } else {
        body
    };
    let pos = eph.position(moment, queried, flags)?;
    let lon = normalize_deg(pos.lon_deg);
    Ok(if body == Body::SouthNode {
        normalize_deg(lon + 180.0)
    } else {
        lon
    })
}

/// Ayanamsa in degrees for a frame plus its calibration offset.
pub fn ayanamsa<E: Ephemeris + ?Sized>(
    eph: &E,
    moment: Moment,
    config: AyanamsaConfig,
) -> Result<f64, ChartError> {
    Ok(eph.ayanamsa(moment, config.frame)? + config.extra_offset_deg)
}

/// Sidereal longitude from a tropical longitude and an ayanamsa.
pub fn sidereal_longitude(tropical_deg: f64, ayanamsa_deg: f64) -> f64 {
    normalize_deg(tropical_deg - ayanamsa_deg)
}

/// Resolve a list of bodies at one moment. The caller supplies the
/// ayanamsa (see [`ayanamsa`]), computed once per moment and applied to
/// every body so the sidereal longitudes share a frame.
pub fn resolve_positions<E: Ephemeris + ?Sized>(
    eph: &E,
    moment: Moment,
    bodies: &[Body],
    flags: PositionFlags,
    ayanamsa_deg: f64,
) -> Result<Vec<BodyPosition>, ChartError> {
    let mut out = Vec::with_capacity(bodies.len());
    for &body in bodies {
        let tropical_deg = tropical_longitude(eph, moment, body, flags)?;
        out.push(BodyPosition {
            body,
            tropical_deg,
            sidereal_deg: sidereal_longitude(tropical_deg, ayanamsa_deg),
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stellium_core::{EclipticCoords, EphemerisError, HouseAngles, HouseSystem, NodeVariant};

    /// Fixed-value oracle: every body sits at a preset longitude.
    struct FixedOracle {
        lon_deg: f64,
        ayanamsa_deg: f64,
    }

    impl Ephemeris for FixedOracle {
        fn position(
            &self,
            _moment: Moment,
            body: Body,
            _flags: PositionFlags,
        ) -> Result<EclipticCoords, EphemerisError> {
            if body == Body::SouthNode {
                return Err(EphemerisError::UnsupportedQuery("south node"));
            }
            Ok(EclipticCoords {
                lon_deg: self.lon_deg,
                lat_deg: 0.0,
                distance_au: 1.0,
            })
        }

        fn ayanamsa(&self, _moment: Moment, _frame: AyanamsaFrame) -> Result<f64, EphemerisError> {
            Ok(self.ayanamsa_deg)
        }

        fn houses(
            &self,
            _moment: Moment,
            _latitude_deg: f64,
            _longitude_deg: f64,
            _system: HouseSystem,
        ) -> Result<HouseAngles, EphemerisError> {
            Err(EphemerisError::UnsupportedQuery("no houses"))
        }
    }

    const M: Moment = Moment::from_jd_ut(2_451_545.0);

    #[test]
    fn oracle_values_normalized() {
        let eph = FixedOracle {
            lon_deg: -30.0,
            ayanamsa_deg: 0.0,
        };
        let lon = tropical_longitude(&eph, M, Body::Sun, PositionFlags::default()).unwrap();
        assert!((lon - 330.0).abs() < 1e-12);
    }

    #[test]
    fn south_node_derived_not_queried() {
        // The oracle errors on SouthNode; the resolver must never ask.
        let eph = FixedOracle {
            lon_deg: 95.0,
            ayanamsa_deg: 0.0,
        };
        let north = tropical_longitude(&eph, M, Body::NorthNode, PositionFlags::default()).unwrap();
        let south = tropical_longitude(&eph, M, Body::SouthNode, PositionFlags::default()).unwrap();
        assert!((south - normalize_deg(north + 180.0)).abs() < 1e-12);
    }

    #[test]
    fn heliocentric_nodes_rejected() {
        let eph = FixedOracle {
            lon_deg: 0.0,
            ayanamsa_deg: 0.0,
        };
        let flags = PositionFlags {
            center: Center::Heliocentric,
            node_variant: NodeVariant::True,
        };
        for body in [Body::NorthNode, Body::SouthNode] {
            let err = tropical_longitude(&eph, M, body, flags).unwrap_err();
            assert!(matches!(err, ChartError::UnsupportedQuery(_)), "{body:?}");
        }
    }

    #[test]
    fn sidereal_identity() {
        for &(trop, ayan) in &[(100.0, 24.0), (10.0, 24.736), (359.9, -0.5)] {
            let sid = sidereal_longitude(trop, ayan);
            assert!((sid - (trop - ayan).rem_euclid(360.0)).abs() < 1e-12);
            assert!((0.0..360.0).contains(&sid));
        }
    }

    #[test]
    fn extra_offset_applied() {
        let eph = FixedOracle {
            lon_deg: 0.0,
            ayanamsa_deg: 24.0,
        };
        let base = ayanamsa(&eph, M, AyanamsaConfig::default()).unwrap();
        let shifted = ayanamsa(
            &eph,
            M,
            AyanamsaConfig {
                extra_offset_deg: 0.2103,
                ..AyanamsaConfig::default()
            },
        )
        .unwrap();
        assert!((shifted - base - 0.2103).abs() < 1e-12);
    }

    #[test]
    fn resolve_positions_shares_ayanamsa() {
        let eph = FixedOracle {
            lon_deg: 123.0,
            ayanamsa_deg: 23.853,
        };
        let positions = resolve_positions(
            &eph,
            M,
            &[Body::Sun, Body::Moon, Body::NorthNode],
            PositionFlags::default(),
            23.853,
        )
        .unwrap();
        assert_eq!(positions.len(), 3);
        for p in &positions {
            let expect = sidereal_longitude(p.tropical_deg, 23.853);
            assert!((p.sidereal_deg - expect).abs() < 1e-12, "{:?}", p.body);
        }
    }
}
