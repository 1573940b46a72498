//! Analytic mean-element ephemeris backend.
//!
//! A self-contained oracle good to a few arcminutes: planets from the JPL
//! 1800–2050 mean Keplerian elements, the Moon from a truncated ELP
//! series, nodes from the IERS Delaunay arguments with short-period
//! corrections, and house angles from standard spherical astronomy.
//!
//! The chart engine never depends on this crate; it exists so the
//! workspace runs end to end without an external ephemeris service, and
//! as the reference backend for the integration tests and the CLI.
//!
//! Approximations, deliberate and documented:
//! - TT ≈ UT: Delta-T (about a minute over the supported interval) is
//!   below the arcminute noise floor of the element tables.
//! - Planetary latitude terms carry no precession correction; only
//!   longitudes are rotated to the equinox of date.

mod angles;
mod args;
mod kepler;
mod moon;
mod nodes;
mod precession;

use stellium_core::{
    AyanamsaFrame, Body, Center, EclipticCoords, Ephemeris, EphemerisError, HouseAngles,
    HouseSystem, PositionFlags, normalize_deg,
};
use stellium_time::Moment;

use crate::kepler::{KeplerTarget, heliocentric_j2000, spherical_to_vector, vector_to_spherical};
use crate::precession::general_precession_deg;

pub use crate::angles::MAX_PLACIDUS_LATITUDE_DEG;

/// First supported instant: 1800-01-01 00:00 UT.
pub const MIN_JD_UT: f64 = 2_378_496.5;
/// First unsupported instant: 2050-01-01 00:00 UT.
pub const MAX_JD_UT: f64 = 2_469_807.5;

/// Mean geocentric lunar distance in au, attached to node positions so
/// they carry a physically plausible distance.
const LUNAR_DISTANCE_AU: f64 = 0.002_570;

/// The analytic backend. Stateless; a single value serves any number of
/// concurrent chart computations.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanEphemeris;

impl MeanEphemeris {
    pub const fn new() -> Self {
        Self
    }

    fn check_range(&self, moment: Moment, body: Body) -> Result<(), EphemerisError> {
        let jd = moment.jd_ut();
        if !(MIN_JD_UT..MAX_JD_UT).contains(&jd) {
            return Err(EphemerisError::OutOfRange { body, jd_ut: jd });
        }
        Ok(())
    }
}

fn planet_target(body: Body) -> Option<KeplerTarget> {
    match body {
        Body::Mercury => Some(KeplerTarget::Mercury),
        Body::Venus => Some(KeplerTarget::Venus),
        Body::Mars => Some(KeplerTarget::Mars),
        Body::Jupiter => Some(KeplerTarget::Jupiter),
        Body::Saturn => Some(KeplerTarget::Saturn),
        Body::Uranus => Some(KeplerTarget::Uranus),
        Body::Neptune => Some(KeplerTarget::Neptune),
        Body::Pluto => Some(KeplerTarget::Pluto),
        _ => None,
    }
}

/// Rotate a J2000 spherical result to the equinox of date.
fn to_equinox_of_date(lon_j2000: f64, lat: f64, dist: f64, t: f64) -> EclipticCoords {
    EclipticCoords {
        lon_deg: normalize_deg(lon_j2000 + general_precession_deg(t)),
        lat_deg: lat,
        distance_au: dist,
    }
}

impl Ephemeris for MeanEphemeris {
    fn position(
        &self,
        moment: Moment,
        body: Body,
        flags: PositionFlags,
    ) -> Result<EclipticCoords, EphemerisError> {
        self.check_range(moment, body)?;
        let t = moment.centuries_since_j2000();

        if body.is_node() {
            if body == Body::SouthNode {
                return Err(EphemerisError::UnsupportedQuery(
                    "south node is derived, not queried",
                ));
            }
            if flags.center == Center::Heliocentric {
                return Err(EphemerisError::UnsupportedQuery(
                    "lunar nodes are geocentric constructs",
                ));
            }
            // Node longitude is already referred to the equinox of date.
            return Ok(EclipticCoords {
                lon_deg: nodes::north_node_deg(t, flags.node_variant),
                lat_deg: 0.0,
                distance_au: LUNAR_DISTANCE_AU,
            });
        }

        match (body, flags.center) {
            (Body::Sun, Center::Heliocentric) => Err(EphemerisError::UnsupportedQuery(
                "heliocentric Sun position is identically zero",
            )),
            (Body::Sun, Center::Geocentric) => {
                let e = heliocentric_j2000(KeplerTarget::EarthMoonBary, t);
                let (lon, lat, dist) = vector_to_spherical(&[-e[0], -e[1], -e[2]]);
                Ok(to_equinox_of_date(lon, lat, dist, t))
            }
            (Body::Moon, Center::Geocentric) => {
                // The lunar series is already of date.
                let (lon, lat, dist) = moon::geocentric_moon(t);
                Ok(EclipticCoords {
                    lon_deg: normalize_deg(lon),
                    lat_deg: lat,
                    distance_au: dist,
                })
            }
            (Body::Moon, Center::Heliocentric) => {
                let e = heliocentric_j2000(KeplerTarget::EarthMoonBary, t);
                let (lon, lat, dist) = moon::geocentric_moon(t);
                // Bring the of-date lunar vector back to J2000 before adding.
                let m = spherical_to_vector(lon - general_precession_deg(t), lat, dist);
                let (lon, lat, dist) =
                    vector_to_spherical(&[e[0] + m[0], e[1] + m[1], e[2] + m[2]]);
                Ok(to_equinox_of_date(lon, lat, dist, t))
            }
            (_, center) => {
                let target = planet_target(body).ok_or(EphemerisError::UnsupportedQuery(
                    "body has no mean-element orbit",
                ))?;
                let p = heliocentric_j2000(target, t);
                let v = match center {
                    Center::Heliocentric => p,
                    Center::Geocentric => {
                        let e = heliocentric_j2000(KeplerTarget::EarthMoonBary, t);
                        [p[0] - e[0], p[1] - e[1], p[2] - e[2]]
                    }
                };
                let (lon, lat, dist) = vector_to_spherical(&v);
                Ok(to_equinox_of_date(lon, lat, dist, t))
            }
        }
    }

    fn ayanamsa(&self, moment: Moment, frame: AyanamsaFrame) -> Result<f64, EphemerisError> {
        Ok(precession::ayanamsa_deg(
            frame,
            moment.centuries_since_j2000(),
        ))
    }

    fn houses(
        &self,
        moment: Moment,
        latitude_deg: f64,
        longitude_deg: f64,
        system: HouseSystem,
    ) -> Result<HouseAngles, EphemerisError> {
        angles::houses(moment, latitude_deg, longitude_deg, system)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stellium_core::NodeVariant;

    const J2000: f64 = 2_451_545.0;

    fn geo() -> PositionFlags {
        PositionFlags::default()
    }

    #[test]
    fn out_of_range_rejected() {
        let eph = MeanEphemeris::new();
        for &jd in &[MIN_JD_UT - 1.0, MAX_JD_UT, MAX_JD_UT + 10_000.0] {
            let err = eph
                .position(Moment::from_jd_ut(jd), Body::Sun, geo())
                .unwrap_err();
            assert!(
                matches!(err, EphemerisError::OutOfRange { body: Body::Sun, jd_ut } if jd_ut == jd)
            );
        }
    }

    #[test]
    fn range_boundaries() {
        let eph = MeanEphemeris::new();
        assert!(eph.position(Moment::from_jd_ut(MIN_JD_UT), Body::Sun, geo()).is_ok());
        assert!(
            eph.position(Moment::from_jd_ut(MAX_JD_UT - 1e-6), Body::Sun, geo())
                .is_ok()
        );
    }

    #[test]
    fn south_node_unsupported() {
        let eph = MeanEphemeris::new();
        let err = eph
            .position(Moment::from_jd_ut(J2000), Body::SouthNode, geo())
            .unwrap_err();
        assert!(matches!(err, EphemerisError::UnsupportedQuery(_)));
    }

    #[test]
    fn heliocentric_node_unsupported() {
        let eph = MeanEphemeris::new();
        let flags = PositionFlags {
            center: Center::Heliocentric,
            node_variant: NodeVariant::True,
        };
        let err = eph
            .position(Moment::from_jd_ut(J2000), Body::NorthNode, flags)
            .unwrap_err();
        assert!(matches!(err, EphemerisError::UnsupportedQuery(_)));
    }

    #[test]
    fn heliocentric_sun_unsupported() {
        let eph = MeanEphemeris::new();
        let flags = PositionFlags {
            center: Center::Heliocentric,
            ..PositionFlags::default()
        };
        let err = eph
            .position(Moment::from_jd_ut(J2000), Body::Sun, flags)
            .unwrap_err();
        assert!(matches!(err, EphemerisError::UnsupportedQuery(_)));
    }

    #[test]
    fn sun_at_j2000() {
        // Geocentric Sun near 280.37 deg on 2000-01-01 12h.
        let eph = MeanEphemeris::new();
        let pos = eph
            .position(Moment::from_jd_ut(J2000), Body::Sun, geo())
            .unwrap();
        assert!((pos.lon_deg - 280.4).abs() < 0.3, "Sun = {}", pos.lon_deg);
        assert!(pos.lat_deg.abs() < 0.01);
        assert!((pos.distance_au - 0.9833).abs() < 0.01);
    }

    #[test]
    fn node_variants_differ() {
        let eph = MeanEphemeris::new();
        let m = Moment::from_jd_ut(2_440_587.5);
        let mean = eph
            .position(
                m,
                Body::NorthNode,
                PositionFlags {
                    node_variant: NodeVariant::Mean,
                    ..PositionFlags::default()
                },
            )
            .unwrap();
        let true_n = eph
            .position(
                m,
                Body::NorthNode,
                PositionFlags {
                    node_variant: NodeVariant::True,
                    ..PositionFlags::default()
                },
            )
            .unwrap();
        assert!((mean.lon_deg - true_n.lon_deg).abs() > 1e-4);
    }

    #[test]
    fn ayanamsa_frames_ordered() {
        // At any epoch Fagan-Bradley > Lahiri > Krishnamurti > Raman.
        let eph = MeanEphemeris::new();
        let m = Moment::from_jd_ut(2_437_848.5);
        let fb = eph.ayanamsa(m, AyanamsaFrame::FaganBradley).unwrap();
        let la = eph.ayanamsa(m, AyanamsaFrame::Lahiri).unwrap();
        let kp = eph.ayanamsa(m, AyanamsaFrame::Krishnamurti).unwrap();
        let ra = eph.ayanamsa(m, AyanamsaFrame::Raman).unwrap();
        assert!(fb > la && la > kp && kp > ra);
    }

    #[test]
    fn moon_well_inside_sun_distance() {
        let eph = MeanEphemeris::new();
        let pos = eph
            .position(Moment::from_jd_ut(J2000), Body::Moon, geo())
            .unwrap();
        assert!(pos.distance_au < 0.003, "Moon at {} au", pos.distance_au);
    }

    #[test]
    fn heliocentric_moon_near_earth() {
        let eph = MeanEphemeris::new();
        let flags = PositionFlags {
            center: Center::Heliocentric,
            ..PositionFlags::default()
        };
        let moon = eph.position(Moment::from_jd_ut(J2000), Body::Moon, flags).unwrap();
        assert!((moon.distance_au - 1.0).abs() < 0.03);
    }
}
