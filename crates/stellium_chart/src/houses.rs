//! House cusps and chart angles.
//!
//! The oracle supplies the Ascendant, Midheaven, and (for Placidus) the
//! intermediate cusps. Equal-division cusps are always re-derived here
//! from the Ascendant so that cusp 1 matches it exactly regardless of
//! backend rounding.

use stellium_core::{Ephemeris, HouseAngles, HouseSystem, normalize_deg};
use stellium_time::Moment;

use crate::error::ChartError;

/// Latitude bound (degrees) beyond which time-based house division is
/// rejected as degenerate.
pub const MAX_TIME_BASED_LATITUDE_DEG: f64 = 66.5;

/// Compute the twelve cusps and the Asc/MC angles.
///
/// Coordinates are validated first; the Placidus latitude gate is applied
/// before the oracle is consulted. Non-finite cusps from a backend are
/// rejected rather than passed through.
pub fn compute<E: Ephemeris + ?Sized>(
    eph: &E,
    moment: Moment,
    latitude_deg: f64,
    longitude_deg: f64,
    system: HouseSystem,
) -> Result<HouseAngles, ChartError> {
    if !(-90.0..=90.0).contains(&latitude_deg)
        || !(-180.0..=180.0).contains(&longitude_deg)
        || !latitude_deg.is_finite()
        || !longitude_deg.is_finite()
    {
        return Err(ChartError::InvalidCoordinate {
            latitude_deg,
            longitude_deg,
        });
    }
    if system.latitude_dependent() && latitude_deg.abs() > MAX_TIME_BASED_LATITUDE_DEG {
        return Err(ChartError::DegenerateHouses { latitude_deg });
    }

    let raw = eph.houses(moment, latitude_deg, longitude_deg, system)?;
    if !raw.ascendant_deg.is_finite()
        || !raw.midheaven_deg.is_finite()
        || raw.cusps_deg.iter().any(|c| !c.is_finite())
    {
        return Err(ChartError::DegenerateHouses { latitude_deg });
    }

    let ascendant_deg = normalize_deg(raw.ascendant_deg);
    let midheaven_deg = normalize_deg(raw.midheaven_deg);
    let cusps_deg = match system {
        HouseSystem::EqualAscCusp => equal_fan(ascendant_deg),
        HouseSystem::EqualAscMid => equal_fan(normalize_deg(ascendant_deg - 15.0)),
        HouseSystem::Placidus => raw.cusps_deg.map(normalize_deg),
    };

    Ok(HouseAngles {
        cusps_deg,
        ascendant_deg,
        midheaven_deg,
    })
}

fn equal_fan(start_deg: f64) -> [f64; 12] {
    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = normalize_deg(start_deg + (i as f64) * 30.0);
    }
    cusps
}

#[cfg(test)]
mod tests {
    use super::*;
    use stellium_core::{
        AyanamsaFrame, Body, EclipticCoords, EphemerisError, PositionFlags,
    };

    /// Oracle returning a fixed Ascendant/MC, with deliberately sloppy
    /// equal cusps to prove the re-derivation.
    struct AnglesOracle {
        asc_deg: f64,
        mc_deg: f64,
    }

    impl Ephemeris for AnglesOracle {
        fn position(
            &self,
            _moment: Moment,
            _body: Body,
            _flags: PositionFlags,
        ) -> Result<EclipticCoords, EphemerisError> {
            Err(EphemerisError::UnsupportedQuery("positions not served"))
        }

        fn ayanamsa(&self, _moment: Moment, _frame: AyanamsaFrame) -> Result<f64, EphemerisError> {
            Ok(0.0)
        }

        fn houses(
            &self,
            _moment: Moment,
            _latitude_deg: f64,
            _longitude_deg: f64,
            _system: HouseSystem,
        ) -> Result<HouseAngles, EphemerisError> {
            let mut cusps = [0.0; 12];
            for (i, c) in cusps.iter_mut().enumerate() {
                // Off by a small epsilon per cusp.
                *c = self.asc_deg + (i as f64) * 30.0 + 1e-7;
            }
            Ok(HouseAngles {
                cusps_deg: cusps,
                ascendant_deg: self.asc_deg,
                midheaven_deg: self.mc_deg,
            })
        }
    }

    const M: Moment = Moment::from_jd_ut(2_451_545.0);

    fn oracle() -> AnglesOracle {
        AnglesOracle {
            asc_deg: 123.456,
            mc_deg: 33.3,
        }
    }

    #[test]
    fn equal_cusp_one_is_exactly_ascendant() {
        let h = compute(&oracle(), M, 40.0, -74.0, HouseSystem::EqualAscCusp).unwrap();
        assert!((h.cusps_deg[0] - h.ascendant_deg).abs() < 1e-9);
        for i in 0..12 {
            let gap = (h.cusps_deg[(i + 1) % 12] - h.cusps_deg[i]).rem_euclid(360.0);
            assert!((gap - 30.0).abs() < 1e-9, "cusp {i} gap = {gap}");
        }
    }

    #[test]
    fn equal_mid_centers_ascendant() {
        let h = compute(&oracle(), M, 40.0, -74.0, HouseSystem::EqualAscMid).unwrap();
        let expected = (h.ascendant_deg - 15.0).rem_euclid(360.0);
        assert!((h.cusps_deg[0] - expected).abs() < 1e-9);
    }

    #[test]
    fn invalid_coordinates_rejected() {
        for &(lat, lon) in &[(91.0, 0.0), (-90.5, 0.0), (0.0, 181.0), (0.0, -180.1)] {
            let err = compute(&oracle(), M, lat, lon, HouseSystem::EqualAscCusp).unwrap_err();
            assert!(matches!(err, ChartError::InvalidCoordinate { .. }), "{lat},{lon}");
        }
    }

    #[test]
    fn nan_coordinates_rejected() {
        let err = compute(&oracle(), M, f64::NAN, 0.0, HouseSystem::EqualAscCusp).unwrap_err();
        assert!(matches!(err, ChartError::InvalidCoordinate { .. }));
    }

    #[test]
    fn placidus_gated_before_oracle() {
        // 70 deg is a valid coordinate but beyond the time-based limit.
        let err = compute(&oracle(), M, 70.0, 20.0, HouseSystem::Placidus).unwrap_err();
        assert!(matches!(err, ChartError::DegenerateHouses { .. }));
        // Equal systems still work at the same latitude.
        assert!(compute(&oracle(), M, 70.0, 20.0, HouseSystem::EqualAscCusp).is_ok());
    }

    #[test]
    fn nan_cusps_from_backend_rejected() {
        struct NanOracle;
        impl Ephemeris for NanOracle {
            fn position(
                &self,
                _moment: Moment,
                _body: Body,
                _flags: PositionFlags,
            ) -> Result<EclipticCoords, EphemerisError> {
                Err(EphemerisError::UnsupportedQuery("positions not served"))
            }
            fn ayanamsa(
                &self,
                _moment: Moment,
                _frame: AyanamsaFrame,
            ) -> Result<f64, EphemerisError> {
                Ok(0.0)
            }
            fn houses(
                &self,
                _moment: Moment,
                _latitude_deg: f64,
                _longitude_deg: f64,
                _system: HouseSystem,
            ) -> Result<HouseAngles, EphemerisError> {
                Ok(HouseAngles {
                    cusps_deg: [f64::NAN; 12],
                    ascendant_deg: 0.0,
                    midheaven_deg: 0.0,
                })
            }
        }
        let err = compute(&NanOracle, M, 60.0, 0.0, HouseSystem::Placidus).unwrap_err();
        assert!(matches!(err, ChartError::DegenerateHouses { .. }));
    }
}
