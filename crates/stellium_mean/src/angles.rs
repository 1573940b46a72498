//! Ascendant, Midheaven, and house cusps.
//!
//! Standard spherical astronomy (Meeus, Montenbruck & Pfleger). The
//! Ascendant and Midheaven follow from Local Sidereal Time and the
//! obliquity; equal-division cusps are a 30 deg fan from the Ascendant,
//! and Placidus cusps come from iterative semi-arc trisection.

use std::f64::consts::{PI, TAU};

use stellium_core::{EphemerisError, HouseAngles, HouseSystem, normalize_deg};
use stellium_time::{Moment, gmst_rad, local_sidereal_time_rad};

/// Latitude bound for the time-based (Placidus) system, degrees. Beyond
/// it the ecliptic can fail to intersect some semi-arc circles.
pub const MAX_PLACIDUS_LATITUDE_DEG: f64 = 66.5;

/// Mean obliquity of the ecliptic in radians at `t` Julian centuries
/// since J2000.0 (IAU 2006 polynomial, leading terms).
pub fn mean_obliquity_rad(t: f64) -> f64 {
    let arcsec = 84_381.406 + t * (-46.836_769 + t * (-0.000_183_1 + t * 0.002_003_40));
    arcsec * PI / (180.0 * 3600.0)
}

/// Ascendant and Midheaven in radians from Local Sidereal Time, observer
/// latitude, and obliquity.
///
/// Asc = atan2(cos LST, -(sin LST cos eps + tan phi sin eps))
/// MC  = atan2(sin LST, cos LST cos eps)
///
/// The sign arrangement picks the rising (eastern-horizon) intersection;
/// negating both arguments gives the Descendant instead.
pub fn asc_mc_rad(lst: f64, lat_rad: f64, eps: f64) -> (f64, f64) {
    let asc = f64::atan2(lst.cos(), -(lst.sin() * eps.cos() + lat_rad.tan() * eps.sin()));
    let mc = f64::atan2(lst.sin(), lst.cos() * eps.cos());
    (asc.rem_euclid(TAU), mc.rem_euclid(TAU))
}

/// House cusps and angles for an observer. Longitude is east-positive
/// degrees.
pub fn houses(
    moment: Moment,
    latitude_deg: f64,
    longitude_deg: f64,
    system: HouseSystem,
) -> Result<HouseAngles, EphemerisError> {
    let t = moment.centuries_since_j2000();
    let eps = mean_obliquity_rad(t);
    let gmst = gmst_rad(moment.jd_ut());
    let lst = local_sidereal_time_rad(gmst, longitude_deg.to_radians());
    let lat_rad = latitude_deg.to_radians();

    let (asc_rad, mc_rad) = asc_mc_rad(lst, lat_rad, eps);
    let asc_deg = normalize_deg(asc_rad.to_degrees());
    let mc_deg = normalize_deg(mc_rad.to_degrees());

    let cusps_deg = match system {
        HouseSystem::EqualAscCusp => equal_fan(asc_deg),
        HouseSystem::EqualAscMid => equal_fan(normalize_deg(asc_deg - 15.0)),
        HouseSystem::Placidus => {
            if latitude_deg.abs() > MAX_PLACIDUS_LATITUDE_DEG {
                return Err(EphemerisError::UnsupportedQuery(
                    "Placidus cusps undefined above 66.5 deg latitude",
                ));
            }
            // RAMC equals LST for the meridian.
            placidus_cusps(asc_deg, mc_deg, lst, lat_rad, eps)
        }
    };

    Ok(HouseAngles {
        cusps_deg,
        ascendant_deg: asc_deg,
        midheaven_deg: mc_deg,
    })
}

/// Twelve cusps 30 deg apart starting from `start_deg`.
fn equal_fan(start_deg: f64) -> [f64; 12] {
    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = normalize_deg(start_deg + (i as f64) * 30.0);
    }
    cusps
}

/// Placidus: angular cusps from Asc/MC, intermediate cusps by trisecting
/// the diurnal and nocturnal semi-arcs in time, opposite cusps by
/// reflection.
fn placidus_cusps(asc_deg: f64, mc_deg: f64, ramc: f64, lat: f64, eps: f64) -> [f64; 12] {
    let mut cusps = [0.0; 12];
    cusps[0] = asc_deg;
    cusps[3] = normalize_deg(mc_deg + 180.0);
    cusps[6] = normalize_deg(asc_deg + 180.0);
    cusps[9] = mc_deg;

    // Houses 11, 12: MC toward Asc, above the horizon.
    cusps[10] = placidus_cusp(ramc, lat, eps, 1.0 / 3.0, true);
    cusps[11] = placidus_cusp(ramc, lat, eps, 2.0 / 3.0, true);

    // Houses 2, 3: Asc toward IC, below the horizon.
    cusps[1] = placidus_cusp(ramc + PI, lat, eps, 1.0 / 3.0, false);
    cusps[2] = placidus_cusp(ramc + PI, lat, eps, 2.0 / 3.0, false);

    cusps[4] = normalize_deg(cusps[10] + 180.0);
    cusps[5] = normalize_deg(cusps[11] + 180.0);
    cusps[7] = normalize_deg(cusps[1] + 180.0);
    cusps[8] = normalize_deg(cusps[2] + 180.0);

    cusps
}

/// One intermediate Placidus cusp by fixed-point iteration on right
/// ascension. `fraction` is 1/3 or 2/3 of the relevant semi-arc.
fn placidus_cusp(ramc: f64, lat: f64, eps: f64, fraction: f64, above_horizon: bool) -> f64 {
    let mut ra = if above_horizon {
        ramc + fraction * PI / 2.0
    } else {
        ramc + PI + fraction * PI / 2.0
    };

    for _ in 0..50 {
        let dec = (eps.sin() * ra.sin()).asin();
        let f = fraction * semi_arc_rad(dec, lat, above_horizon);
        let new_ra = if above_horizon { ramc + f } else { ramc + PI + f };
        if (new_ra - ra).abs() < 1e-10 {
            ra = new_ra;
            break;
        }
        ra = new_ra;
    }

    normalize_deg(equator_to_ecliptic_longitude_rad(ra, eps).to_degrees())
}

/// Diurnal (or nocturnal) semi-arc: `acos(-tan dec tan lat)`, clamped at
/// the circumpolar limit.
fn semi_arc_rad(dec: f64, lat: f64, diurnal: bool) -> f64 {
    let cos_ha = -(dec.tan() * lat.tan());
    let ha = cos_ha.clamp(-1.0, 1.0).acos();
    if diurnal { ha } else { PI - ha }
}

/// Ecliptic longitude of an equator-division point, where the point's
/// declination is implied by its right ascension: `dec = asin(sin eps sin RA)`.
fn equator_to_ecliptic_longitude_rad(ra: f64, eps: f64) -> f64 {
    let dec = (eps.sin() * ra.sin()).asin();
    let sin_lon = ra.sin() * eps.cos() + dec.tan() * eps.sin();
    f64::atan2(sin_lon, ra.cos()).rem_euclid(TAU)
}
