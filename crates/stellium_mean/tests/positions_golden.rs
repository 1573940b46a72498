//! Golden-value checks against published almanac positions.
//!
//! Tolerances reflect the backend's stated arcminute-level precision and
//! the UT ≈ TT approximation.

use stellium_core::{Body, CLASSICAL_BODIES, Center, Ephemeris, NodeVariant, PositionFlags};
use stellium_mean::MeanEphemeris;
use stellium_time::Moment;

const J2000: f64 = 2_451_545.0;

fn geo() -> PositionFlags {
    PositionFlags::default()
}

#[test]
fn sun_longitude_j2000() {
    // Astronomical Almanac 2000: apparent Sun ~280.37 deg at J2000.0.
    let pos = MeanEphemeris::new()
        .position(Moment::from_jd_ut(J2000), Body::Sun, geo())
        .unwrap();
    assert!((pos.lon_deg - 280.37).abs() < 0.3, "Sun = {}", pos.lon_deg);
}

#[test]
fn sun_in_cancer_summer_1962() {
    // 1962-07-03 04:33 UT, JD 2437848.689583. The Sun sits early in
    // tropical Cancer (90..120 deg) through all of early July.
    let pos = MeanEphemeris::new()
        .position(Moment::from_jd_ut(2_437_848.689_583_333), Body::Sun, geo())
        .unwrap();
    assert!(
        (90.0..120.0).contains(&pos.lon_deg),
        "Sun = {}",
        pos.lon_deg
    );
}

#[test]
fn moon_longitude_1992_apr_12() {
    // Meeus example 47.a: 1992 April 12, 0h TD (JDE 2448724.5),
    // geometric lambda = 133.162655 deg.
    let pos = MeanEphemeris::new()
        .position(Moment::from_jd_ut(2_448_724.5), Body::Moon, geo())
        .unwrap();
    assert!(
        (pos.lon_deg - 133.162_655).abs() < 0.05,
        "Moon = {}",
        pos.lon_deg
    );
    assert!((pos.lat_deg - (-3.229_126)).abs() < 0.02, "lat = {}", pos.lat_deg);
}

#[test]
fn mean_node_j2000() {
    // Omega(J2000) = 125.0446 deg.
    let flags = PositionFlags {
        node_variant: NodeVariant::Mean,
        ..PositionFlags::default()
    };
    let pos = MeanEphemeris::new()
        .position(Moment::from_jd_ut(J2000), Body::NorthNode, flags)
        .unwrap();
    assert!((pos.lon_deg - 125.0446).abs() < 0.01, "node = {}", pos.lon_deg);
}

#[test]
fn all_classical_bodies_resolve() {
    let eph = MeanEphemeris::new();
    for &jd in &[2_378_496.5, 2_415_020.5, 2_437_848.5, J2000, 2_469_807.0] {
        let m = Moment::from_jd_ut(jd);
        for body in CLASSICAL_BODIES {
            let pos = eph.position(m, body, geo()).unwrap();
            assert!(
                (0.0..360.0).contains(&pos.lon_deg),
                "{body:?} at {jd}: lon = {}",
                pos.lon_deg
            );
            assert!(pos.distance_au > 0.0);
        }
    }
}

#[test]
fn opposition_geometry_mars_2003() {
    // Late August 2003, the closest Mars approach in recorded history:
    // geocentric Mars within a few degrees of Sun + 180.
    let eph = MeanEphemeris::new();
    let m = Moment::from_jd_ut(2_452_879.5); // 2003-08-28
    let sun = eph.position(m, Body::Sun, geo()).unwrap();
    let mars = eph.position(m, Body::Mars, geo()).unwrap();
    let sep = (mars.lon_deg - sun.lon_deg - 180.0).rem_euclid(360.0);
    let sep = sep.min(360.0 - sep);
    assert!(sep < 5.0, "Sun-Mars opposition offset = {sep}");
    assert!(mars.distance_au < 0.40, "Mars at {} au", mars.distance_au);
}

#[test]
fn heliocentric_matches_geometry() {
    // Geocentric Venus vector = helio Venus - helio Earth; check the
    // triangle closes through the Sun position.
    let eph = MeanEphemeris::new();
    let m = Moment::from_jd_ut(2_440_587.5);
    let helio = PositionFlags {
        center: Center::Heliocentric,
        ..PositionFlags::default()
    };
    let v_geo = eph.position(m, Body::Venus, geo()).unwrap();
    let v_helio = eph.position(m, Body::Venus, helio).unwrap();
    // Both frames place Venus inside its orbital distance bounds.
    assert!((0.71..0.74).contains(&v_helio.distance_au));
    assert!((0.26..1.74).contains(&v_geo.distance_au));
}
