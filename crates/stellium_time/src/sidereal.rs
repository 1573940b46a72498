//! Greenwich Mean Sidereal Time.
//!
//! Needed by the house-angle computations: the Ascendant and Midheaven are
//! functions of Local Sidereal Time. Functions take UT1 Julian Dates; the
//! engine carries no Earth-orientation tables, so callers pass JD UT
//! directly (UT1-UTC is under a second, far below the engine's precision).
//!
//! Sources: ERA from IERS Conventions 2010, Eq. 5.15; GMST polynomial from
//! Capitaine et al. 2003, Table 2.

use std::f64::consts::{PI, TAU};

use crate::julian::J2000_JD;

const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Earth Rotation Angle at a given UT1 Julian Date, radians in [0, 2π).
pub fn earth_rotation_angle_rad(jd_ut1: f64) -> f64 {
    let du = jd_ut1 - J2000_JD;
    let theta = TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du);
    theta.rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time at a given UT1 Julian Date, radians in
/// [0, 2π).
///
/// GMST = ERA + polynomial(T), T in Julian centuries from J2000.0.
pub fn gmst_rad(jd_ut1: f64) -> f64 {
    let era = earth_rotation_angle_rad(jd_ut1);
    let t = (jd_ut1 - J2000_JD) / 36525.0;
    let poly_arcsec = 0.014506
        + t * (4612.156534 + t * (1.3915817 + t * (-0.00000044 + t * (-0.000029956 + t * -0.0000000368))));
    (era + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Local Sidereal Time from GMST and observer east longitude, radians in
/// [0, 2π).
pub fn local_sidereal_time_rad(gmst: f64, longitude_east_rad: f64) -> f64 {
    (gmst + longitude_east_rad).rem_euclid(TAU)
}
