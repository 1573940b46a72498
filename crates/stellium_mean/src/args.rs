//! Delaunay fundamental arguments of lunisolar theory.
//!
//! Polynomials from IERS Conventions 2010, Table 5.2e. These feed the
//! lunar longitude series and the node perturbation terms.

use std::f64::consts::PI;

const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);
const TURN_ARCSEC: f64 = 1_296_000.0;

/// Fundamental arguments `[l, l', F, D, Omega]` in radians at `t` Julian
/// centuries since J2000.0.
///
/// - `l`  — mean anomaly of the Moon
/// - `l'` — mean anomaly of the Sun
/// - `F`  — mean argument of latitude of the Moon
/// - `D`  — mean elongation of the Moon from the Sun
/// - `Omega` — mean longitude of the Moon's ascending node
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    let poly = |c0: f64, c1: f64, c2: f64, c3: f64, c4: f64| -> f64 {
        let arcsec = c0 + t * (c1 + t * (c2 + t * (c3 + t * c4)));
        (arcsec.rem_euclid(TURN_ARCSEC)) * ARCSEC_TO_RAD
    };

    [
        poly(485_868.249036, 1_717_915_923.2178, 31.8792, 0.051_635, -0.000_244_70),
        poly(1_287_104.793_05, 129_596_581.0481, -0.5532, 0.000_136, -0.000_011_49),
        poly(335_779.526_232, 1_739_527_262.8478, -12.7512, -0.001_037, 0.000_004_17),
        poly(1_072_260.703_69, 1_602_961_601.2090, -6.3706, 0.006_593, -0.000_031_69),
        poly(450_160.398_036, -6_962_890.5431, 7.4722, 0.007_702, -0.000_059_39),
    ]
}
