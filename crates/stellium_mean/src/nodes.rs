//! Lunar ascending-node longitude, mean and true variants.
//!
//! Mean node: the fifth Delaunay argument (Omega) from IERS Conventions
//! 2010, Table 5.2e. True node: mean plus 13 short-period sinusoidal
//! corrections from Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 47.
//!
//! Only the north node is computed here; the engine derives the south
//! node as north + 180 deg.

use stellium_core::{NodeVariant, normalize_deg};

use crate::args::fundamental_arguments;

// Perturbation terms: multiples of [l, l', F, D, Omega] and amplitude in
// degrees of the sine correction.
#[rustfmt::skip]
static PERTURBATION_TERMS: [[f64; 6]; 13] = [
    // l    l'    F     D     Om    amplitude (deg)
    [ 0.0,  0.0,  0.0,  0.0,  1.0, -1.4979],
    [ 0.0,  0.0,  2.0, -2.0,  0.0,  0.1500],
    [ 0.0,  0.0,  2.0,  0.0,  0.0, -0.1226],
    [ 0.0,  0.0,  0.0,  0.0,  2.0,  0.1176],
    [ 1.0,  0.0,  0.0,  0.0,  0.0, -0.0801],
    [ 0.0,  1.0,  0.0,  0.0,  0.0,  0.0056],
    [ 0.0,  0.0,  2.0,  0.0, -2.0, -0.0047],
    [ 1.0,  0.0,  2.0,  0.0,  0.0, -0.0043],
    [ 0.0,  0.0,  2.0, -2.0,  2.0,  0.0040],
    [ 0.0,  1.0,  0.0,  0.0, -1.0,  0.0037],
    [ 0.0,  0.0,  0.0,  2.0,  0.0, -0.0030],
    [ 2.0,  0.0,  0.0,  0.0,  0.0, -0.0020],
    [ 0.0,  1.0,  2.0, -2.0,  0.0,  0.0015],
];

fn perturbation_deg(args: &[f64; 5]) -> f64 {
    let mut correction = 0.0_f64;
    for term in &PERTURBATION_TERMS {
        let angle = term[0] * args[0]
            + term[1] * args[1]
            + term[2] * args[2]
            + term[3] * args[3]
            + term[4] * args[4];
        correction += term[5] * angle.sin();
    }
    correction
}

/// North-node ecliptic longitude in degrees [0, 360) at `t` Julian
/// centuries since J2000.0, mean equinox of date.
pub fn north_node_deg(t: f64, variant: NodeVariant) -> f64 {
    let args = fundamental_arguments(t);
    let mean = args[4].to_degrees();
    match variant {
        NodeVariant::Mean => normalize_deg(mean),
        NodeVariant::True => normalize_deg(mean + perturbation_deg(&args)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_node_at_j2000() {
        // Omega at J2000 = 450160.398036 arcsec = 125.044556 deg
        let deg = north_node_deg(0.0, NodeVariant::Mean);
        assert!((deg - 125.04).abs() < 0.1, "mean node at J2000 = {deg}");
    }

    #[test]
    fn mean_node_regression_rate() {
        // The node regresses ~19.34 deg per year.
        let r1 = north_node_deg(0.0, NodeVariant::Mean);
        let r2 = north_node_deg(0.01, NodeVariant::Mean);
        let rate_per_year = (r2 - r1 + 360.0) % 360.0 - 360.0;
        assert!(
            (rate_per_year - (-19.34)).abs() < 0.5,
            "rate = {rate_per_year} deg/yr"
        );
    }

    #[test]
    fn true_minus_mean_bounded() {
        for &t in &[-1.0, 0.0, 0.24, 5.0] {
            let mean = north_node_deg(t, NodeVariant::Mean);
            let tr = north_node_deg(t, NodeVariant::True);
            let mut diff = (tr - mean).abs();
            if diff > 180.0 {
                diff = 360.0 - diff;
            }
            assert!(diff < 3.0, "t={t}: |true - mean| = {diff}");
        }
    }

    #[test]
    fn true_node_perturbation_nonzero() {
        let mean = north_node_deg(0.24, NodeVariant::Mean);
        let tr = north_node_deg(0.24, NodeVariant::True);
        let mut diff = (tr - mean).abs();
        if diff > 180.0 {
            diff = 360.0 - diff;
        }
        assert!(diff > 0.001, "perturbation too small: {diff}");
    }

    #[test]
    fn always_normalized() {
        for &t in &[-5.0, -0.5, 0.0, 0.5, 5.0] {
            for &variant in &[NodeVariant::Mean, NodeVariant::True] {
                let deg = north_node_deg(t, variant);
                assert!((0.0..360.0).contains(&deg), "t={t} {variant:?}: {deg}");
            }
        }
    }
}
