//! IAU 2006 general precession and ayanamsa.
//!
//! The general precession p_A is the accumulated westward motion of the
//! vernal equinox along the ecliptic since J2000.0. It serves double duty
//! here: converting J2000 ecliptic longitudes to the equinox of date
//! (tropical frame), and anchoring each sidereal frame's ayanamsa as
//! `reference_J2000 + p_A`.
//!
//! Source: Capitaine, Wallace & Chapront 2003, Table 1 (IAU standard).

use stellium_core::AyanamsaFrame;

/// IAU 2006 general precession in ecliptic longitude, arcseconds, at `t`
/// Julian centuries since J2000.0. Dominant term ~5028.80″/century.
pub fn general_precession_arcsec(t: f64) -> f64 {
    t * (5028.796195
        + t * (1.1054348 + t * (0.00007964 + t * (-0.000023857 + t * -0.0000000383))))
}

/// General precession in degrees.
pub fn general_precession_deg(t: f64) -> f64 {
    general_precession_arcsec(t) / 3600.0
}

/// Ayanamsa of a sidereal frame in degrees at `t` Julian centuries since
/// J2000.0.
pub fn ayanamsa_deg(frame: AyanamsaFrame, t: f64) -> f64 {
    frame.reference_j2000_deg() + general_precession_deg(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_at_j2000() {
        assert_eq!(general_precession_arcsec(0.0), 0.0);
    }

    #[test]
    fn rate_per_year() {
        // ~50.29 arcsec per year
        let p = general_precession_arcsec(0.01);
        assert!((p - 50.29).abs() < 0.1, "p = {p}");
    }

    #[test]
    fn fagan_bradley_at_j2000() {
        let v = ayanamsa_deg(AyanamsaFrame::FaganBradley, 0.0);
        assert!((v - 24.736).abs() < 1e-12);
    }

    #[test]
    fn ayanamsa_grows_forward() {
        let a0 = ayanamsa_deg(AyanamsaFrame::Lahiri, 0.0);
        let a1 = ayanamsa_deg(AyanamsaFrame::Lahiri, 0.5);
        assert!(a1 > a0);
        // ~1.397 deg per century
        assert!((a1 - a0 - 0.6985).abs() < 0.01);
    }

    #[test]
    fn lahiri_1962_below_j2000() {
        // Precession is negative for past epochs.
        let t = (2_437_848.5 - 2_451_545.0) / 36525.0;
        let v = ayanamsa_deg(AyanamsaFrame::Lahiri, t);
        assert!(v < 23.853 && v > 23.0, "Lahiri 1962 = {v}");
    }
}
