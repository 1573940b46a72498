//! Mean Keplerian elements for the major planets.
//!
//! Elements and century rates from the JPL "Approximate Positions of the
//! Planets" memorandum (Standish), 1800–2050 table. Positions derived from
//! them are good to a few arcminutes over that interval, which is the
//! stated precision of this backend. Outside the table's interval the
//! caller receives a range error rather than an extrapolated value.

use std::f64::consts::TAU;

/// Bodies whose position comes from the mean-element table.
///
/// Earth appears as the Earth-Moon barycenter, which is what the table
/// actually tracks; the ~4700 km offset to Earth's center is below this
/// backend's precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeplerTarget {
    Mercury,
    Venus,
    EarthMoonBary,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// One table row: `[a, e, I, L, peri, node]` at J2000.0 followed by the
/// six per-century rates. Semi-major axis in au, angles in degrees,
/// `peri` = longitude of perihelion, `node` = longitude of ascending node.
type ElementRow = [f64; 12];

const fn row(target: KeplerTarget) -> &'static ElementRow {
    match target {
        KeplerTarget::Mercury => &[
            0.38709927, 0.20563593, 7.00497902, 252.25032350, 77.45779628, 48.33076593,
            0.00000037, 0.00001906, -0.00594749, 149472.67411175, 0.16047689, -0.12534081,
        ],
        KeplerTarget::Venus => &[
            0.72333566, 0.00677672, 3.39467605, 181.97909950, 131.60246718, 76.67984255,
            0.00000390, -0.00004107, -0.00078890, 58517.81538729, 0.00268329, -0.27769418,
        ],
        KeplerTarget::EarthMoonBary => &[
            1.00000261, 0.01671123, -0.00001531, 100.46457166, 102.93768193, 0.0,
            0.00000562, -0.00004392, -0.01294668, 35999.37244981, 0.32327364, 0.0,
        ],
        KeplerTarget::Mars => &[
            1.52371034, 0.09339410, 1.84969142, -4.55343205, -23.94362959, 49.55953891,
            0.00001847, 0.00007882, -0.00813131, 19140.30268499, 0.44441088, -0.29257343,
        ],
        KeplerTarget::Jupiter => &[
            5.20288700, 0.04838624, 1.30439695, 34.39644051, 14.72847983, 100.47390909,
            -0.00011607, -0.00013253, -0.00183714, 3034.74612775, 0.21252668, 0.20469106,
        ],
        KeplerTarget::Saturn => &[
            9.53667594, 0.05386179, 2.48599187, 49.95424423, 92.59887831, 113.66242448,
            -0.00125060, -0.00050991, 0.00193609, 1222.49362201, -0.41897216, -0.28867794,
        ],
        KeplerTarget::Uranus => &[
            19.18916464, 0.04725744, 0.77263783, 313.23810451, 170.95427630, 74.01692503,
            -0.00196176, -0.00004397, -0.00242939, 428.48202785, 0.40805281, 0.04240589,
        ],
        KeplerTarget::Neptune => &[
            30.06992276, 0.00859048, 1.77004347, -55.12002969, 44.96476227, 131.78422574,
            0.00026291, 0.00005105, 0.00035372, 218.45945325, -0.32241464, -0.00508664,
        ],
        KeplerTarget::Pluto => &[
            39.48211675, 0.24882730, 17.14001206, 238.92903833, 224.06891629, 110.30393684,
            -0.00031596, 0.00005170, 0.00004818, 145.20780515, -0.04062942, -0.01183482,
        ],
    }
}

/// Solve Kepler's equation `E - e sin E = M` by Newton iteration.
///
/// `m` in radians; converges in a handful of steps for planetary
/// eccentricities (e < 0.25).
fn solve_kepler(m: f64, e: f64) -> f64 {
    let mut big_e = if e < 0.8 { m } else { std::f64::consts::PI };
    for _ in 0..20 {
        let delta = (big_e - e * big_e.sin() - m) / (1.0 - e * big_e.cos());
        big_e -= delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    big_e
}

/// Heliocentric position of a target in the J2000 ecliptic frame, au.
///
/// `t` = Julian centuries since J2000.0. Standard orbital-plane solution
/// rotated by argument of perihelion, inclination, and node.
pub fn heliocentric_j2000(target: KeplerTarget, t: f64) -> [f64; 3] {
    let r = row(target);
    let a = r[0] + r[6] * t;
    let e = r[1] + r[7] * t;
    let i = (r[2] + r[8] * t).to_radians();
    let l = r[3] + r[9] * t;
    let peri = r[4] + r[10] * t;
    let node_deg = r[5] + r[11] * t;

    let omega = (peri - node_deg).to_radians(); // argument of perihelion
    let node = node_deg.to_radians();
    let m = (l - peri).to_radians().rem_euclid(TAU);

    let big_e = solve_kepler(m, e);
    let xp = a * (big_e.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * big_e.sin();

    let (so, co) = (omega.sin(), omega.cos());
    let (sn, cn) = (node.sin(), node.cos());
    let (si, ci) = (i.sin(), i.cos());

    [
        (co * cn - so * sn * ci) * xp + (-so * cn - co * sn * ci) * yp,
        (co * sn + so * cn * ci) * xp + (-so * sn + co * cn * ci) * yp,
        so * si * xp + co * si * yp,
    ]
}

/// Spherical form of an ecliptic vector: (longitude deg, latitude deg,
/// distance au).
pub fn vector_to_spherical(v: &[f64; 3]) -> (f64, f64, f64) {
    let dist = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    let lon = v[1].atan2(v[0]).to_degrees().rem_euclid(360.0);
    let lat = (v[2] / dist).asin().to_degrees();
    (lon, lat, dist)
}

/// Ecliptic vector from spherical components.
pub fn spherical_to_vector(lon_deg: f64, lat_deg: f64, dist: f64) -> [f64; 3] {
    let lon = lon_deg.to_radians();
    let lat = lat_deg.to_radians();
    [
        dist * lat.cos() * lon.cos(),
        dist * lat.cos() * lon.sin(),
        dist * lat.sin(),
    ]
}
