//! Geocentric lunar position, truncated ELP series.
//!
//! Periodic terms from Meeus, *Astronomical Algorithms* (2nd ed.),
//! Chapter 47, Tables 47.A and 47.B, truncated to the terms above a few
//! thousandths of a degree. Worst-case truncation error is near 0.01 deg
//! in longitude, well inside this backend's stated precision.
//!
//! The returned longitude is referred to the mean equinox of date, so no
//! precession step is applied afterwards.

/// One periodic term: multiples of (D, M, M', F) and the sine coefficient.
/// Longitude coefficients in 1e-6 degrees, distance in 1e-3 km.
type LunarTerm = (i8, i8, i8, i8, f64, f64);

// Table 47.A, leading terms of the longitude (Σl) and distance (Σr) series.
#[rustfmt::skip]
const LON_DIST_TERMS: [LunarTerm; 27] = [
    (0,  0,  1,  0,  6_288_774.0, -20_905_355.0),
    (2,  0, -1,  0,  1_274_027.0,  -3_699_111.0),
    (2,  0,  0,  0,    658_314.0,  -2_955_968.0),
    (0,  0,  2,  0,    213_618.0,    -569_925.0),
    (0,  1,  0,  0,   -185_116.0,      48_888.0),
    (0,  0,  0,  2,   -114_332.0,      -3_149.0),
    (2,  0, -2,  0,     58_793.0,     246_158.0),
    (2, -1, -1,  0,     57_066.0,    -152_138.0),
    (2,  0,  1,  0,     53_322.0,    -170_733.0),
    (2, -1,  0,  0,     45_758.0,    -204_586.0),
    (0,  1, -1,  0,    -40_923.0,    -129_620.0),
    (1,  0,  0,  0,    -34_720.0,     108_743.0),
    (0,  1,  1,  0,    -30_383.0,     104_755.0),
    (2,  0,  0, -2,     15_327.0,      10_321.0),
    (0,  0,  1,  2,    -12_528.0,           0.0),
    (0,  0,  1, -2,     10_980.0,      79_661.0),
    (4,  0, -1,  0,     10_675.0,     -34_782.0),
    (0,  0,  3,  0,     10_034.0,     -23_210.0),
    (4,  0, -2,  0,      8_548.0,     -21_636.0),
    (2,  1, -1,  0,     -7_888.0,      24_208.0),
    (2,  1,  0,  0,     -6_766.0,      30_824.0),
    (1,  0, -1,  0,     -7_036.0,      -8_379.0),
    (1,  1,  0,  0,     -5_163.0,     -16_675.0),
    (2, -1,  1,  0,      4_987.0,     -12_831.0),
    (2,  0,  2,  0,      4_036.0,     -10_445.0),
    (4,  0,  0,  0,      3_994.0,     -11_650.0),
    (2,  0, -3,  0,      3_861.0,      14_403.0),
];

// Table 47.B, leading terms of the latitude (Σb) series, 1e-6 degrees.
#[rustfmt::skip]
const LAT_TERMS: [(i8, i8, i8, i8, f64); 12] = [
    (0,  0,  0,  1,  5_128_122.0),
    (0,  0,  1,  1,    280_602.0),
    (0,  0,  1, -1,    277_693.0),
    (2,  0,  0, -1,    173_237.0),
    (2,  0, -1,  1,     55_413.0),
    (2,  0, -1, -1,     46_271.0),
    (2,  0,  0,  1,     32_573.0),
    (0,  0,  2,  1,     17_198.0),
    (2,  0,  1, -1,      9_266.0),
    (0,  0,  2, -1,      8_822.0),
    (2, -1,  0, -1,      8_216.0),
    (2,  0, -2, -1,      4_324.0),
];

const MOON_MEAN_DISTANCE_KM: f64 = 385_000.56;
const AU_KM: f64 = 149_597_870.7;

/// Geocentric Moon at `t` Julian centuries since J2000.0.
///
/// Returns (ecliptic longitude of date in degrees, unnormalized;
/// latitude in degrees; distance in au).
pub fn geocentric_moon(t: f64) -> (f64, f64, f64) {
    // Mean longitude and Delaunay-style arguments, Meeus 47.1-47.5.
    let lp = 218.316_447_7
        + t * (481_267.881_234_21
            + t * (-0.001_578_6 + t * (1.0 / 538_841.0 + t * (-1.0 / 65_194_000.0))));
    let d = 297.850_192_1
        + t * (445_267.111_403_4
            + t * (-0.001_881_9 + t * (1.0 / 545_868.0 + t * (-1.0 / 113_065_000.0))));
    let m = 357.529_109_2 + t * (35_999.050_290_9 + t * (-0.000_153_6 + t / 24_490_000.0));
    let mp = 134.963_396_4
        + t * (477_198.867_505_5
            + t * (0.008_741_4 + t * (1.0 / 69_699.0 + t * (-1.0 / 14_712_000.0))));
    let f = 93.272_095_0
        + t * (483_202.017_523_3
            + t * (-0.003_653_9 + t * (-1.0 / 3_526_000.0 + t / 863_310_000.0)));

    // Planetary-perturbation arguments, Meeus 47.6.
    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    let a3 = (313.45 + 481_266.484 * t).to_radians();

    // Eccentricity decay factor, applied once per |M| multiple.
    let e = 1.0 - t * (0.002_516 + t * 0.000_007_4);

    let (dr, mr, mpr, fr) = (d.to_radians(), m.to_radians(), mp.to_radians(), f.to_radians());
    let e_pow = |n: i8| -> f64 {
        match n.unsigned_abs() {
            0 => 1.0,
            1 => e,
            _ => e * e,
        }
    };

    let mut sum_l = 0.0_f64;
    let mut sum_r = 0.0_f64;
    for &(nd, nm, nmp, nf, cl, cr) in &LON_DIST_TERMS {
        let arg =
            f64::from(nd) * dr + f64::from(nm) * mr + f64::from(nmp) * mpr + f64::from(nf) * fr;
        let scale = e_pow(nm);
        sum_l += cl * scale * arg.sin();
        sum_r += cr * scale * arg.cos();
    }
    sum_l += 3958.0 * a1.sin() + 1962.0 * (lp.to_radians() - fr).sin() + 318.0 * a2.sin();

    let mut sum_b = 0.0_f64;
    for &(nd, nm, nmp, nf, cb) in &LAT_TERMS {
        let arg =
            f64::from(nd) * dr + f64::from(nm) * mr + f64::from(nmp) * mpr + f64::from(nf) * fr;
        sum_b += cb * e_pow(nm) * arg.sin();
    }
    sum_b += -2235.0 * lp.to_radians().sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - fr).sin()
        + 175.0 * (a1 + fr).sin()
        + 127.0 * (lp - mp).to_radians().sin()
        - 115.0 * (lp + mp).to_radians().sin();

    let lon = lp + sum_l / 1e6;
    let lat = sum_b / 1e6;
    let dist_km = MOON_MEAN_DISTANCE_KM + sum_r / 1e3;
    (lon, lat, dist_km / AU_KM)
}
