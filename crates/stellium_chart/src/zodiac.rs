//! Zodiac sign names and degree-minute-second formatting.

use stellium_core::normalize_deg;

/// The twelve signs, Aries first.
pub const SIGN_NAMES: [&str; 12] = [
    "Aries",
    "Taurus",
    "Gemini",
    "Cancer",
    "Leo",
    "Virgo",
    "Libra",
    "Scorpio",
    "Sagittarius",
    "Capricorn",
    "Aquarius",
    "Pisces",
];

/// Sign glyphs, parallel to [`SIGN_NAMES`].
pub const SIGN_GLYPHS: [&str; 12] = [
    "\u{2648}", "\u{2649}", "\u{264a}", "\u{264b}", "\u{264c}", "\u{264d}",
    "\u{264e}", "\u{264f}", "\u{2650}", "\u{2651}", "\u{2652}", "\u{2653}",
];

/// Sign index (0 = Aries) of a longitude.
pub fn sign_index(lon_deg: f64) -> usize {
    (normalize_deg(lon_deg) / 30.0) as usize % 12
}

/// Sign name of a longitude.
pub fn sign_name(lon_deg: f64) -> &'static str {
    SIGN_NAMES[sign_index(lon_deg)]
}

/// Format a longitude as degrees-minutes-seconds within its sign, e.g.
/// `12°34'56" Cancer`. Seconds are rounded; carries propagate through
/// minutes, degrees, and across a sign boundary.
pub fn format_zodiac(lon_deg: f64) -> String {
    let lon = normalize_deg(lon_deg);
    let mut sign = sign_index(lon);
    let in_sign = lon - (sign as f64) * 30.0;

    // Rounding in whole seconds makes the minute and degree carries fall
    // out of the integer division; only the sign carry needs a branch.
    let total_seconds = (in_sign * 3600.0).round() as u64;
    let mut deg = total_seconds / 3600;
    let min = (total_seconds / 60) % 60;
    let sec = total_seconds % 60;
    if deg == 30 {
        deg = 0;
        sign = (sign + 1) % 12;
    }

    format!("{deg}\u{b0}{min:02}'{sec:02}\" {}", SIGN_NAMES[sign])
}
