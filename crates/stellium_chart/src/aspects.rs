//! Aspect detection: pairwise angular separations classified against an
//! ordered table of named reference angles.

use serde::Serialize;
use stellium_core::Body;

/// One named aspect: a reference angle in [0, 180] and a matching
/// tolerance (orb). The table a chart uses is ordered, and order carries
/// meaning: the first matching definition wins for a pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AspectDefinition {
    pub name: &'static str,
    pub glyph: &'static str,
    pub angle_deg: f64,
    pub orb_deg: f64,
}

/// The five Ptolemaic aspects with the traditional 6 deg orb, in the
/// canonical match order.
pub const DEFAULT_ASPECTS: [AspectDefinition; 5] = [
    AspectDefinition {
        name: "Conjunction",
        glyph: "\u{260c}",
        angle_deg: 0.0,
        orb_deg: 6.0,
    },
    AspectDefinition {
        name: "Sextile",
        glyph: "\u{26b9}",
        angle_deg: 60.0,
        orb_deg: 6.0,
    },
    AspectDefinition {
        name: "Square",
        glyph: "\u{25a1}",
        angle_deg: 90.0,
        orb_deg: 6.0,
    },
    AspectDefinition {
        name: "Trine",
        glyph: "\u{25b3}",
        angle_deg: 120.0,
        orb_deg: 6.0,
    },
    AspectDefinition {
        name: "Opposition",
        glyph: "\u{260d}",
        angle_deg: 180.0,
        orb_deg: 6.0,
    },
];

/// The default table with per-entry orb overrides applied. `None` keeps
/// the default orb for that entry; entries are never reordered.
pub fn aspects_with_orbs(orbs: &[Option<f64>]) -> Vec<AspectDefinition> {
    DEFAULT_ASPECTS
        .iter()
        .enumerate()
        .map(|(i, def)| AspectDefinition {
            orb_deg: orbs.get(i).copied().flatten().unwrap_or(def.orb_deg),
            ..*def
        })
        .collect()
}

/// A matched pair. `deviation_deg` is signed: separation minus the
/// definition's reference angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AspectHit {
    pub body_a: Body,
    pub body_b: Body,
    pub definition: AspectDefinition,
    pub separation_deg: f64,
    pub deviation_deg: f64,
}

/// Angular separation of two longitudes, always in [0, 180].
pub fn separation_deg(a_deg: f64, b_deg: f64) -> f64 {
    let d = (a_deg - b_deg).abs().rem_euclid(360.0);
    d.min(360.0 - d)
}

/// Classify every unordered pair against the table. First match wins per
/// pair; unmatched pairs are simply absent from the result.
///
/// `bodies` and `longitudes_deg` are parallel slices.
pub fn detect(
    bodies: &[Body],
    longitudes_deg: &[f64],
    table: &[AspectDefinition],
) -> Vec<AspectHit> {
    debug_assert_eq!(bodies.len(), longitudes_deg.len());
    let n = bodies.len().min(longitudes_deg.len());
    let mut hits = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            let sep = separation_deg(longitudes_deg[i], longitudes_deg[j]);
            if let Some(def) = table
                .iter()
                .find(|d| (sep - d.angle_deg).abs() <= d.orb_deg)
            {
                hits.push(AspectHit {
                    body_a: bodies[i],
                    body_b: bodies[j],
                    definition: *def,
                    separation_deg: sep,
                    deviation_deg: sep - def.angle_deg,
                });
            }
        }
    }
    hits
}
