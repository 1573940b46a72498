//! Polar projection and structured wheel layout.
//!
//! The angular convention is fixed for every layer: longitude 0 maps to
//! the leftmost point of the circle and longitude increases clockwise on
//! screen (y grows downward). Sector boundaries, house spokes, body
//! markers, and aspect chords all project through the same function so
//! the layers stay aligned.

use serde::Serialize;
use stellium_chart::{ChartSnapshot, format_zodiac};
use stellium_core::{Body, normalize_deg};

/// A point in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Wheel center and outer radius, with the ring insets the original
/// renderer used. Callers may override any field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WheelGeometry {
    pub center_x: f64,
    pub center_y: f64,
    /// Outer ring radius: zodiac sector boundaries.
    pub radius: f64,
    /// Inset from the outer ring to the sign-glyph anchors.
    pub sign_ring_inset: f64,
    /// Inset from the outer ring to the body markers and chord endpoints.
    pub body_ring_inset: f64,
}

impl Default for WheelGeometry {
    fn default() -> Self {
        Self {
            center_x: 300.0,
            center_y: 300.0,
            radius: 280.0,
            sign_ring_inset: 26.0,
            body_ring_inset: 60.0,
        }
    }
}

impl WheelGeometry {
    pub fn sign_ring_radius(&self) -> f64 {
        self.radius - self.sign_ring_inset
    }

    pub fn body_ring_radius(&self) -> f64 {
        self.radius - self.body_ring_inset
    }

    /// Project an ecliptic longitude onto a circle of the given radius
    /// around this wheel's center.
    pub fn project(&self, radius: f64, lon_deg: f64) -> Point {
        let ang = (180.0 - lon_deg).to_radians();
        Point {
            x: self.center_x + radius * ang.cos(),
            y: self.center_y - radius * ang.sin(),
        }
    }

    /// Recover the longitude of a projected point. Inverse of
    /// [`project`](Self::project) for any point off the center.
    pub fn longitude_of(&self, p: Point) -> f64 {
        let ang = f64::atan2(self.center_y - p.y, p.x - self.center_x);
        normalize_deg(180.0 - ang.to_degrees())
    }
}

/// A positioned chart point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyMarker {
    pub body: Body,
    pub lon_deg: f64,
    pub at: Point,
}

/// A line between two projected longitudes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// An aspect line between two body markers on the body ring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AspectChord {
    pub body_a: Body,
    pub body_b: Body,
    pub aspect: &'static str,
    pub line: Segment,
}

/// A sign-glyph anchor at the middle of a zodiac sector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignAnchor {
    pub glyph: &'static str,
    pub at: Point,
}

/// Everything a renderer draws, already projected. Plain data; no
/// astronomical quantity needs re-deriving downstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WheelLayout {
    pub geometry: WheelGeometry,
    /// Twelve sector-boundary spokes from the body ring to the outer ring,
    /// at longitudes 0, 30, .., 330.
    pub sector_boundaries: Vec<Segment>,
    /// Sign glyphs anchored mid-sector on the sign ring.
    pub sign_anchors: Vec<SignAnchor>,
    /// House-cusp spokes from the center to the body ring, when the chart
    /// carries houses.
    pub house_spokes: Vec<Segment>,
    /// One marker per chart point on the body ring, with a formatted
    /// label.
    pub bodies: Vec<BodyMarker>,
    pub body_labels: Vec<String>,
    pub aspect_chords: Vec<AspectChord>,
}

/// Lay out a chart on a wheel. Longitudes come from the snapshot's zodiac
/// mode, so a sidereal chart rotates every layer together.
pub fn layout(snapshot: &ChartSnapshot, geometry: WheelGeometry) -> WheelLayout {
    let longitudes = snapshot.display_longitudes();

    let sector_boundaries = (0..12)
        .map(|i| {
            let lon = f64::from(i) * 30.0;
            Segment {
                from: geometry.project(geometry.body_ring_radius(), lon),
                to: geometry.project(geometry.radius, lon),
            }
        })
        .collect();

    let sign_anchors = stellium_chart::SIGN_GLYPHS
        .iter()
        .enumerate()
        .map(|(i, &glyph)| SignAnchor {
            glyph,
            at: geometry.project(geometry.sign_ring_radius(), 15.0 + 30.0 * i as f64),
        })
        .collect();

    let house_spokes = match &snapshot.houses {
        Some(h) => h
            .cusps_deg
            .iter()
            .map(|&cusp| Segment {
                from: Point {
                    x: geometry.center_x,
                    y: geometry.center_y,
                },
                to: geometry.project(geometry.body_ring_radius(), cusp),
            })
            .collect(),
        None => Vec::new(),
    };

    let bodies: Vec<BodyMarker> = snapshot
        .positions
        .iter()
        .zip(&longitudes)
        .map(|(p, &lon)| BodyMarker {
            body: p.body,
            lon_deg: lon,
            at: geometry.project(geometry.body_ring_radius(), lon),
        })
        .collect();

    let body_labels = snapshot
        .positions
        .iter()
        .zip(&longitudes)
        .map(|(p, &lon)| format!("{} {}", p.body.glyph(), format_zodiac(lon)))
        .collect();

    let marker_of = |body: Body| -> Option<Point> {
        bodies.iter().find(|m| m.body == body).map(|m| m.at)
    };
    let aspect_chords = snapshot
        .aspects
        .iter()
        .filter_map(|hit| {
            Some(AspectChord {
                body_a: hit.body_a,
                body_b: hit.body_b,
                aspect: hit.definition.name,
                line: Segment {
                    from: marker_of(hit.body_a)?,
                    to: marker_of(hit.body_b)?,
                },
            })
        })
        .collect();

    WheelLayout {
        geometry,
        sector_boundaries,
        sign_anchors,
        house_spokes,
        bodies,
        body_labels,
        aspect_chords,
    }
}
