//! Kubische Bézier-Kurve: Auswertung, Ableitungen, Krümmung und Sampling.
//!
//! B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
//!
//! Die Kurve ist ein reiner Wert. Alle Abfragen begrenzen `t` auf `[0, 1]`,
//! es wird nie extrapoliert.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Unterhalb dieser Schwelle für |B'(t)|³ wird die Krümmung als 0 gemeldet.
const CURVATURE_DENOM_EPSILON: f32 = 1e-4;

/// Kubische Bézier-Kurve über vier Kontrollpunkte.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    /// Startpunkt
    pub p0: Vec2,
    /// Erster innerer Steuerpunkt
    pub p1: Vec2,
    /// Zweiter innerer Steuerpunkt
    pub p2: Vec2,
    /// Endpunkt
    pub p3: Vec2,
}

/// Teil-Aktualisierung für [`CubicBezier::with_updates`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CurveUpdate {
    pub p0: Option<Vec2>,
    pub p1: Option<Vec2>,
    pub p2: Option<Vec2>,
    pub p3: Option<Vec2>,
}

/// Abgetasteter Kurvenpunkt mit Einheitstangente und Parameterwert.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampledPoint {
    pub point: Vec2,
    pub tangent: Vec2,
    pub t: f32,
}

/// Tangenten-Indikator für Overlays (kein Physik-Bezug).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TangentLine {
    pub start: Vec2,
    pub end: Vec2,
}

/// Achsenparallele Hülle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Vec2,
    pub max: Vec2,
}

impl BoundingBox {
    /// Breite und Höhe der Hülle.
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

impl CubicBezier {
    /// Erstellt eine Kurve aus vier Kontrollpunkten.
    pub fn new(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Kontrollpunkte in Reihenfolge P0..P3.
    pub fn control_points(&self) -> [Vec2; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }

    /// Position B(t).
    pub fn evaluate(&self, t: f32) -> Vec2 {
        let t = t.clamp(0.0, 1.0);
        let inv = 1.0 - t;
        let inv2 = inv * inv;
        let t2 = t * t;
        inv2 * inv * self.p0 + 3.0 * inv2 * t * self.p1 + 3.0 * inv * t2 * self.p2 + t2 * t * self.p3
    }

    /// Erste Ableitung B'(t) über das Hodograph-Polynom.
    pub fn derivative(&self, t: f32) -> Vec2 {
        let t = t.clamp(0.0, 1.0);
        let inv = 1.0 - t;
        3.0 * inv * inv * (self.p1 - self.p0)
            + 6.0 * inv * t * (self.p2 - self.p1)
            + 3.0 * t * t * (self.p3 - self.p2)
    }

    /// Zweite Ableitung B''(t).
    pub fn second_derivative(&self, t: f32) -> Vec2 {
        let t = t.clamp(0.0, 1.0);
        6.0 * (1.0 - t) * (self.p2 - 2.0 * self.p1 + self.p0)
            + 6.0 * t * (self.p3 - 2.0 * self.p2 + self.p1)
    }

    /// Einheitstangente; Nullvektor bei verschwindender Ableitung.
    pub fn tangent(&self, t: f32) -> Vec2 {
        self.derivative(t).normalize_or_zero()
    }

    /// Normale = Tangente um +90° gedreht.
    pub fn normal(&self, t: f32) -> Vec2 {
        self.tangent(t).perp()
    }

    /// Krümmung κ = |B' × B''| / |B'|³.
    ///
    /// Nahe Spitzen (|B'|³ < 1e-4) wird 0 gemeldet.
    pub fn curvature(&self, t: f32) -> f32 {
        let d1 = self.derivative(t);
        let d2 = self.second_derivative(t);
        let denom = d1.length().powi(3);
        if denom < CURVATURE_DENOM_EPSILON {
            return 0.0;
        }
        d1.perp_dot(d2).abs() / denom
    }

    /// Iterator über `segments + 1` gleichmäßig im Parameter verteilte Punkte.
    ///
    /// Neu startbar: jeder Aufruf liefert einen frischen Iterator.
    /// `segments == 0` wird als 1 behandelt.
    pub fn samples(&self, segments: usize) -> impl Iterator<Item = Vec2> + use<> {
        let curve = *self;
        let segments = segments.max(1);
        (0..=segments).map(move |i| curve.evaluate(i as f32 / segments as f32))
    }

    /// Gesammelte Punktliste, siehe [`Self::samples`].
    pub fn sample(&self, segments: usize) -> Vec<Vec2> {
        self.samples(segments).collect()
    }

    /// Abtastung mit Einheitstangente und Parameterwert je Punkt.
    pub fn sample_with_tangents(&self, segments: usize) -> Vec<SampledPoint> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| {
                let t = i as f32 / segments as f32;
                SampledPoint {
                    point: self.evaluate(t),
                    tangent: self.tangent(t),
                    t,
                }
            })
            .collect()
    }

    /// `count + 1` Tangenten-Segmente der Länge `length`, verankert auf der Kurve.
    pub fn tangent_lines(&self, count: usize, length: f32) -> Vec<TangentLine> {
        self.sample_with_tangents(count)
            .into_iter()
            .map(|s| TangentLine {
                start: s.point,
                end: s.point + s.tangent * length,
            })
            .collect()
    }

    /// Approximierte Kurvenlänge über Polylinien-Segmente.
    pub fn arc_length(&self, segments: usize) -> f32 {
        let mut samples = self.samples(segments);
        let Some(mut prev) = samples.next() else {
            return 0.0;
        };
        let mut length = 0.0;
        for p in samples {
            length += prev.distance(p);
            prev = p;
        }
        length
    }

    /// Hülle der abgetasteten Polylinie.
    ///
    /// Keine exakte Hülle der kontinuierlichen Kurve: Extrema zwischen zwei
    /// Samples werden nicht erfasst.
    pub fn bounding_box(&self, segments: usize) -> BoundingBox {
        let init = BoundingBox {
            min: Vec2::splat(f32::INFINITY),
            max: Vec2::splat(f32::NEG_INFINITY),
        };
        self.samples(segments).fold(init, |bb, p| BoundingBox {
            min: bb.min.min(p),
            max: bb.max.max(p),
        })
    }

    /// Neue Kurve mit ersetzten Punkten; fehlende Felder bleiben erhalten.
    pub fn with_updates(&self, update: CurveUpdate) -> Self {
        Self {
            p0: update.p0.unwrap_or(self.p0),
            p1: update.p1.unwrap_or(self.p1),
            p2: update.p2.unwrap_or(self.p2),
            p3: update.p3.unwrap_or(self.p3),
        }
    }

    /// Nächster Kontrollpunkt zu `pos` innerhalb `radius` (Index 0..=3).
    pub fn nearest_control_point(&self, pos: Vec2, radius: f32) -> Option<usize> {
        self.control_points()
            .iter()
            .enumerate()
            .map(|(i, p)| (i, p.distance(pos)))
            .filter(|(_, d)| *d <= radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }
}
