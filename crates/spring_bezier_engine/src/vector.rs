//! 2D-Vektoralgebra auf Basis von `glam::Vec2`.
//!
//! `Vec2` ist `Copy`: jede Operation liefert einen neuen Wert, Operanden bleiben
//! unverändert. Wo glam die gewünschte Semantik bereits liefert, wird es direkt
//! verwendet; abweichende Randfälle deckt [`VectorExt`] ab.
//!
//! | Operation | Umsetzung |
//! |---|---|
//! | add / subtract / negate / multiply | `+`, `-`, unäres `-`, `* f32` |
//! | divide | [`VectorExt::safe_div`] (Division durch 0 → Nullvektor) |
//! | magnitude / magnitudeSquared | `length()` / `length_squared()` |
//! | normalize | `normalize_or_zero()` |
//! | dot / cross | `dot()` / `perp_dot()` |
//! | distanceTo | `distance()` |
//! | rotate | [`VectorExt::rotated`] |
//! | perpendicular | `perp()` (+90°) |
//! | reflect | [`VectorExt::reflected`] |
//! | projectOnto | [`VectorExt::projected_onto`] |
//! | clampMagnitude | [`VectorExt::clamp_magnitude`] |

use glam::Vec2;

/// Wertetyp für Positionen, Geschwindigkeiten und Offsets.
pub type Vector2D = Vec2;

/// Standard-Toleranz für [`VectorExt::approx_eq_default`].
pub const DEFAULT_EPSILON: f32 = 1e-4;

/// Ergänzungen zu `Vec2` mit totalen Randfall-Regeln.
pub trait VectorExt: Sized {
    /// Division durch einen Skalar; `0.0` (oder nicht-endlich) liefert den Nullvektor.
    fn safe_div(self, scalar: f32) -> Self;

    /// Rotation um `radians` gegen den Uhrzeigersinn.
    fn rotated(self, radians: f32) -> Self;

    /// Spiegelung an einer Geraden mit Normale `normal` (wird intern normalisiert).
    fn reflected(self, normal: Self) -> Self;

    /// Projektion auf `axis`; eine Null-Achse liefert den Nullvektor.
    fn projected_onto(self, axis: Self) -> Self;

    /// Begrenzt die Länge auf `max`, Richtung bleibt erhalten.
    fn clamp_magnitude(self, max: f32) -> Self;

    /// Komponentenweiser Vergleich mit Toleranz.
    fn approx_eq(self, other: Self, epsilon: f32) -> bool;

    fn approx_eq_default(self, other: Self) -> bool {
        self.approx_eq(other, DEFAULT_EPSILON)
    }
}

impl VectorExt for Vec2 {
    fn safe_div(self, scalar: f32) -> Self {
        if scalar == 0.0 || !scalar.is_finite() {
            return Vec2::ZERO;
        }
        self / scalar
    }

    fn rotated(self, radians: f32) -> Self {
        Vec2::from_angle(radians).rotate(self)
    }

    fn reflected(self, normal: Self) -> Self {
        let n = normal.normalize_or_zero();
        self - 2.0 * self.dot(n) * n
    }

    fn projected_onto(self, axis: Self) -> Self {
        let len_sq = axis.length_squared();
        if len_sq < f32::EPSILON {
            return Vec2::ZERO;
        }
        axis * (self.dot(axis) / len_sq)
    }

    fn clamp_magnitude(self, max: f32) -> Self {
        // Vorskalieren, damit length() bei großen Komponenten nicht überläuft
        let scale = self.abs().max_element();
        if !self.is_finite() || scale == 0.0 {
            return self;
        }
        let scaled = self / scale;
        let max = max.max(0.0);
        if scaled.length() > max / scale {
            scaled.normalize_or_zero() * max
        } else {
            self
        }
    }

    fn approx_eq(self, other: Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() < epsilon && (self.y - other.y).abs() < epsilon
    }
}

/// Vektor aus Polarkoordinaten.
pub fn from_angle(angle: f32, magnitude: f32) -> Vec2 {
    Vec2::from_angle(angle) * magnitude
}

/// Lineare Interpolation mit `t` auf `[0, 1]` begrenzt.
pub fn lerp(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a.lerp(b, t.clamp(0.0, 1.0))
}
