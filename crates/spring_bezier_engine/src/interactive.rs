//! Orchestrator für eine interaktive Kurve: feste Endpunkte, federgetriebene
//! innere Steuerpunkte und ein Render-Snapshot pro Frame.
//!
//! Der Aufrufer treibt die Zeit: `update(Some(dt))` für feste Schritte,
//! `update(None)` für Wanduhr-Deltas. Beide Federn integrieren im selben Tick
//! mit identischem `dt`, bevor ein Snapshot gelesen wird.

use crate::bezier::{CubicBezier, TangentLine};
use crate::spring::{self, SpringParams};
use crate::spring_point::SpringPoint;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Standard-Viewport-Breite.
pub const DEFAULT_WIDTH: f32 = 800.0;
/// Standard-Viewport-Höhe.
pub const DEFAULT_HEIGHT: f32 = 600.0;
/// Anzahl Kurvensegmente für die Render-Polylinie.
pub const DEFAULT_CURVE_RESOLUTION: usize = 100;
/// Anzahl Tangenten-Indikatoren (ergibt `count + 1` Linien).
pub const DEFAULT_TANGENT_COUNT: usize = 10;
/// Länge der Tangenten-Indikatoren.
pub const DEFAULT_TANGENT_LENGTH: f32 = 40.0;
/// Einfluss externer Offsets auf P1.
pub const DEFAULT_P1_INFLUENCE: f32 = 1.0;
/// Einfluss externer Offsets auf P2.
pub const DEFAULT_P2_INFLUENCE: f32 = 0.8;
/// Gegenläufige Kopplung von P2 an den Eingabe-Offset (abgestimmter Wert).
pub const DEFAULT_P2_OFFSET_SCALE: f32 = -0.6;

/// Konstruktionsparameter für [`InteractiveBezier`].
#[derive(Debug, Clone, PartialEq)]
pub struct InteractiveBezierConfig {
    pub width: f32,
    pub height: f32,
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    pub curve_resolution: usize,
    pub tangent_count: usize,
    pub tangent_length: f32,
    /// Explizite Punkte; `None` = relatives Standard-Layout zum Viewport
    pub p0: Option<Vec2>,
    pub p1: Option<Vec2>,
    pub p2: Option<Vec2>,
    pub p3: Option<Vec2>,
    pub p1_influence: f32,
    pub p2_influence: f32,
    /// Faktor, mit dem P2 den Eingabe-Offset erhält
    pub p2_offset_scale: f32,
}

impl Default for InteractiveBezierConfig {
    fn default() -> Self {
        let params = SpringParams::default();
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            stiffness: params.stiffness,
            damping: params.damping,
            mass: params.mass,
            curve_resolution: DEFAULT_CURVE_RESOLUTION,
            tangent_count: DEFAULT_TANGENT_COUNT,
            tangent_length: DEFAULT_TANGENT_LENGTH,
            p0: None,
            p1: None,
            p2: None,
            p3: None,
            p1_influence: DEFAULT_P1_INFLUENCE,
            p2_influence: DEFAULT_P2_INFLUENCE,
            p2_offset_scale: DEFAULT_P2_OFFSET_SCALE,
        }
    }
}

impl InteractiveBezierConfig {
    /// Config mit Standardwerten für eine bestimmte Viewport-Größe.
    pub fn with_size(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}

/// Teil-Update der Federparameter, wirkt gleichmäßig auf P1 und P2.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SpringParamsUpdate {
    pub stiffness: Option<f32>,
    pub damping: Option<f32>,
    pub mass: Option<f32>,
    pub influence: Option<f32>,
}

/// Aktuelle Positionen aller vier Kontrollpunkte.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoints {
    pub p0: Vec2,
    pub p1: Vec2,
    pub p2: Vec2,
    pub p3: Vec2,
}

/// Telemetrie einer Feder für die Anzeige.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringTelemetry {
    /// Betrag der Geschwindigkeit
    pub velocity: f32,
    pub kinetic_energy: f32,
    pub potential_energy: f32,
    pub total_energy: f32,
    pub settled: bool,
}

impl SpringTelemetry {
    fn from_point(point: &SpringPoint) -> Self {
        let spring = point.spring();
        Self {
            velocity: spring.velocity().length(),
            kinetic_energy: spring.kinetic_energy(),
            potential_energy: spring.potential_energy(),
            total_energy: spring.total_energy(),
            settled: spring.is_settled_default(),
        }
    }
}

/// Read-only Daten für einen Render-Frame.
///
/// Eigenständige Kopie: kein Verweis in den laufenden Physik-Zustand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderData {
    pub curve: CubicBezier,
    /// Polylinie für den Kurvenstrich
    pub points: Vec<Vec2>,
    /// Tangenten-Overlay
    pub tangents: Vec<TangentLine>,
    pub control_points: ControlPoints,
    /// Telemetrie für P1 und P2
    pub springs: [SpringTelemetry; 2],
}

/// Kubische Kurve mit festen Endpunkten und zwei federgetriebenen Steuerpunkten.
#[derive(Debug, Clone)]
pub struct InteractiveBezier {
    /// Startpunkt (direkt setzbar)
    pub p0: Vec2,
    /// Endpunkt (direkt setzbar)
    pub p3: Vec2,
    /// Federgetriebener Steuerpunkt 1
    pub spring_p1: SpringPoint,
    /// Federgetriebener Steuerpunkt 2
    pub spring_p2: SpringPoint,
    width: f32,
    height: f32,
    curve_resolution: usize,
    tangent_count: usize,
    tangent_length: f32,
    p2_offset_scale: f32,
    last_update: Option<Instant>,
}

/// Start-Layout der vier Kontrollpunkte relativ zur Viewport-Größe.
fn default_layout(size: Vec2) -> [Vec2; 4] {
    [
        size * Vec2::new(0.1, 0.5),
        size * Vec2::new(0.33, 0.25),
        size * Vec2::new(0.66, 0.75),
        size * Vec2::new(0.9, 0.5),
    ]
}

impl InteractiveBezier {
    pub fn new(config: InteractiveBezierConfig) -> Self {
        let InteractiveBezierConfig {
            width,
            height,
            stiffness,
            damping,
            mass,
            curve_resolution,
            tangent_count,
            tangent_length,
            p0,
            p1,
            p2,
            p3,
            p1_influence,
            p2_influence,
            p2_offset_scale,
        } = config;

        let params = SpringParams {
            stiffness,
            damping,
            mass,
        };
        let [d0, d1, d2, d3] = default_layout(Vec2::new(width, height));
        let p0 = p0.unwrap_or(d0);
        let p1 = p1.unwrap_or(d1);
        let p2 = p2.unwrap_or(d2);
        let p3 = p3.unwrap_or(d3);

        log::debug!("InteractiveBezier erstellt: {}x{}", width, height);

        Self {
            p0,
            p3,
            spring_p1: SpringPoint::with_params(p1, params, p1_influence),
            spring_p2: SpringPoint::with_params(p2, params, p2_influence),
            width,
            height,
            curve_resolution,
            tangent_count,
            tangent_length,
            p2_offset_scale,
            last_update: None,
        }
    }

    /// Verteilt einen Eingabe-Offset: P1 direkt, P2 gegenläufig skaliert.
    pub fn set_input_offset(&mut self, offset: Vec2) {
        self.spring_p1.set_input_offset(offset);
        self.spring_p2.set_input_offset(offset * self.p2_offset_scale);
    }

    /// Rückt beide Federn um denselben Zeitschritt vor.
    ///
    /// Ohne `dt` wird die Wanduhr-Differenz seit dem letzten Aufruf verwendet;
    /// der erste solche Aufruf setzt nur die Basis. Gibt das angewandte `dt` zurück.
    pub fn update(&mut self, dt: Option<f32>) -> f32 {
        self.update_at(Instant::now(), dt)
    }

    /// Wie [`Self::update`], mit explizitem Zeitstempel.
    pub fn update_at(&mut self, now: Instant, dt: Option<f32>) -> f32 {
        let previous = self.last_update.replace(now);
        let requested = match (dt, previous) {
            (Some(dt), _) => dt,
            (None, Some(prev)) => now.saturating_duration_since(prev).as_secs_f32(),
            (None, None) => return 0.0,
        };

        let dt = spring::clamp_dt(requested);
        if dt < requested {
            log::trace!("Zeitschritt {:.4}s auf {:.4}s begrenzt", requested, dt);
        }

        self.spring_p1.update(dt);
        self.spring_p2.update(dt);
        dt
    }

    /// Beide Steuerpunkte sofort zurück auf ihre Ruheposition.
    pub fn reset(&mut self) {
        self.spring_p1.reset();
        self.spring_p2.reset();
        log::debug!("Steuerpunkte zurückgesetzt");
    }

    /// Überträgt gesetzte Felder gleichmäßig auf beide Federn.
    pub fn set_spring_params(&mut self, update: SpringParamsUpdate) {
        for point in [&mut self.spring_p1, &mut self.spring_p2] {
            let spring = point.spring_mut();
            if let Some(stiffness) = update.stiffness {
                spring.set_stiffness(stiffness);
            }
            if let Some(damping) = update.damping {
                spring.set_damping(damping);
            }
            if let Some(mass) = update.mass {
                spring.set_mass(mass);
            }
            if let Some(influence) = update.influence {
                point.set_influence(influence);
            }
        }
    }

    /// Skaliert Endpunkte, Ruhepositionen und Federzustand proportional.
    ///
    /// Laufende Animationen werden nicht zurückgesetzt, sondern mitskaliert.
    /// Nicht-positive oder nicht-endliche Größen werden ignoriert.
    pub fn resize(&mut self, width: f32, height: f32) {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            log::debug!("Resize auf {}x{} ignoriert", width, height);
            return;
        }
        if !valid(self.width) || !valid(self.height) {
            // Aus einer entarteten Größe lässt sich nicht skalieren
            self.rebuild_layout(width, height);
            return;
        }

        let scale = Vec2::new(width / self.width, height / self.height);
        self.p0 *= scale;
        self.p3 *= scale;
        for point in [&mut self.spring_p1, &mut self.spring_p2] {
            point.set_base_position(point.base_position() * scale);
            point.spring_mut().rescale(scale);
        }

        log::debug!(
            "Resize {}x{} → {}x{}",
            self.width,
            self.height,
            width,
            height
        );
        self.width = width;
        self.height = height;
    }

    /// Übernimmt die Größe und setzt alle Punkte auf das Standard-Layout.
    fn rebuild_layout(&mut self, width: f32, height: f32) {
        let [p0, p1, p2, p3] = default_layout(Vec2::new(width, height));
        self.p0 = p0;
        self.p3 = p3;
        self.spring_p1.set_base_position(p1);
        self.spring_p1.reset();
        self.spring_p2.set_base_position(p2);
        self.spring_p2.reset();
        log::debug!("Layout für {}x{} neu aufgebaut", width, height);
        self.width = width;
        self.height = height;
    }

    /// Transienter Kurven-Snapshot aus den aktuellen Punkten.
    pub fn curve(&self) -> CubicBezier {
        CubicBezier::new(
            self.p0,
            self.spring_p1.position(),
            self.spring_p2.position(),
            self.p3,
        )
    }

    pub fn control_points(&self) -> ControlPoints {
        ControlPoints {
            p0: self.p0,
            p1: self.spring_p1.position(),
            p2: self.spring_p2.position(),
            p3: self.p3,
        }
    }

    /// Kompletter Render-Snapshot für den aktuellen Frame.
    pub fn render_data(&self) -> RenderData {
        let curve = self.curve();
        RenderData {
            curve,
            points: curve.sample(self.curve_resolution),
            tangents: curve.tangent_lines(self.tangent_count, self.tangent_length),
            control_points: self.control_points(),
            springs: [
                SpringTelemetry::from_point(&self.spring_p1),
                SpringTelemetry::from_point(&self.spring_p2),
            ],
        }
    }

    /// True wenn beide Federn in Ruhe sind.
    pub fn is_settled(&self) -> bool {
        self.spring_p1.spring().is_settled_default() && self.spring_p2.spring().is_settled_default()
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn curve_resolution(&self) -> usize {
        self.curve_resolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::VectorExt;
    use approx::assert_relative_eq;
    use std::time::Duration;

    const DT: f32 = 1.0 / 60.0;

    fn bezier() -> InteractiveBezier {
        InteractiveBezier::new(InteractiveBezierConfig::with_size(800.0, 600.0))
    }

    #[test]
    fn test_default_layout() {
        let b = bezier();
        let cp = b.control_points();
        assert!(cp.p0.approx_eq_default(Vec2::new(80.0, 300.0)));
        assert!(cp.p1.approx_eq_default(Vec2::new(264.0, 150.0)));
        assert!(cp.p2.approx_eq_default(Vec2::new(528.0, 450.0)));
        assert!(cp.p3.approx_eq_default(Vec2::new(720.0, 300.0)));
        assert!(b.is_settled());
    }

    #[test]
    fn test_explicit_points_override_layout() {
        let b = InteractiveBezier::new(InteractiveBezierConfig {
            p0: Some(Vec2::new(1.0, 2.0)),
            p2: Some(Vec2::new(5.0, 6.0)),
            ..Default::default()
        });
        assert_eq!(b.p0, Vec2::new(1.0, 2.0));
        assert_eq!(b.spring_p2.position(), Vec2::new(5.0, 6.0));
    }

    #[test]
    fn test_input_offset_is_asymmetric() {
        let mut b = bezier();
        let base1 = b.spring_p1.base_position();
        let base2 = b.spring_p2.base_position();

        b.set_input_offset(Vec2::new(100.0, 50.0));

        // P1: Einfluss 1.0
        assert!(b.spring_p1.target().approx_eq_default(base1 + Vec2::new(100.0, 50.0)));
        // P2: Offset · (−0.6) · Einfluss 0.8
        assert!(b.spring_p2.target().approx_eq_default(base2 + Vec2::new(-48.0, -24.0)));
    }

    #[test]
    fn test_update_advances_both_springs_with_same_dt() {
        let mut b = bezier();
        b.spring_p1.set_target(b.spring_p1.position() + Vec2::new(100.0, 0.0));
        b.spring_p2.set_target(b.spring_p2.position() + Vec2::new(100.0, 0.0));

        let applied = b.update(Some(DT));

        assert_relative_eq!(applied, DT);
        let d1 = b.spring_p1.position() - b.spring_p1.base_position();
        let d2 = b.spring_p2.position() - b.spring_p2.base_position();
        assert!(d1.approx_eq(d2, 1e-3));
        assert!(d1.x > 0.0);
    }

    #[test]
    fn test_update_clamps_large_dt() {
        let mut b = bezier();
        assert_relative_eq!(b.update(Some(2.0)), spring::MAX_DT);
    }

    #[test]
    fn test_wall_clock_first_call_sets_baseline_only() {
        let mut b = bezier();
        b.set_input_offset(Vec2::new(100.0, 0.0));
        let before = b.control_points();

        let t0 = Instant::now();
        assert_eq!(b.update_at(t0, None), 0.0);
        assert_eq!(b.control_points(), before);

        let applied = b.update_at(t0 + Duration::from_millis(16), None);
        assert_relative_eq!(applied, 0.016, epsilon = 1e-4);
        assert!(b.spring_p1.position().x > before.p1.x);
    }

    #[test]
    fn test_wall_clock_after_explicit_dt_uses_last_call() {
        let mut b = bezier();
        let t0 = Instant::now();
        b.update_at(t0, Some(DT));
        let applied = b.update_at(t0 + Duration::from_millis(10), None);
        assert_relative_eq!(applied, 0.010, epsilon = 1e-4);
    }

    #[test]
    fn test_reset_restores_base_positions() {
        let mut b = bezier();
        b.set_input_offset(Vec2::new(80.0, -40.0));
        for _ in 0..5 {
            b.update(Some(DT));
        }
        b.reset();
        assert_eq!(b.spring_p1.position(), b.spring_p1.base_position());
        assert_eq!(b.spring_p2.position(), b.spring_p2.base_position());
        assert!(b.is_settled());
    }

    #[test]
    fn test_set_spring_params_partial() {
        let mut b = bezier();
        b.set_spring_params(SpringParamsUpdate {
            stiffness: Some(300.0),
            influence: Some(0.25),
            ..Default::default()
        });
        for point in [&b.spring_p1, &b.spring_p2] {
            let params = point.spring().params();
            assert_eq!(params.stiffness, 300.0);
            assert_eq!(params.damping, 12.0);
            assert_eq!(params.mass, 1.0);
            assert_eq!(point.influence(), 0.25);
        }
    }

    #[test]
    fn test_resize_scales_all_points() {
        let mut b = bezier();
        b.set_input_offset(Vec2::new(60.0, 30.0));
        for _ in 0..7 {
            b.update(Some(DT));
        }
        let before = b.control_points();

        b.resize(1200.0, 300.0);

        let after = b.control_points();
        let scale = Vec2::new(1.5, 0.5);
        assert!(after.p0.approx_eq_default(before.p0 * scale));
        assert!(after.p1.approx_eq_default(before.p1 * scale));
        assert!(after.p2.approx_eq_default(before.p2 * scale));
        assert!(after.p3.approx_eq_default(before.p3 * scale));
        assert_eq!(b.size(), Vec2::new(1200.0, 300.0));
    }

    #[test]
    fn test_resize_ignores_invalid_sizes() {
        let mut b = bezier();
        let before = b.control_points();
        b.resize(0.0, 300.0);
        b.resize(f32::NAN, 300.0);
        assert_eq!(b.control_points(), before);
        assert_eq!(b.size(), Vec2::new(800.0, 600.0));
    }

    #[test]
    fn test_resize_recovers_from_degenerate_start_size() {
        let mut b = InteractiveBezier::new(InteractiveBezierConfig::with_size(0.0, 600.0));
        b.resize(0.0, 300.0);
        assert_eq!(b.size(), Vec2::new(0.0, 600.0));

        b.resize(800.0, 600.0);

        let expected = InteractiveBezier::new(InteractiveBezierConfig::default());
        assert_eq!(b.size(), Vec2::new(800.0, 600.0));
        assert_eq!(b.control_points(), expected.control_points());
        assert!(b.is_settled());
    }

    #[test]
    fn test_render_data_snapshot() {
        let mut b = bezier();
        b.set_input_offset(Vec2::new(0.0, 100.0));
        b.update(Some(DT));

        let data = b.render_data();

        assert_eq!(data.points.len(), DEFAULT_CURVE_RESOLUTION + 1);
        assert_eq!(data.tangents.len(), DEFAULT_TANGENT_COUNT + 1);
        assert_eq!(data.control_points, b.control_points());
        assert!(data.springs[0].velocity > 0.0);
        assert!(!data.springs[0].settled);
        assert!(data.points[0].approx_eq_default(b.p0));

        // Snapshot bleibt nach weiterem Update unverändert
        let frozen = data.clone();
        b.update(Some(DT));
        assert_eq!(data, frozen);
        assert_ne!(b.render_data().control_points, data.control_points);
    }

    #[test]
    fn test_settles_after_offset_release() {
        let mut b = bezier();
        b.set_input_offset(Vec2::new(120.0, -80.0));
        for _ in 0..30 {
            b.update(Some(DT));
        }
        b.set_input_offset(Vec2::ZERO);
        let settled = (0..300).any(|_| {
            b.update(Some(DT));
            b.is_settled()
        });
        assert!(settled);
    }
}
