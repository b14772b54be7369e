//! Gedämpfter harmonischer Oszillator für einen einzelnen 2D-Punkt.
//!
//! Semi-implizite Euler-Integration: erst Geschwindigkeit, dann Position.
//! Zeitschritt, Geschwindigkeit und Auslenkung werden begrenzt, damit große
//! Frame-Lücken oder extreme Zielsprünge das System nicht destabilisieren.

use crate::vector::VectorExt;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Standard-Federsteifigkeit (Kraft pro Auslenkungseinheit).
pub const DEFAULT_STIFFNESS: f32 = 150.0;
/// Standard-Dämpfungskoeffizient.
pub const DEFAULT_DAMPING: f32 = 12.0;
/// Standard-Masse.
pub const DEFAULT_MASS: f32 = 1.0;
/// Untergrenze für die Masse (Masse muss > 0 sein).
pub const MIN_MASS: f32 = 1e-3;
/// Maximale Geschwindigkeit in Einheiten pro Sekunde.
pub const DEFAULT_MAX_VELOCITY: f32 = 5000.0;
/// Maximale Auslenkung vom Ziel in Einheiten.
pub const DEFAULT_MAX_DISPLACEMENT: f32 = 500.0;
/// Größter Zeitschritt pro `update`-Aufruf (Sekunden).
pub const MAX_DT: f32 = 1.0 / 30.0;
/// Standard-Schwellen für [`SpringPhysics::is_settled_default`].
pub const DEFAULT_SETTLE_THRESHOLD: f32 = 0.1;
/// Obergrenze der Federkraft; hält die Integration bei extremen Zielen endlich
const MAX_SPRING_FORCE: f32 = 1e30;

/// Physikalische Parameter einer Feder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: DEFAULT_STIFFNESS,
            damping: DEFAULT_DAMPING,
            mass: DEFAULT_MASS,
        }
    }
}

/// Begrenzt einen Zeitschritt auf `[0, MAX_DT]`; nicht-endliche Werte ergeben 0.
pub fn clamp_dt(dt: f32) -> f32 {
    if dt.is_finite() {
        dt.clamp(0.0, MAX_DT)
    } else {
        0.0
    }
}

/// Ersetzt ungültige Massen (≤ 0, NaN, ∞) durch die Untergrenze.
fn sanitize_mass(mass: f32) -> f32 {
    if mass.is_finite() && mass > MIN_MASS {
        mass
    } else {
        MIN_MASS
    }
}

/// Feder-Integrator: Position folgt dem Ziel mit Trägheit.
#[derive(Debug, Clone, PartialEq)]
pub struct SpringPhysics {
    position: Vec2,
    velocity: Vec2,
    target: Vec2,
    stiffness: f32,
    damping: f32,
    mass: f32,
    max_velocity: f32,
    max_displacement: f32,
}

impl SpringPhysics {
    /// Erstellt eine Feder in Ruhe an `position` mit Standard-Parametern.
    pub fn new(position: Vec2) -> Self {
        Self::with_params(position, SpringParams::default())
    }

    /// Erstellt eine Feder in Ruhe an `position`.
    pub fn with_params(position: Vec2, params: SpringParams) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            target: position,
            stiffness: params.stiffness,
            damping: params.damping,
            mass: sanitize_mass(params.mass),
            max_velocity: DEFAULT_MAX_VELOCITY,
            max_displacement: DEFAULT_MAX_DISPLACEMENT,
        }
    }

    /// Überschreibt die Sicherheitsgrenzen für Geschwindigkeit und Auslenkung.
    pub fn with_limits(mut self, max_velocity: f32, max_displacement: f32) -> Self {
        self.max_velocity = max_velocity.max(0.0);
        self.max_displacement = max_displacement.max(0.0);
        self
    }

    /// Integriert einen Zeitschritt und gibt die neue Position zurück.
    ///
    /// `dt` wird auf `[0, 1/30]` begrenzt; wer mehr Zeit simulieren will,
    /// ruft `update` mehrfach auf.
    pub fn update(&mut self, dt: f32) -> Vec2 {
        let dt = clamp_dt(dt);

        // k·x muss auch bei extremen Zielsprüngen endlich bleiben
        let force_limit = MAX_SPRING_FORCE / self.stiffness.abs().max(1.0);
        let spring_force =
            -self.stiffness * (self.position - self.target).clamp_magnitude(force_limit);
        let damping_force = -self.damping * self.velocity;
        let acceleration = (spring_force + damping_force) / self.mass;

        self.velocity += acceleration * dt;
        self.velocity = self.velocity.clamp_magnitude(self.max_velocity);

        self.position += self.velocity * dt;

        let displacement = self.position - self.target;
        if displacement.length() > self.max_displacement {
            self.position = self.target + displacement.clamp_magnitude(self.max_displacement);
        }

        self.position
    }

    /// Springt ohne Übergang an `position`: Ziel identisch, Geschwindigkeit null.
    pub fn reset(&mut self, position: Vec2) {
        self.position = position;
        self.target = position;
        self.velocity = Vec2::ZERO;
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    /// Addiert `impulse / mass` zur Geschwindigkeit.
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity += impulse / self.mass;
    }

    /// True wenn Geschwindigkeit und Auslenkung unter den Schwellen liegen.
    pub fn is_settled(&self, velocity_threshold: f32, displacement_threshold: f32) -> bool {
        self.velocity.length() < velocity_threshold
            && self.displacement().length() < displacement_threshold
    }

    pub fn is_settled_default(&self) -> bool {
        self.is_settled(DEFAULT_SETTLE_THRESHOLD, DEFAULT_SETTLE_THRESHOLD)
    }

    /// Skaliert Position, Ziel und Geschwindigkeit komponentenweise (Viewport-Resize).
    pub fn rescale(&mut self, factor: Vec2) {
        self.position *= factor;
        self.target *= factor;
        self.velocity *= factor;
    }

    // ── Energie (nur Telemetrie) ──

    /// ½·m·v²
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// ½·k·x²
    pub fn potential_energy(&self) -> f32 {
        0.5 * self.stiffness * self.displacement().length_squared()
    }

    pub fn total_energy(&self) -> f32 {
        self.kinetic_energy() + self.potential_energy()
    }

    // ── Zugriff ──

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Abweichung der Position vom Ziel.
    pub fn displacement(&self) -> Vec2 {
        self.position - self.target
    }

    pub fn params(&self) -> SpringParams {
        SpringParams {
            stiffness: self.stiffness,
            damping: self.damping,
            mass: self.mass,
        }
    }

    pub fn max_velocity(&self) -> f32 {
        self.max_velocity
    }

    pub fn max_displacement(&self) -> f32 {
        self.max_displacement
    }

    pub fn set_stiffness(&mut self, stiffness: f32) {
        self.stiffness = stiffness;
    }

    pub fn set_damping(&mut self, damping: f32) {
        self.damping = damping;
    }

    /// Setzt die Masse; ungültige Werte werden auf [`MIN_MASS`] angehoben.
    pub fn set_mass(&mut self, mass: f32) {
        self.mass = sanitize_mass(mass);
    }
}
