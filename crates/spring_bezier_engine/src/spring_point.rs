//! Federgetriebener Kontrollpunkt mit Ruheposition und Eingabe-Einfluss.

use crate::spring::{SpringParams, SpringPhysics};
use glam::Vec2;

/// Standard-Einfluss externer Offsets.
pub const DEFAULT_INFLUENCE: f32 = 1.0;

/// Koppelt eine [`SpringPhysics`] an eine Ruheposition.
///
/// Eingabe-Offsets werden mit `influence` skaliert und relativ zur
/// Ruheposition als Federziel gesetzt; der Punkt selbst wird nie teleportiert.
#[derive(Debug, Clone, PartialEq)]
pub struct SpringPoint {
    spring: SpringPhysics,
    base_position: Vec2,
    influence: f32,
}

impl SpringPoint {
    /// Erstellt einen Punkt in Ruhe an `(x, y)` mit Standard-Parametern.
    pub fn new(x: f32, y: f32) -> Self {
        Self::with_params(Vec2::new(x, y), SpringParams::default(), DEFAULT_INFLUENCE)
    }

    pub fn with_params(base_position: Vec2, params: SpringParams, influence: f32) -> Self {
        Self {
            spring: SpringPhysics::with_params(base_position, params),
            base_position,
            influence,
        }
    }

    /// Ziel = Ruheposition + Offset · Einfluss.
    pub fn set_input_offset(&mut self, offset: Vec2) {
        self.spring.set_target(self.base_position + offset * self.influence);
    }

    /// Setzt das Ziel direkt, ohne Einfluss-Skalierung (Drag-Modus).
    pub fn set_target(&mut self, target: Vec2) {
        self.spring.set_target(target);
    }

    /// Zurück zur Ruheposition, Geschwindigkeit null.
    pub fn reset(&mut self) {
        self.spring.reset(self.base_position);
    }

    /// Verlegt die Ruheposition; der laufende Federzustand bleibt unberührt.
    pub fn set_base_position(&mut self, base_position: Vec2) {
        self.base_position = base_position;
    }

    pub fn set_influence(&mut self, influence: f32) {
        self.influence = influence;
    }

    pub fn update(&mut self, dt: f32) -> Vec2 {
        self.spring.update(dt)
    }

    pub fn position(&self) -> Vec2 {
        self.spring.position()
    }

    pub fn velocity(&self) -> Vec2 {
        self.spring.velocity()
    }

    pub fn target(&self) -> Vec2 {
        self.spring.target()
    }

    pub fn base_position(&self) -> Vec2 {
        self.base_position
    }

    pub fn influence(&self) -> f32 {
        self.influence
    }

    pub fn spring(&self) -> &SpringPhysics {
        &self.spring
    }

    pub fn spring_mut(&mut self) -> &mut SpringPhysics {
        &mut self.spring
    }
}
