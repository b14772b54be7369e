//! Use-Case-Funktionen für Eingabe-Offsets (Pointer, Neigung, Tap).
//!
//! Übersetzt Roh-Eingaben in Offsets bzw. Impulse; die Kurve selbst
//! wird nie direkt verschoben, sondern nur über Federziele.

use crate::app::{AppState, InputMode};
use glam::Vec2;

/// Offset aus Pointer-Position relativ zur Viewport-Mitte.
///
/// Pro Achse auf `[-1, 1]` normiert und mit `max_offset` skaliert.
pub fn pointer_offset(screen_pos: Vec2, viewport: Vec2, max_offset: f32) -> Vec2 {
    let half = viewport * 0.5;
    if !screen_pos.is_finite() || half.x <= 0.0 || half.y <= 0.0 {
        return Vec2::ZERO;
    }
    ((screen_pos - half) / half).clamp(Vec2::NEG_ONE, Vec2::ONE) * max_offset
}

/// Offset aus Geräteneigung (Grad).
///
/// gamma (links/rechts) → x, beta (vor/zurück) → y; beide auf
/// `±max_angle_deg` begrenzt.
pub fn tilt_offset(beta: f32, gamma: f32, max_angle_deg: f32, max_offset: f32) -> Vec2 {
    if !beta.is_finite() || !gamma.is_finite() || max_angle_deg <= 0.0 {
        return Vec2::ZERO;
    }
    let limit = Vec2::splat(max_angle_deg);
    Vec2::new(gamma, beta).clamp(-limit, limit) / max_angle_deg * max_offset
}

/// Impuls für einen Tap: vom Kurven-Scheitel B(0.5) weg Richtung Tap-Position.
pub fn tap_impulse(state: &AppState, screen_pos: Vec2) -> Vec2 {
    let apex = state.curve.curve().evaluate(0.5);
    (screen_pos - apex).normalize_or_zero() * state.options.tap_impulse
}

/// Verteilt einen Offset auf die Steuerpunkte.
pub fn set_input_offset(state: &mut AppState, offset: Vec2) {
    state.curve.set_input_offset(offset);
}

/// Wendet einen Impuls auf beide Steuerpunkte an.
pub fn apply_impulse(state: &mut AppState, impulse: Vec2) {
    for point in [&mut state.curve.spring_p1, &mut state.curve.spring_p2] {
        point.spring_mut().apply_impulse(impulse);
    }
    log::debug!("Impuls angewendet: {:?}", impulse);
}

/// Wechselt die Eingabequelle; ein laufender Drag wird verworfen.
pub fn set_input_mode(state: &mut AppState, mode: InputMode) {
    if state.input_mode != mode {
        log::info!("Eingabemodus: {:?} → {:?}", state.input_mode, mode);
    }
    state.input_mode = mode;
    state.dragging = None;
}
