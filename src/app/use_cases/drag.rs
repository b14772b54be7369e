//! Drag-Logik für Kontrollpunkte.
//!
//! Endpunkte folgen dem Finger direkt, Steuerpunkte nur über ihr Federziel.

use crate::app::{AppState, DragHandle};
use glam::Vec2;

/// Greift den nächsten Kontrollpunkt innerhalb `pick_radius`.
///
/// Gibt `true` zurück, wenn ein Punkt gegriffen wurde.
pub fn begin_drag(state: &mut AppState, pos: Vec2, pick_radius: f32) -> bool {
    let picked = state
        .curve
        .curve()
        .nearest_control_point(pos, pick_radius)
        .and_then(DragHandle::from_index);
    state.dragging = picked;
    match picked {
        Some(handle) => {
            log::debug!("Drag gestartet: {:?}", handle);
            true
        }
        None => false,
    }
}

/// Aktualisiert den gegriffenen Punkt.
pub fn drag_to(state: &mut AppState, pos: Vec2) {
    match state.dragging {
        Some(DragHandle::P0) => state.curve.p0 = pos,
        Some(DragHandle::P1) => state.curve.spring_p1.set_target(pos),
        Some(DragHandle::P2) => state.curve.spring_p2.set_target(pos),
        Some(DragHandle::P3) => state.curve.p3 = pos,
        None => {}
    }
}

/// Beendet den Drag; Federziele bleiben stehen.
pub fn end_drag(state: &mut AppState) {
    if let Some(handle) = state.dragging.take() {
        log::debug!("Drag beendet: {:?}", handle);
    }
}
