//! Handler für Eingabe-Offsets, Drag und Eingabequelle.

use crate::app::use_cases;
use crate::app::{AppState, InputMode};

/// Setzt den Eingabe-Offset der Steuerpunkte.
pub fn set_input_offset(state: &mut AppState, offset: glam::Vec2) {
    use_cases::input::set_input_offset(state, offset);
}

/// Wechselt die aktive Eingabequelle.
pub fn set_input_mode(state: &mut AppState, mode: InputMode) {
    use_cases::input::set_input_mode(state, mode);
}

/// Startet einen Drag am nächstgelegenen Kontrollpunkt.
pub fn begin_drag(state: &mut AppState, pos: glam::Vec2, pick_radius: f32) {
    if !use_cases::drag::begin_drag(state, pos, pick_radius) {
        log::debug!("Kein Kontrollpunkt im Radius {} um {:?}", pick_radius, pos);
    }
}

/// Zieht den gegriffenen Kontrollpunkt.
pub fn drag_to(state: &mut AppState, pos: glam::Vec2) {
    use_cases::drag::drag_to(state, pos);
}

/// Beendet den aktiven Drag.
pub fn end_drag(state: &mut AppState) {
    use_cases::drag::end_drag(state);
}

/// Stößt beide Steuerpunkte an.
pub fn apply_impulse(state: &mut AppState, impulse: glam::Vec2) {
    use_cases::input::apply_impulse(state, impulse);
}
