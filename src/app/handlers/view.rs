//! Handler für Viewport-Änderungen.

use crate::app::use_cases;
use crate::app::AppState;

/// Skaliert die Kurve auf die neue Viewport-Größe.
pub fn resize(state: &mut AppState, width: f32, height: f32) {
    use_cases::viewport::resize(state, width, height);
}
