//! Use-Case-Funktionen für Viewport-Zustand.

use crate::app::AppState;

/// Skaliert die Kurve proportional auf die neue Viewport-Größe.
pub fn resize(state: &mut AppState, width: f32, height: f32) {
    state.curve.resize(width, height);
}
