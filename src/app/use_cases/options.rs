//! Use-Case-Funktionen für Laufzeit-Optionen.

use crate::app::AppState;
use crate::shared::SimulationOptions;
use spring_bezier_engine::InteractiveBezier;
use std::path::Path;

/// Übernimmt neue Optionen und baut die Kurve für den aktuellen Viewport neu auf.
///
/// Die laufende Animation wird dabei verworfen.
pub fn apply_options(state: &mut AppState, options: SimulationOptions) {
    let size = state.curve.size();
    state.curve = InteractiveBezier::new(options.curve_config(size.x, size.y));
    state.options = options;
    state.dragging = None;
    log::info!("Optionen übernommen");
}

/// Speichert die aktuellen Optionen.
pub fn save_options(state: &AppState, path: &Path) -> anyhow::Result<()> {
    state.options.save_to_file(path)
}
