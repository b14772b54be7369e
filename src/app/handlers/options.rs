//! Handler für Options-Übernahme und -Persistenz.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::SimulationOptions;
use std::path::Path;

/// Übernimmt neue Laufzeit-Optionen.
pub fn apply(state: &mut AppState, options: SimulationOptions) {
    use_cases::options::apply_options(state, options);
}

/// Speichert die Optionen und propagiert Fehler an den Aufrufer.
pub fn save(state: &AppState, path: &Path) -> anyhow::Result<()> {
    use_cases::options::save_options(state, path)
}
