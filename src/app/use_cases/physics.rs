//! Use-Case-Funktionen für Federparameter und Ruhelage.

use crate::app::AppState;
use spring_bezier_engine::SpringParamsUpdate;

/// Setzt beide Steuerpunkte sofort in ihre Ruhelage.
pub fn reset(state: &mut AppState) {
    state.curve.reset();
    state.dragging = None;
}

/// Überträgt geänderte Federparameter auf Kurve und Optionen.
///
/// Die Optionen werden mitgeführt, damit ein späteres Speichern den
/// aktuellen Slider-Stand enthält.
pub fn set_spring_params(state: &mut AppState, update: SpringParamsUpdate) {
    state.curve.set_spring_params(update);

    let options = &mut state.options;
    if let Some(stiffness) = update.stiffness {
        options.stiffness = stiffness;
    }
    if let Some(damping) = update.damping {
        options.damping = damping;
    }
    if let Some(mass) = update.mass {
        options.mass = mass;
    }
    if let Some(influence) = update.influence {
        options.p1_influence = influence;
        options.p2_influence = influence;
    }
}
