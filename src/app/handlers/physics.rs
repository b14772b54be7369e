//! Handler für Federparameter und Ruhelage.

use crate::app::use_cases;
use crate::app::AppState;
use spring_bezier_engine::SpringParamsUpdate;

/// Setzt die Kurve in die Ruhelage zurück.
pub fn reset(state: &mut AppState) {
    use_cases::physics::reset(state);
}

/// Überträgt neue Federparameter.
pub fn set_spring_params(state: &mut AppState, update: SpringParamsUpdate) {
    use_cases::physics::set_spring_params(state, update);
}
