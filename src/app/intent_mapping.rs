//! Mapping von Eingabe-Intents auf mutierende App-Commands.

use super::use_cases::input;
use super::{AppCommand, AppIntent, AppState, InputMode};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Eingaben, die zur aktiven Eingabequelle nicht passen, ergeben keine Commands.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let options = &state.options;
    match intent {
        AppIntent::PointerMoved { screen_pos } => {
            if state.input_mode != InputMode::Pointer {
                return Vec::new();
            }
            let offset =
                input::pointer_offset(screen_pos, state.curve.size(), options.max_input_offset);
            vec![AppCommand::SetInputOffset { offset }]
        }
        AppIntent::TiltChanged { beta, gamma } => {
            if state.input_mode != InputMode::Tilt {
                return Vec::new();
            }
            let offset = input::tilt_offset(
                beta,
                gamma,
                options.tilt_max_angle_deg,
                options.max_input_offset,
            );
            vec![AppCommand::SetInputOffset { offset }]
        }
        AppIntent::DragStarted { screen_pos } => {
            if state.input_mode != InputMode::Drag {
                return Vec::new();
            }
            vec![AppCommand::BeginDrag {
                pos: screen_pos,
                pick_radius: options.drag_pick_radius,
            }]
        }
        AppIntent::DragUpdated { screen_pos } => {
            if state.dragging.is_none() {
                return Vec::new();
            }
            vec![AppCommand::DragTo { pos: screen_pos }]
        }
        AppIntent::DragEnded => {
            if state.dragging.is_none() {
                return Vec::new();
            }
            vec![AppCommand::EndDrag]
        }
        AppIntent::Tapped { screen_pos } => {
            let impulse = input::tap_impulse(state, screen_pos);
            if impulse == glam::Vec2::ZERO {
                return Vec::new();
            }
            vec![AppCommand::ApplyImpulse { impulse }]
        }
        AppIntent::InputModeChanged { mode } => {
            if mode == state.input_mode {
                return Vec::new();
            }
            // Offset der alten Quelle darf nicht weiterwirken
            vec![
                AppCommand::SetInputOffset {
                    offset: glam::Vec2::ZERO,
                },
                AppCommand::SetInputMode { mode },
            ]
        }
        AppIntent::ViewportResized { size } => vec![AppCommand::Resize {
            width: size[0],
            height: size[1],
        }],
        AppIntent::ResetRequested => vec![AppCommand::ResetCurve],
        AppIntent::SpringParamsChanged { update } => vec![AppCommand::SetSpringParams { update }],
        AppIntent::OptionsApplied { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::SaveOptionsRequested { path } => vec![AppCommand::SaveOptions { path }],
    }
}
