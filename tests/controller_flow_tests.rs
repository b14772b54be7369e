use approx::assert_abs_diff_eq;
use glam::Vec2;
use spring_bezier::{
    AppCommand, AppController, AppIntent, AppState, InputMode, SimulationOptions,
    SpringParamsUpdate,
};

const DT: f32 = 1.0 / 60.0;

fn run_frames(controller: &mut AppController, state: &mut AppState, frames: usize) {
    for _ in 0..frames {
        controller.tick(state, Some(DT));
    }
}

#[test]
fn test_pointer_at_right_edge_pulls_p1_and_pushes_p2() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let base_p1 = state.curve.spring_p1.base_position();
    let base_p2 = state.curve.spring_p2.base_position();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                screen_pos: Vec2::new(800.0, 300.0),
            },
        )
        .expect("PointerMoved sollte ohne Fehler durchlaufen");

    run_frames(&mut controller, &mut state, 600);

    let max = state.options.max_input_offset;
    let p1 = state.curve.spring_p1.position();
    let p2 = state.curve.spring_p2.position();
    assert_abs_diff_eq!(p1.x, base_p1.x + max, epsilon = 0.1);
    assert_abs_diff_eq!(p1.y, base_p1.y, epsilon = 0.1);
    // P2 bewegt sich gegenläufig und gedämpft
    let expected_p2 = base_p2.x + max * state.options.p2_offset_scale * state.options.p2_influence;
    assert_abs_diff_eq!(p2.x, expected_p2, epsilon = 0.1);
    assert!(state.curve.is_settled());
}

#[test]
fn test_tick_counts_frames_and_returns_render_data() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let data = controller.tick(&mut state, Some(DT));

    assert_eq!(state.frame_count, 1);
    assert_eq!(data.points.len(), state.options.curve_resolution + 1);
    assert_eq!(data.tangents.len(), state.options.tangent_count + 1);
    assert_eq!(data.control_points.p0, state.curve.p0);
    assert_eq!(data, controller.build_render_data(&state));
}

#[test]
fn test_build_render_data_does_not_advance_physics() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                screen_pos: Vec2::ZERO,
            },
        )
        .expect("PointerMoved sollte ohne Fehler durchlaufen");

    let before = controller.build_render_data(&state);
    let again = controller.build_render_data(&state);

    assert_eq!(before, again);
    assert_eq!(state.frame_count, 0);
}

#[test]
fn test_drag_flow_reshapes_curve_until_reset() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let p1 = state.curve.spring_p1.position();
    let finger = p1 + Vec2::new(40.0, -60.0);

    for intent in [
        AppIntent::InputModeChanged {
            mode: InputMode::Drag,
        },
        AppIntent::DragStarted { screen_pos: p1 },
        AppIntent::DragUpdated { screen_pos: finger },
        AppIntent::DragEnded,
    ] {
        controller
            .handle_intent(&mut state, intent)
            .expect("Drag-Intent sollte ohne Fehler durchlaufen");
    }

    assert_eq!(state.input_mode, InputMode::Drag);
    assert!(state.dragging.is_none());

    run_frames(&mut controller, &mut state, 600);
    assert!(state.curve.spring_p1.position().distance(finger) < 0.1);

    controller
        .handle_intent(&mut state, AppIntent::ResetRequested)
        .expect("ResetRequested sollte ohne Fehler durchlaufen");
    assert_eq!(
        state.curve.spring_p1.position(),
        state.curve.spring_p1.base_position()
    );
}

#[test]
fn test_pointer_is_ignored_in_drag_mode() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.input_mode = InputMode::Drag;

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                screen_pos: Vec2::ZERO,
            },
        )
        .expect("PointerMoved sollte ohne Fehler durchlaufen");

    assert!(state.command_log.is_empty());
    assert_eq!(
        state.curve.spring_p1.target(),
        state.curve.spring_p1.base_position()
    );
}

#[test]
fn test_tap_applies_impulse_to_both_springs() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let apex = state.curve.curve().evaluate(0.5);

    controller
        .handle_intent(
            &mut state,
            AppIntent::Tapped {
                screen_pos: apex + Vec2::new(0.0, -100.0),
            },
        )
        .expect("Tapped sollte ohne Fehler durchlaufen");

    let data = controller.build_render_data(&state);
    assert_abs_diff_eq!(data.springs[0].velocity, state.options.tap_impulse, epsilon = 1e-3);
    assert_abs_diff_eq!(data.springs[1].velocity, state.options.tap_impulse, epsilon = 1e-3);
    assert!(!state.curve.is_settled());

    run_frames(&mut controller, &mut state, 600);
    assert!(state.curve.is_settled());
}

#[test]
fn test_viewport_resize_scales_curve() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let p3 = state.curve.p3;

    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportResized {
                size: [400.0, 300.0],
            },
        )
        .expect("ViewportResized sollte ohne Fehler durchlaufen");

    assert_eq!(state.curve.size(), Vec2::new(400.0, 300.0));
    assert_abs_diff_eq!(state.curve.p3.x, p3.x * 0.5, epsilon = 1e-4);
    assert_abs_diff_eq!(state.curve.p3.y, p3.y * 0.5, epsilon = 1e-4);
}

#[test]
fn test_spring_params_changed_updates_options_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::SpringParamsChanged {
                update: SpringParamsUpdate {
                    stiffness: Some(300.0),
                    ..Default::default()
                },
            },
        )
        .expect("SpringParamsChanged sollte ohne Fehler durchlaufen");

    assert_eq!(state.options.stiffness, 300.0);
    assert_eq!(state.curve.spring_p2.spring().params().stiffness, 300.0);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::SetSpringParams { update } => assert_eq!(update.stiffness, Some(300.0)),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_options_applied_and_saved_roundtrip() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let path = std::env::temp_dir().join("spring_bezier_controller_flow_options.toml");

    let options = SimulationOptions {
        damping: 8.0,
        tangent_count: 3,
        ..Default::default()
    };
    controller
        .handle_intent(
            &mut state,
            AppIntent::OptionsApplied {
                options: Box::new(options.clone()),
            },
        )
        .expect("OptionsApplied sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::SaveOptionsRequested { path: path.clone() },
        )
        .expect("SaveOptionsRequested sollte ohne Fehler durchlaufen");

    assert_eq!(controller.build_render_data(&state).tangents.len(), 4);
    assert_eq!(SimulationOptions::load_from_file(&path), options);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_save_to_missing_directory_propagates_error() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let path = std::env::temp_dir()
        .join("spring_bezier_does_not_exist")
        .join("nested")
        .join("options.toml");

    let result = controller.handle_intent(&mut state, AppIntent::SaveOptionsRequested { path });

    assert!(result.is_err());
}
