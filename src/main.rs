//! Spring-Bézier Headless-Runner.
//!
//! Spielt einen Pointer-Sweep über den Viewport ab, lässt danach los und
//! simuliert mit festem Zeitschritt, bis die Kurve zur Ruhe kommt.

use glam::Vec2;
use serde::Serialize;
use spring_bezier::{AppController, AppIntent, AppState, SimulationOptions};
use spring_bezier_engine::{ControlPoints, SpringTelemetry};

/// Frames für den Sweep von links nach rechts
const SWEEP_FRAMES: u32 = 120;

/// Ergebnis eines Laufs, wird als JSON ausgegeben
#[derive(Debug, Serialize)]
struct RunSummary {
    sweep_frames: u32,
    settle_frames: u32,
    settled: bool,
    control_points: ControlPoints,
    springs: [SpringTelemetry; 2],
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Spring-Bézier v{} startet...", env!("CARGO_PKG_VERSION"));

    let options = SimulationOptions::load_from_file(&SimulationOptions::config_path());
    let mut state = AppState::with_options(options);
    let mut controller = AppController::new();

    let summary = run(&mut controller, &mut state)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn run(controller: &mut AppController, state: &mut AppState) -> anyhow::Result<RunSummary> {
    let dt = Some(state.options.fixed_dt);
    let size = state.curve.size();

    for frame in 0..SWEEP_FRAMES {
        let progress = frame as f32 / (SWEEP_FRAMES - 1) as f32;
        let screen_pos = Vec2::new(size.x * progress, size.y * 0.5);
        controller.handle_intent(state, AppIntent::PointerMoved { screen_pos })?;
        controller.tick(state, dt);
    }

    // Loslassen: Pointer zurück in die Mitte, Offset wird null
    controller.handle_intent(
        state,
        AppIntent::PointerMoved {
            screen_pos: size * 0.5,
        },
    )?;

    let max_frames = state.options.max_settle_frames;
    let mut settle_frames = 0;
    while settle_frames < max_frames && !state.curve.is_settled() {
        controller.tick(state, dt);
        settle_frames += 1;
    }

    let data = controller.build_render_data(state);
    let settled = state.curve.is_settled();
    if settled {
        log::info!("Kurve nach {} Frames in Ruhe", settle_frames);
    } else {
        log::warn!("Kurve nach {} Frames nicht in Ruhe", settle_frames);
    }
    log::info!(
        "Energie P1: {:.4}, P2: {:.4}",
        data.springs[0].total_energy,
        data.springs[1].total_energy
    );

    Ok(RunSummary {
        sweep_frames: SWEEP_FRAMES,
        settle_frames,
        settled,
        control_points: data.control_points,
        springs: data.springs,
    })
}
