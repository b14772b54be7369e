//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use spring_bezier_engine::RenderData;

/// Orchestriert Eingabe-Events, Simulationsschritte und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Eingabe ===
            AppCommand::SetInputOffset { offset } => {
                handlers::input::set_input_offset(state, offset)
            }
            AppCommand::SetInputMode { mode } => handlers::input::set_input_mode(state, mode),
            AppCommand::BeginDrag { pos, pick_radius } => {
                handlers::input::begin_drag(state, pos, pick_radius)
            }
            AppCommand::DragTo { pos } => handlers::input::drag_to(state, pos),
            AppCommand::EndDrag => handlers::input::end_drag(state),
            AppCommand::ApplyImpulse { impulse } => handlers::input::apply_impulse(state, impulse),

            // === Viewport ===
            AppCommand::Resize { width, height } => handlers::view::resize(state, width, height),

            // === Physik ===
            AppCommand::ResetCurve => handlers::physics::reset(state),
            AppCommand::SetSpringParams { update } => {
                handlers::physics::set_spring_params(state, update)
            }

            // === Optionen ===
            AppCommand::ApplyOptions { options } => handlers::options::apply(state, *options),
            AppCommand::SaveOptions { path } => handlers::options::save(state, &path)?,
        }

        Ok(())
    }

    /// Simuliert einen Frame und liefert die Zeichendaten danach.
    ///
    /// `dt = None` misst die Wanduhr-Zeit seit dem letzten Aufruf.
    pub fn tick(&mut self, state: &mut AppState, dt: Option<f32>) -> RenderData {
        state.curve.update(dt);
        state.frame_count += 1;
        self.build_render_data(state)
    }

    /// Baut die Zeichendaten aus dem aktuellen AppState.
    pub fn build_render_data(&self, state: &AppState) -> RenderData {
        state.curve.render_data()
    }
}
