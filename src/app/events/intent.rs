use super::super::state::InputMode;
use crate::shared::SimulationOptions;
use spring_bezier_engine::SpringParamsUpdate;
use std::path::PathBuf;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Pointer bewegt (Screen-Koordinaten, wirkt nur im Pointer-Modus)
    PointerMoved { screen_pos: glam::Vec2 },
    /// Geräteneigung geändert (Grad; beta = vor/zurück, gamma = links/rechts)
    TiltChanged { beta: f32, gamma: f32 },
    /// Drag begonnen (wirkt nur im Drag-Modus)
    DragStarted { screen_pos: glam::Vec2 },
    /// Drag-Position aktualisiert
    DragUpdated { screen_pos: glam::Vec2 },
    /// Drag beendet
    DragEnded,
    /// Kurzer Tap: Impuls auf die Steuerpunkte
    Tapped { screen_pos: glam::Vec2 },
    /// Eingabequelle wechseln
    InputModeChanged { mode: InputMode },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kurve auf Ruhelage zurücksetzen
    ResetRequested,
    /// Federparameter geändert (z.B. über Slider)
    SpringParamsChanged { update: SpringParamsUpdate },
    /// Neue Optionen übernehmen
    OptionsApplied { options: Box<SimulationOptions> },
    /// Aktuelle Optionen speichern
    SaveOptionsRequested { path: PathBuf },
}
