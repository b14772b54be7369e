use super::super::state::InputMode;
use crate::shared::SimulationOptions;
use spring_bezier_engine::SpringParamsUpdate;
use std::path::PathBuf;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Eingabe-Offset auf beide Steuerpunkte verteilen
    SetInputOffset { offset: glam::Vec2 },
    /// Eingabequelle setzen
    SetInputMode { mode: InputMode },
    /// Kontrollpunkt nahe `pos` greifen
    BeginDrag { pos: glam::Vec2, pick_radius: f32 },
    /// Gegriffenen Kontrollpunkt nach `pos` ziehen
    DragTo { pos: glam::Vec2 },
    /// Drag beenden
    EndDrag,
    /// Impuls auf beide Steuerpunkte anwenden
    ApplyImpulse { impulse: glam::Vec2 },
    /// Kurve auf neue Viewport-Größe skalieren
    Resize { width: f32, height: f32 },
    /// Steuerpunkte sofort in Ruhelage
    ResetCurve,
    /// Federparameter gleichmäßig setzen
    SetSpringParams { update: SpringParamsUpdate },
    /// Optionen übernehmen und Kurve neu aufbauen
    ApplyOptions { options: Box<SimulationOptions> },
    /// Optionen als TOML speichern
    SaveOptions { path: PathBuf },
}
