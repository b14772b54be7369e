//! Application State: zentrale Datenhaltung.

use super::CommandLog;
use crate::shared::SimulationOptions;
use spring_bezier_engine::InteractiveBezier;

/// Aktive Eingabequelle für den Kurven-Offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Pointer-Position relativ zur Viewport-Mitte
    #[default]
    Pointer,
    /// Geräteneigung (beta/gamma)
    Tilt,
    /// Direktes Ziehen von Kontrollpunkten
    Drag,
}

/// Welcher Kontrollpunkt wird gerade per Drag verschoben?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragHandle {
    /// Startpunkt (wird direkt gesetzt)
    P0,
    /// Steuerpunkt 1 (Federziel)
    P1,
    /// Steuerpunkt 2 (Federziel)
    P2,
    /// Endpunkt (wird direkt gesetzt)
    P3,
}

impl DragHandle {
    /// Index 0..=3 in Kontrollpunkt-Reihenfolge.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::P0),
            1 => Some(Self::P1),
            2 => Some(Self::P2),
            3 => Some(Self::P3),
            _ => None,
        }
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Die simulierte Kurve (einziger Schreiber: der Controller)
    pub curve: InteractiveBezier,
    /// Laufzeit-Optionen
    pub options: SimulationOptions,
    /// Aktive Eingabequelle
    pub input_mode: InputMode,
    /// Gerade gegriffener Kontrollpunkt
    pub dragging: Option<DragHandle>,
    /// Protokoll ausgeführter Commands
    pub command_log: CommandLog,
    /// Anzahl simulierter Frames
    pub frame_count: u64,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(SimulationOptions::default())
    }

    /// Erstellt einen App-State aus geladenen Optionen.
    pub fn with_options(options: SimulationOptions) -> Self {
        Self {
            curve: InteractiveBezier::new(options.to_curve_config()),
            options,
            input_mode: InputMode::default(),
            dragging: None,
            command_log: CommandLog::new(),
            frame_count: 0,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
