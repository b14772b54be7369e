//! Zentrale Konfiguration für die Spring-Bézier-Simulation.
//!
//! `SimulationOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use spring_bezier_engine::interactive::{
    DEFAULT_CURVE_RESOLUTION, DEFAULT_HEIGHT, DEFAULT_P1_INFLUENCE, DEFAULT_P2_INFLUENCE,
    DEFAULT_P2_OFFSET_SCALE, DEFAULT_TANGENT_COUNT, DEFAULT_TANGENT_LENGTH, DEFAULT_WIDTH,
};
use spring_bezier_engine::spring::{DEFAULT_DAMPING, DEFAULT_MASS, DEFAULT_STIFFNESS};
use spring_bezier_engine::InteractiveBezierConfig;

// ── Eingabe ─────────────────────────────────────────────────────────

/// Maximaler Eingabe-Offset (Welteinheiten) bei voller Auslenkung von Pointer oder Neigung.
pub const MAX_INPUT_OFFSET: f32 = 150.0;
/// Neigungswinkel (Grad), ab dem die Auslenkung voll ist.
pub const TILT_MAX_ANGLE_DEG: f32 = 45.0;
/// Greif-Radius für Drag auf Kontrollpunkte.
pub const DRAG_PICK_RADIUS: f32 = 30.0;
/// Stärke des Impulses bei Tap.
pub const TAP_IMPULSE: f32 = 400.0;

// ── Simulation ──────────────────────────────────────────────────────

/// Fester Zeitschritt für den Headless-Runner (Sekunden).
pub const FIXED_DT: f32 = 1.0 / 60.0;
/// Frame-Obergrenze, bis die Kurve zur Ruhe kommen muss.
pub const MAX_SETTLE_FRAMES: u32 = 600;

/// Alle zur Laufzeit änderbaren Simulations-Optionen.
/// Wird als `spring_bezier.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationOptions {
    // ── Viewport ────────────────────────────────────────────────
    /// Start-Breite des Viewports
    pub viewport_width: f32,
    /// Start-Höhe des Viewports
    pub viewport_height: f32,

    // ── Feder ───────────────────────────────────────────────────
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Einfluss des Eingabe-Offsets auf P1
    pub p1_influence: f32,
    /// Einfluss des Eingabe-Offsets auf P2
    pub p2_influence: f32,
    /// Gegenläufige Kopplung von P2 an den Eingabe-Offset
    pub p2_offset_scale: f32,

    // ── Kurve ───────────────────────────────────────────────────
    /// Segmente der Render-Polylinie
    pub curve_resolution: usize,
    /// Anzahl Tangenten-Indikatoren
    pub tangent_count: usize,
    /// Länge der Tangenten-Indikatoren
    pub tangent_length: f32,

    // ── Eingabe ─────────────────────────────────────────────────
    pub max_input_offset: f32,
    pub tilt_max_angle_deg: f32,
    pub drag_pick_radius: f32,
    pub tap_impulse: f32,

    // ── Runner ──────────────────────────────────────────────────
    pub fixed_dt: f32,
    pub max_settle_frames: u32,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            viewport_width: DEFAULT_WIDTH,
            viewport_height: DEFAULT_HEIGHT,

            stiffness: DEFAULT_STIFFNESS,
            damping: DEFAULT_DAMPING,
            mass: DEFAULT_MASS,
            p1_influence: DEFAULT_P1_INFLUENCE,
            p2_influence: DEFAULT_P2_INFLUENCE,
            p2_offset_scale: DEFAULT_P2_OFFSET_SCALE,

            curve_resolution: DEFAULT_CURVE_RESOLUTION,
            tangent_count: DEFAULT_TANGENT_COUNT,
            tangent_length: DEFAULT_TANGENT_LENGTH,

            max_input_offset: MAX_INPUT_OFFSET,
            tilt_max_angle_deg: TILT_MAX_ANGLE_DEG,
            drag_pick_radius: DRAG_PICK_RADIUS,
            tap_impulse: TAP_IMPULSE,

            fixed_dt: FIXED_DT,
            max_settle_frames: MAX_SETTLE_FRAMES,
        }
    }
}

impl SimulationOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("spring-bezier"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("spring_bezier.toml")
    }

    /// Kurven-Konfiguration für einen Viewport der Größe `width` × `height`.
    pub fn curve_config(&self, width: f32, height: f32) -> InteractiveBezierConfig {
        InteractiveBezierConfig {
            width,
            height,
            stiffness: self.stiffness,
            damping: self.damping,
            mass: self.mass,
            curve_resolution: self.curve_resolution,
            tangent_count: self.tangent_count,
            tangent_length: self.tangent_length,
            p1_influence: self.p1_influence,
            p2_influence: self.p2_influence,
            p2_offset_scale: self.p2_offset_scale,
            ..InteractiveBezierConfig::default()
        }
    }

    /// Kurven-Konfiguration für den Start-Viewport.
    pub fn to_curve_config(&self) -> InteractiveBezierConfig {
        self.curve_config(self.viewport_width, self.viewport_height)
    }
}
