//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die zwischen `app` und dem Runner
//! geteilt werden.
pub mod options;

pub use options::SimulationOptions;
