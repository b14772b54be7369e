//! Spring-Bézier-Engine.
//!
//! Kurven- und Physik-Kern ohne I/O: Vektoralgebra, kubische Bézier-Geometrie,
//! Feder-Integrator und der `InteractiveBezier`-Orchestrator.
//! Alle Operationen sind total: numerische Sonderfälle werden deterministisch
//! abgefangen statt als Fehler gemeldet.

pub mod bezier;
pub mod interactive;
pub mod spring;
pub mod spring_point;
pub mod vector;

pub use bezier::{BoundingBox, CubicBezier, CurveUpdate, SampledPoint, TangentLine};
pub use interactive::{
    ControlPoints, InteractiveBezier, InteractiveBezierConfig, RenderData, SpringParamsUpdate,
    SpringTelemetry,
};
pub use spring::{SpringParams, SpringPhysics};
pub use spring_point::SpringPoint;
pub use vector::{Vector2D, VectorExt};
