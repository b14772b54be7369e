//! Spring-Bézier Library.
//! App-Layer über dem Kurven-/Feder-Kernel, exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState, DragHandle, InputMode};
pub use shared::SimulationOptions;
pub use spring_bezier_engine::{
    CubicBezier, InteractiveBezier, InteractiveBezierConfig, RenderData, SpringParams,
    SpringParamsUpdate, SpringPhysics, SpringPoint, SpringTelemetry, Vector2D, VectorExt,
};
