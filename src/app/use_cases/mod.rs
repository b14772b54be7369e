pub mod drag;
pub mod input;
pub mod options;
pub mod physics;
pub mod viewport;
