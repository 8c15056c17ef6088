//! Fly camera: orientation model, input translation and projection.

pub mod controller;
/// Camera state, cached basis vectors and the GPU uniform block.
pub mod core;
pub mod projection;

pub use controller::CameraController;
pub use self::core::{Bounds, CameraSetup, CameraState, CameraUniform};
pub use projection::{
    projection_matrix, ProjectionMode, ProjectionParams, Viewport,
};
