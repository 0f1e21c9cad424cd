/// LW3D Core Library - Wireframe transform pipeline
///
/// This library provides the stateless core of the wireframe renderer:
/// vector and matrix math, the cube mesh, camera state, and the per-frame
/// model/view/projection pipeline. Rendering surfaces and frame scheduling
/// are collaborators supplied by a front-end crate.

pub mod camera;
pub mod error;
pub mod geometry;
pub mod matrix;
pub mod pipeline;
pub mod vector;

// Re-export commonly used types
pub use camera::Camera;
pub use error::MathError;
pub use geometry::{Mesh, Segment, Segment2};
pub use matrix::Mat4;
pub use pipeline::{Pipeline, PipelineConfig, Surface};
pub use vector::Vec3;
