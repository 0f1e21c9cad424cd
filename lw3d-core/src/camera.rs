/// Camera state and view matrix construction
use crate::error::MathError;
use crate::matrix::Mat4;
use crate::vector::Vec3;

/// Camera position and facing direction.
///
/// Mutated externally (the front-end moves it from input) and read once per
/// frame to build the view matrix. `facing` is carried as state but the
/// view target is always one unit ahead of the position along world +z:
/// the camera translates, it does not steer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub facing: Vec3,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            facing: Vec3::ZERO,
        }
    }

    /// Translate the camera by `delta` in world coordinates.
    pub fn translate(&mut self, delta: Vec3) {
        self.position = self.position + delta;
    }

    /// The world-to-camera (view) matrix: the quick inverse of the camera's
    /// look-at basis.
    pub fn view_matrix(&self) -> Result<Mat4, MathError> {
        let target = self.position + Vec3::FORWARD;
        Ok(Mat4::look_at(self.position, target, Vec3::UP)?.quick_inverse())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
