/// 4x4 transform matrices in homogeneous coordinates
///
/// Points are treated as row vectors `(x, y, z, 1)` multiplied on the left,
/// so in a product `a * b` the matrix `a` is applied first. The whole
/// pipeline composes as `model * view * projection`.
use std::ops::Mul;

use crate::error::MathError;
use crate::vector::Vec3;

/// A row-major 4x4 matrix. The default value is all zeros; use the
/// constructors to build meaningful transforms.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Mat4 {
    pub m: [[f32; 4]; 4],
}

impl Mat4 {
    /// The identity transform.
    pub fn identity() -> Self {
        let mut matrix = Self::default();
        matrix.m[0][0] = 1.0;
        matrix.m[1][1] = 1.0;
        matrix.m[2][2] = 1.0;
        matrix.m[3][3] = 1.0;
        matrix
    }

    /// Right-handed rotation about the X axis.
    pub fn rotation_x(angle_rad: f32) -> Self {
        let (sin, cos) = angle_rad.sin_cos();
        let mut matrix = Self::default();
        matrix.m[0][0] = 1.0;
        matrix.m[1][1] = cos;
        matrix.m[1][2] = sin;
        matrix.m[2][1] = -sin;
        matrix.m[2][2] = cos;
        matrix.m[3][3] = 1.0;
        matrix
    }

    /// Right-handed rotation about the Y axis.
    pub fn rotation_y(angle_rad: f32) -> Self {
        let (sin, cos) = angle_rad.sin_cos();
        let mut matrix = Self::default();
        matrix.m[0][0] = cos;
        matrix.m[0][2] = sin;
        matrix.m[1][1] = 1.0;
        matrix.m[2][0] = -sin;
        matrix.m[2][2] = cos;
        matrix.m[3][3] = 1.0;
        matrix
    }

    /// Right-handed rotation about the Z axis.
    pub fn rotation_z(angle_rad: f32) -> Self {
        let (sin, cos) = angle_rad.sin_cos();
        let mut matrix = Self::default();
        matrix.m[0][0] = cos;
        matrix.m[0][1] = sin;
        matrix.m[1][0] = -sin;
        matrix.m[1][1] = cos;
        matrix.m[2][2] = 1.0;
        matrix.m[3][3] = 1.0;
        matrix
    }

    /// Translation by `(x, y, z)`. The offsets live in row 3 because points
    /// are row vectors.
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        let mut matrix = Self::identity();
        matrix.m[3][0] = x;
        matrix.m[3][1] = y;
        matrix.m[3][2] = z;
        matrix
    }

    /// Perspective projection.
    ///
    /// Produces a homogeneous `w` equal to the view-space depth, so points
    /// in front of the camera (z > 0) divide down into the normalized
    /// device square `[-1, 1] x [-1, 1]`.
    pub fn perspective(fov_degrees: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        let fov_scale = 1.0 / (fov_degrees * 0.5).to_radians().tan();
        let mut matrix = Self::default();
        matrix.m[0][0] = aspect_ratio * fov_scale;
        matrix.m[1][1] = fov_scale;
        matrix.m[2][2] = far / (far - near);
        matrix.m[3][2] = (-far * near) / (far - near);
        matrix.m[2][3] = 1.0;
        matrix
    }

    /// Builds the camera-to-world matrix for a camera at `position` looking
    /// toward `target`, with `up` fixing the roll.
    ///
    /// The rotation rows are the camera's right / up / forward basis vectors
    /// (orthonormalized with Gram-Schmidt), row 3 is the position. Invert
    /// with [`Mat4::quick_inverse`] to get the view matrix.
    ///
    /// Fails when `target == position` or `up` is parallel to the forward
    /// direction, since no basis exists then.
    pub fn look_at(position: Vec3, target: Vec3, up: Vec3) -> Result<Self, MathError> {
        let forward = (target - position).normalize()?;

        // Remove the forward component from up, then rebuild the basis.
        let a = (up - forward * up.dot(forward)).normalize()?;
        let new_up = a.cross(forward);
        let right = new_up.cross(forward);

        let mut matrix = Self::default();
        matrix.m[0] = [right.x, right.y, right.z, 0.0];
        matrix.m[1] = [new_up.x, new_up.y, new_up.z, 0.0];
        matrix.m[2] = [forward.x, forward.y, forward.z, 0.0];
        matrix.m[3] = [position.x, position.y, position.z, 1.0];
        Ok(matrix)
    }

    /// Cheap inverse for rotation + translation matrices such as the ones
    /// [`Mat4::look_at`] produces: transpose the rotation block and re-derive
    /// the translation row against it.
    ///
    /// Only valid when the upper-left 3x3 block is orthonormal; anything
    /// else silently yields garbage, which is a caller bug rather than a
    /// runtime condition.
    pub fn quick_inverse(&self) -> Self {
        let m = &self.m;
        let mut matrix = Self::default();
        matrix.m[0] = [m[0][0], m[1][0], m[2][0], 0.0];
        matrix.m[1] = [m[0][1], m[1][1], m[2][1], 0.0];
        matrix.m[2] = [m[0][2], m[1][2], m[2][2], 0.0];
        for c in 0..3 {
            matrix.m[3][c] =
                -(m[3][0] * matrix.m[0][c] + m[3][1] * matrix.m[1][c] + m[3][2] * matrix.m[2][c]);
        }
        matrix.m[3][3] = 1.0;
        matrix
    }

    /// Transforms `v` as the homogeneous row vector `(x, y, z, 1)` and
    /// performs the perspective divide.
    ///
    /// When the resulting `w` is zero (a point at infinity) the divide is
    /// skipped and the raw coordinates pass through unmodified.
    pub fn transform_point(&self, v: Vec3) -> Vec3 {
        let m = &self.m;
        let mut out = Vec3::new(
            v.x * m[0][0] + v.y * m[1][0] + v.z * m[2][0] + m[3][0],
            v.x * m[0][1] + v.y * m[1][1] + v.z * m[2][1] + m[3][1],
            v.x * m[0][2] + v.y * m[1][2] + v.z * m[2][2] + m[3][2],
        );
        let w = v.x * m[0][3] + v.y * m[1][3] + v.z * m[2][3] + m[3][3];
        if w != 0.0 {
            out = out * (1.0 / w);
        }
        out
    }
}

impl Mul for Mat4 {
    type Output = Self;

    /// Standard matrix product. Not commutative: with row-vector points,
    /// `a * b` applies `a` first.
    fn mul(self, rhs: Self) -> Self {
        let mut matrix = Self::default();
        for r in 0..4 {
            for c in 0..4 {
                matrix.m[r][c] = self.m[r][0] * rhs.m[0][c]
                    + self.m[r][1] * rhs.m[1][c]
                    + self.m[r][2] * rhs.m[2][c]
                    + self.m[r][3] * rhs.m[3][c];
            }
        }
        matrix
    }
}
