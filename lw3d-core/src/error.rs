/// Error types for the transform pipeline
use thiserror::Error;

/// Errors produced by the math layer.
///
/// The taxonomy is deliberately narrow: a degenerate homogeneous `w` during
/// the perspective divide is NOT an error (the divide is skipped and the
/// point passes through), so the only failure mode left is a zero-length
/// vector reaching `normalize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// `normalize` was called on a vector of length zero. Surfaces from
    /// `Mat4::look_at` when the target coincides with the camera position
    /// or `up` is parallel to the forward direction.
    #[error("cannot normalize a zero-length vector")]
    ZeroLengthVector,
}
