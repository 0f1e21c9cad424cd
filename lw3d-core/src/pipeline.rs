/// Per-frame transform pipeline
///
/// Composes model, view, and projection into one matrix each frame, pushes
/// every mesh edge through it, and hands pixel-space segments to a
/// [`Surface`]. The pipeline owns the animation state but not the frame
/// loop; the front-end drives it with measured elapsed time.
use log::{debug, trace};

use crate::camera::Camera;
use crate::error::MathError;
use crate::geometry::{Mesh, Segment2};
use crate::matrix::Mat4;
use crate::vector::Vec3;

/// Raster surface the pipeline draws on.
///
/// Covers both viewport duties (dimensions, per-frame clear) and drawing
/// duties (stroking one pixel-space segment). Strokes are expected to be
/// synchronous and to leave the pipeline's own state alone.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Wipe the surface ahead of a new frame's strokes.
    fn clear(&mut self);
    /// Draw a straight line between the segment's two pixel-space points.
    fn stroke(&mut self, segment: Segment2);
}

/// Fixed pipeline parameters, applied once at construction.
#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// How far the mesh is pushed along +z in front of the camera.
    pub mesh_distance: f32,
    /// Spin angular velocity in radians per second.
    pub spin_rate: f32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 90.0,
            near: 0.1,
            far: 1000.0,
            mesh_distance: 3.0,
            // One full turn every 12 seconds; at a 75 Hz refresh this is
            // the classic pi/6 * 1/75 per-frame step.
            spin_rate: std::f32::consts::FRAC_PI_6,
        }
    }
}

/// The renderer core: mesh, camera, projection, and spin state.
pub struct Pipeline {
    mesh: Mesh,
    pub camera: Camera,
    config: PipelineConfig,
    projection: Mat4,
    theta: f32,
}

impl Pipeline {
    /// Builds the pipeline for a surface of the given pixel dimensions.
    /// The projection matrix is fixed here and reused every frame.
    pub fn new(mesh: Mesh, config: PipelineConfig, width: u32, height: u32) -> Self {
        let aspect_ratio = height as f32 / width as f32;
        let projection =
            Mat4::perspective(config.fov_degrees, aspect_ratio, config.near, config.far);
        debug!(
            "pipeline: {}x{} surface, {} edges, fov {} deg, spin {} rad/s",
            width,
            height,
            mesh.segments.len(),
            config.fov_degrees,
            config.spin_rate
        );
        Self {
            mesh,
            camera: Camera::new(),
            config,
            projection,
            theta: 0.0,
        }
    }

    /// Current spin angle in radians.
    pub fn theta(&self) -> f32 {
        self.theta
    }

    /// Renders one frame onto `surface` and advances the spin state by
    /// `dt` seconds of animation time.
    ///
    /// The combined transform is rebuilt from scratch each frame:
    /// rotation, then translation away from the camera, then the view and
    /// projection stages, applied in that order to every edge endpoint.
    pub fn render_frame<S: Surface>(&mut self, surface: &mut S, dt: f32) -> Result<(), MathError> {
        surface.clear();

        let rotation = (Mat4::rotation_x(self.theta) * Mat4::rotation_z(self.theta))
            * Mat4::rotation_y(self.theta);
        let model = rotation * Mat4::translation(0.0, 0.0, self.config.mesh_distance);
        let view = self.camera.view_matrix()?;
        let combined = (model * view) * self.projection;

        let width = surface.width() as f32;
        let height = surface.height() as f32;
        for segment in &self.mesh.segments {
            let a = to_pixels(combined.transform_point(segment.a), width, height);
            let b = to_pixels(combined.transform_point(segment.b), width, height);
            trace!("stroke {:?} -> {:?}", a, b);
            surface.stroke(Segment2 { a, b });
        }

        self.theta += self.config.spin_rate * dt;
        Ok(())
    }
}

/// Maps a point from the normalized device square `[-1, 1] x [-1, 1]` to
/// pixel coordinates.
fn to_pixels(p: Vec3, width: f32, height: f32) -> [f32; 2] {
    [(p.x + 1.0) * 0.5 * width, (p.y + 1.0) * 0.5 * height]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_6;

    struct RecordingSurface {
        width: u32,
        height: u32,
        cleared: usize,
        strokes: Vec<Segment2>,
    }

    impl RecordingSurface {
        fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                cleared: 0,
                strokes: Vec::new(),
            }
        }
    }

    impl Surface for RecordingSurface {
        fn width(&self) -> u32 {
            self.width
        }
        fn height(&self) -> u32 {
            self.height
        }
        fn clear(&mut self) {
            self.cleared += 1;
            self.strokes.clear();
        }
        fn stroke(&mut self, segment: Segment2) {
            self.strokes.push(segment);
        }
    }

    fn cube_pipeline() -> Pipeline {
        Pipeline::new(Mesh::unit_cube(), PipelineConfig::default(), 800, 600)
    }

    #[test]
    fn test_frame_strokes_every_edge_once() {
        let mut surface = RecordingSurface::new(800, 600);
        let mut pipeline = cube_pipeline();
        pipeline.render_frame(&mut surface, 1.0 / 75.0).unwrap();
        assert_eq!(surface.cleared, 1);
        assert_eq!(surface.strokes.len(), 12);
    }

    #[test]
    fn test_on_axis_corner_projects_to_viewport_center() {
        // With theta == 0 and the camera at the origin, the cube corner at
        // the world origin sits on the camera's forward axis and must land
        // at the exact center of the 800x600 viewport.
        let mut surface = RecordingSurface::new(800, 600);
        let mut pipeline = cube_pipeline();
        pipeline.render_frame(&mut surface, 0.0).unwrap();
        // The first cube edge starts at (0, 0, 0).
        let [x, y] = surface.strokes[0].a;
        assert_relative_eq!(x, 400.0, epsilon = 1e-3);
        assert_relative_eq!(y, 300.0, epsilon = 1e-3);
    }

    #[test]
    fn test_theta_advances_by_fixed_step() {
        let mut surface = RecordingSurface::new(800, 600);
        let mut pipeline = cube_pipeline();
        let dt = 1.0 / 75.0;
        let mut expected = 0.0f32;
        for _ in 0..100 {
            assert_relative_eq!(pipeline.theta(), expected, epsilon = 1e-5);
            pipeline.render_frame(&mut surface, dt).unwrap();
            expected += FRAC_PI_6 * dt;
        }
        assert!(pipeline.theta() > 0.0);
    }

    #[test]
    fn test_zero_dt_leaves_theta_unchanged() {
        let mut surface = RecordingSurface::new(800, 600);
        let mut pipeline = cube_pipeline();
        pipeline.render_frame(&mut surface, 0.0).unwrap();
        assert_eq!(pipeline.theta(), 0.0);
    }

    #[test]
    fn test_camera_translation_shifts_projection() {
        let mut surface = RecordingSurface::new(800, 600);
        let mut pipeline = cube_pipeline();
        pipeline.render_frame(&mut surface, 0.0).unwrap();
        let before = surface.strokes[0].a;

        pipeline.camera.translate(Vec3::new(0.5, 0.0, 0.0));
        pipeline.render_frame(&mut surface, 0.0).unwrap();
        let after = surface.strokes[0].a;
        assert!((before[0] - after[0]).abs() > 1.0 || (before[1] - after[1]).abs() > 1.0);
    }
}
