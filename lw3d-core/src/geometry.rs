/// Wireframe geometry primitives
use crate::vector::Vec3;

/// One 3D edge to be transformed and, after projection, rasterized.
/// Undirected: the endpoint order carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Vec3,
    pub b: Vec3,
}

impl Segment {
    pub const fn new(a: Vec3, b: Vec3) -> Self {
        Self { a, b }
    }
}

/// A projected edge in pixel space, ready to be stroked on a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2 {
    pub a: [f32; 2],
    pub b: [f32; 2],
}

/// A wireframe mesh: an ordered list of edges. Order is draw order only.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub segments: Vec<Segment>,
}

impl Mesh {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// The 12 edges of the unit cube spanning `(0,0,0)` to `(1,1,1)`.
    pub fn unit_cube() -> Self {
        let edge = |ax, ay, az, bx, by, bz| {
            Segment::new(Vec3::new(ax, ay, az), Vec3::new(bx, by, bz))
        };
        Self::new(vec![
            // front face
            edge(0.0, 0.0, 0.0, 0.0, 1.0, 0.0),
            edge(0.0, 1.0, 0.0, 1.0, 1.0, 0.0),
            edge(1.0, 1.0, 0.0, 1.0, 0.0, 0.0),
            edge(1.0, 0.0, 0.0, 0.0, 0.0, 0.0),
            // back face
            edge(0.0, 0.0, 1.0, 0.0, 1.0, 1.0),
            edge(0.0, 1.0, 1.0, 1.0, 1.0, 1.0),
            edge(1.0, 1.0, 1.0, 1.0, 0.0, 1.0),
            edge(1.0, 0.0, 1.0, 0.0, 0.0, 1.0),
            // connecting edges
            edge(0.0, 0.0, 0.0, 0.0, 0.0, 1.0),
            edge(1.0, 0.0, 0.0, 1.0, 0.0, 1.0),
            edge(1.0, 1.0, 0.0, 1.0, 1.0, 1.0),
            edge(0.0, 1.0, 0.0, 0.0, 1.0, 1.0),
        ])
    }
}
