/// Geometry primitives for the point renderer
use nalgebra::{Point3, Vector3};

/// Corners of the unit cube spanning `[0, 1]³`, in vertex-buffer order
const UNIT_CUBE: [[f32; 3]; 8] = [
    [0.0, 0.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 0.0, 1.0],
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
    [1.0, 1.0, 0.0],
    [0.0, 1.0, 0.0],
];

/// A mesh is a fixed-length vertex buffer.
///
/// The buffer is sized once at construction; nothing exposes a way to push or
/// remove vertices afterwards, so the vertex count never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Point3<f32>>,
}

impl Mesh {
    pub fn from_vertices(vertices: Vec<Point3<f32>>) -> Self {
        Self { vertices }
    }

    /// The eight corners of a unit cube with one corner at the origin
    pub fn unit_cube() -> Self {
        Self::from_vertices(
            UNIT_CUBE
                .iter()
                .map(|&[x, y, z]| Point3::new(x, y, z))
                .collect(),
        )
    }

    pub fn vertices(&self) -> &[Point3<f32>] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Move every vertex by `offset`
    pub fn translate(&mut self, offset: &Vector3<f32>) {
        for vertex in &mut self.vertices {
            *vertex += *offset;
        }
    }
}
