use cgmath::{Vector2, Vector3};

pub trait Position {
    fn position(&self) -> Vector3<f32>;
}

impl Position for Vector3<f32> {
    fn position(&self) -> Vector3<f32> {
        *self
    }
}

/// Mesh vertex with its position and, if the mesh is textured, its
/// texture coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vertex {
    pub position: Vector3<f32>,
    pub texcoords: Option<Vector2<f32>>
}

impl Position for Vertex {
    fn position(&self) -> Vector3<f32> {
        self.position
    }
}
