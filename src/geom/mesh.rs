use std::path::Path;

use cgmath::{Vector2, Vector3};

use crate::error::{Error, Result};
use crate::geom::tri::Triangle;
use crate::geom::vtx::Vertex;

/// Indexed triangle mesh.
///
/// Positions and texture coordinates are stored flat, like `tobj` delivers
/// them, with three floats per position and two per texture coordinate.
/// Every three consecutive indices form a triangle.
#[derive(Debug, Clone)]
pub struct Mesh {
    indices: Vec<u32>,
    positions: Vec<f32>,
    /// Empty if the mesh is not textured
    texcoords: Vec<f32>
}

impl Mesh {
    /// Creates a new mesh, checking that the indices form whole triangles
    /// and that every index refers to an existing vertex.
    pub fn new(indices: Vec<u32>, positions: Vec<f32>, texcoords: Vec<f32>) -> Result<Mesh> {
        if positions.len() % 3 != 0 {
            return Err(Error::MalformedMesh(format!("{} position components are not a multiple of three", positions.len())));
        }

        if indices.len() % 3 != 0 {
            return Err(Error::MalformedMesh(format!("{} indices do not form whole triangles", indices.len())));
        }

        let vertex_count = positions.len() / 3;

        if !texcoords.is_empty() && texcoords.len() != 2 * vertex_count {
            return Err(Error::MalformedMesh(format!(
                "Expected {} texture coordinate components for {} vertices, got {}",
                2 * vertex_count, vertex_count, texcoords.len()
            )));
        }

        if let Some(&index) = indices.iter().find(|i| (**i as usize) >= vertex_count) {
            return Err(Error::InvalidIndex { index, vertex_count });
        }

        Ok(Mesh { indices, positions, texcoords })
    }

    /// Loads the obj file at the given file system path, triangulating
    /// polygons along the way. All contained models will be merged into a
    /// single mesh.
    ///
    /// Texture coordinates are kept as stored in the file, with the origin
    /// at the bottom left. If any model lacks them, the resulting mesh is
    /// untextured.
    pub fn load_from_file<P: AsRef<Path>>(obj_file_path: P) -> Result<Mesh> {
        let load_options = tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        };

        let (models, _materials) = tobj::load_obj(obj_file_path.as_ref(), &load_options)?;

        let textured = models.iter()
            .all(|m| !m.mesh.texcoords.is_empty());

        if !textured && models.iter().any(|m| !m.mesh.texcoords.is_empty()) {
            warn!("Some models in {:?} have no texture coordinates, dropping texture coordinates of all models", obj_file_path.as_ref());
        }

        let mut indices = Vec::new();
        let mut positions = Vec::new();
        let mut texcoords = Vec::new();

        for model in models {
            let index_base = (positions.len() / 3) as u32;

            indices.extend(model.mesh.indices.iter().map(|i| index_base + i));
            positions.extend(model.mesh.positions);

            if textured {
                texcoords.extend(model.mesh.texcoords);
            }
        }

        Mesh::new(indices, positions, texcoords)
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn has_texcoords(&self) -> bool {
        !self.texcoords.is_empty()
    }

    pub fn vertex(&self, idx: usize) -> Vertex {
        let positions = &self.positions;
        let position = Vector3::new(positions[3*idx], positions[3*idx+1], positions[3*idx+2]);

        let texcoords = if self.has_texcoords() {
            Some(Vector2::new(self.texcoords[2*idx], self.texcoords[2*idx+1]))
        } else {
            None
        };

        Vertex { position, texcoords }
    }

    /// Gets the triangle with the given index, in the order declared in the mesh.
    pub fn triangle(&self, triangle_idx: usize) -> Triangle<Vertex> {
        let i = &self.indices[3*triangle_idx..3*triangle_idx+3];

        Triangle::new(
            self.vertex(i[0] as usize),
            self.vertex(i[1] as usize),
            self.vertex(i[2] as usize)
        )
    }

    /// Returns an iterator over the triangles in mesh order.
    pub fn triangles<'a>(&'a self) -> impl Iterator<Item = Triangle<Vertex>> + 'a {
        (0..self.triangle_count()).map(move |idx| self.triangle(idx))
    }
}
