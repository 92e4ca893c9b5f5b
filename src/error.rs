use std::io;
use std::result;

use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Sampling parameters that cannot produce a point cloud, e.g. zero samples.
    #[error("Invalid sampling configuration: {0}")]
    Config(String),

    #[error("Mesh contains no triangles")]
    EmptyMesh,

    /// All triangles have zero area, so no triangle can be selected.
    #[error("Mesh has a total surface area of {0}, cannot select triangles")]
    DegenerateMesh(f64),

    #[error("Colors were requested but the mesh has no texture coordinates")]
    MissingTexcoords,

    #[error("Colors were requested but no texture was supplied")]
    MissingTexture,

    #[error("Vertex index {index} out of range for mesh with {vertex_count} vertices")]
    InvalidIndex { index: u32, vertex_count: usize },

    #[error("Malformed mesh: {0}")]
    MalformedMesh(String),

    #[error("Point cloud has no colors, pcache output requires them")]
    MissingColors,

    #[error("Failed to load OBJ: {0}")]
    Obj(#[from] tobj::LoadError),

    #[error("Failed to load texture: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
