//! Contains the geometric primitives that sampling relies on:
//! vertices, triangles and indexed meshes.

pub mod mesh;
pub mod tri;
pub mod vtx;
