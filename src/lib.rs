//! Converts textured triangle meshes into point clouds.
//!
//! Points are drawn with a density proportional to surface area. Each point
//! can carry the normal of the triangle it was drawn from and the color of
//! the texel under its interpolated texture coordinate.

#[macro_use]
extern crate log;
extern crate cgmath;
extern crate image;
extern crate rand;
extern crate thiserror;
extern crate tobj;

pub mod cloud;
pub mod error;
pub mod geom;
pub mod sampling;
pub mod sink;
pub mod texture;

pub use crate::cloud::{PointCloud, SampledPoint};
pub use crate::error::{Error, Result};
pub use crate::geom::mesh::Mesh;
pub use crate::sampling::{Diagnostics, OutOfBoundsTexel, Sampler, SamplerBuilder, Sampling};
pub use crate::sink::PointCloudSink;
pub use crate::sink::pcache::PcacheSink;
pub use crate::texture::{Texel, Texture};
