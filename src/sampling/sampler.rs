use std::time::Instant;

use cgmath::Vector2;
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cloud::{PointCloud, SampledPoint};
use crate::error::{Error, Result};
use crate::geom::mesh::Mesh;
use crate::geom::tri::{interpolate, sample_weights, Triangle};
use crate::geom::vtx::Vertex;
use crate::texture::{Texel, Texture};

use super::area_index::TriangleAreaIndex;

/// Number of samples drawn if not configured otherwise.
pub const DEFAULT_SAMPLE_COUNT: usize = 100_000;

/// A sample whose texture coordinates fell outside the texture.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OutOfBoundsTexel {
    /// Index of the affected point in the point cloud
    pub sample_idx: usize,
    pub x: i64,
    pub y: i64
}

/// Recoverable problems that occurred while sampling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    pub out_of_bounds: Vec<OutOfBoundsTexel>
}

impl Diagnostics {
    pub fn is_empty(&self) -> bool {
        self.out_of_bounds.is_empty()
    }
}

/// Point cloud together with the diagnostics collected while drawing it.
#[derive(Debug, Clone)]
pub struct Sampling {
    pub cloud: PointCloud,
    pub diagnostics: Diagnostics
}

/// Configures a `Sampler`.
///
/// # Examples
///
/// ```
/// use mesh_sampler::SamplerBuilder;
///
/// let sampler = SamplerBuilder::new()
///     .sample_count(5000)
///     .normals(true)
///     .seed(7)
///     .build()
///     .unwrap();
/// ```
pub struct SamplerBuilder {
    sample_count: usize,
    normals: bool,
    colors: bool,
    seed: Option<u64>
}

impl SamplerBuilder {
    pub fn new() -> SamplerBuilder {
        SamplerBuilder {
            sample_count: DEFAULT_SAMPLE_COUNT,
            normals: false,
            colors: false,
            seed: None
        }
    }

    pub fn sample_count(mut self, sample_count: usize) -> SamplerBuilder {
        self.sample_count = sample_count;
        self
    }

    /// Attach the normal of the originating triangle to each point.
    pub fn normals(mut self, normals: bool) -> SamplerBuilder {
        self.normals = normals;
        self
    }

    /// Look up a texel color for each point. Requires a textured mesh and a texture.
    pub fn colors(mut self, colors: bool) -> SamplerBuilder {
        self.colors = colors;
        self
    }

    /// Seeds the random number generator so that runs are reproducible.
    /// Without a seed, the generator is seeded from system entropy.
    pub fn seed(mut self, seed: u64) -> SamplerBuilder {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<Sampler> {
        if self.sample_count == 0 {
            return Err(Error::Config(String::from("sample count must be positive")));
        }

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy()
        };

        Ok(Sampler {
            sample_count: self.sample_count,
            normals: self.normals,
            colors: self.colors,
            rng
        })
    }
}

impl Default for SamplerBuilder {
    fn default() -> SamplerBuilder {
        SamplerBuilder::new()
    }
}

/// Draws area-weighted point clouds from meshes.
///
/// Owns its random number generator, consecutive calls to `sample` continue
/// the same random sequence.
pub struct Sampler {
    sample_count: usize,
    normals: bool,
    colors: bool,
    rng: StdRng
}

impl Sampler {
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Draws the configured amount of points from the surface of the mesh.
    ///
    /// The texture is only consulted if colors were requested. Configuration
    /// problems are reported before anything is drawn; texels that are out of
    /// bounds are collected in the diagnostics instead.
    pub fn sample(&mut self, mesh: &Mesh, texture: Option<&Texture>) -> Result<Sampling> {
        let texture = if self.colors {
            if !mesh.has_texcoords() {
                return Err(Error::MissingTexcoords);
            }

            Some(texture.ok_or(Error::MissingTexture)?)
        } else {
            None
        };

        let index = TriangleAreaIndex::from_mesh(mesh)?;

        info!("Sampling {} points on {} triangles with a total area of {}...", self.sample_count, index.triangle_count(), index.total_area());
        let start_time = Instant::now();

        let mut cloud = PointCloud::with_capacity(self.sample_count, self.normals, self.colors);
        let mut diagnostics = Diagnostics::default();

        for sample_idx in 0..self.sample_count {
            let triangle_idx = index.sample(&mut self.rng);
            let tri = mesh.triangle(triangle_idx);

            let r1 = self.rng.gen::<f32>();
            let r2 = self.rng.gen::<f32>();
            let weights = sample_weights(r1, r2);

            let normal = if self.normals {
                Some(tri.normal())
            } else {
                None
            };

            let color = match texture {
                Some(texture) => match texture.sample(texcoords_at_bary(&tri, weights)?) {
                    Texel::Color(color) => Some(color),
                    Texel::OutOfBounds { x, y } => {
                        debug!("Texel ({}, {}) of sample {} is out of bounds", x, y, sample_idx);
                        diagnostics.out_of_bounds.push(OutOfBoundsTexel { sample_idx, x, y });
                        None
                    }
                },
                None => None
            };

            cloud.push(SampledPoint {
                position: tri.position_at_bary(weights),
                normal,
                color
            });
        }

        info!("Ok, took {}ms", start_time.elapsed().as_millis());

        if !diagnostics.is_empty() {
            warn!(
                "{} of {} samples had texture coordinates outside the texture, their color is unset",
                diagnostics.out_of_bounds.len(), self.sample_count
            );
        }

        Ok(Sampling { cloud, diagnostics })
    }
}

fn texcoords_at_bary(tri: &Triangle<Vertex>, weights: [f32; 3]) -> Result<Vector2<f32>> {
    match (tri.vertices[0].texcoords, tri.vertices[1].texcoords, tri.vertices[2].texcoords) {
        (Some(a), Some(b), Some(c)) => Ok(interpolate([a, b, c], weights)),
        _ => Err(Error::MissingTexcoords)
    }
}
