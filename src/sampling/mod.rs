//! Area-weighted sampling of points on mesh surfaces.

mod area_index;
mod sampler;

pub use self::area_index::TriangleAreaIndex;
pub use self::sampler::{
    Diagnostics,
    OutOfBoundsTexel,
    Sampler,
    SamplerBuilder,
    Sampling,
    DEFAULT_SAMPLE_COUNT
};
