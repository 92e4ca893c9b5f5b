//! Serializers for sampled point clouds.

use crate::cloud::PointCloud;
use crate::error::Result;

pub mod pcache;

pub trait PointCloudSink {
    fn serialize(&self, cloud: &PointCloud) -> Result<()>;
}
