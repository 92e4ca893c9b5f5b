use cgmath::Vector3;

/// A single point drawn from a mesh surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SampledPoint {
    pub position: Vector3<f32>,
    /// Unit normal of the triangle the point was drawn from, if requested
    pub normal: Option<Vector3<f32>>,
    /// Texel color under the point, if requested and the texture coordinate
    /// was in bounds
    pub color: Option<[u8; 3]>
}

/// Point cloud in the order the points were drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud {
    points: Vec<SampledPoint>,
    has_normals: bool,
    has_colors: bool
}

impl PointCloud {
    pub fn with_capacity(capacity: usize, has_normals: bool, has_colors: bool) -> PointCloud {
        PointCloud {
            points: Vec::with_capacity(capacity),
            has_normals,
            has_colors
        }
    }

    pub fn push(&mut self, point: SampledPoint) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[SampledPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the points were sampled with normals.
    pub fn has_normals(&self) -> bool {
        self.has_normals
    }

    /// Whether the points were sampled with colors. Individual points may
    /// still lack a color if their texel was out of bounds.
    pub fn has_colors(&self) -> bool {
        self.has_colors
    }

    pub fn iter(&self) -> ::std::slice::Iter<SampledPoint> {
        self.points.iter()
    }
}

impl IntoIterator for PointCloud {
    type Item = SampledPoint;
    type IntoIter = ::std::vec::IntoIter<SampledPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}
