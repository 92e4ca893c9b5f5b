use rand::distributions::Distribution;
use rand::Rng;

use crate::error::{Error, Result};
use crate::geom::mesh::Mesh;
use crate::geom::tri::Triangle;
use crate::geom::vtx::Position;

/// Cumulative area table over the triangles of a mesh, used to select
/// triangles with a probability proportional to their area.
///
/// The table is built once per mesh and reused for every draw.
#[derive(Debug, Clone)]
pub struct TriangleAreaIndex {
    /// Running sum of triangle areas in mesh order, the last entry equals
    /// `total_area`
    cumulative_areas: Vec<f64>,
    total_area: f64
}

impl TriangleAreaIndex {
    /// Builds the index for the given triangles, in iteration order.
    ///
    /// Fails if there are no triangles, or if their areas do not add up to a
    /// finite, positive total.
    pub fn new<I, V>(triangles: I) -> Result<TriangleAreaIndex>
        where I : IntoIterator<Item = Triangle<V>>,
            V : Position
    {
        let mut total_area = 0.0_f64;

        let cumulative_areas : Vec<f64> = triangles.into_iter()
            .map(|t| {
                total_area += t.area() as f64;
                total_area
            })
            .collect();

        if cumulative_areas.is_empty() {
            return Err(Error::EmptyMesh);
        }

        if !(total_area > 0.0 && total_area.is_finite()) {
            return Err(Error::DegenerateMesh(total_area));
        }

        debug!("Indexed {} triangles with a total area of {}", cumulative_areas.len(), total_area);

        Ok(TriangleAreaIndex { cumulative_areas, total_area })
    }

    pub fn from_mesh(mesh: &Mesh) -> Result<TriangleAreaIndex> {
        TriangleAreaIndex::new(mesh.triangles())
    }

    pub fn total_area(&self) -> f64 {
        self.total_area
    }

    pub fn cumulative_areas(&self) -> &[f64] {
        &self.cumulative_areas
    }

    pub fn triangle_count(&self) -> usize {
        self.cumulative_areas.len()
    }

    /// Finds the first triangle whose cumulative area is at least `r`.
    ///
    /// `r` is expected in `[0, total_area)`. Zero-area triangles repeat the
    /// cumulative area of their predecessor and are never the first match
    /// for any `r > 0`.
    pub fn select(&self, r: f64) -> usize {
        let idx = self.cumulative_areas.partition_point(|&area| area < r);
        // Only reachable if r is not below the total area
        idx.min(self.cumulative_areas.len() - 1)
    }
}

impl Distribution<usize> for TriangleAreaIndex {
    /// Draws a triangle index with probability proportional to triangle area.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.select(rng.gen_range(0.0..self.total_area))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use cgmath::Vector3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Right triangle in the xy plane with legs of length `scale`
    fn right_triangle(offset: f32, scale: f32) -> Triangle<Vector3<f32>> {
        Triangle::new(
            Vector3::new(offset, 0.0, 0.0),
            Vector3::new(offset + scale, 0.0, 0.0),
            Vector3::new(offset, scale, 0.0)
        )
    }

    #[test]
    fn cumulative_table_ends_in_total_area() {
        let index = TriangleAreaIndex::new(vec![right_triangle(0.0, 1.0), right_triangle(5.0, 2.0)]).unwrap();

        assert_eq!(2, index.triangle_count());
        assert!((index.cumulative_areas()[0] - 0.5).abs() < 1e-6);
        assert!((index.cumulative_areas()[1] - 2.5).abs() < 1e-6);
        assert_eq!(index.cumulative_areas()[1], index.total_area());
    }

    #[test]
    fn select_uses_lower_bound() {
        let index = TriangleAreaIndex::new(vec![right_triangle(0.0, 1.0), right_triangle(5.0, 2.0)]).unwrap();
        let first_bucket_end = index.cumulative_areas()[0];

        assert_eq!(0, index.select(0.0));
        assert_eq!(0, index.select(first_bucket_end));
        assert_eq!(1, index.select(first_bucket_end + 1e-6));
        assert_eq!(1, index.select(2.4));
    }

    #[test]
    fn zero_area_triangle_is_skipped() {
        let degenerate = Triangle::new(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(2.0, 2.0, 2.0)
        );
        let index = TriangleAreaIndex::new(vec![right_triangle(0.0, 1.0), degenerate, right_triangle(5.0, 1.0)]).unwrap();

        assert_eq!(index.cumulative_areas()[0], index.cumulative_areas()[1]);
        assert_eq!(0, index.select(0.5));
        assert_eq!(2, index.select(0.5 + 1e-6));

        let mut rng = StdRng::seed_from_u64(42);
        assert!((0..10_000).all(|_| index.sample(&mut rng) != 1));
    }

    #[test]
    fn empty_mesh_is_rejected() {
        match TriangleAreaIndex::new(Vec::<Triangle<Vector3<f32>>>::new()) {
            Err(Error::EmptyMesh) => (),
            other => panic!("Expected empty mesh error, got {:?}", other)
        }
    }

    #[test]
    fn fully_degenerate_mesh_is_rejected() {
        let degenerate = Triangle::new(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(2.0, 0.0, 0.0)
        );

        match TriangleAreaIndex::new(vec![degenerate]) {
            Err(Error::DegenerateMesh(_)) => (),
            other => panic!("Expected degenerate mesh error, got {:?}", other)
        }
    }

    #[test]
    fn selection_is_proportional_to_area() {
        // Areas 0.5 and 1.5, so a quarter of the draws should hit the first
        let index = TriangleAreaIndex::new(vec![right_triangle(0.0, 1.0), right_triangle(5.0, 3.0_f32.sqrt())]).unwrap();
        let mut rng = StdRng::seed_from_u64(1234);

        let draws = 100_000;
        let first_hits = (0..draws)
            .filter(|_| index.sample(&mut rng) == 0)
            .count();

        let fraction = first_hits as f64 / draws as f64;
        assert!((fraction - 0.25).abs() < 0.01, "Expected about a quarter of hits, got {}", fraction);
    }
}
