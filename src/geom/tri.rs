//!
//! Contains functionality for triangles.
//!

use cgmath::prelude::*;
use cgmath::Vector3;

use super::vtx::Position;

use std::ops::{Add, Mul};

/// The `Triangle<V>` type encapsulates three vertices.
/// A vertex must implement `geom::vtx::Position` and hence has a position
/// in 3D space.
#[derive(Debug, Copy, Clone)]
pub struct Triangle<V>
    where V : Position
{
    pub vertices: [V; 3]
}

/// Maps two independent uniform random numbers in `[0, 1)` to barycentric
/// weights of a point that is uniformly distributed over the area of a
/// triangle.
///
/// `r1 = 0` yields the first vertex, `r1 = 1, r2 = 0` the second and
/// `r1 = 1, r2 = 1` the third.
pub fn sample_weights(r1: f32, r2: f32) -> [f32; 3] {
    let r1_sqrt = r1.sqrt();

    [
        1.0 - r1_sqrt,
        r1_sqrt * (1.0 - r2),
        r1_sqrt * r2
    ]
}

/// Blends three vertex attributes with the given barycentric weights.
///
/// Works for any attribute that can be scaled and summed, e.g. positions
/// and texture coordinates alike.
pub fn interpolate<T>(attributes: [T; 3], weights: [f32; 3]) -> T
    where T: Mul<f32, Output = T> + Add<T, Output = T>
{
    let [a, b, c] = attributes;
    a * weights[0] + b * weights[1] + c * weights[2]
}

impl<V> Triangle<V>
    where V : Position
{
    pub fn new(vertex0: V, vertex1: V, vertex2: V) -> Triangle<V> {
        Triangle {
            vertices: [vertex0, vertex1, vertex2]
        }
    }

    pub fn positions(&self) -> [Vector3<f32>; 3] {
        [
            self.vertices[0].position(),
            self.vertices[1].position(),
            self.vertices[2].position()
        ]
    }

    /// Calculates the area of the triangle from the magnitude of the cross
    /// product of two of its edges. Winding does not matter.
    pub fn area(&self) -> f32 {
        let [p0, p1, p2] = self.positions();
        0.5 * (p1 - p0).cross(p2 - p0).magnitude()
    }

    /// Unit normal of the triangle, assuming counter-clockwise winding when
    /// viewed from the front.
    ///
    /// Degenerate triangles have no meaningful orientation, they get the
    /// z axis so that the result is still of unit length.
    pub fn normal(&self) -> Vector3<f32> {
        let [a, b, c] = self.positions();
        let normal = (a - c).cross(b - c);
        let magnitude = normal.magnitude();

        if magnitude > 0.0 && magnitude.is_finite() {
            normal / magnitude
        } else {
            Vector3::unit_z()
        }
    }

    /// Position on the triangle at the given barycentric weights.
    pub fn position_at_bary(&self, weights: [f32; 3]) -> Vector3<f32> {
        interpolate(self.positions(), weights)
    }

    /// Interpolates an arbitrary vertex attribute at the given barycentric weights.
    pub fn interpolate_at_bary<F, T>(&self, weights: [f32; 3], vertex_to_val_fn: F) -> T
        where F: Fn(&V) -> T,
            T: Mul<f32, Output = T> + Add<T, Output = T>
    {
        interpolate(
            [
                vertex_to_val_fn(&self.vertices[0]),
                vertex_to_val_fn(&self.vertices[1]),
                vertex_to_val_fn(&self.vertices[2])
            ],
            weights
        )
    }
}
