//! Struct and functions for working with `Vertex`s from which `Polygon`s are composed.

use crate::float_types::Real;
use nalgebra::{Matrix4, Point3, Vector3};

/// A vertex of a polygon, holding position and normal.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub pos: Point3<Real>,
    pub normal: Vector3<Real>,
}

impl Vertex {
    /// Create a new [`Vertex`].
    ///
    /// * `pos`    – the position in model space
    /// * `normal` – (optionally non‑unit) normal; it is **copied verbatim**
    pub const fn new(pos: Point3<Real>, normal: Vector3<Real>) -> Self {
        Vertex { pos, normal }
    }

    /// Map this vertex through an affine `matrix`.
    ///
    /// Positions go through `matrix` directly; normals go through `normal_matrix`
    /// (the inverse transpose of `matrix`) and are re-normalized, so non-uniform
    /// scales keep them perpendicular to the surface.
    pub fn transformed(&self, matrix: &Matrix4<Real>, normal_matrix: &Matrix4<Real>) -> Vertex {
        let pos = matrix.transform_point(&self.pos);
        let normal = normal_matrix.transform_vector(&self.normal);
        let normal = normal.try_normalize(Real::EPSILON).unwrap_or(normal);
        Vertex::new(pos, normal)
    }
}
