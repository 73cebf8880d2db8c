use crate::aabb::Aabb;
use crate::float_types::Real;
use nalgebra::{Matrix4, Translation3};

/// Affine transformations and bounding queries shared by geometry containers
pub trait MeshOps: Sized + Clone {
    fn transform(&self, matrix: &Matrix4<Real>) -> Self;
    fn bounding_box(&self) -> Aabb;

    /// Returns a new Self translated by x, y, and z.
    fn translate(&self, x: Real, y: Real, z: Real) -> Self {
        self.transform(&Translation3::new(x, y, z).to_homogeneous())
    }

    /// Returns a new Self translated along X only, so that `mins.x + maxs.x == 0`.
    ///
    /// Y and Z keep their original placement.
    fn center_x(&self) -> Self {
        let aabb = self.bounding_box();
        if aabb.is_empty() {
            return self.clone();
        }
        self.translate(-0.5 * (aabb.mins.x + aabb.maxs.x), 0.0, 0.0)
    }
}
