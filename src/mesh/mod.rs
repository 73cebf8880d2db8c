//! `Mesh` struct and implementations of the `MeshOps` trait for `Mesh`

use crate::aabb::Aabb;
use crate::float_types::Real;
use crate::mesh::{polygon::Polygon, vertex::Vertex};
use crate::traits::MeshOps;
use crate::triangulated::Triangulated3D;
use nalgebra::Matrix4;
use std::sync::OnceLock;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub mod plane;
pub mod polygon;
pub mod shapes;
pub mod vertex;

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    /// 3D polygons for volumetric shapes
    pub polygons: Vec<Polygon>,

    /// Lazily calculated AABB that spans `polygons`.
    pub bounding_box: OnceLock<Aabb>,
}

impl Mesh {
    /// Build a Mesh from an owned polygon list
    pub fn from_polygons(polygons: Vec<Polygon>) -> Self {
        Mesh { polygons, bounding_box: OnceLock::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}

impl MeshOps for Mesh {
    /// Apply an arbitrary 3D transform (as a 4x4 matrix) to Mesh.
    ///
    /// Normals use the inverse transpose so they stay perpendicular under
    /// non-uniform scaling; planes are recomputed from the moved vertices.
    fn transform(&self, matrix: &Matrix4<Real>) -> Mesh {
        let normal_matrix =
            matrix.try_inverse().map(|inv| inv.transpose()).unwrap_or_else(Matrix4::identity);

        let move_polygon = |poly: &Polygon| {
            let vertices =
                poly.vertices.iter().map(|v| v.transformed(matrix, &normal_matrix)).collect();
            Polygon::new(vertices)
        };

        #[cfg(feature = "parallel")]
        let polygons: Vec<Polygon> = self.polygons.par_iter().map(move_polygon).collect();

        #[cfg(not(feature = "parallel"))]
        let polygons: Vec<Polygon> = self.polygons.iter().map(move_polygon).collect();

        Mesh::from_polygons(polygons)
    }

    /// Returns an [`Aabb`] spanning every vertex of the Mesh.
    fn bounding_box(&self) -> Aabb {
        *self.bounding_box.get_or_init(|| {
            self.polygons.iter().fold(Aabb::empty(), |acc, poly| acc.merged(&poly.bounding_box()))
        })
    }
}

impl Triangulated3D for Mesh {
    fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut([Vertex; 3]),
    {
        for poly in &self.polygons {
            for tri in poly.triangulate() {
                f(tri);
            }
        }
    }
}
