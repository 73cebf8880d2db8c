//! Struct and functions for working with planar `Polygon`s without holes

use crate::aabb::Aabb;
use crate::float_types::Real;
use crate::mesh::plane::Plane;
use crate::mesh::vertex::Vertex;
use nalgebra::{Point3, Vector3};
use std::sync::OnceLock;

/// A convex polygon, defined by a list of vertices and the plane it lies in.
///
/// Vertex order is counter-clockwise when seen from outside the solid.
#[derive(Debug, Clone)]
pub struct Polygon {
    /// Vertices defining the Polygon's shape
    pub vertices: Vec<Vertex>,

    /// The plane on which this Polygon lies, used for flat normals
    pub plane: Plane,

    /// Lazily‑computed bounding box of the Polygon
    pub bounding_box: OnceLock<Aabb>,
}

impl PartialEq for Polygon {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices && self.plane == other.plane
    }
}

impl Polygon {
    /// Create a polygon from vertices, computing its plane from their winding.
    pub fn new(vertices: Vec<Vertex>) -> Self {
        let plane = Plane::from_vertices(&vertices);
        Polygon { vertices, plane, bounding_box: OnceLock::new() }
    }

    /// Create a flat-shaded polygon from bare positions: every vertex gets the plane normal.
    pub fn from_points(points: &[Point3<Real>]) -> Self {
        let plane = Plane::from_vertices(
            &points.iter().map(|p| Vertex::new(*p, Vector3::zeros())).collect::<Vec<_>>(),
        );
        let normal = plane.normal();
        Polygon {
            vertices: points.iter().map(|p| Vertex::new(*p, normal)).collect(),
            plane,
            bounding_box: OnceLock::new(),
        }
    }

    /// Axis aligned bounding box of this Polygon (cached after first call)
    pub fn bounding_box(&self) -> Aabb {
        *self.bounding_box.get_or_init(|| Aabb::from_points(self.vertices.iter().map(|v| &v.pos)))
    }

    /// Fan-triangulate this polygon around its first vertex.
    ///
    /// Valid for the convex polygons produced by this crate's shape builders.
    pub fn triangulate(&self) -> Vec<[Vertex; 3]> {
        if self.vertices.len() < 3 {
            return Vec::new();
        }
        let anchor = &self.vertices[0];
        self.vertices
            .windows(2)
            .skip(1)
            .map(|pair| [anchor.clone(), pair[0].clone(), pair[1].clone()])
            .collect()
    }
}
