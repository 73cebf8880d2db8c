//! Oriented planes carried by polygons.

use crate::float_types::{EPSILON, Real};
use crate::mesh::vertex::Vertex;
use nalgebra::Vector3;

/// A plane `normal · p = w` with a unit normal.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    normal: Vector3<Real>,
    w: Real,
}

impl Plane {
    /// Plane through the origin-offset `w` along the unit direction of `normal`.
    fn from_normal(normal: Vector3<Real>, w: Real) -> Self {
        let len = normal.norm();
        if len < EPSILON {
            return Plane { normal: Vector3::zeros(), w: 0.0 };
        }
        Plane { normal: normal / len, w: w / len }
    }

    /// Best-fit plane of a (possibly non-planar) vertex loop, using Newell's method.
    ///
    /// The normal follows the winding: counter-clockwise when seen from the side the
    /// normal points to. Degenerate loops get a zero normal.
    pub fn from_vertices(vertices: &[Vertex]) -> Self {
        let n = vertices.len();
        if n < 3 {
            return Plane { normal: Vector3::zeros(), w: 0.0 };
        }

        let mut normal = Vector3::zeros();
        let mut centroid = Vector3::zeros();
        for (i, v) in vertices.iter().enumerate() {
            let a = &v.pos;
            let b = &vertices[(i + 1) % n].pos;
            normal.x += (a.y - b.y) * (a.z + b.z);
            normal.y += (a.z - b.z) * (a.x + b.x);
            normal.z += (a.x - b.x) * (a.y + b.y);
            centroid += a.coords;
        }
        centroid /= n as Real;

        let w = normal.dot(&centroid);
        Plane::from_normal(normal, w)
    }

    pub const fn normal(&self) -> Vector3<Real> {
        self.normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn v(x: Real, y: Real, z: Real) -> Vertex {
        Vertex::new(Point3::new(x, y, z), Vector3::zeros())
    }

    #[test]
    fn counter_clockwise_loop_faces_up() {
        let plane = Plane::from_vertices(&[v(0.0, 0.0, 2.0), v(1.0, 0.0, 2.0), v(0.0, 1.0, 2.0)]);
        assert!((plane.normal() - Vector3::z()).norm() < 1e-5);
        assert!((plane.w - 2.0).abs() < 1e-5);
    }

    #[test]
    fn degenerate_loop_has_zero_normal() {
        let plane = Plane::from_vertices(&[v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(2.0, 0.0, 0.0)]);
        assert_eq!(plane.normal(), Vector3::zeros());
    }
}
