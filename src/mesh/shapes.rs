//! 3D Shapes as `Mesh`s

use crate::float_types::{EPSILON, Real, TAU};
use crate::mesh::Mesh;
use crate::mesh::polygon::Polygon;
use crate::mesh::vertex::Vertex;
use nalgebra::{Point3, Vector3};

impl Mesh {
    /// A capped frustum (truncated cone) along the Y axis, centred on the origin.
    ///
    /// The top ring sits at `y = +height/2` with `radius_top`, the bottom ring at
    /// `y = -height/2` with `radius_bottom`. Ring points start on +Z and sweep towards +X.
    /// A cap whose radius is (near) zero is omitted, giving a cone.
    ///
    /// Side vertices carry smooth normals tilted by the wall slope; cap vertices carry
    /// the flat ±Y normal.
    pub fn frustum(radius_top: Real, radius_bottom: Real, height: Real, segments: usize) -> Mesh {
        let segments = segments.max(3);
        let half = height * 0.5;
        let slope =
            if height.abs() > EPSILON { (radius_bottom - radius_top) / height } else { 0.0 };

        let ring = |radius: Real, y: Real, i: usize| -> Vertex {
            let theta = (i % segments) as Real / segments as Real * TAU;
            let (sin, cos) = theta.sin_cos();
            let normal = Vector3::new(sin, slope, cos).normalize();
            Vertex::new(Point3::new(radius * sin, y, radius * cos), normal)
        };

        let mut polygons = Vec::with_capacity(segments * 3);
        for i in 0..segments {
            // Side quad, counter-clockwise from outside
            polygons.push(Polygon::new(vec![
                ring(radius_bottom, -half, i),
                ring(radius_bottom, -half, i + 1),
                ring(radius_top, half, i + 1),
                ring(radius_top, half, i),
            ]));

            if radius_top > EPSILON {
                let up = Vector3::y();
                let mut a = ring(radius_top, half, i);
                let mut b = ring(radius_top, half, i + 1);
                a.normal = up;
                b.normal = up;
                polygons.push(Polygon::new(vec![
                    Vertex::new(Point3::new(0.0, half, 0.0), up),
                    a,
                    b,
                ]));
            }

            if radius_bottom > EPSILON {
                let down = -Vector3::y();
                let mut a = ring(radius_bottom, -half, i + 1);
                let mut b = ring(radius_bottom, -half, i);
                a.normal = down;
                b.normal = down;
                polygons.push(Polygon::new(vec![
                    Vertex::new(Point3::new(0.0, -half, 0.0), down),
                    a,
                    b,
                ]));
            }
        }

        Mesh::from_polygons(polygons)
    }

    /// A torus section sweeping `arc` radians about +Z, starting on the +X axis.
    ///
    /// The tube ends of a partial arc are left open. Vertices carry the exact
    /// tube-surface normal.
    pub fn torus_arc(
        major_r: Real,
        minor_r: Real,
        radial_segments: usize,
        tubular_segments: usize,
        arc: Real,
    ) -> Mesh {
        let radial_segments = radial_segments.max(3);
        let tubular_segments = tubular_segments.max(1);

        let point = |j: usize, i: usize| -> Vertex {
            let v = j as Real / radial_segments as Real * TAU;
            let u = i as Real / tubular_segments as Real * arc;
            let (sin_u, cos_u) = u.sin_cos();
            let (sin_v, cos_v) = v.sin_cos();
            let pos = Point3::new(
                (major_r + minor_r * cos_v) * cos_u,
                (major_r + minor_r * cos_v) * sin_u,
                minor_r * sin_v,
            );
            let center = Point3::new(major_r * cos_u, major_r * sin_u, 0.0);
            let normal = (pos - center).try_normalize(EPSILON).unwrap_or_else(Vector3::z);
            Vertex::new(pos, normal)
        };

        let mut polygons = Vec::with_capacity(radial_segments * tubular_segments);
        for j in 1..=radial_segments {
            for i in 1..=tubular_segments {
                polygons.push(Polygon::new(vec![
                    point(j, i - 1),
                    point(j - 1, i - 1),
                    point(j - 1, i),
                    point(j, i),
                ]));
            }
        }

        Mesh::from_polygons(polygons)
    }
}
