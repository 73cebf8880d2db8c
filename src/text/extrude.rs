//! Bevelled extrusion of 2D glyph shapes into closed 3D surfaces.

use crate::float_types::{EPSILON, FRAC_PI_2, Real, SQRT_2};
use crate::mesh::polygon::Polygon;
use crate::text::TextOptions;
use crate::text::outline::{GlyphShape, signed_area2};
use geo::{Coord, LineString, Polygon as GeoPolygon, TriangulateEarcut};
use nalgebra::{Point2, Point3, Vector2};

/// Extrude one shape along +Z.
///
/// The body spans `z ∈ [0, depth]`. With a bevel, `segments` extra layers on each side
/// grow the outline outward by up to `bevel.size + bevel.offset` while moving from
/// `z = -bevel.thickness` (front cap) and towards `z = depth + bevel.thickness` (back cap).
pub(crate) fn extrude_shape(shape: &GlyphShape, options: &TextOptions) -> Vec<Polygon> {
    let mut rings: Vec<&[Point2<Real>]> = Vec::with_capacity(1 + shape.holes.len());
    rings.push(&shape.contour);
    rings.extend(shape.holes.iter().map(|h| h.as_slice()));

    let mut ranges = Vec::with_capacity(rings.len());
    let mut points = Vec::new();
    let mut movements = Vec::new();
    for ring in &rings {
        ranges.push((points.len(), ring.len()));
        points.extend_from_slice(ring);
        movements.extend(bevel_vectors(ring));
    }

    let layers = build_layers(&points, &movements, options);
    let faces = triangulate_cap(shape, &points);

    let mut polygons = Vec::new();
    let (Some(front), Some(back)) = (layers.first(), layers.last()) else {
        return polygons;
    };

    for &[a, b, c] in &faces {
        polygons.push(Polygon::from_points(&[front[a], front[c], front[b]]));
        polygons.push(Polygon::from_points(&[back[a], back[b], back[c]]));
    }

    for &(start, len) in &ranges {
        for pair in layers.windows(2) {
            let (lower, upper) = (&pair[0], &pair[1]);
            for i in 0..len {
                let j = start + i;
                let k = start + if i == 0 { len - 1 } else { i - 1 };
                let (a, b, c, d) = (lower[j], lower[k], upper[k], upper[j]);
                push_triangle(&mut polygons, [a, b, d]);
                push_triangle(&mut polygons, [b, c, d]);
            }
        }
    }

    polygons
}

fn push_triangle(polygons: &mut Vec<Polygon>, [a, b, c]: [Point3<Real>; 3]) {
    if (b - a).cross(&(c - a)).norm() > EPSILON {
        polygons.push(Polygon::from_points(&[a, b, c]));
    }
}

/// Stack of outline copies from the front cap to the back cap.
fn build_layers(
    points: &[Point2<Real>],
    movements: &[Vector2<Real>],
    options: &TextOptions,
) -> Vec<Vec<Point3<Real>>> {
    let layer = |spread: Real, z: Real| -> Vec<Point3<Real>> {
        points
            .iter()
            .zip(movements)
            .map(|(p, m)| Point3::new(p.x + m.x * spread, p.y + m.y * spread, z))
            .collect()
    };

    let steps = options.steps.max(1);
    let mut layers = Vec::new();

    if let Some(bevel) = options.bevel {
        let segments = bevel.segments.max(1);
        for b in 0..segments {
            let theta = b as Real / segments as Real * FRAC_PI_2;
            let spread = bevel.size * theta.sin() + bevel.offset;
            layers.push(layer(spread, -bevel.thickness * theta.cos()));
        }
    }

    let body_spread = options.bevel.map_or(0.0, |b| b.size + b.offset);
    for s in 0..=steps {
        layers.push(layer(body_spread, options.depth * s as Real / steps as Real));
    }

    if let Some(bevel) = options.bevel {
        let segments = bevel.segments.max(1);
        for b in (0..segments).rev() {
            let theta = b as Real / segments as Real * FRAC_PI_2;
            let spread = bevel.size * theta.sin() + bevel.offset;
            layers.push(layer(spread, options.depth + bevel.thickness * theta.cos()));
        }
    }

    layers
}

/// Per-point direction in which the outline grows, one per ring point.
///
/// Rings must be clockwise for solids and counter-clockwise for holes, which puts the
/// material-outward side on the left of every edge. Corners use a mitre whose length
/// is capped at √2 so sharp spikes do not shoot off.
fn bevel_vectors(ring: &[Point2<Real>]) -> Vec<Vector2<Real>> {
    let n = ring.len();
    (0..n)
        .map(|i| {
            let prev = ring[(i + n - 1) % n];
            let next = ring[(i + 1) % n];
            bevel_vector(ring[i], prev, next)
        })
        .collect()
}

fn bevel_vector(pt: Point2<Real>, prev: Point2<Real>, next: Point2<Real>) -> Vector2<Real> {
    let left = |d: Vector2<Real>| Vector2::new(-d.y, d.x).try_normalize(EPSILON);

    let (n1, n2) = match (left(pt - prev), left(next - pt)) {
        (Some(n1), Some(n2)) => (n1, n2),
        (Some(n), None) | (None, Some(n)) => return n,
        (None, None) => return Vector2::zeros(),
    };

    let Some(dir) = (n1 + n2).try_normalize(EPSILON) else {
        // Hairpin: the two edges fold back onto each other.
        return n1;
    };

    let cos = dir.dot(&n1).max(EPSILON);
    let miter = dir / cos;
    if miter.norm_squared() > 2.0 {
        dir * SQRT_2
    } else {
        miter
    }
}

/// Ear-cut the shape's face into triangles indexing `points`, wound counter-clockwise.
fn triangulate_cap(shape: &GlyphShape, points: &[Point2<Real>]) -> Vec<[usize; 3]> {
    let ring = |r: &[Point2<Real>]| {
        LineString::new(r.iter().map(|p| Coord { x: p.x, y: p.y }).collect::<Vec<_>>())
    };
    let polygon = GeoPolygon::new(
        ring(shape.contour.as_slice()),
        shape.holes.iter().map(|h| ring(h.as_slice())).collect(),
    );
    let raw = polygon.earcut_triangles_raw();

    // Earcut flattens exterior then interiors, each without its closing coordinate,
    // which is exactly our concatenation. Fall back to a coordinate lookup otherwise.
    let direct = raw.vertices.len() == points.len() * 2;
    let index_of = |idx: usize| -> Option<usize> {
        if direct {
            return Some(idx);
        }
        let (x, y) = (*raw.vertices.get(2 * idx)?, *raw.vertices.get(2 * idx + 1)?);
        points.iter().position(|p| p.x == x && p.y == y)
    };

    raw.triangle_indices
        .chunks_exact(3)
        .filter_map(|tri| {
            let [a, b, c] = [index_of(tri[0])?, index_of(tri[1])?, index_of(tri[2])?];
            let area = signed_area2(&[points[a], points[b], points[c]]);
            if area.abs() <= EPSILON {
                None
            } else if area > 0.0 {
                Some([a, b, c])
            } else {
                Some([a, c, b])
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Bevel;
    use nalgebra::Vector3;

    fn block() -> GlyphShape {
        // clockwise 2x1 rectangle
        GlyphShape {
            contour: vec![
                Point2::new(0.0, 0.0),
                Point2::new(0.0, 1.0),
                Point2::new(2.0, 1.0),
                Point2::new(2.0, 0.0),
            ],
            holes: vec![],
        }
    }

    fn framed() -> GlyphShape {
        GlyphShape {
            contour: vec![
                Point2::new(0.0, 0.0),
                Point2::new(0.0, 4.0),
                Point2::new(4.0, 4.0),
                Point2::new(4.0, 0.0),
            ],
            holes: vec![vec![
                Point2::new(1.0, 1.0),
                Point2::new(3.0, 1.0),
                Point2::new(3.0, 3.0),
                Point2::new(1.0, 3.0),
            ]],
        }
    }

    fn flat(depth: Real) -> TextOptions {
        TextOptions { depth, bevel: None, ..TextOptions::default() }
    }

    #[test]
    fn square_corner_miter_points_diagonally_out() {
        let v = bevel_vectors(&block().contour);
        // (0,0) is the bottom-left corner: outward is (-1,-1)
        assert!((v[0] - Vector2::new(-1.0, -1.0)).norm() < 1e-5);
        assert!((v[2] - Vector2::new(1.0, 1.0)).norm() < 1e-5);
    }

    #[test]
    fn unbevelled_block_has_caps_and_walls() {
        let polys = extrude_shape(&block(), &flat(0.5));
        // 2 cap triangles per side, 4 edges x 1 step x 2 triangles
        assert_eq!(polys.len(), 4 + 8);
        let zs: Vec<Real> = polys.iter().flat_map(|p| p.vertices.iter().map(|v| v.pos.z)).collect();
        assert!(zs.iter().all(|z| *z >= 0.0 && *z <= 0.5));
    }

    #[test]
    fn every_face_points_away_from_the_solid() {
        let polys = extrude_shape(&framed(), &flat(1.0));
        let center = Vector3::new(2.0, 2.0, 0.5);
        for p in &polys {
            let n = p.plane.normal();
            let c = p.vertices.iter().fold(Vector3::zeros(), |acc, v| acc + v.pos.coords) / 3.0;
            let on_hole_wall = (1.0..=3.0).contains(&c.x)
                && (1.0..=3.0).contains(&c.y)
                && n.z.abs() < 1e-5;
            let outward = c - center;
            if on_hole_wall {
                assert!(n.dot(&outward) < 0.0, "hole wall should face the hole");
            } else if n.z.abs() > 0.5 {
                assert!(n.z * outward.z > 0.0, "caps should face away");
            } else {
                assert!(n.dot(&outward) > 0.0, "outer wall should face out");
            }
        }
    }

    #[test]
    fn bevel_widens_the_body_and_thickens_the_depth() {
        let options = TextOptions {
            depth: 0.2,
            bevel: Some(Bevel { thickness: 0.03, size: 0.02, offset: 0.0, segments: 5 }),
            steps: 1,
            ..TextOptions::default()
        };
        let polys = extrude_shape(&block(), &options);
        let (mut min, mut max) = (Vector3::repeat(Real::MAX), Vector3::repeat(Real::MIN));
        for v in polys.iter().flat_map(|p| p.vertices.iter()) {
            min = min.inf(&v.pos.coords);
            max = max.sup(&v.pos.coords);
        }
        assert!((min.z + 0.03).abs() < 1e-5);
        assert!((max.z - 0.23).abs() < 1e-5);
        assert!((min.x + 0.02).abs() < 1e-5);
        assert!((max.x - 2.02).abs() < 1e-5);
        // 12 layers -> 11 bands of 4 edges x 2 triangles, plus 2 triangles per cap
        assert_eq!(polys.len(), 11 * 8 + 4);
    }

    #[test]
    fn hole_survives_cap_triangulation() {
        let shape = framed();
        let pts = [shape.contour.clone(), shape.holes[0].clone()].concat();
        let faces = triangulate_cap(&shape, &pts);
        // 4x4 square minus 2x2 hole = 12 units of area
        let area: Real = faces
            .iter()
            .map(|&[a, b, c]| signed_area2(&[pts[a], pts[b], pts[c]]) * 0.5)
            .sum();
        assert!((area - 12.0).abs() < 1e-5);
    }
}
