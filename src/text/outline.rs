//! Glyph layout: flattening outlines into rings and grouping rings into shapes with holes.

use crate::float_types::{EPSILON, Real, tolerance};
use crate::text::typeface::{OutlineCommand, Typeface};
use geo::{Area, Contains, Coord, LineString, Point, Polygon as GeoPolygon};
use nalgebra::{Point2, Vector2};

/// A filled region: one outer contour (clockwise) and its holes (counter-clockwise).
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphShape {
    pub contour: Vec<Point2<Real>>,
    pub holes: Vec<Vec<Point2<Real>>>,
}

/// Lay out `text` with `typeface` at `size` and return every glyph's filled shapes.
///
/// The pen starts at the origin on the baseline and moves right by each glyph's advance;
/// `'\n'` returns to `x = 0` one line lower. Characters the typeface lacks fall back to
/// its `'?'` glyph, or are skipped when that is missing too.
pub fn layout_shapes(
    typeface: &Typeface,
    text: &str,
    size: Real,
    curve_segments: usize,
) -> Vec<GlyphShape> {
    let scale = size / typeface.units_per_em();
    let line_height = typeface.line_height() * scale;
    let mut pen = Vector2::zeros();
    let mut shapes = Vec::new();

    for ch in text.chars() {
        if ch == '\n' {
            pen.x = 0.0;
            pen.y -= line_height;
            continue;
        }

        let Some(glyph) = typeface.glyph(ch).or_else(|| typeface.glyph('?')) else {
            log::warn!("character {ch:?} has no glyph in {:?}, skipping", typeface.family());
            continue;
        };

        let rings = flatten_outline(&glyph.outline, scale, pen, curve_segments);
        shapes.extend(group_rings(rings));
        pen.x += glyph.advance * scale;
    }

    shapes
}

/// Convert outline commands into closed point rings, scaled and moved by `offset`.
///
/// Straight segments contribute their end point; each quadratic or cubic curve is
/// sampled at `curve_segments` evenly spaced parameters. Consecutive duplicates and
/// the closing duplicate are removed; rings with fewer than three points are dropped.
pub fn flatten_outline(
    outline: &[OutlineCommand],
    scale: Real,
    offset: Vector2<Real>,
    curve_segments: usize,
) -> Vec<Vec<Point2<Real>>> {
    let segments = curve_segments.max(1);
    let place = |p: Point2<Real>| Point2::new(p.x * scale + offset.x, p.y * scale + offset.y);

    let mut rings = Vec::new();
    let mut current: Vec<Point2<Real>> = Vec::new();
    let mut cursor = Point2::new(offset.x, offset.y);

    for command in outline {
        match *command {
            OutlineCommand::MoveTo(p) => {
                finish_ring(&mut rings, &mut current);
                cursor = place(p);
                current.push(cursor);
            },
            OutlineCommand::LineTo(p) => {
                cursor = place(p);
                current.push(cursor);
            },
            OutlineCommand::QuadTo { ctrl, to } => {
                let (c, end) = (place(ctrl), place(to));
                for i in 1..=segments {
                    let t = i as Real / segments as Real;
                    let mt = 1.0 - t;
                    let p = cursor.coords * (mt * mt) + c.coords * (2.0 * mt * t)
                        + end.coords * (t * t);
                    current.push(Point2::from(p));
                }
                cursor = end;
            },
            OutlineCommand::CubicTo { ctrl1, ctrl2, to } => {
                let (c1, c2, end) = (place(ctrl1), place(ctrl2), place(to));
                for i in 1..=segments {
                    let t = i as Real / segments as Real;
                    let mt = 1.0 - t;
                    current.push(Point2::from(
                        cursor.coords * (mt * mt * mt)
                            + c1.coords * (3.0 * mt * mt * t)
                            + c2.coords * (3.0 * mt * t * t)
                            + end.coords * (t * t * t),
                    ));
                }
                cursor = end;
            },
            OutlineCommand::Close => finish_ring(&mut rings, &mut current),
        }
    }
    finish_ring(&mut rings, &mut current);

    rings
}

fn finish_ring(rings: &mut Vec<Vec<Point2<Real>>>, current: &mut Vec<Point2<Real>>) {
    let ring = clean_ring(std::mem::take(current));
    if ring.len() >= 3 {
        rings.push(ring);
    }
}

/// Remove consecutive duplicate points (within tolerance) and the closing duplicate.
fn clean_ring(points: Vec<Point2<Real>>) -> Vec<Point2<Real>> {
    let tol = tolerance();
    let mut ring: Vec<Point2<Real>> = Vec::with_capacity(points.len());
    for p in points {
        if ring.last().is_none_or(|last| (p - last).norm() > tol) {
            ring.push(p);
        }
    }
    while ring.len() > 1 && (ring[0] - ring[ring.len() - 1]).norm() <= tol {
        ring.pop();
    }
    ring
}

fn to_geo(ring: &[Point2<Real>]) -> GeoPolygon<Real> {
    let coords: Vec<Coord<Real>> = ring.iter().map(|p| Coord { x: p.x, y: p.y }).collect();
    GeoPolygon::new(LineString::new(coords), Vec::new())
}

/// Classify the rings of one glyph into shapes.
///
/// A ring nested inside an even number of other rings is a solid, otherwise a hole
/// belonging to the smallest solid around it. Solids come back clockwise and holes
/// counter-clockwise, whatever winding convention the font used.
pub fn group_rings(rings: Vec<Vec<Point2<Real>>>) -> Vec<GlyphShape> {
    let polygons: Vec<GeoPolygon<Real>> = rings.iter().map(|r| to_geo(r)).collect();
    let areas: Vec<Real> = polygons.iter().map(|p| p.signed_area()).collect();

    let contains = |outer: usize, inner: usize| -> bool {
        let probe = rings[inner][0];
        outer != inner
            && areas[outer].abs() > areas[inner].abs()
            && polygons[outer].contains(&Point::new(probe.x, probe.y))
    };

    let live: Vec<usize> = (0..rings.len()).filter(|&i| areas[i].abs() > EPSILON).collect();
    let depth: Vec<usize> = (0..rings.len())
        .map(|i| live.iter().filter(|&&j| contains(j, i)).count())
        .collect();

    let mut shapes: Vec<(usize, GlyphShape)> = Vec::new();
    let mut holes: Vec<usize> = Vec::new();
    for &i in &live {
        if depth[i] % 2 == 0 {
            let mut contour = rings[i].clone();
            if areas[i] > 0.0 {
                contour.reverse();
            }
            shapes.push((i, GlyphShape { contour, holes: Vec::new() }));
        } else {
            holes.push(i);
        }
    }

    for i in holes {
        let parent = shapes
            .iter_mut()
            .filter(|(outer, _)| contains(*outer, i))
            .min_by(|(a, _), (b, _)| areas[*a].abs().total_cmp(&areas[*b].abs()));

        let mut ring = rings[i].clone();
        match parent {
            Some((_, shape)) => {
                if areas[i] < 0.0 {
                    ring.reverse();
                }
                shape.holes.push(ring);
            },
            None => {
                log::debug!("orphan hole ring {i}, treating it as a solid");
                if areas[i] > 0.0 {
                    ring.reverse();
                }
                shapes.push((i, GlyphShape { contour: ring, holes: Vec::new() }));
            },
        }
    }

    shapes.into_iter().map(|(_, shape)| shape).collect()
}

/// Twice the signed area of a ring; positive when counter-clockwise.
pub(crate) fn signed_area2(ring: &[Point2<Real>]) -> Real {
    let n = ring.len();
    (0..n)
        .map(|i| {
            let a = ring[i];
            let b = ring[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum()
}
