//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use nalgebra::Point3;
use trophyrs::{
    aabb::Aabb,
    float_types::Real,
    mesh::Mesh,
    scene::{Group, MeshNode},
    text::Typeface,
    traits::MeshOps,
};

/// Three.js typeface JSON with block glyphs `O` (with a counter), `D` (quadratic),
/// `C` (cubic), `?` and space.
pub const BLOCK_TYPEFACE: &str = include_str!("../fixtures/block.typeface.json");

pub fn block_typeface_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/block.typeface.json")
}

pub fn block_typeface() -> Typeface {
    Typeface::from_json(BLOCK_TYPEFACE).expect("fixture parses")
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

pub fn approx_point(a: Point3<Real>, b: [Real; 3], eps: Real) -> bool {
    approx_eq(a.x, b[0], eps) && approx_eq(a.y, b[1], eps) && approx_eq(a.z, b[2], eps)
}

/// Bounding box of a node's geometry after applying `world`.
pub fn world_bounds(node: &MeshNode, world: &nalgebra::Matrix4<Real>) -> Aabb {
    let geometry: std::sync::Arc<Mesh> = node.geometry.get().expect("geometry is live");
    geometry.transform(world).bounding_box()
}

/// World bounding box of the named trophy part.
pub fn part_bounds(trophy: &Group, name: &str) -> Aabb {
    let (node, world) = trophy
        .world_children()
        .find(|(n, _)| n.name == name)
        .unwrap_or_else(|| panic!("no part named {name}"));
    world_bounds(node, &world)
}

/// Count `(solid, endsolid, facet, outer loop, vertex)` lines of an ASCII STL.
pub fn stl_line_counts(stl: &str) -> [usize; 5] {
    let mut counts = [0; 5];
    for line in stl.lines().map(str::trim_start) {
        let slot = if line.starts_with("endsolid") {
            1
        } else if line.starts_with("solid") {
            0
        } else if line.starts_with("facet normal") {
            2
        } else if line == "outer loop" {
            3
        } else if line.starts_with("vertex") {
            4
        } else {
            continue;
        };
        counts[slot] += 1;
    }
    counts
}
