//! The fixed trophy model.

use crate::float_types::{FRAC_PI_2, PI, Real};
use crate::scene::{Euler, Geometry, Group, Handle, Material, MeshNode, Transform};

/// Radial segments of the base, stem and cup.
pub const CYLINDER_SEGMENTS: usize = 32;
/// Tube cross-section segments of the handles.
pub const HANDLE_RADIAL_SEGMENTS: usize = 16;
/// Segments along the handle arc.
pub const HANDLE_TUBULAR_SEGMENTS: usize = 32;

/// Capped, Y-up frustum dimensions of one trophy body part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPart {
    pub name: &'static str,
    pub radius_top: Real,
    pub radius_bottom: Real,
    pub height: Real,
    /// Centre height above the group origin
    pub y: Real,
}

/// Base, stem and cup, bottom to top.
pub const BODY_PARTS: [BodyPart; 3] = [
    BodyPart { name: "base", radius_top: 1.5, radius_bottom: 1.5, height: 0.3, y: 0.15 },
    BodyPart { name: "stem", radius_top: 0.3, radius_bottom: 0.4, height: 1.5, y: 1.05 },
    BodyPart { name: "cup", radius_top: 1.2, radius_bottom: 0.8, height: 1.8, y: 2.7 },
];

pub const HANDLE_RADIUS: Real = 0.6;
pub const HANDLE_TUBE: Real = 0.1;
pub const HANDLE_OFFSET_X: Real = 1.1;
pub const HANDLE_Y: Real = 2.7;

/// Build the trophy group: base, stem, cup, left handle, right handle.
///
/// Every part is gold and casts and receives shadows. The two handles share a
/// single half-torus geometry and a single material.
pub fn build_trophy() -> Group {
    let mut trophy = Group::new("trophy");

    for part in BODY_PARTS {
        let geometry = Geometry::frustum(
            part.radius_top,
            part.radius_bottom,
            part.height,
            CYLINDER_SEGMENTS,
        );
        trophy.add(
            MeshNode::new(part.name, Handle::new(geometry), Handle::new(Material::gold()))
                .with_transform(Transform::from_position(0.0, part.y, 0.0))
                .with_shadows(),
        );
    }

    let handle_geometry = Handle::new(Geometry::torus_arc(
        HANDLE_RADIUS,
        HANDLE_TUBE,
        HANDLE_RADIAL_SEGMENTS,
        HANDLE_TUBULAR_SEGMENTS,
        PI,
    ));
    let handle_material = Handle::new(Material::gold());

    for (name, side) in [("left_handle", -1.0), ("right_handle", 1.0)] {
        let transform = Transform::from_position(side * HANDLE_OFFSET_X, HANDLE_Y, 0.0)
            .with_rotation(Euler::new(0.0, -side * FRAC_PI_2, FRAC_PI_2));
        trophy.add(
            MeshNode::new(name, handle_geometry.clone(), handle_material.clone())
                .with_transform(transform)
                .with_shadows(),
        );
    }

    log::debug!("built trophy with {} parts", trophy.children.len());
    trophy
}
