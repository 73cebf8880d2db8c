//! Minimal scene graph: mesh nodes, groups and the scene root.

use crate::float_types::Real;
use crate::mesh::Mesh;
use crate::text_mesh::TextMeshManager;
use nalgebra::{Matrix4, Rotation3, Translation3, Vector3};
use std::sync::Arc;

pub mod resources;

pub use resources::{Handle, Material, ResourceId};

/// Geometry stored on the scene graph.
pub type Geometry = Mesh;

/// Euler angles in radians, applied in X, Y, Z order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Euler {
    pub x: Real,
    pub y: Real,
    pub z: Real,
}

impl Euler {
    pub const fn new(x: Real, y: Real, z: Real) -> Self {
        Euler { x, y, z }
    }

    /// `Rx · Ry · Rz`
    pub fn matrix(&self) -> Matrix4<Real> {
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), self.x);
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), self.y);
        let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), self.z);
        (rx * ry * rz).to_homogeneous()
    }
}

/// Local placement of a node relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vector3<Real>,
    pub rotation: Euler,
    pub scale: Vector3<Real>,
}

impl Default for Transform {
    fn default() -> Self {
        Transform {
            position: Vector3::zeros(),
            rotation: Euler::default(),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    pub fn from_position(x: Real, y: Real, z: Real) -> Self {
        Transform { position: Vector3::new(x, y, z), ..Default::default() }
    }

    pub fn with_rotation(mut self, rotation: Euler) -> Self {
        self.rotation = rotation;
        self
    }

    /// `T · R · S`
    pub fn matrix(&self) -> Matrix4<Real> {
        Translation3::from(self.position).to_homogeneous()
            * self.rotation.matrix()
            * Matrix4::new_nonuniform_scaling(&self.scale)
    }
}

/// A drawable: geometry plus material at a local transform.
///
/// Cloning shares the geometry and material handles and copies the transform.
#[derive(Debug, Clone)]
pub struct MeshNode {
    pub name: String,
    pub geometry: Handle<Geometry>,
    pub material: Handle<Material>,
    pub transform: Transform,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl MeshNode {
    pub fn new(
        name: impl Into<String>,
        geometry: Handle<Geometry>,
        material: Handle<Material>,
    ) -> Self {
        MeshNode {
            name: name.into(),
            geometry,
            material,
            transform: Transform::default(),
            cast_shadow: false,
            receive_shadow: false,
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_shadows(mut self) -> Self {
        self.cast_shadow = true;
        self.receive_shadow = true;
        self
    }

    /// Release geometry and material.
    pub fn dispose(&self) {
        self.geometry.dispose();
        self.material.dispose();
    }

    pub fn is_disposed(&self) -> bool {
        self.geometry.is_disposed() && self.material.is_disposed()
    }
}

/// Named collection of mesh nodes sharing a parent transform.
#[derive(Debug, Clone, Default)]
pub struct Group {
    pub name: String,
    pub transform: Transform,
    pub children: Vec<MeshNode>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Group { name: name.into(), ..Default::default() }
    }

    pub fn add(&mut self, node: MeshNode) {
        self.children.push(node);
    }

    pub fn child(&self, name: &str) -> Option<&MeshNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Children with the group transform folded into theirs, as `(node, world matrix)`.
    pub fn world_children(&self) -> impl Iterator<Item = (&MeshNode, Matrix4<Real>)> {
        let parent = self.transform.matrix();
        self.children.iter().map(move |c| (c, parent * c.transform.matrix()))
    }
}

/// One entry of the draw list handed to a renderer.
#[derive(Debug, Clone)]
pub struct VisibleMesh {
    pub name: String,
    pub id: ResourceId,
    pub geometry: Arc<Geometry>,
    pub material: Material,
    pub world: Matrix4<Real>,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl VisibleMesh {
    fn from_node(node: &MeshNode, world: Matrix4<Real>) -> Option<Self> {
        let geometry = node.geometry.get()?;
        let material = node.material.get()?;
        Some(VisibleMesh {
            name: node.name.clone(),
            id: node.geometry.id(),
            geometry,
            material: *material,
            world,
            cast_shadow: node.cast_shadow,
            receive_shadow: node.receive_shadow,
        })
    }
}

/// Ownership root: the trophy (always) and the text mesh (optionally).
#[derive(Debug)]
pub struct Scene {
    pub trophy: Group,
    pub text: TextMeshManager,
}

impl Default for Scene {
    fn default() -> Self {
        Scene::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Scene {
            trophy: crate::trophy::build_trophy(),
            text: TextMeshManager::default(),
        }
    }

    /// Every live mesh with its world matrix, trophy parts first.
    pub fn visible_meshes(&self) -> Vec<VisibleMesh> {
        let trophy = self
            .trophy
            .world_children()
            .filter_map(|(node, world)| VisibleMesh::from_node(node, world));
        let text = self
            .text
            .current()
            .and_then(|node| VisibleMesh::from_node(node, node.transform.matrix()));
        trophy.chain(text).collect()
    }
}
