//! Lifecycle of the single engraved text mesh.

use crate::errors::TextError;
use crate::float_types::Real;
use crate::scene::{Euler, Geometry, Handle, Material, MeshNode, Transform};
use crate::text::{TextOptions, Typeface};
use crate::traits::MeshOps;
use nalgebra::Vector3;

/// Slider-controlled placement of the text: position, Euler XYZ rotation in radians,
/// and a uniform scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextTransform {
    pub position: Vector3<Real>,
    pub rotation: Euler,
    pub scale: Real,
}

impl Default for TextTransform {
    fn default() -> Self {
        TextTransform {
            position: Vector3::zeros(),
            rotation: Euler::default(),
            scale: 1.0,
        }
    }
}

impl TextTransform {
    /// Set one component. Returns `true` if the stored value changed.
    pub fn set(&mut self, axis: TransformAxis, value: Real) -> bool {
        let slot = match axis {
            TransformAxis::PositionX => &mut self.position.x,
            TransformAxis::PositionY => &mut self.position.y,
            TransformAxis::PositionZ => &mut self.position.z,
            TransformAxis::RotationX => &mut self.rotation.x,
            TransformAxis::RotationY => &mut self.rotation.y,
            TransformAxis::RotationZ => &mut self.rotation.z,
            TransformAxis::Scale => &mut self.scale,
        };
        let changed = *slot != value;
        *slot = value;
        changed
    }

    /// Node transform with the uniform scale replicated to all three axes.
    pub fn to_transform(&self) -> Transform {
        Transform {
            position: self.position,
            rotation: self.rotation,
            scale: Vector3::repeat(self.scale),
        }
    }
}

/// One adjustable component of a [`TextTransform`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformAxis {
    PositionX,
    PositionY,
    PositionZ,
    RotationX,
    RotationY,
    RotationZ,
    Scale,
}

impl TransformAxis {
    /// Parse a UI slider identifier such as `"positionX"` or `"scale"`.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "positionX" => TransformAxis::PositionX,
            "positionY" => TransformAxis::PositionY,
            "positionZ" => TransformAxis::PositionZ,
            "rotationX" => TransformAxis::RotationX,
            "rotationY" => TransformAxis::RotationY,
            "rotationZ" => TransformAxis::RotationZ,
            "scale" => TransformAxis::Scale,
            _ => return None,
        })
    }
}

/// Owns at most one text mesh and replaces it on request.
#[derive(Debug, Default)]
pub struct TextMeshManager {
    current: Option<MeshNode>,
    content: String,
}

impl TextMeshManager {
    pub fn current(&self) -> Option<&MeshNode> {
        self.current.as_ref()
    }

    /// Trimmed source string of the live mesh; empty when there is none.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the text mesh with freshly extruded `content`.
    ///
    /// Fails without touching the scene when no typeface is available or the trimmed
    /// input is empty, checked in that order. On success the previous mesh's geometry
    /// and material are disposed before the new mesh takes its place.
    pub fn set_text(
        &mut self,
        content: &str,
        font: Option<&Typeface>,
        transform: &TextTransform,
    ) -> Result<&MeshNode, TextError> {
        let font = font.ok_or(TextError::FontNotReady)?;
        let content = content.trim();
        if content.is_empty() {
            return Err(TextError::EmptyInput);
        }

        if let Some(previous) = self.current.take() {
            previous.dispose();
        }

        let geometry = Geometry::text(content, font, &TextOptions::default()).center_x();
        if geometry.is_empty() {
            log::warn!("no glyph geometry for {content:?}");
        }

        let node = MeshNode::new("text", Handle::new(geometry), Handle::new(Material::text()))
            .with_transform(transform.to_transform())
            .with_shadows();
        log::debug!("placed text {content:?} as {}", node.geometry.id());

        self.content = content.to_string();
        Ok(&*self.current.insert(node))
    }

    /// Update one transform component of the live mesh in place. Returns `false` when
    /// there is no text mesh.
    pub fn apply_transform(&mut self, axis: TransformAxis, value: Real) -> bool {
        let Some(node) = self.current.as_mut() else {
            return false;
        };
        let t = &mut node.transform;
        match axis {
            TransformAxis::PositionX => t.position.x = value,
            TransformAxis::PositionY => t.position.y = value,
            TransformAxis::PositionZ => t.position.z = value,
            TransformAxis::RotationX => t.rotation.x = value,
            TransformAxis::RotationY => t.rotation.y = value,
            TransformAxis::RotationZ => t.rotation.z = value,
            TransformAxis::Scale => t.scale = Vector3::repeat(value),
        }
        true
    }
}
