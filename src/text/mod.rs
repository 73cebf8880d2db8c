//! Extruded 3D text.
//!
//! ```
//! # use trophyrs::{mesh::Mesh, text::{TextOptions, Typeface}};
//! # use trophyrs::traits::MeshOps;
//! let face = Typeface::from_json(r#"{
//!     "resolution": 1000,
//!     "boundingBox": { "yMin": -200, "yMax": 800 },
//!     "glyphs": { "I": { "ha": 300, "o": "m 0 0 l 0 700 l 200 700 l 200 0" } }
//! }"#).unwrap();
//! let text = Mesh::text("II", &face, &TextOptions::default());
//! assert!(!text.is_empty());
//! let bb = text.bounding_box();
//! assert!(bb.maxs.y > 0.3);
//! ```

use crate::float_types::Real;
use crate::mesh::Mesh;

pub mod extrude;
pub mod outline;
pub mod typeface;

#[cfg(feature = "truetype-text")]
mod truetype;

pub use outline::GlyphShape;
pub use typeface::{Glyph, OutlineCommand, Typeface};

/// Rounded edge added around the extruded outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bevel {
    /// How far the bevel reaches beyond the front and back faces along Z
    pub thickness: Real,
    /// How far the bevel grows the outline sideways
    pub size: Real,
    /// Outline offset where the bevel starts
    pub offset: Real,
    /// Number of bevel layers on each side
    pub segments: usize,
}

/// Text extrusion parameters. `Default` gives the trophy engraving settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextOptions {
    /// Em size in scene units
    pub size: Real,
    /// Extrusion depth of the body (bevel not included)
    pub depth: Real,
    /// Samples per quadratic/cubic outline curve
    pub curve_segments: usize,
    /// Layers subdividing the body depth
    pub steps: usize,
    pub bevel: Option<Bevel>,
}

impl Default for TextOptions {
    fn default() -> Self {
        TextOptions {
            size: 0.5,
            depth: 0.2,
            curve_segments: 12,
            steps: 1,
            bevel: Some(Bevel { thickness: 0.03, size: 0.02, offset: 0.0, segments: 5 }),
        }
    }
}

impl Mesh {
    /// Lay out `text` with `typeface` and extrude every glyph along +Z.
    ///
    /// The first glyph's origin sits at (0, 0) on the baseline; the result is not
    /// re-centred. Unknown characters fall back to `'?'` or are skipped.
    pub fn text(text: &str, typeface: &Typeface, options: &TextOptions) -> Mesh {
        let shapes = outline::layout_shapes(typeface, text, options.size, options.curve_segments);
        let polygons: Vec<_> = shapes
            .iter()
            .flat_map(|shape| extrude::extrude_shape(shape, options))
            .collect();

        Mesh::from_polygons(polygons)
    }
}
