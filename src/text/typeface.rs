//! Typeface resources: glyph advances and outlines in font units.
//!
//! Two on-disk formats are understood:
//! - the *typeface JSON* format used by three.js font loaders (`resolution`,
//!   `boundingBox`, `underlineThickness` and a `glyphs` table whose outlines are encoded
//!   as `m`/`l`/`q`/`b` command strings)
//! - TrueType / OpenType faces (`truetype-text` feature)

use crate::errors::FontError;
use crate::float_types::Real;
use hashbrown::HashMap;
use nalgebra::Point2;
use serde::Deserialize;

/// One drawing command of a glyph outline, in font units with Y pointing up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutlineCommand {
    MoveTo(Point2<Real>),
    LineTo(Point2<Real>),
    QuadTo {
        ctrl: Point2<Real>,
        to: Point2<Real>,
    },
    CubicTo {
        ctrl1: Point2<Real>,
        ctrl2: Point2<Real>,
        to: Point2<Real>,
    },
    Close,
}

/// Horizontal advance and outline of a single character.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Glyph {
    pub advance: Real,
    pub outline: Vec<OutlineCommand>,
}

enum GlyphSource {
    Table(HashMap<char, Glyph>),
    #[cfg(feature = "truetype-text")]
    TrueType(crate::text::truetype::TrueTypeFace),
}

/// A loaded, read-only typeface.
pub struct Typeface {
    family: Option<String>,
    units_per_em: Real,
    line_height: Real,
    source: GlyphSource,
}

impl std::fmt::Debug for Typeface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let source = match &self.source {
            GlyphSource::Table(glyphs) => format!("table({} glyphs)", glyphs.len()),
            #[cfg(feature = "truetype-text")]
            GlyphSource::TrueType(_) => "truetype".to_string(),
        };
        f.debug_struct("Typeface")
            .field("family", &self.family)
            .field("units_per_em", &self.units_per_em)
            .field("line_height", &self.line_height)
            .field("source", &source)
            .finish()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TypefaceJson {
    glyphs: HashMap<String, GlyphJson>,
    #[serde(default)]
    family_name: Option<String>,
    resolution: Real,
    bounding_box: BoundingBoxJson,
    #[serde(default)]
    underline_thickness: Real,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BoundingBoxJson {
    y_min: Real,
    y_max: Real,
}

#[derive(Deserialize)]
struct GlyphJson {
    ha: Real,
    #[serde(default)]
    o: Option<String>,
}

impl Typeface {
    /// Build a typeface from an in-memory glyph table.
    ///
    /// `line_height` is the baseline-to-baseline distance, in the same units as the
    /// outlines.
    pub fn from_glyphs<I>(units_per_em: Real, line_height: Real, glyphs: I) -> Self
    where
        I: IntoIterator<Item = (char, Glyph)>,
    {
        Typeface {
            family: None,
            units_per_em,
            line_height,
            source: GlyphSource::Table(glyphs.into_iter().collect()),
        }
    }

    /// Parse a three.js typeface JSON document.
    ///
    /// ```
    /// # use trophyrs::text::Typeface;
    /// let json = r#"{
    ///     "resolution": 1000,
    ///     "boundingBox": { "yMin": -200, "yMax": 800 },
    ///     "glyphs": { "I": { "ha": 300, "o": "m 0 0 l 0 700 l 200 700 l 200 0" } }
    /// }"#;
    /// let face = Typeface::from_json(json).unwrap();
    /// assert_eq!(face.units_per_em(), 1000.0);
    /// assert!(face.glyph('I').is_some());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, FontError> {
        let doc: TypefaceJson = serde_json::from_str(json)?;
        Self::from_json_document(doc)
    }

    fn from_json_document(doc: TypefaceJson) -> Result<Self, FontError> {
        if doc.glyphs.is_empty() {
            return Err(FontError::MissingGlyphs("empty `glyphs` table".to_string()));
        }
        if doc.resolution <= 0.0 {
            return Err(FontError::MissingGlyphs(format!(
                "non-positive resolution {}",
                doc.resolution
            )));
        }

        let mut glyphs = HashMap::with_capacity(doc.glyphs.len());
        for (key, glyph) in doc.glyphs {
            let mut chars = key.chars();
            let (Some(ch), None) = (chars.next(), chars.next()) else {
                log::debug!("skipping multi-character glyph key {key:?}");
                continue;
            };
            let outline = match glyph.o.as_deref() {
                Some(o) => parse_outline(o).map_err(|reason| FontError::Outline {
                    glyph: key.clone(),
                    reason,
                })?,
                None => Vec::new(),
            };
            glyphs.insert(ch, Glyph { advance: glyph.ha, outline });
        }

        let line_height =
            doc.bounding_box.y_max - doc.bounding_box.y_min + doc.underline_thickness;

        Ok(Typeface {
            family: doc.family_name,
            units_per_em: doc.resolution,
            line_height,
            source: GlyphSource::Table(glyphs),
        })
    }

    /// Parse a TrueType / OpenType face (face index 0).
    #[cfg(feature = "truetype-text")]
    pub fn from_ttf(data: Vec<u8>) -> Result<Self, FontError> {
        let face = crate::text::truetype::TrueTypeFace::parse(data)?;
        Ok(Typeface {
            family: face.family.clone(),
            units_per_em: face.units_per_em,
            line_height: face.line_height,
            source: GlyphSource::TrueType(face),
        })
    }

    /// Decode a font resource of either supported format, sniffing the content.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, FontError> {
        let first = data.iter().find(|b| !b.is_ascii_whitespace());
        if first == Some(&b'{') {
            let doc: TypefaceJson = serde_json::from_slice(&data)?;
            return Self::from_json_document(doc);
        }

        #[cfg(feature = "truetype-text")]
        {
            Self::from_ttf(data)
        }

        #[cfg(not(feature = "truetype-text"))]
        {
            Err(FontError::Unsupported(
                "binary font data needs the `truetype-text` feature".to_string(),
            ))
        }
    }

    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    /// Font units per em; a glyph rendered at `size` is scaled by `size / units_per_em`.
    pub const fn units_per_em(&self) -> Real {
        self.units_per_em
    }

    /// Baseline-to-baseline distance in font units.
    pub const fn line_height(&self) -> Real {
        self.line_height
    }

    /// Look up the glyph drawn for `ch`, if the typeface has one.
    pub fn glyph(&self, ch: char) -> Option<Glyph> {
        match &self.source {
            GlyphSource::Table(glyphs) => glyphs.get(&ch).cloned(),
            #[cfg(feature = "truetype-text")]
            GlyphSource::TrueType(face) => face.glyph(ch),
        }
    }
}

/// Decode a typeface-JSON outline string.
///
/// Curve commands list the end point *first*, then the control point(s):
/// `q x y cx cy`, `b x y c1x c1y c2x c2y`.
fn parse_outline(o: &str) -> Result<Vec<OutlineCommand>, String> {
    let mut tokens = o.split_whitespace();
    let mut commands = Vec::new();

    while let Some(op) = tokens.next() {
        let command = match op {
            "m" => OutlineCommand::MoveTo(next_point(&mut tokens)?),
            "l" => OutlineCommand::LineTo(next_point(&mut tokens)?),
            "q" => {
                let to = next_point(&mut tokens)?;
                let ctrl = next_point(&mut tokens)?;
                OutlineCommand::QuadTo { ctrl, to }
            },
            "b" => {
                let to = next_point(&mut tokens)?;
                let ctrl1 = next_point(&mut tokens)?;
                let ctrl2 = next_point(&mut tokens)?;
                OutlineCommand::CubicTo { ctrl1, ctrl2, to }
            },
            "z" => OutlineCommand::Close,
            other => return Err(format!("unknown outline command {other:?}")),
        };
        commands.push(command);
    }

    Ok(commands)
}

fn next_point(tokens: &mut std::str::SplitWhitespace<'_>) -> Result<Point2<Real>, String> {
    let mut coord = || -> Result<Real, String> {
        let token = tokens.next().ok_or_else(|| "outline ends mid-command".to_string())?;
        token
            .parse::<Real>()
            .map_err(|e| format!("bad coordinate {token:?}: {e}"))
    };
    let x = coord()?;
    let y = coord()?;
    Ok(Point2::new(x, y))
}
