//! TrueType / OpenType glyph source backed by `ttf-parser`.

use crate::errors::FontError;
use crate::float_types::Real;
use crate::text::typeface::{Glyph, OutlineCommand};
use nalgebra::Point2;
use ttf_parser::{Face, OutlineBuilder, name_id};

/// Owned font bytes plus the metrics read when the face was validated.
///
/// `ttf_parser::Face` borrows its data, so the face is re-parsed (cheaply) per lookup.
pub(crate) struct TrueTypeFace {
    data: Vec<u8>,
    pub(crate) family: Option<String>,
    pub(crate) units_per_em: Real,
    pub(crate) line_height: Real,
}

impl TrueTypeFace {
    pub(crate) fn parse(data: Vec<u8>) -> Result<Self, FontError> {
        let face = Face::parse(&data, 0).map_err(|e| FontError::TrueType(e.to_string()))?;

        let family = face
            .names()
            .into_iter()
            .find(|name| name.name_id == name_id::FAMILY && name.is_unicode())
            .and_then(|name| name.to_string());
        let units_per_em = face.units_per_em() as Real;
        let line_height =
            face.ascender() as Real - face.descender() as Real + face.line_gap() as Real;

        if face.number_of_glyphs() == 0 {
            return Err(FontError::MissingGlyphs("face has zero glyphs".to_string()));
        }

        Ok(TrueTypeFace { family, units_per_em, line_height, data })
    }

    pub(crate) fn glyph(&self, ch: char) -> Option<Glyph> {
        let face = Face::parse(&self.data, 0).ok()?;
        let id = face.glyph_index(ch)?;
        let advance = face.glyph_hor_advance(id).unwrap_or(0) as Real;

        let mut sink = OutlineSink::default();
        // Glyphs without contours (space) still advance the pen.
        let _ = face.outline_glyph(id, &mut sink);

        Some(Glyph { advance, outline: sink.commands })
    }
}

#[derive(Default)]
struct OutlineSink {
    commands: Vec<OutlineCommand>,
}

#[inline]
fn pt(x: f32, y: f32) -> Point2<Real> {
    Point2::new(x as Real, y as Real)
}

impl OutlineBuilder for OutlineSink {
    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(OutlineCommand::MoveTo(pt(x, y)));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(OutlineCommand::LineTo(pt(x, y)));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.commands.push(OutlineCommand::QuadTo { ctrl: pt(x1, y1), to: pt(x, y) });
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.commands.push(OutlineCommand::CubicTo {
            ctrl1: pt(x1, y1),
            ctrl2: pt(x2, y2),
            to: pt(x, y),
        });
    }

    fn close(&mut self) {
        self.commands.push(OutlineCommand::Close);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_not_a_face() {
        let err = TrueTypeFace::parse(b"definitely not a font".to_vec());
        assert!(matches!(err, Err(FontError::TrueType(_))));
    }

    #[test]
    fn sink_records_commands_in_order() {
        let mut sink = OutlineSink::default();
        sink.move_to(0.0, 0.0);
        sink.quad_to(1.0, 1.0, 2.0, 0.0);
        sink.close();
        assert_eq!(sink.commands.len(), 3);
        assert_eq!(
            sink.commands[1],
            OutlineCommand::QuadTo { ctrl: pt(1.0, 1.0), to: pt(2.0, 0.0) }
        );
    }
}
