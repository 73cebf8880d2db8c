//! Application controller: one owner of the scene, fed by UI commands.

use crate::errors::TextError;
use crate::export::{StlPayload, export_scene};
use crate::float_types::Real;
use crate::font::FontHandle;
use crate::scene::{Scene, VisibleMesh};
use crate::text_mesh::{TextTransform, TransformAxis};

/// A UI event.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// The "add text" form was submitted
    SetTextContent(String),
    /// A transform slider moved
    SetTransform { axis: TransformAxis, value: Real },
    /// The export button was pressed
    Export,
}

/// What a successfully handled [`Command`] produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    TextPlaced,
    /// `applied` is false when the value was only remembered for the next text mesh
    TransformChanged { applied: bool },
    Exported(StlPayload),
}

/// Scene, pending font and remembered slider values.
pub struct App {
    pub scene: Scene,
    font: FontHandle,
    text_transform: TextTransform,
}

impl App {
    pub fn new(font: FontHandle) -> Self {
        App {
            scene: Scene::new(),
            font,
            text_transform: TextTransform::default(),
        }
    }

    pub fn dispatch(&mut self, command: Command) -> Result<Outcome, TextError> {
        match command {
            Command::SetTextContent(content) => {
                let font = self.font.poll();
                self.scene
                    .text
                    .set_text(&content, font.as_deref(), &self.text_transform)?;
                Ok(Outcome::TextPlaced)
            },
            Command::SetTransform { axis, value } => {
                self.text_transform.set(axis, value);
                let applied = self.scene.text.apply_transform(axis, value);
                Ok(Outcome::TransformChanged { applied })
            },
            Command::Export => Ok(Outcome::Exported(export_scene(
                &self.scene.trophy,
                self.scene.text.current(),
            ))),
        }
    }

    /// One tick of the host's frame loop: settle the font if it arrived and return the
    /// draw list.
    pub fn frame(&mut self) -> Vec<VisibleMesh> {
        self.font.poll();
        self.scene.visible_meshes()
    }

    pub fn font(&mut self) -> &mut FontHandle {
        &mut self.font
    }
}
