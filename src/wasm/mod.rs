//! Browser binding. The host page owns the renderer and UI widgets; it forwards form
//! and slider events here and draws whatever [`TrophyApp::frame`] reports.

use crate::app::{App, Command, Outcome};
use crate::errors::FontError;
use crate::font::{FontHandle, FontResolver};
use crate::scene::VisibleMesh;
use crate::text::Typeface;
use crate::text_mesh::TransformAxis;
use crate::traits::MeshOps;
use crate::triangulated::Triangulated3D;
use js_sys::Float64Array;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init_logging() {
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("logger already installed");
    }
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct TrophyApp {
    app: App,
    resolver: Option<FontResolver>,
    draw_list: Vec<VisibleMesh>,
}

#[wasm_bindgen]
impl TrophyApp {
    /// A trophy scene waiting for its typeface.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let (font, resolver) = FontHandle::pending();
        let mut app = App::new(font);
        let draw_list = app.frame();
        TrophyApp { app, resolver: Some(resolver), draw_list }
    }

    /// Hand over the fetched typeface (three.js JSON text).
    #[wasm_bindgen(js_name = resolveFont)]
    pub fn resolve_font(&mut self, json: &str) -> Result<(), JsValue> {
        let resolver = self.resolver.take().ok_or_else(|| js_error("font already resolved"))?;
        let parsed = Typeface::from_json(json);
        let message = parsed.as_ref().err().map(ToString::to_string);
        resolver.resolve(parsed);
        self.frame();
        match message {
            Some(msg) => Err(JsValue::from_str(&msg)),
            None => Ok(()),
        }
    }

    /// Report a failed font request. Text can no longer be added.
    #[wasm_bindgen(js_name = failFont)]
    pub fn fail_font(&mut self, reason: &str) {
        if let Some(resolver) = self.resolver.take() {
            resolver.resolve(Err(FontError::Io(std::io::Error::other(reason.to_string()))));
        }
        self.frame();
    }

    /// Place `text`. Errors carry the message to show the user.
    #[wasm_bindgen(js_name = setText)]
    pub fn set_text(&mut self, text: &str) -> Result<(), JsValue> {
        self.app
            .dispatch(Command::SetTextContent(text.to_string()))
            .map_err(js_error)?;
        self.frame();
        Ok(())
    }

    /// Move a slider; `axis` is one of `positionX`..`rotationZ` or `scale`.
    #[wasm_bindgen(js_name = setTransform)]
    pub fn set_transform(&mut self, axis: &str, value: f64) -> Result<bool, JsValue> {
        let axis = TransformAxis::from_name(axis)
            .ok_or_else(|| js_error(format!("unknown transform axis {axis:?}")))?;
        #[allow(clippy::unnecessary_cast)]
        let outcome = self
            .app
            .dispatch(Command::SetTransform { axis, value: value as crate::float_types::Real })
            .map_err(js_error)?;
        self.frame();
        Ok(matches!(outcome, Outcome::TransformChanged { applied: true }))
    }

    /// ASCII STL of the whole scene, to be offered as `trophy.stl`.
    #[wasm_bindgen(js_name = exportStl)]
    pub fn export_stl(&mut self) -> Result<String, JsValue> {
        match self.app.dispatch(Command::Export).map_err(js_error)? {
            Outcome::Exported(payload) => Ok(payload.contents),
            _ => Err(js_error("export produced no payload")),
        }
    }

    /// Poll the font and refresh the draw list. Call once per animation frame.
    pub fn frame(&mut self) -> usize {
        self.draw_list = self.app.frame();
        self.draw_list.len()
    }

    #[wasm_bindgen(js_name = meshCount)]
    pub fn mesh_count(&self) -> usize {
        self.draw_list.len()
    }

    #[wasm_bindgen(js_name = meshName)]
    pub fn mesh_name(&self, index: usize) -> Option<String> {
        self.draw_list.get(index).map(|m| m.name.clone())
    }

    /// Local-space triangle positions `(x,y,z)*`, three vertices per triangle.
    #[wasm_bindgen(js_name = meshPositions)]
    #[allow(clippy::unnecessary_cast)]
    pub fn mesh_positions(&self, index: usize) -> Option<Float64Array> {
        let mesh = self.draw_list.get(index)?;
        let mut out = Vec::with_capacity(mesh.geometry.triangle_count() * 9);
        mesh.geometry.visit_triangles(|tri| {
            for v in &tri {
                out.extend([v.pos.x as f64, v.pos.y as f64, v.pos.z as f64]);
            }
        });
        Some(Float64Array::from(out.as_slice()))
    }

    /// Per-vertex normals matching [`Self::mesh_positions`].
    #[wasm_bindgen(js_name = meshNormals)]
    #[allow(clippy::unnecessary_cast)]
    pub fn mesh_normals(&self, index: usize) -> Option<Float64Array> {
        let mesh = self.draw_list.get(index)?;
        let mut out = Vec::with_capacity(mesh.geometry.triangle_count() * 9);
        mesh.geometry.visit_triangles(|tri| {
            for v in &tri {
                out.extend([v.normal.x as f64, v.normal.y as f64, v.normal.z as f64]);
            }
        });
        Some(Float64Array::from(out.as_slice()))
    }

    /// Column-major 4x4 world matrix.
    #[wasm_bindgen(js_name = meshWorldMatrix)]
    pub fn mesh_world_matrix(&self, index: usize) -> Option<Float64Array> {
        let mesh = self.draw_list.get(index)?;
        #[allow(clippy::unnecessary_cast)]
        let elements: Vec<f64> = mesh.world.iter().map(|e| *e as f64).collect();
        Some(Float64Array::from(elements.as_slice()))
    }

    /// `[r, g, b, metalness, roughness]`
    #[wasm_bindgen(js_name = meshMaterial)]
    pub fn mesh_material(&self, index: usize) -> Option<Vec<f32>> {
        let material = self.draw_list.get(index)?.material;
        let [r, g, b] = material.rgb();
        Some(vec![r, g, b, material.metalness, material.roughness])
    }

    /// Local-space bounding box `[minX, minY, minZ, maxX, maxY, maxZ]`.
    #[wasm_bindgen(js_name = meshBounds)]
    #[allow(clippy::unnecessary_cast)]
    pub fn mesh_bounds(&self, index: usize) -> Option<Vec<f64>> {
        let bb = self.draw_list.get(index)?.geometry.bounding_box();
        Some(vec![
            bb.mins.x as f64,
            bb.mins.y as f64,
            bb.mins.z as f64,
            bb.maxs.x as f64,
            bb.maxs.y as f64,
            bb.maxs.z as f64,
        ])
    }
}

impl Default for TrophyApp {
    fn default() -> Self {
        TrophyApp::new()
    }
}
