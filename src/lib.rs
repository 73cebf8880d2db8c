//! A **3D trophy customizer**: a procedural trophy model, extruded and bevelled text that
//! can be engraved on it, and export of the combined scene as STL.
//!
//! The crate owns scene state and geometry; a host (browser page or command line) owns
//! the window, widgets and renderer and talks to an [`App`](app::App) through
//! [`Command`](app::Command)s.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): binary `.stl` via `stl_io`
//! - **truetype-text**: load `.ttf`/`.otf` fonts in addition to three.js typeface JSON
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon for multithreading
//! - **wasm**: `wasm-bindgen` binding exposing `TrophyApp` to JavaScript

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod aabb;
pub mod app;
pub mod errors;
pub mod export;
pub mod float_types;
pub mod font;
pub mod io;
pub mod mesh;
pub mod scene;
pub mod text;
pub mod text_mesh;
pub mod traits;
pub mod triangulated;
pub mod trophy;

#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use app::{App, Command, Outcome};
pub use errors::{FontError, TextError};
pub use export::{StlPayload, export_scene};
pub use mesh::Mesh;
pub use trophy::build_trophy;
