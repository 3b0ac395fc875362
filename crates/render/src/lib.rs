//! CMF material-swap renderer - procedural material previews
//!
//! This crate renders the preview images for the material-swap tool:
//! - [`material`] - The six material presets, labels and base colors
//! - [`generators`] - Per-material background texture generators
//! - [`canvas`] - Paths, paints and coverage masks behind the 2D canvas
//! - [`surface`] - CPU RGBA surface the canvas draws into
//! - [`silhouette`] - Product silhouette composited over the texture
//! - [`encode`] - JPEG encoding and output naming
//! - [`renderer`] - End-to-end render entry point

pub mod canvas;
pub mod color;
pub mod constants;
pub mod encode;
pub mod error;
pub mod generators;
pub mod material;
pub mod renderer;
pub mod silhouette;
pub mod surface;
pub mod validation;

pub use encode::*;
pub use error::*;
pub use material::*;
pub use renderer::*;
pub use surface::*;
pub use validation::*;
