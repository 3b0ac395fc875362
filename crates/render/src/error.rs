//! Error types for rendering.

use thiserror::Error;

/// Errors surfaced by a render call. Generators cannot fail, so every
/// variant comes from encoding or from the task running the render.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid surface: {reason}")]
    InvalidSurface { reason: String },

    #[error("JPEG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Render task failed: {0}")]
    Worker(String),
}
