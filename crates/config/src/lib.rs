//! Shared configuration for CMF material-swap rendering
//!
//! This crate provides the single source of truth for canvas dimensions and
//! output encoding settings shared by the renderer and the CLI.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default canvas edge length in pixels
pub const DEFAULT_CANVAS_SIZE: u32 = 512;

/// Canvas edge length used by the lighter preview variant
pub const COMPACT_CANVAS_SIZE: u32 = 400;

/// Default JPEG quality (0.9 on the browser's 0-1 scale)
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Canvas size the silhouette geometry is authored against
pub const REFERENCE_CANVAS_SIZE: f32 = 512.0;

/// Smallest canvas edge accepted from configuration
pub const MIN_CANVAS_SIZE: u32 = 16;

/// Largest canvas edge accepted from configuration
pub const MAX_CANVAS_SIZE: u32 = 4096;

/// Environment variable overriding the square canvas size
pub const ENV_CANVAS_SIZE: &str = "CMF_CANVAS_SIZE";

/// Environment variable overriding the JPEG quality
pub const ENV_JPEG_QUALITY: &str = "CMF_JPEG_QUALITY";

/// Render configuration for one material preview
///
/// Deserialized values go through the same clamping as the builders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRenderConfig")]
pub struct RenderConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// JPEG quality 1-100
    pub jpeg_quality: u8,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_SIZE,
            height: DEFAULT_CANVAS_SIZE,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

/// Unchecked wire form of [`RenderConfig`]
#[derive(Deserialize)]
#[serde(default)]
struct RawRenderConfig {
    width: u32,
    height: u32,
    jpeg_quality: u8,
}

impl Default for RawRenderConfig {
    fn default() -> Self {
        let config = RenderConfig::default();
        Self {
            width: config.width,
            height: config.height,
            jpeg_quality: config.jpeg_quality,
        }
    }
}

impl From<RawRenderConfig> for RenderConfig {
    fn from(raw: RawRenderConfig) -> Self {
        Self::new(raw.width, raw.height).with_quality(raw.jpeg_quality)
    }
}

impl RenderConfig {
    /// Create a config with the given dimensions and default quality
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: clamp_size(width),
            height: clamp_size(height),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }

    /// Square config at the compact 400x400 size
    pub fn compact() -> Self {
        Self::new(COMPACT_CANVAS_SIZE, COMPACT_CANVAS_SIZE)
    }

    /// Parse overrides from `CMF_CANVAS_SIZE` and `CMF_JPEG_QUALITY`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    ///
    /// Unparseable values are ignored with a warning and the default is kept.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_CANVAS_SIZE) {
            match raw.trim().parse::<u32>() {
                Ok(size) => {
                    config.width = clamp_size(size);
                    config.height = clamp_size(size);
                }
                Err(_) => warn!("Ignoring invalid {}={:?}", ENV_CANVAS_SIZE, raw),
            }
        }

        if let Some(raw) = lookup(ENV_JPEG_QUALITY) {
            match raw.trim().parse::<u8>() {
                Ok(quality) => config = config.with_quality(quality),
                Err(_) => warn!("Ignoring invalid {}={:?}", ENV_JPEG_QUALITY, raw),
            }
        }

        config
    }

    /// Replace the canvas size with a square of the given edge
    pub fn with_size(mut self, size: u32) -> Self {
        self.width = clamp_size(size);
        self.height = clamp_size(size);
        self
    }

    /// Replace the JPEG quality, clamped to 1-100
    pub fn with_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality.clamp(1, 100);
        self
    }

    /// Scale applied to geometry authored at 512x512
    pub fn geometry_scale(&self) -> f32 {
        self.width.min(self.height) as f32 / REFERENCE_CANVAS_SIZE
    }
}

fn clamp_size(size: u32) -> u32 {
    size.clamp(MIN_CANVAS_SIZE, MAX_CANVAS_SIZE)
}
