//! JPEG encoding of finished surfaces

use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;
use tracing::debug;

use crate::constants::{FALLBACK_SLUG, FILE_NAME_PREFIX, JPEG_MIME_TYPE};
use crate::error::RenderError;
use crate::material::MaterialKind;
use crate::surface::RasterSurface;
use crate::validation::validate_surface;

/// Encoded preview handed back to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutput {
    /// Encoded image bytes
    pub bytes: Vec<u8>,
    /// Declared MIME type, always `image/jpeg`
    pub mime_type: &'static str,
    pub width: u32,
    pub height: u32,
    /// Material that was rendered, None for the neutral fallback
    pub material: Option<MaterialKind>,
}

impl RenderOutput {
    /// Material id for file names, `default` for the fallback
    pub fn material_slug(&self) -> &'static str {
        self.material.map_or(FALLBACK_SLUG, MaterialKind::id)
    }

    /// Download name in the form `cmf-design-<material>-<timestamp>.jpg`
    pub fn file_name(&self, timestamp_ms: u64) -> String {
        format!(
            "{}-{}-{}.jpg",
            FILE_NAME_PREFIX,
            self.material_slug(),
            timestamp_ms
        )
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Encode a surface as a JPEG at `quality` (1-100)
pub fn encode_jpeg(
    surface: &RasterSurface,
    quality: u8,
    material: Option<MaterialKind>,
) -> Result<RenderOutput, RenderError> {
    validate_surface(surface)?;

    let rgb = RgbImage::from_raw(surface.width, surface.height, surface.to_rgb8()).ok_or_else(
        || RenderError::InvalidSurface {
            reason: "flattened buffer does not match surface dimensions".to_string(),
        },
    )?;

    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, quality.clamp(1, 100)).encode_image(&rgb)?;

    debug!(
        "encode_jpeg: {}x{} at q{} -> {} bytes",
        surface.width,
        surface.height,
        quality,
        bytes.len()
    );

    Ok(RenderOutput {
        bytes,
        mime_type: JPEG_MIME_TYPE,
        width: surface.width,
        height: surface.height,
        material,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::hex;

    #[test]
    fn test_encode_flat_surface() {
        let mut surface = RasterSurface::new(32, 16);
        surface.clear(hex(0x336699));

        let output = encode_jpeg(&surface, 90, None).unwrap();
        assert_eq!(output.mime_type, "image/jpeg");
        assert_eq!((output.width, output.height), (32, 16));
        // JPEG SOI marker
        assert_eq!(&output.bytes[..2], &[0xFF, 0xD8]);

        let decoded = image::load_from_memory(&output.bytes).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (32, 16));
        let pixel = decoded.get_pixel(8, 8);
        assert!((pixel[2] as i32 - 0x99).abs() < 8);
    }

    #[test]
    fn test_encode_rejects_empty_surface() {
        let surface = RasterSurface::new(0, 0);
        assert!(matches!(
            encode_jpeg(&surface, 90, None),
            Err(RenderError::InvalidSurface { .. })
        ));
    }

    #[test]
    fn test_file_name_convention() {
        let mut surface = RasterSurface::new(8, 8);
        surface.clear(hex(0xFFFFFF));

        let wood = encode_jpeg(&surface, 80, Some(MaterialKind::Wood)).unwrap();
        assert_eq!(wood.file_name(1700000000000), "cmf-design-wood-1700000000000.jpg");

        let fallback = encode_jpeg(&surface, 80, None).unwrap();
        assert_eq!(fallback.file_name(5), "cmf-design-default-5.jpg");
    }
}
