use crate::constants::MAX_JPEG_DIMENSION;
use crate::error::RenderError;
use crate::surface::RasterSurface;

/// Check that a surface of `width` x `height` can be painted and encoded.
///
/// Runs before any pixel buffer is allocated.
pub fn validate_dimensions(width: u32, height: u32) -> Result<(), RenderError> {
    if width == 0 || height == 0 {
        return Err(invalid(format!("zero-sized surface {}x{}", width, height)));
    }

    if width > MAX_JPEG_DIMENSION || height > MAX_JPEG_DIMENSION {
        return Err(invalid(format!(
            "{}x{} exceeds the JPEG limit of {}",
            width, height, MAX_JPEG_DIMENSION
        )));
    }

    Ok(())
}

/// Check a surface can be encoded: non-zero, within JPEG limits, and with a
/// pixel buffer matching its dimensions.
pub fn validate_surface(surface: &RasterSurface) -> Result<(), RenderError> {
    validate_dimensions(surface.width, surface.height)?;

    let expected = (surface.width as usize) * (surface.height as usize);
    if surface.pixel_count() != expected {
        return Err(invalid(format!(
            "pixel buffer holds {} pixels, expected {}",
            surface.pixel_count(),
            expected
        )));
    }

    Ok(())
}

fn invalid(reason: String) -> RenderError {
    RenderError::InvalidSurface { reason }
}
