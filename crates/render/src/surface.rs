//! CPU raster surface for one material preview

use crate::color::Color;

/// Straight-alpha RGBA pixels in row-major order.
///
/// Each render creates its own surface; nothing is shared between renders.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    pub width: u32,
    pub height: u32,
    pixels: Vec<Color>,
}

impl RasterSurface {
    /// Fully transparent surface
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0.0; 4]; (width as usize) * (height as usize)],
        }
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| (y as usize) * (self.width as usize) + (x as usize))
    }

    /// Pixel at (x, y), None outside the surface
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.offset(x, y).and_then(|i| self.pixels.get(i).copied())
    }

    /// Overwrite a pixel; writes outside the surface are dropped
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if let Some(pixel) = self.offset(x, y).and_then(|i| self.pixels.get_mut(i)) {
            *pixel = color;
        }
    }

    /// Source-over blend of `color` at `opacity` (coverage) onto a pixel.
    ///
    /// Straight alpha: the color math is only exact over an opaque pixel, so
    /// paint an opaque background before blending onto a fresh surface.
    #[inline]
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Color, opacity: f32) {
        let alpha = (color[3] * opacity).clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let Some(pixel) = self.offset(x, y).and_then(|i| self.pixels.get_mut(i)) else {
            return;
        };

        let keep = 1.0 - alpha;
        for channel in 0..3 {
            pixel[channel] = color[channel] * alpha + pixel[channel] * keep;
        }
        pixel[3] = alpha + pixel[3] * keep;
    }

    /// Flatten onto black and quantize to packed 8-bit RGB.
    ///
    /// Transparent regions come out black, matching a browser canvas JPEG export.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|pixel| {
                let alpha = pixel[3].clamp(0.0, 1.0);
                [0, 1, 2].map(|c| quantize(pixel[c] * alpha))
            })
            .collect()
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }
}

#[inline]
fn quantize(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_surface_is_transparent() {
        let surface = RasterSurface::new(64, 32);
        assert_eq!(surface.pixel_count(), 64 * 32);
        assert!(surface.pixels().iter().all(|p| p[3] == 0.0));
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut surface = RasterSurface::new(4, 4);
        surface.set_pixel(2, 3, [0.2, 0.4, 0.6, 1.0]);
        assert_eq!(surface.get_pixel(2, 3), Some([0.2, 0.4, 0.6, 1.0]));

        surface.set_pixel(4, 0, [1.0; 4]);
        surface.blend_pixel(0, 4, [1.0; 4], 1.0);
        assert_eq!(surface.get_pixel(4, 0), None);
        assert_eq!(surface.pixels().iter().filter(|p| p[3] > 0.0).count(), 1);
    }

    #[test]
    fn test_half_coverage_blend() {
        let mut surface = RasterSurface::new(3, 3);
        surface.clear([0.0, 0.0, 1.0, 1.0]);
        surface.blend_pixel(1, 1, [1.0, 0.0, 0.0, 1.0], 0.5);

        let pixel = surface.get_pixel(1, 1).unwrap();
        assert!((pixel[0] - 0.5).abs() < 1e-6);
        assert!((pixel[2] - 0.5).abs() < 1e-6);
        assert!((pixel[3] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_alpha_blend_is_noop() {
        let mut surface = RasterSurface::new(1, 1);
        surface.clear([0.3, 0.3, 0.3, 1.0]);
        surface.blend_pixel(0, 0, [1.0, 1.0, 1.0, 0.0], 1.0);
        assert_eq!(surface.get_pixel(0, 0), Some([0.3, 0.3, 0.3, 1.0]));
    }

    #[test]
    fn test_to_rgb8_flattens_over_black() {
        let mut surface = RasterSurface::new(3, 1);
        surface.set_pixel(0, 0, [1.0, 1.0, 1.0, 1.0]);
        surface.set_pixel(1, 0, [1.0, 1.0, 1.0, 0.0]);
        surface.set_pixel(2, 0, [1.0, 0.0, 0.0, 0.5]);

        assert_eq!(surface.to_rgb8(), vec![255, 255, 255, 0, 0, 0, 128, 0, 0]);
    }
}
