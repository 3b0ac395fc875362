//! Minimal 2D drawing interface the texture generators paint through
//!
//! - [`Path`] - move/line/quadratic path construction
//! - [`Paint`] - solid colors and linear/radial gradients
//! - [`CoverageMask`] - anti-aliased rasterization of rects, paths and ellipses
//!
//! [`RasterSurface`] is the only backend; generators only see `dyn Canvas`.

mod coverage;
mod paint;
mod path;

pub use coverage::{calculate_hardness_falloff, CoverageMask, Ellipse};
pub use paint::{ColorStop, LinearGradient, Paint, RadialGradient};
pub use path::{Path, SubPath};

use glam::Vec2;

use crate::surface::RasterSurface;

/// Stroke style for [`Canvas::stroke_path`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f32,
}

impl Stroke {
    pub fn new(width: f32) -> Self {
        Self { width }
    }
}

/// Drawing operations available to texture generators
pub trait Canvas {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, paint: &Paint);

    /// Fill a path with the nonzero winding rule
    fn fill_path(&mut self, path: &Path, paint: &Paint);

    /// Stroke a path's segments
    fn stroke_path(&mut self, path: &Path, stroke: Stroke, paint: &Paint);

    /// Fill a (possibly rotated, soft-edged) ellipse
    fn fill_ellipse(&mut self, ellipse: &Ellipse, paint: &Paint);

    /// Fill the whole canvas
    fn fill_all(&mut self, paint: &Paint) {
        let (w, h) = (self.width() as f32, self.height() as f32);
        self.fill_rect(0.0, 0.0, w, h, paint);
    }

    fn size_f32(&self) -> Vec2 {
        Vec2::new(self.width() as f32, self.height() as f32)
    }
}

impl RasterSurface {
    /// Composite `paint` through a coverage mask
    pub fn composite(&mut self, mask: &CoverageMask, paint: &Paint) {
        for (x, y, coverage) in mask.covered() {
            let color = paint.color_at(Vec2::new(x as f32 + 0.5, y as f32 + 0.5));
            self.blend_pixel(x, y, color, coverage);
        }
    }
}

impl Canvas for RasterSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, paint: &Paint) {
        if let Some(mask) = CoverageMask::rect(x, y, width, height, self.width, self.height) {
            self.composite(&mask, paint);
        }
    }

    fn fill_path(&mut self, path: &Path, paint: &Paint) {
        if let Some(mask) = CoverageMask::fill(path, self.width, self.height) {
            self.composite(&mask, paint);
        }
    }

    fn stroke_path(&mut self, path: &Path, stroke: Stroke, paint: &Paint) {
        if let Some(mask) = CoverageMask::stroke(path, stroke.width, self.width, self.height) {
            self.composite(&mask, paint);
        }
    }

    fn fill_ellipse(&mut self, ellipse: &Ellipse, paint: &Paint) {
        if let Some(mask) = CoverageMask::ellipse(ellipse, self.width, self.height) {
            self.composite(&mask, paint);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{hex, rgba};

    #[test]
    fn test_fill_all_solid() {
        let mut surface = RasterSurface::new(8, 8);
        surface.fill_all(&Paint::Solid(hex(0x808080)));
        for pixel in surface.pixels() {
            assert!((pixel[0] - 128.0 / 255.0).abs() < 1e-5);
            assert!((pixel[3] - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_translucent_fill_blends() {
        let mut surface = RasterSurface::new(4, 4);
        surface.clear(hex(0xFFFFFF));
        surface.fill_rect(0.0, 0.0, 4.0, 4.0, &Paint::Solid(rgba(0, 0, 0, 0.5)));
        let pixel = surface.get_pixel(2, 2).unwrap();
        assert!((pixel[0] - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_gradient_fill_varies() {
        let mut surface = RasterSurface::new(100, 1);
        let paint = Paint::linear(
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            &[
                ColorStop::new(0.0, hex(0x000000)),
                ColorStop::new(1.0, hex(0xFFFFFF)),
            ],
        );
        surface.fill_all(&paint);
        let left = surface.get_pixel(0, 0).unwrap();
        let right = surface.get_pixel(99, 0).unwrap();
        assert!(left[0] < 0.05);
        assert!(right[0] > 0.95);
    }

    #[test]
    fn test_stroke_outside_is_noop() {
        let mut surface = RasterSurface::new(10, 10);
        let mut path = Path::new();
        path.move_to(Vec2::new(-50.0, -50.0))
            .line_to(Vec2::new(-40.0, -40.0));
        surface.stroke_path(&path, Stroke::new(2.0), &Paint::Solid(hex(0xFFFFFF)));
        assert!(surface.pixels().iter().all(|p| p[3] == 0.0));
    }
}
