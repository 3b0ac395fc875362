//! Product silhouette composited over the material texture
//!
//! Drawn in four passes over the same rounded rectangle: drop shadow,
//! material body, diagonal highlight, thin border.

use glam::Vec2;
use tracing::trace;

use crate::canvas::{Canvas, ColorStop, Paint, Path, Stroke};
use crate::color::{rgba, Color};
use crate::constants::{
    BORDER_WIDTH, SHADOW_OFFSET, SILHOUETTE_CORNER_RADIUS, SILHOUETTE_HEIGHT, SILHOUETTE_WIDTH,
};

const SHADOW_COLOR: Color = rgba(0, 0, 0, 0.2);
const HIGHLIGHT_START: Color = rgba(255, 255, 255, 0.3);
const HIGHLIGHT_END: Color = rgba(255, 255, 255, 0.05);
const BORDER_COLOR: Color = rgba(0, 0, 0, 0.3);

/// Centered rounded rectangle standing in for the product outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Silhouette {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
    pub shadow_offset: f32,
    pub border_width: f32,
}

impl Silhouette {
    /// Silhouette for a canvas, scaled from the 512x512 layout by `scale`
    pub fn centered(canvas_width: u32, canvas_height: u32, scale: f32) -> Self {
        let width = SILHOUETTE_WIDTH * scale;
        let height = SILHOUETTE_HEIGHT * scale;
        Self {
            x: ((canvas_width as f32 - width) / 2.0).round(),
            y: ((canvas_height as f32 - height) / 2.0).round(),
            width,
            height,
            corner_radius: SILHOUETTE_CORNER_RADIUS * scale,
            shadow_offset: SHADOW_OFFSET * scale,
            border_width: BORDER_WIDTH * scale,
        }
    }

    /// Pixel bounds (x, y, width, height) of the body, excluding shadow and border
    pub fn bounds(&self) -> (u32, u32, u32, u32) {
        (
            self.x.max(0.0) as u32,
            self.y.max(0.0) as u32,
            self.width.round() as u32,
            self.height.round() as u32,
        )
    }

    /// Center point of the body
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn path(&self) -> Path {
        Path::rounded_rect(self.x, self.y, self.width, self.height, self.corner_radius)
    }

    /// Draw shadow, body, highlight and border over whatever is on the canvas
    pub fn composite(&self, canvas: &mut dyn Canvas, base_color: Color) {
        trace!("Silhouette::composite: {:?}, base={:?}", self.bounds(), base_color);
        let body = self.path();

        let shadow = body.translated(Vec2::splat(self.shadow_offset));
        canvas.fill_path(&shadow, &Paint::Solid(SHADOW_COLOR));

        canvas.fill_path(&body, &Paint::Solid(base_color));

        let top_left = Vec2::new(self.x, self.y);
        let bottom_right = top_left + Vec2::new(self.width, self.height);
        canvas.fill_path(
            &body,
            &Paint::linear(
                top_left,
                bottom_right,
                &[
                    ColorStop::new(0.0, HIGHLIGHT_START),
                    ColorStop::new(1.0, HIGHLIGHT_END),
                ],
            ),
        );

        canvas.stroke_path(&body, Stroke::new(self.border_width), &Paint::Solid(BORDER_COLOR));
    }
}
