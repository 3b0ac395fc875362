//! Paint sources: solid colors and linear/radial gradients

use glam::Vec2;

use crate::color::{lerp, Color};

/// A gradient stop at `offset` in 0..=1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Color,
}

impl ColorStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Gradient along the line from `start` to `end`
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

/// Gradient between two concentric circles around `center`
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub stops: Vec<ColorStop>,
}

/// What a fill or stroke is painted with
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    Linear(LinearGradient),
    Radial(RadialGradient),
}

impl Paint {
    pub fn linear(start: Vec2, end: Vec2, stops: &[ColorStop]) -> Self {
        Self::Linear(LinearGradient {
            start,
            end,
            stops: sorted_stops(stops),
        })
    }

    pub fn radial(center: Vec2, inner_radius: f32, outer_radius: f32, stops: &[ColorStop]) -> Self {
        Self::Radial(RadialGradient {
            center,
            inner_radius: inner_radius.max(0.0),
            outer_radius: outer_radius.max(0.0),
            stops: sorted_stops(stops),
        })
    }

    /// Color at a point in surface coordinates
    pub fn color_at(&self, point: Vec2) -> Color {
        match self {
            Paint::Solid(color) => *color,
            Paint::Linear(gradient) => {
                let axis = gradient.end - gradient.start;
                let length_sq = axis.length_squared();
                let t = if length_sq <= f32::EPSILON {
                    0.0
                } else {
                    (point - gradient.start).dot(axis) / length_sq
                };
                sample_stops(&gradient.stops, t)
            }
            Paint::Radial(gradient) => {
                let span = gradient.outer_radius - gradient.inner_radius;
                let distance = point.distance(gradient.center);
                let t = if span.abs() <= f32::EPSILON {
                    if distance <= gradient.inner_radius { 0.0 } else { 1.0 }
                } else {
                    (distance - gradient.inner_radius) / span
                };
                sample_stops(&gradient.stops, t)
            }
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

fn sorted_stops(stops: &[ColorStop]) -> Vec<ColorStop> {
    let mut stops: Vec<ColorStop> = stops
        .iter()
        .map(|s| ColorStop::new(s.offset.clamp(0.0, 1.0), s.color))
        .collect();
    stops.sort_by(|a, b| a.offset.total_cmp(&b.offset));
    stops
}

/// Interpolate the stop list at `t`, padding with the end colors
fn sample_stops(stops: &[ColorStop], t: f32) -> Color {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return [0.0, 0.0, 0.0, 0.0];
    };
    let t = t.clamp(0.0, 1.0);
    if t <= first.offset {
        return first.color;
    }
    if t >= last.offset {
        return last.color;
    }

    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            if span <= f32::EPSILON {
                return b.color;
            }
            return lerp(a.color, b.color, (t - a.offset) / span);
        }
    }
    last.color
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::hex;

    const BLACK: Color = hex(0x000000);
    const WHITE: Color = hex(0xFFFFFF);

    #[test]
    fn test_linear_gradient_endpoints_and_middle() {
        let paint = Paint::linear(
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            &[ColorStop::new(0.0, BLACK), ColorStop::new(1.0, WHITE)],
        );
        assert_eq!(paint.color_at(Vec2::new(-10.0, 0.0)), BLACK);
        assert_eq!(paint.color_at(Vec2::new(200.0, 50.0)), WHITE);
        let mid = paint.color_at(Vec2::new(50.0, 80.0));
        assert!((mid[0] - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_radial_gradient() {
        let paint = Paint::radial(
            Vec2::new(50.0, 50.0),
            0.0,
            50.0,
            &[ColorStop::new(0.0, WHITE), ColorStop::new(1.0, BLACK)],
        );
        assert_eq!(paint.color_at(Vec2::new(50.0, 50.0)), WHITE);
        assert_eq!(paint.color_at(Vec2::new(0.0, 0.0)), BLACK);
        let half = paint.color_at(Vec2::new(75.0, 50.0));
        assert!((half[0] - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_unsorted_stops_are_sorted() {
        let paint = Paint::linear(
            Vec2::ZERO,
            Vec2::new(10.0, 0.0),
            &[ColorStop::new(1.0, WHITE), ColorStop::new(0.0, BLACK)],
        );
        assert_eq!(paint.color_at(Vec2::ZERO), BLACK);
    }

    #[test]
    fn test_degenerate_gradient_uses_first_stop() {
        let paint = Paint::linear(
            Vec2::ONE,
            Vec2::ONE,
            &[ColorStop::new(0.0, BLACK), ColorStop::new(1.0, WHITE)],
        );
        assert_eq!(paint.color_at(Vec2::new(40.0, 40.0)), BLACK);
    }
}
