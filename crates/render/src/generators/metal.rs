//! Metal: radial gray body, a diagonal specular sweep and brushed lines

use std::ops::RangeInclusive;

use glam::Vec2;
use rand::{Rng, RngCore};

use super::{jitter, sample, sample_count};
use crate::canvas::{Canvas, ColorStop, Paint, Path, Stroke};
use crate::color::{hex, rgba, with_alpha, Color};

const BODY_STOPS: [ColorStop; 3] = [
    ColorStop::new(0.0, hex(0xE8E8E8)),
    ColorStop::new(0.5, hex(0xC0C0C0)),
    ColorStop::new(1.0, hex(0x808080)),
];
/// Outer radius of the body gradient relative to the longer canvas edge
const BODY_REACH: f32 = 0.75;

const SHEEN_OPACITY: RangeInclusive<f32> = 0.1..=0.4;
const WHITE: Color = rgba(255, 255, 255, 1.0);
const BLACK: Color = rgba(0, 0, 0, 1.0);

const BRUSH_COUNT: RangeInclusive<usize> = 20..=30;
/// Horizontal drift of a brush line across the full height
const BRUSH_LEAN: f32 = 4.0;
const BRUSH_WIDTH: RangeInclusive<f32> = 0.5..=1.5;
const BRUSH_OPACITY: RangeInclusive<f32> = 0.03..=0.12;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BrushLine {
    pub x: f32,
    pub lean: f32,
    pub width: f32,
    pub opacity: f32,
    pub light: bool,
}

pub(crate) fn brush_lines(rng: &mut dyn RngCore, size: Vec2) -> Vec<BrushLine> {
    (0..sample_count(rng, BRUSH_COUNT))
        .map(|_| BrushLine {
            x: rng.gen_range(0.0..size.x),
            lean: jitter(rng, BRUSH_LEAN),
            width: sample(rng, BRUSH_WIDTH),
            opacity: sample(rng, BRUSH_OPACITY),
            light: rng.gen_bool(0.5),
        })
        .collect()
}

pub(crate) fn paint(canvas: &mut dyn Canvas, rng: &mut dyn RngCore) {
    let size = canvas.size_f32();
    let center = size / 2.0;

    canvas.fill_all(&Paint::radial(
        center,
        0.0,
        size.max_element() * BODY_REACH,
        &BODY_STOPS,
    ));

    let sheen = sample(rng, SHEEN_OPACITY);
    canvas.fill_all(&Paint::linear(
        Vec2::ZERO,
        size,
        &[
            ColorStop::new(0.0, with_alpha(WHITE, 0.0)),
            ColorStop::new(0.5, with_alpha(WHITE, sheen)),
            ColorStop::new(1.0, with_alpha(WHITE, 0.0)),
        ],
    ));

    for line in brush_lines(rng, size) {
        let mut path = Path::new();
        path.move_to(Vec2::new(line.x, 0.0))
            .line_to(Vec2::new(line.x + line.lean, size.y));
        let tone = if line.light { WHITE } else { BLACK };
        canvas.stroke_path(
            &path,
            Stroke::new(line.width),
            &Paint::Solid(with_alpha(tone, line.opacity)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn test_brush_lines_in_range() {
        let size = Vec2::splat(512.0);
        for seed in SEEDS {
            let lines = brush_lines(&mut seeded(seed), size);
            assert!(BRUSH_COUNT.contains(&lines.len()));
            for line in lines {
                assert!(line.lean.abs() <= BRUSH_LEAN);
                assert!(BRUSH_WIDTH.contains(&line.width));
                assert!(BRUSH_OPACITY.contains(&line.opacity));
            }
        }
    }

    #[test]
    fn test_center_is_lighter_than_corner() {
        let surface = painted(paint, 128, 9);
        let center = surface.get_pixel(64, 64).unwrap();
        let corner = surface.get_pixel(0, 127).unwrap();
        assert!(center[0] > corner[0]);
    }
}
