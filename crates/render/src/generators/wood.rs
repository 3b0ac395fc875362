//! Wood: brown sweep, curved grain lines and a few dark knots

use std::ops::RangeInclusive;

use glam::Vec2;
use rand::{Rng, RngCore};

use super::{sample, sample_count};
use crate::canvas::{Canvas, ColorStop, Ellipse, Paint, Path, Stroke};
use crate::color::{hex, rgba, with_alpha, Color};

/// Dark to light, left to right
const BACKGROUND_STOPS: [ColorStop; 4] = [
    ColorStop::new(0.0, hex(0x8B4513)),
    ColorStop::new(0.3, hex(0xA0522D)),
    ColorStop::new(0.7, hex(0xCD853F)),
    ColorStop::new(1.0, hex(0xDEB887)),
];

const GRAIN_COUNT: RangeInclusive<usize> = 10..=20;
/// Magnitude of the control-point offset; the sign is random
const GRAIN_BEND: RangeInclusive<f32> = 10.0..=20.0;
const GRAIN_DRIFT: f32 = 5.0;
const GRAIN_OPACITY: RangeInclusive<f32> = 0.1..=0.4;
const GRAIN_WIDTH: RangeInclusive<f32> = 1.0..=5.0;
const GRAIN_COLOR: Color = rgba(101, 67, 33, 1.0);

const KNOT_COUNT: RangeInclusive<usize> = 2..=4;
const KNOT_RADIUS: RangeInclusive<f32> = 6.0..=16.0;
const KNOT_ASPECT: RangeInclusive<f32> = 0.4..=0.7;
const KNOT_TILT: f32 = 0.3;
const KNOT_OPACITY: RangeInclusive<f32> = 0.35..=0.6;
const KNOT_COLOR: Color = rgba(70, 40, 20, 1.0);
const KNOT_HARDNESS: f32 = 0.4;
/// Knots stay this fraction of the canvas away from the edges
const KNOT_MARGIN: f32 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct GrainLine {
    pub y: f32,
    pub bend: f32,
    pub drift: f32,
    pub opacity: f32,
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Knot {
    pub ellipse: Ellipse,
    pub opacity: f32,
}

pub(crate) fn grain_lines(rng: &mut dyn RngCore, size: Vec2) -> Vec<GrainLine> {
    (0..sample_count(rng, GRAIN_COUNT))
        .map(|_| {
            let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            GrainLine {
                y: rng.gen_range(0.0..size.y),
                bend: sign * sample(rng, GRAIN_BEND),
                drift: rng.gen_range(-GRAIN_DRIFT..=GRAIN_DRIFT),
                opacity: sample(rng, GRAIN_OPACITY),
                width: sample(rng, GRAIN_WIDTH),
            }
        })
        .collect()
}

pub(crate) fn knots(rng: &mut dyn RngCore, size: Vec2) -> Vec<Knot> {
    let min = size * KNOT_MARGIN;
    let max = size * (1.0 - KNOT_MARGIN);
    (0..sample_count(rng, KNOT_COUNT))
        .map(|_| {
            let radius = sample(rng, KNOT_RADIUS);
            Knot {
                ellipse: Ellipse {
                    center: Vec2::new(rng.gen_range(min.x..=max.x), rng.gen_range(min.y..=max.y)),
                    radius_x: radius,
                    radius_y: radius * sample(rng, KNOT_ASPECT),
                    angle: rng.gen_range(-KNOT_TILT..=KNOT_TILT),
                    hardness: KNOT_HARDNESS,
                },
                opacity: sample(rng, KNOT_OPACITY),
            }
        })
        .collect()
}

pub(crate) fn paint(canvas: &mut dyn Canvas, rng: &mut dyn RngCore) {
    let size = canvas.size_f32();

    canvas.fill_all(&Paint::linear(
        Vec2::ZERO,
        Vec2::new(size.x, 0.0),
        &BACKGROUND_STOPS,
    ));

    for line in grain_lines(rng, size) {
        let mut path = Path::new();
        path.move_to(Vec2::new(0.0, line.y)).quad_to(
            Vec2::new(size.x / 2.0, line.y + line.bend),
            Vec2::new(size.x, line.y + line.drift),
        );
        canvas.stroke_path(
            &path,
            Stroke::new(line.width),
            &Paint::Solid(with_alpha(GRAIN_COLOR, line.opacity)),
        );
    }

    for knot in knots(rng, size) {
        canvas.fill_ellipse(&knot.ellipse, &Paint::Solid(with_alpha(KNOT_COLOR, knot.opacity)));
    }
}
