//! Leather: radial brown hide, fine pores and soft wrinkle curves

use std::ops::RangeInclusive;

use glam::Vec2;
use rand::RngCore;

use super::{jitter, point_in, sample, sample_count};
use crate::canvas::{Canvas, ColorStop, Ellipse, Paint, Path, Stroke};
use crate::color::{hex, rgba, with_alpha, Color};

const HIDE_STOPS: [ColorStop; 3] = [
    ColorStop::new(0.0, hex(0x8B5A2B)),
    ColorStop::new(0.6, hex(0x6B4226)),
    ColorStop::new(1.0, hex(0x4A2C17)),
];
const HIDE_REACH: f32 = 0.75;

const PORE_COUNT: usize = 200;
const PORE_RADIUS: RangeInclusive<f32> = 0.5..=2.5;
const PORE_OPACITY: RangeInclusive<f32> = 0.1..=0.35;
const PORE_COLOR: Color = rgba(30, 15, 5, 1.0);

const WRINKLE_COUNT: RangeInclusive<usize> = 8..=10;
const WRINKLE_SEGMENTS: RangeInclusive<usize> = 2..=4;
/// Per-axis reach of one wrinkle segment
const WRINKLE_STEP: f32 = 30.0;
const WRINKLE_OPACITY: RangeInclusive<f32> = 0.1..=0.25;
const WRINKLE_WIDTH: RangeInclusive<f32> = 0.5..=1.5;
const WRINKLE_COLOR: Color = rgba(40, 20, 10, 1.0);

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Pore {
    pub center: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

/// A wrinkle as a start point followed by (control, end) pairs
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Wrinkle {
    pub start: Vec2,
    pub segments: Vec<(Vec2, Vec2)>,
    pub opacity: f32,
    pub width: f32,
}

pub(crate) fn pores(rng: &mut dyn RngCore, size: Vec2) -> Vec<Pore> {
    (0..PORE_COUNT)
        .map(|_| Pore {
            center: point_in(rng, size),
            radius: sample(rng, PORE_RADIUS),
            opacity: sample(rng, PORE_OPACITY),
        })
        .collect()
}

pub(crate) fn wrinkles(rng: &mut dyn RngCore, size: Vec2) -> Vec<Wrinkle> {
    (0..sample_count(rng, WRINKLE_COUNT))
        .map(|_| {
            let start = point_in(rng, size);
            let mut cursor = start;
            let segments = (0..sample_count(rng, WRINKLE_SEGMENTS))
                .map(|_| {
                    let control =
                        cursor + Vec2::new(jitter(rng, WRINKLE_STEP), jitter(rng, WRINKLE_STEP));
                    let end =
                        cursor + Vec2::new(jitter(rng, WRINKLE_STEP), jitter(rng, WRINKLE_STEP));
                    cursor = end;
                    (control, end)
                })
                .collect();
            Wrinkle {
                start,
                segments,
                opacity: sample(rng, WRINKLE_OPACITY),
                width: sample(rng, WRINKLE_WIDTH),
            }
        })
        .collect()
}

pub(crate) fn paint(canvas: &mut dyn Canvas, rng: &mut dyn RngCore) {
    let size = canvas.size_f32();

    canvas.fill_all(&Paint::radial(
        size / 2.0,
        0.0,
        size.max_element() * HIDE_REACH,
        &HIDE_STOPS,
    ));

    for pore in pores(rng, size) {
        canvas.fill_ellipse(
            &Ellipse::circle(pore.center, pore.radius),
            &Paint::Solid(with_alpha(PORE_COLOR, pore.opacity)),
        );
    }

    for wrinkle in wrinkles(rng, size) {
        let mut path = Path::new();
        path.move_to(wrinkle.start);
        for (control, end) in &wrinkle.segments {
            path.quad_to(*control, *end);
        }
        canvas.stroke_path(
            &path,
            Stroke::new(wrinkle.width),
            &Paint::Solid(with_alpha(WRINKLE_COLOR, wrinkle.opacity)),
        );
    }
}
