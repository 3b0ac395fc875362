//! Marble: pale diagonal stone with branching gray veins

use std::ops::RangeInclusive;

use glam::Vec2;
use rand::{Rng, RngCore};

use super::{jitter, point_in, sample, sample_count};
use crate::canvas::{Canvas, ColorStop, Paint, Path, Stroke};
use crate::color::{hex, rgba, with_alpha, Color};

/// Beige, white, lavender, light gray along the diagonal
const STONE_STOPS: [ColorStop; 4] = [
    ColorStop::new(0.0, hex(0xF5F5DC)),
    ColorStop::new(0.3, hex(0xFFFFFF)),
    ColorStop::new(0.6, hex(0xE6E6FA)),
    ColorStop::new(1.0, hex(0xD3D3D3)),
];

const VEIN_COUNT: RangeInclusive<usize> = 10..=15;
const VEIN_SEGMENTS: RangeInclusive<usize> = 3..=6;
/// Largest per-axis step of a vein segment
const VEIN_STEP: f32 = 40.0;
const VEIN_OPACITY: RangeInclusive<f32> = 0.2..=0.6;
const VEIN_WIDTH: RangeInclusive<f32> = 1.0..=3.0;
const VEIN_COLOR: Color = rgba(128, 128, 128, 1.0);

const BRANCH_CHANCE: f64 = 0.25;
const BRANCH_SEGMENTS: usize = 2;
const BRANCH_WIDTH_SCALE: f32 = 0.5;

/// A polyline of quadratic segments: start then (control, end) pairs
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct VeinPath {
    pub start: Vec2,
    pub segments: Vec<(Vec2, Vec2)>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Vein {
    pub trunk: VeinPath,
    pub branches: Vec<VeinPath>,
    pub opacity: f32,
    pub width: f32,
}

fn wander(rng: &mut dyn RngCore, start: Vec2, segments: usize) -> VeinPath {
    let mut cursor = start;
    let segments = (0..segments)
        .map(|_| {
            let control = cursor + Vec2::new(jitter(rng, VEIN_STEP), jitter(rng, VEIN_STEP));
            let end = cursor + Vec2::new(jitter(rng, VEIN_STEP), jitter(rng, VEIN_STEP));
            cursor = end;
            (control, end)
        })
        .collect();
    VeinPath { start, segments }
}

pub(crate) fn veins(rng: &mut dyn RngCore, size: Vec2) -> Vec<Vein> {
    (0..sample_count(rng, VEIN_COUNT))
        .map(|_| {
            let start = point_in(rng, size);
            let segment_count = sample_count(rng, VEIN_SEGMENTS);
            let trunk = wander(rng, start, segment_count);

            let mut branches = Vec::new();
            for (_, joint) in &trunk.segments {
                if rng.gen_bool(BRANCH_CHANCE) {
                    branches.push(wander(rng, *joint, BRANCH_SEGMENTS));
                }
            }

            Vein {
                trunk,
                branches,
                opacity: sample(rng, VEIN_OPACITY),
                width: sample(rng, VEIN_WIDTH),
            }
        })
        .collect()
}

fn to_path(vein: &VeinPath) -> Path {
    let mut path = Path::new();
    path.move_to(vein.start);
    for (control, end) in &vein.segments {
        path.quad_to(*control, *end);
    }
    path
}

pub(crate) fn paint(canvas: &mut dyn Canvas, rng: &mut dyn RngCore) {
    let size = canvas.size_f32();

    canvas.fill_all(&Paint::linear(Vec2::ZERO, size, &STONE_STOPS));

    for vein in veins(rng, size) {
        let color = Paint::Solid(with_alpha(VEIN_COLOR, vein.opacity));
        canvas.stroke_path(&to_path(&vein.trunk), Stroke::new(vein.width), &color);

        let branch_stroke = Stroke::new(vein.width * BRANCH_WIDTH_SCALE);
        for branch in &vein.branches {
            canvas.stroke_path(&to_path(branch), branch_stroke, &color);
        }
    }
}
