//! Carbon fiber: 2-over-2 twill of dark 8px cells with a faint sheen

use std::ops::RangeInclusive;

use glam::Vec2;
use rand::{Rng, RngCore};

use super::{jitter, sample, sample_count};
use crate::canvas::{Canvas, Paint, Path, Stroke};
use crate::color::{hex, rgba, with_alpha, Color};

const BASE: Color = hex(0x1A1A1A);
const CELL_SIZE: u32 = 8;
/// Tow running over / under
const CELL_TONES: [Color; 2] = [hex(0x2B2B2B), hex(0x202020)];

const SHEEN_COUNT: RangeInclusive<usize> = 15..=20;
const SHEEN_LEAN: f32 = 6.0;
const SHEEN_WIDTH: RangeInclusive<f32> = 1.0..=3.0;
const SHEEN_OPACITY: RangeInclusive<f32> = 0.03..=0.08;
const SHEEN_COLOR: Color = rgba(255, 255, 255, 1.0);

/// Tone index for a weave cell. Each tow spans two cells and the pattern
/// shifts one cell per row, giving the diagonal twill.
pub(crate) fn twill_tone(column: u32, row: u32) -> usize {
    if (column + row) % 4 < 2 { 0 } else { 1 }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SheenLine {
    pub x: f32,
    pub lean: f32,
    pub width: f32,
    pub opacity: f32,
}

pub(crate) fn sheen_lines(rng: &mut dyn RngCore, size: Vec2) -> Vec<SheenLine> {
    (0..sample_count(rng, SHEEN_COUNT))
        .map(|_| SheenLine {
            x: rng.gen_range(0.0..size.x),
            lean: jitter(rng, SHEEN_LEAN),
            width: sample(rng, SHEEN_WIDTH),
            opacity: sample(rng, SHEEN_OPACITY),
        })
        .collect()
}

pub(crate) fn paint(canvas: &mut dyn Canvas, rng: &mut dyn RngCore) {
    let size = canvas.size_f32();
    canvas.fill_all(&Paint::Solid(BASE));

    let tones = CELL_TONES.map(Paint::Solid);
    let cell = CELL_SIZE as f32;
    for row in 0..canvas.height().div_ceil(CELL_SIZE) {
        for column in 0..canvas.width().div_ceil(CELL_SIZE) {
            canvas.fill_rect(
                column as f32 * cell,
                row as f32 * cell,
                cell,
                cell,
                &tones[twill_tone(column, row)],
            );
        }
    }

    for line in sheen_lines(rng, size) {
        let mut path = Path::new();
        path.move_to(Vec2::new(line.x, 0.0))
            .line_to(Vec2::new(line.x + line.lean, size.y));
        canvas.stroke_path(
            &path,
            Stroke::new(line.width),
            &Paint::Solid(with_alpha(SHEEN_COLOR, line.opacity)),
        );
    }
}
