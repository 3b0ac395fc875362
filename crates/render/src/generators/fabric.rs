//! Fabric: tan base, a 4px thread grid and scattered fiber specks

use std::ops::RangeInclusive;

use glam::Vec2;
use rand::{Rng, RngCore};

use super::{point_in, sample};
use crate::canvas::{Canvas, Paint, Path, Stroke};
use crate::color::{hex, rgba, with_alpha, Color};

const BASE: Color = hex(0xD2B48C);

const THREAD_SPACING: f32 = 4.0;
const THREAD_WIDTH: f32 = 1.0;
const THREAD_COLOR: Color = rgba(139, 115, 85, 0.25);

const FIBER_COUNT: usize = 100;
const FIBER_SIZE: RangeInclusive<u32> = 1..=4;
const FIBER_OPACITY: RangeInclusive<f32> = 0.05..=0.3;
const FIBER_LIGHT: Color = rgba(255, 248, 235, 1.0);
const FIBER_DARK: Color = rgba(101, 80, 60, 1.0);

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Fiber {
    pub origin: Vec2,
    pub size: f32,
    pub opacity: f32,
    pub light: bool,
}

pub(crate) fn fibers(rng: &mut dyn RngCore, size: Vec2) -> Vec<Fiber> {
    (0..FIBER_COUNT)
        .map(|_| Fiber {
            origin: point_in(rng, size),
            size: rng.gen_range(FIBER_SIZE) as f32,
            opacity: sample(rng, FIBER_OPACITY),
            light: rng.gen_bool(0.5),
        })
        .collect()
}

/// One subpath per thread, centered on pixel rows/columns every 4px
fn thread_grid(size: Vec2, horizontal: bool) -> Path {
    let mut path = Path::new();
    let extent = if horizontal { size.y } else { size.x };
    let mut offset = 0.5;
    while offset < extent {
        if horizontal {
            path.move_to(Vec2::new(0.0, offset))
                .line_to(Vec2::new(size.x, offset));
        } else {
            path.move_to(Vec2::new(offset, 0.0))
                .line_to(Vec2::new(offset, size.y));
        }
        offset += THREAD_SPACING;
    }
    path
}

pub(crate) fn paint(canvas: &mut dyn Canvas, rng: &mut dyn RngCore) {
    let size = canvas.size_f32();
    canvas.fill_all(&Paint::Solid(BASE));

    // Warp and weft are separate passes so crossings read darker
    let threads = Paint::Solid(THREAD_COLOR);
    canvas.stroke_path(&thread_grid(size, true), Stroke::new(THREAD_WIDTH), &threads);
    canvas.stroke_path(&thread_grid(size, false), Stroke::new(THREAD_WIDTH), &threads);

    for fiber in fibers(rng, size) {
        let tone = if fiber.light { FIBER_LIGHT } else { FIBER_DARK };
        canvas.fill_rect(
            fiber.origin.x.floor(),
            fiber.origin.y.floor(),
            fiber.size,
            fiber.size,
            &Paint::Solid(with_alpha(tone, fiber.opacity)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn test_fibers_in_range() {
        for seed in SEEDS {
            let fibers = fibers(&mut seeded(seed), Vec2::splat(512.0));
            assert_eq!(fibers.len(), FIBER_COUNT);
            for fiber in fibers {
                assert!(FIBER_SIZE.contains(&(fiber.size as u32)));
                assert_eq!(fiber.size.fract(), 0.0);
                assert!(FIBER_OPACITY.contains(&fiber.opacity));
            }
        }
    }

    #[test]
    fn test_every_fiber_size_occurs() {
        let mut seen = [false; 4];
        for seed in SEEDS {
            for fiber in fibers(&mut seeded(seed), Vec2::splat(512.0)) {
                seen[fiber.size as usize - 1] = true;
            }
        }
        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn test_thread_grid_spacing() {
        let grid = thread_grid(Vec2::splat(16.0), true);
        let rows: Vec<f32> = grid.subpaths().iter().map(|s| s.points[0].y).collect();
        assert_eq!(rows, vec![0.5, 4.5, 8.5, 12.5]);
    }

    #[test]
    fn test_threads_darken_their_rows() {
        let mut surface = crate::surface::RasterSurface::new(16, 16);
        surface.fill_all(&Paint::Solid(BASE));
        surface.stroke_path(
            &thread_grid(Vec2::splat(16.0), true),
            Stroke::new(THREAD_WIDTH),
            &Paint::Solid(THREAD_COLOR),
        );
        let thread = surface.get_pixel(2, 4).unwrap();
        let gap = surface.get_pixel(2, 6).unwrap();
        assert!(thread[0] < gap[0]);
    }
}
