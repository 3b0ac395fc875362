//! Per-material background texture generators
//!
//! Each generator paints the full background of a canvas. Random jitter is
//! drawn from the injected source and every parameter is bounded by the
//! constants in its module, so the visual character is stable across runs.

mod carbon;
mod fabric;
mod leather;
mod marble;
mod metal;
mod wood;

use std::ops::RangeInclusive;

use glam::Vec2;
use rand::{Rng, RngCore};

use crate::canvas::{Canvas, Paint};
use crate::color::{hex, Color};
use crate::material::MaterialKind;

/// Paints a background into the canvas. Cannot fail.
pub type Generator = fn(&mut dyn Canvas, &mut dyn RngCore);

/// Flat fill used when the material id is not recognized
pub const NEUTRAL_FILL: Color = hex(0x808080);

/// Select the generator for a material, neutral fill for `None`
pub fn generator_for(material: Option<MaterialKind>) -> Generator {
    match material {
        Some(MaterialKind::Wood) => wood::paint,
        Some(MaterialKind::Metal) => metal::paint,
        Some(MaterialKind::Fabric) => fabric::paint,
        Some(MaterialKind::Leather) => leather::paint,
        Some(MaterialKind::Marble) => marble::paint,
        Some(MaterialKind::Carbon) => carbon::paint,
        None => neutral,
    }
}

fn neutral(canvas: &mut dyn Canvas, _rng: &mut dyn RngCore) {
    canvas.fill_all(&Paint::Solid(NEUTRAL_FILL));
}

/// Uniform sample from an inclusive f32 range
#[inline]
pub(crate) fn sample(rng: &mut dyn RngCore, range: RangeInclusive<f32>) -> f32 {
    rng.gen_range(range)
}

/// Uniform sample from an inclusive count range
#[inline]
pub(crate) fn sample_count(rng: &mut dyn RngCore, range: RangeInclusive<usize>) -> usize {
    rng.gen_range(range)
}

/// Symmetric jitter in -magnitude..=magnitude
#[inline]
pub(crate) fn jitter(rng: &mut dyn RngCore, magnitude: f32) -> f32 {
    rng.gen_range(-magnitude..=magnitude)
}

/// Random point inside the canvas
#[inline]
pub(crate) fn point_in(rng: &mut dyn RngCore, size: Vec2) -> Vec2 {
    Vec2::new(rng.gen_range(0.0..size.x), rng.gen_range(0.0..size.y))
}

#[cfg(test)]
pub(crate) mod test_support {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::surface::RasterSurface;

    pub const SEEDS: std::ops::Range<u64> = 0..40;

    pub fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    pub fn painted(generator: super::Generator, size: u32, seed: u64) -> RasterSurface {
        let mut surface = RasterSurface::new(size, size);
        generator(&mut surface, &mut seeded(seed));
        surface
    }

    /// Average 8-bit RGB over the whole surface
    pub fn mean_rgb(surface: &RasterSurface) -> [f32; 3] {
        let mut sum = [0.0f32; 3];
        for p in surface.pixels() {
            for c in 0..3 {
                sum[c] += p[c] * p[3] * 255.0;
            }
        }
        let n = surface.pixel_count() as f32;
        [sum[0] / n, sum[1] / n, sum[2] / n]
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_every_generator_paints_opaque_background() {
        let kinds = MaterialKind::ALL.iter().map(|k| Some(*k)).chain([None]);
        for material in kinds {
            let surface = painted(generator_for(material), 64, 7);
            assert!(
                surface.pixels().iter().all(|p| p[3] > 0.99),
                "{:?} left transparent pixels",
                material
            );
        }
    }

    #[test]
    fn test_neutral_is_flat_gray() {
        let surface = painted(generator_for(None), 16, 0);
        assert!(surface.pixels().iter().all(|p| *p == NEUTRAL_FILL));
    }

    #[test]
    fn test_generators_are_distinct() {
        let wood = mean_rgb(&painted(generator_for(Some(MaterialKind::Wood)), 64, 1));
        let metal = mean_rgb(&painted(generator_for(Some(MaterialKind::Metal)), 64, 1));
        let carbon = mean_rgb(&painted(generator_for(Some(MaterialKind::Carbon)), 64, 1));

        // Wood is warm, metal is neutral, carbon is near-black
        assert!(wood[0] - wood[2] > 40.0);
        assert!((metal[0] - metal[2]).abs() < 10.0);
        assert!(carbon.iter().all(|c| *c < 60.0));
    }
}
