//! Coverage masks: per-pixel 0-1 coverage for fills, strokes and ellipses
//!
//! Shapes are rasterized into a mask first and composited once, so
//! overlapping segments of one stroke never double-blend.

use glam::Vec2;
use tracing::trace;

use crate::constants::FILL_SUBSAMPLES;

use super::path::Path;

/// An ellipse stamp, optionally rotated and soft-edged
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub center: Vec2,
    /// Radius along the (unrotated) x axis
    pub radius_x: f32,
    /// Radius along the (unrotated) y axis
    pub radius_y: f32,
    /// Rotation in radians (counter-clockwise)
    pub angle: f32,
    /// Edge hardness: 0.0 = linear falloff to the rim, 1.0 = solid
    pub hardness: f32,
}

impl Ellipse {
    /// Hard-edged circle
    pub fn circle(center: Vec2, radius: f32) -> Self {
        Self {
            center,
            radius_x: radius,
            radius_y: radius,
            angle: 0.0,
            hardness: 1.0,
        }
    }
}

/// Coverage values for a rectangular window of the surface
#[derive(Debug, Clone)]
pub struct CoverageMask {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    coverage: Vec<f32>,
}

impl CoverageMask {
    /// Empty mask covering `min..max` clamped to the surface, None if off-surface
    fn window(min: Vec2, max: Vec2, surface_width: u32, surface_height: u32) -> Option<Self> {
        if !(min.is_finite() && max.is_finite()) {
            return None;
        }
        let x_min = (min.x.floor().max(0.0) as u32).min(surface_width);
        let y_min = (min.y.floor().max(0.0) as u32).min(surface_height);
        let x_max = (max.x.ceil().max(0.0) as u32).min(surface_width);
        let y_max = (max.y.ceil().max(0.0) as u32).min(surface_height);

        if x_min >= x_max || y_min >= y_max {
            return None;
        }

        let width = x_max - x_min;
        let height = y_max - y_min;
        Some(Self {
            x: x_min,
            y: y_min,
            width,
            height,
            coverage: vec![0.0; (width as usize) * (height as usize)],
        })
    }

    /// Exact area coverage of an axis-aligned rectangle
    pub fn rect(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        surface_width: u32,
        surface_height: u32,
    ) -> Option<Self> {
        if width <= 0.0 || height <= 0.0 {
            return None;
        }
        let (x0, y0, x1, y1) = (x, y, x + width, y + height);
        let mut mask = Self::window(
            Vec2::new(x0, y0),
            Vec2::new(x1, y1),
            surface_width,
            surface_height,
        )?;

        for py in mask.y..mask.y + mask.height {
            let cover_y = overlap(y0, y1, py as f32);
            if cover_y <= 0.0 {
                continue;
            }
            for px in mask.x..mask.x + mask.width {
                let cover_x = overlap(x0, x1, px as f32);
                if cover_x > 0.0 {
                    mask.accumulate(px, py, cover_x * cover_y);
                }
            }
        }
        Some(mask)
    }

    /// Nonzero-winding fill of every subpath (open subpaths are closed implicitly)
    pub fn fill(path: &Path, surface_width: u32, surface_height: u32) -> Option<Self> {
        let (min, max) = path.bounds()?;
        let mut mask = Self::window(min, max, surface_width, surface_height)?;

        let edges: Vec<(Vec2, Vec2)> = path
            .subpaths()
            .iter()
            .filter(|s| s.points.len() >= 2)
            .flat_map(|s| {
                let n = s.points.len();
                (0..n).map(move |i| (s.points[i], s.points[(i + 1) % n]))
            })
            .filter(|(a, b)| a.y != b.y)
            .collect();

        let weight = 1.0 / FILL_SUBSAMPLES as f32;
        let mut crossings: Vec<(f32, i32)> = Vec::with_capacity(edges.len());

        for py in mask.y..mask.y + mask.height {
            for sub in 0..FILL_SUBSAMPLES {
                let sample_y = py as f32 + (sub as f32 + 0.5) * weight;

                crossings.clear();
                for (a, b) in &edges {
                    let (top, bottom, direction) = if a.y < b.y {
                        (a, b, 1)
                    } else {
                        (b, a, -1)
                    };
                    if sample_y < top.y || sample_y >= bottom.y {
                        continue;
                    }
                    let t = (sample_y - top.y) / (bottom.y - top.y);
                    crossings.push((top.x + (bottom.x - top.x) * t, direction));
                }
                crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

                let mut winding = 0;
                let mut span_start = 0.0;
                for &(x, direction) in &crossings {
                    let before = winding;
                    winding += direction;
                    if before == 0 && winding != 0 {
                        span_start = x;
                    } else if before != 0 && winding == 0 {
                        mask.add_span(py, span_start, x, weight);
                    }
                }
            }
        }

        mask.saturate();
        Some(mask)
    }

    /// Stroke every segment of the path with round joins and caps.
    ///
    /// Widths below one pixel are drawn one pixel wide at reduced coverage.
    pub fn stroke(
        path: &Path,
        line_width: f32,
        surface_width: u32,
        surface_height: u32,
    ) -> Option<Self> {
        if line_width <= 0.0 {
            return None;
        }
        let drawn_width = line_width.max(1.0);
        let half = drawn_width / 2.0;
        let thin_scale = line_width / drawn_width;

        let (min, max) = path.bounds()?;
        let pad = Vec2::splat(half + 1.0);
        let mut mask = Self::window(min - pad, max + pad, surface_width, surface_height)?;

        for subpath in path.subpaths() {
            let points = &subpath.points;
            let mut segments: Vec<(Vec2, Vec2)> = points.windows(2).map(|w| (w[0], w[1])).collect();
            if subpath.closed && points.len() > 2 {
                segments.push((points[points.len() - 1], points[0]));
            }
            if points.len() == 1 {
                segments.push((points[0], points[0]));
            }

            for (a, b) in segments {
                mask.stamp_segment(a, b, half, thin_scale);
            }
        }

        Some(mask)
    }

    /// Rotated, optionally soft ellipse
    pub fn ellipse(ellipse: &Ellipse, surface_width: u32, surface_height: u32) -> Option<Self> {
        let Ellipse {
            center,
            radius_x,
            radius_y,
            angle,
            hardness,
        } = *ellipse;

        if radius_x <= 0.0 || radius_y <= 0.0 {
            trace!("CoverageMask::ellipse: skipped degenerate radii");
            return None;
        }

        // Bounding box of a rotated ellipse with semi-axes a and b:
        //   half_w = sqrt(a² cos²θ + b² sin²θ)
        //   half_h = sqrt(a² sin²θ + b² cos²θ)
        let cos_a = angle.cos();
        let sin_a = angle.sin();
        let rx_sq = radius_x * radius_x;
        let ry_sq = radius_y * radius_y;
        let half_w = (rx_sq * cos_a * cos_a + ry_sq * sin_a * sin_a).sqrt();
        let half_h = (rx_sq * sin_a * sin_a + ry_sq * cos_a * cos_a).sqrt();

        let extent = Vec2::new(half_w + 1.0, half_h + 1.0);
        let mut mask = Self::window(center - extent, center + extent, surface_width, surface_height)?;

        // Distance (in pixels) covered by one unit of normalized radius at the rim
        let rim_scale = radius_x.min(radius_y).max(0.5);

        for py in mask.y..mask.y + mask.height {
            for px in mask.x..mask.x + mask.width {
                let dx = (px as f32 + 0.5) - center.x;
                let dy = (py as f32 + 0.5) - center.y;

                // Rotate by -angle to align with the ellipse axes
                let local_x = dx * cos_a + dy * sin_a;
                let local_y = -dx * sin_a + dy * cos_a;

                let nx = local_x / radius_x;
                let ny = local_y / radius_y;
                let distance = (nx * nx + ny * ny).sqrt();

                let edge = (0.5 - (distance - 1.0) * rim_scale).clamp(0.0, 1.0);
                if edge <= 0.0 {
                    continue;
                }
                let falloff = calculate_hardness_falloff(distance.min(1.0), hardness);
                mask.accumulate(px, py, edge * falloff);
            }
        }

        mask.saturate();
        Some(mask)
    }

    /// Coverage at absolute surface coordinates (0 outside the window)
    pub fn get(&self, x: u32, y: u32) -> f32 {
        if x < self.x || y < self.y || x >= self.x + self.width || y >= self.y + self.height {
            return 0.0;
        }
        let index = ((y - self.y) as usize) * (self.width as usize) + ((x - self.x) as usize);
        self.coverage[index]
    }

    /// Iterate (x, y, coverage) for every pixel with non-zero coverage
    pub fn covered(&self) -> impl Iterator<Item = (u32, u32, f32)> + '_ {
        self.coverage.iter().enumerate().filter_map(move |(i, &c)| {
            if c <= 0.0 {
                return None;
            }
            let x = self.x + (i as u32 % self.width);
            let y = self.y + (i as u32 / self.width);
            Some((x, y, c))
        })
    }

    #[inline]
    fn accumulate(&mut self, x: u32, y: u32, amount: f32) {
        let index = ((y - self.y) as usize) * (self.width as usize) + ((x - self.x) as usize);
        self.coverage[index] += amount;
    }

    #[inline]
    fn raise(&mut self, x: u32, y: u32, amount: f32) {
        let index = ((y - self.y) as usize) * (self.width as usize) + ((x - self.x) as usize);
        let current = &mut self.coverage[index];
        if amount > *current {
            *current = amount;
        }
    }

    /// Add horizontal span [x0, x1) on row `py` with fractional end pixels
    fn add_span(&mut self, py: u32, x0: f32, x1: f32, weight: f32) {
        let left = self.x as f32;
        let right = (self.x + self.width) as f32;
        let x0 = x0.max(left);
        let x1 = x1.min(right);
        if x1 <= x0 {
            return;
        }

        let first = x0.floor() as u32;
        let last = (x1.ceil() as u32).min(self.x + self.width);
        for px in first..last {
            let covered = overlap(x0, x1, px as f32);
            if covered > 0.0 {
                self.accumulate(px, py, covered * weight);
            }
        }
    }

    /// Capsule coverage around segment a-b, keeping the max per pixel
    fn stamp_segment(&mut self, a: Vec2, b: Vec2, half: f32, scale: f32) {
        let pad = Vec2::splat(half + 1.0);
        let min = a.min(b) - pad;
        let max = a.max(b) + pad;

        let x_start = (min.x.floor().max(self.x as f32) as u32).max(self.x);
        let y_start = (min.y.floor().max(self.y as f32) as u32).max(self.y);
        let x_end = (max.x.ceil().max(0.0) as u32).min(self.x + self.width);
        let y_end = (max.y.ceil().max(0.0) as u32).min(self.y + self.height);

        let ab = b - a;
        let length_sq = ab.length_squared();

        for py in y_start..y_end {
            for px in x_start..x_end {
                let p = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
                let t = if length_sq <= f32::EPSILON {
                    0.0
                } else {
                    ((p - a).dot(ab) / length_sq).clamp(0.0, 1.0)
                };
                let distance = p.distance(a + ab * t);
                let coverage = (half + 0.5 - distance).clamp(0.0, 1.0) * scale;
                if coverage > 0.0 {
                    self.raise(px, py, coverage);
                }
            }
        }
    }

    fn saturate(&mut self) {
        for c in &mut self.coverage {
            *c = c.clamp(0.0, 1.0);
        }
    }
}

/// Length of [start, end) inside the unit cell [cell, cell + 1)
#[inline]
fn overlap(start: f32, end: f32, cell: f32) -> f32 {
    (end.min(cell + 1.0) - start.max(cell)).max(0.0)
}

/// Calculate falloff based on hardness
/// distance_normalized is 0 at center, 1 at edge
/// hardness is 0.0 (soft) to 1.0 (hard)
#[inline]
pub fn calculate_hardness_falloff(distance_normalized: f32, hardness: f32) -> f32 {
    if hardness >= 1.0 {
        if distance_normalized <= 1.0 { 1.0 } else { 0.0 }
    } else {
        let t = distance_normalized.clamp(0.0, 1.0);
        let soft = 1.0 - t;
        let hardness = hardness.max(0.0);
        // Interpolate between a linear ramp and a solid disc
        soft * (1.0 - hardness) + hardness
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_exact_coverage() {
        let mask = CoverageMask::rect(1.5, 1.0, 2.0, 1.0, 10, 10).unwrap();
        assert_eq!(mask.get(1, 1), 0.5);
        assert_eq!(mask.get(2, 1), 1.0);
        assert_eq!(mask.get(3, 1), 0.5);
        assert_eq!(mask.get(2, 2), 0.0);
    }

    #[test]
    fn test_rect_off_surface() {
        assert!(CoverageMask::rect(20.0, 20.0, 5.0, 5.0, 10, 10).is_none());
        assert!(CoverageMask::rect(2.0, 2.0, 0.0, 5.0, 10, 10).is_none());
    }

    #[test]
    fn test_fill_square_path() {
        let path = Path::rect(2.0, 2.0, 4.0, 4.0);
        let mask = CoverageMask::fill(&path, 10, 10).unwrap();
        assert!((mask.get(3, 3) - 1.0).abs() < 1e-5);
        assert_eq!(mask.get(1, 3), 0.0);
        assert_eq!(mask.get(6, 3), 0.0);
        let total: f32 = mask.covered().map(|(_, _, c)| c).sum();
        assert!((total - 16.0).abs() < 1e-3);
    }

    #[test]
    fn test_fill_clips_to_surface() {
        let path = Path::rect(-5.0, -5.0, 100.0, 100.0);
        let mask = CoverageMask::fill(&path, 8, 8).unwrap();
        assert_eq!((mask.x, mask.y, mask.width, mask.height), (0, 0, 8, 8));
        assert!(mask.covered().all(|(_, _, c)| (c - 1.0).abs() < 1e-5));
    }

    #[test]
    fn test_stroke_horizontal_line() {
        let mut path = Path::new();
        path.move_to(Vec2::new(0.0, 5.5)).line_to(Vec2::new(10.0, 5.5));
        let mask = CoverageMask::stroke(&path, 1.0, 10, 10).unwrap();
        assert!((mask.get(4, 5) - 1.0).abs() < 1e-5);
        assert_eq!(mask.get(4, 7), 0.0);
    }

    #[test]
    fn test_stroke_thin_line_is_fainter() {
        let mut path = Path::new();
        path.move_to(Vec2::new(0.0, 5.5)).line_to(Vec2::new(10.0, 5.5));
        let mask = CoverageMask::stroke(&path, 0.5, 10, 10).unwrap();
        assert!((mask.get(4, 5) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_stroke_joints_do_not_double() {
        let mut path = Path::new();
        path.move_to(Vec2::new(1.0, 5.5))
            .line_to(Vec2::new(5.0, 5.5))
            .line_to(Vec2::new(9.0, 5.5));
        let mask = CoverageMask::stroke(&path, 2.0, 10, 10).unwrap();
        assert!(mask.covered().all(|(_, _, c)| c <= 1.0));
    }

    #[test]
    fn test_ellipse_circular() {
        let circle = Ellipse::circle(Vec2::new(10.0, 10.0), 4.0);
        let mask = CoverageMask::ellipse(&circle, 20, 20).unwrap();
        assert!((mask.get(10, 10) - 1.0).abs() < 1e-5);
        assert_eq!(mask.get(10, 16), 0.0);
    }

    #[test]
    fn test_ellipse_stretched() {
        let ellipse = Ellipse {
            center: Vec2::new(128.0, 128.0),
            radius_x: 20.0,
            radius_y: 10.0,
            angle: 0.0,
            hardness: 1.0,
        };
        let mask = CoverageMask::ellipse(&ellipse, 256, 256).unwrap();

        // Along the major axis
        assert!((mask.get(145, 128) - 1.0).abs() < 1e-5);
        // Beyond the minor extent
        assert_eq!(mask.get(128, 141), 0.0);
    }

    #[test]
    fn test_ellipse_rotated_bounds() {
        let ellipse = Ellipse {
            center: Vec2::new(128.0, 128.0),
            radius_x: 20.0,
            radius_y: 6.0,
            angle: std::f32::consts::FRAC_PI_4,
            hardness: 1.0,
        };
        let mask = CoverageMask::ellipse(&ellipse, 256, 256).unwrap();
        // A 45 degree rotation gives a square-ish window
        assert!((mask.width as i32 - mask.height as i32).abs() <= 1);
        // Point along the rotated major axis is inside
        assert!(mask.get(138, 138) > 0.9);
    }

    #[test]
    fn test_tiny_dot_still_marks() {
        let dot = Ellipse::circle(Vec2::new(5.5, 5.5), 0.5);
        let mask = CoverageMask::ellipse(&dot, 10, 10).unwrap();
        assert!(mask.get(5, 5) > 0.5);
    }

    #[test]
    fn test_hardness_falloff() {
        // Hard brush (hardness = 1.0)
        assert_eq!(calculate_hardness_falloff(0.0, 1.0), 1.0);
        assert_eq!(calculate_hardness_falloff(0.5, 1.0), 1.0);
        assert_eq!(calculate_hardness_falloff(1.0, 1.0), 1.0);

        // Soft brush (hardness = 0.0)
        assert_eq!(calculate_hardness_falloff(0.0, 0.0), 1.0);
        assert_eq!(calculate_hardness_falloff(0.5, 0.0), 0.5);
        assert_eq!(calculate_hardness_falloff(1.0, 0.0), 0.0);

        // Medium brush (hardness = 0.5)
        let mid = calculate_hardness_falloff(0.5, 0.5);
        assert!(mid > 0.5 && mid < 1.0);
    }
}
