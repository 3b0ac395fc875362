//! Path construction with quadratic curves
//!
//! Curves are flattened into polylines as they are appended, so the
//! rasterizer only ever sees straight segments.

use glam::Vec2;

/// Approximate flattened segment length for quadratic curves, in pixels
const QUAD_SEGMENT_LENGTH: f32 = 3.0;
const MIN_QUAD_SEGMENTS: usize = 2;
const MAX_QUAD_SEGMENTS: usize = 64;

/// One contiguous run of points
#[derive(Debug, Clone, PartialEq)]
pub struct SubPath {
    pub points: Vec<Vec2>,
    pub closed: bool,
}

/// A 2D path made of one or more subpaths
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    subpaths: Vec<SubPath>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new subpath at `point`
    pub fn move_to(&mut self, point: Vec2) -> &mut Self {
        self.subpaths.push(SubPath {
            points: vec![point],
            closed: false,
        });
        self
    }

    /// Straight segment to `point`; starts a subpath if none is open
    pub fn line_to(&mut self, point: Vec2) -> &mut Self {
        match self.open_subpath() {
            Some(subpath) => subpath.points.push(point),
            None => {
                self.move_to(point);
            }
        }
        self
    }

    /// Quadratic Bezier from the current point through `control` to `end`
    pub fn quad_to(&mut self, control: Vec2, end: Vec2) -> &mut Self {
        let start = match self.current_point() {
            Some(point) => point,
            None => {
                self.move_to(control);
                control
            }
        };

        let hull = start.distance(control) + control.distance(end);
        let segments = ((hull / QUAD_SEGMENT_LENGTH).ceil() as usize)
            .clamp(MIN_QUAD_SEGMENTS, MAX_QUAD_SEGMENTS);

        if let Some(subpath) = self.open_subpath() {
            for i in 1..=segments {
                let t = i as f32 / segments as f32;
                let mt = 1.0 - t;
                subpath
                    .points
                    .push(start * (mt * mt) + control * (2.0 * mt * t) + end * (t * t));
            }
        }
        self
    }

    /// Close the current subpath
    pub fn close(&mut self) -> &mut Self {
        if let Some(subpath) = self.subpaths.last_mut() {
            subpath.closed = true;
        }
        self
    }

    /// Axis-aligned rectangle
    pub fn rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        let mut path = Self::new();
        path.move_to(Vec2::new(x, y))
            .line_to(Vec2::new(x + width, y))
            .line_to(Vec2::new(x + width, y + height))
            .line_to(Vec2::new(x, y + height))
            .close();
        path
    }

    /// Rounded rectangle: four edges joined by quadratic corner curves.
    ///
    /// The radius is clamped to half the shorter side.
    pub fn rounded_rect(x: f32, y: f32, width: f32, height: f32, radius: f32) -> Self {
        let r = radius.clamp(0.0, width.min(height) / 2.0);
        let (right, bottom) = (x + width, y + height);

        let mut path = Self::new();
        path.move_to(Vec2::new(x + r, y))
            .line_to(Vec2::new(right - r, y))
            .quad_to(Vec2::new(right, y), Vec2::new(right, y + r))
            .line_to(Vec2::new(right, bottom - r))
            .quad_to(Vec2::new(right, bottom), Vec2::new(right - r, bottom))
            .line_to(Vec2::new(x + r, bottom))
            .quad_to(Vec2::new(x, bottom), Vec2::new(x, bottom - r))
            .line_to(Vec2::new(x, y + r))
            .quad_to(Vec2::new(x, y), Vec2::new(x + r, y))
            .close();
        path
    }

    /// Copy of this path shifted by `offset`
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            subpaths: self
                .subpaths
                .iter()
                .map(|subpath| SubPath {
                    points: subpath.points.iter().map(|p| *p + offset).collect(),
                    closed: subpath.closed,
                })
                .collect(),
        }
    }

    pub fn subpaths(&self) -> &[SubPath] {
        &self.subpaths
    }

    pub fn is_empty(&self) -> bool {
        self.subpaths.iter().all(|s| s.points.is_empty())
    }

    /// Last point of the last subpath
    pub fn current_point(&self) -> Option<Vec2> {
        self.subpaths.last().and_then(|s| s.points.last().copied())
    }

    /// Bounding box as (min, max), None for an empty path
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let mut points = self.subpaths.iter().flat_map(|s| s.points.iter());
        let first = *points.next()?;
        Some(points.fold((first, first), |(min, max), p| (min.min(*p), max.max(*p))))
    }

    fn open_subpath(&mut self) -> Option<&mut SubPath> {
        self.subpaths.last_mut().filter(|s| !s.closed)
    }
}
