//! Drawing-surface contract.
//!
//! The rendering backend is an external collaborator. The interaction core
//! only ever puts a path to a surface and asks for ink-based geometry:
//! stroke hit-testing and inked bounds.

use kurbo::{BezPath, PathEl, Point, Rect, Shape};

use crate::geometry::point_to_segment_dist;

/// Flattening tolerance for hit-testing curved paths.
const FLATTEN_TOLERANCE: f64 = 0.25;

/// Narrow rendering collaborator.
pub trait DrawSurface {
    /// Queue a path for stroking on the next paint.
    fn put_path(&mut self, path: &BezPath);

    /// Whether `point` falls on the inked stroke of `path`.
    fn stroke_hit_test(&self, path: &BezPath, point: Point) -> bool;

    /// Bounding box of `path` as it would be inked.
    fn path_bounds(&self, path: &BezPath) -> Rect;
}

/// Surface backed by flattened path geometry rather than a renderer.
///
/// Good enough for hit-testing and bounds queries in headless contexts;
/// queued paths can be drained by whatever does the actual painting.
#[derive(Debug)]
pub struct PlainSurface {
    /// Stroke width used for ink queries.
    pub stroke_width: f64,
    queued: Vec<BezPath>,
}

impl PlainSurface {
    pub fn new(stroke_width: f64) -> Self {
        Self {
            stroke_width,
            queued: Vec::new(),
        }
    }

    /// Drain the paths queued since the last paint.
    pub fn take_queued(&mut self) -> Vec<BezPath> {
        std::mem::take(&mut self.queued)
    }

    /// Number of queued paths.
    pub fn queued_len(&self) -> usize {
        self.queued.len()
    }
}

impl Default for PlainSurface {
    fn default() -> Self {
        Self::new(2.0)
    }
}

impl DrawSurface for PlainSurface {
    fn put_path(&mut self, path: &BezPath) {
        self.queued.push(path.clone());
    }

    fn stroke_hit_test(&self, path: &BezPath, point: Point) -> bool {
        // Hitting a stroke from a distance means hitting the ink, so the
        // tolerance is half the line width, never less than a pixel.
        let tolerance = (self.stroke_width / 2.0).max(1.0);
        let mut hit = false;
        let mut start = Point::ZERO;
        let mut last = Point::ZERO;
        kurbo::flatten(path, FLATTEN_TOLERANCE, |el| match el {
            PathEl::MoveTo(p) => {
                start = p;
                last = p;
            }
            PathEl::LineTo(p) => {
                if point_to_segment_dist(point, last, p) <= tolerance {
                    hit = true;
                }
                last = p;
            }
            PathEl::ClosePath => {
                if point_to_segment_dist(point, last, start) <= tolerance {
                    hit = true;
                }
                last = start;
            }
            // Flattening emits no curve elements.
            _ => {}
        });
        hit
    }

    fn path_bounds(&self, path: &BezPath) -> Rect {
        let half = self.stroke_width / 2.0;
        path.bounding_box().inflate(half, half)
    }
}
