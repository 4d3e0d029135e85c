//! Axis math for menu layout and pointer classification.
//!
//! A menu is laid out along an axis vector. Pointer motion is classified
//! by rotating it into the frame where that axis points forward: the x
//! component of the result is the signed distance along the axis, the y
//! component the signed perpendicular distance. With screen coordinates
//! (y down), positive perpendicular is the clockwise side of the axis,
//! matching [`orthogonal`] with a positive magnitude.

use kurbo::{Point, Vec2};
use thiserror::Error;

/// Shortest axis length treated as non-degenerate.
pub const MIN_AXIS_LENGTH: f64 = 1e-9;

/// Downward unit vector: the stationed menu axis and the orthogonal an
/// empty controlee reports.
pub const DOWNWARD: Vec2 = Vec2::new(0.0, 1.0);

/// Geometry errors.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("axis vector has zero length")]
    DegenerateAxis,
}

/// Unit direction of `axis`.
pub fn unit(axis: Vec2) -> Result<Vec2, GeometryError> {
    let length = axis.hypot();
    if length < MIN_AXIS_LENGTH {
        return Err(GeometryError::DegenerateAxis);
    }
    Ok(axis / length)
}

/// Rotate `v` into the coordinate frame where `axis` points forward.
///
/// Linear in `v`; `normalize_onto_axis(a, a)` is `(|a|, 0)`. The sign of
/// the y component means left/right of the axis, not a screen direction.
pub fn normalize_onto_axis(v: Vec2, axis: Vec2) -> Result<Vec2, GeometryError> {
    let u = unit(axis)?;
    Ok(Vec2::new(v.dot(u), u.cross(v)))
}

/// Perpendicular of `axis`, scaled to `magnitude`.
///
/// A positive magnitude lands on the same side of the axis that
/// [`normalize_onto_axis`] reports as positive.
pub fn orthogonal(axis: Vec2, magnitude: f64) -> Result<Vec2, GeometryError> {
    let u = unit(axis)?;
    Ok(Vec2::new(-u.y, u.x) * magnitude)
}

/// Distance from a point to a line segment (a→b).
pub fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = b - a;
    let pv = point - a;
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    let proj = a + t * seg;
    (point - proj).hypot()
}
