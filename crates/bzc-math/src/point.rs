//! Point arithmetic beyond what glam's operators already provide.
//!
//! Addition, subtraction and scaling are the `DVec2` operators
//! (`a + b`, `a - b`, `a * s`).

use crate::Point2;

/// Linear interpolation, `p1 + t * (p2 - p1)` evaluated in the two-sided
/// form `(1 - t) * p1 + t * p2`.
///
/// Exact at both ends: `lerp(a, b, 0.0) == a` and `lerp(a, b, 1.0) == b`.
#[inline]
pub fn lerp(p1: Point2, p2: Point2, t: f64) -> Point2 {
    (1.0 - t) * p1 + t * p2
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point2, b: Point2) -> f64 {
    (b - a).length()
}
