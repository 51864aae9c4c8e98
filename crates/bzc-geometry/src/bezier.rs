//! Cubic Bézier evaluation, differentiation, sampling, subdivision, bounds
//! and approximate nearest-point queries.
//!
//! All routines are pure. Parameters outside `[0, 1]` extrapolate the
//! polynomial instead of failing.

use bzc_core::{SamplingOptions, Tolerance};
use bzc_math::{distance, lerp, roots, Aabb2, Point2, Vector2};

use crate::curve::Segment;

/// Point on the curve at `t` via the Bernstein basis.
pub fn cubic_bezier(p0: Point2, p1: Point2, p2: Point2, p3: Point2, t: f64) -> Point2 {
    let mt = 1.0 - t;
    let w0 = mt * mt * mt;
    let w1 = 3.0 * mt * mt * t;
    let w2 = 3.0 * mt * t * t;
    let w3 = t * t * t;
    w0 * p0 + w1 * p1 + w2 * p2 + w3 * p3
}

/// First derivative (tangent vector) at `t`.
pub fn derivative(p0: Point2, p1: Point2, p2: Point2, p3: Point2, t: f64) -> Vector2 {
    let mt = 1.0 - t;
    3.0 * mt * mt * (p1 - p0) + 6.0 * mt * t * (p2 - p1) + 3.0 * t * t * (p3 - p2)
}

/// Second derivative (curvature vector) at `t`.
pub fn second_derivative(p0: Point2, p1: Point2, p2: Point2, p3: Point2, t: f64) -> Vector2 {
    let mt = 1.0 - t;
    6.0 * mt * (p2 - 2.0 * p1 + p0) + 6.0 * t * (p3 - 2.0 * p2 + p1)
}

/// `segments + 1` points at uniform parameter steps.
///
/// The first point is `p0` and the last is `p3`, both exactly.
pub fn sample_curve(seg: &Segment, segments: usize) -> Vec<Point2> {
    if segments == 0 {
        return vec![seg.p0];
    }
    let mut points = Vec::with_capacity(segments + 1);
    points.push(seg.p0);
    for i in 1..segments {
        let t = i as f64 / segments as f64;
        points.push(cubic_bezier(seg.p0, seg.p1, seg.p2, seg.p3, t));
    }
    points.push(seg.p3);
    points
}

/// Arc length approximated by the polyline through `segments + 1` samples.
///
/// Never exact for curved segments; grows toward the true length as the
/// sample count increases.
pub fn curve_length(seg: &Segment, segments: usize) -> f64 {
    sample_curve(seg, segments)
        .windows(2)
        .map(|w| distance(w[0], w[1]))
        .sum()
}

/// [`curve_length`] with `opts.length_samples` chords (100 by default).
pub fn curve_length_with(seg: &Segment, opts: &SamplingOptions) -> f64 {
    curve_length(seg, opts.length_samples)
}

/// De Casteljau subdivision at `t`.
///
/// The first half covers `[0, t]`, the second `[t, 1]`; both share the
/// on-curve split point.
pub fn split_curve(seg: &Segment, t: f64) -> (Segment, Segment) {
    let p01 = lerp(seg.p0, seg.p1, t);
    let p12 = lerp(seg.p1, seg.p2, t);
    let p23 = lerp(seg.p2, seg.p3, t);
    let p012 = lerp(p01, p12, t);
    let p123 = lerp(p12, p23, t);
    let mid = lerp(p012, p123, t);

    (
        Segment::new(seg.p0, p01, p012, mid),
        Segment::new(mid, p123, p23, seg.p3),
    )
}

/// Tight axis-aligned bounds of the segment.
///
/// Starts from the endpoints, then folds in every interior extremum: per
/// axis the derivative's quadratic is solved and roots strictly inside
/// `(0, 1)` are evaluated. Coefficients within `tol.linear` of zero make the
/// quadratic degrade to its linear root.
pub fn bounding_box(seg: &Segment, tol: Tolerance) -> Aabb2 {
    let mut aabb = Aabb2::from_point(seg.p0);
    aabb.include(seg.p3);

    let axes = [
        [seg.p0.x, seg.p1.x, seg.p2.x, seg.p3.x],
        [seg.p0.y, seg.p1.y, seg.p2.y, seg.p3.y],
    ];
    for [v0, v1, v2, v3] in axes {
        let a = -v0 + 3.0 * v1 - 3.0 * v2 + v3;
        let b = 2.0 * v0 - 4.0 * v1 + 2.0 * v2;
        let c = -v0 + v1;
        for t in roots::quadratic_roots(a, b, c, tol.linear) {
            if t > 0.0 && t < 1.0 {
                aabb.include(cubic_bezier(seg.p0, seg.p1, seg.p2, seg.p3, t));
            }
        }
    }
    aabb
}

/// Result of a nearest-point search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestPoint {
    pub t: f64,
    pub point: Point2,
    pub distance: f64,
}

/// Approximate closest point on the segment to `target`.
///
/// Evaluates `samples + 1` uniform parameters (at least two) and returns the
/// first one with minimal distance, so ties resolve to the smallest `t`.
pub fn nearest_point_on_curve(seg: &Segment, target: Point2, samples: usize) -> NearestPoint {
    let samples = samples.max(1);
    let mut best = NearestPoint {
        t: 0.0,
        point: seg.p0,
        distance: distance(seg.p0, target),
    };
    for i in 1..=samples {
        let t = i as f64 / samples as f64;
        let point = cubic_bezier(seg.p0, seg.p1, seg.p2, seg.p3, t);
        let d = distance(point, target);
        if d < best.distance {
            best = NearestPoint { t, point, distance: d };
        }
    }
    best
}

/// Hit test: the nearest sample if it lies within `threshold` of `target`.
pub fn point_on_curve(
    seg: &Segment,
    target: Point2,
    threshold: f64,
    samples: usize,
) -> Option<NearestPoint> {
    let nearest = nearest_point_on_curve(seg, target, samples);
    (nearest.distance <= threshold).then_some(nearest)
}

/// [`nearest_point_on_curve`] with `opts.nearest_samples` samples (100 by default).
pub fn nearest_point_with(seg: &Segment, target: Point2, opts: &SamplingOptions) -> NearestPoint {
    nearest_point_on_curve(seg, target, opts.nearest_samples)
}

/// [`point_on_curve`] with `opts.nearest_samples` samples.
pub fn point_on_curve_with(
    seg: &Segment,
    target: Point2,
    threshold: f64,
    opts: &SamplingOptions,
) -> Option<NearestPoint> {
    point_on_curve(seg, target, threshold, opts.nearest_samples)
}
