//! Render feed: flattened polylines, tangent angles and per-sample data for
//! drawing surfaces.

use bzc_core::SamplingOptions;
use bzc_math::Point2;

use crate::bezier::{cubic_bezier, derivative, sample_curve};
use crate::curve::{Parametric, Segment};

/// Convert a curve to a polyline using adaptive subdivision.
///
/// The algorithm recursively subdivides parameter ranges where the midpoint
/// deviation from the chord exceeds `opts.flatten_tolerance`, down to at most
/// `opts.max_flatten_depth` levels.
pub fn segment_to_polyline(curve: &dyn Parametric, opts: &SamplingOptions) -> Vec<Point2> {
    let (t_min, t_max) = curve.domain();
    let mut points = vec![curve.point_at(t_min)];
    subdivide(curve, t_min, t_max, opts, &mut points, 0);
    points
}

fn subdivide(
    curve: &dyn Parametric,
    t0: f64,
    t1: f64,
    opts: &SamplingOptions,
    points: &mut Vec<Point2>,
    depth: u32,
) {
    if depth >= opts.max_flatten_depth {
        points.push(curve.point_at(t1));
        return;
    }

    let t_mid = (t0 + t1) * 0.5;
    let p0 = curve.point_at(t0);
    let p1 = curve.point_at(t1);
    let p_mid = curve.point_at(t_mid);

    let chord_mid = (p0 + p1) * 0.5;
    let deviation = (p_mid - chord_mid).length();

    // Always split once: a symmetric S-curve has its midpoint on the chord.
    if deviation > opts.flatten_tolerance || depth == 0 {
        subdivide(curve, t0, t_mid, opts, points, depth + 1);
        subdivide(curve, t_mid, t1, opts, points, depth + 1);
    } else {
        points.push(p1);
    }
}

/// Direction of travel at `t`, in radians from the +x axis.
pub fn tangent_angle(seg: &Segment, t: f64) -> f64 {
    let d = derivative(seg.p0, seg.p1, seg.p2, seg.p3, t);
    d.y.atan2(d.x)
}

/// Uniform samples of consecutive segments joined into one polyline.
///
/// Each junction point appears once.
pub fn chain_polyline(segments: &[Segment], samples_per_segment: usize) -> Vec<Point2> {
    let mut points = Vec::with_capacity(segments.len() * samples_per_segment + 1);
    for (i, seg) in segments.iter().enumerate() {
        let samples = sample_curve(seg, samples_per_segment);
        let skip = usize::from(i > 0);
        points.extend(samples.into_iter().skip(skip));
    }
    points
}

/// A sampled point with its travel direction, as consumed by renderers
/// that place oriented primitives along a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSample {
    pub t: f64,
    pub point: Point2,
    pub angle: f64,
}

/// `count + 1` uniform samples with tangent angles.
pub fn render_samples(seg: &Segment, count: usize) -> Vec<RenderSample> {
    let count = count.max(1);
    (0..=count)
        .map(|i| {
            let t = i as f64 / count as f64;
            RenderSample {
                t,
                point: cubic_bezier(seg.p0, seg.p1, seg.p2, seg.p3, t),
                angle: tangent_angle(seg, t),
            }
        })
        .collect()
}
