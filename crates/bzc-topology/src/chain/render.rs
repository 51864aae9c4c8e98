use bzc_core::SamplingOptions;
use bzc_geometry::tessellate::segment_to_polyline;
use bzc_math::Point2;
use rayon::prelude::*;

use super::collection::CurveCollection;
use super::curve::Curve;

/// Flatten every curve of the collection into one polyline per curve.
///
/// Curves are independent, so they are flattened in parallel.
pub fn tessellate_collection(collection: &CurveCollection, opts: &SamplingOptions) -> Vec<Vec<Point2>> {
    collection
        .curves
        .par_iter()
        .map(|curve| flatten_curve(curve, opts))
        .collect()
}

fn flatten_curve(curve: &Curve, opts: &SamplingOptions) -> Vec<Point2> {
    let mut points = Vec::new();
    for (i, seg) in curve.segments.iter().enumerate() {
        let flat = segment_to_polyline(seg, opts);
        points.extend(flat.into_iter().skip(usize::from(i > 0)));
    }
    points
}
