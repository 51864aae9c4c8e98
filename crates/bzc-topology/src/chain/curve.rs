//! A chain of cubic segments with per-junction continuity.

use bzc_core::{SamplingOptions, Tolerance};
use bzc_geometry::bezier::{bounding_box, curve_length, point_on_curve_with, NearestPoint};
use bzc_geometry::continuity::enforce;
use bzc_geometry::tessellate::chain_polyline;
use bzc_geometry::{Continuity, Segment};
use bzc_math::Point2;
use serde::{Deserialize, Serialize};

use super::iter::JunctionIter;

/// Ordered segments plus one continuity entry per junction.
///
/// `continuity[i]` constrains the junction between `segments[i]` and
/// `segments[i + 1]`. Callers keep `segments[i].p3 == segments[i + 1].p0`;
/// construction does not check it (see the `Validate` impl for an explicit
/// check).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub segments: Vec<Segment>,
    pub continuity: Vec<Continuity>,
}

impl Curve {
    pub fn new(segments: Vec<Segment>, continuity: Vec<Continuity>) -> Self {
        debug_assert!(
            continuity.len() == segments.len().saturating_sub(1),
            "Curve with {} segments needs {} continuity entries, got {}",
            segments.len(),
            segments.len().saturating_sub(1),
            continuity.len()
        );
        Self {
            segments,
            continuity,
        }
    }

    pub fn from_segment(segment: Segment) -> Self {
        Self {
            segments: vec![segment],
            continuity: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn junction_count(&self) -> usize {
        self.segments.len().saturating_sub(1)
    }

    pub fn junctions(&self) -> JunctionIter<'_> {
        JunctionIter::new(self)
    }

    /// New curve with `segment` appended under `mode`, enforced against the
    /// current last segment.
    pub fn push_segment(&self, segment: Segment, mode: Continuity) -> Curve {
        let mut out = self.clone();
        match out.segments.last() {
            Some(last) => {
                let enforced = enforce(last, &segment, mode);
                out.segments.push(enforced);
                out.continuity.push(mode);
            }
            None => out.segments.push(segment),
        }
        out
    }

    /// New curve with junction `junction` set to `mode` and enforced.
    ///
    /// Only the segment after the junction changes. An out-of-range junction
    /// yields an unchanged copy.
    pub fn with_continuity(&self, junction: usize, mode: Continuity) -> Curve {
        let mut out = self.clone();
        if junction >= out.junction_count() {
            return out;
        }
        if let Some(entry) = out.continuity.get_mut(junction) {
            *entry = mode;
        }
        let prev = out.segments[junction];
        out.segments[junction + 1] = enforce(&prev, &out.segments[junction + 1], mode);
        out
    }

    /// New curve with every junction re-enforced, front to back.
    ///
    /// Each junction sees the already-updated previous segment, so a change
    /// cascades forward; the first segment never moves.
    pub fn enforce_all(&self) -> Curve {
        let mut out = self.clone();
        for i in 0..out.junction_count() {
            let mode = out.continuity.get(i).copied().unwrap_or_default();
            let prev = out.segments[i];
            out.segments[i + 1] = enforce(&prev, &out.segments[i + 1], mode);
        }
        out
    }

    /// Approximate length: each segment measured over `samples` chords.
    pub fn length(&self, samples: usize) -> f64 {
        self.segments.iter().map(|s| curve_length(s, samples)).sum()
    }

    /// [`Curve::length`] with `opts.length_samples` chords per segment.
    pub fn length_with(&self, opts: &SamplingOptions) -> f64 {
        self.length(opts.length_samples)
    }

    /// Hit test over the whole chain: the closest sample within `threshold`
    /// of `target`, with the index of the segment it lies on. Ties go to the
    /// earlier segment. Segments whose bounds, grown by `threshold`, do not
    /// contain `target` are not sampled.
    pub fn hit_test(
        &self,
        target: Point2,
        threshold: f64,
        opts: &SamplingOptions,
    ) -> Option<(usize, NearestPoint)> {
        let mut best: Option<(usize, NearestPoint)> = None;
        for (i, seg) in self.segments.iter().enumerate() {
            let bounds = bounding_box(seg, Tolerance::default()).expand(threshold);
            if !bounds.contains_point(target) {
                continue;
            }
            let Some(hit) = point_on_curve_with(seg, target, threshold, opts) else {
                continue;
            };
            match best {
                Some((_, current)) if current.distance <= hit.distance => {}
                _ => best = Some((i, hit)),
            }
        }
        best
    }

    /// Per-segment approximate lengths, as drawn by renderers.
    pub fn segment_lengths(&self, samples: usize) -> Vec<f64> {
        self.segments.iter().map(|s| curve_length(s, samples)).collect()
    }

    /// Uniform samples of the whole chain with junction points listed once.
    pub fn polyline(&self, samples_per_segment: usize) -> Vec<Point2> {
        chain_polyline(&self.segments, samples_per_segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bzc_math::dvec2;

    fn two_segment_curve() -> Curve {
        Curve::new(
            vec![
                Segment::new(dvec2(0.0, 0.0), dvec2(10.0, 20.0), dvec2(20.0, 20.0), dvec2(30.0, 0.0)),
                Segment::new(dvec2(30.0, 0.0), dvec2(40.0, 5.0), dvec2(50.0, 5.0), dvec2(60.0, 0.0)),
            ],
            vec![Continuity::Independent],
        )
    }

    #[test]
    fn test_push_segment_enforces() {
        let curve = Curve::from_segment(Segment::new(
            dvec2(0.0, 0.0),
            dvec2(0.0, 10.0),
            dvec2(10.0, 10.0),
            dvec2(10.0, 0.0),
        ));
        let next = Segment::new(dvec2(11.0, 1.0), dvec2(12.0, 0.0), dvec2(20.0, 0.0), dvec2(20.0, 10.0));
        let out = curve.push_segment(next, Continuity::C1);

        assert_eq!(out.len(), 2);
        assert_eq!(out.continuity, vec![Continuity::C1]);
        assert_eq!(out.segments[1].p0, dvec2(10.0, 0.0));
        assert_eq!(out.segments[1].p1, dvec2(10.0, -10.0));
        assert_eq!(curve.len(), 1);
    }

    #[test]
    fn test_push_onto_empty() {
        let seg = Segment::line(dvec2(0.0, 0.0), dvec2(1.0, 1.0));
        let out = Curve::default().push_segment(seg, Continuity::C2);
        assert_eq!(out.segments, vec![seg]);
        assert!(out.continuity.is_empty());
    }

    #[test]
    fn test_with_continuity() {
        let curve = two_segment_curve();
        let out = curve.with_continuity(0, Continuity::C2);
        assert_eq!(out.continuity, vec![Continuity::C2]);
        assert_eq!(out.segments[0], curve.segments[0]);
        assert_eq!(out.segments[1].p1, dvec2(40.0, -20.0));
        assert_eq!(out.segments[1].p2, dvec2(50.0, -60.0));
        assert_eq!(out.segments[1].p3, curve.segments[1].p3);

        assert_eq!(curve.with_continuity(5, Continuity::C1), curve);
    }

    #[test]
    fn test_enforce_all_cascades_forward() {
        let third = Segment::new(dvec2(60.0, 0.0), dvec2(70.0, 0.0), dvec2(80.0, 0.0), dvec2(90.0, 0.0));
        let mut curve = two_segment_curve();
        curve.segments.push(third);
        curve.continuity = vec![Continuity::C2, Continuity::C1];

        let out = curve.enforce_all();
        assert_eq!(out.segments[0], curve.segments[0]);
        // Second segment's p2 changed under C2, so the third junction's
        // reflected handle follows the new value.
        let s1 = out.segments[1];
        assert_eq!(out.segments[2].p1, 2.0 * s1.p3 - s1.p2);
        assert_eq!(out.segments[2].p3, third.p3);
    }

    #[test]
    fn test_lengths_and_polyline() {
        let curve = Curve::new(
            vec![
                Segment::line(dvec2(0.0, 0.0), dvec2(3.0, 4.0)),
                Segment::line(dvec2(3.0, 4.0), dvec2(3.0, 10.0)),
            ],
            vec![Continuity::Independent],
        );
        assert!((curve.length(100) - 11.0).abs() < 1e-9);
        let lengths = curve.segment_lengths(10);
        assert_eq!(lengths.len(), 2);
        assert!((lengths[1] - 6.0).abs() < 1e-9);
        assert_eq!(curve.polyline(2).len(), 5);
    }

    #[test]
    fn test_junction_iter() {
        let curve = two_segment_curve();
        let junctions: Vec<_> = curve.junctions().collect();
        assert_eq!(junctions.len(), 1);
        assert_eq!(junctions[0].index, 0);
        assert_eq!(junctions[0].mode, Continuity::Independent);
        assert_eq!(Curve::default().junctions().count(), 0);
    }

    #[test]
    fn test_length_with_default_samples() {
        let curve = two_segment_curve();
        assert_eq!(curve.length_with(&SamplingOptions::default()), curve.length(100));
    }

    #[test]
    fn test_hit_test() {
        let curve = two_segment_curve();
        let opts = SamplingOptions::default();

        let (index, hit) = curve.hit_test(dvec2(15.0, 16.0), 2.0, &opts).unwrap();
        assert_eq!(index, 0);
        assert_eq!(hit.t, 0.5);
        assert!((hit.distance - 1.0).abs() < 1e-9);

        let (index, hit) = curve.hit_test(dvec2(45.0, 4.0), 1.0, &opts).unwrap();
        assert_eq!(index, 1);
        assert_eq!(hit.point, dvec2(45.0, 3.75));

        // Shared junction: both segments touch it, the earlier one wins.
        let (index, hit) = curve.hit_test(dvec2(30.0, 0.0), 1.0, &opts).unwrap();
        assert_eq!(index, 0);
        assert_eq!(hit.t, 1.0);

        assert!(curve.hit_test(dvec2(100.0, 100.0), 5.0, &opts).is_none());
        assert!(Curve::default().hit_test(dvec2(0.0, 0.0), 5.0, &opts).is_none());
    }
}
