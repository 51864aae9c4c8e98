//! Junction smoothness between consecutive segments.
//!
//! Enforcement is one-directional: the previous segment is authoritative and
//! only the next segment's points are recomputed. Inputs are not validated;
//! callers pass genuinely adjacent segments.

use serde::{Deserialize, Serialize};

use crate::curve::Segment;

/// Constraint held at a junction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Continuity {
    /// Shared endpoint only.
    #[default]
    Independent,
    /// Tangent direction and magnitude match.
    C1,
    /// Second derivatives match as well.
    C2,
}

/// `next.p0 = prev.p3`.
pub fn enforce_c0(prev: &Segment, next: &Segment) -> Segment {
    Segment { p0: prev.p3, ..*next }
}

/// C0 plus `next.p1` reflected from `prev.p2` through the shared anchor.
pub fn enforce_c1(prev: &Segment, next: &Segment) -> Segment {
    Segment {
        p1: 2.0 * prev.p3 - prev.p2,
        ..enforce_c0(prev, next)
    }
}

/// C1 plus `next.p2 = 4 prev.p3 - 4 prev.p2 + prev.p1`.
///
/// Matches the second derivative assuming both segments span equal unit
/// parameter intervals; it does not account for differing speeds.
pub fn enforce_c2(prev: &Segment, next: &Segment) -> Segment {
    Segment {
        p2: 4.0 * prev.p3 - 4.0 * prev.p2 + prev.p1,
        ..enforce_c1(prev, next)
    }
}

/// Recompute `next` so the junction satisfies `mode`.
///
/// `Independent` still closes the junction (C0).
pub fn enforce(prev: &Segment, next: &Segment, mode: Continuity) -> Segment {
    match mode {
        Continuity::Independent => enforce_c0(prev, next),
        Continuity::C1 => enforce_c1(prev, next),
        Continuity::C2 => enforce_c2(prev, next),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bezier::{derivative, second_derivative};
    use bzc_math::dvec2;

    fn prev() -> Segment {
        Segment::new(dvec2(0.0, 0.0), dvec2(10.0, 30.0), dvec2(40.0, 50.0), dvec2(60.0, 20.0))
    }

    fn next() -> Segment {
        Segment::new(dvec2(61.0, 22.0), dvec2(80.0, 0.0), dvec2(100.0, 5.0), dvec2(120.0, 40.0))
    }

    #[test]
    fn test_c0_moves_only_start_anchor() {
        let out = enforce_c0(&prev(), &next());
        assert_eq!(out.p0, prev().p3);
        assert_eq!(out.p1, next().p1);
        assert_eq!(out.p2, next().p2);
        assert_eq!(out.p3, next().p3);
    }

    #[test]
    fn test_c1_reflects_handle() {
        let p = prev();
        let out = enforce_c1(&p, &next());
        assert_eq!(out.p0, p.p3);
        assert_eq!(out.p1, 2.0 * p.p3 - p.p2);
        assert_eq!(out.p1, dvec2(80.0, -10.0));
        assert_eq!(out.p2, next().p2);
        assert_eq!(out.p3, next().p3);
    }

    #[test]
    fn test_c1_matches_tangent() {
        let p = prev();
        let n = enforce_c1(&p, &next());
        let d_prev = derivative(p.p0, p.p1, p.p2, p.p3, 1.0);
        let d_next = derivative(n.p0, n.p1, n.p2, n.p3, 0.0);
        assert!(d_prev.abs_diff_eq(d_next, 1e-9));
    }

    #[test]
    fn test_c2_sets_both_handles() {
        let p = prev();
        let out = enforce_c2(&p, &next());
        assert_eq!(out.p0, p.p3);
        assert_eq!(out.p1, 2.0 * p.p3 - p.p2);
        assert_eq!(out.p2, 4.0 * p.p3 - 4.0 * p.p2 + p.p1);
        assert_eq!(out.p2, dvec2(90.0, -90.0));
        assert_eq!(out.p3, next().p3);
    }

    #[test]
    fn test_c2_matches_second_derivative() {
        let p = prev();
        let n = enforce_c2(&p, &next());
        let dd_prev = second_derivative(p.p0, p.p1, p.p2, p.p3, 1.0);
        let dd_next = second_derivative(n.p0, n.p1, n.p2, n.p3, 0.0);
        assert!(dd_prev.abs_diff_eq(dd_next, 1e-9));
    }

    #[test]
    fn test_enforce_dispatch() {
        let p = prev();
        let n = next();
        assert_eq!(enforce(&p, &n, Continuity::Independent), enforce_c0(&p, &n));
        assert_eq!(enforce(&p, &n, Continuity::C1), enforce_c1(&p, &n));
        assert_eq!(enforce(&p, &n, Continuity::C2), enforce_c2(&p, &n));
    }

    #[test]
    fn test_inputs_untouched() {
        let p = prev();
        let n = next();
        let _ = enforce(&p, &n, Continuity::C2);
        assert_eq!(p, prev());
        assert_eq!(n, next());
    }
}
