//! Cubic Bézier segment.

use bzc_math::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use super::Parametric;
use crate::bezier;

/// One cubic Bézier control polygon.
///
/// `p0` and `p3` are the on-curve anchors; `p1` and `p2` are the off-curve
/// handles shaping the outgoing and incoming tangents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub p0: Point2,
    pub p1: Point2,
    pub p2: Point2,
    pub p3: Point2,
}

impl Segment {
    pub const fn new(p0: Point2, p1: Point2, p2: Point2, p3: Point2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Straight segment with handles at the thirds of the chord.
    pub fn line(start: Point2, end: Point2) -> Self {
        let d = end - start;
        Self {
            p0: start,
            p1: start + d / 3.0,
            p2: end - d / 3.0,
            p3: end,
        }
    }

    pub fn to_array(self) -> [Point2; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }
}

impl Parametric for Segment {
    fn point_at(&self, t: f64) -> Point2 {
        bezier::cubic_bezier(self.p0, self.p1, self.p2, self.p3, t)
    }

    fn tangent_at(&self, t: f64) -> Vector2 {
        bezier::derivative(self.p0, self.p1, self.p2, self.p3, t)
    }
}
