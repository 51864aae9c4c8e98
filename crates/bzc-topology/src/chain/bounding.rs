use bzc_core::traits::BoundingBox;
use bzc_core::Tolerance;
use bzc_geometry::bezier;
use bzc_math::{Aabb2, Point2};

use super::collection::CurveCollection;
use super::curve::Curve;

impl Curve {
    pub fn aabb(&self) -> Option<Aabb2> {
        self.segments
            .iter()
            .map(|s| bezier::bounding_box(s, Tolerance::default()))
            .reduce(|a, b| a.merge(&b))
    }
}

impl CurveCollection {
    pub fn aabb(&self) -> Option<Aabb2> {
        self.curves
            .iter()
            .filter_map(Curve::aabb)
            .reduce(|a, b| a.merge(&b))
    }
}

impl BoundingBox for Curve {
    type Point = Point2;

    fn bounding_box(&self) -> Option<(Point2, Point2)> {
        self.aabb().map(|b| (b.min, b.max))
    }
}

impl BoundingBox for CurveCollection {
    type Point = Point2;

    fn bounding_box(&self) -> Option<(Point2, Point2)> {
        self.aabb().map(|b| (b.min, b.max))
    }
}
