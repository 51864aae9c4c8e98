use bzc_core::traits::{BoundingBox, Validate};
use bzc_core::SamplingOptions;
use bzc_geometry::{Continuity, Segment};
use bzc_math::{dvec2, Point2};
use bzc_topology::{delete_node, tessellate_collection, Curve, CurveCollection, PointRole};

fn seg(p0: Point2, p1: Point2, p2: Point2, p3: Point2) -> Segment {
    Segment::new(p0, p1, p2, p3)
}

fn two_segment_curve() -> Curve {
    Curve::new(
        vec![
            seg(dvec2(0.0, 0.0), dvec2(50.0, 100.0), dvec2(150.0, 100.0), dvec2(200.0, 0.0)),
            seg(dvec2(200.0, 0.0), dvec2(250.0, -100.0), dvec2(350.0, -100.0), dvec2(400.0, 0.0)),
        ],
        vec![Continuity::C1],
    )
}

fn single(x: f64) -> Curve {
    Curve::from_segment(Segment::line(dvec2(x, 0.0), dvec2(x + 10.0, 0.0)))
}

#[test]
fn test_delete_first_p0_leaves_one_segment() {
    let coll = CurveCollection::new(vec![two_segment_curve()], Some(0));
    let out = delete_node(&coll, 0, 0, PointRole::P0);
    assert_eq!(out.curves[0].len(), 1);
    assert_eq!(out.curves[0].segments[0], two_segment_curve().segments[1]);
    assert!(out.curves[0].continuity.is_empty());
}

#[test]
fn test_delete_last_p3_leaves_one_segment() {
    let coll = CurveCollection::new(vec![two_segment_curve()], Some(0));
    let out = delete_node(&coll, 0, 1, PointRole::P3);
    assert_eq!(out.curves[0].len(), 1);
    assert_eq!(out.curves[0].segments[0], two_segment_curve().segments[0]);
    assert!(out.curves[0].continuity.is_empty());
}

#[test]
fn test_delete_middle_anchor_merges() {
    let original = two_segment_curve();
    let coll = CurveCollection::new(vec![original.clone()], Some(0));
    let out = delete_node(&coll, 0, 0, PointRole::P3);

    let curve = &out.curves[0];
    assert_eq!(curve.len(), 1);
    assert!(curve.continuity.is_empty());
    let merged = curve.segments[0];
    assert_eq!(merged.p0, original.segments[0].p0);
    assert_eq!(merged.p1, original.segments[0].p1);
    assert_eq!(merged.p2, original.segments[1].p2);
    assert_eq!(merged.p3, original.segments[1].p3);
}

#[test]
fn test_delete_on_single_segment_removes_curve() {
    let coll = CurveCollection::new(vec![single(0.0), single(20.0), single(40.0)], Some(0));
    let out = delete_node(&coll, 1, 0, PointRole::P3);
    assert_eq!(out.len(), 2);
    assert_eq!(out.curves, vec![single(0.0), single(40.0)]);
    assert_eq!(out.active, Some(0));
}

#[test]
fn test_delete_never_mutates_input() {
    let coll = CurveCollection::new(vec![two_segment_curve(), single(500.0)], Some(1));
    let snapshot = coll.clone();

    let cases = [
        (0, 0, PointRole::P0),
        (0, 0, PointRole::P3),
        (0, 1, PointRole::P3),
        (1, 0, PointRole::P0),
        (0, 0, PointRole::P1),
        (9, 0, PointRole::P0),
    ];
    for (curve_index, segment_index, role) in cases {
        let _ = delete_node(&coll, curve_index, segment_index, role);
        assert_eq!(coll, snapshot);
    }
}

#[test]
fn test_noops_return_equal_state() {
    let coll = CurveCollection::new(vec![two_segment_curve()], Some(0));
    assert_eq!(delete_node(&coll, 0, 0, PointRole::P1), coll);
    assert_eq!(delete_node(&coll, 0, 1, PointRole::P2), coll);
    assert_eq!(delete_node(&coll, 1, 0, PointRole::P0), coll);

    let with_empty = CurveCollection::new(vec![Curve::default()], Some(0));
    assert_eq!(delete_node(&with_empty, 0, 0, PointRole::P0), with_empty);
}

#[test]
fn test_edits_preserve_junction_invariant() {
    let base = Curve::from_segment(seg(dvec2(0.0, 0.0), dvec2(0.0, 40.0), dvec2(40.0, 40.0), dvec2(40.0, 0.0)));
    let curve = base
        .push_segment(Segment::line(dvec2(40.0, 0.0), dvec2(80.0, 0.0)), Continuity::C1)
        .push_segment(Segment::line(dvec2(80.0, 0.0), dvec2(120.0, 0.0)), Continuity::C2)
        .push_segment(Segment::line(dvec2(120.0, 0.0), dvec2(160.0, 0.0)), Continuity::Independent);
    curve.validate().unwrap();

    let coll = CurveCollection::new(vec![curve], Some(0));
    for (segment_index, role) in [(0, PointRole::P0), (1, PointRole::P3), (3, PointRole::P3), (2, PointRole::P0)] {
        let out = delete_node(&coll, 0, segment_index, role);
        out.validate().unwrap();
    }
}

#[test]
fn test_validate_reports_open_junction() {
    let mut curve = two_segment_curve();
    curve.segments[1].p0 = dvec2(201.0, 0.0);
    assert!(curve.validate().is_err());

    let mut missing = two_segment_curve();
    missing.continuity.clear();
    assert!(missing.validate().is_err());

    let coll = CurveCollection::new(vec![two_segment_curve()], Some(4));
    assert!(coll.validate().is_err());
}

#[test]
fn test_collection_bounding_box() {
    let coll = CurveCollection::from_curves(vec![two_segment_curve(), single(500.0)]);
    let (min, max) = coll.bounding_box().unwrap();
    assert!(min.abs_diff_eq(dvec2(0.0, -75.0), 1e-9));
    assert!(max.abs_diff_eq(dvec2(510.0, 75.0), 1e-9));
    assert!(CurveCollection::default().bounding_box().is_none());
}

#[test]
fn test_tessellate_collection() {
    let coll = CurveCollection::from_curves(vec![two_segment_curve(), single(500.0)]);
    let polylines = tessellate_collection(&coll, &SamplingOptions::default());
    assert_eq!(polylines.len(), 2);
    assert_eq!(polylines[0].first(), Some(&dvec2(0.0, 0.0)));
    assert!(polylines[0].last().unwrap().abs_diff_eq(dvec2(400.0, 0.0), 1e-12));
    // The junction point appears exactly once.
    let at_junction = polylines[0]
        .iter()
        .filter(|p| p.abs_diff_eq(dvec2(200.0, 0.0), 1e-12))
        .count();
    assert_eq!(at_junction, 1);
}

#[test]
fn test_serde_roundtrip() {
    let coll = CurveCollection::new(vec![two_segment_curve()], Some(0));
    let json = serde_json::to_string(&coll).unwrap();
    assert!(json.contains("\"c1\""));
    let back: CurveCollection = serde_json::from_str(&json).unwrap();
    assert_eq!(back, coll);
}
