//! Anchor deletion over immutable collections.
//!
//! Every edit returns a fresh collection; the input is only read. Invalid
//! targets (unknown curve, handle roles, empty curves) return an unchanged
//! copy so UI callers need not pre-validate.

use bzc_geometry::Segment;
use serde::{Deserialize, Serialize};

use super::collection::CurveCollection;
use super::curve::Curve;

/// Which of a segment's four control points a gesture targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointRole {
    P0,
    P1,
    P2,
    P3,
}

/// End of a segment an anchor sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorEnd {
    Start,
    End,
}

impl PointRole {
    /// `Some` for the on-curve anchors, `None` for handles.
    pub fn anchor_end(self) -> Option<AnchorEnd> {
        match self {
            PointRole::P0 => Some(AnchorEnd::Start),
            PointRole::P3 => Some(AnchorEnd::End),
            PointRole::P1 | PointRole::P2 => None,
        }
    }
}

/// Delete the anchor `role` of `segment_index` in curve `curve_index`.
///
/// - a one-segment curve disappears entirely, and the active index is
///   clamped to the shortened collection;
/// - the first `p0` or the last `p3` trims the end segment and its junction;
/// - an interior anchor merges its two segments into one, keeping the outer
///   anchors and handles, and drops that junction's continuity entry.
///
/// Out-of-range curve or segment indices and handle roles are no-ops.
pub fn delete_node(
    collection: &CurveCollection,
    curve_index: usize,
    segment_index: usize,
    role: PointRole,
) -> CurveCollection {
    let Some(end) = role.anchor_end() else {
        log::debug!("delete_node: {role:?} is a handle, nothing to delete");
        return collection.clone();
    };
    let Some(curve) = collection.curves.get(curve_index) else {
        log::debug!(
            "delete_node: curve {curve_index} out of range ({} curves)",
            collection.len()
        );
        return collection.clone();
    };

    let n = curve.len();
    if n == 0 {
        log::debug!("delete_node: curve {curve_index} has no segments");
        return collection.clone();
    }
    if segment_index >= n {
        log::debug!("delete_node: segment {segment_index} out of range ({n} segments)");
        return collection.clone();
    }

    if n == 1 {
        return remove_curve(collection, curve_index);
    }

    let edited = match end {
        AnchorEnd::Start if segment_index == 0 => without_first(curve),
        AnchorEnd::Start => merged_at(curve, segment_index - 1),
        AnchorEnd::End if segment_index == n - 1 => without_last(curve),
        AnchorEnd::End => merged_at(curve, segment_index),
    };
    log::trace!(
        "delete_node: curve {curve_index} now has {} segments",
        edited.len()
    );
    collection.with_replaced(curve_index, edited)
}

fn remove_curve(collection: &CurveCollection, curve_index: usize) -> CurveCollection {
    let curves: Vec<Curve> = collection
        .curves
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != curve_index)
        .map(|(_, c)| c.clone())
        .collect();

    let active = match collection.active {
        Some(a) if a >= curves.len() => curves.len().checked_sub(1),
        other => other,
    };
    log::trace!(
        "delete_node: removed curve {curve_index}, {} left, active {active:?}",
        curves.len()
    );
    CurveCollection { curves, active }
}

fn without_first(curve: &Curve) -> Curve {
    Curve {
        segments: curve.segments[1..].to_vec(),
        continuity: curve.continuity.iter().skip(1).copied().collect(),
    }
}

fn without_last(curve: &Curve) -> Curve {
    let n = curve.segments.len();
    let keep = curve.continuity.len().min(n - 2);
    Curve {
        segments: curve.segments[..n - 1].to_vec(),
        continuity: curve.continuity[..keep].to_vec(),
    }
}

/// Merge segments `i` and `i + 1` across the junction they share.
fn merged_at(curve: &Curve, i: usize) -> Curve {
    let first = &curve.segments[i];
    let second = &curve.segments[i + 1];
    let merged = Segment::new(first.p0, first.p1, second.p2, second.p3);

    let mut segments = Vec::with_capacity(curve.segments.len() - 1);
    segments.extend_from_slice(&curve.segments[..i]);
    segments.push(merged);
    segments.extend_from_slice(&curve.segments[i + 2..]);

    let mut continuity = curve.continuity.clone();
    if i < continuity.len() {
        continuity.remove(i);
    }
    Curve {
        segments,
        continuity,
    }
}
