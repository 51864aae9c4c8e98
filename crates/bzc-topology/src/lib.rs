//! Bézier chain data model and structural edits.

pub mod chain;

pub use chain::{
    delete_node, tessellate_collection, AnchorEnd, Curve, CurveCollection, Junction, JunctionIter,
    PointRole,
};
