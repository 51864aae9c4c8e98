//! Bézier chain geometry: cubic segment evaluation, subdivision, bounds,
//! nearest-point search, and junction continuity.

pub mod bezier;
pub mod continuity;
pub mod curve;
pub mod tessellate;

pub use continuity::Continuity;
pub use curve::{Parametric, Segment};
