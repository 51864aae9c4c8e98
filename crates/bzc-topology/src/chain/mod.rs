mod bounding;
pub mod collection;
pub mod curve;
pub mod edit;
mod iter;
mod render;
mod validate;

pub use collection::CurveCollection;
pub use curve::Curve;
pub use edit::{delete_node, AnchorEnd, PointRole};
pub use iter::{Junction, JunctionIter};
pub use render::tessellate_collection;
