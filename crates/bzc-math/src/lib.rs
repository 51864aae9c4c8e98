pub mod aabb;
pub mod point;
pub mod roots;

pub use glam::{dvec2, DVec2};
pub use aabb::Aabb2;
pub use point::{distance, lerp};

pub type Point2 = DVec2;
pub type Vector2 = DVec2;
