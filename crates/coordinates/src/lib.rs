mod point;
pub use point::*;

mod direction;
pub use direction::*;

// empty struct for euclid typing
#[derive(Clone, PartialEq, Debug, Copy)]
pub struct WorldFrame;

pub type WorldPoint = euclid::Point2D<f64, WorldFrame>;
pub type Offset = euclid::Vector2D<f64, WorldFrame>;
