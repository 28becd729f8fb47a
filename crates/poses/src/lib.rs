mod pose;
pub use pose::Pose;

mod position;
pub use position::{Locator, Position};
