use ambassador::{delegatable_trait, Delegate};
use derive_more::From;
use enum_as_inner::EnumAsInner;

use angles::FAngle;
use coordinates::Point;

use crate::Pose;

/// Something that sits at a point and can measure other points from there.
#[delegatable_trait]
pub trait Position {
    fn location(&self) -> Point;
    fn distance_to(&self, other: Point) -> f64;
    fn heading_to(&self, other: Point) -> FAngle;
    fn distance_and_heading_to(&self, other: Point) -> (f64, FAngle) {
        (self.distance_to(other), self.heading_to(other))
    }
}

impl Position for Point {
    fn location(&self) -> Point {
        *self
    }
    fn distance_to(&self, other: Point) -> f64 {
        Point::distance_to(self, other)
    }
    fn heading_to(&self, other: Point) -> FAngle {
        Point::heading_to(self, other)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, From, Delegate, EnumAsInner)]
#[delegate(Position)]
pub enum Locator {
    Plain(Point),
    Oriented(Pose),
}

impl Locator {
    // Plain positions face along the positive x axis
    pub fn facing(&self) -> FAngle {
        match self {
            Locator::Plain(_) => FAngle::zero(),
            Locator::Oriented(pose) => pose.heading(),
        }
    }
    pub fn to_pose(&self) -> Pose {
        Pose::from_point_and_heading(self.location(), self.facing())
    }
}
