use std::fmt::{Debug, Formatter};

use getset::CopyGetters;

use angles::{FAngle, HeadingConvention};
use coordinates::{Direction, Offset, Point};
use misc_utilities::GeometryError;

use crate::Position;

/// A point plus the direction it is facing.
///
/// Bearings measured from a pose are relative to its own heading, and are not wrapped.
#[derive(Clone, Copy, PartialEq, Default, CopyGetters)]
#[get_copy = "pub"]
pub struct Pose {
    position: Point,
    heading: FAngle,
}

impl Pose {
    pub fn new(x: f64, y: f64, heading_radians: f64) -> Self {
        Self::from_point_and_heading(Point::new(x, y), FAngle::from_rad(heading_radians))
    }
    pub fn try_new(x: f64, y: f64, heading_radians: f64) -> Result<Self, GeometryError> {
        let position = Point::try_new(x, y)?;
        let heading = GeometryError::check_heading(heading_radians)?;
        Ok(Self::from_point_and_heading(position, FAngle::from_rad(heading)))
    }
    pub fn from_point_and_heading(position: Point, heading: FAngle) -> Self {
        Pose { position, heading }
    }
    pub fn facing(position: impl Into<Point>, direction: Direction) -> Self {
        Self::from_point_and_heading(position.into(), direction.heading())
    }
    pub fn x(&self) -> f64 {
        self.position.x()
    }
    pub fn y(&self) -> f64 {
        self.position.y()
    }
    pub fn nearest_direction(&self) -> Direction {
        Direction::nearest(self.heading)
    }
    pub fn heading_to_with(&self, other: Point, convention: HeadingConvention) -> FAngle {
        convention.apply(self.heading_to(other))
    }
    pub fn turned(&self, delta: FAngle) -> Self {
        Self::from_point_and_heading(self.position, self.heading + delta)
    }
    pub fn moved(&self, offset: Offset) -> Self {
        Self::from_point_and_heading(self.position + offset, self.heading)
    }
    // x is forward, y is to the left
    pub fn other_point_absolute_to_relative(&self, other: Point) -> Point {
        let distance = self.distance_to(other);
        let relative_heading = self.heading_to(other);
        Point::new(
            distance * relative_heading.cos(),
            distance * relative_heading.sin(),
        )
    }
    pub fn other_point_relative_to_absolute(&self, relative: Point) -> Point {
        let angle = self.heading + Point::origin().heading_to(relative);
        let length = Point::origin().distance_to(relative);
        self.position + euclid::vec2(length * angle.cos(), length * angle.sin())
    }
}

impl Position for Pose {
    fn location(&self) -> Point {
        self.position
    }
    fn distance_to(&self, other: Point) -> f64 {
        self.position.distance_to(other)
    }
    fn heading_to(&self, other: Point) -> FAngle {
        self.position.heading_to(other) - self.heading
    }
}

impl Debug for Pose {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Pose {{ x: {}, y: {}, heading: {} rad }}",
            self.x(),
            self.y(),
            self.heading.rad()
        )
    }
}

impl From<(f64, f64, f64)> for Pose {
    fn from(value: (f64, f64, f64)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<(Point, Direction)> for Pose {
    fn from(value: (Point, Direction)) -> Self {
        Self::facing(value.0, value.1)
    }
}

impl From<Pose> for Point {
    fn from(value: Pose) -> Self {
        value.position
    }
}
