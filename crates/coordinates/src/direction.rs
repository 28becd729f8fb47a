use std::str::FromStr;

use angles::{FAngle, QUARTER_TURN};
use misc_utilities::GeometryError;
use ordered_float::OrderedFloat;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::Offset;

/// Cardinal directions, with north along the positive y axis.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    // counterclockwise, starting from the positive x axis
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::North,
        Direction::West,
        Direction::South,
    ];

    pub fn quarter_turns_ccw(&self) -> i32 {
        match self {
            Direction::East => 0,
            Direction::North => 1,
            Direction::West => 2,
            Direction::South => -1,
        }
    }
    pub fn heading(&self) -> FAngle {
        FAngle::from_quarter_turns(self.quarter_turns_ccw() as f64)
    }
    pub fn nearest(angle: FAngle) -> Self {
        // ALL is non-empty, so min_by_key always finds one
        Self::ALL
            .into_iter()
            .min_by_key(|dir| OrderedFloat(angle.abs_smallest_angle_to(dir.heading()).rad()))
            .unwrap_or(Direction::East)
    }
    pub fn reversed(&self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
    pub fn turned_left(&self) -> Self {
        Self::nearest(self.heading() + QUARTER_TURN)
    }
    pub fn turned_right(&self) -> Self {
        Self::nearest(self.heading() - QUARTER_TURN)
    }
    pub fn to_unit_offset(&self) -> Offset {
        let [x, y] = self.heading().xy();
        euclid::vec2(x.round(), y.round())
    }
    pub fn parse(s: &str) -> Result<Self, GeometryError> {
        Self::from_str(s.trim()).map_err(|_| GeometryError::UnknownDirection(s.to_string()))
    }
    pub fn all() -> impl Iterator<Item = Direction> {
        Self::iter()
    }
}

impl std::ops::Neg for Direction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.reversed()
    }
}

impl From<Direction> for FAngle {
    fn from(value: Direction) -> Self {
        value.heading()
    }
}
