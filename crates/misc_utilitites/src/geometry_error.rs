use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("{axis} coordinate must be finite, got {value}")]
    NonFiniteCoordinate { axis: Axis, value: f64 },
    #[error("heading must be finite, got {0}")]
    NonFiniteHeading(f64),
    #[error("unknown direction: {0:?}")]
    UnknownDirection(String),
    #[error("unknown heading convention: {0:?}")]
    UnknownConvention(String),
}

impl GeometryError {
    pub fn check_coordinate(axis: Axis, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(GeometryError::NonFiniteCoordinate { axis, value })
        }
    }
    pub fn check_heading(value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(GeometryError::NonFiniteHeading(value))
        }
    }
}
