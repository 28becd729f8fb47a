use std::fmt::{Display, Formatter};
use std::ops::{Add, Sub};

use angles::FAngle;
use misc_utilities::{Axis, GeometryError, OkOrMessage};

use crate::{Offset, WorldPoint};

#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
    pub fn try_new(x: f64, y: f64) -> Result<Self, GeometryError> {
        Ok(Self::new(
            GeometryError::check_coordinate(Axis::X, x)?,
            GeometryError::check_coordinate(Axis::Y, y)?,
        ))
    }
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0)
    }
    pub fn x(&self) -> f64 {
        self.x
    }
    pub fn y(&self) -> f64 {
        self.y
    }
    pub fn to_euclid(&self) -> WorldPoint {
        euclid::point2(self.x, self.y)
    }
    pub fn offset_to(&self, other: Point) -> Offset {
        other.to_euclid() - self.to_euclid()
    }
    pub fn distance_to(&self, other: Point) -> f64 {
        self.offset_to(other).length()
    }
    /// Bearing from this point to `other`, counterclockwise from the positive x axis, in `(-π, π]`.
    ///
    /// Coincident points give zero.
    pub fn heading_to(&self, other: Point) -> FAngle {
        // euclid's angle_from_x_axis uses a fast approximate atan2
        let offset = self.offset_to(other);
        FAngle::from_xy(offset.x, offset.y)
    }
    pub fn about_eq(&self, other: Self, tolerance: f64) -> bool {
        self.distance_to(other) < tolerance
    }
    pub fn check_about_eq(&self, other: Self) -> OkOrMessage {
        let tolerance = 0.001;
        if self.about_eq(other, tolerance) {
            Ok(())
        } else {
            Err(format!(
                "\nPoints too far apart:\n\tp1: {:?}\n\tp2: {:?}\n",
                self, other
            ))
        }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(x: {}, y: {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from(value: (f64, f64)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl From<[f64; 2]> for Point {
    fn from(value: [f64; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl From<WorldPoint> for Point {
    fn from(value: WorldPoint) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<Point> for WorldPoint {
    fn from(value: Point) -> Self {
        value.to_euclid()
    }
}

impl Add<Offset> for Point {
    type Output = Point;

    fn add(self, rhs: Offset) -> Self::Output {
        (self.to_euclid() + rhs).into()
    }
}

impl Sub<Offset> for Point {
    type Output = Point;

    fn sub(self, rhs: Offset) -> Self::Output {
        (self.to_euclid() - rhs).into()
    }
}

impl Sub<Point> for Point {
    type Output = Offset;

    fn sub(self, rhs: Point) -> Self::Output {
        rhs.offset_to(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ntest::assert_about_eq;
    use pretty_assertions::assert_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn test_distance_3_4_5() {
        assert_eq!(Point::origin().distance_to(Point::new(3.0, 4.0)), 5.0);
        assert_eq!(Point::new(-1.0, 2.0).distance_to(Point::new(2.0, -2.0)), 5.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let points: Vec<Point> = vec![
            (0.0, 0.0).into(),
            (1.5, -2.25).into(),
            (-1e6, 3.0).into(),
            (0.1, 0.2).into(),
            (7.0, 7.0).into(),
        ];
        for &a in &points {
            for &b in &points {
                assert_eq!(a.distance_to(b), b.distance_to(a), "a: {a}, b: {b}");
            }
        }
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        [(0.0, 0.0), (3.5, -8.0), (-1e9, 1e9)]
            .into_iter()
            .map(Point::from)
            .for_each(|p| assert_eq!(p.distance_to(p), 0.0));
    }

    mod heading_to {
        use super::*;
        macro_rules! tests_for_heading_to {
            ($($name:ident: $value:expr,)*) => {
                $(
                    #[test]
                    fn $name() {
                        let (from, to, radians): ((f64, f64), (f64, f64), f64) = $value;
                        assert_about_eq!(Point::from(from).heading_to(Point::from(to)).rad(), radians);
                    }
                )*
            }
        }
        tests_for_heading_to! {
            // from, to, expected radians
            positive_x: ((0.0, 0.0), (1.0, 0.0), 0.0),
            positive_y: ((0.0, 0.0), (0.0, 1.0), FRAC_PI_2),
            negative_x: ((0.0, 0.0), (-1.0, 0.0), PI),
            negative_y: ((0.0, 0.0), (0.0, -1.0), -FRAC_PI_2),
            diagonal: ((1.0, 1.0), (2.0, 2.0), FRAC_PI_4),
            back_diagonal: ((1.0, 1.0), (0.0, 0.0), -3.0 * FRAC_PI_4),
            coincident: ((4.0, -2.0), (4.0, -2.0), 0.0),
        }
    }

    #[test]
    fn test_heading_matches_atan2() {
        let heading = Point::origin().heading_to(Point::new(3.0, 4.0));
        assert_relative_eq!(heading.rad(), 4.0_f64.atan2(3.0));
    }

    #[test]
    fn test_try_new() {
        assert_eq!(Point::try_new(1.0, 2.0), Ok(Point::new(1.0, 2.0)));
        assert!(matches!(
            Point::try_new(f64::NAN, 0.0),
            Err(GeometryError::NonFiniteCoordinate { axis: Axis::X, .. })
        ));
        assert_eq!(
            Point::try_new(0.0, f64::INFINITY),
            Err(GeometryError::NonFiniteCoordinate {
                axis: Axis::Y,
                value: f64::INFINITY
            })
        );
    }

    #[test]
    fn test_offset_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        let offset = a.offset_to(b);
        assert_eq!(offset, euclid::vec2(3.0, 4.0));
        assert_eq!(b - a, offset);
        assert_eq!(a + offset, b);
        assert_eq!(b - offset, a);
    }

    #[test]
    fn test_check_about_eq() {
        assert!(Point::new(1.0, 1.0)
            .check_about_eq(Point::new(1.0, 1.0001))
            .is_ok());
        assert!(Point::new(1.0, 1.0)
            .check_about_eq(Point::new(1.0, 1.1))
            .is_err());
    }
}
