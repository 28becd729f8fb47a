use std::f64::consts::{FRAC_PI_2, PI, TAU};

pub const FULL_TURN: FAngle = FAngle(TAU);
pub const HALF_TURN: FAngle = FAngle(PI);
pub const QUARTER_TURN: FAngle = FAngle(FRAC_PI_2);

/// An angle in radians.
///
/// Arithmetic never wraps; use one of the `standardized_*` methods to pick a range.
#[derive(
    Default,
    Debug,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    derive_more::Add,
    derive_more::Sub,
    derive_more::Neg,
    derive_more::AddAssign,
    derive_more::SubAssign,
)]
pub struct FAngle(f64);

impl FAngle {
    pub fn zero() -> Self {
        Self(0.0)
    }
    pub fn rad(&self) -> f64 {
        self.0
    }
    pub fn deg(&self) -> f64 {
        self.0.to_degrees()
    }
    pub fn turns(&self) -> f64 {
        self.rad() / TAU
    }
    pub fn from_deg(x: f64) -> Self {
        Self(x.to_radians())
    }
    pub fn from_rad(x: f64) -> Self {
        Self(x)
    }
    pub fn from_turns(x: f64) -> Self {
        Self::from_rad(x * TAU)
    }
    pub fn from_quarter_turns(x: f64) -> Self {
        Self::from_turns(x / 4.0)
    }
    // atan2, so the zero vector maps to zero
    pub fn from_xy(x: f64, y: f64) -> Self {
        Self::from_rad(y.atan2(x))
    }
    pub fn sin(&self) -> f64 {
        self.rad().sin()
    }
    pub fn cos(&self) -> f64 {
        self.rad().cos()
    }
    pub fn x(&self) -> f64 {
        self.cos()
    }
    pub fn y(&self) -> f64 {
        self.sin()
    }
    pub fn xy(&self) -> [f64; 2] {
        [self.x(), self.y()]
    }
    /// Range `[-π, π)`
    pub fn standardized_centered_at_zero(&self) -> Self {
        (*self + HALF_TURN).standardized_starting_at_zero() - HALF_TURN
    }
    /// Range `[0, 2π)`
    pub fn standardized_starting_at_zero(&self) -> Self {
        // rem_euclid rounds tiny negatives up to exactly TAU
        let r = self.rad().rem_euclid(TAU);
        Self::from_rad(if r >= TAU { 0.0 } else { r })
    }
    pub fn dot(&self, other: Self) -> f64 {
        self.x() * other.x() + self.y() * other.y()
    }
    pub fn smallest_angle_to(&self, other: Self) -> Self {
        (other - *self).standardized_centered_at_zero()
    }
    // Includes 0
    pub fn positive_angle_to(&self, other: Self) -> Self {
        (other - *self).standardized_starting_at_zero()
    }
    pub fn abs(&self) -> Self {
        Self::from_rad(self.rad().abs())
    }
    pub fn abs_smallest_angle_to(&self, other: Self) -> Self {
        self.smallest_angle_to(other).abs()
    }
}

impl From<FAngle> for f64 {
    fn from(value: FAngle) -> Self {
        value.rad()
    }
}

pub fn deg(x: f64) -> FAngle {
    FAngle::from_deg(x)
}
pub fn rad(x: f64) -> FAngle {
    FAngle::from_rad(x)
}
