mod float_angle;
pub use float_angle::*;

mod heading_convention;
pub use heading_convention::{HeadingConvention, HEADING_CONVENTION_ENV_VAR};
