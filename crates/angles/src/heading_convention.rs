use std::str::FromStr;

use misc_utilities::GeometryError;
use strum_macros::{Display, EnumIter, EnumString};

use crate::FAngle;

pub const HEADING_CONVENTION_ENV_VAR: &str = "HEADING_CONVENTION";

/// How relative headings are reported.
///
/// `Raw` leaves `bearing - own_heading` exactly as computed, which may land outside `(-π, π]`.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum HeadingConvention {
    #[default]
    Raw,
    CenteredAtZero,
    StartingAtZero,
}

impl HeadingConvention {
    pub fn apply(&self, angle: FAngle) -> FAngle {
        match self {
            HeadingConvention::Raw => angle,
            HeadingConvention::CenteredAtZero => angle.standardized_centered_at_zero(),
            HeadingConvention::StartingAtZero => angle.standardized_starting_at_zero(),
        }
    }
    pub fn parse(s: &str) -> Result<Self, GeometryError> {
        Self::from_str(s.trim()).map_err(|_| GeometryError::UnknownConvention(s.to_string()))
    }
    pub fn from_env() -> Self {
        match std::env::var(HEADING_CONVENTION_ENV_VAR) {
            Ok(value) => Self::from_env_value(&value),
            Err(_) => Self::default(),
        }
    }
    fn from_env_value(value: &str) -> Self {
        Self::parse(value).unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to raw headings");
            Self::default()
        })
    }
}
