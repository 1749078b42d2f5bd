//! Unit system selection for lookup requests.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Unit system requested from the service via `units_system`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnitsSystem {
    Unspecified,
    #[default]
    Metric,
    Imperial,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown units system '{0}'. Supported units systems: metric, imperial.")]
pub struct ParseUnitsSystemError(String);

impl UnitsSystem {
    /// Wire code sent as the `units_system` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitsSystem::Unspecified => "UNITS_SYSTEM_UNSPECIFIED",
            UnitsSystem::Metric => "METRIC",
            UnitsSystem::Imperial => "IMPERIAL",
        }
    }

    pub const fn all() -> &'static [UnitsSystem] {
        &[UnitsSystem::Unspecified, UnitsSystem::Metric, UnitsSystem::Imperial]
    }
}

impl fmt::Display for UnitsSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitsSystem {
    type Err = ParseUnitsSystemError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "metric" => Ok(UnitsSystem::Metric),
            "imperial" => Ok(UnitsSystem::Imperial),
            "units_system_unspecified" => Ok(UnitsSystem::Unspecified),
            _ => Err(ParseUnitsSystemError(value.to_owned())),
        }
    }
}

impl TryFrom<&str> for UnitsSystem {
    type Error = ParseUnitsSystemError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
