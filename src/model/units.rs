//! Speed units and conversion from meters per second.

use std::fmt;
use std::str::FromStr;

/// Display unit for the overlay speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeedUnit {
    /// Kilometers per hour.
    #[default]
    Kmh,
    /// Miles per hour.
    Mph,
}

impl SpeedUnit {
    /// All units in picker order.
    pub const ALL: [SpeedUnit; 2] = [SpeedUnit::Kmh, SpeedUnit::Mph];

    /// Name stored in the preference file.
    pub fn name(self) -> &'static str {
        match self {
            SpeedUnit::Kmh => "KMH",
            SpeedUnit::Mph => "MPH",
        }
    }

    /// Short label shown next to values.
    pub fn label(self) -> &'static str {
        match self {
            SpeedUnit::Kmh => "km/h",
            SpeedUnit::Mph => "mph",
        }
    }

    /// Multiplier from meters per second.
    pub fn factor(self) -> f32 {
        match self {
            SpeedUnit::Kmh => 3.6,
            SpeedUnit::Mph => 2.23694,
        }
    }

    /// Converts a speed in meters per second into this unit.
    pub fn convert(self, speed_mps: f32) -> f32 {
        speed_mps * self.factor()
    }
}

impl fmt::Display for SpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a stored unit name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownUnit(pub String);

impl fmt::Display for UnknownUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown speed unit {:?}", self.0)
    }
}

impl std::error::Error for UnknownUnit {}

impl FromStr for SpeedUnit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "KMH" => Ok(SpeedUnit::Kmh),
            "MPH" => Ok(SpeedUnit::Mph),
            other => Err(UnknownUnit(other.to_string())),
        }
    }
}

/// Converts `speed_mps` into `unit`. Total; negative input is passed through.
pub fn convert_speed(speed_mps: f32, unit: SpeedUnit) -> f32 {
    unit.convert(speed_mps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_mps_in_both_units() {
        assert!((convert_speed(10.0, SpeedUnit::Kmh) - 36.0).abs() < 1e-4);
        assert!((convert_speed(10.0, SpeedUnit::Mph) - 22.3694).abs() < 1e-4);
    }

    #[test]
    fn zero_stays_zero() {
        assert_eq!(convert_speed(0.0, SpeedUnit::Kmh), 0.0);
        assert_eq!(convert_speed(0.0, SpeedUnit::Mph), 0.0);
    }

    #[test]
    fn parses_stored_names() {
        assert_eq!("KMH".parse::<SpeedUnit>(), Ok(SpeedUnit::Kmh));
        assert_eq!("MPH".parse::<SpeedUnit>(), Ok(SpeedUnit::Mph));
        assert!("kmh".parse::<SpeedUnit>().is_err());
        assert!("".parse::<SpeedUnit>().is_err());
    }

    #[test]
    fn display_matches_stored_name() {
        for unit in SpeedUnit::ALL {
            assert_eq!(unit.to_string().parse::<SpeedUnit>(), Ok(unit));
        }
    }
}
