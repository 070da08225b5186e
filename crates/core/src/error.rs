use thiserror::Error;

/// Convenient result alias for scenario requests.
pub type Result<T> = std::result::Result<T, ScenarioError>;

/// Failure returned by a [`crate::Scenario`] request.
///
/// The `Display` text of the missing-precondition variants is the message
/// shown to users and must stay stable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScenarioError {
    /// Blast radius requested without an overpressure.
    #[error("Overpressure value is required for blast radius calculation.")]
    MissingOverpressure,

    /// Fallout requested without both wind speed and wind direction.
    #[error("Wind speed and direction are required for fallout calculation.")]
    MissingWind,

    /// Blast radius intervals requested with no overpressures.
    #[error("Overpressure intervals are required.")]
    EmptyOverpressureIntervals,

    /// Thermal radius intervals requested with no yields.
    #[error("Yield intervals are required.")]
    EmptyYieldIntervals,

    /// Location requested without both latitude and longitude.
    #[error("No location data available.")]
    MissingLocation,

    /// Raised by [`crate::Scenario::validate`] for an out-of-domain value.
    #[error("invalid {parameter} {value}: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl ScenarioError {
    /// Stable machine-readable discriminant for this error.
    pub fn code(&self) -> &'static str {
        match self {
            ScenarioError::MissingOverpressure => "missing_overpressure",
            ScenarioError::MissingWind => "missing_wind",
            ScenarioError::EmptyOverpressureIntervals => "empty_overpressure_intervals",
            ScenarioError::EmptyYieldIntervals => "empty_yield_intervals",
            ScenarioError::MissingLocation => "missing_location",
            ScenarioError::InvalidParameter { .. } => "invalid_parameter",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_stable() {
        let cases = [
            (
                ScenarioError::MissingOverpressure,
                "Overpressure value is required for blast radius calculation.",
            ),
            (
                ScenarioError::MissingWind,
                "Wind speed and direction are required for fallout calculation.",
            ),
            (
                ScenarioError::EmptyOverpressureIntervals,
                "Overpressure intervals are required.",
            ),
            (ScenarioError::EmptyYieldIntervals, "Yield intervals are required."),
            (ScenarioError::MissingLocation, "No location data available."),
        ];

        for (error, message) in cases {
            assert_eq!(error.to_string(), message);
            assert_ne!(error.code(), "invalid_parameter");
        }
    }

    #[test]
    fn test_invalid_parameter() {
        let error = ScenarioError::InvalidParameter {
            parameter: "lat",
            value: 91.0,
            reason: "must be within [-90, 90]",
        };
        assert_eq!(error.code(), "invalid_parameter");
        assert_eq!(error.to_string(), "invalid lat 91: must be within [-90, 90]");
    }
}
