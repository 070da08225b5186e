//! Simplified fallout footprint
//!
//! Placeholder estimate proportional to yield and wind speed. This is not a
//! plume model: there is no deposition, particle size or decay term.

use serde::{Deserialize, Serialize};

/// Area scale factor of the placeholder footprint
pub const FALLOUT_AREA_FACTOR: f64 = 0.1;

/// Fixed description attached to every fallout estimate
pub const FALLOUT_DESCRIPTION: &str = "Fallout area estimated based on wind conditions.";

/// Result of a fallout estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FalloutEstimate {
    /// Footprint area, yield × wind speed × 0.1
    pub fallout_area: f64,
    /// Wind direction as supplied (degrees), not normalized
    pub wind_direction: f64,
    /// Always [`FALLOUT_DESCRIPTION`]
    pub description: String,
}

/// Estimate the fallout footprint from yield and wind
///
/// A = W × u × 0.1
///
/// # Arguments
/// * `yield_kt` - Yield (kilotons)
/// * `wind_speed` - Wind speed, non-negative
/// * `wind_direction` - Wind bearing (degrees), echoed unchanged
pub fn calculate_fallout(yield_kt: f64, wind_speed: f64, wind_direction: f64) -> FalloutEstimate {
    FalloutEstimate {
        fallout_area: yield_kt * wind_speed * FALLOUT_AREA_FACTOR,
        wind_direction,
        description: FALLOUT_DESCRIPTION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sample_scenario() {
        let fallout = calculate_fallout(1000.0, 15.0, 270.0);
        assert_relative_eq!(fallout.fallout_area, 1500.0);
        assert_eq!(fallout.wind_direction, 270.0);
        assert_eq!(fallout.description, FALLOUT_DESCRIPTION);
    }

    #[test]
    fn test_direction_is_not_normalized() {
        let fallout = calculate_fallout(10.0, 2.0, 725.0);
        assert_eq!(fallout.wind_direction, 725.0);
    }

    #[test]
    fn test_calm_wind_gives_zero_area() {
        assert_eq!(calculate_fallout(1000.0, 0.0, 90.0).fallout_area, 0.0);
    }
}
