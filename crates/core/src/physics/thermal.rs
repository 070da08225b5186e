//! Thermal Radiation Radius
//!
//! Distance to a fixed thermal exposure threshold, modeled as a power law
//! in yield:
//!
//! R = 0.13 × W^0.4
//!
//! The 0.4 exponent sits between the cube-root scaling of blast (fireball
//! size) and the square-root scaling of an unattenuated thermal pulse.

/// Thermal radius coefficient (km per kt^0.4)
pub const THERMAL_COEFFICIENT: f64 = 0.13;

/// Yield exponent of the thermal radius power law
pub const THERMAL_YIELD_EXPONENT: f64 = 0.4;

/// Calculate the thermal radiation radius for a yield
///
/// # Arguments
/// * `yield_kt` - Yield (kilotons), expected > 0
///
/// # Returns
/// Radius in kilometers. Negative yields return NaN.
pub fn calculate_thermal_radius(yield_kt: f64) -> f64 {
    THERMAL_COEFFICIENT * yield_kt.powf(THERMAL_YIELD_EXPONENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_one_megaton() {
        // 0.13 × 1000^0.4 = 0.13 × 15.849 ≈ 2.0604
        let radius = calculate_thermal_radius(1000.0);
        assert_relative_eq!(radius, 0.13 * 1000.0_f64.powf(0.4), max_relative = 1e-12);
        assert!((radius - 2.06).abs() < 0.01, "Radius was {}", radius);
    }

    #[test]
    fn test_one_kiloton_is_coefficient() {
        assert_relative_eq!(calculate_thermal_radius(1.0), THERMAL_COEFFICIENT);
    }

    #[test]
    fn test_zero_and_negative_yield() {
        assert_eq!(calculate_thermal_radius(0.0), 0.0);
        assert!(calculate_thermal_radius(-10.0).is_nan());
    }
}
