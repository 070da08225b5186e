//! Blast Overpressure Radius (cube-root scaling law)
//!
//! Distance at which the blast wave's peak overpressure falls to a given
//! value, scaled from a 1 kt reference by the cube root of yield.
//!
//! # Scientific References
//!
//! - Glasstone, S., Dolan, P.J. (1977). "The Effects of Nuclear Weapons",
//!   3rd ed. Chapter III, blast scaling laws.
//! - Hopkinson (1915), Cranz (1926): cube-root scaling of blast distance.
//!
//! # Model Overview
//!
//! R = k × W^(1/3)
//!
//! The coefficient `k` comes from two reference points read off the
//! effects tables (5 psi and 1 psi). Any other overpressure is scaled from
//! the 5 psi anchor with the cube-root relation. The reference points are
//! matched by exact equality so the tabulated constants are reproduced
//! exactly; the general branch does not pass through the 1 psi point.

/// Overpressure of the primary reference point (psi)
pub const REFERENCE_OVERPRESSURE_PSI: f64 = 5.0;

/// Radius coefficient at 5 psi (km per kt^(1/3))
pub const REFERENCE_COEFFICIENT: f64 = 0.17;

/// Overpressure of the light-damage reference point (psi)
pub const LIGHT_DAMAGE_OVERPRESSURE_PSI: f64 = 1.0;

/// Radius coefficient at 1 psi (km per kt^(1/3))
pub const LIGHT_DAMAGE_COEFFICIENT: f64 = 0.33;

const ONE_THIRD: f64 = 1.0 / 3.0;

/// Select the radius coefficient for an overpressure
///
/// # Arguments
/// * `overpressure` - Peak overpressure (psi), expected > 0
///
/// # Returns
/// Coefficient `k` in km per kt^(1/3). Infinite for 0 psi, NaN for
/// negative overpressure.
pub fn blast_coefficient(overpressure: f64) -> f64 {
    if overpressure == REFERENCE_OVERPRESSURE_PSI {
        REFERENCE_COEFFICIENT
    } else if overpressure == LIGHT_DAMAGE_OVERPRESSURE_PSI {
        LIGHT_DAMAGE_COEFFICIENT
    } else {
        REFERENCE_COEFFICIENT * (REFERENCE_OVERPRESSURE_PSI / overpressure).powf(ONE_THIRD)
    }
}

/// Calculate the radius at which the blast wave reaches an overpressure
///
/// R = k(p) × W^(1/3)
///
/// # Arguments
/// * `yield_kt` - Yield (kilotons), expected > 0
/// * `overpressure` - Peak overpressure (psi), expected > 0
///
/// # Returns
/// Radius in kilometers. Inputs are not checked: zero or negative values
/// come back as NaN or Infinity.
///
/// # References
/// Glasstone & Dolan (1977), §3.60 scaling law
pub fn calculate_blast_radius(yield_kt: f64, overpressure: f64) -> f64 {
    blast_coefficient(overpressure) * yield_kt.powf(ONE_THIRD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_point_5_psi() {
        // 1 Mt at 5 psi: 0.17 × 1000^(1/3) = 1.7 km
        let radius = calculate_blast_radius(1000.0, 5.0);
        assert_relative_eq!(radius, 1.7, max_relative = 1e-12);
    }

    #[test]
    fn test_reference_point_1_psi() {
        let radius = calculate_blast_radius(1000.0, 1.0);
        assert_relative_eq!(radius, 3.3, max_relative = 1e-12);
    }

    #[test]
    fn test_reference_points_use_exact_constants() {
        assert_eq!(blast_coefficient(5.0), 0.17);
        assert_eq!(blast_coefficient(1.0), 0.33);
    }

    #[test]
    fn test_general_branch_cube_root_scaling() {
        // 10 psi: 0.17 × 0.5^(1/3) ≈ 0.1349
        let k = blast_coefficient(10.0);
        assert_relative_eq!(k, 0.17 * 0.5_f64.powf(1.0 / 3.0), max_relative = 1e-12);
        assert!(k < REFERENCE_COEFFICIENT);

        let radius = calculate_blast_radius(1000.0, 2.0);
        assert_relative_eq!(
            radius,
            0.17 * 2.5_f64.powf(1.0 / 3.0) * 10.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_near_reference_value_takes_general_branch() {
        // Not exactly 1 psi, so no snap to 0.33
        let near = blast_coefficient(1.0 + 1e-9);
        let smooth = 0.17 * 5.0_f64.powf(1.0 / 3.0);
        assert_relative_eq!(near, smooth, max_relative = 1e-6);
        assert!((near - LIGHT_DAMAGE_COEFFICIENT).abs() > 0.03);
    }

    #[test]
    fn test_radius_grows_with_yield() {
        let small = calculate_blast_radius(15.0, 5.0);
        let large = calculate_blast_radius(15000.0, 5.0);
        // 1000× yield → 10× radius
        assert_relative_eq!(large / small, 10.0, max_relative = 1e-9);
    }

    #[test]
    fn test_out_of_domain_inputs_propagate() {
        assert!(calculate_blast_radius(1000.0, 0.0).is_infinite());
        assert!(calculate_blast_radius(1000.0, -2.0).is_nan());
        assert!(calculate_blast_radius(-1000.0, 5.0).is_nan());
    }
}
