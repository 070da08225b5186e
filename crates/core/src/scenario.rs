//! Detonation scenario facade
//!
//! A [`Scenario`] holds one detonation's parameters and gates each
//! calculator request on the optional fields it needs. Requests return a
//! [`ScenarioError`] when a required field is missing; the numeric result
//! is otherwise passed through from [`crate::physics`] unchanged.
//!
//! # Usage
//! ```
//! use blast_effects_core::{Scenario, ScenarioError};
//!
//! let scenario = Scenario::new(1000.0)
//!     .with_overpressure(5.0)
//!     .with_wind(15.0, 270.0);
//!
//! let blast = scenario.request_blast_radius()?;
//! assert!((*blast - 1.7).abs() < 1e-9);
//!
//! let fallout = scenario.request_fallout()?;
//! assert_eq!(fallout.fallout_area, 1500.0);
//!
//! assert_eq!(scenario.get_location(), Err(ScenarioError::MissingLocation));
//! # Ok::<(), ScenarioError>(())
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core_types::{Degrees, Kilometers, Kilotons, Psi};
use crate::error::{Result, ScenarioError};
use crate::physics::{
    calculate_blast_radius, calculate_blast_radius_at_intervals, calculate_fallout,
    calculate_thermal_radius, calculate_thermal_radius_at_intervals, FalloutEstimate,
    IntervalRadii,
};

/// Latitude/longitude of the detonation point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: Degrees,
    pub lon: Degrees,
}

/// Parameters of a single detonation
///
/// Built once with [`Scenario::new`] and the `with_*` helpers; there are no
/// mutators afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    yield_kt: Kilotons,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    overpressure: Option<Psi>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lat: Option<Degrees>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lon: Option<Degrees>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    wind_speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    wind_direction: Option<Degrees>,
}

impl Scenario {
    /// Create a scenario with only a yield (kilotons)
    pub fn new(yield_kt: impl Into<Kilotons>) -> Self {
        Self {
            yield_kt: yield_kt.into(),
            overpressure: None,
            lat: None,
            lon: None,
            wind_speed: None,
            wind_direction: None,
        }
    }

    /// Set the overpressure (psi) used by [`Scenario::request_blast_radius`]
    pub fn with_overpressure(mut self, overpressure: impl Into<Psi>) -> Self {
        self.overpressure = Some(overpressure.into());
        self
    }

    /// Set both coordinates (degrees)
    pub fn with_location(self, lat: impl Into<Degrees>, lon: impl Into<Degrees>) -> Self {
        self.with_latitude(lat).with_longitude(lon)
    }

    pub fn with_latitude(mut self, lat: impl Into<Degrees>) -> Self {
        self.lat = Some(lat.into());
        self
    }

    pub fn with_longitude(mut self, lon: impl Into<Degrees>) -> Self {
        self.lon = Some(lon.into());
        self
    }

    /// Set wind speed and bearing (degrees) used by [`Scenario::request_fallout`]
    pub fn with_wind(self, speed: f64, direction: impl Into<Degrees>) -> Self {
        self.with_wind_speed(speed).with_wind_direction(direction)
    }

    pub fn with_wind_speed(mut self, speed: f64) -> Self {
        self.wind_speed = Some(speed);
        self
    }

    pub fn with_wind_direction(mut self, direction: impl Into<Degrees>) -> Self {
        self.wind_direction = Some(direction.into());
        self
    }

    pub fn yield_kt(&self) -> Kilotons {
        self.yield_kt
    }

    pub fn overpressure(&self) -> Option<Psi> {
        self.overpressure
    }

    pub fn lat(&self) -> Option<Degrees> {
        self.lat
    }

    pub fn lon(&self) -> Option<Degrees> {
        self.lon
    }

    pub fn wind_speed(&self) -> Option<f64> {
        self.wind_speed
    }

    pub fn wind_direction(&self) -> Option<Degrees> {
        self.wind_direction
    }

    /// Blast radius at this scenario's overpressure
    ///
    /// # Errors
    /// [`ScenarioError::MissingOverpressure`] if no overpressure was set.
    pub fn request_blast_radius(&self) -> Result<Kilometers> {
        let overpressure = self.overpressure.ok_or(ScenarioError::MissingOverpressure)?;
        let radius = calculate_blast_radius(*self.yield_kt, *overpressure);
        debug!(yield_kt = *self.yield_kt, overpressure = *overpressure, radius, "blast radius");
        warn_if_not_finite("blast radius", radius);
        Ok(Kilometers::new(radius))
    }

    /// Thermal radiation radius for this scenario's yield
    pub fn request_thermal_radius(&self) -> Kilometers {
        let radius = calculate_thermal_radius(*self.yield_kt);
        debug!(yield_kt = *self.yield_kt, radius, "thermal radius");
        warn_if_not_finite("thermal radius", radius);
        Kilometers::new(radius)
    }

    /// Placeholder fallout footprint for this scenario's wind
    ///
    /// # Errors
    /// [`ScenarioError::MissingWind`] unless both wind speed and direction
    /// were set.
    pub fn request_fallout(&self) -> Result<FalloutEstimate> {
        let (Some(speed), Some(direction)) = (self.wind_speed, self.wind_direction) else {
            return Err(ScenarioError::MissingWind);
        };
        let fallout = calculate_fallout(*self.yield_kt, speed, *direction);
        debug!(
            yield_kt = *self.yield_kt,
            wind_speed = speed,
            wind_direction = *direction,
            area = fallout.fallout_area,
            "fallout"
        );
        warn_if_not_finite("fallout area", fallout.fallout_area);
        Ok(fallout)
    }

    /// Blast radius for each overpressure (psi) at this scenario's yield
    ///
    /// # Errors
    /// [`ScenarioError::EmptyOverpressureIntervals`] if `overpressures` is empty.
    pub fn request_blast_radius_at_intervals(&self, overpressures: &[f64]) -> Result<IntervalRadii> {
        if overpressures.is_empty() {
            return Err(ScenarioError::EmptyOverpressureIntervals);
        }
        let radii = calculate_blast_radius_at_intervals(*self.yield_kt, overpressures);
        debug!(yield_kt = *self.yield_kt, intervals = radii.len(), "blast radius intervals");
        for (overpressure, radius) in &radii {
            if !radius.is_finite() {
                warn!(overpressure, radius, "blast radius interval is not finite");
            }
        }
        Ok(radii)
    }

    /// Thermal radius for each yield (kt); this scenario's own yield is not used
    ///
    /// # Errors
    /// [`ScenarioError::EmptyYieldIntervals`] if `yields` is empty.
    pub fn request_thermal_radius_at_intervals(&self, yields: &[f64]) -> Result<IntervalRadii> {
        if yields.is_empty() {
            return Err(ScenarioError::EmptyYieldIntervals);
        }
        let radii = calculate_thermal_radius_at_intervals(yields);
        debug!(intervals = radii.len(), "thermal radius intervals");
        for (yield_kt, radius) in &radii {
            if !radius.is_finite() {
                warn!(yield_kt, radius, "thermal radius interval is not finite");
            }
        }
        Ok(radii)
    }

    /// Detonation coordinates
    ///
    /// # Errors
    /// [`ScenarioError::MissingLocation`] unless both latitude and longitude
    /// were set.
    pub fn get_location(&self) -> Result<Location> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Ok(Location { lat, lon }),
            _ => Err(ScenarioError::MissingLocation),
        }
    }

    /// Check every present field against its physical domain
    ///
    /// Requests never call this; NaN/Infinity propagation is the default
    /// contract and this is the opt-in stricter one.
    ///
    /// # Errors
    /// [`ScenarioError::InvalidParameter`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let yield_kt = *self.yield_kt;
        require(
            "yield_kt",
            yield_kt,
            yield_kt.is_finite() && yield_kt > 0.0,
            "must be a positive finite number",
        )?;
        if let Some(overpressure) = self.overpressure.map(Psi::value) {
            require(
                "overpressure",
                overpressure,
                overpressure.is_finite() && overpressure > 0.0,
                "must be a positive finite number",
            )?;
        }
        if let Some(lat) = self.lat.map(Degrees::value) {
            require(
                "lat",
                lat,
                (-90.0..=90.0).contains(&lat),
                "must be within [-90, 90]",
            )?;
        }
        if let Some(lon) = self.lon.map(Degrees::value) {
            require(
                "lon",
                lon,
                (-180.0..=180.0).contains(&lon),
                "must be within [-180, 180]",
            )?;
        }
        if let Some(speed) = self.wind_speed {
            require(
                "wind_speed",
                speed,
                speed.is_finite() && speed >= 0.0,
                "must be a non-negative finite number",
            )?;
        }
        if let Some(direction) = self.wind_direction.map(Degrees::value) {
            require(
                "wind_direction",
                direction,
                direction.is_finite(),
                "must be a finite number",
            )?;
        }
        Ok(())
    }
}

fn require(parameter: &'static str, value: f64, valid: bool, reason: &'static str) -> Result<()> {
    if valid {
        Ok(())
    } else {
        Err(ScenarioError::InvalidParameter {
            parameter,
            value,
            reason,
        })
    }
}

fn warn_if_not_finite(quantity: &'static str, value: f64) {
    if !value.is_finite() {
        warn!(quantity, value, "result is not finite; check input domain");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_no_optional_fields() {
        let scenario = Scenario::new(20.0);
        assert_eq!(scenario.yield_kt(), Kilotons::new(20.0));
        assert_eq!(scenario.overpressure(), None);
        assert_eq!(scenario.lat(), None);
        assert_eq!(scenario.lon(), None);
        assert_eq!(scenario.wind_speed(), None);
        assert_eq!(scenario.wind_direction(), None);
    }

    #[test]
    fn test_wind_requires_both_fields() {
        let speed_only = Scenario::new(100.0).with_wind_speed(10.0);
        assert_eq!(speed_only.request_fallout(), Err(ScenarioError::MissingWind));

        let direction_only = Scenario::new(100.0).with_wind_direction(90.0);
        assert_eq!(direction_only.request_fallout(), Err(ScenarioError::MissingWind));
    }

    #[test]
    fn test_zero_overpressure_is_not_rejected() {
        let scenario = Scenario::new(100.0).with_overpressure(0.0);
        let radius = scenario.request_blast_radius().map(Kilometers::value);
        assert!(matches!(radius, Ok(r) if r.is_infinite()));
    }

    #[test]
    fn test_validate_boundaries() {
        let edge = Scenario::new(1.0)
            .with_location(-90.0, 180.0)
            .with_wind(0.0, 0.0);
        assert_eq!(edge.validate(), Ok(()));

        let bad_yield = Scenario::new(0.0);
        assert!(matches!(
            bad_yield.validate(),
            Err(ScenarioError::InvalidParameter { parameter: "yield_kt", .. })
        ));
    }
}
