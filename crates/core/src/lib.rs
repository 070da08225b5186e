//! Blast Effects Core Library
//!
//! Effect radii of a nuclear detonation from its yield and, optionally,
//! site and weather parameters: blast overpressure radius, thermal radiation
//! radius and a simplified fallout footprint.
//!
//! ## Layout
//!
//! - [`physics`]: stateless calculator functions on raw `f64` values
//! - [`Scenario`]: one detonation's parameters, gating each request on the
//!   optional fields it needs and returning [`ScenarioError`] otherwise
//! - [`core_types`]: unit newtypes for yields, overpressures, angles and radii
//!
//! The fallout estimate is a placeholder proportional to yield and wind
//! speed, not a plume model.

// Core types and utilities
pub mod core_types;

pub mod error;
pub mod physics;
pub mod scenario;

// Re-export core types
pub use core_types::{Degrees, Kilometers, Kilotons, Psi};

pub use error::{Result, ScenarioError};
pub use physics::{FalloutEstimate, IntervalRadii};
pub use scenario::{Location, Scenario};
