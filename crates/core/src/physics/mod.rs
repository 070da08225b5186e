//! Effect radius calculator
//!
//! Stateless free functions for the blast, thermal and fallout estimates.
//! Every function takes explicit numeric arguments and is deterministic;
//! out-of-domain inputs propagate as NaN or Infinity rather than errors.

pub mod blast;
pub mod fallout;
pub mod intervals;
pub mod thermal;

pub use blast::{blast_coefficient, calculate_blast_radius};
pub use fallout::{calculate_fallout, FalloutEstimate, FALLOUT_DESCRIPTION};
pub use intervals::{
    calculate_blast_radius_at_intervals, calculate_thermal_radius_at_intervals, IntervalRadii,
};
pub use thermal::calculate_thermal_radius;
