//! Core data types shared across the crate

pub mod units;

pub use units::{Degrees, Kilometers, Kilotons, Psi};
