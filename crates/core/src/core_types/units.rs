//! Semantic unit types for detonation parameters and effect radii
//!
//! Newtype wrappers keep yields, overpressures, angles and distances from
//! being mixed up at the scenario level. The calculator functions in
//! [`crate::physics`] work on raw `f64` values; these types live on the
//! [`crate::Scenario`] fields and on the facade's results.
//!
//! # Design
//! - All types wrap `f64`
//! - Equality and ordering both use `f64::total_cmp`, so NaN equals itself
//!   and `-0.0` sorts below `0.0`
//! - Constructors do not validate. Out-of-domain values are representable so
//!   that NaN/Infinity propagation stays observable; use
//!   [`crate::Scenario::validate`] for the strict contract.
//! - Serde support for serialization
//!
//! # Usage
//! ```
//! use blast_effects_core::core_types::units::{Kilotons, Psi};
//!
//! let yield_kt = Kilotons::new(1000.0);
//! assert_eq!(*yield_kt, 1000.0);
//!
//! let light = Psi::new(1.0);
//! let severe = Psi::new(5.0);
//! assert_eq!(light.max(severe), severe);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

/// Compare f64 values with total ordering using Rust's built-in `total_cmp`
#[inline]
fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

// ============================================================================
// ENERGY
// ============================================================================

/// Explosive yield in kilotons of TNT equivalent
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Kilotons(f64);

impl PartialEq for Kilotons {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Kilotons {}

impl PartialOrd for Kilotons {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Kilotons {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Kilotons {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Kilotons {
    /// Create a new yield value
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Kilotons(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Kilotons {
    fn from(v: f64) -> Self {
        Kilotons(v)
    }
}

impl From<Kilotons> for f64 {
    fn from(k: Kilotons) -> f64 {
        k.0
    }
}

impl fmt::Display for Kilotons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} kt", self.0)
    }
}

// ============================================================================
// PRESSURE
// ============================================================================

/// Peak overpressure in pounds per square inch above ambient
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Psi(f64);

impl PartialEq for Psi {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Psi {}

impl PartialOrd for Psi {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Psi {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Psi {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Psi {
    /// Create a new overpressure value
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Psi(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Psi {
    fn from(v: f64) -> Self {
        Psi(v)
    }
}

impl From<Psi> for f64 {
    fn from(p: Psi) -> f64 {
        p.0
    }
}

impl fmt::Display for Psi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} psi", self.0)
    }
}

// ============================================================================
// DISTANCE
// ============================================================================

/// Effect radius in kilometers
///
/// Non-finite values are representable: a radius computed from an
/// out-of-domain input is passed through as NaN or Infinity.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Kilometers(f64);

impl PartialEq for Kilometers {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Kilometers {}

impl PartialOrd for Kilometers {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Kilometers {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Kilometers {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Kilometers {
    /// Create a new distance
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Kilometers(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Kilometers {
    fn from(v: f64) -> Self {
        Kilometers(v)
    }
}

impl From<Kilometers> for f64 {
    fn from(k: Kilometers) -> f64 {
        k.0
    }
}

impl fmt::Display for Kilometers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} km", self.0)
    }
}

// ============================================================================
// ANGLE
// ============================================================================

/// Angle in degrees (coordinates and wind bearing)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Degrees(f64);

impl PartialEq for Degrees {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Degrees {}

impl PartialOrd for Degrees {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Degrees {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Degrees {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Degrees {
    /// Create a new angle in degrees
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Degrees(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Degrees {
    fn from(v: f64) -> Self {
        Degrees(v)
    }
}

impl From<Degrees> for f64 {
    fn from(d: Degrees) -> f64 {
        d.0
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}
