//! Batch evaluation of the radius formulas over a list of inputs
//!
//! Results are keyed by the input value in the order the caller supplied
//! them. A repeated input keeps its first position and takes the value of
//! the last evaluation.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::blast::calculate_blast_radius;
use super::thermal::calculate_thermal_radius;

/// Insertion-ordered mapping from input value to computed radius (km)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<(f64, f64)>", into = "Vec<(f64, f64)>")]
pub struct IntervalRadii {
    entries: Vec<(f64, f64)>,
    index: FxHashMap<u64, usize>,
}

/// Hash key for an input value; `0.0` and `-0.0` share a key
#[inline]
fn key_bits(key: f64) -> u64 {
    if key == 0.0 {
        0.0_f64.to_bits()
    } else {
        key.to_bits()
    }
}

impl IntervalRadii {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mapping with room for `capacity` distinct inputs
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Insert a radius for an input value
    ///
    /// Returns the previous radius if the value was already present. The
    /// entry keeps its original position.
    pub fn insert(&mut self, key: f64, radius: f64) -> Option<f64> {
        let bits = key_bits(key);
        if let Some(&slot) = self.index.get(&bits) {
            let previous = self.entries[slot].1;
            self.entries[slot].1 = radius;
            Some(previous)
        } else {
            self.index.insert(bits, self.entries.len());
            self.entries.push((key, radius));
            None
        }
    }

    /// Radius computed for an input value
    pub fn get(&self, key: f64) -> Option<f64> {
        self.index
            .get(&key_bits(key))
            .map(|&slot| self.entries[slot].1)
    }

    /// Number of distinct inputs
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Input values in insertion order
    pub fn keys(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|&(key, _)| key)
    }

    /// `(input, radius)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Entries as a slice of `(input, radius)` pairs
    pub fn as_slice(&self) -> &[(f64, f64)] {
        &self.entries
    }
}

impl PartialEq for IntervalRadii {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl FromIterator<(f64, f64)> for IntervalRadii {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut radii = Self::with_capacity(iter.size_hint().0);
        for (key, radius) in iter {
            radii.insert(key, radius);
        }
        radii
    }
}

impl From<Vec<(f64, f64)>> for IntervalRadii {
    fn from(entries: Vec<(f64, f64)>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<IntervalRadii> for Vec<(f64, f64)> {
    fn from(radii: IntervalRadii) -> Self {
        radii.entries
    }
}

impl<'a> IntoIterator for &'a IntervalRadii {
    type Item = (f64, f64);
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, (f64, f64)>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter().copied()
    }
}

/// Blast radius for each overpressure, keyed by overpressure (psi)
///
/// An empty input gives an empty mapping; the emptiness check belongs to
/// [`crate::Scenario::request_blast_radius_at_intervals`].
pub fn calculate_blast_radius_at_intervals(yield_kt: f64, overpressures: &[f64]) -> IntervalRadii {
    overpressures
        .iter()
        .map(|&overpressure| (overpressure, calculate_blast_radius(yield_kt, overpressure)))
        .collect()
}

/// Thermal radius for each yield, keyed by yield (kt)
pub fn calculate_thermal_radius_at_intervals(yields: &[f64]) -> IntervalRadii {
    yields
        .iter()
        .map(|&yield_kt| (yield_kt, calculate_thermal_radius(yield_kt)))
        .collect()
}
