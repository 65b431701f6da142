//! A single time-ordered series of observations.

use crate::error::SplitError;
use crate::types::Timestamp;

/// An ordered sequence of `f64` observations with one row label each.
///
/// Labels carry the alignment contract between a target series and an
/// exogenous [`Frame`](crate::Frame); the values themselves are never
/// interpreted by the splitters.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Series {
    index: Vec<Timestamp>,
    values: Vec<f64>,
}

impl Series {
    /// Build a series from matching index and value vectors.
    pub fn new(index: Vec<Timestamp>, values: Vec<f64>) -> Result<Self, SplitError> {
        if index.len() != values.len() {
            return Err(SplitError::LengthMismatch {
                expected: index.len(),
                actual: values.len(),
            });
        }
        Ok(Series { index, values })
    }

    /// Build a series labelled `0..n`.
    pub fn from_values(values: Vec<f64>) -> Self {
        let index = (0..values.len() as Timestamp).collect();
        Series { index, values }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Row labels, in order.
    pub fn index(&self) -> &[Timestamp] {
        &self.index
    }

    /// Observation values, in order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The labelled observation at `pos`, if in bounds.
    pub fn get(&self, pos: usize) -> Option<(Timestamp, f64)> {
        Some((*self.index.get(pos)?, *self.values.get(pos)?))
    }

    /// New series holding the rows at `positions`, in the order given.
    ///
    /// # Panics
    ///
    /// Panics if any position is out of bounds. Splitters only produce
    /// positions within `[0, len)`.
    pub fn select(&self, positions: &[usize]) -> Series {
        Series {
            index: positions.iter().map(|&p| self.index[p]).collect(),
            values: positions.iter().map(|&p| self.values[p]).collect(),
        }
    }

    /// The labels at `positions`, in the order given.
    ///
    /// # Panics
    ///
    /// Panics if any position is out of bounds.
    pub fn labels_at(&self, positions: &[usize]) -> Vec<Timestamp> {
        positions.iter().map(|&p| self.index[p]).collect()
    }
}
