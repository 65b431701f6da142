//! Exogenous data: named columns sharing one row-label space.

use rustc_hash::FxHashMap;

use crate::error::SplitError;
use crate::types::Timestamp;

/// A named column of `f64` values.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    name: String,
    values: Vec<f64>,
}

impl Column {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// A row-labelled table of named `f64` columns.
///
/// Frames exist to carry exogenous regressors next to a target
/// [`Series`](crate::Series). They share the series' label space, not
/// necessarily its positions: a frame may hold more rows than the series, or
/// hold them at different offsets, as long as the labels the split selects
/// are present.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    index: Vec<Timestamp>,
    columns: Vec<Column>,
}

impl Frame {
    /// Build a frame from an index and `(name, values)` columns.
    ///
    /// Every column must match the index length, and column names must be
    /// unique.
    pub fn new(
        index: Vec<Timestamp>,
        columns: Vec<(String, Vec<f64>)>,
    ) -> Result<Self, SplitError> {
        let mut built = Vec::with_capacity(columns.len());

        for (name, values) in columns {
            if values.len() != index.len() {
                return Err(SplitError::LengthMismatch {
                    expected: index.len(),
                    actual: values.len(),
                });
            }
            if built.iter().any(|c: &Column| c.name == name) {
                return Err(SplitError::DuplicateColumn(name));
            }
            built.push(Column { name, values });
        }

        Ok(Frame {
            index,
            columns: built,
        })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Row labels, in order.
    pub fn index(&self) -> &[Timestamp] {
        &self.index
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Values of the column called `name`, if present.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// New frame holding the rows at `positions`, in the order given.
    ///
    /// # Panics
    ///
    /// Panics if any position is out of bounds.
    pub fn select(&self, positions: &[usize]) -> Frame {
        Frame {
            index: positions.iter().map(|&p| self.index[p]).collect(),
            columns: self
                .columns
                .iter()
                .map(|c| Column {
                    name: c.name.clone(),
                    values: positions.iter().map(|&p| c.values[p]).collect(),
                })
                .collect(),
        }
    }

    /// New frame holding the rows labelled by `labels`, in the order given.
    ///
    /// This is the alignment operation: rows are looked up by label, not by
    /// position. If a label occurs more than once in the frame index, the
    /// first occurrence wins. A label absent from the frame is an error.
    pub fn select_labels(&self, labels: &[Timestamp]) -> Result<Frame, SplitError> {
        let mut by_label: FxHashMap<Timestamp, usize> = FxHashMap::default();
        for (pos, &label) in self.index.iter().enumerate() {
            by_label.entry(label).or_insert(pos);
        }

        let positions = labels
            .iter()
            .map(|label| {
                by_label
                    .get(label)
                    .copied()
                    .ok_or(SplitError::MissingLabel(*label))
            })
            .collect::<Result<Vec<usize>, SplitError>>()?;

        Ok(self.select(&positions))
    }
}
