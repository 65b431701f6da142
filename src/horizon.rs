//! Forecasting-horizon based splitting.
//!
//! A forecasting horizon names the future steps to hold out, relative to the
//! training cutoff, instead of sizing the test set. Offsets are 1-based: an
//! offset of 1 is the first step after the last training row.
//!
//! # References
//!
//! - sktime `_split_by_fh`: `sktime/split/base/_config.py`
//!   <https://github.com/sktime/sktime/blob/main/sktime/split/base/_config.py>

use crate::error::SplitError;
use crate::splitter::{SplitIndices, Splitter};

/// Relative forecasting horizon: which steps after the training cutoff form
/// the test set.
///
/// Offsets are stored sorted and deduplicated. Construction rejects an empty
/// horizon and zero offsets.
///
/// # Example
///
/// ```
/// use nanosplit::ForecastingHorizon;
///
/// let fh = ForecastingHorizon::new([1, 2, 3]).unwrap();
/// assert_eq!(fh.max_offset(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForecastingHorizon {
    offsets: Vec<usize>,
}

impl ForecastingHorizon {
    /// Build a horizon from 1-based step offsets.
    pub fn new(offsets: impl IntoIterator<Item = usize>) -> Result<Self, SplitError> {
        let mut offsets: Vec<usize> = offsets.into_iter().collect();
        offsets.sort_unstable();
        offsets.dedup();

        if offsets.first().is_none_or(|&first| first == 0) {
            return Err(SplitError::InvalidHorizon);
        }

        Ok(ForecastingHorizon { offsets })
    }

    /// The sorted step offsets.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// The furthest step held out.
    pub fn max_offset(&self) -> usize {
        self.offsets.last().copied().unwrap_or(0)
    }
}

/// Splits by holding out the rows a [`ForecastingHorizon`] points at.
///
/// The training set is everything before the cutoff, where the cutoff is
/// placed so that the furthest horizon step lands on the last row. Horizon
/// steps beyond the end of the series are dropped rather than erroring, so a
/// too-short series degrades to an empty train set and a partial test set.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HorizonSplitter {
    fh: ForecastingHorizon,
}

impl HorizonSplitter {
    pub fn new(fh: ForecastingHorizon) -> Self {
        HorizonSplitter { fh }
    }
}

impl Splitter for HorizonSplitter {
    fn split(&self, n: usize) -> Vec<SplitIndices> {
        let cutoff = n.saturating_sub(self.fh.max_offset());

        let train: Vec<usize> = (0..cutoff).collect();
        let test: Vec<usize> = self
            .fh
            .offsets()
            .iter()
            .map(|&step| cutoff + step - 1)
            .filter(|&pos| pos < n)
            .collect();

        vec![SplitIndices { train, test }]
    }
}
