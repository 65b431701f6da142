//! Single temporal train/test splits over ordered observations.
//!
//! Replaces sktime's `TemporalTrainTestSplitter` for Rust backtesting
//! pipelines: one temporally ordered train/test cut, sized by fractions or
//! absolute counts, anchored to either end of the series.
//!
//! # References
//!
//! - sktime source: `sktime/split/temporal_train_test_split.py`
//!   <https://github.com/sktime/sktime/blob/main/sktime/split/temporal_train_test_split.py>
//! - itself adapted from <https://github.com/alkaline-ml/pmdarima/>

use crate::anchor::Anchor;
use crate::partition::partition;
use crate::size::{SizeSpec, normalize_sizes};

/// One `(train, test)` pair of row positions.
///
/// Positions are ascending, disjoint, and drawn from `[0, n)`. For
/// size-based splits each side is contiguous; their union may be a strict
/// subset of `[0, n)` when both sizes are given and sum to less than `n`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplitIndices {
    /// Training row positions.
    pub train: Vec<usize>,
    /// Test row positions.
    pub test: Vec<usize>,
}

/// Produces `(train, test)` index pairs over a series of length `n`.
///
/// The estimator-style base class of the original library becomes this plain
/// trait; panel application is a separate wrapper
/// ([`Panel::split_with`](crate::Panel::split_with)), not an inherited
/// capability.
pub trait Splitter {
    /// Produce the `(train, test)` index pairs for a series of `n` rows.
    fn split(&self, n: usize) -> Vec<SplitIndices>;

    /// Number of pairs [`split`](Splitter::split) produces.
    fn n_splits(&self) -> usize {
        1
    }
}

/// Temporal train-test splitter, based on sample sizes of train or test set.
///
/// Cuts one test and one train set from the start or end of the data.
/// Sizes may be fractions of the series or absolute row counts, and either
/// may be omitted:
///
/// - both omitted: test defaults to a quarter of the series, cut from the
///   tail;
/// - `train_size` omitted: the test set is cut first and train fills the
///   remainder (anchor forced to `End`);
/// - `test_size` omitted: the train set is cut first and test fills the
///   remainder (anchor forced to `Start`).
///
/// When both sizes are given and sum to more than the series length, the
/// anchored side wins and the other is truncated. When they sum to less, the
/// unclaimed middle region belongs to neither set. Neither case is an error.
///
/// The splitter is a stateless configuration holder and may be reused across
/// series of different lengths.
///
/// # Example
///
/// ```
/// use nanosplit::{Splitter, TemporalTrainTestSplitter};
///
/// let splitter = TemporalTrainTestSplitter::with_test_size(0.3);
/// let splits = splitter.split(10);
///
/// assert_eq!(splits.len(), 1);
/// assert_eq!(splits[0].train, vec![0, 1, 2, 3, 4, 5, 6]);
/// assert_eq!(splits[0].test, vec![7, 8, 9]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemporalTrainTestSplitter {
    train_size: Option<SizeSpec>,
    test_size: Option<SizeSpec>,
    anchor: Anchor,
}

impl TemporalTrainTestSplitter {
    /// Splitter with neither size specified: holds out the default quarter
    /// of the series as test.
    pub fn new() -> Self {
        Self::default()
    }

    /// Splitter with only a test size; train fills the remainder.
    pub fn with_test_size(test_size: impl Into<SizeSpec>) -> Self {
        Self {
            train_size: None,
            test_size: Some(test_size.into()),
            anchor: Anchor::default(),
        }
    }

    /// Splitter with only a train size; test fills the remainder.
    pub fn with_train_size(train_size: impl Into<SizeSpec>) -> Self {
        Self {
            train_size: Some(train_size.into()),
            test_size: None,
            anchor: Anchor::default(),
        }
    }

    /// Splitter with both sizes specified.
    pub fn with_sizes(train_size: impl Into<SizeSpec>, test_size: impl Into<SizeSpec>) -> Self {
        Self {
            train_size: Some(train_size.into()),
            test_size: Some(test_size.into()),
            anchor: Anchor::default(),
        }
    }

    /// Splitter from raw optional sizes, as accepted by
    /// [`temporal_train_test_split`](crate::temporal_train_test_split).
    pub fn from_sizes(train_size: Option<SizeSpec>, test_size: Option<SizeSpec>) -> Self {
        Self {
            train_size,
            test_size,
            anchor: Anchor::default(),
        }
    }

    /// Set the anchor side. Note that an omitted size still forces the
    /// anchor during the split (see the type-level docs).
    pub fn anchored(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }
}

impl Splitter for TemporalTrainTestSplitter {
    fn split(&self, n: usize) -> Vec<SplitIndices> {
        let (train_count, test_count, anchor) =
            normalize_sizes(self.test_size, self.train_size, self.anchor, n);
        let (train, test) = partition(n, train_count, test_count, anchor);

        vec![SplitIndices {
            train: train.collect(),
            test: test.collect(),
        }]
    }
}
