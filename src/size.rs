//! Size specifications and their normalization into absolute counts.
//!
//! Users give train/test sizes as fractions of the series or as absolute
//! counts, and may omit either or both. [`normalize_sizes`] turns that into
//! two concrete counts plus the effective anchor, applying the same defaults
//! and rounding as sktime's `TemporalTrainTestSplitter._split`.

use crate::anchor::Anchor;

/// Fraction of the series held out when neither size is specified.
pub const DEFAULT_TEST_FRACTION: f64 = 0.25;

/// A train or test size: a fraction of the series or an absolute row count.
///
/// Fractions are expected in `(0.0, 1.0]`; values outside that range are not
/// rejected but clamp against the series length during normalization.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SizeSpec {
    /// Proportion of total rows.
    Fraction(f64),
    /// Absolute number of rows.
    Count(usize),
}

impl SizeSpec {
    /// Resolve against a series of length `n`, rounding fractions up.
    ///
    /// Test sizes round up so that a requested proportion is never
    /// under-served.
    pub fn count_ceil(self, n: usize) -> usize {
        match self {
            SizeSpec::Fraction(f) => (f * n as f64).ceil() as usize,
            SizeSpec::Count(c) => c,
        }
    }

    /// Resolve against a series of length `n`, rounding fractions down.
    pub fn count_floor(self, n: usize) -> usize {
        match self {
            SizeSpec::Fraction(f) => (f * n as f64).floor() as usize,
            SizeSpec::Count(c) => c,
        }
    }
}

impl From<f64> for SizeSpec {
    fn from(fraction: f64) -> Self {
        SizeSpec::Fraction(fraction)
    }
}

impl From<usize> for SizeSpec {
    fn from(count: usize) -> Self {
        SizeSpec::Count(count)
    }
}

/// Normalize raw size specifications into `(train_count, test_count, anchor)`.
///
/// Rules, applied in order:
///
/// 1. both sizes absent → test defaults to [`DEFAULT_TEST_FRACTION`];
/// 2. absent `train_size` forces anchor to `End` (test is cut first, train
///    fills the remainder); absent `test_size` forces anchor to `Start`;
/// 3. fractional test rounds up, fractional train rounds down, counts pass
///    through;
/// 4. a still-absent side becomes the complement of the other;
/// 5. counts are reconciled against capacity: the anchored side is clamped to
///    `n` first, the other side to whatever is left.
///
/// Step 5's order is what decides which set is truncated when the sizes sum
/// to more than `n`. When they sum to less than `n`, the unclaimed middle
/// region belongs to neither set.
pub(crate) fn normalize_sizes(
    test_size: Option<SizeSpec>,
    train_size: Option<SizeSpec>,
    anchor: Anchor,
    n: usize,
) -> (usize, usize, Anchor) {
    let test_size = if test_size.is_none() && train_size.is_none() {
        Some(SizeSpec::Fraction(DEFAULT_TEST_FRACTION))
    } else {
        test_size
    };

    let mut anchor = anchor;
    if train_size.is_none() {
        anchor = Anchor::End;
    }
    if test_size.is_none() {
        anchor = Anchor::Start;
    }

    // At least one side is concrete here; the other falls back to its
    // complement. The (None, None) arm is unreachable after the default above.
    let (mut train_count, mut test_count) = match (train_size, test_size) {
        (Some(train), Some(test)) => (train.count_floor(n), test.count_ceil(n)),
        (Some(train), None) => {
            let train = train.count_floor(n);
            (train, n.saturating_sub(train))
        }
        (None, Some(test)) => {
            let test = test.count_ceil(n);
            (n.saturating_sub(test), test)
        }
        (None, None) => (0, 0),
    };

    match anchor {
        Anchor::End => {
            test_count = test_count.min(n);
            train_count = train_count.min(n - test_count);
        }
        Anchor::Start => {
            train_count = train_count.min(n);
            test_count = test_count.min(n - train_count);
        }
    }

    (train_count, test_count, anchor)
}
