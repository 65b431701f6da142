//! One-call train/test splitting of a series and optional exogenous frame.
//!
//! # References
//!
//! - sktime source: `sktime/split/temporal_train_test_split.py`
//!   <https://github.com/sktime/sktime/blob/main/sktime/split/temporal_train_test_split.py>

use crate::error::SplitError;
use crate::frame::Frame;
use crate::horizon::{ForecastingHorizon, HorizonSplitter};
use crate::series::Series;
use crate::size::SizeSpec;
use crate::splitter::{Splitter, TemporalTrainTestSplitter};

/// Result of [`temporal_train_test_split`].
///
/// The exogenous halves are populated only when a frame was supplied.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainTestSplit {
    /// Training slice of the target series.
    pub y_train: Series,
    /// Test slice of the target series.
    pub y_test: Series,
    /// Training slice of the exogenous frame, if one was given.
    pub x_train: Option<Frame>,
    /// Test slice of the exogenous frame, if one was given.
    pub x_test: Option<Frame>,
}

impl TrainTestSplit {
    /// Returns true if exogenous slices are present.
    pub fn has_exogenous(&self) -> bool {
        self.x_train.is_some()
    }
}

/// Split a time series into a single temporally ordered train/test pair.
///
/// Sizes may be fractions of the series or absolute row counts; either may
/// be omitted, in which case it falls back to the complement of the other
/// (and to holding out a quarter of the series when both are omitted).
/// Alternatively a [`ForecastingHorizon`] names the exact future steps to
/// hold out — in that mode neither size may be supplied.
///
/// If `x` is given, the same *row labels* chosen for `y` are selected from
/// it. Alignment is by label, not position, so `x` may hold its rows at
/// different offsets than `y` as long as the labels exist.
///
/// This is a pure function of its inputs: no side effects, identical results
/// on identical calls.
///
/// # Errors
///
/// - [`SplitError::HorizonWithSizes`] if `fh` is combined with an explicit
///   size — rejected before any split work;
/// - [`SplitError::MissingLabel`] if a label chosen on `y` is absent from `x`.
///
/// Size conflicts never error; see
/// [`TemporalTrainTestSplitter`](crate::TemporalTrainTestSplitter) for the
/// clamping rules.
///
/// # Example
///
/// ```
/// use nanosplit::{Series, SizeSpec, temporal_train_test_split};
///
/// let y = Series::from_values((0..10).map(f64::from).collect());
/// let split =
///     temporal_train_test_split(&y, None, Some(SizeSpec::Fraction(0.3)), None, None).unwrap();
///
/// assert_eq!(split.y_train.len(), 7);
/// assert_eq!(split.y_test.len(), 3);
/// ```
pub fn temporal_train_test_split(
    y: &Series,
    x: Option<&Frame>,
    test_size: Option<SizeSpec>,
    train_size: Option<SizeSpec>,
    fh: Option<&ForecastingHorizon>,
) -> Result<TrainTestSplit, SplitError> {
    if fh.is_some() && (test_size.is_some() || train_size.is_some()) {
        return Err(SplitError::HorizonWithSizes);
    }

    let indices = match fh {
        Some(fh) => HorizonSplitter::new(fh.clone()).split(y.len()),
        None => TemporalTrainTestSplitter::from_sizes(train_size, test_size).split(y.len()),
    };
    let indices = indices.into_iter().next().unwrap_or_default();

    let y_train = y.select(&indices.train);
    let y_test = y.select(&indices.test);

    let (x_train, x_test) = match x {
        Some(x) => (
            Some(x.select_labels(&y.labels_at(&indices.train))?),
            Some(x.select_labels(&y.labels_at(&indices.test))?),
        ),
        None => (None, None),
    };

    Ok(TrainTestSplit {
        y_train,
        y_test,
        x_train,
        x_test,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(n: usize) -> Series {
        Series::from_values((0..n).map(|i| i as f64).collect())
    }

    #[test]
    fn splits_y_only() {
        let split =
            temporal_train_test_split(&series(10), None, Some(SizeSpec::Fraction(0.3)), None, None)
                .unwrap();
        assert_eq!(split.y_train.values(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(split.y_test.values(), &[7.0, 8.0, 9.0]);
        assert!(!split.has_exogenous());
    }

    #[test]
    fn aligns_x_by_label() {
        // y rows labelled 5..10; x holds labels 0..10, so positions differ
        let y = Series::new(vec![5, 6, 7, 8, 9], vec![0.0; 5]).unwrap();
        let x = Frame::new(
            (0..10).collect(),
            vec![("v".to_owned(), (0..10).map(f64::from).collect())],
        )
        .unwrap();

        let split =
            temporal_train_test_split(&y, Some(&x), Some(SizeSpec::Count(2)), None, None).unwrap();

        assert_eq!(split.y_test.index(), &[8, 9]);
        let x_test = split.x_test.unwrap();
        assert_eq!(x_test.index(), &[8, 9]);
        assert_eq!(x_test.column("v"), Some([8.0, 9.0].as_slice()));

        let x_train = split.x_train.unwrap();
        assert_eq!(x_train.index(), &[5, 6, 7]);
        assert_eq!(x_train.column("v"), Some([5.0, 6.0, 7.0].as_slice()));
    }

    #[test]
    fn label_missing_from_x() {
        let y = Series::new(vec![1, 2, 99], vec![0.0; 3]).unwrap();
        let x = Frame::new(vec![1, 2, 3], vec![("v".to_owned(), vec![0.0; 3])]).unwrap();

        let err = temporal_train_test_split(&y, Some(&x), Some(SizeSpec::Count(1)), None, None)
            .unwrap_err();
        assert_eq!(err, SplitError::MissingLabel(99));
    }

    #[test]
    fn horizon_delegation() {
        let fh = ForecastingHorizon::new([1, 2]).unwrap();
        let split = temporal_train_test_split(&series(10), None, None, None, Some(&fh)).unwrap();
        assert_eq!(split.y_train.len(), 8);
        assert_eq!(split.y_test.index(), &[8, 9]);
    }

    #[test]
    fn horizon_with_sizes_rejected() {
        let fh = ForecastingHorizon::new([1]).unwrap();
        let err = temporal_train_test_split(
            &series(10),
            None,
            Some(SizeSpec::Fraction(0.2)),
            None,
            Some(&fh),
        )
        .unwrap_err();
        assert_eq!(err, SplitError::HorizonWithSizes);

        let err =
            temporal_train_test_split(&series(10), None, None, Some(SizeSpec::Count(3)), Some(&fh))
                .unwrap_err();
        assert_eq!(err, SplitError::HorizonWithSizes);
    }

    #[test]
    fn empty_series() {
        let split = temporal_train_test_split(&series(0), None, None, None, None).unwrap();
        assert!(split.y_train.is_empty());
        assert!(split.y_test.is_empty());
    }

    #[test]
    fn pure_function() {
        let y = series(20);
        let a = temporal_train_test_split(&y, None, Some(SizeSpec::Fraction(0.4)), None, None)
            .unwrap();
        let b = temporal_train_test_split(&y, None, Some(SizeSpec::Fraction(0.4)), None, None)
            .unwrap();
        assert_eq!(a, b);
    }
}
