//! Edge case tests for temporal splitting.
//!
//! Exercises degenerate inputs (empty series, zero sizes, oversized sizes)
//! and pins down the documented clamping behavior with concrete scenarios.

use nanosplit::{
    Anchor, ForecastingHorizon, Series, SizeSpec, SplitError, Splitter,
    TemporalTrainTestSplitter, temporal_train_test_split,
};

fn series(n: usize) -> Series {
    Series::from_values((0..n).map(|i| i as f64).collect())
}

// ---------------------------------------------------------------------------
// Concrete scenarios
// ---------------------------------------------------------------------------

#[test]
fn fractional_test_size_only() {
    // test = ceil(0.3 * 10) = 3, train fills the remainder
    let split =
        temporal_train_test_split(&series(10), None, Some(SizeSpec::Fraction(0.3)), None, None)
            .unwrap();
    assert_eq!(split.y_train.index(), (0..7).collect::<Vec<_>>().as_slice());
    assert_eq!(split.y_test.index(), &[7, 8, 9]);
}

#[test]
fn both_fractions_anchored_end() {
    let splitter = TemporalTrainTestSplitter::with_sizes(0.3, 0.2).anchored(Anchor::End);
    let splits = splitter.split(10);
    assert_eq!(splits[0].test, vec![8, 9]);
    assert_eq!(splits[0].train, vec![5, 6, 7]);
}

#[test]
fn absolute_test_count_only() {
    let split =
        temporal_train_test_split(&series(5), None, Some(SizeSpec::Count(2)), None, None).unwrap();
    assert_eq!(split.y_train.index(), &[0, 1, 2]);
    assert_eq!(split.y_test.index(), &[3, 4]);
}

#[test]
fn empty_series_always_empty_outputs() {
    for (test, train) in [
        (None, None),
        (Some(SizeSpec::Fraction(0.5)), None),
        (Some(SizeSpec::Count(3)), Some(SizeSpec::Count(4))),
    ] {
        let split = temporal_train_test_split(&series(0), None, test, train, None).unwrap();
        assert!(split.y_train.is_empty());
        assert!(split.y_test.is_empty());
    }
}

#[test]
fn horizon_with_explicit_size_is_a_usage_error() {
    let fh = ForecastingHorizon::new([1, 2]).unwrap();
    let err = temporal_train_test_split(
        &series(10),
        None,
        Some(SizeSpec::Fraction(0.2)),
        None,
        Some(&fh),
    )
    .unwrap_err();
    assert_eq!(err, SplitError::HorizonWithSizes);
}

// ---------------------------------------------------------------------------
// Clamping and gaps
// ---------------------------------------------------------------------------

#[test]
fn oversized_sum_truncates_the_unanchored_side() {
    // 6 + 6 > 10, anchor end: test keeps its 6, train absorbs the remaining 4
    let splits = TemporalTrainTestSplitter::with_sizes(6usize, 6usize)
        .anchored(Anchor::End)
        .split(10);
    assert_eq!(splits[0].test.len(), 6);
    assert_eq!(splits[0].train, vec![0, 1, 2, 3]);

    // anchor start: train keeps its 6
    let splits = TemporalTrainTestSplitter::with_sizes(6usize, 6usize).split(10);
    assert_eq!(splits[0].train.len(), 6);
    assert_eq!(splits[0].test, vec![6, 7, 8, 9]);
}

#[test]
fn undersized_sum_drops_the_middle() {
    // 3 + 2 < 10: five rows belong to neither set
    let splits = TemporalTrainTestSplitter::with_sizes(3usize, 2usize).split(10);
    assert_eq!(splits[0].train, vec![0, 1, 2]);
    assert_eq!(splits[0].test, vec![3, 4]);

    // anchored end, the cut sits against the tail instead
    let splits = TemporalTrainTestSplitter::with_sizes(3usize, 2usize)
        .anchored(Anchor::End)
        .split(10);
    assert_eq!(splits[0].train, vec![5, 6, 7]);
    assert_eq!(splits[0].test, vec![8, 9]);
}

#[test]
fn zero_test_count_is_not_an_error() {
    let splits = TemporalTrainTestSplitter::with_sizes(4usize, 0usize).split(10);
    assert_eq!(splits[0].train, vec![0, 1, 2, 3]);
    assert!(splits[0].test.is_empty());
}

#[test]
fn zero_train_count_is_not_an_error() {
    let splits = TemporalTrainTestSplitter::with_sizes(0usize, 4usize)
        .anchored(Anchor::End)
        .split(10);
    assert!(splits[0].train.is_empty());
    assert_eq!(splits[0].test, vec![6, 7, 8, 9]);
}

#[test]
fn test_count_larger_than_series() {
    let splits = TemporalTrainTestSplitter::with_test_size(25usize).split(10);
    assert!(splits[0].train.is_empty());
    assert_eq!(splits[0].test.len(), 10);
}

#[test]
fn fraction_of_one_takes_everything() {
    let splits = TemporalTrainTestSplitter::with_test_size(1.0).split(10);
    assert!(splits[0].train.is_empty());
    assert_eq!(splits[0].test.len(), 10);
}

#[test]
fn single_row_series() {
    // test = ceil(0.25 * 1) = 1, train empty
    let split = temporal_train_test_split(&series(1), None, None, None, None).unwrap();
    assert!(split.y_train.is_empty());
    assert_eq!(split.y_test.len(), 1);
}

// ---------------------------------------------------------------------------
// Horizon edge cases
// ---------------------------------------------------------------------------

#[test]
fn horizon_exactly_fills_series() {
    let fh = ForecastingHorizon::new([1, 2, 3, 4, 5]).unwrap();
    let split = temporal_train_test_split(&series(5), None, None, None, Some(&fh)).unwrap();
    assert!(split.y_train.is_empty());
    assert_eq!(split.y_test.len(), 5);
}

#[test]
fn horizon_beyond_series_degrades_to_empty() {
    let fh = ForecastingHorizon::new([20]).unwrap();
    let split = temporal_train_test_split(&series(5), None, None, None, Some(&fh)).unwrap();
    assert!(split.y_train.is_empty());
    assert!(split.y_test.is_empty());
}
