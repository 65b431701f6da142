//! # nanosplit
//!
//! Temporal train/test splitting for time series model evaluation.
//!
//! Splits an ordered series (and optionally an aligned exogenous frame) into
//! a temporally ordered train and test segment — no shuffling, ever. Sizes
//! can be fractions or absolute counts, anchored to either end of the data,
//! with per-group application for panel collections. A drop-in replacement
//! for sktime's `temporal_train_test_split` in Rust backtesting pipelines.
//!
//! ## Quick Start
//!
//! ```
//! use nanosplit::{Series, SizeSpec, temporal_train_test_split};
//!
//! let y = Series::from_values((0..100).map(f64::from).collect());
//!
//! // Hold out the last 20% as test
//! let split =
//!     temporal_train_test_split(&y, None, Some(SizeSpec::Fraction(0.2)), None, None).unwrap();
//!
//! assert_eq!(split.y_train.len(), 80);
//! assert_eq!(split.y_test.len(), 20);
//!
//! // Order is preserved: test is the tail, train the head
//! assert_eq!(split.y_train.values()[0], 0.0);
//! assert_eq!(split.y_test.values()[0], 80.0);
//! ```
//!
//! ## Splitter configuration
//!
//! The reusable form is [`TemporalTrainTestSplitter`], a stateless
//! configuration holder implementing the [`Splitter`] trait:
//!
//! ```
//! use nanosplit::{Anchor, Splitter, TemporalTrainTestSplitter};
//!
//! // 30% train, 20% test, both cut from the tail
//! let splitter = TemporalTrainTestSplitter::with_sizes(0.3, 0.2).anchored(Anchor::End);
//! let splits = splitter.split(10);
//!
//! assert_eq!(splits[0].train, vec![5, 6, 7]);
//! assert_eq!(splits[0].test, vec![8, 9]);
//! ```
//!
//! Sizes that overlap are reconciled by the anchor side rather than
//! rejected, and sizes that undershoot leave an unclaimed middle region that
//! belongs to neither set. See [`TemporalTrainTestSplitter`] for the exact
//! rules.
//!
//! ## Panel data
//!
//! Stacked collections split per group, so fractions resolve against each
//! series' own length:
//!
//! ```
//! use nanosplit::{Panel, Series, TemporalTrainTestSplitter};
//!
//! let mut panel = Panel::new();
//! panel.push("AAPL", Series::from_values(vec![0.0; 250]));
//! panel.push("MSFT", Series::from_values(vec![0.0; 100]));
//!
//! let (train, test) = panel.split_with(&TemporalTrainTestSplitter::with_test_size(0.2));
//!
//! assert_eq!(test.get(&"AAPL".into()).unwrap().len(), 50);
//! assert_eq!(test.get(&"MSFT".into()).unwrap().len(), 20);
//! ```
//!
//! ## Forecasting horizons
//!
//! Instead of sizing the test set, a [`ForecastingHorizon`] names the exact
//! future steps to hold out:
//!
//! ```
//! use nanosplit::{ForecastingHorizon, Series, temporal_train_test_split};
//!
//! let y = Series::from_values((0..10).map(f64::from).collect());
//! let fh = ForecastingHorizon::new([1, 2, 3]).unwrap();
//!
//! let split = temporal_train_test_split(&y, None, None, None, Some(&fh)).unwrap();
//! assert_eq!(split.y_test.index(), &[7, 8, 9]);
//! ```
//!
//! ## Features
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `serde` | Serialize/Deserialize on all value types |
//! | `parallel` | `Panel::split_with_parallel` via rayon |

mod anchor;
mod error;
mod frame;
mod horizon;
mod panel;
mod partition;
mod series;
mod size;
mod split;
mod splitter;
mod types;

// Re-export public API
pub use anchor::Anchor;
pub use error::SplitError;
pub use frame::{Column, Frame};
pub use horizon::{ForecastingHorizon, HorizonSplitter};
pub use panel::Panel;
pub use series::Series;
pub use size::{DEFAULT_TEST_FRACTION, SizeSpec};
pub use split::{TrainTestSplit, temporal_train_test_split};
pub use splitter::{SplitIndices, Splitter, TemporalTrainTestSplitter};
pub use types::{GroupKey, Timestamp};
