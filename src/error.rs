//! Error types for split construction and label alignment.

/// Errors returned by splitting and alignment operations.
///
/// Size conflicts are deliberately *not* errors: sizes that overlap or leave
/// a gap are reconciled by the anchor rule instead (see
/// [`TemporalTrainTestSplitter`](crate::TemporalTrainTestSplitter)).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(thiserror::Error)]
pub enum SplitError {
    /// A forecasting horizon and explicit sizes were both supplied.
    #[error("`test_size` and `train_size` cannot be specified when a forecasting horizon is given")]
    HorizonWithSizes,

    /// A forecasting horizon was empty or contained a zero offset.
    #[error("forecasting horizon must contain at least one offset, all positive")]
    InvalidHorizon,

    /// An index and its values disagree on length.
    #[error("length mismatch: expected {expected} rows, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A row label selected on `y` is absent from the exogenous frame.
    #[error("label {0} not present in frame index")]
    MissingLabel(crate::Timestamp),

    /// Two columns in a frame share the same name.
    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),
}
