//! Core types: Timestamp, GroupKey

use std::fmt;

/// Row label for time series observations.
///
/// An opaque ordered label (seconds, nanoseconds, bar number — the crate
/// never interprets it). `y` and an exogenous frame are aligned by these
/// labels, not by position.
pub type Timestamp = i64;

/// Key identifying one series within a panel (stacked collection).
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupKey(pub String);

impl GroupKey {
    pub fn new(key: impl Into<String>) -> Self {
        GroupKey(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for GroupKey {
    fn from(key: &str) -> Self {
        GroupKey(key.to_owned())
    }
}
