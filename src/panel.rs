//! Panel data: multiple series stacked under grouping keys.
//!
//! Splitting a panel applies a [`Splitter`] independently per group, so
//! fractional sizes resolve against each series' own length, never the
//! concatenated total. No state crosses groups, which is why the parallel
//! variant needs no synchronization.

use crate::series::Series;
use crate::splitter::Splitter;
use crate::types::GroupKey;

/// An ordered collection of `(GroupKey, Series)` groups.
///
/// Group order is insertion order and is preserved by splitting. Pushing a
/// key that already exists replaces that group's series in place.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Panel {
    groups: Vec<(GroupKey, Series)>,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Add a group, replacing any existing series under the same key.
    pub fn push(&mut self, key: impl Into<GroupKey>, series: Series) {
        let key = key.into();
        if let Some(group) = self.groups.iter_mut().find(|(k, _)| *k == key) {
            group.1 = series;
        } else {
            self.groups.push((key, series));
        }
    }

    /// The series stored under `key`, if any.
    pub fn get(&self, key: &GroupKey) -> Option<&Series> {
        self.groups
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, series)| series)
    }

    /// Iterate groups in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&GroupKey, &Series)> {
        self.groups.iter().map(|(k, s)| (k, s))
    }

    /// Split every group independently, returning `(train, test)` panels.
    ///
    /// Each group is split exactly as the single-series case would split it;
    /// group order is preserved in both outputs.
    ///
    /// # Example
    ///
    /// ```
    /// use nanosplit::{Panel, Series, TemporalTrainTestSplitter};
    ///
    /// let mut panel = Panel::new();
    /// panel.push("short", Series::from_values(vec![1.0; 4]));
    /// panel.push("long", Series::from_values(vec![1.0; 8]));
    ///
    /// let splitter = TemporalTrainTestSplitter::with_test_size(0.5);
    /// let (train, test) = panel.split_with(&splitter);
    ///
    /// // fractions resolve per group, not against the 12-row total
    /// assert_eq!(test.get(&"short".into()).unwrap().len(), 2);
    /// assert_eq!(test.get(&"long".into()).unwrap().len(), 4);
    /// ```
    pub fn split_with(&self, splitter: &impl Splitter) -> (Panel, Panel) {
        let parts = self
            .groups
            .iter()
            .map(|(key, series)| split_group(splitter, key, series))
            .collect();

        collect_panels(parts)
    }

    /// [`split_with`](Panel::split_with), fanned out over groups with rayon.
    ///
    /// Group results come back in the same order as the sequential version.
    #[cfg(feature = "parallel")]
    pub fn split_with_parallel(&self, splitter: &(impl Splitter + Sync)) -> (Panel, Panel) {
        use rayon::prelude::*;

        let parts = self
            .groups
            .par_iter()
            .map(|(key, series)| split_group(splitter, key, series))
            .collect();

        collect_panels(parts)
    }
}

fn split_group(
    splitter: &impl Splitter,
    key: &GroupKey,
    series: &Series,
) -> (GroupKey, Series, Series) {
    let indices = splitter.split(series.len()).into_iter().next().unwrap_or_default();
    (
        key.clone(),
        series.select(&indices.train),
        series.select(&indices.test),
    )
}

fn collect_panels(parts: Vec<(GroupKey, Series, Series)>) -> (Panel, Panel) {
    let mut train = Panel::new();
    let mut test = Panel::new();
    for (key, train_series, test_series) in parts {
        train.groups.push((key.clone(), train_series));
        test.groups.push((key, test_series));
    }
    (train, test)
}
