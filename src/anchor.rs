//! Anchor side: Start or End

use std::fmt;

/// Which end of the series keeps priority when train and test sizes do not
/// exactly partition the available length.
///
/// With [`Anchor::Start`] the train set is cut first from the head and test
/// absorbs what remains; with [`Anchor::End`] the test set is cut first from
/// the tail and train absorbs what remains.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Anchor {
    #[default]
    Start,
    End,
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anchor::Start => write!(f, "start"),
            Anchor::End => write!(f, "end"),
        }
    }
}
