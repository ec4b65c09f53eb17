use crate::domain::access_error::AccessError;
use crate::domain::entry::{Entry, Snapshot};

/// What the main panel shows for the current location.
///
/// Exactly one of loading, entries, or an error is visible at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListingState {
    /// A fetch is outstanding.
    #[default]
    Loading,
    /// The latest fetch succeeded.
    Loaded(Vec<Entry>),
    /// The latest fetch failed.
    Failed(AccessError),
}

impl ListingState {
    /// Returns loaded entries, or an empty slice while loading or failed.
    pub fn entries(&self) -> &[Entry] {
        match self {
            Self::Loaded(entries) => entries,
            Self::Loading | Self::Failed(_) => &[],
        }
    }

    #[cfg(test)]
    pub(crate) fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

impl From<Snapshot> for ListingState {
    fn from(snapshot: Snapshot) -> Self {
        match snapshot {
            Ok(entries) => Self::Loaded(entries),
            Err(error) => Self::Failed(error),
        }
    }
}
