use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

type Resolver = fn() -> Option<PathBuf>;

/// One of the well-known folders listed in the sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    #[default]
    Downloads,
    Desktop,
    Documents,
}

impl Location {
    /// All locations in sidebar order.
    pub const ALL: [Location; 3] = [Location::Downloads, Location::Desktop, Location::Documents];

    /// Returns the display name used in the sidebar and error messages.
    pub fn label(self) -> &'static str {
        match self {
            Location::Downloads => "Downloads",
            Location::Desktop => "Desktop",
            Location::Documents => "Documents",
        }
    }

    /// Resolves the platform folder for this location.
    ///
    /// Returns `None` when the platform does not define the folder.
    pub fn path(self) -> Option<PathBuf> {
        (self.resolver())()
    }

    /// Returns the sidebar position of this location.
    pub fn index(self) -> usize {
        match self {
            Location::Downloads => 0,
            Location::Desktop => 1,
            Location::Documents => 2,
        }
    }

    /// Returns the location at sidebar position `index`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the next location, wrapping to the first.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Returns the previous location, wrapping to the last.
    #[must_use]
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn resolver(self) -> Resolver {
        match self {
            Location::Downloads => dirs::download_dir,
            Location::Desktop => dirs::desktop_dir,
            Location::Documents => dirs::document_dir,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_index_order() {
        // Arrange & Act & Assert
        for (index, location) in Location::ALL.iter().enumerate() {
            assert_eq!(location.index(), index);
            assert_eq!(Location::from_index(index), Some(*location));
        }
        assert_eq!(Location::from_index(3), None);
    }

    #[test]
    fn test_next_wraps_to_first() {
        // Arrange & Act & Assert
        assert_eq!(Location::Downloads.next(), Location::Desktop);
        assert_eq!(Location::Desktop.next(), Location::Documents);
        assert_eq!(Location::Documents.next(), Location::Downloads);
    }

    #[test]
    fn test_previous_wraps_to_last() {
        // Arrange & Act & Assert
        assert_eq!(Location::Downloads.previous(), Location::Documents);
        assert_eq!(Location::Documents.previous(), Location::Desktop);
    }

    #[test]
    fn test_display_uses_label() {
        // Arrange & Act & Assert
        assert_eq!(Location::Documents.to_string(), "Documents");
        assert_eq!(Location::default(), Location::Downloads);
    }

    #[test]
    fn test_serialize_uses_snake_case() {
        // Arrange & Act
        let value = serde_json::to_value(Location::Desktop).expect("failed to serialize location");

        // Assert
        assert_eq!(value, serde_json::json!("desktop"));
    }
}
