use std::path::PathBuf;

/// A folder fetch failure mapped to a closed set of user-facing kinds.
///
/// The `Display` text is the message shown in place of the entry list. No
/// variant carries retry state; retrying is a new fetch.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    /// The caller supplied no resolvable path.
    #[error("This location is unavailable.")]
    InvalidLocation,
    /// The operating system denied read access.
    #[error(
        "Folio does not have permission to read {label} at {}.\nGrant read access to this \
         folder in your system privacy settings, then try again.",
        .path.display()
    )]
    PermissionDenied { path: PathBuf, label: String },
    /// The path does not exist.
    #[error("{label} could not be found at {}.", .path.display())]
    NotFound { path: PathBuf, label: String },
    /// The filesystem or volume is unreadable.
    #[error("The folder at {} could not be read. The volume may be corrupted.", .path.display())]
    Corrupt { path: PathBuf },
    /// Any error without a dedicated kind; `message` keeps the OS text.
    #[error("Failed to read {}: {message}", .path.display())]
    Unknown { message: String, path: PathBuf },
}

impl AccessError {
    /// Returns a stable snake-case identifier for machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidLocation => "invalid_location",
            Self::PermissionDenied { .. } => "permission_denied",
            Self::NotFound { .. } => "not_found",
            Self::Corrupt { .. } => "corrupt",
            Self::Unknown { .. } => "unknown",
        }
    }

    /// Returns the short heading rendered above the message.
    pub fn title(&self) -> &'static str {
        match self {
            Self::InvalidLocation => "Unavailable",
            Self::PermissionDenied { .. } => "Permission denied",
            Self::NotFound { .. } => "Folder not found",
            Self::Corrupt { .. } => "Unreadable folder",
            Self::Unknown { .. } => "Unexpected error",
        }
    }
}
