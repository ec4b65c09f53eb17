//! Infrastructure adapters for reading folders from the local filesystem.

/// Folder snapshot fetching and OS error classification.
pub mod snapshot;
