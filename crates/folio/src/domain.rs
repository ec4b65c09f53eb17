//! Domain types for folder snapshots and the locations they are taken from.

/// Classified failures of a folder fetch.
pub mod access_error;
pub mod entry;
pub mod location;
