use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Serialize, Serializer};

use crate::domain::access_error::AccessError;

/// Result of one folder fetch: the ordered entries or a classified error.
pub type Snapshot = Result<Vec<Entry>, AccessError>;

/// One immediate child of a listed folder, captured at fetch time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Whether this entry is a directory.
    pub is_dir: bool,
    /// Last modification time, when the platform reports one.
    #[serde(serialize_with = "serialize_unix_seconds")]
    pub modified_at: Option<SystemTime>,
    /// Last path component (e.g., `report.pdf`).
    pub name: String,
    /// Size in bytes. Always `None` for directories.
    pub size_bytes: Option<u64>,
}

impl Entry {
    /// Builds a directory entry.
    pub fn directory(name: impl Into<String>, modified_at: Option<SystemTime>) -> Self {
        Self {
            is_dir: true,
            modified_at,
            name: name.into(),
            size_bytes: None,
        }
    }

    /// Builds a file entry.
    pub fn file(name: impl Into<String>, size_bytes: u64, modified_at: Option<SystemTime>) -> Self {
        Self {
            is_dir: false,
            modified_at,
            name: name.into(),
            size_bytes: Some(size_bytes),
        }
    }
}

#[allow(clippy::ref_option)]
fn serialize_unix_seconds<S>(value: &Option<SystemTime>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    value
        .and_then(|modified_at| modified_at.duration_since(UNIX_EPOCH).ok())
        .map(|elapsed| elapsed.as_secs())
        .serialize(serializer)
}
