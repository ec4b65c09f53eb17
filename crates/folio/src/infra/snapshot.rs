use std::cmp::Ordering;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::access_error::AccessError;
use crate::domain::entry::{Entry, Snapshot};

/// Leading character that marks a hidden entry.
const HIDDEN_PREFIX: char = '.';

/// Folder listing boundary used by app orchestration code.
///
/// Production uses [`FsSnapshotFetcher`], while tests can inject
/// `MockSnapshotFetcher` to control listing results and timing.
#[cfg_attr(test, mockall::automock)]
pub trait SnapshotFetcher: Send + Sync {
    /// Lists the immediate visible children of `path`.
    ///
    /// `label` names the folder in error messages and is never used for
    /// lookup.
    fn fetch(&self, path: &Path, label: &str) -> Snapshot;
}

/// Production [`SnapshotFetcher`] backed by the local filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsSnapshotFetcher;

impl SnapshotFetcher for FsSnapshotFetcher {
    fn fetch(&self, path: &Path, label: &str) -> Snapshot {
        fetch(path, label)
    }
}

/// Fetches an already resolved folder with `fetcher`.
///
/// Returns [`AccessError::InvalidLocation`] without touching `fetcher` when
/// `path` is `None`.
pub fn fetch_resolved(fetcher: &dyn SnapshotFetcher, path: Option<&Path>, label: &str) -> Snapshot {
    let Some(path) = path else {
        warn!(label, "no platform folder for location");

        return Err(AccessError::InvalidLocation);
    };

    fetcher.fetch(path, label)
}

/// Lists the immediate children of `path`, directories first.
///
/// The path is canonicalized first; if that fails the original path is used
/// so errors still name what the caller asked for. Hidden entries are
/// skipped. Entries are stably sorted with directories before files and by
/// case-insensitive name within each group.
///
/// A failure while reading any single entry fails the whole snapshot as
/// [`AccessError::Unknown`] rather than returning a partial listing.
pub fn fetch(path: &Path, label: &str) -> Snapshot {
    fetch_with(path, label, |resolved_path: &Path| fs::read_dir(resolved_path))
}

/// Runs [`fetch`] with `open_dir` standing in for directory enumeration.
fn fetch_with<F, I>(path: &Path, label: &str, open_dir: F) -> Snapshot
where
    F: FnOnce(&Path) -> io::Result<I>,
    I: Iterator<Item = io::Result<fs::DirEntry>>,
{
    if path.as_os_str().is_empty() {
        return Err(AccessError::InvalidLocation);
    }

    let resolved_path = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    debug!(path = %resolved_path.display(), label, "fetching folder snapshot");

    let snapshot = read_entries(&resolved_path, label, open_dir).map(|mut entries| {
        sort_entries(&mut entries);

        entries
    });

    match &snapshot {
        Ok(entries) => {
            debug!(path = %resolved_path.display(), count = entries.len(), "folder snapshot ready");
        }
        Err(error) => {
            warn!(path = %resolved_path.display(), kind = error.kind(), %error, "folder snapshot failed");
        }
    }

    snapshot
}

/// Maps an enumeration failure on `path` to the user-facing taxonomy.
pub fn classify_io_error(error: &io::Error, path: &Path, label: &str) -> AccessError {
    match error.kind() {
        io::ErrorKind::PermissionDenied => AccessError::PermissionDenied {
            path: path.to_path_buf(),
            label: label.to_string(),
        },
        io::ErrorKind::NotFound => AccessError::NotFound {
            path: path.to_path_buf(),
            label: label.to_string(),
        },
        io::ErrorKind::InvalidData => AccessError::Corrupt {
            path: path.to_path_buf(),
        },
        _ if is_corruption_error(error) => AccessError::Corrupt {
            path: path.to_path_buf(),
        },
        _ => unknown_error(error, path),
    }
}

/// Sorts `entries` with directories first, then by case-insensitive name.
///
/// Names that compare equal after case folding keep their input order.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(compare_entries);
}

fn read_entries<F, I>(path: &Path, label: &str, open_dir: F) -> Result<Vec<Entry>, AccessError>
where
    F: FnOnce(&Path) -> io::Result<I>,
    I: Iterator<Item = io::Result<fs::DirEntry>>,
{
    let read_dir = open_dir(path).map_err(|error| classify_io_error(&error, path, label))?;
    let children = read_dir.map(|dir_entry| {
        dir_entry.map(|dir_entry| {
            let name = dir_entry.file_name();
            let entry_path = dir_entry.path();

            (name, entry_path, move || entry_metadata(&dir_entry))
        })
    });

    collect_entries(path, children)
}

/// Builds entries from `(name, path, metadata reader)` children of `path`.
///
/// Metadata is only read for visible children. The first enumeration or
/// metadata failure aborts the listing.
fn collect_entries<C, M>(path: &Path, children: C) -> Result<Vec<Entry>, AccessError>
where
    C: IntoIterator<Item = io::Result<(OsString, PathBuf, M)>>,
    M: FnOnce() -> io::Result<fs::Metadata>,
{
    let mut entries = Vec::new();

    for child in children {
        let (name, entry_path, read_metadata) = child.map_err(|error| unknown_error(&error, path))?;
        let name = name.to_string_lossy().into_owned();
        if is_hidden(&name) {
            continue;
        }

        let metadata = read_metadata().map_err(|error| unknown_error(&error, &entry_path))?;
        entries.push(entry_from_metadata(name, &metadata));
    }

    Ok(entries)
}

/// Reads metadata for one child, following symlinks when the target exists.
///
/// A dangling symlink falls back to the link's own metadata.
fn entry_metadata(dir_entry: &fs::DirEntry) -> io::Result<fs::Metadata> {
    let metadata = dir_entry.metadata()?;
    if !metadata.file_type().is_symlink() {
        return Ok(metadata);
    }

    Ok(fs::metadata(dir_entry.path()).unwrap_or(metadata))
}

fn entry_from_metadata(name: String, metadata: &fs::Metadata) -> Entry {
    let modified_at = metadata.modified().ok();
    if metadata.is_dir() {
        return Entry::directory(name, modified_at);
    }

    Entry::file(name, metadata.len(), modified_at)
}

fn is_hidden(name: &str) -> bool {
    name.starts_with(HIDDEN_PREFIX)
}

fn compare_entries(first: &Entry, second: &Entry) -> Ordering {
    second
        .is_dir
        .cmp(&first.is_dir)
        .then_with(|| compare_names(&first.name, &second.name))
}

fn compare_names(first: &str, second: &str) -> Ordering {
    first
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(second.chars().flat_map(char::to_lowercase))
}

fn unknown_error(error: &io::Error, path: &Path) -> AccessError {
    AccessError::Unknown {
        message: error.to_string(),
        path: path.to_path_buf(),
    }
}

#[cfg(unix)]
fn is_corruption_error(error: &io::Error) -> bool {
    use nix::errno::Errno;

    #[cfg(target_os = "linux")]
    const CORRUPTION_ERRNOS: &[Errno] = &[Errno::EIO, Errno::EUCLEAN];
    #[cfg(not(target_os = "linux"))]
    const CORRUPTION_ERRNOS: &[Errno] = &[Errno::EIO];

    error
        .raw_os_error()
        .map(Errno::from_raw)
        .is_some_and(|errno| CORRUPTION_ERRNOS.contains(&errno))
}

#[cfg(windows)]
fn is_corruption_error(error: &io::Error) -> bool {
    // ERROR_FILE_CORRUPT, ERROR_DISK_CORRUPT
    matches!(error.raw_os_error(), Some(1392 | 1393))
}

#[cfg(not(any(unix, windows)))]
fn is_corruption_error(_error: &io::Error) -> bool {
    false
}
