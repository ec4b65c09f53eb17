use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::app::AppEvent;
use crate::domain::access_error::AccessError;
use crate::domain::location::Location;
use crate::infra::snapshot::{self, SnapshotFetcher};

/// Fetches `location` in the background and reports the result as
/// [`AppEvent::SnapshotLoaded`].
///
/// The task yields once so pending UI work runs first, then performs the
/// blocking filesystem read on the blocking pool.
pub(super) fn spawn_snapshot_fetch(
    fetcher: Arc<dyn SnapshotFetcher>,
    location: Location,
    path: Option<PathBuf>,
    request_id: u64,
    event_tx: mpsc::UnboundedSender<AppEvent>,
) {
    tokio::spawn(async move {
        tokio::task::yield_now().await;

        let fallback_path = path.clone().unwrap_or_default();
        let snapshot = tokio::task::spawn_blocking(move || {
            snapshot::fetch_resolved(&*fetcher, path.as_deref(), location.label())
        })
        .await
        .unwrap_or_else(|join_error| {
            Err(AccessError::Unknown {
                message: join_error.to_string(),
                path: fallback_path,
            })
        });

        // The receiver lives as long as the app; a send failure means shutdown.
        let _ = event_tx.send(AppEvent::SnapshotLoaded {
            location,
            request_id,
            snapshot,
        });
    });
}
