//! App-layer state container for the folder browser.
//!
//! [`App`] owns the selected location, the listing shown for it, and the
//! request bookkeeping that keeps only the newest snapshot on screen.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use ratatui::widgets::TableState;
use tokio::sync::mpsc;
use tracing::debug;

use crate::domain::entry::Snapshot;
use crate::domain::location::Location;
use crate::infra::snapshot::SnapshotFetcher;

mod listing;
mod task;

pub use listing::ListingState;

/// Resolves a well-known location to its platform folder.
pub type PathResolver = fn(Location) -> Option<PathBuf>;

/// Internal app events emitted by background fetch tasks.
///
/// Producers should emit events only; state mutation is centralized in
/// [`App::apply_app_event`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum AppEvent {
    /// Indicates a snapshot fetch finished for `request_id`.
    SnapshotLoaded {
        location: Location,
        request_id: u64,
        snapshot: Snapshot,
    },
}

/// Browser state shared by runtime key handlers and rendering.
pub struct App {
    pub listing: ListingState,
    pub location: Location,
    pub table_state: TableState,
    current_path: Option<PathBuf>,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    fetcher: Arc<dyn SnapshotFetcher>,
    latest_request_id: u64,
    resolve_path: PathResolver,
}

impl App {
    /// Creates an app showing `location`, resolving folders with the
    /// platform defaults.
    ///
    /// No fetch is started until [`App::request_snapshot`] is called.
    pub fn new(location: Location, fetcher: Arc<dyn SnapshotFetcher>) -> Self {
        Self::with_resolver(location, fetcher, Location::path)
    }

    /// Creates an app that resolves location folders with `resolve_path`.
    pub fn with_resolver(
        location: Location,
        fetcher: Arc<dyn SnapshotFetcher>,
        resolve_path: PathResolver,
    ) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        Self {
            listing: ListingState::Loading,
            location,
            table_state: TableState::default(),
            current_path: None,
            event_rx,
            event_tx,
            fetcher,
            latest_request_id: 0,
            resolve_path,
        }
    }

    /// Returns the folder of the current location, once resolved.
    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    /// Starts a fetch for the current location and shows the loading state.
    ///
    /// Any fetch still in flight keeps running; its result is dropped when
    /// it arrives because a newer request exists.
    pub fn request_snapshot(&mut self) {
        self.latest_request_id += 1;
        self.current_path = (self.resolve_path)(self.location);
        self.listing = ListingState::Loading;
        self.table_state.select(None);

        debug!(
            location = self.location.label(),
            request_id = self.latest_request_id,
            "requesting folder snapshot"
        );

        task::spawn_snapshot_fetch(
            Arc::clone(&self.fetcher),
            self.location,
            self.current_path.clone(),
            self.latest_request_id,
            self.event_tx.clone(),
        );
    }

    /// Switches to `location` and fetches it. Selecting the current
    /// location again does nothing.
    pub fn select_location(&mut self, location: Location) {
        if location == self.location {
            return;
        }

        self.location = location;
        self.request_snapshot();
    }

    /// Moves to the next location in sidebar order.
    pub fn next_location(&mut self) {
        self.select_location(self.location.next());
    }

    /// Moves to the previous location in sidebar order.
    pub fn previous_location(&mut self) {
        self.select_location(self.location.previous());
    }

    /// Selects the next entry row, wrapping to the first.
    pub fn next_entry(&mut self) {
        let entry_count = self.listing.entries().len();
        if entry_count == 0 {
            return;
        }

        let index = match self.table_state.selected() {
            Some(index) if index + 1 < entry_count => index + 1,
            _ => 0,
        };
        self.table_state.select(Some(index));
    }

    /// Selects the previous entry row, wrapping to the last.
    pub fn previous_entry(&mut self) {
        let entry_count = self.listing.entries().len();
        if entry_count == 0 {
            return;
        }

        let index = match self.table_state.selected() {
            Some(index) if index > 0 => index - 1,
            _ => entry_count - 1,
        };
        self.table_state.select(Some(index));
    }

    /// Applies one fetch result, ignoring results of superseded requests.
    pub(crate) fn apply_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SnapshotLoaded {
                location,
                request_id,
                snapshot,
            } => {
                if request_id != self.latest_request_id {
                    debug!(
                        location = location.label(),
                        request_id,
                        latest_request_id = self.latest_request_id,
                        "dropping stale folder snapshot"
                    );

                    return;
                }

                self.listing = ListingState::from(snapshot);
                let first_row = (!self.listing.entries().is_empty()).then_some(0);
                self.table_state.select(first_row);
            }
        }
    }

    /// Applies every queued app event without waiting.
    pub(crate) fn process_pending_app_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.apply_app_event(event);
        }
    }

    /// Waits for the next internal app event.
    pub(crate) async fn next_app_event(&mut self) -> Option<AppEvent> {
        self.event_rx.recv().await
    }
}
