use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event;
use tokio::sync::mpsc;

use crate::app::{App, AppEvent};
use crate::runtime::{EventResult, key_handler};

pub(crate) fn spawn_event_reader(event_tx: mpsc::UnboundedSender<Event>, shutdown: Arc<AtomicBool>) {
    std::thread::spawn(move || {
        while !shutdown.load(Ordering::Relaxed) {
            match crossterm::event::poll(Duration::from_millis(250)) {
                Ok(true) => {
                    if let Ok(event) = crossterm::event::read()
                        && event_tx.send(event).is_err()
                    {
                        break;
                    }
                }
                Ok(false) => {}
                Err(_) => break,
            }
        }
    });
}

pub(crate) async fn process_events(
    app: &mut App,
    event_rx: &mut mpsc::UnboundedReceiver<Event>,
    tick: &mut tokio::time::Interval,
) -> EventResult {
    enum LoopSignal {
        App(Option<AppEvent>),
        Event(Option<Event>),
        Tick,
    }

    // Wait for a terminal event, a finished fetch, or the next tick (spinner
    // redraws). This yields to tokio so fetch tasks can make progress.
    let signal = tokio::select! {
        biased;
        event = event_rx.recv() => LoopSignal::Event(event),
        app_event = app.next_app_event() => LoopSignal::App(app_event),
        _ = tick.tick() => LoopSignal::Tick,
    };

    match signal {
        // The reader thread stopped; there is no way to receive input.
        LoopSignal::Event(None) => return EventResult::Quit,
        LoopSignal::Event(Some(event)) => {
            if process_event(app, &event) == EventResult::Quit {
                return EventResult::Quit;
            }
        }
        LoopSignal::App(Some(app_event)) => app.apply_app_event(app_event),
        LoopSignal::App(None) | LoopSignal::Tick => {}
    }

    // Drain remaining queued events before re-rendering so rapid key
    // presses are processed immediately instead of one-per-frame.
    while let Ok(event) = event_rx.try_recv() {
        if process_event(app, &event) == EventResult::Quit {
            return EventResult::Quit;
        }
    }
    app.process_pending_app_events();

    EventResult::Continue
}

fn process_event(app: &mut App, event: &Event) -> EventResult {
    if let Event::Key(key) = event {
        return key_handler::handle_key_event(app, *key);
    }

    EventResult::Continue
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::app::ListingState;
    use crate::domain::entry::Entry;
    use crate::domain::location::Location;
    use crate::infra::snapshot::MockSnapshotFetcher;

    fn test_app() -> App {
        let mut fetcher = MockSnapshotFetcher::new();
        fetcher
            .expect_fetch()
            .returning(|_, _| Ok(vec![Entry::file("a.txt", 1, None)]));

        App::with_resolver(Location::Downloads, Arc::new(fetcher), |location| {
            Some(PathBuf::from("/test").join(location.label()))
        })
    }

    #[tokio::test]
    async fn test_process_events_quits_on_q() {
        // Arrange
        let mut app = test_app();
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let mut tick = tokio::time::interval(Duration::from_secs(60));
        tick.tick().await;
        event_tx
            .send(Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)))
            .expect("failed to send event");

        // Act
        let result = process_events(&mut app, &mut event_rx, &mut tick).await;

        // Assert
        assert_eq!(result, EventResult::Quit);
    }

    #[tokio::test]
    async fn test_process_events_quits_when_reader_stops() {
        // Arrange
        let mut app = test_app();
        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();
        drop(event_tx);
        let mut tick = tokio::time::interval(Duration::from_secs(60));
        tick.tick().await;

        // Act
        let result = process_events(&mut app, &mut event_rx, &mut tick).await;

        // Assert
        assert_eq!(result, EventResult::Quit);
    }

    #[tokio::test]
    async fn test_process_events_applies_finished_snapshot() {
        // Arrange
        let mut app = test_app();
        let (_event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();
        let mut tick = tokio::time::interval(Duration::from_secs(60));
        tick.tick().await;
        app.request_snapshot();

        // Act
        let result = process_events(&mut app, &mut event_rx, &mut tick).await;

        // Assert
        assert_eq!(result, EventResult::Continue);
        assert_eq!(
            app.listing,
            ListingState::Loaded(vec![Entry::file("a.txt", 1, None)])
        );
    }
}
