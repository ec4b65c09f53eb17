use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;
use crate::domain::location::Location;
use crate::runtime::EventResult;

pub(crate) fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    if key.kind == KeyEventKind::Release {
        return EventResult::Continue;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return EventResult::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return EventResult::Quit,
        KeyCode::Char('j') | KeyCode::Down => app.next_entry(),
        KeyCode::Char('k') | KeyCode::Up => app.previous_entry(),
        KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right => app.next_location(),
        KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Left => app.previous_location(),
        KeyCode::Char('r') => app.request_snapshot(),
        KeyCode::Char(character) => {
            if let Some(location) = shortcut_location(character) {
                app.select_location(location);
            }
        }
        _ => {}
    }

    EventResult::Continue
}

/// Maps the `1`-based sidebar shortcut digit to its location.
fn shortcut_location(character: char) -> Option<Location> {
    let digit = character.to_digit(10)?;
    let index = usize::try_from(digit).ok()?.checked_sub(1)?;

    Location::from_index(index)
}
