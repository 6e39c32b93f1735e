use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;

use super::types::MenuEvent;

/// Maps a key press to a menu event.
///
/// Returns `None` for anything but a press, and for keys the menu doesn't use.
#[must_use]
pub fn map_key_event(key_event: &KeyEvent) -> Option<MenuEvent> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code, key_event.modifiers
    );

    match key_event.code {
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(MenuEvent::Quit)
        }
        KeyCode::Char('q') => Some(MenuEvent::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(MenuEvent::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(MenuEvent::Down),
        KeyCode::Enter | KeyCode::Char(' ') => Some(MenuEvent::Select),
        _ => None,
    }
}
