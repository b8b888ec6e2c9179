use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::Action;

/// Translate a terminal event into a core action.
///
/// Only quit keys and resizes matter; every other event is ignored.
pub fn translate(event: &Event) -> Option<Action> {
    match event {
        Event::Key(key_event) => translate_key(key_event),
        Event::Resize(width, height) => Some(Action::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

fn translate_key(key_event: &KeyEvent) -> Option<Action> {
    // Repeats and releases (reported by some terminals) are not new input
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        // Raw mode swallows SIGINT, so Ctrl+C arrives as a key
        (m, KeyCode::Char('c')) if m.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Action::Quit),
        _ => None,
    }
}
