//! Terminal input translation.
//!
//! Maps crossterm's key, mouse, and resize events onto the core's
//! [`Event`] type. This is the only place that looks at backend event
//! structs; everything past here speaks core events.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};

use crate::core::event::{Event, Key};

/// Poll for one event, blocking up to `timeout`.
pub fn poll_event(timeout: Duration) -> Option<Event> {
    if !event::poll(timeout).ok()? {
        return None;
    }
    translate(event::read().ok()?)
}

/// Poll without blocking, to drain a burst of queued input.
pub fn poll_event_immediate() -> Option<Event> {
    poll_event(Duration::ZERO)
}

fn translate(raw: CrosstermEvent) -> Option<Event> {
    match raw {
        CrosstermEvent::Key(key) => {
            // Kitty-protocol terminals also report releases and repeats.
            if key.kind != KeyEventKind::Press {
                return None;
            }
            let key = match (key.modifiers, key.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Key::CtrlC,
                (_, KeyCode::Char(c)) => Key::Char(c),
                (_, KeyCode::Enter) => Key::Enter,
                (_, KeyCode::Esc) => Key::Esc,
                (_, KeyCode::Up) => Key::Up,
                (_, KeyCode::Down) => Key::Down,
                (_, KeyCode::PageUp) => Key::PageUp,
                (_, KeyCode::PageDown) => Key::PageDown,
                (_, KeyCode::Home) => Key::Home,
                (_, KeyCode::End) => Key::End,
                _ => return None,
            };
            Some(Event::Key(key))
        }
        CrosstermEvent::Resize(width, height) => Some(Event::Resize(width, height)),
        CrosstermEvent::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollUp => Some(Event::Key(Key::Up)),
            MouseEventKind::ScrollDown => Some(Event::Key(Key::Down)),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, MouseEvent};

    #[test]
    fn test_ctrl_c_translates_to_quit_key() {
        let raw = CrosstermEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(translate(raw), Some(Event::Key(Key::CtrlC)));
    }

    #[test]
    fn test_plain_char_passes_through() {
        let raw = CrosstermEvent::Key(KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE));
        assert_eq!(translate(raw), Some(Event::Key(Key::Char('?'))));
    }

    #[test]
    fn test_resize_carries_dimensions() {
        assert_eq!(
            translate(CrosstermEvent::Resize(80, 24)),
            Some(Event::Resize(80, 24))
        );
    }

    #[test]
    fn test_mouse_wheel_scrolls() {
        let raw = CrosstermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(translate(raw), Some(Event::Key(Key::Down)));
    }

    #[test]
    fn test_unmapped_keys_are_dropped() {
        let raw = CrosstermEvent::Key(KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE));
        assert_eq!(translate(raw), None);
    }
}
