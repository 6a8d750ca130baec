//! Conversion from crossterm terminal events to [`InputEvent`].

use super::event::{InputEvent, KeyCode, KeyModifiers};
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};

/// Convert a crossterm event to our `InputEvent`.
///
/// Returns `None` for events the widget has no use for (key releases,
/// mouse motion, paste, unsupported keys).
pub fn convert_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key_event) => {
            // Only process key press events (not release or repeat)
            if key_event.kind != KeyEventKind::Press {
                return None;
            }

            let code = convert_key_code(key_event.code)?;
            let modifiers = convert_modifiers(key_event.modifiers);

            Some(InputEvent::Key { code, modifiers })
        }

        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::PointerDown {
                x: u32::from(mouse.column),
                y: u32::from(mouse.row),
            }),
            _ => None,
        },

        Event::Resize(width, height) => Some(InputEvent::Resize {
            width: u32::from(width),
            height: u32::from(height),
        }),

        Event::FocusGained => Some(InputEvent::FocusGained),

        Event::FocusLost => Some(InputEvent::FocusLost),

        Event::Paste(_) => None,
    }
}

/// Convert crossterm `KeyCode` to our `KeyCode`.
fn convert_key_code(code: event::KeyCode) -> Option<KeyCode> {
    Some(match code {
        event::KeyCode::Char(c) => KeyCode::Char(c),
        event::KeyCode::Backspace => KeyCode::Backspace,
        event::KeyCode::Delete => KeyCode::Delete,
        event::KeyCode::Enter => KeyCode::Enter,
        event::KeyCode::Left => KeyCode::Left,
        event::KeyCode::Right => KeyCode::Right,
        event::KeyCode::Up => KeyCode::Up,
        event::KeyCode::Down => KeyCode::Down,
        event::KeyCode::Tab => KeyCode::Tab,
        event::KeyCode::BackTab => KeyCode::BackTab,
        event::KeyCode::Esc => KeyCode::Esc,
        _ => return None,
    })
}

/// Convert crossterm `KeyModifiers` to our `KeyModifiers`.
fn convert_modifiers(mods: event::KeyModifiers) -> KeyModifiers {
    KeyModifiers {
        shift: mods.contains(event::KeyModifiers::SHIFT),
        control: mods.contains(event::KeyModifiers::CONTROL),
        alt: mods.contains(event::KeyModifiers::ALT),
    }
}
