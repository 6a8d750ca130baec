//! Input event types consumed by the widget.
//!
//! These are a deliberately small subset of what a host toolkit reports:
//! keys, a pointer press, and window focus changes.

/// Key codes for keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character.
    Char(char),
    /// Backspace key.
    Backspace,
    /// Delete key.
    Delete,
    /// Enter/Return key.
    Enter,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Tab key.
    Tab,
    /// Backtab (Shift+Tab).
    BackTab,
    /// Escape key.
    Esc,
}

/// Key modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers {
    /// Shift key held.
    pub shift: bool,
    /// Control key held.
    pub control: bool,
    /// Alt/Option key held.
    pub alt: bool,
}

impl KeyModifiers {
    /// No modifiers.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
    };

    /// Control or Alt is held, i.e. the key is a shortcut rather than text.
    pub const fn is_chord(&self) -> bool {
        self.control || self.alt
    }
}

/// Events delivered to the widget on the owner thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key was pressed.
    Key {
        /// The key code.
        code: KeyCode,
        /// Modifiers held during keypress.
        modifiers: KeyModifiers,
    },

    /// A pointer (mouse button or touch) went down.
    PointerDown {
        /// X coordinate in surface units.
        x: u32,
        /// Y coordinate in surface units.
        y: u32,
    },

    /// The host surface was resized.
    Resize {
        /// New width.
        width: u32,
        /// New height.
        height: u32,
    },

    /// The host window gained focus.
    FocusGained,

    /// The host window lost focus.
    FocusLost,
}

impl InputEvent {
    /// A key press with no modifiers.
    pub const fn key(code: KeyCode) -> Self {
        Self::Key {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}
