//! Input Controller: turns key presses into cell edits and notifications.
//!
//! The controller owns the [`CellStore`] and the single listener slot. Every
//! state change goes through here so that the ordering of notifications is
//! fixed: `Changed` first, then `Completed` when the same keystroke filled the
//! last cell.

use super::event::{KeyCode, KeyModifiers};
use super::listener::{dispatch, PinEvent, PinListener};
use crate::cells::{CellStore, PinSnapshot};
use crate::error::PinResult;

/// What happened to a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key changed the cells; the widget must be redrawn.
    Changed,
    /// The key belongs to the widget but changed nothing.
    Consumed,
    /// The key is not handled here and should propagate to the host.
    Ignored,
}

impl KeyOutcome {
    /// Whether the host should stop propagating the key.
    #[inline]
    pub const fn is_consumed(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Translates key presses into [`CellStore`] mutations.
pub struct InputController {
    store: CellStore,
    listener: Option<Box<dyn PinListener>>,
}

impl std::fmt::Debug for InputController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputController")
            .field("store", &self.store)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl InputController {
    /// Create a controller over an empty store of `length` cells.
    pub fn new(length: usize) -> PinResult<Self> {
        Ok(Self {
            store: CellStore::new(length)?,
            listener: None,
        })
    }

    /// Read access to the cells.
    #[inline]
    pub const fn store(&self) -> &CellStore {
        &self.store
    }

    /// Register the listener. Replaces any previous one.
    pub fn set_listener(&mut self, listener: Box<dyn PinListener>) {
        if self.listener.is_some() {
            tracing::debug!("replacing pin listener");
        }
        self.listener = Some(listener);
    }

    /// Remove the listener, returning it.
    pub fn take_listener(&mut self) -> Option<Box<dyn PinListener>> {
        self.listener.take()
    }

    /// Route a key press.
    ///
    /// Digits `0`-`9` fill cells, Backspace/Delete remove, Enter confirms.
    /// Anything else, including digits typed with Control or Alt, is
    /// [`KeyOutcome::Ignored`].
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyOutcome {
        match code {
            KeyCode::Char(d) if d.is_ascii_digit() && !modifiers.is_chord() => self.on_digit(d),
            KeyCode::Backspace | KeyCode::Delete => self.on_delete(),
            KeyCode::Enter => self.on_confirm(),
            _ => KeyOutcome::Ignored,
        }
    }

    /// Enter a digit at the cursor.
    ///
    /// Swallowed without notification when every cell is filled.
    pub fn on_digit(&mut self, d: char) -> KeyOutcome {
        if !self.store.set_at(d) {
            tracing::debug!(digit = %d, "store full, digit swallowed");
            return KeyOutcome::Consumed;
        }
        tracing::debug!(cursor = self.store.cursor(), "digit entered");
        self.emit(&PinEvent::Changed {
            text: d.to_string(),
            is_deletion: false,
        });
        if self.store.is_full() {
            tracing::debug!("pin complete");
            self.emit(&PinEvent::Completed);
        }
        KeyOutcome::Changed
    }

    /// Remove the digit before the cursor.
    ///
    /// Swallowed without notification when the first cell is empty.
    pub fn on_delete(&mut self) -> KeyOutcome {
        if self.store.get(0).is_none() {
            return KeyOutcome::Consumed;
        }
        if let Some(removed) = self.store.clear_before() {
            tracing::debug!(cursor = self.store.cursor(), "digit removed");
            self.emit(&PinEvent::Changed {
                text: removed.to_string(),
                is_deletion: true,
            });
        }
        KeyOutcome::Changed
    }

    /// Report the current entry to the listener. Never mutates the cells.
    pub fn on_confirm(&mut self) -> KeyOutcome {
        let event = PinEvent::ConfirmPressed {
            full_text: self.store.full_text(),
            is_complete: self.store.is_full(),
        };
        tracing::debug!(is_complete = self.store.is_full(), "confirm pressed");
        self.emit(&event);
        KeyOutcome::Consumed
    }

    /// Empty all cells. Raises no notification.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Capture the cell state.
    pub fn snapshot(&self) -> PinSnapshot {
        self.store.snapshot()
    }

    /// Replace the cell state. Raises no notification.
    pub fn restore(&mut self, snapshot: &PinSnapshot) -> PinResult<()> {
        self.store.restore(snapshot)
    }

    fn emit(&mut self, event: &PinEvent) {
        if let Some(listener) = self.listener.as_deref_mut() {
            dispatch(listener, event);
        }
    }
}
