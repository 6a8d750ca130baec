//! Outbound notifications and the listener that receives them.

use crossbeam_channel::Sender;

/// A notification raised by the input controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PinEvent {
    /// A digit was entered or removed.
    Changed {
        /// The digit that was added or removed.
        text: String,
        /// `true` when the digit was removed.
        is_deletion: bool,
    },
    /// The last cell was just filled.
    Completed,
    /// The confirm key was pressed.
    ConfirmPressed {
        /// Contiguous filled prefix, `None` when nothing was entered.
        full_text: Option<String>,
        /// Whether every cell was filled at the time.
        is_complete: bool,
    },
}

/// Receiver of [`PinEvent`]s.
///
/// Callbacks run synchronously on the owner thread, inside the key handler
/// that caused them. The listener gets no handle back to the widget, so it
/// cannot feed further input while a callback is running.
pub trait PinListener {
    /// A digit was entered (`is_deletion == false`) or removed.
    fn on_changed(&mut self, text: &str, is_deletion: bool);

    /// The last cell was filled. Always follows the matching `on_changed`.
    fn on_completed(&mut self);

    /// The confirm key was pressed, complete or not.
    fn on_confirm(&mut self, full_text: Option<&str>, is_complete: bool);
}

/// Route an event to the matching callback.
pub(crate) fn dispatch(listener: &mut dyn PinListener, event: &PinEvent) {
    match event {
        PinEvent::Changed { text, is_deletion } => listener.on_changed(text, *is_deletion),
        PinEvent::Completed => listener.on_completed(),
        PinEvent::ConfirmPressed {
            full_text,
            is_complete,
        } => listener.on_confirm(full_text.as_deref(), *is_complete),
    }
}

/// Forward events into a channel, for hosts that consume them elsewhere.
///
/// A disconnected receiver is not an error; the event is dropped.
impl PinListener for Sender<PinEvent> {
    fn on_changed(&mut self, text: &str, is_deletion: bool) {
        forward(
            self,
            PinEvent::Changed {
                text: text.to_string(),
                is_deletion,
            },
        );
    }

    fn on_completed(&mut self) {
        forward(self, PinEvent::Completed);
    }

    fn on_confirm(&mut self, full_text: Option<&str>, is_complete: bool) {
        forward(
            self,
            PinEvent::ConfirmPressed {
                full_text: full_text.map(str::to_string),
                is_complete,
            },
        );
    }
}

fn forward(tx: &Sender<PinEvent>, event: PinEvent) {
    if tx.send(event).is_err() {
        tracing::trace!("pin event receiver dropped");
    }
}
