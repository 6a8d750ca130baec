//! Input module: from raw key presses to cell edits and notifications.
//!
//! ```text
//! crossterm Event ──convert──▶ InputEvent ──▶ InputController ──▶ CellStore
//!                                                   │
//!                                                   ▼
//!                                             PinListener
//! ```

mod controller;
mod convert;
mod event;
mod listener;

pub use controller::{InputController, KeyOutcome};
pub use convert::convert_event;
pub use event::{InputEvent, KeyCode, KeyModifiers};
pub use listener::{PinEvent, PinListener};
