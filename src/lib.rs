//! # Pinpad
//!
//! A fixed-length PIN entry widget.
//!
//! Pinpad renders N discrete cells, accepts digit input, tracks a cursor,
//! masks entered digits, and notifies a listener when the entry changes,
//! completes or is confirmed. It does not draw pixels itself: it produces
//! draw commands for any [`Surface`] the host provides. A terminal surface
//! is included.
//!
//! ## Core Concepts
//!
//! - **Cell store**: fixed-length cell array plus cursor, pure state
//! - **Input controller**: key presses to cell edits and notifications
//! - **Blink actor**: a ticker thread whose ticks are applied on the owner thread
//! - **Layout**: cell size from an exact width or a default cell size
//! - **Renderer**: borders, cursor and glyphs as an ordered command list
//!
//! ## Example
//!
//! ```rust
//! use pinpad::{InputEvent, KeyCode, PinInput, PinInputConfig, Widget};
//!
//! let mut pin = PinInput::new(PinInputConfig::default().with_length(4)).unwrap();
//! pin.request_focus();
//! for d in ['1', '2', '3', '4'] {
//!     pin.handle_input(&InputEvent::key(KeyCode::Char(d)));
//! }
//! assert!(pin.is_complete());
//! assert_eq!(pin.text().as_deref(), Some("1234"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod cells;
pub mod config;
pub mod error;
pub mod input;
pub mod layout;
pub mod render;
pub mod terminal;
pub mod widget;

// Re-exports for convenience
pub use actor::{BlinkPhase, BlinkScheduler, BlinkState, BlinkTick};
pub use cells::{CellStore, PinSnapshot};
pub use config::{BorderMode, Dp, Insets, PinFlags, PinInputConfig, Rgb};
pub use error::{PinError, PinResult};
pub use input::{InputController, InputEvent, KeyCode, KeyModifiers, KeyOutcome, PinEvent, PinListener};
pub use layout::{LayoutGeometry, MeasureSpec, Rect};
pub use render::{DrawCommand, Point, Renderer, Stroke, Surface, TextBounds, TextMeasure};
pub use terminal::TerminalSurface;
pub use widget::{PinInput, SoftKeyboard, Widget};
