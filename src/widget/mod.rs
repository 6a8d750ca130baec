//! PIN Widget: the assembled input component.
//!
//! [`PinInput`] owns one of each piece and exposes them through the
//! [`Widget`] trait, so a host drives it with the same four calls it uses for
//! any other component: `set_bounds`, `handle_input`, `render`, and the
//! redraw flag pair.
//!
//! # Example
//!
//! ```rust,ignore
//! use pinpad::{PinInput, PinInputConfig, Widget};
//!
//! let mut pin = PinInput::new(PinInputConfig::default().with_length(4))?;
//! pin.attach()?;
//! pin.request_focus();
//! loop {
//!     // route host events into pin.handle_input(&event)
//!     pin.pump_blink();
//!     if pin.needs_redraw() {
//!         pin.render(&mut surface);
//!         pin.clear_redraw();
//!     }
//! }
//! ```

mod pin_input;
mod traits;

pub use pin_input::PinInput;
pub use traits::{SoftKeyboard, Widget};
