//! Actor Model: the one concurrent actor in the widget.
//!
//! The blink scheduler is the only code that runs off the owner thread. It
//! communicates strictly through a crossbeam channel:
//!
//! ```text
//! ┌──────────────┐     BlinkTick       ┌──────────────┐
//! │ Blink Thread │ ─────────────────▶  │ Owner Thread │──▶ BlinkState
//! └──────────────┘                     │ (input, draw)│
//!        ▲                             └──────────────┘
//!        │            stop + join             │
//!        └────────────────────────────────────┘
//! ```

mod blink;

pub use blink::{BlinkPhase, BlinkScheduler, BlinkState, BlinkTick};
