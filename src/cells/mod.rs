//! Cells module: the pure input state of the widget.
//!
//! - [`CellStore`]: fixed-length cell array plus cursor
//! - [`PinSnapshot`]: serializable copy of that state for suspend/resume

mod snapshot;
mod store;

pub use snapshot::PinSnapshot;
pub use store::CellStore;
