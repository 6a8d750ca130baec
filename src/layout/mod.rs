//! Layout module: bounds and cell geometry.
//!
//! Geometry is computed when the bounds change and then read by every draw.
//! Input events never touch it.

mod geometry;
mod rect;

pub use geometry::{LayoutGeometry, MeasureSpec};
pub use rect::Rect;
