//! Render module: draw commands, the surface abstraction, and the renderer.
//!
//! The renderer never paints directly. It produces a `Vec<DrawCommand>`
//! that the host replays onto any [`Surface`] implementation:
//!
//! ```text
//! CellStore ─┐
//! Geometry  ─┼──▶ Renderer ──▶ [DrawCommand] ──paint_all──▶ Surface
//! Blink     ─┘
//! ```

mod command;
mod renderer;

pub use command::{paint_all, DrawCommand, Point, Stroke, Surface, TextBounds, TextMeasure};
pub use renderer::{Frame, Renderer};
