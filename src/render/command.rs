//! Draw commands and the surface that paints them.

use crate::config::Rgb;

/// A point on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position, growing downwards.
    pub y: f32,
}

impl Point {
    /// Create a point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Line style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Line thickness.
    pub width: f32,
    /// Line color.
    pub color: Rgb,
}

/// Bounding box of a rendered string relative to its baseline origin.
///
/// `top` is negative for glyphs that rise above the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextBounds {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Right edge.
    pub right: f32,
    /// Bottom edge.
    pub bottom: f32,
}

impl TextBounds {
    /// Vertical extent.
    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Horizontal extent.
    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }
}

/// One primitive to paint.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A straight line segment.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Line style.
        stroke: Stroke,
    },
    /// A string horizontally centered on `x`.
    Text {
        /// The string to draw.
        text: String,
        /// Horizontal center.
        x: f32,
        /// Baseline.
        baseline: f32,
        /// Text size.
        size: f32,
        /// Text color.
        color: Rgb,
    },
}

/// Text measurement, the only query the renderer makes of its surface.
pub trait TextMeasure {
    /// Bounds of `text` drawn at `size`, relative to its baseline origin.
    fn measure_text(&self, text: &str, size: f32) -> TextBounds;
}

/// The drawing primitives the widget needs from its host.
pub trait Surface: TextMeasure {
    /// Draw a line segment.
    fn draw_line(&mut self, from: Point, to: Point, stroke: Stroke);

    /// Draw `text` horizontally centered on `x` with its baseline at `baseline`.
    fn draw_text(&mut self, text: &str, x: f32, baseline: f32, size: f32, color: Rgb);
}

impl DrawCommand {
    /// Paint this command onto a surface.
    pub fn paint(&self, surface: &mut dyn Surface) {
        match self {
            Self::Line { from, to, stroke } => surface.draw_line(*from, *to, *stroke),
            Self::Text {
                text,
                x,
                baseline,
                size,
                color,
            } => surface.draw_text(text, *x, *baseline, *size, *color),
        }
    }
}

/// Paint a list of commands in order.
pub fn paint_all(commands: &[DrawCommand], surface: &mut dyn Surface) {
    for command in commands {
        command.paint(surface);
    }
}
