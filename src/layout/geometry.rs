//! Geometry: cell size and per-cell positions.
//!
//! All arithmetic saturates at `u32::MAX`; oversized configurations produce
//! clipped geometry rather than overflow.
//!
//! An exact width, after the horizontal insets, is shared out as
//!
//! ```text
//! width = cell_size * length + cell_padding * (length - 1)
//! ```
//!
//! and the height is one cell. Sizing to content runs the same equation the
//! other way from the default cell size. See [`MeasureSpec`].

use crate::config::{Insets, PinInputConfig};

/// How much horizontal space the host offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureSpec {
    /// The widget must be exactly this wide; cell size follows from it.
    Exact(u32),
    /// The widget may be up to this wide; it sizes to content.
    AtMost(u32),
    /// No constraint; the widget sizes to content.
    Unspecified,
}

/// Resolved geometry of the cell row, in pixels.
///
/// Only recomputed when the widget's bounds change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutGeometry {
    /// Side of one square cell. Always at least 1.
    pub cell_size: u32,
    /// Gap between adjacent cells.
    pub cell_padding: u32,
    /// Number of cells.
    pub length: u32,
    /// Padding around the row.
    pub insets: Insets,
    /// Measured width.
    pub width: u32,
    /// Measured height.
    pub height: u32,
}

impl LayoutGeometry {
    /// Measure the row for the given config and width constraint.
    #[allow(clippy::cast_possible_truncation)]
    pub fn measure(config: &PinInputConfig, spec: MeasureSpec) -> Self {
        let length = u32::try_from(config.length.max(1)).unwrap_or(u32::MAX);
        let cell_padding = config.px(config.cell_padding);
        let insets = config.insets;
        let gaps = cell_padding.saturating_mul(length - 1);

        let (cell_size, width) = match spec {
            MeasureSpec::Exact(width) => {
                let available = width.saturating_sub(insets.horizontal().saturating_add(gaps));
                let cell_size = available / length;
                if cell_size == 0 {
                    tracing::warn!(width, length, "exact width too small for cells, clamping to 1px");
                }
                (cell_size.max(1), width)
            }
            MeasureSpec::AtMost(_) | MeasureSpec::Unspecified => {
                let cell_size = config.px(config.default_cell_size).max(1);
                let width = cell_size.saturating_mul(length).saturating_add(gaps);
                if width == u32::MAX {
                    tracing::warn!(cell_size, length, "content width saturated");
                }
                (cell_size, width)
            }
        };

        Self {
            cell_size,
            cell_padding,
            length,
            insets,
            width,
            height: cell_size,
        }
    }

    /// Text size of mask glyphs and digits.
    #[inline]
    pub const fn cipher_glyph_size(&self) -> u32 {
        self.cell_size / 2
    }

    /// Length of the cursor tick.
    #[inline]
    pub const fn cursor_tick_height(&self) -> u32 {
        self.cell_size / 2
    }

    /// Distance from one cell's left edge to the next one's.
    #[inline]
    pub const fn pitch(&self) -> u32 {
        self.cell_size.saturating_add(self.cell_padding)
    }

    /// Left edge of cell `index`.
    #[inline]
    pub const fn cell_left(&self, index: u32) -> u32 {
        self.insets
            .left
            .saturating_add(self.pitch().saturating_mul(index))
    }

    /// Horizontal center of cell `index`.
    #[inline]
    pub const fn cell_center_x(&self, index: u32) -> u32 {
        self.cell_left(index).saturating_add(self.cell_size / 2)
    }

    /// Divider between cell `index - 1` and cell `index`, in the middle of
    /// the padding gap. `index` must be at least 1.
    #[inline]
    pub const fn divider_x(&self, index: u32) -> u32 {
        self.cell_left(index).saturating_sub(self.cell_padding / 2)
    }

    /// Bottom edge of the cells.
    #[inline]
    pub const fn cell_bottom(&self) -> u32 {
        self.insets.top.saturating_add(self.cell_size)
    }
}
