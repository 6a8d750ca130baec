//! Widget configuration: colors, feature flags, dimensions and timing.
//!
//! A [`PinInputConfig`] is applied once when the widget is built and is never
//! mutated afterwards. It plays the role of a style/props object, so it can be
//! deserialized from whatever format the host keeps its styles in.

use crate::error::{PinError, PinResult};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use unicode_segmentation::UnicodeSegmentation;

/// True-color RGB representation.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Neutral gray (136, 136, 136), the default for borders, cursor and glyphs.
    pub const GRAY: Self = Self::new(0x88, 0x88, 0x88);

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

bitflags! {
    /// Optional widget features.
    ///
    /// ```
    /// use pinpad::PinFlags;
    /// let flags = PinFlags::CURSOR | PinFlags::MASK;
    /// assert!(flags.contains(PinFlags::MASK));
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct PinFlags: u8 {
        /// Draw a blinking cursor tick in the next empty cell.
        const CURSOR = 0b0000_0001;
        /// Draw the mask glyph instead of the entered digit.
        const MASK = 0b0000_0010;
    }
}

impl Default for PinFlags {
    fn default() -> Self {
        Self::CURSOR | Self::MASK
    }
}

impl std::fmt::Debug for PinFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// How cell borders are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BorderMode {
    /// An outline around the whole row with a divider between cells.
    #[default]
    Boxed,
    /// One segment under each cell.
    Underline,
}

/// A density-independent length.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dp(pub f32);

impl Dp {
    /// Convert to whole pixels at the given display density.
    ///
    /// Rounds half up, the same way platform toolkits convert dp values.
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn to_px(self, density: f32) -> u32 {
        let px = self.0.mul_add(density, 0.5);
        if px <= 0.0 {
            0
        } else {
            px as u32
        }
    }
}

/// Space reserved between the widget bounds and the cell row, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Insets {
    /// Left inset.
    pub left: u32,
    /// Top inset.
    pub top: u32,
    /// Right inset.
    pub right: u32,
    /// Bottom inset.
    pub bottom: u32,
}

impl Insets {
    /// No insets.
    pub const ZERO: Self = Self::uniform(0);

    /// The same inset on every side.
    pub const fn uniform(px: u32) -> Self {
        Self {
            left: px,
            top: px,
            right: px,
            bottom: px,
        }
    }

    /// Sum of left and right insets, saturating at `u32::MAX`.
    #[inline]
    pub const fn horizontal(&self) -> u32 {
        self.left.saturating_add(self.right)
    }
}

/// Immutable configuration of a PIN input widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinInputConfig {
    /// Number of cells. Fixed for the widget's lifetime.
    pub length: usize,
    /// Gap between adjacent cells.
    pub cell_padding: Dp,
    /// Cell size used when the host does not impose an exact width.
    pub default_cell_size: Dp,
    /// Stroke width of the outer border and underline. Dividers use half.
    pub border_width: Dp,
    /// Stroke width of the cursor tick.
    pub cursor_width: Dp,
    /// Border and underline color.
    pub border_color: Rgb,
    /// Cursor tick color.
    pub cursor_color: Rgb,
    /// Color of mask glyphs and digits.
    pub glyph_color: Rgb,
    /// Border rendering mode.
    pub border_mode: BorderMode,
    /// Cursor and masking switches.
    pub flags: PinFlags,
    /// Glyph drawn in place of a digit while masking is on.
    pub mask_glyph: String,
    /// Cursor blink half-period.
    pub blink_interval: Duration,
    /// Pixels per dp.
    pub density: f32,
    /// Padding around the cell row, in pixels.
    pub insets: Insets,
}

impl Default for PinInputConfig {
    fn default() -> Self {
        Self {
            length: 6,
            cell_padding: Dp(2.0),
            default_cell_size: Dp(20.0),
            border_width: Dp(2.0),
            cursor_width: Dp(2.0),
            border_color: Rgb::GRAY,
            cursor_color: Rgb::GRAY,
            glyph_color: Rgb::GRAY,
            border_mode: BorderMode::Boxed,
            flags: PinFlags::default(),
            mask_glyph: String::from("*"),
            blink_interval: Duration::from_millis(500),
            density: 1.0,
            insets: Insets::ZERO,
        }
    }
}

impl PinInputConfig {
    /// Set the number of cells.
    #[must_use]
    pub const fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Set the gap between cells.
    #[must_use]
    pub const fn with_cell_padding(mut self, padding: Dp) -> Self {
        self.cell_padding = padding;
        self
    }

    /// Set the cell size used for size-to-content measurement.
    #[must_use]
    pub const fn with_default_cell_size(mut self, size: Dp) -> Self {
        self.default_cell_size = size;
        self
    }

    /// Set the border mode.
    #[must_use]
    pub const fn with_border_mode(mut self, mode: BorderMode) -> Self {
        self.border_mode = mode;
        self
    }

    /// Replace the feature flags.
    #[must_use]
    pub const fn with_flags(mut self, flags: PinFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Set the border color.
    #[must_use]
    pub const fn with_border_color(mut self, color: Rgb) -> Self {
        self.border_color = color;
        self
    }

    /// Set the cursor color.
    #[must_use]
    pub const fn with_cursor_color(mut self, color: Rgb) -> Self {
        self.cursor_color = color;
        self
    }

    /// Set the mask glyph.
    #[must_use]
    pub fn with_mask_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.mask_glyph = glyph.into();
        self
    }

    /// Set the blink half-period.
    #[must_use]
    pub const fn with_blink_interval(mut self, interval: Duration) -> Self {
        self.blink_interval = interval;
        self
    }

    /// Set the display density.
    #[must_use]
    pub const fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    /// Set the insets.
    #[must_use]
    pub const fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    /// Whether the blinking cursor is enabled.
    #[inline]
    pub const fn cursor_enabled(&self) -> bool {
        self.flags.contains(PinFlags::CURSOR)
    }

    /// Whether digits are masked.
    #[inline]
    pub const fn mask_enabled(&self) -> bool {
        self.flags.contains(PinFlags::MASK)
    }

    /// Convert a dp value with this config's density.
    #[inline]
    pub fn px(&self, dp: Dp) -> u32 {
        dp.to_px(self.density)
    }

    /// Check the configuration can produce a usable widget.
    pub fn validate(&self) -> PinResult<()> {
        if self.length == 0 {
            return Err(PinError::invalid_config("length must be at least 1"));
        }
        if !(self.density.is_finite() && self.density > 0.0) {
            return Err(PinError::invalid_config(format!(
                "density must be a positive number, got {}",
                self.density
            )));
        }
        if self.mask_glyph.graphemes(true).count() != 1 {
            return Err(PinError::invalid_config(format!(
                "mask glyph must be a single character, got {:?}",
                self.mask_glyph
            )));
        }
        if self.blink_interval.is_zero() {
            return Err(PinError::invalid_config("blink interval must be non-zero"));
        }
        if self.px(self.default_cell_size) == 0 {
            return Err(PinError::invalid_config("default cell size rounds to zero pixels"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = PinInputConfig::default();
        assert_eq!(config.length, 6);
        assert_eq!(config.cell_padding, Dp(2.0));
        assert_eq!(config.border_mode, BorderMode::Boxed);
        assert!(config.cursor_enabled());
        assert!(config.mask_enabled());
        assert_eq!(config.blink_interval, Duration::from_millis(500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_dp_to_px_rounds_half_up() {
        assert_eq!(Dp(2.0).to_px(1.0), 2);
        assert_eq!(Dp(2.0).to_px(1.5), 3);
        assert_eq!(Dp(20.0).to_px(2.75), 55);
        assert_eq!(Dp(0.2).to_px(1.0), 0);
        assert_eq!(Dp(-4.0).to_px(1.0), 0);
    }

    #[test]
    fn test_validate_rejects_zero_length() {
        let config = PinInputConfig::default().with_length(0);
        assert!(matches!(
            config.validate(),
            Err(PinError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_validate_mask_glyph_is_one_grapheme() {
        assert!(PinInputConfig::default()
            .with_mask_glyph("●")
            .validate()
            .is_ok());
        // A flag emoji is several code points but one grapheme.
        assert!(PinInputConfig::default()
            .with_mask_glyph("🇯🇵")
            .validate()
            .is_ok());
        assert!(PinInputConfig::default()
            .with_mask_glyph("**")
            .validate()
            .is_err());
        assert!(PinInputConfig::default()
            .with_mask_glyph("")
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_density() {
        assert!(PinInputConfig::default().with_density(0.0).validate().is_err());
        assert!(PinInputConfig::default()
            .with_density(f32::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_flags_toggle() {
        let config = PinInputConfig::default().with_flags(PinFlags::CURSOR);
        assert!(config.cursor_enabled());
        assert!(!config.mask_enabled());
        assert_eq!(format!("{:?}", PinFlags::default()), "CURSOR | MASK");
    }

    #[test]
    fn test_deserialize_partial_props() {
        let config: PinInputConfig = serde_json::from_str(
            r##"{ "length": 4, "border_mode": "Underline", "mask_glyph": "#" }"##,
        )
        .unwrap();
        assert_eq!(config.length, 4);
        assert_eq!(config.border_mode, BorderMode::Underline);
        assert_eq!(config.mask_glyph, "#");
        assert_eq!(config.cell_padding, Dp(2.0));
        assert!(config.flags.contains(PinFlags::CURSOR));
    }

    #[test]
    fn test_rgb_from_hex() {
        assert_eq!(Rgb::from_u32(0x00FF_8000), Rgb::new(255, 128, 0));
        assert_eq!(format!("{:?}", Rgb::GRAY), "#888888");
    }
}
