//! `TerminalSurface`: rasterizes draw commands onto a character grid.
//!
//! One surface unit is one terminal cell. Axis-aligned lines become
//! box-drawing characters; where lines meet, the junction glyph is chosen
//! from the set of arms touching that cell, so an outline drawn as four
//! separate edges still gets proper corners.
//!
//! [`TerminalSurface::render_to`] queues crossterm commands into any writer.
//! Pass a `Vec<u8>` and write it out once to paint a frame in a single
//! syscall without flicker.

use crate::config::Rgb;
use crate::error::PinResult;
use crate::layout::Rect;
use crate::render::{Point, Stroke, Surface, TextBounds, TextMeasure};
use bitflags::bitflags;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::Write;
use unicode_width::UnicodeWidthStr;

bitflags! {
    /// Line segments leaving a cell.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
    struct Arms: u8 {
        const LEFT = 0b0001;
        const RIGHT = 0b0010;
        const UP = 0b0100;
        const DOWN = 0b1000;
    }
}

impl Arms {
    fn glyph(self) -> char {
        const L: u8 = Arms::LEFT.bits();
        const R: u8 = Arms::RIGHT.bits();
        const U: u8 = Arms::UP.bits();
        const D: u8 = Arms::DOWN.bits();
        match self.bits() {
            x if x == R | D => '┌',
            x if x == L | D => '┐',
            x if x == R | U => '└',
            x if x == L | U => '┘',
            x if x == L | R | D => '┬',
            x if x == L | R | U => '┴',
            x if x == U | D | R => '├',
            x if x == U | D | L => '┤',
            x if x == L | R | U | D => '┼',
            x if x & (U | D) != 0 && x & (L | R) == 0 => '│',
            _ => '─',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Empty,
    Line { arms: Arms, fg: Rgb },
    Glyph { ch: char, fg: Rgb },
    /// Right half of a double-width glyph.
    Continuation,
}

/// A character grid positioned somewhere on the terminal.
#[derive(Debug, Clone)]
pub struct TerminalSurface {
    area: Rect,
    slots: Vec<Slot>,
}

#[allow(clippy::cast_possible_truncation)]
fn round(v: f32) -> i64 {
    v.round() as i64
}

impl TerminalSurface {
    /// Create a blank surface covering `area` of the terminal.
    pub fn new(area: Rect) -> Self {
        Self {
            area,
            slots: vec![Slot::Empty; area.width as usize * area.height as usize],
        }
    }

    /// Terminal area covered.
    #[inline]
    pub const fn area(&self) -> Rect {
        self.area
    }

    /// Blank every cell.
    pub fn clear(&mut self) {
        self.slots.fill(Slot::Empty);
    }

    fn index(&self, col: i64, row: i64) -> Option<usize> {
        let col = usize::try_from(col).ok()?;
        let row = usize::try_from(row).ok()?;
        let width = self.area.width as usize;
        (col < width && row < self.area.height as usize).then(|| row * width + col)
    }

    fn add_arms(&mut self, col: i64, row: i64, arms: Arms, fg: Rgb) {
        let Some(i) = self.index(col, row) else { return };
        self.slots[i] = match self.slots[i] {
            Slot::Line { arms: existing, .. } => Slot::Line {
                arms: existing | arms,
                fg,
            },
            Slot::Empty => Slot::Line { arms, fg },
            glyph @ (Slot::Glyph { .. } | Slot::Continuation) => glyph,
        };
    }

    /// Character at a grid position, or `None` if blank or outside.
    pub fn char_at(&self, col: u32, row: u32) -> Option<char> {
        let i = self.index(i64::from(col), i64::from(row))?;
        match self.slots[i] {
            Slot::Line { arms, .. } => Some(arms.glyph()),
            Slot::Glyph { ch, .. } => Some(ch),
            Slot::Empty | Slot::Continuation => None,
        }
    }

    /// Foreground color at a grid position.
    pub fn color_at(&self, col: u32, row: u32) -> Option<Rgb> {
        let i = self.index(i64::from(col), i64::from(row))?;
        match self.slots[i] {
            Slot::Line { fg, .. } | Slot::Glyph { fg, .. } => Some(fg),
            Slot::Empty | Slot::Continuation => None,
        }
    }

    /// One row as plain text, blanks as spaces, trailing blanks trimmed.
    pub fn row_text(&self, row: u32) -> String {
        let mut text: String = (0..self.area.width)
            .filter(|&col| {
                !matches!(
                    self.index(i64::from(col), i64::from(row))
                        .map(|i| self.slots[i]),
                    Some(Slot::Continuation)
                )
            })
            .map(|col| self.char_at(col, row).unwrap_or(' '))
            .collect();
        text.truncate(text.trim_end().len());
        text
    }

    /// Every row as plain text.
    pub fn lines(&self) -> Vec<String> {
        (0..self.area.height).map(|row| self.row_text(row)).collect()
    }

    /// Queue the commands that paint the whole grid at its terminal area.
    ///
    /// Nothing is flushed. Rows past the terminal's addressable range are
    /// skipped.
    pub fn render_to<W: Write>(&self, out: &mut W) -> PinResult<()> {
        let width = self.area.width as usize;
        for (row, slots) in (self.area.y..).zip(self.slots.chunks(width.max(1))) {
            let (Ok(col), Ok(row)) = (u16::try_from(self.area.x), u16::try_from(row)) else {
                continue;
            };
            queue!(out, MoveTo(col, row))?;
            let mut current_fg = None;
            for slot in slots {
                let (ch, fg) = match *slot {
                    Slot::Empty => (' ', None),
                    Slot::Line { arms, fg } => (arms.glyph(), Some(fg)),
                    Slot::Glyph { ch, fg } => (ch, Some(fg)),
                    Slot::Continuation => continue,
                };
                if let Some(fg) = fg.filter(|fg| current_fg != Some(*fg)) {
                    queue!(
                        out,
                        SetForegroundColor(Color::Rgb {
                            r: fg.r,
                            g: fg.g,
                            b: fg.b,
                        })
                    )?;
                    current_fg = Some(fg);
                }
                queue!(out, Print(ch))?;
            }
            queue!(out, ResetColor)?;
        }
        Ok(())
    }
}

impl TextMeasure for TerminalSurface {
    /// Text occupies the single row just above its baseline.
    #[allow(clippy::cast_precision_loss)]
    fn measure_text(&self, text: &str, _size: f32) -> TextBounds {
        TextBounds {
            left: 0.0,
            top: -1.0,
            right: text.width() as f32,
            bottom: 0.0,
        }
    }
}

impl Surface for TerminalSurface {
    fn draw_line(&mut self, from: Point, to: Point, stroke: Stroke) {
        let (x0, y0, x1, y1) = (round(from.x), round(from.y), round(to.x), round(to.y));
        if y0 == y1 {
            let (start, end) = (x0.min(x1), x0.max(x1));
            let last_col = i64::from(self.area.width) - 1;
            for col in start.max(0)..=end.min(last_col) {
                let mut arms = Arms::empty();
                if col > start {
                    arms |= Arms::LEFT;
                }
                if col < end {
                    arms |= Arms::RIGHT;
                }
                if start == end {
                    arms = Arms::LEFT | Arms::RIGHT;
                }
                self.add_arms(col, y0, arms, stroke.color);
            }
        } else if x0 == x1 {
            let (start, end) = (y0.min(y1), y0.max(y1));
            let last_row = i64::from(self.area.height) - 1;
            for row in start.max(0)..=end.min(last_row) {
                let mut arms = Arms::empty();
                if row > start {
                    arms |= Arms::UP;
                }
                if row < end {
                    arms |= Arms::DOWN;
                }
                if start == end {
                    arms = Arms::UP | Arms::DOWN;
                }
                self.add_arms(x0, row, arms, stroke.color);
            }
        } else {
            tracing::trace!(?from, ?to, "diagonal line not representable, skipped");
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn draw_text(&mut self, text: &str, x: f32, baseline: f32, _size: f32, color: Rgb) {
        let row = round(baseline) - 1;
        let mut col = round(x - text.width() as f32 / 2.0);
        for ch in text.chars() {
            let width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
            if width == 0 {
                continue;
            }
            if let Some(i) = self.index(col, row) {
                self.slots[i] = Slot::Glyph { ch, fg: color };
            }
            if width == 2 {
                if let Some(i) = self.index(col + 1, row) {
                    self.slots[i] = Slot::Continuation;
                }
            }
            col += i64::try_from(width).unwrap_or(1);
        }
    }
}
