//! Renderer: maps widget state to an ordered list of draw commands.
//!
//! Output order is borders, cursor, glyphs. The renderer is a pure function
//! of its inputs; nothing here is cached between frames.

use super::command::{DrawCommand, Point, Stroke, TextMeasure};
use crate::actor::BlinkState;
use crate::cells::CellStore;
use crate::config::{BorderMode, PinInputConfig, Rgb};
use crate::layout::LayoutGeometry;

/// Everything a frame depends on.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Cell values and cursor.
    pub store: &'a CellStore,
    /// Resolved geometry.
    pub geometry: &'a LayoutGeometry,
    /// Cursor blink phase.
    pub blink: BlinkState,
    /// Whether the widget has input focus.
    pub focused: bool,
}

/// Resolved drawing style, taken from the widget config once.
#[derive(Debug, Clone)]
pub struct Renderer {
    border_mode: BorderMode,
    border: Stroke,
    divider: Stroke,
    cursor: Stroke,
    glyph_color: Rgb,
    mask_glyph: Option<String>,
    cursor_enabled: bool,
}

#[allow(clippy::cast_precision_loss)]
fn px(value: u32) -> f32 {
    value as f32
}

impl Renderer {
    /// Resolve colors, stroke widths and flags from `config`.
    pub fn new(config: &PinInputConfig) -> Self {
        let border_width = px(config.px(config.border_width));
        Self {
            border_mode: config.border_mode,
            border: Stroke {
                width: border_width,
                color: config.border_color,
            },
            divider: Stroke {
                width: border_width / 2.0,
                color: config.border_color,
            },
            cursor: Stroke {
                width: px(config.px(config.cursor_width)),
                color: config.cursor_color,
            },
            glyph_color: config.glyph_color,
            mask_glyph: config.mask_enabled().then(|| config.mask_glyph.clone()),
            cursor_enabled: config.cursor_enabled(),
        }
    }

    /// Produce the draw commands for one frame.
    pub fn render<M>(&self, frame: &Frame<'_>, metrics: &M) -> Vec<DrawCommand>
    where
        M: TextMeasure + ?Sized,
    {
        let mut commands = Vec::with_capacity(frame.store.len() * 2 + 4);
        match self.border_mode {
            BorderMode::Boxed => self.draw_boxed(frame.geometry, &mut commands),
            BorderMode::Underline => self.draw_underline(frame.geometry, &mut commands),
        }
        if self.cursor_visible(frame) {
            self.draw_cursor(frame, &mut commands);
        }
        self.draw_glyphs(frame, metrics, &mut commands);
        commands
    }

    /// Whether the cursor tick is painted in this frame.
    pub fn cursor_visible(&self, frame: &Frame<'_>) -> bool {
        frame.blink.is_visible() && self.cursor_enabled && !frame.store.is_full() && frame.focused
    }

    fn line(from: (u32, u32), to: (u32, u32), stroke: Stroke) -> DrawCommand {
        DrawCommand::Line {
            from: Point::new(px(from.0), px(from.1)),
            to: Point::new(px(to.0), px(to.1)),
            stroke,
        }
    }

    fn draw_boxed(&self, geometry: &LayoutGeometry, out: &mut Vec<DrawCommand>) {
        let width = geometry.width;
        let height = geometry.cell_size;

        out.push(Self::line((0, 0), (width, 0), self.border));
        out.push(Self::line((0, height), (width, height), self.border));
        out.push(Self::line((0, 0), (0, height), self.border));
        out.push(Self::line((width, 0), (width, height), self.border));

        // Dividers run the full outer height, strokes included.
        let divider_bottom = self.border.width
            + px(geometry
                .cell_bottom()
                .saturating_add(geometry.insets.bottom));
        for i in 1..geometry.length {
            let x = px(geometry.divider_x(i));
            out.push(DrawCommand::Line {
                from: Point::new(x, 0.0),
                to: Point::new(x, divider_bottom),
                stroke: self.divider,
            });
        }
    }

    fn draw_underline(&self, geometry: &LayoutGeometry, out: &mut Vec<DrawCommand>) {
        let y = geometry.cell_bottom();
        for i in 0..geometry.length {
            let left = geometry.cell_left(i);
            let right = left.saturating_add(geometry.cell_size);
            out.push(Self::line((left, y), (right, y), self.border));
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn draw_cursor(&self, frame: &Frame<'_>, out: &mut Vec<DrawCommand>) {
        let geometry = frame.geometry;
        let tick = geometry.cursor_tick_height();
        let x = geometry.cell_center_x(frame.store.cursor() as u32);
        let top = geometry
            .insets
            .top
            .saturating_add((geometry.cell_size - tick) / 2);
        out.push(Self::line((x, top), (x, top.saturating_add(tick)), self.cursor));
    }

    #[allow(clippy::cast_possible_truncation)]
    fn draw_glyphs<M>(&self, frame: &Frame<'_>, metrics: &M, out: &mut Vec<DrawCommand>)
    where
        M: TextMeasure + ?Sized,
    {
        let geometry = frame.geometry;
        let size = px(geometry.cipher_glyph_size());

        // Every glyph shares the mask glyph's vertical metrics so digits and
        // masks sit on the same baseline.
        let reference = self.mask_glyph.as_deref().unwrap_or("*");
        let bounds = metrics.measure_text(reference, size);
        let baseline = px(geometry.insets.top) + px(geometry.height) / 2.0 + bounds.height() / 2.0
            - bounds.bottom;

        for (i, cell) in frame.store.iter().enumerate() {
            let Some(value) = cell else { continue };
            let text = self
                .mask_glyph
                .clone()
                .unwrap_or_else(|| value.to_string());
            out.push(DrawCommand::Text {
                text,
                x: px(geometry.cell_center_x(i as u32)),
                baseline,
                size,
                color: self.glyph_color,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::PinSnapshot;
    use crate::config::{Dp, PinFlags};
    use crate::layout::MeasureSpec;
    use crate::render::TextBounds;
    use pretty_assertions::assert_eq;

    /// Glyphs are 3 units tall: 2 above the baseline, 1 below.
    struct FixedMetrics;

    impl TextMeasure for FixedMetrics {
        fn measure_text(&self, text: &str, _size: f32) -> TextBounds {
            TextBounds {
                left: 0.0,
                top: -2.0,
                right: px(u32::try_from(text.chars().count()).unwrap()),
                bottom: 1.0,
            }
        }
    }

    fn visible() -> BlinkState {
        let mut blink = BlinkState::default();
        blink.toggle();
        blink
    }

    fn setup(config: &PinInputConfig, digits: &str) -> (CellStore, LayoutGeometry) {
        let mut store = CellStore::new(config.length).unwrap();
        for d in digits.chars() {
            store.set_at(d);
        }
        let geometry = LayoutGeometry::measure(config, MeasureSpec::Exact(42));
        (store, geometry)
    }

    fn lines(commands: &[DrawCommand]) -> Vec<((f32, f32), (f32, f32))> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Line { from, to, .. } => Some(((from.x, from.y), (to.x, to.y))),
                DrawCommand::Text { .. } => None,
            })
            .collect()
    }

    fn texts(commands: &[DrawCommand]) -> Vec<(String, f32, f32)> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text {
                    text, x, baseline, ..
                } => Some((text.clone(), *x, *baseline)),
                DrawCommand::Line { .. } => None,
            })
            .collect()
    }

    fn four_cells() -> PinInputConfig {
        PinInputConfig::default()
            .with_length(4)
            .with_cell_padding(Dp(2.0))
    }

    #[test]
    fn test_boxed_borders_and_dividers() {
        let config = four_cells();
        let (store, geometry) = setup(&config, "");
        let frame = Frame {
            store: &store,
            geometry: &geometry,
            blink: BlinkState::default(),
            focused: false,
        };
        let commands = Renderer::new(&config).render(&frame, &FixedMetrics);
        assert_eq!(
            lines(&commands),
            vec![
                ((0.0, 0.0), (42.0, 0.0)),
                ((0.0, 9.0), (42.0, 9.0)),
                ((0.0, 0.0), (0.0, 9.0)),
                ((42.0, 0.0), (42.0, 9.0)),
                ((10.0, 0.0), (10.0, 11.0)),
                ((21.0, 0.0), (21.0, 11.0)),
                ((32.0, 0.0), (32.0, 11.0)),
            ]
        );
        match &commands[4] {
            DrawCommand::Line { stroke, .. } => {
                assert_eq!(stroke.width, 1.0);
                assert_eq!(stroke.color, Rgb::GRAY);
            }
            DrawCommand::Text { .. } => panic!("expected divider"),
        }
    }

    #[test]
    fn test_underline_spans_cells_only() {
        let config = four_cells().with_border_mode(BorderMode::Underline);
        let (store, geometry) = setup(&config, "");
        let frame = Frame {
            store: &store,
            geometry: &geometry,
            blink: BlinkState::default(),
            focused: false,
        };
        let commands = Renderer::new(&config).render(&frame, &FixedMetrics);
        assert_eq!(
            lines(&commands),
            vec![
                ((0.0, 9.0), (9.0, 9.0)),
                ((11.0, 9.0), (20.0, 9.0)),
                ((22.0, 9.0), (31.0, 9.0)),
                ((33.0, 9.0), (42.0, 9.0)),
            ]
        );
    }

    #[test]
    fn test_cursor_conditions() {
        let config = four_cells().with_border_mode(BorderMode::Underline);
        let renderer = Renderer::new(&config);
        let (store, geometry) = setup(&config, "12");

        let frame = Frame {
            store: &store,
            geometry: &geometry,
            blink: visible(),
            focused: true,
        };
        assert!(renderer.cursor_visible(&frame));
        let commands = renderer.render(&frame, &FixedMetrics);
        // cell 2 center = 4 + 22, tick 4 long starting at (9 - 4) / 2
        assert_eq!(lines(&commands)[4], ((26.0, 2.0), (26.0, 6.0)));

        let hidden_phase = Frame {
            blink: BlinkState::default(),
            ..frame
        };
        assert!(!renderer.cursor_visible(&hidden_phase));

        let unfocused = Frame {
            focused: false,
            ..frame
        };
        assert!(!renderer.cursor_visible(&unfocused));

        let (full, _) = setup(&config, "1234");
        let complete = Frame {
            store: &full,
            ..frame
        };
        assert!(!renderer.cursor_visible(&complete));

        let no_cursor = Renderer::new(&config.clone().with_flags(PinFlags::MASK));
        assert!(!no_cursor.cursor_visible(&frame));
    }

    #[test]
    fn test_masked_glyphs() {
        let config = four_cells().with_border_mode(BorderMode::Underline);
        let (store, geometry) = setup(&config, "73");
        let frame = Frame {
            store: &store,
            geometry: &geometry,
            blink: BlinkState::default(),
            focused: true,
        };
        let commands = Renderer::new(&config).render(&frame, &FixedMetrics);
        // baseline = 0 + 9/2 + 3/2 - 1
        assert_eq!(
            texts(&commands),
            vec![("*".to_string(), 4.0, 5.0), ("*".to_string(), 15.0, 5.0)]
        );
    }

    #[test]
    fn test_unmasked_glyphs() {
        let config = four_cells()
            .with_border_mode(BorderMode::Underline)
            .with_flags(PinFlags::CURSOR);
        let (store, geometry) = setup(&config, "739");
        let frame = Frame {
            store: &store,
            geometry: &geometry,
            blink: BlinkState::default(),
            focused: true,
        };
        let commands = Renderer::new(&config).render(&frame, &FixedMetrics);
        let drawn: Vec<String> = texts(&commands).into_iter().map(|t| t.0).collect();
        assert_eq!(drawn, vec!["7", "3", "9"]);
        match commands.last() {
            Some(DrawCommand::Text { size, .. }) => assert_eq!(*size, 4.0),
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_glyphs_follow_cells_not_cursor() {
        let config = four_cells().with_border_mode(BorderMode::Underline);
        let (mut store, geometry) = setup(&config, "");
        store
            .restore(&PinSnapshot {
                cells: vec![Some('1'), None, Some('3'), None],
                cursor: 1,
            })
            .unwrap();
        let frame = Frame {
            store: &store,
            geometry: &geometry,
            blink: BlinkState::default(),
            focused: false,
        };
        let xs: Vec<f32> = texts(&Renderer::new(&config).render(&frame, &FixedMetrics))
            .into_iter()
            .map(|t| t.1)
            .collect();
        assert_eq!(xs, vec![4.0, 26.0]);
    }

    #[test]
    fn test_command_order() {
        let config = four_cells();
        let (store, geometry) = setup(&config, "5");
        let frame = Frame {
            store: &store,
            geometry: &geometry,
            blink: visible(),
            focused: true,
        };
        let commands = Renderer::new(&config).render(&frame, &FixedMetrics);
        // 4 edges + 3 dividers + cursor + 1 glyph
        assert_eq!(commands.len(), 9);
        assert!(matches!(
            &commands[7],
            DrawCommand::Line { stroke, .. } if stroke.width == 2.0
        ));
        assert!(matches!(&commands[8], DrawCommand::Text { .. }));
    }
}
