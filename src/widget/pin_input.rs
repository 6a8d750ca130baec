//! PIN Input Widget: fixed-length digit entry with masked cells.
//!
//! Ties together the cell state, the input controller, the blink
//! scheduler, the layout and the renderer. Everything here runs on the
//! owner thread; the only cross-thread traffic is blink ticks, which are
//! pulled in by [`PinInput::pump_blink`].

use super::traits::{SoftKeyboard, Widget};
use crate::actor::{BlinkScheduler, BlinkState, BlinkTick};
use crate::cells::{CellStore, PinSnapshot};
use crate::config::PinInputConfig;
use crate::error::PinResult;
use crate::input::{InputController, InputEvent, KeyCode, KeyModifiers, KeyOutcome, PinListener};
use crate::layout::{LayoutGeometry, MeasureSpec, Rect};
use crate::render::{paint_all, DrawCommand, Frame, Renderer, Surface, TextMeasure};

/// A fixed-length PIN entry widget.
pub struct PinInput {
    /// Configuration.
    config: PinInputConfig,
    /// Cells and listener.
    controller: InputController,
    /// Resolved drawing style.
    renderer: Renderer,
    /// Cell geometry, recomputed on bounds change.
    geometry: LayoutGeometry,
    /// Widget bounds.
    bounds: Rect,
    /// Cursor blink phase.
    blink: BlinkState,
    /// Running while attached.
    scheduler: Option<BlinkScheduler>,
    /// Whether this widget has input focus.
    focused: bool,
    /// Host keyboard, if any.
    keyboard: Option<Box<dyn SoftKeyboard>>,
    /// Needs redraw flag.
    dirty: bool,
}

impl std::fmt::Debug for PinInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinInput")
            .field("controller", &self.controller)
            .field("geometry", &self.geometry)
            .field("bounds", &self.bounds)
            .field("blink", &self.blink)
            .field("attached", &self.scheduler.is_some())
            .field("focused", &self.focused)
            .finish_non_exhaustive()
    }
}

impl PinInput {
    /// Build a widget from a validated configuration.
    ///
    /// The widget starts detached, unfocused and sized to content.
    pub fn new(config: PinInputConfig) -> PinResult<Self> {
        config.validate()?;
        let controller = InputController::new(config.length)?;
        let renderer = Renderer::new(&config);
        let geometry = LayoutGeometry::measure(&config, MeasureSpec::Unspecified);
        let bounds = Rect::from_size(geometry.width, geometry.height);
        Ok(Self {
            config,
            controller,
            renderer,
            geometry,
            bounds,
            blink: BlinkState::default(),
            scheduler: None,
            focused: false,
            keyboard: None,
            dirty: true,
        })
    }

    /// Configuration the widget was built with.
    #[inline]
    pub const fn config(&self) -> &PinInputConfig {
        &self.config
    }

    /// Read access to the cells.
    #[inline]
    pub const fn store(&self) -> &CellStore {
        self.controller.store()
    }

    /// Current cell geometry.
    #[inline]
    pub const fn geometry(&self) -> &LayoutGeometry {
        &self.geometry
    }

    /// Current blink state.
    #[inline]
    pub const fn blink(&self) -> BlinkState {
        self.blink
    }

    /// Entered digits, up to the first empty cell.
    pub fn text(&self) -> Option<String> {
        self.store().full_text()
    }

    /// Whether every cell is filled.
    pub const fn is_complete(&self) -> bool {
        self.store().is_full()
    }

    /// Check if focused.
    #[inline]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the blink scheduler is running.
    #[inline]
    pub const fn is_attached(&self) -> bool {
        self.scheduler.is_some()
    }

    /// Register the listener. The previous one, if any, is dropped.
    pub fn set_listener(&mut self, listener: impl PinListener + 'static) {
        self.controller.set_listener(Box::new(listener));
    }

    /// Register the host keyboard.
    pub fn set_soft_keyboard(&mut self, keyboard: impl SoftKeyboard + 'static) {
        self.keyboard = Some(Box::new(keyboard));
    }

    /// Start blinking. Call when the widget becomes part of a live UI.
    ///
    /// Resets the blink phase. Does nothing if already attached.
    pub fn attach(&mut self) -> PinResult<()> {
        if self.scheduler.is_some() {
            return Ok(());
        }
        self.blink.reset();
        self.scheduler = Some(BlinkScheduler::start(self.config.blink_interval)?);
        self.dirty = true;
        tracing::debug!(length = self.config.length, "pin input attached");
        Ok(())
    }

    /// Stop blinking and wait for the blink thread to exit.
    ///
    /// Once this returns no further blink tick reaches the widget.
    pub fn detach(&mut self) {
        if let Some(mut scheduler) = self.scheduler.take() {
            scheduler.stop();
            self.blink.reset();
            tracing::debug!("pin input detached");
        }
    }

    /// Apply every blink tick that has arrived. Returns `true` if a redraw
    /// is needed.
    ///
    /// The phase always advances, but a phase change only requests a redraw
    /// while the cursor can actually be painted (enabled, focused, and the
    /// entry incomplete).
    pub fn pump_blink(&mut self) -> bool {
        let Some(scheduler) = &self.scheduler else {
            return false;
        };
        let mut changed = false;
        for tick in scheduler.pending() {
            changed |= self.blink.apply(tick);
        }
        self.mark_blink(changed)
    }

    /// Apply one tick received through [`PinInput::blink_receiver`].
    pub fn apply_blink_tick(&mut self, tick: BlinkTick) -> bool {
        if self.scheduler.is_none() {
            return false;
        }
        let changed = self.blink.apply(tick);
        self.mark_blink(changed)
    }

    fn mark_blink(&mut self, changed: bool) -> bool {
        let redraw = changed && self.cursor_shown();
        self.dirty |= redraw;
        redraw
    }

    /// Whether the cursor is painted on the visible blink phase.
    fn cursor_shown(&self) -> bool {
        self.config.cursor_enabled() && self.focused && !self.is_complete()
    }

    /// Tick receiver for `select!`-driven loops, while attached.
    pub fn blink_receiver(&self) -> Option<&crossbeam_channel::Receiver<BlinkTick>> {
        self.scheduler.as_ref().map(BlinkScheduler::receiver)
    }

    /// Compute geometry for a width constraint and return the measured
    /// `(width, height)`.
    pub fn measure(&mut self, spec: MeasureSpec) -> (u32, u32) {
        self.geometry = LayoutGeometry::measure(&self.config, spec);
        self.dirty = true;
        (self.geometry.width, self.geometry.height)
    }

    /// Take input focus and ask the host for a numeric keyboard.
    pub fn request_focus(&mut self) {
        if !self.focused {
            self.focused = true;
            self.dirty = true;
        }
        if let Some(keyboard) = self.keyboard.as_deref_mut() {
            keyboard.show_numeric();
        }
    }

    /// Drop input focus.
    pub fn clear_focus(&mut self) {
        if self.focused {
            self.focused = false;
            self.dirty = true;
        }
    }

    /// Route a key press to the controller.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyOutcome {
        let outcome = self.controller.handle_key(code, modifiers);
        if outcome == KeyOutcome::Changed {
            self.dirty = true;
        }
        outcome
    }

    /// Empty every cell without notifying the listener.
    pub fn clear(&mut self) {
        self.controller.clear();
        self.dirty = true;
    }

    /// Capture the cell values and cursor.
    pub fn save_state(&self) -> PinSnapshot {
        self.controller.snapshot()
    }

    /// Restore a saved state.
    ///
    /// # Errors
    ///
    /// Returns [`PinError::InvalidRestoredState`](crate::PinError::InvalidRestoredState)
    /// if the snapshot does not match this widget's length.
    pub fn restore_state(&mut self, snapshot: &PinSnapshot) -> PinResult<()> {
        if let Err(err) = self.controller.restore(snapshot) {
            tracing::warn!(%err, "rejected restored state");
            return Err(err);
        }
        self.dirty = true;
        Ok(())
    }

    /// Draw commands for the current state, measured against `metrics`.
    pub fn draw_commands<M>(&self, metrics: &M) -> Vec<DrawCommand>
    where
        M: TextMeasure + ?Sized,
    {
        let frame = Frame {
            store: self.controller.store(),
            geometry: &self.geometry,
            blink: self.blink,
            focused: self.focused,
        };
        self.renderer.render(&frame, metrics)
    }
}

impl Widget for PinInput {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.geometry = LayoutGeometry::measure(&self.config, MeasureSpec::Exact(bounds.width));
        self.dirty = true;
    }

    fn render(&self, surface: &mut dyn Surface) {
        let commands = self.draw_commands(&*surface);
        paint_all(&commands, surface);
    }

    fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key { code, modifiers } => {
                if !self.focused {
                    return false;
                }
                self.handle_key(*code, *modifiers).is_consumed()
            }
            InputEvent::PointerDown { x, y } => {
                if !self.bounds.contains(*x, *y) {
                    return false;
                }
                self.request_focus();
                true
            }
            InputEvent::FocusLost => {
                if let Some(keyboard) = self.keyboard.as_deref_mut() {
                    keyboard.hide();
                }
                false
            }
            InputEvent::FocusGained | InputEvent::Resize { .. } => false,
        }
    }

    fn needs_redraw(&self) -> bool {
        self.dirty
    }

    fn clear_redraw(&mut self) {
        self.dirty = false;
    }
}

impl Drop for PinInput {
    fn drop(&mut self) {
        self.detach();
    }
}
