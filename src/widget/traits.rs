//! Widget trait and the host collaborators a widget talks to.

use crate::input::InputEvent;
use crate::layout::Rect;
use crate::render::Surface;

/// A UI component that can be painted onto a surface and handle input.
pub trait Widget {
    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect;

    /// Set the bounds of this widget.
    ///
    /// Called when the host layout changes.
    fn set_bounds(&mut self, bounds: Rect);

    /// Paint this widget onto the given surface.
    fn render(&self, surface: &mut dyn Surface);

    /// Handle an input event.
    ///
    /// Returns `true` if the event was consumed by this widget,
    /// `false` if it should propagate to other widgets.
    fn handle_input(&mut self, event: &InputEvent) -> bool;

    /// Check if this widget needs to be redrawn.
    fn needs_redraw(&self) -> bool;

    /// Clear the redraw flag after rendering.
    fn clear_redraw(&mut self);
}

/// The host's on-screen keyboard or other input affordance.
pub trait SoftKeyboard {
    /// Present a digits-only keyboard.
    fn show_numeric(&mut self);

    /// Dismiss the keyboard.
    fn hide(&mut self);
}
