use super::keyboard::KeyAction;

/// Platform-agnostic input events.
///
/// The viewer translates raw window events into these and feeds them to
/// [`ViewComposer::handle_input`](crate::engine::ViewComposer::handle_input).
///
/// # Example
///
/// ```
/// # use tabletop::input::{InputEvent, KeyAction};
/// let events = [
///     InputEvent::CursorMoved { x: 500.0, y: 400.0 },
///     InputEvent::Scroll { x_offset: 0.0, y_offset: 1.0 },
///     InputEvent::Key { action: KeyAction::MoveForward, pressed: true },
/// ];
/// assert_eq!(events.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to an absolute window position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels, growing downward.
        y: f32,
    },
    /// Scroll wheel or trackpad scroll.
    Scroll {
        /// Horizontal scroll amount.
        x_offset: f32,
        /// Vertical scroll amount (positive = away from the user).
        y_offset: f32,
    },
    /// A bound key changed state.
    Key {
        /// The logical action the key is bound to.
        action: KeyAction,
        /// `true` while held, `false` on release.
        pressed: bool,
    },
}
