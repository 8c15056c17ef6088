//! Input routing for [`ViewComposer`].

use super::ViewComposer;
use crate::camera::ProjectionMode;
use crate::input::{InputEvent, KeyAction};
use crate::renderer::UniformSink;
use crate::util::frame_timing::TimeSource;

impl<S: UniformSink, T: TimeSource> ViewComposer<S, T> {
    /// Process a platform-agnostic input event.
    ///
    /// Pointer and scroll events act on the camera immediately. Movement
    /// keys only update the held set; displacement happens in
    /// [`prepare_view`](Self::prepare_view) once the frame delta is known.
    ///
    /// # Example
    ///
    /// ```ignore
    /// composer.handle_input(InputEvent::CursorMoved { x, y });
    /// composer.handle_input(InputEvent::Scroll {
    ///     x_offset: 0.0,
    ///     y_offset: 1.0,
    /// });
    /// ```
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                let _ = self.controller.on_cursor_moved(&mut self.camera, x, y);
            }
            InputEvent::Scroll { y_offset, .. } => {
                self.controller.on_scroll(&mut self.camera, y_offset);
            }
            InputEvent::Key { action, pressed } => {
                self.dispatch_key(action, pressed);
            }
        }
    }

    /// Key press or release. Toggles and quit fire on press only.
    fn dispatch_key(&mut self, action: KeyAction, pressed: bool) {
        if let Some(movement) = action.movement() {
            self.held.set(movement, pressed);
            return;
        }
        if !pressed {
            return;
        }
        match action {
            KeyAction::PerspectiveView => {
                self.set_projection_mode(ProjectionMode::Perspective);
            }
            KeyAction::OrthographicView => {
                self.set_projection_mode(ProjectionMode::Orthographic);
            }
            KeyAction::Quit => {
                log::info!("quit requested");
                self.quit = true;
            }
            _ => {}
        }
    }

    /// Forget the pointer baseline, e.g. after the cursor was warped.
    pub fn reset_pointer(&mut self) {
        self.controller.reset_pointer();
    }

    /// Release every held movement key, e.g. on focus loss.
    pub fn release_all_keys(&mut self) {
        self.held.clear();
    }
}
