//! Standalone window backed by winit.
//!
//! The window hides and grabs the cursor so the pointer steers the camera
//! like a first-person view. GPU work is out of this crate's hands: frames
//! go to a [`TraceSink`], which logs the uploads at `trace` level.
//!
//! ```no_run
//! # use tabletop::Viewer;
//! Viewer::builder()
//!     .with_title("Still life")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use glam::Vec2;
use winit::{
    application::ApplicationHandler,
    dpi::{PhysicalPosition, PhysicalSize},
    event::{DeviceEvent, DeviceId, ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{CursorGrabMode, Window, WindowId},
};

use crate::{
    engine::ViewComposer,
    error::TabletopError,
    input::InputEvent,
    options::{KeybindingOptions, Options},
    renderer::TraceSink,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: Option<String>,
}

impl ViewerBuilder {
    /// Create a builder with default options and the options' title.
    fn new() -> Self {
        Self {
            options: None,
            title: None,
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title, overriding the options.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        let mut options = self.options.unwrap_or_default();
        if let Some(title) = self.title {
            options.window.title = title;
        }
        Viewer { options }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A window showing the still life through the fly camera.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Options the window will open with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed or the quit key is pressed.
    ///
    /// # Errors
    ///
    /// [`TabletopError::InvalidOptions`] for unusable options, or
    /// [`TabletopError::Viewer`] if the event loop cannot start.
    pub fn run(self) -> Result<(), TabletopError> {
        self.options.validate()?;

        let event_loop = EventLoop::new()
            .map_err(|e| TabletopError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            composer: None,
            keybindings: self.options.keybindings.clone(),
            options: self.options,
            grab: None,
            virtual_cursor: Vec2::ZERO,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| TabletopError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler. Owns the composer, so window
/// callbacks reach camera state through `&mut self`.
struct ViewerApp {
    window: Option<Arc<Window>>,
    composer: Option<ViewComposer<TraceSink>>,
    options: Options,
    keybindings: KeybindingOptions,
    /// Grab mode in effect, `None` if the platform refused both.
    grab: Option<CursorGrabMode>,
    /// Accumulated raw motion, used as the pointer position while the
    /// cursor is locked and `CursorMoved` stops arriving.
    virtual_cursor: Vec2,
}

/// Viewport size with both sides at least one pixel.
fn viewport_size(inner: PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

/// Grab modes in order of preference. Locked gives unbounded relative
/// motion; Confined is the fallback where locking is unsupported.
const GRAB_PREFERENCE: [CursorGrabMode; 2] =
    [CursorGrabMode::Locked, CursorGrabMode::Confined];

/// Fraction of the shorter window side treated as the border zone where a
/// confined cursor is pulled back to the centre.
const EDGE_FRACTION: f64 = 0.1;

/// Which event stream carries pointer motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PointerFeed {
    /// `WindowEvent::CursorMoved` positions.
    Window,
    /// `DeviceEvent::MouseMotion` deltas summed into a virtual cursor.
    RawMotion,
}

fn pointer_feed(grab: Option<CursorGrabMode>) -> PointerFeed {
    match grab {
        Some(CursorGrabMode::Locked) => PointerFeed::RawMotion,
        _ => PointerFeed::Window,
    }
}

/// Whether `position` lies in the border zone of a window of `size`.
fn near_edge(
    position: PhysicalPosition<f64>,
    size: PhysicalSize<u32>,
) -> bool {
    let (w, h) = viewport_size(size);
    let (w, h) = (f64::from(w), f64::from(h));
    let margin = w.min(h) * EDGE_FRACTION;
    position.x < margin
        || position.y < margin
        || position.x > w - margin
        || position.y > h - margin
}

/// Hide the cursor and grab it in the first mode the platform accepts.
fn grab_cursor(window: &Window) -> Option<CursorGrabMode> {
    window.set_cursor_visible(false);
    for mode in GRAB_PREFERENCE {
        match window.set_cursor_grab(mode) {
            Ok(()) => {
                log::debug!("cursor grab {mode:?}");
                return Some(mode);
            }
            Err(e) => log::debug!("cursor grab {mode:?} unavailable: {e}"),
        }
    }
    log::warn!("cursor could not be grabbed");
    None
}

impl ViewerApp {
    /// Warp the cursor to the window centre and drop the pointer baseline
    /// so the warp itself does not rotate the camera.
    fn recenter_cursor(&mut self) {
        let (Some(window), Some(composer)) = (&self.window, &mut self.composer)
        else {
            return;
        };
        let (w, h) = viewport_size(window.inner_size());
        let centre =
            PhysicalPosition::new(f64::from(w) / 2.0, f64::from(h) / 2.0);
        if let Err(e) = window.set_cursor_position(centre) {
            log::debug!("cursor warp unsupported: {e}");
        }
        self.virtual_cursor = Vec2::new(centre.x as f32, centre.y as f32);
        composer.reset_pointer();
    }

    fn request_redraw(&self) {
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.options.window.title)
            .with_inner_size(PhysicalSize::new(
                self.options.window.width,
                self.options.window.height,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let (vp_w, vp_h) = viewport_size(window.inner_size());
        let mut composer = ViewComposer::new(&self.options)
            .with_sink(TraceSink::default());
        composer.resize(vp_w, vp_h);

        self.grab = grab_cursor(&window);
        window.request_redraw();
        self.window = Some(window);
        self.composer = Some(composer);
        self.recenter_cursor();
        log::info!("viewer started at {vp_w}x{vp_h}");
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        let Some(composer) = &mut self.composer else {
            return;
        };

        match event {
            WindowEvent::Resized(event_size) => {
                let (vp_w, vp_h) = viewport_size(event_size);
                composer.resize(vp_w, vp_h);
            }

            WindowEvent::Focused(focused) => {
                if focused {
                    if let Some(w) = &self.window {
                        self.grab = grab_cursor(w);
                    }
                    self.recenter_cursor();
                } else {
                    composer.release_all_keys();
                }
            }

            WindowEvent::RedrawRequested => {
                let _ = composer.frame();
                if composer.quit_requested() {
                    if let Some(sink) = composer.sink() {
                        log::info!(
                            "quitting after {} uploads, {} draws",
                            sink.uploads(),
                            sink.draws()
                        );
                    }
                    event_loop.exit();
                    return;
                }
                self.request_redraw();
            }

            WindowEvent::CursorMoved { position, .. } => {
                if pointer_feed(self.grab) != PointerFeed::Window {
                    return;
                }
                composer.handle_input(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
                let at_edge = self
                    .window
                    .as_ref()
                    .is_some_and(|w| near_edge(position, w.inner_size()));
                if self.grab == Some(CursorGrabMode::Confined) && at_edge {
                    self.recenter_cursor();
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let (x_offset, y_offset) = match delta {
                    MouseScrollDelta::LineDelta(x, y) => (x, y),
                    MouseScrollDelta::PixelDelta(pos) => {
                        (pos.x as f32 * 0.01, pos.y as f32 * 0.01)
                    }
                };
                composer
                    .handle_input(InputEvent::Scroll { x_offset, y_offset });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let key_str = format!("{code:?}");
                if let Some(action) = self.keybindings.lookup(&key_str) {
                    composer.handle_input(InputEvent::Key {
                        action,
                        pressed: event.state == ElementState::Pressed,
                    });
                }
            }

            _ => (),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if pointer_feed(self.grab) != PointerFeed::RawMotion {
            return;
        }
        let DeviceEvent::MouseMotion { delta } = event else {
            return;
        };
        let Some(composer) = &mut self.composer else {
            return;
        };
        self.virtual_cursor += Vec2::new(delta.0 as f32, delta.1 as f32);
        composer.handle_input(InputEvent::CursorMoved {
            x: self.virtual_cursor.x,
            y: self.virtual_cursor.y,
        });
    }
}
