//! Per-frame view composition.
//!
//! [`ViewComposer`] owns the camera, the input translator, the held-key
//! set, the projection mode and the frame clock. Each frame it advances
//! the camera by the elapsed time, derives view and projection, and hands
//! them to the attached [`UniformSink`].

mod input;

use glam::Mat4;

use crate::camera::{
    projection_matrix, CameraController, CameraState, CameraUniform,
    ProjectionMode, ProjectionParams, Viewport,
};
use crate::input::HeldKeys;
use crate::options::Options;
use crate::renderer::{TraceSink, UniformSink};
use crate::scene::Scene;
use crate::util::frame_timing::{FrameClock, SystemTime, TimeSource};

/// Owner of all camera-related state for one viewport.
///
/// `S` is the uniform sink the view is uploaded to; `T` is the clock the
/// frame delta is read from.
pub struct ViewComposer<S: UniformSink = TraceSink, T: TimeSource = SystemTime>
{
    camera: CameraState,
    controller: CameraController,
    held: HeldKeys,
    projection_mode: ProjectionMode,
    projection: ProjectionParams,
    viewport: Viewport,
    clock: FrameClock<T>,
    sink: Option<S>,
    scene: Scene,
    quit: bool,
}

impl<S: UniformSink> ViewComposer<S, SystemTime> {
    /// Composer reading wall-clock time, with no sink attached and the
    /// still life loaded.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self::with_time_source(options, SystemTime::default())
    }
}

impl<S: UniformSink, T: TimeSource> ViewComposer<S, T> {
    /// Composer reading frame time from `source`.
    #[must_use]
    pub fn with_time_source(options: &Options, source: T) -> Self {
        let camera = options.camera.build_camera();
        log::debug!(
            "camera at {} yaw {:.1} pitch {:.1}",
            camera.position(),
            camera.yaw(),
            camera.pitch()
        );
        Self {
            camera,
            controller: CameraController::new(
                options.camera.mouse_sensitivity,
            ),
            held: HeldKeys::new(),
            projection_mode: options.camera.projection,
            projection: options.camera.projection_params(),
            viewport: Viewport::new(
                options.window.width,
                options.window.height,
            ),
            clock: FrameClock::with_source(
                source,
                options.camera.max_frame_delta,
            ),
            sink: None,
            scene: Scene::still_life(),
            quit: false,
        }
    }

    /// Attach a sink, builder style.
    #[must_use]
    pub fn with_sink(mut self, sink: S) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Replace the scene drawn by [`render_scene`](Self::render_scene).
    #[must_use]
    pub fn with_scene(mut self, scene: Scene) -> Self {
        self.scene = scene;
        self
    }

    /// Attach a sink, returning the previous one.
    pub fn attach_sink(&mut self, sink: S) -> Option<S> {
        self.sink.replace(sink)
    }

    /// Detach and return the current sink. Later frames skip the upload.
    pub fn detach_sink(&mut self) -> Option<S> {
        self.sink.take()
    }

    // -- Per-frame ------------------------------------------------------

    /// Advance the camera by the time since the last frame and upload the
    /// camera block to the sink, if any.
    ///
    /// Returns the block that was (or would have been) uploaded.
    pub fn prepare_view(&mut self) -> CameraUniform {
        let delta_time = self.clock.tick();
        self.controller
            .apply_movement(&mut self.camera, &self.held, delta_time);

        let uniform = CameraUniform::new(
            self.camera.view_matrix(),
            self.projection_matrix(),
            self.camera.position(),
        );

        match self.sink.as_mut() {
            Some(sink) => sink.upload_camera(&uniform),
            None => log::trace!("no uniform sink attached, skipping upload"),
        }
        uniform
    }

    /// Upload lights and draw every scene object through the sink.
    pub fn render_scene(&mut self) {
        if let Some(sink) = self.sink.as_mut() {
            self.scene.submit(sink);
        }
    }

    /// [`prepare_view`](Self::prepare_view) then
    /// [`render_scene`](Self::render_scene).
    pub fn frame(&mut self) -> CameraUniform {
        let uniform = self.prepare_view();
        self.render_scene();
        uniform
    }

    /// Projection for the current mode and viewport.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        projection_matrix(
            self.projection_mode,
            self.viewport.aspect(),
            self.camera.zoom(),
            &self.projection,
        )
    }

    /// Track a new framebuffer size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
        log::debug!("viewport {width}x{height}");
    }

    // -- Accessors ------------------------------------------------------

    /// Camera state.
    #[must_use]
    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    /// Mutable camera state, for scripted moves.
    pub fn camera_mut(&mut self) -> &mut CameraState {
        &mut self.camera
    }

    /// Input translator.
    #[must_use]
    pub fn controller(&self) -> &CameraController {
        &self.controller
    }

    /// Movement keys currently held.
    #[must_use]
    pub fn held_keys(&self) -> &HeldKeys {
        &self.held
    }

    /// Active projection mode.
    #[must_use]
    pub fn projection_mode(&self) -> ProjectionMode {
        self.projection_mode
    }

    /// Switch projection mode. Setting the current mode is a no-op.
    pub fn set_projection_mode(&mut self, mode: ProjectionMode) {
        if self.projection_mode != mode {
            log::debug!("projection {mode:?}");
            self.projection_mode = mode;
        }
    }

    /// Current viewport size.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Attached sink.
    #[must_use]
    pub fn sink(&self) -> Option<&S> {
        self.sink.as_ref()
    }

    /// Attached sink, mutably.
    pub fn sink_mut(&mut self) -> Option<&mut S> {
        self.sink.as_mut()
    }

    /// Scene drawn by [`render_scene`](Self::render_scene).
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.clock.fps()
    }

    /// Whether the quit key was pressed.
    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}
