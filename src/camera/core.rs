use glam::{Mat4, Quat, Vec3};

use crate::input::Movement;

/// Closed range a camera scalar is clamped into at every mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Smallest allowed value.
    pub min: f32,
    /// Largest allowed value.
    pub max: f32,
}

impl Bounds {
    /// Create a range; swapped endpoints are reordered.
    #[must_use]
    pub fn new(a: f32, b: f32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Clamp `value` into the range. NaN collapses to `min`.
    #[must_use]
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    /// Whether `value` lies inside the range (inclusive).
    #[must_use]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Largest pitch magnitude the camera may ever reach, in degrees.
///
/// At ±90° `front` becomes parallel to `world_up` and `right` degenerates.
pub const MAX_PITCH_LIMIT: f32 = 89.9;

/// Floor for both ends of the movement speed range, in world units per
/// second. Held keys always move the eye.
pub const MIN_MOVEMENT_SPEED: f32 = 1e-3;

/// Normalized `world_up` and the rotation taking +Y onto it.
fn up_frame(world_up: Vec3) -> (Vec3, Quat) {
    let world_up = world_up.try_normalize().unwrap_or(Vec3::Y);
    (world_up, Quat::from_rotation_arc(Vec3::Y, world_up))
}

/// Fly-camera orientation and position.
///
/// `front`, `right` and `up` are cached and only ever written by
/// `update_vectors`, which every angle mutation funnels through. Yaw and
/// pitch are measured about `world_up`, so the pitch clamp keeps `front`
/// off the up axis whichever way up points.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    position: Vec3,
    yaw: f32,
    pitch: f32,
    world_up: Vec3,
    up_frame: Quat,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    zoom: f32,
    movement_speed: f32,
    pitch_limit: f32,
    zoom_bounds: Bounds,
    speed_bounds: Bounds,
}

/// Construction parameters for [`CameraState`].
#[derive(Debug, Clone, PartialEq)]
pub struct CameraSetup {
    /// Initial eye position.
    pub position: Vec3,
    /// Initial yaw in degrees.
    pub yaw: f32,
    /// Initial pitch in degrees.
    pub pitch: f32,
    /// Global up reference. Normalized on construction; zero means +Y.
    pub world_up: Vec3,
    /// Initial field of view in degrees.
    pub zoom: f32,
    /// Initial movement speed in world units per second.
    pub movement_speed: f32,
    /// Pitch clamp in degrees, applied symmetrically.
    pub pitch_limit: f32,
    /// Allowed zoom range in degrees.
    pub zoom_bounds: Bounds,
    /// Allowed movement speed range. Both ends are raised to at least
    /// [`MIN_MOVEMENT_SPEED`].
    pub speed_bounds: Bounds,
}

impl Default for CameraSetup {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: -90.0,
            pitch: 0.0,
            world_up: Vec3::Y,
            zoom: 45.0,
            movement_speed: 2.5,
            pitch_limit: 89.0,
            zoom_bounds: Bounds::new(1.0, 90.0),
            speed_bounds: Bounds::new(0.1, 10.0),
        }
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(&CameraSetup::default())
    }
}

impl CameraState {
    /// Build a camera from explicit angles. Every value is clamped into its
    /// configured range before the basis is derived.
    #[must_use]
    pub fn new(setup: &CameraSetup) -> Self {
        let (world_up, up_frame) = up_frame(setup.world_up);
        let speed_bounds = Bounds::new(
            setup.speed_bounds.min.max(MIN_MOVEMENT_SPEED),
            setup.speed_bounds.max.max(MIN_MOVEMENT_SPEED),
        );
        let pitch_limit = if setup.pitch_limit.is_finite() {
            setup.pitch_limit.abs().min(MAX_PITCH_LIMIT)
        } else {
            MAX_PITCH_LIMIT
        };

        let mut camera = Self {
            position: setup.position,
            yaw: if setup.yaw.is_finite() { setup.yaw } else { 0.0 },
            pitch: 0.0,
            world_up,
            up_frame,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            zoom: setup.zoom_bounds.clamp(setup.zoom),
            movement_speed: speed_bounds.clamp(setup.movement_speed),
            pitch_limit,
            zoom_bounds: setup.zoom_bounds,
            speed_bounds,
        };
        camera.pitch = camera.clamp_pitch(setup.pitch);
        camera.update_vectors();
        camera
    }

    /// Build a camera whose initial yaw/pitch point along `direction`.
    ///
    /// Angles are measured about `world_up`, the same frame the cached
    /// basis is derived in. A direction along `world_up` ends up at the
    /// pitch limit. A zero direction falls back to the setup's own
    /// yaw/pitch.
    #[must_use]
    pub fn looking_along(setup: &CameraSetup, direction: Vec3) -> Self {
        let Some(dir) = direction.try_normalize() else {
            return Self::new(setup);
        };
        let (_, frame) = up_frame(setup.world_up);
        let dir = frame.inverse() * dir;
        let yaw = dir.z.atan2(dir.x).to_degrees();
        let pitch = dir.y.clamp(-1.0, 1.0).asin().to_degrees();
        Self::new(&CameraSetup {
            yaw,
            pitch,
            ..setup.clone()
        })
    }

    fn clamp_pitch(&self, pitch: f32) -> f32 {
        if pitch.is_nan() {
            return 0.0;
        }
        pitch.clamp(-self.pitch_limit, self.pitch_limit)
    }

    /// Re-derive `front`, `right` and `up` from `yaw`, `pitch` and
    /// `world_up`.
    fn update_vectors(&mut self) {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();
        let local =
            Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos);
        self.front = (self.up_frame * local).normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }

    /// Add angle deltas in degrees, clamp pitch and recompute the basis.
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        if delta_yaw.is_finite() {
            self.yaw += delta_yaw;
        }
        if delta_pitch.is_finite() {
            self.pitch = self.clamp_pitch(self.pitch + delta_pitch);
        }
        self.update_vectors();
    }

    /// Displace the eye by `distance` world units in the given direction.
    ///
    /// Forward/backward follow `front`, left/right follow `right`, up/down
    /// follow `world_up`.
    pub fn translate(&mut self, movement: Movement, distance: f32) {
        let offset = match movement {
            Movement::Forward => self.front,
            Movement::Backward => -self.front,
            Movement::Left => -self.right,
            Movement::Right => self.right,
            Movement::Up => self.world_up,
            Movement::Down => -self.world_up,
        };
        self.position += offset * distance;
    }

    /// Add `delta` to the movement speed, clamped to the speed range.
    pub fn adjust_speed(&mut self, delta: f32) {
        if delta.is_finite() {
            self.movement_speed =
                self.speed_bounds.clamp(self.movement_speed + delta);
        }
    }

    /// Set the field of view in degrees, clamped to the zoom range.
    pub fn set_zoom(&mut self, zoom: f32) {
        if zoom.is_finite() {
            self.zoom = self.zoom_bounds.clamp(zoom);
        }
    }

    /// Right-handed look-at from the eye toward `position + front`.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Eye position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Yaw in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Fixed global up reference.
    #[must_use]
    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    /// Unit viewing direction.
    #[must_use]
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Unit lateral axis.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Unit camera-local up axis.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Field of view in degrees.
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Movement speed in world units per second.
    #[must_use]
    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    /// Symmetric pitch clamp in degrees.
    #[must_use]
    pub fn pitch_limit(&self) -> f32 {
        self.pitch_limit
    }

    /// Allowed movement speed range.
    #[must_use]
    pub fn speed_bounds(&self) -> Bounds {
        self.speed_bounds
    }

    /// Allowed zoom range.
    #[must_use]
    pub fn zoom_bounds(&self) -> Bounds {
        self.zoom_bounds
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// Per-frame camera block: view, projection and eye position, laid out for
/// a std140 uniform buffer.
pub struct CameraUniform {
    /// World-to-eye transform.
    pub view: [[f32; 4]; 4],
    /// Eye-to-clip transform.
    pub projection: [[f32; 4]; 4],
    /// Eye position in world space.
    pub view_position: [f32; 3],
    /// Padding for std140 alignment.
    pub(crate) _pad: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            view_position: [0.0; 3],
            _pad: 0.0,
        }
    }
}

impl CameraUniform {
    /// Assemble the block from already-derived matrices.
    #[must_use]
    pub fn new(view: Mat4, projection: Mat4, view_position: Vec3) -> Self {
        Self {
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            view_position: view_position.to_array(),
            _pad: 0.0,
        }
    }

    /// View matrix as a glam value.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.view)
    }

    /// Projection matrix as a glam value.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.projection)
    }

    /// Raw bytes for a buffer upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
