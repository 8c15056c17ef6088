//! Input translation: pointer deltas become rotation, scroll turns the
//! speed dial, and held keys become displacement scaled by frame time.

use super::core::CameraState;
use crate::input::{HeldKeys, PointerTracker};

/// Degrees of rotation per pixel of pointer travel.
pub const DEFAULT_MOUSE_SENSITIVITY: f32 = 0.1;

/// Turns raw pointer samples, scroll offsets and held keys into camera
/// rotation, speed changes and displacement.
#[derive(Debug, Clone)]
pub struct CameraController {
    pointer: PointerTracker,
    mouse_sensitivity: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(DEFAULT_MOUSE_SENSITIVITY)
    }
}

impl CameraController {
    /// Controller with the given pointer sensitivity (degrees per pixel).
    #[must_use]
    pub fn new(mouse_sensitivity: f32) -> Self {
        Self {
            pointer: PointerTracker::new(),
            mouse_sensitivity,
        }
    }

    /// Pointer sensitivity in degrees per pixel.
    #[must_use]
    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    /// Pointer tracker state.
    #[must_use]
    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    /// Forget the pointer baseline so the next sample causes no rotation.
    /// Call after warping the cursor.
    pub fn reset_pointer(&mut self) {
        self.pointer.reset();
    }

    /// Rotate the camera from an absolute pointer sample.
    ///
    /// Returns `false` when the sample only established the baseline.
    pub fn on_cursor_moved(
        &mut self,
        camera: &mut CameraState,
        x: f32,
        y: f32,
    ) -> bool {
        let Some(delta) = self.pointer.sample(x, y) else {
            log::trace!("pointer baseline at ({x}, {y})");
            return false;
        };
        let delta = delta * self.mouse_sensitivity;
        camera.rotate(delta.x, delta.y);
        log::trace!(
            "camera yaw {:.2} pitch {:.2}",
            camera.yaw(),
            camera.pitch()
        );
        true
    }

    /// Scroll adjusts movement speed, not zoom.
    pub fn on_scroll(&self, camera: &mut CameraState, y_offset: f32) {
        let before = camera.movement_speed();
        camera.adjust_speed(y_offset);
        if camera.movement_speed() != before {
            log::debug!("camera speed {:.2}", camera.movement_speed());
        }
    }

    /// Move the camera for every held direction by `speed * dt`.
    ///
    /// Directions compose additively; holding two perpendicular keys moves
    /// `sqrt(2)` times faster than one.
    pub fn apply_movement(
        &self,
        camera: &mut CameraState,
        held: &HeldKeys,
        delta_time: f32,
    ) {
        let delta_time = delta_time.max(0.0);
        if held.is_empty() || delta_time == 0.0 {
            return;
        }
        let distance = camera.movement_speed() * delta_time;
        for movement in held.iter() {
            camera.translate(movement, distance);
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::core::CameraSetup;
    use crate::input::Movement;

    const EPS: f32 = 1e-4;

    fn held(movements: &[Movement]) -> HeldKeys {
        let mut keys = HeldKeys::new();
        for m in movements {
            keys.set(*m, true);
        }
        keys
    }

    fn displacement(movements: &[Movement], dt: f32) -> Vec3 {
        let mut camera = CameraState::default();
        let start = camera.position();
        CameraController::default().apply_movement(
            &mut camera,
            &held(movements),
            dt,
        );
        camera.position() - start
    }

    #[test]
    fn first_pointer_sample_does_not_rotate() {
        let mut camera = CameraState::default();
        let before = camera.clone();
        let mut controller = CameraController::default();

        assert!(!controller.on_cursor_moved(&mut camera, 731.0, 12.0));
        assert_eq!(camera, before);

        assert!(controller.on_cursor_moved(&mut camera, 741.0, 2.0));
        assert!((camera.yaw() - (before.yaw() + 1.0)).abs() < EPS);
        assert!((camera.pitch() - (before.pitch() + 1.0)).abs() < EPS);
    }

    #[test]
    fn moving_pointer_down_lowers_pitch() {
        let mut camera = CameraState::default();
        let mut controller = CameraController::default();
        let _ = controller.on_cursor_moved(&mut camera, 0.0, 0.0);
        let _ = controller.on_cursor_moved(&mut camera, 0.0, 50.0);
        assert!((camera.pitch() + 5.0).abs() < EPS);
    }

    #[test]
    fn reset_pointer_suppresses_next_jump() {
        let mut camera = CameraState::default();
        let mut controller = CameraController::default();
        let _ = controller.on_cursor_moved(&mut camera, 0.0, 0.0);
        controller.reset_pointer();
        let before = camera.clone();
        assert!(!controller.on_cursor_moved(&mut camera, 500.0, 400.0));
        assert_eq!(camera, before);
    }

    #[test]
    fn last_sample_wins_between_frames() {
        let mut camera = CameraState::default();
        let mut controller = CameraController::default();
        let _ = controller.on_cursor_moved(&mut camera, 0.0, 0.0);
        let _ = controller.on_cursor_moved(&mut camera, 10.0, 0.0);
        let _ = controller.on_cursor_moved(&mut camera, 30.0, 0.0);
        assert!((camera.yaw() - (-90.0 + 3.0)).abs() < EPS);
        assert_eq!(controller.pointer().last_position().x, 30.0);
    }

    #[test]
    fn scroll_changes_speed_not_zoom() {
        let mut camera = CameraState::default();
        let zoom = camera.zoom();
        let controller = CameraController::default();

        controller.on_scroll(&mut camera, 2.0);
        assert!((camera.movement_speed() - 4.5).abs() < EPS);
        assert_eq!(camera.zoom(), zoom);

        let mut fast = CameraState::new(&CameraSetup {
            movement_speed: 9.5,
            ..CameraSetup::default()
        });
        controller.on_scroll(&mut fast, 2.0);
        assert_eq!(fast.movement_speed(), 10.0);
    }

    #[test]
    fn displacement_scales_linearly_with_delta_time() {
        let one = displacement(&[Movement::Forward], 0.016);
        let two = displacement(&[Movement::Forward], 0.032);
        assert!((two - one * 2.0).length() < EPS);
        assert!((one.length() - 2.5 * 0.016).abs() < EPS);
    }

    #[test]
    fn diagonal_movement_is_not_normalized() {
        let forward = displacement(&[Movement::Forward], 0.5);
        let right = displacement(&[Movement::Right], 0.5);
        let both = displacement(&[Movement::Forward, Movement::Right], 0.5);
        assert!((both - (forward + right)).length() < EPS);
        assert!(both.length() > forward.length());
    }

    #[test]
    fn opposite_keys_cancel() {
        let d = displacement(&[Movement::Up, Movement::Down], 1.0);
        assert!(d.length() < EPS);
    }

    #[test]
    fn negative_delta_time_does_not_move() {
        let d = displacement(&[Movement::Forward], -1.0);
        assert_eq!(d, Vec3::ZERO);
    }
}
