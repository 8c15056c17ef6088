use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::{
    Bounds, CameraSetup, CameraState, ProjectionMode, ProjectionParams,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Initial camera pose, control sensitivities and projection planes.
pub struct CameraOptions {
    /// Initial eye position.
    pub position: [f32; 3],
    /// Initial viewing direction. Need not be normalized.
    pub look_direction: [f32; 3],
    /// Global up reference. Yaw and pitch are measured about it.
    pub world_up: [f32; 3],
    /// Initial vertical field of view in degrees.
    pub zoom: f32,
    /// Smallest field of view in degrees.
    pub zoom_min: f32,
    /// Largest field of view in degrees.
    pub zoom_max: f32,
    /// Symmetric pitch clamp in degrees. Must stay below 90.
    pub pitch_limit: f32,
    /// Degrees of rotation per pixel of pointer travel.
    pub mouse_sensitivity: f32,
    /// Initial movement speed in world units per second.
    pub movement_speed: f32,
    /// Slowest movement speed reachable by scrolling. Must be positive.
    pub speed_min: f32,
    /// Fastest movement speed reachable by scrolling.
    pub speed_max: f32,
    /// Projection the view starts in.
    pub projection: ProjectionMode,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Half width and half height of the orthographic box.
    pub ortho_half_extent: f32,
    /// Longest frame delta fed to movement, in seconds (0 = uncapped).
    pub max_frame_delta: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: [0.5, 5.5, 10.0],
            look_direction: [0.0, -0.5, -2.0],
            world_up: [0.0, 1.0, 0.0],
            zoom: 80.0,
            zoom_min: 1.0,
            zoom_max: 90.0,
            pitch_limit: 89.0,
            mouse_sensitivity: 0.1,
            movement_speed: 2.5,
            speed_min: 0.1,
            speed_max: 10.0,
            projection: ProjectionMode::Perspective,
            znear: 0.1,
            zfar: 100.0,
            ortho_half_extent: 5.0,
            max_frame_delta: 0.25,
        }
    }
}

impl CameraOptions {
    /// Construction parameters for the camera. Yaw and pitch are derived
    /// later from `look_direction`.
    #[must_use]
    pub fn setup(&self) -> CameraSetup {
        CameraSetup {
            position: Vec3::from_array(self.position),
            world_up: Vec3::from_array(self.world_up),
            zoom: self.zoom,
            movement_speed: self.movement_speed,
            pitch_limit: self.pitch_limit,
            zoom_bounds: Bounds::new(self.zoom_min, self.zoom_max),
            speed_bounds: Bounds::new(self.speed_min, self.speed_max),
            ..CameraSetup::default()
        }
    }

    /// Camera at the configured pose.
    #[must_use]
    pub fn build_camera(&self) -> CameraState {
        CameraState::looking_along(
            &self.setup(),
            Vec3::from_array(self.look_direction),
        )
    }

    /// Clip planes and orthographic box.
    #[must_use]
    pub fn projection_params(&self) -> ProjectionParams {
        ProjectionParams {
            znear: self.znear,
            zfar: self.zfar,
            ortho_half_extent: self.ortho_half_extent,
        }
    }

    /// Describe the first value the camera cannot use, if any.
    pub(crate) fn problem(&self) -> Option<String> {
        let finite = self
            .position
            .iter()
            .chain(&self.look_direction)
            .chain(&self.world_up)
            .chain(&[
                self.zoom,
                self.zoom_min,
                self.zoom_max,
                self.pitch_limit,
                self.mouse_sensitivity,
                self.movement_speed,
                self.speed_min,
                self.speed_max,
                self.znear,
                self.zfar,
                self.ortho_half_extent,
                self.max_frame_delta,
            ])
            .all(|v| v.is_finite());
        if !finite {
            return Some("camera values must be finite".into());
        }
        if Vec3::from_array(self.world_up).length_squared() == 0.0 {
            return Some("camera.world_up must be non-zero".into());
        }
        if self.pitch_limit <= 0.0 || self.pitch_limit >= 90.0 {
            return Some(format!(
                "camera.pitch_limit must be in (0, 90), got {}",
                self.pitch_limit
            ));
        }
        if self.zoom_min <= 0.0 || self.zoom_min > self.zoom_max {
            return Some(format!(
                "camera zoom range [{}, {}] is empty or non-positive",
                self.zoom_min, self.zoom_max
            ));
        }
        if self.zoom_max >= 180.0 {
            return Some(format!(
                "camera.zoom_max must be below 180, got {}",
                self.zoom_max
            ));
        }
        if self.speed_min <= 0.0 || self.speed_min > self.speed_max {
            return Some(format!(
                "camera speed range [{}, {}] is empty or non-positive",
                self.speed_min, self.speed_max
            ));
        }
        if self.znear <= 0.0 || self.znear >= self.zfar {
            return Some(format!(
                "camera clip planes need 0 < znear < zfar, got {} / {}",
                self.znear, self.zfar
            ));
        }
        if self.ortho_half_extent <= 0.0 {
            return Some("camera.ortho_half_extent must be positive".into());
        }
        if self.max_frame_delta < 0.0 {
            return Some("camera.max_frame_delta must not be negative".into());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Movement;

    #[test]
    fn default_camera_looks_down_at_the_table() {
        let camera = CameraOptions::default().build_camera();
        assert_eq!(camera.position(), Vec3::new(0.5, 5.5, 10.0));
        assert_eq!(camera.zoom(), 80.0);
        assert_eq!(camera.movement_speed(), 2.5);
        let expected = Vec3::new(0.0, -0.5, -2.0).normalize();
        assert!((camera.front() - expected).length() < 1e-4);
    }

    #[test]
    fn defaults_have_no_problem() {
        assert_eq!(CameraOptions::default().problem(), None);
    }

    #[test]
    fn vertical_pitch_limit_is_rejected() {
        let opts = CameraOptions {
            pitch_limit: 90.0,
            ..CameraOptions::default()
        };
        assert!(opts.problem().is_some());
    }

    #[test]
    fn inverted_clip_planes_are_rejected() {
        let opts = CameraOptions {
            znear: 100.0,
            zfar: 0.1,
            ..CameraOptions::default()
        };
        assert!(opts.problem().is_some_and(|p| p.contains("znear")));
    }

    #[test]
    fn zero_speed_floor_is_rejected() {
        let opts = CameraOptions {
            speed_min: 0.0,
            ..CameraOptions::default()
        };
        assert!(opts.problem().is_some_and(|p| p.contains("speed")));
    }

    #[test]
    fn z_up_camera_strafes_level() {
        let opts = CameraOptions {
            world_up: [0.0, 0.0, 1.0],
            look_direction: [0.0, 0.0, 1.0],
            ..CameraOptions::default()
        };
        assert_eq!(opts.problem(), None);

        let mut camera = opts.build_camera();
        assert!(camera.right().dot(Vec3::Z).abs() < 1e-4);
        let start = camera.position();
        camera.translate(Movement::Right, 1.0);
        assert!((camera.position().z - start.z).abs() < 1e-4);
    }
}
