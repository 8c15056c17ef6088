//! Projection selection: perspective from the camera zoom, or a fixed
//! orthographic box.

use glam::Mat4;
use serde::{Deserialize, Serialize};

/// Which projection the view uses.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionMode {
    /// Field-of-view projection driven by the camera zoom.
    #[default]
    Perspective,
    /// Fixed symmetric box, independent of zoom and aspect ratio.
    Orthographic,
}

/// Clip planes and orthographic extent shared by both modes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionParams {
    /// Near clip distance.
    pub znear: f32,
    /// Far clip distance.
    pub zfar: f32,
    /// Half width and half height of the orthographic box.
    pub ortho_half_extent: f32,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self {
            znear: 0.1,
            zfar: 100.0,
            ortho_half_extent: 5.0,
        }
    }
}

/// Viewport geometry in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Create a viewport.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height. A zero-sized viewport reports 1.0.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        if self.width == 0 || self.height == 0 {
            return 1.0;
        }
        self.width as f32 / self.height as f32
    }
}

/// Derive the projection matrix for `mode`.
///
/// Perspective uses `zoom_degrees` as the vertical field of view.
/// Orthographic ignores both `zoom_degrees` and `aspect`: the box is
/// `[-h, h] x [-h, h]` regardless of window shape. Matrices use OpenGL clip
/// conventions (depth in `[-1, 1]`).
#[must_use]
pub fn projection_matrix(
    mode: ProjectionMode,
    aspect: f32,
    zoom_degrees: f32,
    params: &ProjectionParams,
) -> Mat4 {
    match mode {
        ProjectionMode::Perspective => {
            let aspect = if aspect.is_finite() && aspect > 0.0 {
                aspect
            } else {
                1.0
            };
            Mat4::perspective_rh_gl(
                zoom_degrees.to_radians(),
                aspect,
                params.znear,
                params.zfar,
            )
        }
        ProjectionMode::Orthographic => {
            let h = params.ortho_half_extent;
            Mat4::orthographic_rh_gl(-h, h, -h, h, params.znear, params.zfar)
        }
    }
}
