use glam::{Mat4, Vec2, Vec3, Vec4};

/// Primitive meshes the renderer knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Unit cube.
    Box,
    /// Unit square in the XZ plane.
    Plane,
    /// Closed cylinder standing on the XZ plane.
    Cylinder,
    /// Cone standing on the XZ plane.
    Cone,
    /// Unit sphere.
    Sphere,
    /// Cylinder narrowing toward its top.
    TaperedCylinder,
    /// Triangular prism.
    Prism,
    /// Square-based pyramid.
    Pyramid4,
    /// Ring torus.
    Torus,
}

/// Scale, Euler rotation and translation of one object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Per-axis scale.
    pub scale: Vec3,
    /// Rotation about X, Y and Z in degrees.
    pub rotation_degrees: Vec3,
    /// World-space translation.
    pub position: Vec3,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            scale: Vec3::ONE,
            rotation_degrees: Vec3::ZERO,
            position: Vec3::ZERO,
        }
    }
}

impl Placement {
    /// Placement with no rotation.
    #[must_use]
    pub fn new(scale: Vec3, position: Vec3) -> Self {
        Self {
            scale,
            rotation_degrees: Vec3::ZERO,
            position,
        }
    }

    /// Same placement rotated by the given Euler angles in degrees.
    #[must_use]
    pub fn rotated(self, x: f32, y: f32, z: f32) -> Self {
        Self {
            rotation_degrees: Vec3::new(x, y, z),
            ..self
        }
    }

    /// Object-to-world matrix `T · Rx · Ry · Rz · S`.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        let r = self.rotation_degrees;
        Mat4::from_translation(self.position)
            * Mat4::from_rotation_x(r.x.to_radians())
            * Mat4::from_rotation_y(r.y.to_radians())
            * Mat4::from_rotation_z(r.z.to_radians())
            * Mat4::from_scale(self.scale)
    }
}

/// How an object's base color is produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Surface {
    /// Sample a registered texture, scaling texture coordinates.
    Textured {
        /// Tag of the texture slot.
        texture: String,
        /// Texture coordinate multiplier.
        uv_scale: Vec2,
    },
    /// Flat RGBA color.
    Color(Vec4),
}

impl Surface {
    /// Texture with unit UV scale.
    #[must_use]
    pub fn texture(tag: &str) -> Self {
        Self::Textured {
            texture: tag.to_owned(),
            uv_scale: Vec2::ONE,
        }
    }
}

/// One drawable thing on the table.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    /// Human-readable label, used in logs.
    pub name: String,
    /// Mesh to draw.
    pub shape: ShapeKind,
    /// Where and how large.
    pub placement: Placement,
    /// Texture or flat color.
    pub surface: Surface,
    /// Tag of the material, if lit with one.
    pub material: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn identity_placement_is_identity_matrix() {
        assert!(Placement::default()
            .model_matrix()
            .abs_diff_eq(Mat4::IDENTITY, EPS));
    }

    #[test]
    fn scale_applies_before_rotation_and_translation() {
        let placement = Placement::new(
            Vec3::new(2.0, 1.0, 1.0),
            Vec3::new(0.0, 0.0, -8.0),
        )
        .rotated(0.0, 90.0, 0.0);
        // +X scaled to 2, yawed 90° onto -Z, then translated.
        let p = placement.model_matrix().transform_point3(Vec3::X);
        assert!((p - Vec3::new(0.0, 0.0, -10.0)).length() < 1e-4);
    }

    #[test]
    fn x_rotation_is_applied_outermost() {
        let placement = Placement::default().rotated(90.0, 90.0, 0.0);
        let expected = Mat4::from_rotation_x(90f32.to_radians())
            * Mat4::from_rotation_y(90f32.to_radians());
        assert!(placement.model_matrix().abs_diff_eq(expected, EPS));
    }

    #[test]
    fn backdrop_plane_stands_upright() {
        let backdrop = Placement::new(
            Vec3::new(20.0, 1.0, 20.0),
            Vec3::new(0.0, 15.0, -8.0),
        )
        .rotated(90.0, 0.0, 0.0);
        // Plane normal +Y rotated 90° about X faces +Z, toward the camera.
        let normal = backdrop.model_matrix().transform_vector3(Vec3::Y);
        assert!((normal.normalize() - Vec3::Z).length() < 1e-4);
    }
}
