use glam::Vec3;

use crate::renderer::{uniforms, UniformSink};

/// Phong surface response, looked up by tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Lookup key.
    pub tag: String,
    /// Ambient reflectance color.
    pub ambient_color: Vec3,
    /// Ambient term weight.
    pub ambient_strength: f32,
    /// Diffuse reflectance color.
    pub diffuse_color: Vec3,
    /// Specular reflectance color.
    pub specular_color: Vec3,
    /// Specular exponent.
    pub shininess: f32,
}

impl Material {
    fn new(
        tag: &str,
        ambient: (f32, f32),
        diffuse: f32,
        specular: f32,
        shininess: f32,
    ) -> Self {
        Self {
            tag: tag.to_owned(),
            ambient_color: Vec3::splat(ambient.0),
            ambient_strength: ambient.1,
            diffuse_color: Vec3::splat(diffuse),
            specular_color: Vec3::splat(specular),
            shininess,
        }
    }

    /// Upload into the shader's `material` block.
    pub fn upload(&self, sink: &mut dyn UniformSink) {
        sink.set_vec3(uniforms::material::AMBIENT_COLOR, self.ambient_color);
        sink.set_float(
            uniforms::material::AMBIENT_STRENGTH,
            self.ambient_strength,
        );
        sink.set_vec3(uniforms::material::DIFFUSE_COLOR, self.diffuse_color);
        sink.set_vec3(uniforms::material::SPECULAR_COLOR, self.specular_color);
        sink.set_float(uniforms::material::SHININESS, self.shininess);
    }
}

/// The eight materials of the still life.
#[must_use]
pub fn still_life_materials() -> Vec<Material> {
    vec![
        Material::new("metal", (0.2, 0.3), 0.2, 0.5, 22.0),
        Material::new("wood", (0.1, 0.2), 0.3, 0.1, 0.3),
        Material::new("glass", (0.4, 0.3), 0.3, 0.6, 85.0),
        Material::new("cheese", (0.1, 0.2), 0.5, 0.1, 0.3),
        Material::new("bread", (0.2, 0.3), 0.5, 0.3, 0.5),
        Material::new("darkbread", (0.2, 0.2), 0.1, 0.0, 0.0),
        Material {
            diffuse_color: Vec3::new(0.6, 0.5, 0.1),
            ..Material::new("backdrop", (0.6, 0.6), 0.0, 0.0, 0.0)
        },
        Material {
            diffuse_color: Vec3::new(0.3, 0.2, 0.3),
            specular_color: Vec3::new(0.4, 0.2, 0.2),
            ..Material::new("grape", (0.1, 0.1), 0.0, 0.0, 0.5)
        },
    ]
}
