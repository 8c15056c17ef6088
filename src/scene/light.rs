use glam::Vec3;

use crate::renderer::uniforms::{self, LightField};
use crate::renderer::UniformSink;

/// Size of the shader's `lightSources` array.
pub const MAX_LIGHTS: usize = 4;

/// Point light feeding the Phong shader.
#[derive(Debug, Clone, PartialEq)]
pub struct LightSource {
    /// World-space position.
    pub position: Vec3,
    /// Ambient contribution.
    pub ambient_color: Vec3,
    /// Diffuse contribution.
    pub diffuse_color: Vec3,
    /// Specular contribution.
    pub specular_color: Vec3,
    /// Specular highlight focus (exponent).
    pub focal_strength: f32,
    /// Specular highlight intensity.
    pub specular_intensity: f32,
}

impl LightSource {
    /// Upload as entry `index` of `lightSources`.
    pub fn upload(&self, index: usize, sink: &mut dyn UniformSink) {
        sink.set_vec3(
            &uniforms::light(index, LightField::Position),
            self.position,
        );
        sink.set_vec3(
            &uniforms::light(index, LightField::AmbientColor),
            self.ambient_color,
        );
        sink.set_vec3(
            &uniforms::light(index, LightField::DiffuseColor),
            self.diffuse_color,
        );
        sink.set_vec3(
            &uniforms::light(index, LightField::SpecularColor),
            self.specular_color,
        );
        sink.set_float(
            &uniforms::light(index, LightField::FocalStrength),
            self.focal_strength,
        );
        sink.set_float(
            &uniforms::light(index, LightField::SpecularIntensity),
            self.specular_intensity,
        );
    }
}

/// Warm key light, neutral fill and an overhead light.
#[must_use]
pub fn still_life_lights() -> Vec<LightSource> {
    vec![
        LightSource {
            position: Vec3::new(-3.0, 5.0, 8.0),
            ambient_color: Vec3::new(0.2, 0.1, 0.1),
            diffuse_color: Vec3::new(0.7, 0.5, 0.5),
            specular_color: Vec3::splat(0.4),
            focal_strength: 32.0,
            specular_intensity: 6.5,
        },
        LightSource {
            position: Vec3::new(3.0, 5.0, 8.0),
            ambient_color: Vec3::splat(0.1),
            diffuse_color: Vec3::splat(0.6),
            specular_color: Vec3::splat(0.3),
            focal_strength: 32.0,
            specular_intensity: 5.4,
        },
        LightSource {
            position: Vec3::new(0.0, 10.0, 0.0),
            ambient_color: Vec3::splat(0.3),
            diffuse_color: Vec3::ONE,
            specular_color: Vec3::splat(0.5),
            focal_strength: 12.0,
            specular_intensity: 1.5,
        },
    ]
}
