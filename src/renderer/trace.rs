use glam::{Mat4, Vec2, Vec3, Vec4};

use super::UniformSink;
use crate::scene::ShapeKind;

/// Sink that logs uploads at `trace` level and counts them.
///
/// Stands in for a real shader program when the crate runs without a GPU
/// backend.
#[derive(Debug, Clone, Default)]
pub struct TraceSink {
    uploads: u64,
    draws: u64,
}

impl TraceSink {
    /// Uniform uploads seen so far.
    #[must_use]
    pub fn uploads(&self) -> u64 {
        self.uploads
    }

    /// Draw requests seen so far.
    #[must_use]
    pub fn draws(&self) -> u64 {
        self.draws
    }

    fn record(&mut self, name: &str, value: &dyn std::fmt::Debug) {
        self.uploads += 1;
        log::trace!("uniform {name} = {value:?}");
    }
}

impl UniformSink for TraceSink {
    fn set_mat4(&mut self, name: &str, value: Mat4) {
        self.record(name, &value);
    }

    fn set_vec4(&mut self, name: &str, value: Vec4) {
        self.record(name, &value);
    }

    fn set_vec3(&mut self, name: &str, value: Vec3) {
        self.record(name, &value);
    }

    fn set_vec2(&mut self, name: &str, value: Vec2) {
        self.record(name, &value);
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.record(name, &value);
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.record(name, &value);
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        self.record(name, &value);
    }

    fn draw(&mut self, shape: ShapeKind) {
        self.draws += 1;
        log::trace!("draw {shape:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_uploads_and_draws() {
        let mut sink = TraceSink::default();
        sink.set_float("material.shininess", 22.0);
        sink.set_int("objectTexture", 3);
        sink.draw(ShapeKind::Box);
        assert_eq!(sink.uploads(), 2);
        assert_eq!(sink.draws(), 1);
    }
}
