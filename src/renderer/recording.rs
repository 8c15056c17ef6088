use glam::{Mat4, Vec2, Vec3, Vec4};

use super::UniformSink;
use crate::scene::ShapeKind;

/// A single uploaded uniform value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    /// 4x4 matrix.
    Mat4(Mat4),
    /// 4-component vector.
    Vec4(Vec4),
    /// 3-component vector.
    Vec3(Vec3),
    /// 2-component vector.
    Vec2(Vec2),
    /// Scalar.
    Float(f32),
    /// Integer.
    Int(i32),
    /// Boolean flag.
    Bool(bool),
}

/// Sink that keeps every upload and draw in order. Useful for headless
/// runs and for asserting on what a frame would have sent to the GPU.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    uploads: Vec<(String, UniformValue)>,
    draws: Vec<ShapeKind>,
}

impl RecordingSink {
    /// Every upload in call order.
    #[must_use]
    pub fn uploads(&self) -> &[(String, UniformValue)] {
        &self.uploads
    }

    /// Every draw in call order.
    #[must_use]
    pub fn draws(&self) -> &[ShapeKind] {
        &self.draws
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.uploads.clear();
        self.draws.clear();
    }

    /// Most recent value uploaded under `name`.
    #[must_use]
    pub fn last(&self, name: &str) -> Option<UniformValue> {
        self.uploads
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    /// Most recent matrix uploaded under `name`.
    #[must_use]
    pub fn mat4(&self, name: &str) -> Option<Mat4> {
        match self.last(name)? {
            UniformValue::Mat4(m) => Some(m),
            _ => None,
        }
    }

    /// Most recent 3-vector uploaded under `name`.
    #[must_use]
    pub fn vec3(&self, name: &str) -> Option<Vec3> {
        match self.last(name)? {
            UniformValue::Vec3(v) => Some(v),
            _ => None,
        }
    }

    /// Most recent integer uploaded under `name`.
    #[must_use]
    pub fn int(&self, name: &str) -> Option<i32> {
        match self.last(name)? {
            UniformValue::Int(v) => Some(v),
            _ => None,
        }
    }

    /// Most recent flag uploaded under `name`.
    #[must_use]
    pub fn bool(&self, name: &str) -> Option<bool> {
        match self.last(name)? {
            UniformValue::Bool(v) => Some(v),
            _ => None,
        }
    }

    fn push(&mut self, name: &str, value: UniformValue) {
        self.uploads.push((name.to_owned(), value));
    }
}

impl UniformSink for RecordingSink {
    fn set_mat4(&mut self, name: &str, value: Mat4) {
        self.push(name, UniformValue::Mat4(value));
    }

    fn set_vec4(&mut self, name: &str, value: Vec4) {
        self.push(name, UniformValue::Vec4(value));
    }

    fn set_vec3(&mut self, name: &str, value: Vec3) {
        self.push(name, UniformValue::Vec3(value));
    }

    fn set_vec2(&mut self, name: &str, value: Vec2) {
        self.push(name, UniformValue::Vec2(value));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.push(name, UniformValue::Float(value));
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.push(name, UniformValue::Int(value));
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        self.push(name, UniformValue::Bool(value));
    }

    fn draw(&mut self, shape: ShapeKind) {
        self.draws.push(shape);
    }
}
