//! The boundary between the camera/scene core and whatever owns the GPU
//! program.
//!
//! The core never touches a graphics API. It pushes named uniform values
//! and draw requests into a [`UniformSink`]; the sink decides how those
//! reach the shader.

mod recording;
mod trace;
pub mod uniforms;

use glam::{Mat4, Vec2, Vec3, Vec4};
pub use recording::{RecordingSink, UniformValue};
pub use trace::TraceSink;

use crate::camera::CameraUniform;
use crate::scene::ShapeKind;

/// Receiver for named shader uniforms and mesh draw requests.
///
/// Implementations are expected to be cheap to call; the composer invokes
/// them several times per frame per object.
pub trait UniformSink {
    /// Upload a 4x4 matrix.
    fn set_mat4(&mut self, name: &str, value: Mat4);
    /// Upload a 4-component vector.
    fn set_vec4(&mut self, name: &str, value: Vec4);
    /// Upload a 3-component vector.
    fn set_vec3(&mut self, name: &str, value: Vec3);
    /// Upload a 2-component vector.
    fn set_vec2(&mut self, name: &str, value: Vec2);
    /// Upload a scalar.
    fn set_float(&mut self, name: &str, value: f32);
    /// Upload an integer (sampler slots included).
    fn set_int(&mut self, name: &str, value: i32);
    /// Upload a boolean flag.
    fn set_bool(&mut self, name: &str, value: bool);
    /// Draw one primitive mesh with the uniforms uploaded so far.
    fn draw(&mut self, shape: ShapeKind);

    /// Upload the per-frame camera block: view, projection and eye
    /// position.
    fn upload_camera(&mut self, camera: &CameraUniform) {
        self.set_mat4(uniforms::VIEW, camera.view_matrix());
        self.set_mat4(uniforms::PROJECTION, camera.projection_matrix());
        self.set_vec3(
            uniforms::VIEW_POSITION,
            Vec3::from_array(camera.view_position),
        );
    }
}

impl<S: UniformSink + ?Sized> UniformSink for Box<S> {
    fn set_mat4(&mut self, name: &str, value: Mat4) {
        (**self).set_mat4(name, value);
    }

    fn set_vec4(&mut self, name: &str, value: Vec4) {
        (**self).set_vec4(name, value);
    }

    fn set_vec3(&mut self, name: &str, value: Vec3) {
        (**self).set_vec3(name, value);
    }

    fn set_vec2(&mut self, name: &str, value: Vec2) {
        (**self).set_vec2(name, value);
    }

    fn set_float(&mut self, name: &str, value: f32) {
        (**self).set_float(name, value);
    }

    fn set_int(&mut self, name: &str, value: i32) {
        (**self).set_int(name, value);
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        (**self).set_bool(name, value);
    }

    fn draw(&mut self, shape: ShapeKind) {
        (**self).draw(shape);
    }

    fn upload_camera(&mut self, camera: &CameraUniform) {
        (**self).upload_camera(camera);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_block_uploads_three_uniforms() {
        let mut sink = RecordingSink::default();
        let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -3.0));
        let proj = Mat4::orthographic_rh_gl(-5.0, 5.0, -5.0, 5.0, 0.1, 100.0);
        sink.upload_camera(&CameraUniform::new(
            view,
            proj,
            Vec3::new(0.0, 0.0, 3.0),
        ));

        assert_eq!(sink.uploads().len(), 3);
        assert_eq!(sink.mat4(uniforms::VIEW), Some(view));
        assert_eq!(sink.mat4(uniforms::PROJECTION), Some(proj));
        assert_eq!(
            sink.vec3(uniforms::VIEW_POSITION),
            Some(Vec3::new(0.0, 0.0, 3.0))
        );
    }

    #[test]
    fn boxed_sink_forwards() {
        let mut sink: Box<RecordingSink> = Box::default();
        sink.set_bool(uniforms::USE_LIGHTING, true);
        sink.draw(ShapeKind::Sphere);
        assert_eq!(sink.bool(uniforms::USE_LIGHTING), Some(true));
        assert_eq!(sink.draws(), &[ShapeKind::Sphere]);
    }
}
