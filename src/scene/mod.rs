//! The fixed tabletop still life: textures, materials, lights and the
//! placed primitives, plus the per-frame upload of all of it.
//!
//! The scene is plain data. Mesh generation, image decoding and the GPU
//! side of texture binding belong to whoever implements
//! [`UniformSink`](crate::renderer::UniformSink).

mod light;
mod material;
mod object;
mod texture;

use glam::{Vec3, Vec4};
pub use light::{still_life_lights, LightSource, MAX_LIGHTS};
pub use material::{still_life_materials, Material};
pub use object::{Placement, SceneObject, ShapeKind, Surface};
pub use texture::{TextureSlot, TextureTable, MAX_TEXTURE_SLOTS};

use crate::renderer::{uniforms, UniformSink};

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// Everything drawn each frame after the camera block is uploaded.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    textures: TextureTable,
    materials: Vec<Material>,
    lights: Vec<LightSource>,
    objects: Vec<SceneObject>,
}

impl Scene {
    /// Empty scene: no textures, materials, lights or objects.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The tabletop still life: backdrop, desk, phone box and lid, can,
    /// cone, orange, bottle and bottle cap under three lights.
    #[must_use]
    pub fn still_life() -> Self {
        let mut scene = Self::new();
        for (tag, path) in texture::STILL_LIFE_TEXTURES {
            let _ = scene.textures.register(tag, path);
        }
        scene.materials = still_life_materials();
        for light in still_life_lights() {
            let _ = scene.add_light(light);
        }
        for object in still_life_objects() {
            scene.add_object(object);
        }
        log::debug!(
            "still life: {} objects, {} textures, {} lights",
            scene.objects.len(),
            scene.textures.len(),
            scene.lights.len()
        );
        scene
    }

    /// Register a texture. See [`TextureTable::register`].
    pub fn add_texture(&mut self, tag: &str, path: &str) -> Option<usize> {
        self.textures.register(tag, path)
    }

    /// Add or replace a material by tag.
    pub fn add_material(&mut self, material: Material) {
        if let Some(existing) =
            self.materials.iter_mut().find(|m| m.tag == material.tag)
        {
            *existing = material;
        } else {
            self.materials.push(material);
        }
    }

    /// Add a light. Returns `false` once [`MAX_LIGHTS`] are in place.
    pub fn add_light(&mut self, light: LightSource) -> bool {
        if self.lights.len() >= MAX_LIGHTS {
            log::warn!("light limit of {MAX_LIGHTS} reached, ignoring light");
            return false;
        }
        self.lights.push(light);
        true
    }

    /// Append an object to the draw list.
    pub fn add_object(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    /// Texture slot assignment.
    #[must_use]
    pub fn textures(&self) -> &TextureTable {
        &self.textures
    }

    /// Defined materials.
    #[must_use]
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Material with the given tag.
    #[must_use]
    pub fn material(&self, tag: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.tag == tag)
    }

    /// Active lights.
    #[must_use]
    pub fn lights(&self) -> &[LightSource] {
        &self.lights
    }

    /// Objects in draw order.
    #[must_use]
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Enable lighting and upload every light.
    pub fn upload_lights(&self, sink: &mut dyn UniformSink) {
        sink.set_bool(uniforms::USE_LIGHTING, !self.lights.is_empty());
        for (index, light) in self.lights.iter().enumerate() {
            light.upload(index, sink);
        }
    }

    /// Upload lights, then each object's transform, surface and material,
    /// and request its draw.
    pub fn submit(&self, sink: &mut dyn UniformSink) {
        self.upload_lights(sink);
        for object in &self.objects {
            self.submit_object(object, sink);
        }
    }

    fn submit_object(&self, object: &SceneObject, sink: &mut dyn UniformSink) {
        sink.set_mat4(uniforms::MODEL, object.placement.model_matrix());

        match &object.surface {
            Surface::Textured { texture, uv_scale } => {
                if let Some(slot) = self.textures.slot(texture) {
                    sink.set_bool(uniforms::USE_TEXTURE, true);
                    sink.set_int(uniforms::OBJECT_TEXTURE, slot as i32);
                    sink.set_vec2(uniforms::UV_SCALE, *uv_scale);
                } else {
                    log::warn!(
                        "{}: unknown texture {texture}, drawing untextured",
                        object.name
                    );
                    sink.set_bool(uniforms::USE_TEXTURE, false);
                    sink.set_vec4(uniforms::OBJECT_COLOR, Vec4::ONE);
                }
            }
            Surface::Color(color) => {
                sink.set_bool(uniforms::USE_TEXTURE, false);
                sink.set_vec4(uniforms::OBJECT_COLOR, *color);
            }
        }

        if let Some(tag) = &object.material {
            match self.material(tag) {
                Some(material) => material.upload(sink),
                None => {
                    log::warn!("{}: unknown material {tag}", object.name);
                }
            }
        }

        sink.draw(object.shape);
    }
}

fn object(
    name: &str,
    shape: ShapeKind,
    placement: Placement,
    texture: &str,
    material: &str,
) -> SceneObject {
    SceneObject {
        name: name.to_owned(),
        shape,
        placement,
        surface: Surface::texture(texture),
        material: Some(material.to_owned()),
    }
}

/// Everything on the desk shares the phone box's 50° yaw.
fn on_desk(scale: Vec3, position: Vec3) -> Placement {
    Placement::new(scale, position).rotated(0.0, 50.0, 0.0)
}

/// Placements are relative to the phone box and the bottle so the
/// arrangement moves as a group.
fn still_life_objects() -> Vec<SceneObject> {
    let phone_box = Vec3::new(0.0, -0.5, 0.0);
    let lid_scale = Vec3::new(3.0, 0.1, 1.5);
    let lid = phone_box + Vec3::new(0.0, lid_scale.y + 0.12, 0.0);
    let can = phone_box + Vec3::new(-0.5, 0.3, 0.8);
    let orange = phone_box + Vec3::new(0.3, 0.65, -0.45);
    let bottle = Vec3::new(-3.0, -0.8, 0.0);
    let cap_scale = Vec3::new(0.5, 0.6, 0.5);
    let cap =
        bottle + Vec3::Y * (cap_scale.y + cap_scale.y / 2.5 + 1.65);

    let backdrop = Placement::new(
        Vec3::new(20.0, 1.0, 20.0),
        Vec3::new(0.0, 15.0, -8.0),
    )
    .rotated(90.0, 0.0, 0.0);
    let desk =
        Placement::new(Vec3::new(20.0, 0.6, 8.0), Vec3::new(0.0, -1.1, -0.9));

    vec![
        object("backdrop", ShapeKind::Plane, backdrop, "drywall", "metal"),
        object("desk", ShapeKind::Box, desk, "plank", "wood"),
        object(
            "phone box",
            ShapeKind::Box,
            on_desk(Vec3::new(3.0, 0.5, 1.5), phone_box),
            "iphone",
            "metal",
        ),
        object(
            "phone box lid",
            ShapeKind::Box,
            on_desk(lid_scale, lid),
            "box",
            "glass",
        ),
        object(
            "can",
            ShapeKind::Cylinder,
            on_desk(Vec3::new(0.2, 0.5, 0.2), can),
            "cone",
            "metal",
        ),
        object(
            "cone",
            ShapeKind::Cone,
            on_desk(Vec3::new(0.2, 0.3, 0.2), can + Vec3::Y * 0.5),
            "mint",
            "cheese",
        ),
        object(
            "orange",
            ShapeKind::Sphere,
            on_desk(Vec3::new(0.5, 0.5, 0.6), orange),
            "ball",
            "grape",
        ),
        object(
            "bottle",
            ShapeKind::Cylinder,
            on_desk(Vec3::new(0.5, 2.5, 0.4), bottle),
            "cylinder",
            "darkbread",
        ),
        object(
            "bottle cap",
            ShapeKind::TaperedCylinder,
            on_desk(cap_scale, cap),
            "top",
            "darkbread",
        ),
    ]
}
