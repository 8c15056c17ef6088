//! Uniform names understood by the scene shader.

/// World-to-eye matrix.
pub const VIEW: &str = "view";
/// Eye-to-clip matrix.
pub const PROJECTION: &str = "projection";
/// Eye position in world space.
pub const VIEW_POSITION: &str = "viewPosition";
/// Object-to-world matrix.
pub const MODEL: &str = "model";
/// Flat RGBA color used when texturing is off.
pub const OBJECT_COLOR: &str = "objectColor";
/// Sampler slot of the object's texture.
pub const OBJECT_TEXTURE: &str = "objectTexture";
/// Whether the fragment samples `objectTexture`.
pub const USE_TEXTURE: &str = "bUseTexture";
/// Whether lighting is evaluated.
pub const USE_LIGHTING: &str = "bUseLighting";
/// Texture coordinate multiplier.
pub const UV_SCALE: &str = "UVscale";

/// Material block fields.
pub mod material {
    /// Ambient reflectance color.
    pub const AMBIENT_COLOR: &str = "material.ambientColor";
    /// Ambient term weight.
    pub const AMBIENT_STRENGTH: &str = "material.ambientStrength";
    /// Diffuse reflectance color.
    pub const DIFFUSE_COLOR: &str = "material.diffuseColor";
    /// Specular reflectance color.
    pub const SPECULAR_COLOR: &str = "material.specularColor";
    /// Specular exponent.
    pub const SHININESS: &str = "material.shininess";
}

/// Fields of one entry in the `lightSources` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightField {
    /// World-space position.
    Position,
    /// Ambient contribution.
    AmbientColor,
    /// Diffuse contribution.
    DiffuseColor,
    /// Specular contribution.
    SpecularColor,
    /// Specular highlight focus.
    FocalStrength,
    /// Specular highlight intensity.
    SpecularIntensity,
}

impl LightField {
    fn as_str(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::AmbientColor => "ambientColor",
            Self::DiffuseColor => "diffuseColor",
            Self::SpecularColor => "specularColor",
            Self::FocalStrength => "focalStrength",
            Self::SpecularIntensity => "specularIntensity",
        }
    }
}

/// Uniform name for a field of light `index`, e.g.
/// `lightSources[2].position`.
#[must_use]
pub fn light(index: usize, field: LightField) -> String {
    format!("lightSources[{index}].{}", field.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_names_index_the_array() {
        assert_eq!(light(0, LightField::Position), "lightSources[0].position");
        assert_eq!(
            light(3, LightField::SpecularIntensity),
            "lightSources[3].specularIntensity"
        );
    }
}
