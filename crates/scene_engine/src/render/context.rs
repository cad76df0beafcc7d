//! Render context: explicit uniform-dispatch state for draw submission
//!
//! The context owns the "what does the next draw look like" state that a
//! raw graphics API would keep as hidden globals: current model transform,
//! flat-color-versus-textured selection, UV tiling scale, and material
//! fields. Exactly one of flat color or textured mode is active at draw
//! time; setting a color clears the texture flag, selecting a texture sets
//! it. Nothing resets between draws, so every draw block re-specifies its
//! state in full.

use crate::foundation::math::{compose_model, Vec2, Vec3, Vec4};
use crate::render::device::GraphicsDevice;
use crate::render::materials::MaterialRegistry;
use crate::render::shader::ShaderProgram;
use crate::render::textures::TextureRegistry;
use crate::render::RenderError;

// Uniform names of the active shader program.
const MODEL_UNIFORM: &str = "model";
const OBJECT_COLOR_UNIFORM: &str = "objectColor";
const OBJECT_TEXTURE_UNIFORM: &str = "objectTexture";
const USE_TEXTURE_UNIFORM: &str = "bUseTexture";
const UV_SCALE_UNIFORM: &str = "UVscale";
const MATERIAL_DIFFUSE_UNIFORM: &str = "material.diffuseColor";
const MATERIAL_SPECULAR_UNIFORM: &str = "material.specularColor";
const MATERIAL_SHININESS_UNIFORM: &str = "material.shininess";
const MATERIAL_EMISSIVE_UNIFORM: &str = "material.emissiveColor";

/// Uniform-dispatch boundary threaded through every object renderer
pub struct RenderContext<'a> {
    shader: &'a mut dyn ShaderProgram,
    device: &'a mut dyn GraphicsDevice,
    textures: &'a TextureRegistry,
    materials: &'a MaterialRegistry,
}

impl<'a> RenderContext<'a> {
    /// Create a context over the active shader, device, and registries
    pub fn new(
        shader: &'a mut dyn ShaderProgram,
        device: &'a mut dyn GraphicsDevice,
        textures: &'a TextureRegistry,
        materials: &'a MaterialRegistry,
    ) -> Self {
        Self {
            shader,
            device,
            textures,
            materials,
        }
    }

    /// Compose and push the model transform for the next draw
    ///
    /// Rotation angles are in degrees, applied X innermost, then Y, then Z,
    /// with translation last (see [`compose_model`]).
    pub fn set_transform(&mut self, scale: Vec3, rotation_degrees: Vec3, position: Vec3) {
        let model = compose_model(scale, rotation_degrees, position);
        self.shader.set_mat4(MODEL_UNIFORM, &model);
    }

    /// Select flat-color mode and set the color for the next draw
    ///
    /// Clears the use-texture flag; mutually exclusive with
    /// [`RenderContext::set_texture`].
    pub fn set_flat_color(&mut self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.shader.set_bool(USE_TEXTURE_UNIFORM, false);
        self.shader
            .set_vec4(OBJECT_COLOR_UNIFORM, Vec4::new(red, green, blue, alpha));
    }

    /// Select textured mode for the next draw
    ///
    /// Resolves `tag` to its texture unit via the registry. Unknown tags are
    /// an error: the scene's tag set is static, so a miss here means a
    /// misconfigured scene, not a runtime condition to paper over.
    pub fn set_texture(&mut self, tag: &str) -> Result<(), RenderError> {
        let slot = self
            .textures
            .find_slot(tag)
            .ok_or_else(|| RenderError::TagNotFound(tag.to_string()))?;

        self.shader.set_bool(USE_TEXTURE_UNIFORM, true);
        self.shader.set_sampler(OBJECT_TEXTURE_UNIFORM, slot as i32);
        Ok(())
    }

    /// Set the UV tiling scale for the next draw
    pub fn set_uv_scale(&mut self, u: f32, v: f32) {
        self.shader.set_vec2(UV_SCALE_UNIFORM, Vec2::new(u, v));
    }

    /// Resolve a material tag and push its fields for the next draw
    pub fn set_material(&mut self, tag: &str) -> Result<(), RenderError> {
        let material = self
            .materials
            .find(tag)
            .ok_or_else(|| RenderError::TagNotFound(tag.to_string()))?;

        self.shader
            .set_vec3(MATERIAL_DIFFUSE_UNIFORM, material.diffuse.xyz());
        self.shader
            .set_vec3(MATERIAL_SPECULAR_UNIFORM, material.specular);
        self.shader
            .set_float(MATERIAL_SHININESS_UNIFORM, material.shininess);
        self.shader
            .set_vec3(MATERIAL_EMISSIVE_UNIFORM, material.emissive);
        Ok(())
    }

    /// Run `body` with alpha blending enabled, disabling it afterwards
    ///
    /// Blending uses (source-alpha, one-minus-source-alpha) and is disabled
    /// again even when `body` fails, so no renderer can leak blend state
    /// into unrelated draws.
    pub fn with_alpha_blending<F>(&mut self, body: F) -> Result<(), RenderError>
    where
        F: FnOnce(&mut Self) -> Result<(), RenderError>,
    {
        self.device.enable_alpha_blending();
        let result = body(self);
        self.device.disable_alpha_blending();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::ImageData;
    use crate::render::device::RecordingDevice;
    use crate::render::materials::MaterialDescriptor;
    use crate::render::shader::{RecordingShader, UniformValue};

    fn registries() -> (TextureRegistry, MaterialRegistry, RecordingDevice) {
        let mut device = RecordingDevice::new();
        let mut textures = TextureRegistry::new();
        let img = ImageData::solid_color(1, 1, [255, 255, 255, 255]);
        textures.register(&mut device, &img, "fabric").unwrap();
        textures.register(&mut device, &img, "wood").unwrap();

        let mut materials = MaterialRegistry::new();
        materials
            .define(
                MaterialDescriptor::new(
                    "glass",
                    Vec4::new(0.3, 0.3, 0.3, 0.5),
                    Vec3::new(0.7, 0.6, 0.9),
                    95.0,
                )
            )
            .unwrap();

        (textures, materials, device)
    }

    #[test]
    fn flat_color_clears_texture_flag() {
        let (textures, materials, mut device) = registries();
        let mut shader = RecordingShader::new();
        let mut ctx = RenderContext::new(&mut shader, &mut device, &textures, &materials);

        ctx.set_texture("wood").unwrap();
        ctx.set_flat_color(0.39, 0.24, 0.12, 1.0);

        assert_eq!(shader.get("bUseTexture"), Some(&UniformValue::Bool(false)));
        assert!(matches!(
            shader.get("objectColor"),
            Some(UniformValue::Vec4(_))
        ));
    }

    #[test]
    fn texture_selection_resolves_unit_index() {
        let (textures, materials, mut device) = registries();
        let mut shader = RecordingShader::new();
        let mut ctx = RenderContext::new(&mut shader, &mut device, &textures, &materials);

        ctx.set_texture("wood").unwrap();

        assert_eq!(shader.get("bUseTexture"), Some(&UniformValue::Bool(true)));
        assert_eq!(shader.get("objectTexture"), Some(&UniformValue::Sampler(1)));
    }

    #[test]
    fn unknown_texture_tag_is_an_error() {
        let (textures, materials, mut device) = registries();
        let mut shader = RecordingShader::new();
        let mut ctx = RenderContext::new(&mut shader, &mut device, &textures, &materials);

        let err = ctx.set_texture("granite").unwrap_err();
        assert!(matches!(err, RenderError::TagNotFound(tag) if tag == "granite"));
    }

    #[test]
    fn material_pushes_all_fields() {
        let (textures, materials, mut device) = registries();
        let mut shader = RecordingShader::new();
        let mut ctx = RenderContext::new(&mut shader, &mut device, &textures, &materials);

        ctx.set_material("glass").unwrap();

        assert_eq!(
            shader.get("material.shininess"),
            Some(&UniformValue::Float(95.0))
        );
        assert_eq!(
            shader.get("material.diffuseColor"),
            Some(&UniformValue::Vec3(Vec3::new(0.3, 0.3, 0.3)))
        );
        assert_eq!(
            shader.get("material.emissiveColor"),
            Some(&UniformValue::Vec3(Vec3::zeros()))
        );
    }

    #[test]
    fn blending_is_disabled_even_on_error() {
        let (textures, materials, mut device) = registries();
        let mut shader = RecordingShader::new();
        let mut ctx = RenderContext::new(&mut shader, &mut device, &textures, &materials);

        let result = ctx.with_alpha_blending(|ctx| ctx.set_texture("missing"));
        assert!(result.is_err());
        assert!(!device.blend_enabled());
    }
}
