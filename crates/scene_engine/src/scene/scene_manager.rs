//! Still-life scene: preparation and per-frame rendering
//!
//! The scene is a fixed arrangement: a cloth-covered table, a fabric
//! backdrop, a translucent potion bottle, a candle with a flickering flame,
//! two stacked books, and a cauldron of glowing liquid. Each object has its
//! own renderer that walks a fixed script of draw blocks; every block pushes
//! its full state (transform, color or texture, UV scale, material) before
//! the draw, so block order never leaks state between objects.

use std::path::PathBuf;

use crate::config::SceneConfig;
use crate::foundation::math::{Vec3, Vec4};
use crate::render::context::RenderContext;
use crate::render::device::GraphicsDevice;
use crate::render::lighting::{self, JitterSource};
use crate::render::materials::{MaterialDescriptor, MaterialRegistry};
use crate::render::meshes::{BoxSide, ShapeMeshes};
use crate::render::shader::ShaderProgram;
use crate::render::textures::TextureRegistry;
use crate::render::RenderError;

/// Texture manifest: image file name under the texture root, and the tag
/// the renderers reference it by
pub const SCENE_TEXTURES: [(&str, &str); 9] = [
    ("knit.jpg", "fabric"),
    ("glass.jpg", "glass"),
    ("rubber.jpg", "rubber"),
    ("candle.jpg", "candle"),
    ("stainless.jpg", "stainless"),
    ("metal.jpg", "metal"),
    ("pages.jpg", "pages"),
    ("leather.png", "leather"),
    ("wood.jpg", "wood"),
];

// Whole-object scale factors for the potion bottle.
const BOTTLE_SCALE: f32 = 0.9;
const LIQUID_SCALE: f32 = 0.8;

/// One texture that failed to load during preparation
#[derive(Debug)]
pub struct TextureFailure {
    /// Path that was opened
    pub path: PathBuf,
    /// Tag the texture would have been registered under
    pub tag: String,
    /// What went wrong
    pub error: RenderError,
}

/// Outcome of scene preparation
#[derive(Debug)]
pub struct PrepareReport {
    /// Number of textures loaded and registered
    pub textures_loaded: usize,
    /// Textures that failed to load; their surfaces render flat-colored
    pub failures: Vec<TextureFailure>,
}

impl PrepareReport {
    /// True when every manifest texture loaded
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Owner of the scene's registries and renderer scripts
pub struct SceneManager {
    config: SceneConfig,
    textures: TextureRegistry,
    materials: MaterialRegistry,
}

impl SceneManager {
    /// Create a scene manager with empty registries
    pub fn new(config: SceneConfig) -> Self {
        Self {
            config,
            textures: TextureRegistry::new(),
            materials: MaterialRegistry::new(),
        }
    }

    /// One-time scene setup: textures, materials, lights, and mesh uploads
    ///
    /// Texture failures are collected rather than fatal unless
    /// `abort_on_texture_failure` is set; a surface whose texture is missing
    /// falls back to its flat color at draw time.
    pub fn prepare(
        &mut self,
        device: &mut dyn GraphicsDevice,
        shader: &mut dyn ShaderProgram,
        meshes: &mut dyn ShapeMeshes,
    ) -> Result<PrepareReport, RenderError> {
        let mut textures_loaded = 0;
        let mut failures = Vec::new();

        for (file_name, tag) in SCENE_TEXTURES {
            let path = self.config.texture_path(file_name);
            match self.textures.load(device, &path, tag) {
                Ok(()) => textures_loaded += 1,
                Err(error) => {
                    log::warn!("Failed to load texture '{}' from {:?}: {}", tag, path, error);
                    if self.config.abort_on_texture_failure {
                        return Err(error);
                    }
                    failures.push(TextureFailure {
                        path,
                        tag: tag.to_string(),
                        error,
                    });
                }
            }
        }

        self.textures.bind_all(device);
        self.define_materials()?;
        lighting::setup_scene_lights(shader);

        meshes.load_box_mesh();
        meshes.load_plane_mesh();
        meshes.load_cylinder_mesh();
        meshes.load_cone_mesh();
        meshes.load_prism_mesh();
        meshes.load_pyramid4_mesh();
        meshes.load_sphere_mesh();
        meshes.load_half_sphere_mesh();
        meshes.load_tapered_cylinder_mesh();
        meshes.load_torus_mesh();

        log::info!(
            "Scene prepared: {} of {} textures, {} materials",
            textures_loaded,
            SCENE_TEXTURES.len(),
            self.materials.len()
        );

        Ok(PrepareReport {
            textures_loaded,
            failures,
        })
    }

    /// Render one frame of the scene
    ///
    /// Updates the flame light first so the candle's flame geometry is drawn
    /// in the same color the light casts this frame, then runs each object
    /// renderer in fixed order.
    pub fn render(
        &self,
        device: &mut dyn GraphicsDevice,
        shader: &mut dyn ShaderProgram,
        meshes: &mut dyn ShapeMeshes,
        time: f32,
        jitter: &mut dyn JitterSource,
    ) -> Result<(), RenderError> {
        let flame_color = lighting::update_flame_light(shader, time, jitter);

        let mut ctx = RenderContext::new(shader, device, &self.textures, &self.materials);

        render_table(&mut ctx, meshes)?;
        render_backdrop(&mut ctx, meshes)?;
        render_potion_bottle(&mut ctx, meshes)?;
        render_candle(&mut ctx, meshes, flame_color, time)?;
        render_bottom_book(&mut ctx, meshes)?;
        render_top_book(&mut ctx, meshes)?;
        render_cauldron(&mut ctx, meshes)?;

        Ok(())
    }

    /// Release all GPU texture objects; the scene can be prepared again
    pub fn release(&mut self, device: &mut dyn GraphicsDevice) {
        self.textures.release_all(device);
    }

    /// Texture registry, for inspection
    pub fn textures(&self) -> &TextureRegistry {
        &self.textures
    }

    /// Material registry, for inspection
    pub fn materials(&self) -> &MaterialRegistry {
        &self.materials
    }

    fn define_materials(&mut self) -> Result<(), RenderError> {
        self.materials.define(MaterialDescriptor::new(
            "backdrop",
            Vec4::new(0.258824, 0.258824, 0.435294, 1.0),
            Vec3::zeros(),
            0.3,
        ))?;
        self.materials.define(MaterialDescriptor::new(
            "glass",
            Vec4::new(0.3, 0.3, 0.3, 0.5),
            Vec3::new(0.7, 0.6, 0.9),
            95.0,
        ))?;
        self.materials.define(MaterialDescriptor::new(
            "metal",
            Vec4::new(0.4, 0.4, 0.4, 1.0),
            Vec3::new(0.7, 0.7, 0.6),
            52.0,
        ))?;
        self.materials.define(MaterialDescriptor::new(
            "wood",
            Vec4::new(0.2, 0.2, 0.3, 1.0),
            Vec3::zeros(),
            0.1,
        ))?;
        self.materials.define(
            MaterialDescriptor::new(
                "flame",
                Vec4::new(1.0, 0.5, 0.0, 1.0),
                Vec3::new(1.0, 0.6, 0.3),
                32.0,
            )
            .with_emissive(Vec3::new(1.0, 0.4, 0.0)),
        )?;
        self.materials.define(MaterialDescriptor::new(
            "liquid",
            Vec4::new(0.396, 0.694, 0.996, 0.9),
            Vec3::new(0.3, 0.5, 0.7),
            50.0,
        ))?;
        Ok(())
    }
}

/// Select a texture, falling back to the block's flat color when the tag
/// never loaded
fn apply_texture(ctx: &mut RenderContext, tag: &str) {
    if let Err(error) = ctx.set_texture(tag) {
        log::debug!("Texture '{}' unavailable, drawing flat: {}", tag, error);
    }
}

/// Cloth-covered table top
fn render_table(ctx: &mut RenderContext, meshes: &mut dyn ShapeMeshes) -> Result<(), RenderError> {
    // Fabric runner on the table.
    ctx.set_transform(
        Vec3::new(20.0, 0.2, 15.0),
        Vec3::zeros(),
        Vec3::new(0.0, -0.2, -0.9),
    );
    ctx.set_flat_color(1.0, 1.0, 1.0, 1.0);
    apply_texture(ctx, "fabric");
    ctx.set_uv_scale(1.0, 1.0);
    ctx.set_material("wood")?;
    meshes.draw_box_mesh();

    // Table slab.
    ctx.set_transform(
        Vec3::new(50.0, 1.5, 15.0),
        Vec3::zeros(),
        Vec3::new(0.0, -1.2, -0.9),
    );
    ctx.set_flat_color(0.39, 0.24, 0.12, 1.0);
    apply_texture(ctx, "wood");
    ctx.set_uv_scale(1.0, 1.0);
    ctx.set_material("wood")?;
    meshes.draw_box_mesh();

    Ok(())
}

/// Fabric backdrop plane behind the table
fn render_backdrop(
    ctx: &mut RenderContext,
    meshes: &mut dyn ShapeMeshes,
) -> Result<(), RenderError> {
    ctx.set_transform(
        Vec3::new(20.0, 1.0, 20.0),
        Vec3::new(90.0, 0.0, 0.0),
        Vec3::new(0.0, 15.0, -9.0),
    );
    ctx.set_flat_color(1.0, 1.0, 1.0, 1.0);
    apply_texture(ctx, "fabric");
    ctx.set_uv_scale(10.0, 10.0);
    ctx.set_material("backdrop")?;
    meshes.draw_plane_mesh();

    Ok(())
}

/// Translucent glass bottle with liquid inside and a rubber stopper
///
/// The translucent parts (liquid and glass) draw inside an alpha-blending
/// bracket; the opaque stopper draws after it, outside the bracket.
fn render_potion_bottle(
    ctx: &mut RenderContext,
    meshes: &mut dyn ShapeMeshes,
) -> Result<(), RenderError> {
    let glass_color = (0.196, 0.294, 0.796, 0.65);

    ctx.with_alpha_blending(|ctx| {
        // Liquid fill, a box slightly inside the glass walls.
        ctx.set_transform(
            Vec3::new(2.0, 2.8, 2.0) * LIQUID_SCALE,
            Vec3::new(0.0, 15.0, 0.0),
            Vec3::new(4.0, 5.5 * LIQUID_SCALE, -1.0),
        );
        ctx.set_flat_color(0.396, 0.694, 0.996, 0.7);
        ctx.set_uv_scale(1.0, 1.0);
        ctx.set_material("liquid")?;
        meshes.draw_box_mesh();

        // Glass body, a box without its top face.
        ctx.set_transform(
            Vec3::new(2.0, 3.5, 2.0) * BOTTLE_SCALE,
            Vec3::new(0.0, 15.0, 0.0),
            Vec3::new(4.0, 4.75 * BOTTLE_SCALE, -1.0),
        );
        ctx.set_flat_color(glass_color.0, glass_color.1, glass_color.2, glass_color.3);
        ctx.set_uv_scale(1.0, 1.0);
        ctx.set_material("glass")?;
        meshes.draw_box_mesh_side(BoxSide::Front);
        meshes.draw_box_mesh_side(BoxSide::Back);
        meshes.draw_box_mesh_side(BoxSide::Left);
        meshes.draw_box_mesh_side(BoxSide::Right);
        meshes.draw_box_mesh_side(BoxSide::Bottom);

        // Shoulder, a four-sided pyramid.
        ctx.set_transform(
            Vec3::new(2.0, 1.5, 2.0) * BOTTLE_SCALE,
            Vec3::new(0.0, 15.0, 0.0),
            Vec3::new(4.0, 7.25 * BOTTLE_SCALE, -1.0),
        );
        ctx.set_flat_color(glass_color.0, glass_color.1, glass_color.2, glass_color.3);
        ctx.set_uv_scale(1.0, 1.0);
        ctx.set_material("glass")?;
        meshes.draw_pyramid4_mesh();

        // Neck.
        ctx.set_transform(
            Vec3::new(0.35, 2.2, 0.35) * BOTTLE_SCALE,
            Vec3::new(0.0, 15.0, 0.0),
            Vec3::new(4.0, 7.0 * BOTTLE_SCALE, -1.0),
        );
        ctx.set_flat_color(glass_color.0, glass_color.1, glass_color.2, glass_color.3);
        ctx.set_uv_scale(1.0, 1.0);
        ctx.set_material("glass")?;
        meshes.draw_cylinder_mesh();

        // Lip around the mouth.
        ctx.set_transform(
            Vec3::new(0.42, 0.42, 0.65) * BOTTLE_SCALE,
            Vec3::new(90.0, 0.0, 0.0),
            Vec3::new(4.0, 9.2 * BOTTLE_SCALE, -1.0),
        );
        ctx.set_flat_color(glass_color.0, glass_color.1, glass_color.2, glass_color.3);
        ctx.set_uv_scale(1.0, 1.0);
        ctx.set_material("glass")?;
        meshes.draw_torus_mesh();

        Ok(())
    })?;

    // Rubber stopper, upside-down tapered cylinder; opaque, so drawn
    // outside the blending bracket.
    ctx.set_transform(
        Vec3::new(0.45, 0.69, 0.45) * BOTTLE_SCALE,
        Vec3::new(180.0, 0.0, 0.0),
        Vec3::new(4.0, 9.92 * BOTTLE_SCALE, -1.0),
    );
    ctx.set_flat_color(1.0, 1.0, 1.0, 1.0);
    apply_texture(ctx, "rubber");
    ctx.set_uv_scale(2.0, 2.0);
    ctx.set_material("wood")?;
    meshes.draw_tapered_cylinder_mesh();

    Ok(())
}

/// Candlestick, candle, wick, and the translucent flame
///
/// `flame_color` is whatever [`lighting::update_flame_light`] returned this
/// frame, so the flame geometry matches the light it casts; flame alpha
/// pulses on its own clock.
fn render_candle(
    ctx: &mut RenderContext,
    meshes: &mut dyn ShapeMeshes,
    flame_color: Vec3,
    time: f32,
) -> Result<(), RenderError> {
    let holder = |ctx: &mut RenderContext| -> Result<(), RenderError> {
        ctx.set_flat_color(0.2, 0.2, 0.2, 1.0);
        apply_texture(ctx, "metal");
        ctx.set_uv_scale(1.0, 1.0);
        ctx.set_material("metal")
    };

    // Candleholder foot ring.
    ctx.set_transform(
        Vec3::new(1.5, 1.7, 1.5),
        Vec3::new(90.0, 0.0, 0.0),
        Vec3::new(-5.0, 0.25, 0.9),
    );
    holder(ctx)?;
    meshes.draw_torus_mesh();

    // Bell-shaped base.
    ctx.set_transform(
        Vec3::new(1.5, 2.2, 1.5),
        Vec3::zeros(),
        Vec3::new(-5.0, 0.3, 0.9),
    );
    holder(ctx)?;
    meshes.draw_tapered_cylinder_mesh();

    // Stem collar.
    ctx.set_transform(
        Vec3::new(0.5, 0.5, 0.5),
        Vec3::zeros(),
        Vec3::new(-5.0, 2.5, 0.9),
    );
    holder(ctx)?;
    meshes.draw_cylinder_mesh();

    // Lower stem.
    ctx.set_transform(
        Vec3::new(0.58, 1.4, 0.58),
        Vec3::new(0.0, 90.0, 0.0),
        Vec3::new(-5.0, 3.0, 0.9),
    );
    holder(ctx)?;
    meshes.draw_tapered_cylinder_mesh();

    // Upper stem, flipped so it widens towards the cup.
    ctx.set_transform(
        Vec3::new(0.62, 1.9, 0.62),
        Vec3::new(0.0, 0.0, 180.0),
        Vec3::new(-5.0, 5.8, 0.9),
    );
    holder(ctx)?;
    meshes.draw_tapered_cylinder_mesh();

    // Cup lip.
    ctx.set_transform(
        Vec3::new(0.7, 0.7, 0.45),
        Vec3::new(90.0, 0.0, 0.0),
        Vec3::new(-5.0, 5.85, 0.9),
    );
    holder(ctx)?;
    meshes.draw_torus_mesh();

    // Wax candle.
    ctx.set_transform(
        Vec3::new(0.35, 2.4, 0.35),
        Vec3::zeros(),
        Vec3::new(-5.0, 5.8, 0.9),
    );
    ctx.set_flat_color(1.0, 1.0, 1.0, 1.0);
    apply_texture(ctx, "candle");
    ctx.set_uv_scale(2.0, 1.0);
    ctx.set_material("wood")?;
    meshes.draw_cylinder_mesh();

    // Wick.
    ctx.set_transform(
        Vec3::new(0.04, 0.6, 0.04),
        Vec3::zeros(),
        Vec3::new(-5.0, 8.0, 0.9),
    );
    ctx.set_flat_color(0.1, 0.1, 0.1, 1.0);
    apply_texture(ctx, "rubber");
    ctx.set_uv_scale(1.0, 1.0);
    ctx.set_material("wood")?;
    meshes.draw_cone_mesh();

    // Flame, semi-transparent and colored like its light.
    ctx.set_transform(
        Vec3::new(0.2, 0.8, 0.2),
        Vec3::zeros(),
        Vec3::new(-5.0, 8.0, 0.9),
    );
    let alpha = lighting::flame_alpha(time);
    ctx.set_flat_color(flame_color.x, flame_color.y, flame_color.z, alpha);
    ctx.set_uv_scale(1.0, 1.0);
    ctx.set_material("flame")?;
    ctx.with_alpha_blending(|_ctx| {
        meshes.draw_cone_mesh();
        Ok(())
    })?;

    Ok(())
}

/// Bottom book of the stack, rotated 30 degrees
fn render_bottom_book(
    ctx: &mut RenderContext,
    meshes: &mut dyn ShapeMeshes,
) -> Result<(), RenderError> {
    // Page block, side faces only.
    ctx.set_transform(
        Vec3::new(4.0, 1.4, 4.5),
        Vec3::new(0.0, 30.0, 0.0),
        Vec3::new(4.0, 0.75, -1.0),
    );
    ctx.set_flat_color(0.659, 0.576, 0.439, 1.0);
    apply_texture(ctx, "pages");
    ctx.set_uv_scale(2.0, 0.5);
    ctx.set_material("wood")?;
    meshes.draw_box_mesh_side(BoxSide::Front);
    meshes.draw_box_mesh_side(BoxSide::Back);
    meshes.draw_box_mesh_side(BoxSide::Left);
    meshes.draw_box_mesh_side(BoxSide::Right);

    let cover = |ctx: &mut RenderContext| -> Result<(), RenderError> {
        ctx.set_flat_color(0.36, 0.25, 0.20, 1.0);
        apply_texture(ctx, "leather");
        ctx.set_uv_scale(0.5, 6.0);
        ctx.set_material("wood")
    };

    // Bottom cover.
    ctx.set_transform(
        Vec3::new(4.2, 0.2, 4.7),
        Vec3::new(0.0, 30.0, 0.0),
        Vec3::new(4.0, 0.1, -1.0),
    );
    cover(ctx)?;
    meshes.draw_box_mesh();

    // Top cover.
    ctx.set_transform(
        Vec3::new(4.2, 0.2, 4.7),
        Vec3::new(0.0, 30.0, 0.0),
        Vec3::new(4.0, 1.5, -1.0),
    );
    cover(ctx)?;
    meshes.draw_box_mesh();

    // Spine, stood upright along the page block.
    ctx.set_transform(
        Vec3::new(1.6, 0.2, 4.7),
        Vec3::new(30.0, 0.0, 90.0),
        Vec3::new(5.8, 0.8, -2.05),
    );
    cover(ctx)?;
    meshes.draw_box_mesh();

    Ok(())
}

/// Top book of the stack, rotated 60 degrees
fn render_top_book(
    ctx: &mut RenderContext,
    meshes: &mut dyn ShapeMeshes,
) -> Result<(), RenderError> {
    // Page block, side faces only.
    ctx.set_transform(
        Vec3::new(4.0, 1.5, 4.5),
        Vec3::new(0.0, 60.0, 0.0),
        Vec3::new(4.0, 2.35, -1.0),
    );
    ctx.set_flat_color(1.0, 1.0, 1.0, 1.0);
    apply_texture(ctx, "pages");
    ctx.set_uv_scale(1.0, 1.0);
    ctx.set_material("wood")?;
    meshes.draw_box_mesh_side(BoxSide::Front);
    meshes.draw_box_mesh_side(BoxSide::Back);
    meshes.draw_box_mesh_side(BoxSide::Left);
    meshes.draw_box_mesh_side(BoxSide::Right);

    // Bottom cover.
    ctx.set_transform(
        Vec3::new(4.2, 0.2, 4.7),
        Vec3::new(0.0, 60.0, 0.0),
        Vec3::new(4.0, 1.7, -1.0),
    );
    ctx.set_flat_color(0.36, 0.25, 0.20, 1.0);
    apply_texture(ctx, "leather");
    ctx.set_uv_scale(1.0, 1.0);
    ctx.set_material("wood")?;
    meshes.draw_box_mesh();

    // Top cover.
    ctx.set_transform(
        Vec3::new(4.2, 0.2, 4.7),
        Vec3::new(0.0, 60.0, 0.0),
        Vec3::new(4.0, 3.1, -1.0),
    );
    ctx.set_flat_color(0.36, 0.25, 0.20, 1.0);
    apply_texture(ctx, "leather");
    ctx.set_uv_scale(1.0, 1.0);
    ctx.set_material("wood")?;
    meshes.draw_box_mesh();

    // Spine.
    ctx.set_transform(
        Vec3::new(1.6, 0.2, 4.7),
        Vec3::new(60.0, 0.0, 90.0),
        Vec3::new(5.0, 2.4, -2.735),
    );
    ctx.set_flat_color(0.36, 0.25, 0.20, 1.0);
    apply_texture(ctx, "leather");
    ctx.set_uv_scale(0.5, 6.0);
    ctx.set_material("wood")?;
    meshes.draw_box_mesh();

    Ok(())
}

/// Cauldron: half-sphere body, torus rim, three legs, translucent liquid
fn render_cauldron(
    ctx: &mut RenderContext,
    meshes: &mut dyn ShapeMeshes,
) -> Result<(), RenderError> {
    let iron = |ctx: &mut RenderContext| -> Result<(), RenderError> {
        ctx.set_flat_color(0.1, 0.1, 0.1, 1.0);
        apply_texture(ctx, "metal");
        ctx.set_uv_scale(1.0, 1.0);
        ctx.set_material("metal")
    };

    // Body, a flipped half sphere.
    ctx.set_transform(
        Vec3::new(3.2, 4.2, 3.2),
        Vec3::new(180.0, 0.0, 0.0),
        Vec3::new(-1.5, 4.6, -2.5),
    );
    iron(ctx)?;
    meshes.draw_half_sphere_mesh();

    // Rim, a torus laid flat over the body's mouth.
    ctx.set_transform(
        Vec3::new(3.0, 3.0, 0.6),
        Vec3::new(90.0, 0.0, 0.0),
        Vec3::new(-1.5, 4.5, -2.5),
    );
    iron(ctx)?;
    meshes.draw_torus_mesh();

    // Three legs, tapered cylinders flipped point-down.
    let leg_positions = [
        Vec3::new(-2.8, 2.0, -3.0),
        Vec3::new(-0.2, 2.0, -3.0),
        Vec3::new(-1.25, 2.0, -1.0),
    ];
    for position in leg_positions {
        ctx.set_transform(
            Vec3::new(0.6, 1.9, 0.3),
            Vec3::new(0.0, 0.0, 180.0),
            position,
        );
        iron(ctx)?;
        meshes.draw_tapered_cylinder_mesh();
    }

    // Glowing liquid surface, just below the rim.
    ctx.with_alpha_blending(|ctx| {
        ctx.set_transform(
            Vec3::new(2.8, 1.5, 2.8),
            Vec3::zeros(),
            Vec3::new(-1.5, 2.75, -2.5),
        );
        ctx.set_flat_color(0.3, 0.8, 1.0, 0.65);
        ctx.set_uv_scale(1.0, 1.0);
        ctx.set_material("liquid")?;
        meshes.draw_cylinder_mesh();
        Ok(())
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::ImageData;
    use crate::render::device::{DeviceEvent, RecordingDevice};
    use crate::render::lighting::SequenceJitter;
    use crate::render::meshes::{MeshDraw, RecordingMeshes};
    use crate::render::shader::{RecordingShader, UniformValue};

    fn prepared_scene(device: &mut RecordingDevice) -> SceneManager {
        let mut scene = SceneManager::new(SceneConfig::default());
        let img = ImageData::solid_color(2, 2, [128, 128, 128, 255]);
        for (_, tag) in SCENE_TEXTURES {
            scene.textures.register(device, &img, tag).unwrap();
        }
        scene.define_materials().unwrap();
        scene
    }

    fn blend_counts(device: &RecordingDevice) -> (usize, usize) {
        let enabled = device
            .events()
            .iter()
            .filter(|e| matches!(e, DeviceEvent::BlendEnabled))
            .count();
        let disabled = device
            .events()
            .iter()
            .filter(|e| matches!(e, DeviceEvent::BlendDisabled))
            .count();
        (enabled, disabled)
    }

    #[test]
    fn prepare_with_missing_textures_reports_failures() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SceneConfig::default();
        config.texture_root = dir.path().to_path_buf();

        let mut scene = SceneManager::new(config);
        let (mut device, mut shader, mut meshes) = crate::render::recording_backend();

        let report = scene
            .prepare(&mut device, &mut shader, &mut meshes)
            .unwrap();

        assert_eq!(report.textures_loaded, 0);
        assert_eq!(report.failures.len(), SCENE_TEXTURES.len());
        assert!(!report.is_complete());

        // Materials, lights, and meshes still come up.
        assert_eq!(scene.materials().len(), 6);
        assert_eq!(meshes.loads().len(), 10);
        assert_eq!(
            shader.get("bUseLighting"),
            Some(&UniformValue::Bool(true))
        );
    }

    #[test]
    fn prepare_aborts_on_first_failure_when_configured() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SceneConfig::default();
        config.texture_root = dir.path().to_path_buf();
        config.abort_on_texture_failure = true;

        let mut scene = SceneManager::new(config);
        let (mut device, mut shader, mut meshes) = crate::render::recording_backend();

        assert!(scene.prepare(&mut device, &mut shader, &mut meshes).is_err());
        assert!(scene.textures().is_empty());
    }

    #[test]
    fn bottle_blends_translucent_parts_only() {
        let mut device = RecordingDevice::new();
        let scene = prepared_scene(&mut device);
        let mut shader = RecordingShader::new();
        let mut meshes = RecordingMeshes::new();

        {
            let mut ctx =
                RenderContext::new(&mut shader, &mut device, &scene.textures, &scene.materials);
            render_potion_bottle(&mut ctx, &mut meshes).unwrap();
        }

        assert_eq!(blend_counts(&device), (1, 1));
        assert!(!device.blend_enabled());
        // Opaque stopper is the final draw, after the blend bracket closes.
        assert_eq!(meshes.draws().last(), Some(&MeshDraw::TaperedCylinder));
    }

    #[test]
    fn flame_draws_blended_with_light_color() {
        let mut device = RecordingDevice::new();
        let scene = prepared_scene(&mut device);
        let mut shader = RecordingShader::new();
        let mut meshes = RecordingMeshes::new();
        let flame = Vec3::new(1.0, 0.55, 0.1);
        let time = 3.0;

        {
            let mut ctx =
                RenderContext::new(&mut shader, &mut device, &scene.textures, &scene.materials);
            render_candle(&mut ctx, &mut meshes, flame, time).unwrap();
        }

        assert_eq!(blend_counts(&device), (1, 1));
        assert!(!device.blend_enabled());

        // The last color written is the flame's, with the pulsing alpha.
        let expected_alpha = lighting::flame_alpha(time);
        assert_eq!(
            shader.get("objectColor"),
            Some(&UniformValue::Vec4(Vec4::new(
                flame.x,
                flame.y,
                flame.z,
                expected_alpha
            )))
        );
        assert_eq!(meshes.draws().last(), Some(&MeshDraw::Cone));
    }

    #[test]
    fn cauldron_blends_only_the_liquid() {
        let mut device = RecordingDevice::new();
        let scene = prepared_scene(&mut device);
        let mut shader = RecordingShader::new();
        let mut meshes = RecordingMeshes::new();

        {
            let mut ctx =
                RenderContext::new(&mut shader, &mut device, &scene.textures, &scene.materials);
            render_cauldron(&mut ctx, &mut meshes).unwrap();
        }

        assert_eq!(blend_counts(&device), (1, 1));
        assert!(!device.blend_enabled());
        assert_eq!(
            meshes.draws(),
            &[
                MeshDraw::HalfSphere,
                MeshDraw::Torus,
                MeshDraw::TaperedCylinder,
                MeshDraw::TaperedCylinder,
                MeshDraw::TaperedCylinder,
                MeshDraw::Cylinder,
            ]
        );
    }

    #[test]
    fn books_draw_pages_as_four_sides() {
        let mut device = RecordingDevice::new();
        let scene = prepared_scene(&mut device);
        let mut shader = RecordingShader::new();
        let mut meshes = RecordingMeshes::new();

        {
            let mut ctx =
                RenderContext::new(&mut shader, &mut device, &scene.textures, &scene.materials);
            render_bottom_book(&mut ctx, &mut meshes).unwrap();
        }

        assert_eq!(
            meshes.draws(),
            &[
                MeshDraw::BoxSide(BoxSide::Front),
                MeshDraw::BoxSide(BoxSide::Back),
                MeshDraw::BoxSide(BoxSide::Left),
                MeshDraw::BoxSide(BoxSide::Right),
                MeshDraw::Box,
                MeshDraw::Box,
                MeshDraw::Box,
            ]
        );
    }

    #[test]
    fn render_survives_missing_textures() {
        let mut device = RecordingDevice::new();
        let mut scene = SceneManager::new(SceneConfig::default());
        scene.define_materials().unwrap();
        let mut shader = RecordingShader::new();
        let mut meshes = RecordingMeshes::new();
        let mut jitter = SequenceJitter::zero();

        scene
            .render(&mut device, &mut shader, &mut meshes, 1.0, &mut jitter)
            .unwrap();

        // Flat-color fallback: no sampler selection ever happened.
        assert!(shader.get("objectTexture").is_none());
        assert!(!meshes.draws().is_empty());
    }

    #[test]
    fn release_clears_texture_registry() {
        let mut device = RecordingDevice::new();
        let mut scene = SceneManager::new(SceneConfig::default());
        let img = ImageData::solid_color(1, 1, [0, 0, 0, 255]);
        scene.textures.register(&mut device, &img, "wood").unwrap();

        scene.release(&mut device);

        assert!(scene.textures().is_empty());
        assert_eq!(device.live_texture_count(), 0);
    }
}
