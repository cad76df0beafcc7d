//! Scene lighting
//!
//! One directional moonlight, three static point lights, one spotlight, and
//! a fourth per-frame flickering point light driven by the candle flame.
//! The flame update returns the color it pushed so the candle renderer can
//! draw the flame geometry in the same hue that frame.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::foundation::math::{utils, Vec3};
use crate::render::shader::ShaderProgram;

const USE_LIGHTING_UNIFORM: &str = "bUseLighting";

/// Number of point light slots in the shader
pub const MAX_POINT_LIGHTS: usize = 4;

/// Point light slot reserved for the flickering flame light
pub const FLAME_LIGHT_SLOT: usize = 3;

/// World position of the flame light, on top of the candle's flame mesh
pub const FLAME_LIGHT_POSITION: Vec3 = Vec3::new(-5.0, 8.8, 0.9);

/// Per-channel jitter amplitude of the flame flicker
pub const JITTER_AMPLITUDE: f32 = 0.03;

/// Directional light (like moonlight)
#[derive(Debug, Clone)]
pub struct DirectionalLight {
    /// Light direction
    pub direction: Vec3,
    /// Ambient contribution
    pub ambient: Vec3,
    /// Diffuse contribution
    pub diffuse: Vec3,
    /// Specular contribution
    pub specular: Vec3,
}

impl DirectionalLight {
    /// Push this light into the shader's directional light uniforms
    pub fn apply(&self, shader: &mut dyn ShaderProgram) {
        shader.set_vec3("directionalLight.direction", self.direction);
        shader.set_vec3("directionalLight.ambient", self.ambient);
        shader.set_vec3("directionalLight.diffuse", self.diffuse);
        shader.set_vec3("directionalLight.specular", self.specular);
        shader.set_bool("directionalLight.bActive", true);
    }
}

/// Point light (like a candle flame or a glow)
#[derive(Debug, Clone)]
pub struct PointLight {
    /// Light position
    pub position: Vec3,
    /// Ambient contribution
    pub ambient: Vec3,
    /// Diffuse contribution
    pub diffuse: Vec3,
    /// Specular contribution
    pub specular: Vec3,
}

impl PointLight {
    /// Push this light into the shader's point light slot `slot`
    pub fn apply(&self, shader: &mut dyn ShaderProgram, slot: usize) {
        debug_assert!(slot < MAX_POINT_LIGHTS, "point light slot out of range");
        shader.set_vec3(&format!("pointLights[{}].position", slot), self.position);
        shader.set_vec3(&format!("pointLights[{}].ambient", slot), self.ambient);
        shader.set_vec3(&format!("pointLights[{}].diffuse", slot), self.diffuse);
        shader.set_vec3(&format!("pointLights[{}].specular", slot), self.specular);
        shader.set_bool(&format!("pointLights[{}].bActive", slot), true);
    }
}

/// Spot light with an attenuation curve and cone cutoffs
///
/// The spotlight's position and aim follow the camera and are written by
/// the view layer; only the appearance parameters are configured here.
#[derive(Debug, Clone)]
pub struct SpotLight {
    /// Ambient contribution
    pub ambient: Vec3,
    /// Diffuse contribution
    pub diffuse: Vec3,
    /// Specular contribution
    pub specular: Vec3,
    /// Constant attenuation factor
    pub constant: f32,
    /// Linear attenuation factor
    pub linear: f32,
    /// Quadratic attenuation factor
    pub quadratic: f32,
    /// Inner cone angle in degrees
    pub cutoff_degrees: f32,
    /// Outer cone angle in degrees
    pub outer_cutoff_degrees: f32,
}

impl SpotLight {
    /// Push this light into the shader's spotlight uniforms
    ///
    /// Cone angles are written as cosines, the form the shader compares
    /// against dot products.
    pub fn apply(&self, shader: &mut dyn ShaderProgram) {
        shader.set_vec3("spotLight.ambient", self.ambient);
        shader.set_vec3("spotLight.diffuse", self.diffuse);
        shader.set_vec3("spotLight.specular", self.specular);
        shader.set_float("spotLight.constant", self.constant);
        shader.set_float("spotLight.linear", self.linear);
        shader.set_float("spotLight.quadratic", self.quadratic);
        shader.set_float(
            "spotLight.cutOff",
            utils::deg_to_rad(self.cutoff_degrees).cos(),
        );
        shader.set_float(
            "spotLight.outerCutOff",
            utils::deg_to_rad(self.outer_cutoff_degrees).cos(),
        );
        shader.set_bool("spotLight.bActive", true);
    }
}

/// Bounded random jitter source for the flame flicker
///
/// Injectable so the flame animation is reproducible: tests supply a fixed
/// sequence instead of entropy.
pub trait JitterSource {
    /// Next jitter sample, uniform in `[-JITTER_AMPLITUDE, JITTER_AMPLITUDE]`
    fn next_jitter(&mut self) -> f32;
}

/// Entropy-seeded jitter source for live rendering
pub struct RandomJitter {
    rng: StdRng,
}

impl RandomJitter {
    /// Create a jitter source seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a jitter source with a fixed seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomJitter {
    fn default() -> Self {
        Self::new()
    }
}

impl JitterSource for RandomJitter {
    fn next_jitter(&mut self) -> f32 {
        self.rng.gen_range(-JITTER_AMPLITUDE..=JITTER_AMPLITUDE)
    }
}

/// Fixed-sequence jitter source for deterministic tests and replays
///
/// Cycles through the given samples; an empty sequence yields zero jitter.
pub struct SequenceJitter {
    samples: Vec<f32>,
    index: usize,
}

impl SequenceJitter {
    /// Create a jitter source that cycles through `samples`
    pub fn new(samples: Vec<f32>) -> Self {
        Self { samples, index: 0 }
    }

    /// A jitter source that always returns zero
    pub fn zero() -> Self {
        Self::new(Vec::new())
    }
}

impl JitterSource for SequenceJitter {
    fn next_jitter(&mut self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sample = self.samples[self.index % self.samples.len()];
        self.index += 1;
        sample
    }
}

/// Configure the scene's static lights
///
/// Enables custom lighting, then writes the moonlight, the three static
/// point lights (slots 0 through 2), and the spotlight. Called once during
/// scene preparation; only the flame light in slot 3 changes afterwards.
pub fn setup_scene_lights(shader: &mut dyn ShaderProgram) {
    shader.set_bool(USE_LIGHTING_UNIFORM, true);

    // Moonlight with silvery highlights.
    DirectionalLight {
        direction: Vec3::new(-0.05, -0.3, -0.1),
        ambient: Vec3::new(0.08, 0.08, 0.1),
        diffuse: Vec3::new(0.3, 0.3, 0.5),
        specular: Vec3::new(0.6, 0.6, 0.7),
    }
    .apply(shader);

    // Dim warm ember fill near the candle base.
    PointLight {
        position: Vec3::new(-5.0, 1.0, 0.9),
        ambient: Vec3::new(0.03, 0.02, 0.01),
        diffuse: Vec3::new(0.15, 0.08, 0.03),
        specular: Vec3::new(0.1, 0.06, 0.02),
    }
    .apply(shader, 0);

    // Warm accent above the scene.
    PointLight {
        position: Vec3::new(-4.0, 8.0, 0.0),
        ambient: Vec3::new(0.05, 0.04, 0.03),
        diffuse: Vec3::new(0.4, 0.3, 0.2),
        specular: Vec3::new(0.5, 0.4, 0.3),
    }
    .apply(shader, 1);

    // Cool bluish-purple accent over the books.
    PointLight {
        position: Vec3::new(3.8, 5.5, 4.0),
        ambient: Vec3::new(0.08, 0.06, 0.1),
        diffuse: Vec3::new(0.2, 0.2, 0.5),
        specular: Vec3::new(0.3, 0.3, 0.6),
    }
    .apply(shader, 2);

    // Moonbeam spotlight; position follows the camera.
    SpotLight {
        ambient: Vec3::new(0.1, 0.1, 0.15),
        diffuse: Vec3::new(0.6, 0.6, 0.9),
        specular: Vec3::new(0.9, 0.9, 1.2),
        constant: 1.0,
        linear: 0.09,
        quadratic: 0.032,
        cutoff_degrees: 35.0,
        outer_cutoff_degrees: 45.0,
    }
    .apply(shader);
}

/// Compute this frame's flame color from time and jitter
///
/// `flicker = sin(time * 3.0) * 0.3 + 0.5`; the red channel sits near full,
/// green swings with the flicker, and blue keeps a small tenth-scale tint.
/// Every channel is clamped to `[0, 1]` for any time input.
pub fn flame_color(time: f32, jitter: &mut dyn JitterSource) -> Vec3 {
    let flicker = (time * 3.0).sin() * 0.3 + 0.5;

    let red = 1.0 + jitter.next_jitter();
    let green = 0.2 + flicker * 0.2 + jitter.next_jitter();
    let blue = 0.1 + jitter.next_jitter() * 0.1;

    Vec3::new(
        utils::clamp(red, 0.0, 1.0),
        utils::clamp(green, 0.0, 1.0),
        utils::clamp(blue, 0.0, 1.0),
    )
}

/// Recompute and push the flame point light for this frame
///
/// Returns the flame color so flame-colored geometry drawn in the same
/// frame stays chromatically consistent with the light.
pub fn update_flame_light(
    shader: &mut dyn ShaderProgram,
    time: f32,
    jitter: &mut dyn JitterSource,
) -> Vec3 {
    let color = flame_color(time, jitter);

    PointLight {
        position: FLAME_LIGHT_POSITION,
        ambient: color * 0.1,
        diffuse: color,
        specular: color * 0.8,
    }
    .apply(shader, FLAME_LIGHT_SLOT);

    color
}

/// Flame transparency for this frame: `sin(time * 2.5) * 0.2 + 0.6`,
/// clamped to `[0.5, 0.8]`
pub fn flame_alpha(time: f32) -> f32 {
    utils::clamp((time * 2.5).sin() * 0.2 + 0.6, 0.5, 0.8)
}
