//! # Scene Engine
//!
//! A renderer core for a static 3D still-life scene: a cloth-covered table,
//! a backdrop, a potion bottle, a candle with a flickering flame, a pair of
//! stacked books, and a cauldron, all assembled from primitive meshes.
//!
//! ## Features
//!
//! - **Texture Registry**: tag-addressed texture table with fixed capacity
//! - **Material Registry**: named diffuse/specular/shininess/emissive descriptors
//! - **Render Context**: explicit uniform-dispatch state threaded through draws
//! - **Lighting**: moonlight, static point lights, a spotlight, and a
//!   per-frame flickering flame light
//! - **Scene Assembly**: hardcoded object renderers issuing ordered draw scripts
//!
//! The graphics API, shader program, and mesh geometry library are consumed
//! through traits ([`render::GraphicsDevice`], [`render::ShaderProgram`],
//! [`render::ShapeMeshes`]) so the core stays backend-agnostic and testable.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scene_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     scene_engine::foundation::logging::init();
//!
//!     let config = SceneConfig::default();
//!     let mut scene = SceneManager::new(config);
//!     let mut jitter = RandomJitter::new();
//!     let mut timer = Timer::new();
//!
//!     // Backend objects come from the windowing/graphics layer.
//!     # let (mut device, mut shader, mut meshes) = scene_engine::render::recording_backend();
//!     scene.prepare(&mut device, &mut shader, &mut meshes)?;
//!
//!     loop {
//!         timer.update();
//!         scene.render(
//!             &mut device,
//!             &mut shader,
//!             &mut meshes,
//!             timer.total_time(),
//!             &mut jitter,
//!         )?;
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod assets;
pub mod config;
pub mod foundation;
pub mod render;
pub mod scene;

/// Common imports for scene engine users
pub mod prelude {
    pub use crate::{
        assets::ImageData,
        config::{Config, SceneConfig, ConfigError},
        foundation::{
            math::{Vec2, Vec3, Vec4, Mat4},
            time::Timer,
        },
        render::{
            GraphicsDevice, ShaderProgram, ShapeMeshes, BoxSide,
            RenderContext, RenderError,
            TextureRegistry, MaterialRegistry, MaterialDescriptor,
            lighting::{JitterSource, RandomJitter},
        },
        scene::{SceneManager, PrepareReport},
    };
}
