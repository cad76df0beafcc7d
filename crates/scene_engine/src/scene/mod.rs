//! Scene assembly: texture manifest, material set, and object renderers

mod scene_manager;

pub use scene_manager::{PrepareReport, SceneManager, TextureFailure, SCENE_TEXTURES};
