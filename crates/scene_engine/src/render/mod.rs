//! Rendering layer: backend traits, registries, uniform dispatch, lighting

pub mod context;
pub mod device;
pub mod lighting;
pub mod materials;
pub mod meshes;
pub mod shader;
pub mod textures;

pub use context::RenderContext;
pub use device::{DeviceEvent, GraphicsDevice, RecordingDevice, TextureHandle};
pub use materials::{MaterialDescriptor, MaterialRegistry};
pub use meshes::{BoxSide, MeshDraw, RecordingMeshes, ShapeMeshes};
pub use shader::{RecordingShader, ShaderProgram, UniformValue};
pub use textures::{TextureEntry, TextureRegistry, MAX_SCENE_TEXTURES};

use thiserror::Error;

use crate::assets::AssetError;

/// Errors produced by the rendering core
#[derive(Debug, Error)]
pub enum RenderError {
    /// A texture or material tag was referenced but never registered
    #[error("Tag not found: {0}")]
    TagNotFound(String),

    /// A registry already holds an entry with this tag
    #[error("Duplicate tag: {0}")]
    DuplicateTag(String),

    /// The texture registry has no free slots left
    #[error("Texture registry full: capacity is {capacity} slots")]
    RegistryFull {
        /// Fixed slot capacity of the registry
        capacity: usize,
    },

    /// An underlying asset failed to load or decode
    #[error(transparent)]
    Asset(#[from] AssetError),
}

/// Create a recording backend triple for headless rendering and tests
pub fn recording_backend() -> (RecordingDevice, RecordingShader, RecordingMeshes) {
    (
        RecordingDevice::new(),
        RecordingShader::new(),
        RecordingMeshes::new(),
    )
}
