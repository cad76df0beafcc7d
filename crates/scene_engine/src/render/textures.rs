//! Texture registry
//!
//! Fixed-capacity table mapping string tags to device texture handles.
//! Populated once during scene preparation, read-only during rendering.
//! Texture selection downstream is expressed as a unit index, so
//! [`TextureRegistry::bind_all`] must run after all loads and before any
//! textured draw.

use std::path::Path;

use crate::assets::ImageData;
use crate::render::device::{GraphicsDevice, TextureHandle};
use crate::render::RenderError;

/// Maximum number of scene textures the registry can hold
pub const MAX_SCENE_TEXTURES: usize = 16;

/// A registered texture: its lookup tag and the device handle
#[derive(Debug, Clone)]
pub struct TextureEntry {
    /// Tag used to look the texture up independent of its slot
    pub tag: String,
    /// Device-resident texture handle
    pub handle: TextureHandle,
}

/// Fixed-capacity registry of tagged scene textures
#[derive(Debug, Default)]
pub struct TextureRegistry {
    entries: Vec<TextureEntry>,
}

impl TextureRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode an image file and register it under `tag`
    ///
    /// Fails without mutating the registry on unsupported channel layouts,
    /// decode errors, duplicate tags, or a full table.
    pub fn load(
        &mut self,
        device: &mut dyn GraphicsDevice,
        path: impl AsRef<Path>,
        tag: &str,
    ) -> Result<(), RenderError> {
        let image = ImageData::from_file(path.as_ref())?;
        self.register(device, &image, tag)
    }

    /// Upload an already decoded image and register it under `tag`
    pub fn register(
        &mut self,
        device: &mut dyn GraphicsDevice,
        image: &ImageData,
        tag: &str,
    ) -> Result<(), RenderError> {
        if self.entries.len() >= MAX_SCENE_TEXTURES {
            return Err(RenderError::RegistryFull {
                capacity: MAX_SCENE_TEXTURES,
            });
        }
        if self.find_slot(tag).is_some() {
            return Err(RenderError::DuplicateTag(tag.to_string()));
        }

        let handle = device.create_texture(image);
        self.entries.push(TextureEntry {
            tag: tag.to_string(),
            handle,
        });

        log::debug!(
            "Registered texture '{}' in slot {} ({} of {} slots used)",
            tag,
            self.entries.len() - 1,
            self.entries.len(),
            MAX_SCENE_TEXTURES
        );

        Ok(())
    }

    /// Bind every registered texture to its sequential texture unit
    ///
    /// Entry *i* goes to unit *i*, in registration order.
    pub fn bind_all(&self, device: &mut dyn GraphicsDevice) {
        for (unit, entry) in self.entries.iter().enumerate() {
            device.bind_texture(unit, entry.handle);
        }
    }

    /// Find the slot (texture unit) index for a tag, first match wins
    pub fn find_slot(&self, tag: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.tag == tag)
    }

    /// Find the device handle for a tag, first match wins
    pub fn find_handle(&self, tag: &str) -> Option<TextureHandle> {
        self.entries.iter().find(|e| e.tag == tag).map(|e| e.handle)
    }

    /// Release every registered texture
    ///
    /// Idempotent: a second call (or a call with nothing loaded) is a no-op.
    pub fn release_all(&mut self, device: &mut dyn GraphicsDevice) {
        for entry in self.entries.drain(..) {
            device.release_texture(entry.handle);
        }
    }

    /// Number of registered textures
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no textures
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
