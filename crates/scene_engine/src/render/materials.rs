//! Material registry
//!
//! Ordered list of named material descriptors, defined once at scene load
//! and immutable thereafter.

use crate::foundation::math::{Vec3, Vec4};
use crate::render::RenderError;

/// Surface appearance parameters for one material
///
/// The diffuse color is stored as straight RGBA; the alpha component rides
/// along for materials whose geometry is drawn translucent (glass, liquid),
/// while opaque materials keep it at 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialDescriptor {
    /// Tag used to look the material up
    pub tag: String,
    /// Diffuse color (RGB + straight alpha storage)
    pub diffuse: Vec4,
    /// Specular highlight color
    pub specular: Vec3,
    /// Specular exponent, non-negative
    pub shininess: f32,
    /// Emissive color, zero for non-glowing materials
    pub emissive: Vec3,
}

impl MaterialDescriptor {
    /// Create a descriptor with no emissive term
    pub fn new(tag: &str, diffuse: Vec4, specular: Vec3, shininess: f32) -> Self {
        debug_assert!(shininess >= 0.0, "shininess must be non-negative");
        Self {
            tag: tag.to_string(),
            diffuse,
            specular,
            shininess,
            emissive: Vec3::zeros(),
        }
    }

    /// Set the emissive color
    pub fn with_emissive(mut self, emissive: Vec3) -> Self {
        self.emissive = emissive;
        self
    }
}

/// Ordered registry of named materials
#[derive(Debug, Default)]
pub struct MaterialRegistry {
    materials: Vec<MaterialDescriptor>,
}

impl MaterialRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a material definition
    ///
    /// Duplicate tags are rejected rather than silently shadowed.
    pub fn define(&mut self, descriptor: MaterialDescriptor) -> Result<(), RenderError> {
        if self.find(&descriptor.tag).is_some() {
            return Err(RenderError::DuplicateTag(descriptor.tag));
        }
        log::debug!("Defined material '{}'", descriptor.tag);
        self.materials.push(descriptor);
        Ok(())
    }

    /// Look a material up by tag, first match wins
    pub fn find(&self, tag: &str) -> Option<&MaterialDescriptor> {
        self.materials.iter().find(|m| m.tag == tag)
    }

    /// Number of defined materials
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Whether no materials have been defined
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(tag: &str) -> MaterialDescriptor {
        MaterialDescriptor::new(
            tag,
            Vec4::new(0.5, 0.5, 0.5, 1.0),
            Vec3::new(0.1, 0.1, 0.1),
            10.0,
        )
    }

    #[test]
    fn find_returns_defined_material() {
        let mut registry = MaterialRegistry::new();
        registry.define(plain("wood")).unwrap();

        let m = registry.find("wood").unwrap();
        assert_eq!(m.tag, "wood");
        assert_eq!(m.emissive, Vec3::zeros());
        assert!(registry.find("granite").is_none());
    }

    #[test]
    fn duplicate_tag_is_rejected() {
        let mut registry = MaterialRegistry::new();
        registry.define(plain("glass")).unwrap();

        let err = registry.define(plain("glass")).unwrap_err();
        assert!(matches!(err, RenderError::DuplicateTag(tag) if tag == "glass"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn emissive_builder_sets_channel() {
        let m = plain("flame").with_emissive(Vec3::new(1.0, 0.4, 0.0));
        assert_eq!(m.emissive, Vec3::new(1.0, 0.4, 0.0));
    }
}
