//! Image loading utilities for texture data
//!
//! Decodes PNG and JPEG files into raw pixel data ready for texture upload.
//! Only 3-channel (RGB) and 4-channel (RGBA) images are accepted; anything
//! else is rejected before it can reach the texture registry.

use std::path::Path;

use crate::assets::AssetError;

/// Loaded image data ready for GPU upload
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Raw pixel data, tightly packed in row-major order
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Number of color channels (3 for RGB, 4 for RGBA)
    pub channels: u8,
}

impl ImageData {
    /// Load an image from a file path
    ///
    /// Returns [`AssetError::UnsupportedFormat`] for channel layouts other
    /// than RGB or RGBA, and [`AssetError::LoadFailed`] when the file cannot
    /// be decoded.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path_ref = path.as_ref();

        log::debug!("Loading image from: {:?}", path_ref);

        let img = image::open(path_ref)
            .map_err(|e| AssetError::LoadFailed(format!("Failed to load image: {}", e)))?;

        let channels = img.color().channel_count();
        let (data, width, height) = match channels {
            3 => {
                let rgb = img.to_rgb8();
                let (w, h) = rgb.dimensions();
                (rgb.into_raw(), w, h)
            }
            4 => {
                let rgba = img.to_rgba8();
                let (w, h) = rgba.dimensions();
                (rgba.into_raw(), w, h)
            }
            other => {
                return Err(AssetError::UnsupportedFormat { channels: other });
            }
        };

        log::info!(
            "Loaded image {}x{} ({} channels) from {:?}",
            width,
            height,
            channels,
            path_ref
        );

        Ok(Self {
            data,
            width,
            height,
            channels,
        })
    }

    /// Create a solid color RGBA image (useful for testing and defaults)
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        let pixel_count = (width * height) as usize;
        let mut data = Vec::with_capacity(pixel_count * 4);

        for _ in 0..pixel_count {
            data.extend_from_slice(&color);
        }

        Self {
            data,
            width,
            height,
            channels: 4,
        }
    }

    /// Get the size of the image data in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}
