//! Asset loading: image decoding for scene textures

pub mod image_loader;

pub use image_loader::ImageData;

use thiserror::Error;

/// Errors produced while loading assets from disk
#[derive(Debug, Error)]
pub enum AssetError {
    /// Failed to decode an asset file
    #[error("Failed to load asset: {0}")]
    LoadFailed(String),

    /// Image channel layout the renderer cannot upload
    #[error("Unsupported image format: {channels} channels (expected 3 or 4)")]
    UnsupportedFormat {
        /// Number of color channels in the rejected image
        channels: u8,
    },

    /// IO error during asset loading
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
