//! Graphics device boundary
//!
//! The scene core never talks to a graphics API directly. Everything it
//! needs from the driver — texture upload, texture-unit binding, resource
//! release, and the alpha-blend toggle — goes through [`GraphicsDevice`].
//! A [`RecordingDevice`] implementation is provided for headless use and
//! tests.

use crate::assets::ImageData;

/// Opaque handle to a device-resident 2D texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Backend-agnostic graphics device interface
///
/// Implementations are expected to be synchronous: each call completes (or
/// is queued in driver order) before the next one is issued. All calls are
/// made from a single thread.
pub trait GraphicsDevice {
    /// Upload a decoded image as a 2D texture
    ///
    /// The resulting texture uses repeat wrapping on both axes, linear
    /// filtering, and a full mipmap chain.
    fn create_texture(&mut self, image: &ImageData) -> TextureHandle;

    /// Bind a texture to the given texture unit
    fn bind_texture(&mut self, unit: usize, handle: TextureHandle);

    /// Release a device-resident texture
    fn release_texture(&mut self, handle: TextureHandle);

    /// Enable alpha blending with (source-alpha, one-minus-source-alpha)
    fn enable_alpha_blending(&mut self);

    /// Disable alpha blending
    fn disable_alpha_blending(&mut self);
}

/// A device call recorded by [`RecordingDevice`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceEvent {
    /// Texture upload, with the handle that was issued
    TextureCreated(TextureHandle),
    /// Texture bound to a unit
    TextureBound {
        /// Texture unit index
        unit: usize,
        /// Bound texture
        handle: TextureHandle,
    },
    /// Texture released
    TextureReleased(TextureHandle),
    /// Alpha blending enabled
    BlendEnabled,
    /// Alpha blending disabled
    BlendDisabled,
}

/// Recording device for headless rendering and tests
///
/// Hands out sequential texture handles and keeps an ordered log of every
/// call it receives, so tests can assert on upload, binding, release, and
/// blend-bracketing behavior.
#[derive(Debug, Default)]
pub struct RecordingDevice {
    events: Vec<DeviceEvent>,
    next_handle: u32,
    blend_enabled: bool,
}

impl RecordingDevice {
    /// Create an empty recording device
    pub fn new() -> Self {
        Self::default()
    }

    /// Ordered log of every device call so far
    pub fn events(&self) -> &[DeviceEvent] {
        &self.events
    }

    /// Whether alpha blending is currently enabled
    pub fn blend_enabled(&self) -> bool {
        self.blend_enabled
    }

    /// Number of textures currently alive (created and not released)
    pub fn live_texture_count(&self) -> usize {
        let created = self
            .events
            .iter()
            .filter(|e| matches!(e, DeviceEvent::TextureCreated(_)))
            .count();
        let released = self
            .events
            .iter()
            .filter(|e| matches!(e, DeviceEvent::TextureReleased(_)))
            .count();
        created - released
    }
}

impl GraphicsDevice for RecordingDevice {
    fn create_texture(&mut self, _image: &ImageData) -> TextureHandle {
        let handle = TextureHandle(self.next_handle);
        self.next_handle += 1;
        self.events.push(DeviceEvent::TextureCreated(handle));
        handle
    }

    fn bind_texture(&mut self, unit: usize, handle: TextureHandle) {
        self.events.push(DeviceEvent::TextureBound { unit, handle });
    }

    fn release_texture(&mut self, handle: TextureHandle) {
        self.events.push(DeviceEvent::TextureReleased(handle));
    }

    fn enable_alpha_blending(&mut self) {
        self.blend_enabled = true;
        self.events.push(DeviceEvent::BlendEnabled);
    }

    fn disable_alpha_blending(&mut self) {
        self.blend_enabled = false;
        self.events.push(DeviceEvent::BlendDisabled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_sequential() {
        let mut device = RecordingDevice::new();
        let img = ImageData::solid_color(1, 1, [255, 255, 255, 255]);

        let a = device.create_texture(&img);
        let b = device.create_texture(&img);
        assert_ne!(a, b);
        assert_eq!(device.live_texture_count(), 2);

        device.release_texture(a);
        assert_eq!(device.live_texture_count(), 1);
    }

    #[test]
    fn blend_state_tracks_toggles() {
        let mut device = RecordingDevice::new();
        assert!(!device.blend_enabled());

        device.enable_alpha_blending();
        assert!(device.blend_enabled());

        device.disable_alpha_blending();
        assert!(!device.blend_enabled());
    }
}
