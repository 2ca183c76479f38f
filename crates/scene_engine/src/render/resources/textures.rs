//! Texture registry
//!
//! Loads image files into GPU texture objects and assigns each one a slot.
//! The slot index is the entry's position in load order and doubles as the
//! texture unit the handle is bound to. Capacity is bounded by the texture
//! unit limit of the target hardware.

use crate::assets::{ImageData, ImageError};
use crate::render::device::{PixelFormat, SamplerConfig, TextureDevice, TextureHandle, TextureUpload};
use std::path::Path;
use thiserror::Error;

/// Maximum number of texture slots a scene can use
pub const MAX_TEXTURE_SLOTS: usize = 16;

/// Texture loading errors
///
/// All of these are reported to the caller and none registers a slot; the
/// rendering loop treats them as non-fatal.
#[derive(Error, Debug)]
pub enum TextureError {
    /// The image file could not be decoded
    #[error(transparent)]
    Decode(#[from] ImageError),

    /// The image's channel count has no upload format
    #[error("unsupported image format: {channels} channels (expected 3 or 4)")]
    UnsupportedFormat {
        /// Channel count of the rejected image
        channels: u8,
    },

    /// Every slot is already occupied
    #[error("texture registry full: all {limit} slots are in use")]
    CapacityExceeded {
        /// The slot limit that was hit
        limit: usize,
    },
}

/// One registered texture: its tag and the GPU handle that backs it
#[derive(Debug, Clone)]
pub struct TextureEntry {
    /// Caller-chosen lookup tag
    pub tag: String,
    /// GPU texture object handle, owned by the registry
    pub handle: TextureHandle,
}

/// Registry of loaded scene textures
///
/// Entries are kept in load order; an entry's index is its slot. Tags are
/// expected to be unique, but duplicates are not rejected; lookup returns
/// the first match.
#[derive(Debug, Default)]
pub struct TextureRegistry {
    entries: Vec<TextureEntry>,
}

impl TextureRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an image file into a GPU texture and register it under `tag`
    ///
    /// Returns the assigned slot index. On any failure nothing is
    /// registered: a full registry fails before touching the file, a
    /// decode failure before creating GPU state, and an unsupported
    /// channel count before upload.
    pub fn load<P: AsRef<Path>>(
        &mut self,
        device: &mut dyn TextureDevice,
        path: P,
        tag: &str,
    ) -> Result<usize, TextureError> {
        self.ensure_capacity()?;
        let image = ImageData::from_file(path)?;
        self.load_image(device, image, tag)
    }

    /// Register an already-decoded image under `tag`
    ///
    /// Same contract as [`load`](Self::load) minus the decode step. The
    /// pixel buffer is consumed and released once the upload has happened.
    pub fn load_image(
        &mut self,
        device: &mut dyn TextureDevice,
        image: ImageData,
        tag: &str,
    ) -> Result<usize, TextureError> {
        self.ensure_capacity()?;

        let format = PixelFormat::from_channels(image.channels).ok_or(
            TextureError::UnsupportedFormat {
                channels: image.channels,
            },
        )?;

        let handle = device.create_texture(&TextureUpload {
            width: image.width,
            height: image.height,
            format,
            sampler: SamplerConfig::scene_default(),
            pixels: &image.data,
        });
        drop(image);

        let slot = self.entries.len();
        self.entries.push(TextureEntry {
            tag: tag.to_string(),
            handle,
        });

        log::debug!("Registered texture '{}' in slot {} ({:?})", tag, slot, handle);
        Ok(slot)
    }

    /// Bind every registered texture to its slot-indexed texture unit
    ///
    /// Called once after all loads complete and before any draw that
    /// references a texture.
    pub fn bind_all(&self, device: &mut dyn TextureDevice) {
        for (unit, entry) in self.entries.iter().enumerate() {
            device.bind_texture_unit(unit, entry.handle);
        }
        log::debug!("Bound {} textures to their slots", self.entries.len());
    }

    /// Resolve a tag to its slot index
    ///
    /// Linear scan in registration order, first match wins. `None` means
    /// "no texture" to callers, never a crash.
    pub fn resolve_slot(&self, tag: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.tag == tag)
    }

    /// Resolve a tag to its GPU handle, first match wins
    pub fn resolve_handle(&self, tag: &str) -> Option<TextureHandle> {
        self.entries
            .iter()
            .find(|entry| entry.tag == tag)
            .map(|entry| entry.handle)
    }

    /// Release every GPU texture and clear the registry
    pub fn release_all(&mut self, device: &mut dyn TextureDevice) {
        let count = self.entries.len();
        for entry in self.entries.drain(..) {
            device.delete_texture(entry.handle);
        }
        log::debug!("Released {} scene textures", count);
    }

    /// Number of registered textures
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered entries in slot order
    pub fn entries(&self) -> &[TextureEntry] {
        &self.entries
    }

    fn ensure_capacity(&self) -> Result<(), TextureError> {
        if self.entries.len() >= MAX_TEXTURE_SLOTS {
            return Err(TextureError::CapacityExceeded {
                limit: MAX_TEXTURE_SLOTS,
            });
        }
        Ok(())
    }
}

impl Drop for TextureRegistry {
    fn drop(&mut self) {
        if !self.entries.is_empty() {
            // GPU objects can only be freed through the device seam
            log::debug!(
                "TextureRegistry dropped with {} textures still registered",
                self.entries.len()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Device double that hands out sequential non-zero handles and records
    /// bind/delete calls
    #[derive(Default)]
    struct CountingDevice {
        next_handle: u64,
        bound: Vec<(usize, TextureHandle)>,
        deleted: Vec<TextureHandle>,
    }

    impl TextureDevice for CountingDevice {
        fn create_texture(&mut self, _upload: &TextureUpload<'_>) -> TextureHandle {
            self.next_handle += 1;
            TextureHandle(self.next_handle)
        }

        fn bind_texture_unit(&mut self, unit: usize, handle: TextureHandle) {
            self.bound.push((unit, handle));
        }

        fn delete_texture(&mut self, handle: TextureHandle) {
            self.deleted.push(handle);
        }
    }

    fn rgba_image() -> ImageData {
        ImageData::solid_color(2, 2, [128, 64, 32, 255])
    }

    fn rgb_image() -> ImageData {
        let mut image = rgba_image();
        image.data = vec![10; 2 * 2 * 3];
        image.channels = 3;
        image
    }

    #[test]
    fn test_load_assigns_slots_in_order() {
        let mut device = CountingDevice::default();
        let mut registry = TextureRegistry::new();

        let first = registry
            .load_image(&mut device, rgba_image(), "floor")
            .unwrap();
        let second = registry
            .load_image(&mut device, rgb_image(), "wall")
            .unwrap();

        assert_eq!(first, 0);
        assert_eq!(second, 1);
        assert_eq!(registry.resolve_slot("floor"), Some(0));
        assert_eq!(registry.resolve_slot("wall"), Some(1));
        assert!(registry.resolve_handle("wall").unwrap().0 != 0);
    }

    #[test]
    fn test_unsupported_channel_count_registers_nothing() {
        let mut device = CountingDevice::default();
        let mut registry = TextureRegistry::new();

        let mut gray = rgba_image();
        gray.channels = 1;
        gray.data = vec![200; 2 * 2];

        let result = registry.load_image(&mut device, gray, "gray");
        assert!(matches!(
            result,
            Err(TextureError::UnsupportedFormat { channels: 1 })
        ));
        assert!(registry.is_empty());
        assert_eq!(device.next_handle, 0);
    }

    #[test]
    fn test_missing_file_registers_nothing() {
        let mut device = CountingDevice::default();
        let mut registry = TextureRegistry::new();

        let result = registry.load(&mut device, "/no/such/texture.png", "missing");
        assert!(matches!(result, Err(TextureError::Decode(_))));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_capacity_limit() {
        let mut device = CountingDevice::default();
        let mut registry = TextureRegistry::new();

        for i in 0..MAX_TEXTURE_SLOTS {
            let slot = registry
                .load_image(&mut device, rgba_image(), &format!("texture_{i}"))
                .unwrap();
            assert_eq!(slot, i);
        }

        let result = registry.load_image(&mut device, rgba_image(), "one_too_many");
        assert!(matches!(
            result,
            Err(TextureError::CapacityExceeded { limit: MAX_TEXTURE_SLOTS })
        ));
        assert_eq!(registry.len(), MAX_TEXTURE_SLOTS);
        assert_eq!(registry.resolve_slot("one_too_many"), None);
    }

    #[test]
    fn test_resolve_unknown_tag_is_not_found() {
        let registry = TextureRegistry::new();
        assert_eq!(registry.resolve_slot("nope"), None);
        assert_eq!(registry.resolve_handle("nope"), None);
    }

    #[test]
    fn test_duplicate_tag_first_wins() {
        let mut device = CountingDevice::default();
        let mut registry = TextureRegistry::new();

        registry
            .load_image(&mut device, rgba_image(), "wall")
            .unwrap();
        registry
            .load_image(&mut device, rgba_image(), "wall")
            .unwrap();

        assert_eq!(registry.resolve_slot("wall"), Some(0));
        assert_eq!(registry.resolve_handle("wall"), Some(TextureHandle(1)));
    }

    #[test]
    fn test_bind_all_uses_slot_indexed_units() {
        let mut device = CountingDevice::default();
        let mut registry = TextureRegistry::new();

        registry
            .load_image(&mut device, rgba_image(), "floor")
            .unwrap();
        registry
            .load_image(&mut device, rgba_image(), "wall")
            .unwrap();

        registry.bind_all(&mut device);
        assert_eq!(
            device.bound,
            vec![(0, TextureHandle(1)), (1, TextureHandle(2))]
        );
    }

    #[test]
    fn test_release_all_deletes_every_handle() {
        let mut device = CountingDevice::default();
        let mut registry = TextureRegistry::new();

        registry
            .load_image(&mut device, rgba_image(), "floor")
            .unwrap();
        registry
            .load_image(&mut device, rgba_image(), "wall")
            .unwrap();

        registry.release_all(&mut device);
        assert!(registry.is_empty());
        assert_eq!(device.deleted, vec![TextureHandle(1), TextureHandle(2)]);
    }
}
