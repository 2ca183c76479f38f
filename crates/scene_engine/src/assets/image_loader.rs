//! Image loading utilities for texture data
//!
//! Provides PNG, JPEG, and other image format loading for use with the
//! texture registry. Decoded images keep their native channel count (the
//! registry selects the GPU internal format from it) and are flipped
//! vertically to match the renderer's bottom-left texture origin.

use image::GenericImageView;
use std::path::Path;
use thiserror::Error;

/// Image decoding errors
#[derive(Error, Debug)]
pub enum ImageError {
    /// The file could not be read or parsed as an image
    #[error("failed to decode image {path}: {source}")]
    Decode {
        /// Path or origin of the image data
        path: String,
        /// Underlying decoder error
        #[source]
        source: image::ImageError,
    },
}

/// Loaded image data ready for GPU upload
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Raw pixel data, tightly packed, bottom row first
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Number of color channels (1 = gray, 2 = gray+alpha, 3 = RGB, 4 = RGBA)
    pub channels: u8,
}

impl ImageData {
    /// Load an image from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ImageError> {
        let path_ref = path.as_ref();

        log::debug!("Loading image from: {:?}", path_ref);

        let img = image::open(path_ref).map_err(|e| ImageError::Decode {
            path: path_ref.display().to_string(),
            source: e,
        })?;

        let loaded = Self::from_dynamic(img);
        log::info!(
            "Loaded image {}x{} ({} channels) from {:?}",
            loaded.width,
            loaded.height,
            loaded.channels,
            path_ref
        );
        Ok(loaded)
    }

    /// Load an image from an in-memory buffer (useful for embedded resources)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ImageError> {
        let img = image::load_from_memory(bytes).map_err(|e| ImageError::Decode {
            path: "(memory)".to_string(),
            source: e,
        })?;

        let loaded = Self::from_dynamic(img);
        log::debug!(
            "Loaded image {}x{} ({} channels) from memory",
            loaded.width,
            loaded.height,
            loaded.channels
        );
        Ok(loaded)
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

    // Rows are flipped so row 0 of `data` is the bottom row of the file.
    fn from_dynamic(img: image::DynamicImage) -> Self {
        let img = img.flipv();
        let (width, height) = img.dimensions();
        let channels = img.color().channel_count();

        let data = match channels {
            1 => img.into_luma8().into_raw(),
            2 => img.into_luma_alpha8().into_raw(),
            3 => img.into_rgb8().into_raw(),
            _ => img.into_rgba8().into_raw(),
        };

        Self {
            data,
            width,
            height,
            channels,
        }
    }
}
