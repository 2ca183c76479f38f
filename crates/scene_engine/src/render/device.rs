//! GPU texture device seam
//!
//! Texture objects live on the GPU and are created, bound, and destroyed by
//! the graphics backend. [`TextureDevice`] is the narrow interface the
//! texture registry drives; the registry owns the returned handles for the
//! lifetime of the scene.

/// Handle for a GPU texture resource
///
/// Handles for live textures are non-zero; the value is otherwise opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);

/// Internal pixel formats accepted for texture upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// 8-bit RGB, three channels
    Rgb8,
    /// 8-bit RGBA, four channels
    Rgba8,
}

impl PixelFormat {
    /// Select the internal format for a decoded channel count
    ///
    /// Only 3- and 4-channel images map to an upload format; anything else
    /// is unsupported and must fail the load.
    pub fn from_channels(channels: u8) -> Option<Self> {
        match channels {
            3 => Some(Self::Rgb8),
            4 => Some(Self::Rgba8),
            _ => None,
        }
    }

    /// Bytes per pixel for this format
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Rgb8 => 3,
            Self::Rgba8 => 4,
        }
    }
}

/// Texture filtering modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Nearest neighbor filtering
    Nearest,
    /// Linear filtering
    Linear,
}

/// Texture wrapping modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    /// Repeat the texture
    Repeat,
    /// Mirror the texture
    MirroredRepeat,
    /// Clamp to edge
    ClampToEdge,
}

/// Sampling configuration applied when a texture is created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Wrap mode along the S (U) axis
    pub wrap_s: WrapMode,
    /// Wrap mode along the T (V) axis
    pub wrap_t: WrapMode,
    /// Minification filter
    pub min_filter: FilterMode,
    /// Magnification filter
    pub mag_filter: FilterMode,
    /// Generate mipmaps after upload
    pub generate_mipmaps: bool,
}

impl SamplerConfig {
    /// The fixed configuration every scene texture uses: repeat wrapping on
    /// both axes, linear filtering for minification and magnification,
    /// mipmaps generated after upload.
    pub fn scene_default() -> Self {
        Self {
            wrap_s: WrapMode::Repeat,
            wrap_t: WrapMode::Repeat,
            min_filter: FilterMode::Linear,
            mag_filter: FilterMode::Linear,
            generate_mipmaps: true,
        }
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self::scene_default()
    }
}

/// One texture creation request: pixel data plus upload parameters
#[derive(Debug)]
pub struct TextureUpload<'a> {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Internal format for the upload
    pub format: PixelFormat,
    /// Sampling configuration to apply
    pub sampler: SamplerConfig,
    /// Tightly packed pixel bytes, bottom row first
    pub pixels: &'a [u8],
}

/// Seam to the GPU texture backend
pub trait TextureDevice {
    /// Create a texture object, upload the pixel data, apply the sampler
    /// configuration, and generate mipmaps if requested
    fn create_texture(&mut self, upload: &TextureUpload<'_>) -> TextureHandle;

    /// Bind a texture to the given texture unit
    fn bind_texture_unit(&mut self, unit: usize, handle: TextureHandle);

    /// Release a texture object
    fn delete_texture(&mut self, handle: TextureHandle);
}
