//! Headless collaborator implementations
//!
//! Stand-ins for the GPU-facing seams so the scene pipeline can run
//! without a window or graphics context. Textures receive sequential
//! handles, mesh uploads and draw calls are logged and counted.

use scene_engine::prelude::*;

/// Texture device that allocates sequential handles and tracks activity
#[derive(Default)]
pub struct HeadlessDevice {
    next_handle: u64,
    created: usize,
    deleted: usize,
}

impl HeadlessDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of textures created and not yet deleted
    pub fn live_textures(&self) -> usize {
        self.created - self.deleted
    }
}

impl TextureDevice for HeadlessDevice {
    fn create_texture(&mut self, upload: &TextureUpload<'_>) -> TextureHandle {
        self.next_handle += 1;
        self.created += 1;
        log::debug!(
            "Created texture {}x{} ({:?}, {} bytes) as handle {}",
            upload.width,
            upload.height,
            upload.format,
            upload.pixels.len(),
            self.next_handle
        );
        TextureHandle(self.next_handle)
    }

    fn bind_texture_unit(&mut self, unit: usize, handle: TextureHandle) {
        log::debug!("Bound handle {} to texture unit {}", handle.0, unit);
    }

    fn delete_texture(&mut self, handle: TextureHandle) {
        self.deleted += 1;
        log::debug!("Deleted texture handle {}", handle.0);
    }
}

/// Mesh library that records uploads and counts draw calls
#[derive(Default)]
pub struct LoggingMeshes {
    loaded: Vec<ShapeKind>,
    draw_count: usize,
}

impl LoggingMeshes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loaded_shapes(&self) -> &[ShapeKind] {
        &self.loaded
    }

    pub fn draw_count(&self) -> usize {
        self.draw_count
    }
}

impl MeshLibrary for LoggingMeshes {
    fn load(&mut self, shape: ShapeKind) {
        log::info!("Uploading {} geometry", shape.name());
        self.loaded.push(shape);
    }

    fn draw(&mut self, shape: ShapeKind) {
        self.draw_count += 1;
        log::debug!("Draw call #{}: {}", self.draw_count, shape.name());
    }
}
