//! Scene description and sequencing
//!
//! A scene is a fixed, declarative description: which textures to load,
//! which materials to define, the light rig, and an ordered list of objects
//! to draw. [`SceneSequencer`] owns the registries, performs the one-time
//! setup, and replays the object list through the draw-state dispatcher
//! every frame. There is no scene graph, no animation, and no editing;
//! the object list is the scene.

use crate::foundation::math::{Vec3, Vec4};
use crate::render::device::TextureDevice;
use crate::render::dispatcher::DrawDispatcher;
use crate::render::lighting::{LightRig, LightSource};
use crate::render::mesh::{MeshLibrary, ShapeKind};
use crate::render::resources::{Material, MaterialRegistry, TextureRegistry};
use crate::render::shader::ShaderUniforms;
use crate::render::transform::ObjectTransform;
use std::collections::HashSet;
use std::path::PathBuf;

/// One texture to load during scene preparation
#[derive(Debug, Clone)]
pub struct TextureSource {
    /// Image file path
    pub path: PathBuf,
    /// Tag the loaded texture is registered under
    pub tag: String,
}

impl TextureSource {
    /// Create a texture source
    pub fn new(path: impl Into<PathBuf>, tag: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            tag: tag.into(),
        }
    }
}

/// One object in the scene's fixed draw list
#[derive(Debug, Clone)]
pub struct SceneObject {
    /// Primitive shape to draw
    pub shape: ShapeKind,
    /// Per-draw transform parameters
    pub transform: ObjectTransform,
    /// Base color (RGBA)
    pub color: Vec4,
    /// Texture tag, if the object is textured
    pub texture: Option<String>,
    /// Material tag, if the object is lit with a specific material
    pub material: Option<String>,
}

impl SceneObject {
    /// White, untextured, unmaterialed object of a shape
    pub fn new(shape: ShapeKind) -> Self {
        Self {
            shape,
            transform: ObjectTransform::new(),
            color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            texture: None,
            material: None,
        }
    }

    /// Builder pattern: set the scale factors
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.transform.scale = scale;
        self
    }

    /// Builder pattern: set the rotations in degrees about X, Y, and Z
    pub fn with_rotation_degrees(mut self, x: f32, y: f32, z: f32) -> Self {
        self.transform = self.transform.with_rotation_degrees(x, y, z);
        self
    }

    /// Builder pattern: set the world position
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    /// Builder pattern: set the base color
    pub fn with_color(mut self, r: f32, g: f32, b: f32, a: f32) -> Self {
        self.color = Vec4::new(r, g, b, a);
        self
    }

    /// Builder pattern: reference a texture tag
    pub fn with_texture(mut self, tag: impl Into<String>) -> Self {
        self.texture = Some(tag.into());
        self
    }

    /// Builder pattern: reference a material tag
    pub fn with_material(mut self, tag: impl Into<String>) -> Self {
        self.material = Some(tag.into());
        self
    }
}

/// Declarative description of a complete static scene
#[derive(Debug, Default)]
pub struct SceneDescription {
    /// Textures to load, in slot order
    pub textures: Vec<TextureSource>,
    /// Materials to define
    pub materials: Vec<Material>,
    /// Scene lights
    pub lights: LightRig,
    /// Scene-wide UV tiling scale
    pub uv_scale: (f32, f32),
    /// Ordered draw list
    pub objects: Vec<SceneObject>,
}

impl SceneDescription {
    /// Empty scene with a 1:1 UV scale
    pub fn new() -> Self {
        Self {
            uv_scale: (1.0, 1.0),
            ..Self::default()
        }
    }

    /// Builder pattern: add a texture to load
    pub fn with_texture(mut self, path: impl Into<PathBuf>, tag: impl Into<String>) -> Self {
        self.textures.push(TextureSource::new(path, tag));
        self
    }

    /// Builder pattern: add a material definition
    pub fn with_material(mut self, material: Material) -> Self {
        self.materials.push(material);
        self
    }

    /// Builder pattern: add a light source
    pub fn with_light(mut self, light: LightSource) -> Self {
        self.lights.push(light);
        self
    }

    /// Builder pattern: set the scene-wide UV tiling scale
    pub fn with_uv_scale(mut self, u: f32, v: f32) -> Self {
        self.uv_scale = (u, v);
        self
    }

    /// Builder pattern: append an object to the draw list
    pub fn with_object(mut self, object: SceneObject) -> Self {
        self.objects.push(object);
        self
    }
}

/// Owns the registries and replays a scene description
///
/// Lifecycle: [`prepare`](Self::prepare) once,
/// [`render_frame`](Self::render_frame) per frame, and
/// [`teardown`](Self::teardown) once. Every operation is synchronous and
/// runs on the rendering thread.
pub struct SceneSequencer {
    description: SceneDescription,
    textures: TextureRegistry,
    materials: MaterialRegistry,
}

impl SceneSequencer {
    /// Create a sequencer for a scene description
    pub fn new(description: SceneDescription) -> Self {
        Self {
            description,
            textures: TextureRegistry::new(),
            materials: MaterialRegistry::new(),
        }
    }

    /// One-time scene setup
    ///
    /// Loads and binds the textures, defines the materials, applies the
    /// light rig, and uploads geometry for each shape the draw list uses,
    /// exactly once per shape. A texture that fails to load is skipped
    /// with a warning; objects referencing its tag will draw with the
    /// sentinel slot.
    pub fn prepare(
        &mut self,
        device: &mut dyn TextureDevice,
        shader: &mut dyn ShaderUniforms,
        meshes: &mut dyn MeshLibrary,
    ) {
        log::info!(
            "Preparing scene: {} textures, {} materials, {} lights, {} objects",
            self.description.textures.len(),
            self.description.materials.len(),
            self.description.lights.len(),
            self.description.objects.len()
        );

        for source in &self.description.textures {
            if let Err(e) = self.textures.load(device, &source.path, &source.tag) {
                log::warn!("Skipping texture '{}': {}", source.tag, e);
            }
        }
        self.textures.bind_all(device);

        for material in &self.description.materials {
            self.materials.define(material.clone());
        }

        self.description.lights.apply(shader);

        let mut loaded = HashSet::new();
        for object in &self.description.objects {
            if loaded.insert(object.shape) {
                meshes.load(object.shape);
            }
        }
    }

    /// Draw every object in declaration order
    ///
    /// Writes the frame-wide UV scale first, then runs the per-object
    /// dispatch protocol for each entry of the draw list.
    pub fn render_frame(&self, shader: &mut dyn ShaderUniforms, meshes: &mut dyn MeshLibrary) {
        let mut dispatcher =
            DrawDispatcher::new(shader, meshes, &self.textures, &self.materials);

        let (u, v) = self.description.uv_scale;
        dispatcher.set_uv_scale(u, v);

        for object in &self.description.objects {
            dispatcher.draw_object(object);
        }
    }

    /// Release all GPU textures owned by the scene
    pub fn teardown(&mut self, device: &mut dyn TextureDevice) {
        self.textures.release_all(device);
    }

    /// The texture registry (scene owns it; callers only inspect)
    pub fn texture_registry(&self) -> &TextureRegistry {
        &self.textures
    }

    /// The material registry
    pub fn material_registry(&self) -> &MaterialRegistry {
        &self.materials
    }

    /// The scene description being sequenced
    pub fn description(&self) -> &SceneDescription {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::device::{TextureHandle, TextureUpload};
    use crate::render::shader::{uniforms, UniformStore, NO_TEXTURE_SLOT};

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

    #[derive(Default)]
    struct RecordingMeshes {
        loaded: Vec<ShapeKind>,
        drawn: Vec<ShapeKind>,
    }

    impl MeshLibrary for RecordingMeshes {
        fn load(&mut self, shape: ShapeKind) {
            self.loaded.push(shape);
        }

        fn draw(&mut self, shape: ShapeKind) {
            self.drawn.push(shape);
        }
    }

    fn write_temp_png(name: &str) -> PathBuf {
        use image::{DynamicImage, ImageFormat, RgbImage};
        use std::io::Cursor;

        let rgb = RgbImage::from_pixel(4, 4, image::Rgb([180, 140, 100]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(rgb)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("PNG encode failed");

        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, bytes).expect("write temp texture failed");
        path
    }

    fn gym_floor_material() -> Material {
        Material::new("whiteHardwoodFloor")
            .with_ambient(Vec3::new(0.4, 0.4, 0.4), 0.3)
            .with_diffuse(Vec3::new(0.8, 0.8, 0.8))
            .with_specular(Vec3::new(0.3, 0.3, 0.3))
            .with_shininess(25.0)
    }

    #[test]
    fn test_prepare_loads_each_unique_shape_once() {
        let mut sequencer = SceneSequencer::new(
            SceneDescription::new()
                .with_object(SceneObject::new(ShapeKind::Plane))
                .with_object(SceneObject::new(ShapeKind::Box))
                .with_object(SceneObject::new(ShapeKind::Plane))
                .with_object(SceneObject::new(ShapeKind::Sphere)),
        );

        let mut device = CountingDevice::default();
        let mut store = UniformStore::new();
        let mut meshes = RecordingMeshes::default();
        sequencer.prepare(&mut device, &mut store, &mut meshes);

        assert_eq!(
            meshes.loaded,
            vec![ShapeKind::Plane, ShapeKind::Box, ShapeKind::Sphere]
        );
    }

    #[test]
    fn test_render_frame_draws_in_declaration_order() {
        let mut sequencer = SceneSequencer::new(
            SceneDescription::new()
                .with_uv_scale(2.0, 2.0)
                .with_object(SceneObject::new(ShapeKind::Plane))
                .with_object(SceneObject::new(ShapeKind::Torus))
                .with_object(SceneObject::new(ShapeKind::Plane)),
        );

        let mut device = CountingDevice::default();
        let mut store = UniformStore::new();
        let mut meshes = RecordingMeshes::default();
        sequencer.prepare(&mut device, &mut store, &mut meshes);
        sequencer.render_frame(&mut store, &mut meshes);

        assert_eq!(
            meshes.drawn,
            vec![ShapeKind::Plane, ShapeKind::Torus, ShapeKind::Plane]
        );

        // UV scale is written once per frame, before any object's uniforms;
        // prepare wrote only bUseLighting ahead of it
        assert_eq!(
            store
                .write_log()
                .iter()
                .position(|name| name == uniforms::UV_SCALE),
            Some(1)
        );
        assert_eq!(
            store
                .write_log()
                .iter()
                .filter(|name| *name == uniforms::UV_SCALE)
                .count(),
            1
        );
    }

    #[test]
    fn test_prepare_skips_failed_textures_and_continues() {
        let good = write_temp_png("scene_engine_seq_good.png");
        let mut sequencer = SceneSequencer::new(
            SceneDescription::new()
                .with_texture("/no/such/file.png", "missing")
                .with_texture(&good, "floor")
                .with_material(gym_floor_material())
                .with_object(
                    SceneObject::new(ShapeKind::Plane)
                        .with_texture("floor")
                        .with_material("whiteHardwoodFloor"),
                )
                .with_object(SceneObject::new(ShapeKind::Box).with_texture("missing")),
        );

        let mut device = CountingDevice::default();
        let mut store = UniformStore::new();
        let mut meshes = RecordingMeshes::default();
        sequencer.prepare(&mut device, &mut store, &mut meshes);

        // Only the good texture registered, in slot 0
        assert_eq!(sequencer.texture_registry().len(), 1);
        assert_eq!(sequencer.texture_registry().resolve_slot("floor"), Some(0));
        assert_eq!(sequencer.texture_registry().resolve_slot("missing"), None);
        assert_eq!(device.bound, vec![(0, TextureHandle(1))]);

        sequencer.render_frame(&mut store, &mut meshes);

        // The object with the failed texture drew with the sentinel slot
        assert_eq!(
            store.get_sampler(uniforms::OBJECT_TEXTURE),
            Some(NO_TEXTURE_SLOT)
        );
        assert_eq!(meshes.drawn, vec![ShapeKind::Plane, ShapeKind::Box]);

        let _ = std::fs::remove_file(good);
    }

    #[test]
    fn test_lifecycle_end_to_end() {
        let good = write_temp_png("scene_engine_seq_e2e.png");
        let mut sequencer = SceneSequencer::new(
            SceneDescription::new()
                .with_texture(&good, "floor")
                .with_material(gym_floor_material())
                .with_light(
                    LightSource::new(Vec3::new(-14.0, 14.0, 0.0))
                        .with_color(Vec3::new(0.7, 0.75, 0.85)),
                )
                .with_uv_scale(2.0, 2.0)
                .with_object(
                    SceneObject::new(ShapeKind::Plane)
                        .with_scale(Vec3::new(14.0, 1.0, 10.0))
                        .with_color(0.5, 0.5, 0.5, 1.0)
                        .with_texture("floor")
                        .with_material("whiteHardwoodFloor"),
                ),
        );

        let mut device = CountingDevice::default();
        let mut store = UniformStore::new();
        let mut meshes = RecordingMeshes::default();

        sequencer.prepare(&mut device, &mut store, &mut meshes);
        assert_eq!(store.get_bool(uniforms::USE_LIGHTING), Some(true));

        sequencer.render_frame(&mut store, &mut meshes);
        assert_eq!(store.get_sampler(uniforms::OBJECT_TEXTURE), Some(0));
        assert_eq!(store.get_bool(uniforms::USE_TEXTURE), Some(true));
        assert_eq!(
            store.get_vec3(uniforms::MATERIAL_DIFFUSE_COLOR),
            Some(Vec3::new(0.8, 0.8, 0.8))
        );
        assert_eq!(store.get_float(uniforms::MATERIAL_SHININESS), Some(25.0));

        sequencer.teardown(&mut device);
        assert!(sequencer.texture_registry().is_empty());
        assert_eq!(device.deleted, vec![TextureHandle(1)]);

        let _ = std::fs::remove_file(good);
    }
}
