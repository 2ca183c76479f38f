//! Draw-state dispatcher
//!
//! Pushes the per-object uniform values to the shader seam and issues the
//! mesh draw call. The per-object protocol runs in a strict order:
//!
//! 1. model matrix, 2. base color (which also clears the texture flag),
//! 3. optional texture by tag, 4. optional material by tag, 5. draw.
//!
//! Tag misses in steps 3 and 4 degrade the draw instead of aborting it:
//! a missing texture writes the sentinel slot, a missing material leaves
//! whatever material uniforms a previous draw set. Both paths log a
//! warning so a typo'd tag is observable.

use crate::foundation::math::{Vec2, Vec4};
use crate::render::mesh::{MeshLibrary, ShapeKind};
use crate::render::resources::{MaterialRegistry, TextureRegistry};
use crate::render::shader::{uniforms, ShaderUniforms, NO_TEXTURE_SLOT};
use crate::render::transform::ObjectTransform;
use crate::scene::SceneObject;

/// Per-draw uniform dispatch over borrowed collaborator seams
///
/// Holds no state of its own; every setter writes through to the shader
/// immediately. One dispatcher typically lives for one frame's object loop.
pub struct DrawDispatcher<'a> {
    shader: &'a mut dyn ShaderUniforms,
    meshes: &'a mut dyn MeshLibrary,
    textures: &'a TextureRegistry,
    materials: &'a MaterialRegistry,
}

impl<'a> DrawDispatcher<'a> {
    /// Create a dispatcher over the scene's registries and seams
    pub fn new(
        shader: &'a mut dyn ShaderUniforms,
        meshes: &'a mut dyn MeshLibrary,
        textures: &'a TextureRegistry,
        materials: &'a MaterialRegistry,
    ) -> Self {
        Self {
            shader,
            meshes,
            textures,
            materials,
        }
    }

    /// Set the scene-wide UV tiling scale
    ///
    /// Frame-scoped, not per object: written once before the object loop.
    pub fn set_uv_scale(&mut self, u: f32, v: f32) {
        self.shader.set_vec2(uniforms::UV_SCALE, Vec2::new(u, v));
    }

    /// Compose the model matrix and write it to the shader
    pub fn set_transformations(&mut self, transform: &ObjectTransform) {
        let model = transform.compose();
        self.shader.set_mat4(uniforms::MODEL, &model);
    }

    /// Set the base color for the next draw
    ///
    /// Also clears the texture flag unconditionally; a textured object must
    /// re-enable it afterwards via [`set_texture`](Self::set_texture).
    pub fn set_color(&mut self, color: Vec4) {
        self.shader.set_bool(uniforms::USE_TEXTURE, false);
        self.shader.set_vec4(uniforms::OBJECT_COLOR, color);
    }

    /// Select the texture for the next draw by tag
    ///
    /// Enables the texture flag and writes the resolved slot to the sampler
    /// uniform. An unresolved tag writes [`NO_TEXTURE_SLOT`] verbatim and
    /// the draw proceeds.
    pub fn set_texture(&mut self, tag: &str) {
        self.shader.set_bool(uniforms::USE_TEXTURE, true);

        let slot = match self.textures.resolve_slot(tag) {
            Some(slot) => slot as i32,
            None => {
                log::warn!("Texture tag '{}' not registered; binding sentinel slot", tag);
                NO_TEXTURE_SLOT
            }
        };
        self.shader.set_sampler(uniforms::OBJECT_TEXTURE, slot);
    }

    /// Select the lighting material for the next draw by tag
    ///
    /// On a hit, writes the five material uniforms. On a miss nothing is
    /// written and the previously bound material values remain in effect
    /// for this draw, a documented stale-state hazard kept for contract
    /// compatibility.
    pub fn set_material(&mut self, tag: &str) {
        match self.materials.resolve(tag) {
            Some(material) => {
                self.shader
                    .set_vec3(uniforms::MATERIAL_AMBIENT_COLOR, material.ambient_color);
                self.shader
                    .set_float(uniforms::MATERIAL_AMBIENT_STRENGTH, material.ambient_strength);
                self.shader
                    .set_vec3(uniforms::MATERIAL_DIFFUSE_COLOR, material.diffuse_color);
                self.shader
                    .set_vec3(uniforms::MATERIAL_SPECULAR_COLOR, material.specular_color);
                self.shader
                    .set_float(uniforms::MATERIAL_SHININESS, material.shininess);
            }
            None => {
                log::warn!(
                    "Material tag '{}' not defined; previous material values remain active",
                    tag
                );
            }
        }
    }

    /// Issue the mesh draw call for a shape
    pub fn draw(&mut self, shape: ShapeKind) {
        self.meshes.draw(shape);
    }

    /// Run the full per-object protocol for one scene object
    pub fn draw_object(&mut self, object: &SceneObject) {
        self.set_transformations(&object.transform);
        self.set_color(object.color);
        if let Some(tag) = &object.texture {
            self.set_texture(tag);
        }
        if let Some(tag) = &object.material {
            self.set_material(tag);
        }
        self.draw(object.shape);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::ImageData;
    use crate::foundation::math::Vec3;
    use crate::render::device::{TextureDevice, TextureHandle, TextureUpload};
    use crate::render::resources::Material;
    use crate::render::shader::UniformStore;

    #[derive(Default)]
    struct CountingDevice {
        next_handle: u64,
    }

    impl TextureDevice for CountingDevice {
        fn create_texture(&mut self, _upload: &TextureUpload<'_>) -> TextureHandle {
            self.next_handle += 1;
            TextureHandle(self.next_handle)
        }

        fn bind_texture_unit(&mut self, _unit: usize, _handle: TextureHandle) {}

        fn delete_texture(&mut self, _handle: TextureHandle) {}
    }

    #[derive(Default)]
    struct RecordingMeshes {
        drawn: Vec<ShapeKind>,
    }

    impl MeshLibrary for RecordingMeshes {
        fn load(&mut self, _shape: ShapeKind) {}

        fn draw(&mut self, shape: ShapeKind) {
            self.drawn.push(shape);
        }
    }

    fn registries() -> (TextureRegistry, MaterialRegistry) {
        let mut device = CountingDevice::default();
        let mut textures = TextureRegistry::new();
        textures
            .load_image(&mut device, ImageData::solid_color(2, 2, [255; 4]), "floor")
            .unwrap();
        textures
            .load_image(&mut device, ImageData::solid_color(2, 2, [255; 4]), "wall")
            .unwrap();

        let mut materials = MaterialRegistry::new();
        materials.define(
            Material::new("whiteWall")
                .with_ambient(Vec3::new(0.8, 0.8, 0.8), 0.2)
                .with_diffuse(Vec3::new(0.8, 0.8, 0.8))
                .with_specular(Vec3::new(0.0, 0.0, 0.0))
                .with_shininess(0.0),
        );

        (textures, materials)
    }

    #[test]
    fn test_set_color_disables_texture_flag() {
        let (textures, materials) = registries();
        let mut store = UniformStore::new();
        let mut meshes = RecordingMeshes::default();
        let mut dispatcher = DrawDispatcher::new(&mut store, &mut meshes, &textures, &materials);

        dispatcher.set_texture("wall");
        dispatcher.set_color(Vec4::new(0.0, 1.0, 1.0, 1.0));

        assert_eq!(store.get_bool(uniforms::USE_TEXTURE), Some(false));
        assert_eq!(
            store.get_vec4(uniforms::OBJECT_COLOR),
            Some(Vec4::new(0.0, 1.0, 1.0, 1.0))
        );
    }

    #[test]
    fn test_set_texture_writes_resolved_slot() {
        let (textures, materials) = registries();
        let mut store = UniformStore::new();
        let mut meshes = RecordingMeshes::default();
        let mut dispatcher = DrawDispatcher::new(&mut store, &mut meshes, &textures, &materials);

        dispatcher.set_texture("wall");

        assert_eq!(store.get_bool(uniforms::USE_TEXTURE), Some(true));
        assert_eq!(store.get_sampler(uniforms::OBJECT_TEXTURE), Some(1));
    }

    #[test]
    fn test_missing_texture_tag_writes_sentinel_and_draw_proceeds() {
        let (textures, materials) = registries();
        let mut store = UniformStore::new();
        let mut meshes = RecordingMeshes::default();
        let mut dispatcher = DrawDispatcher::new(&mut store, &mut meshes, &textures, &materials);

        let object = SceneObject::new(ShapeKind::Sphere).with_texture("tpyo");
        dispatcher.draw_object(&object);

        assert_eq!(
            store.get_sampler(uniforms::OBJECT_TEXTURE),
            Some(NO_TEXTURE_SLOT)
        );
        assert_eq!(store.get_bool(uniforms::USE_TEXTURE), Some(true));
        assert_eq!(meshes.drawn, vec![ShapeKind::Sphere]);
    }

    #[test]
    fn test_missing_material_leaves_previous_values() {
        let (textures, materials) = registries();
        let mut store = UniformStore::new();
        let mut meshes = RecordingMeshes::default();
        let mut dispatcher = DrawDispatcher::new(&mut store, &mut meshes, &textures, &materials);

        dispatcher.set_material("whiteWall");
        dispatcher.set_material("doesNotExist");

        // Stale-state contract: the earlier material is still bound
        assert_eq!(
            store.get_vec3(uniforms::MATERIAL_AMBIENT_COLOR),
            Some(Vec3::new(0.8, 0.8, 0.8))
        );
        assert_eq!(store.get_float(uniforms::MATERIAL_SHININESS), Some(0.0));
    }

    #[test]
    fn test_draw_object_runs_steps_in_order() {
        let (textures, materials) = registries();
        let mut store = UniformStore::new();
        let mut meshes = RecordingMeshes::default();
        let mut dispatcher = DrawDispatcher::new(&mut store, &mut meshes, &textures, &materials);

        let object = SceneObject::new(ShapeKind::Plane)
            .with_color(0.5, 0.5, 0.5, 1.0)
            .with_texture("floor")
            .with_material("whiteWall");
        dispatcher.draw_object(&object);

        let log = store.write_log();
        let position = |name: &str| {
            log.iter()
                .position(|written| written == name)
                .unwrap_or_else(|| panic!("uniform {name} never written"))
        };

        // Transform, then color, then texture, then material
        assert!(position(uniforms::MODEL) < position(uniforms::OBJECT_COLOR));
        assert!(position(uniforms::OBJECT_COLOR) < position(uniforms::OBJECT_TEXTURE));
        assert!(position(uniforms::OBJECT_TEXTURE) < position(uniforms::MATERIAL_AMBIENT_COLOR));
        assert_eq!(meshes.drawn, vec![ShapeKind::Plane]);

        // Texture selection re-enabled the flag after set_color cleared it
        assert_eq!(store.get_bool(uniforms::USE_TEXTURE), Some(true));
        assert_eq!(store.get_sampler(uniforms::OBJECT_TEXTURE), Some(0));
    }

    #[test]
    fn test_uv_scale_is_frame_scoped_write() {
        let (textures, materials) = registries();
        let mut store = UniformStore::new();
        let mut meshes = RecordingMeshes::default();
        let mut dispatcher = DrawDispatcher::new(&mut store, &mut meshes, &textures, &materials);

        dispatcher.set_uv_scale(2.0, 2.0);
        assert_eq!(
            store.get(uniforms::UV_SCALE),
            Some(&crate::render::shader::UniformValue::Vec2(Vec2::new(2.0, 2.0)))
        );
    }
}
