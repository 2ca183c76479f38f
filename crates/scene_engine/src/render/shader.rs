//! Shader uniform interface
//!
//! The shader program is an external collaborator: once a program is active
//! it accepts named scalar, vector, matrix, and sampler values with no
//! return channel. [`ShaderUniforms`] is that seam. [`UniformStore`] is a
//! concrete implementation that holds the draw state in an inspectable map,
//! so the dispatch sequence can be exercised and asserted without a live
//! graphics context.

use crate::foundation::math::{Mat4, Vec2, Vec3, Vec4};
use std::collections::HashMap;

/// Uniform names of the scene shader program contract
pub mod uniforms {
    /// Model matrix
    pub const MODEL: &str = "model";
    /// Base object color (RGBA)
    pub const OBJECT_COLOR: &str = "objectColor";
    /// Sampler bound to the object's texture slot
    pub const OBJECT_TEXTURE: &str = "objectTexture";
    /// Whether the fragment shader samples the texture
    pub const USE_TEXTURE: &str = "bUseTexture";
    /// Whether the fragment shader runs the lighting model
    pub const USE_LIGHTING: &str = "bUseLighting";
    /// Scene-wide UV tiling scale
    pub const UV_SCALE: &str = "UVscale";
    /// Material ambient color
    pub const MATERIAL_AMBIENT_COLOR: &str = "material.ambientColor";
    /// Material ambient strength
    pub const MATERIAL_AMBIENT_STRENGTH: &str = "material.ambientStrength";
    /// Material diffuse color
    pub const MATERIAL_DIFFUSE_COLOR: &str = "material.diffuseColor";
    /// Material specular color
    pub const MATERIAL_SPECULAR_COLOR: &str = "material.specularColor";
    /// Material shininess exponent
    pub const MATERIAL_SHININESS: &str = "material.shininess";
}

/// Sentinel slot value written to the sampler uniform when a texture tag
/// does not resolve. Deliberately written verbatim: a miss degrades the
/// draw visually instead of aborting it.
pub const NO_TEXTURE_SLOT: i32 = -1;

/// Seam to the active shader program
///
/// Implementations apply each value to the uniform of the given name.
/// Setters have no return value; the program is assumed available once
/// active, matching the underlying graphics API contract.
pub trait ShaderUniforms {
    /// Set a boolean uniform
    fn set_bool(&mut self, name: &str, value: bool);
    /// Set an integer uniform
    fn set_int(&mut self, name: &str, value: i32);
    /// Set a float uniform
    fn set_float(&mut self, name: &str, value: f32);
    /// Set a 2-component vector uniform
    fn set_vec2(&mut self, name: &str, value: Vec2);
    /// Set a 3-component vector uniform
    fn set_vec3(&mut self, name: &str, value: Vec3);
    /// Set a 4-component vector uniform
    fn set_vec4(&mut self, name: &str, value: Vec4);
    /// Set a 4x4 matrix uniform
    fn set_mat4(&mut self, name: &str, value: &Mat4);
    /// Bind an integer sampler uniform to a texture slot
    fn set_sampler(&mut self, name: &str, slot: i32);
}

/// A single uniform value as written through [`ShaderUniforms`]
#[derive(Debug, Clone, PartialEq)]
pub enum UniformValue {
    /// Boolean uniform
    Bool(bool),
    /// Integer uniform
    Int(i32),
    /// Float uniform
    Float(f32),
    /// 2-component vector uniform
    Vec2(Vec2),
    /// 3-component vector uniform
    Vec3(Vec3),
    /// 4-component vector uniform
    Vec4(Vec4),
    /// 4x4 matrix uniform
    Mat4(Mat4),
    /// Sampler slot binding
    Sampler(i32),
}

/// Explicit draw-state object backing [`ShaderUniforms`]
///
/// Holds the last value written for every uniform name plus the order in
/// which writes happened. The draw state the shader sees immediately before
/// a draw call is exactly the contents of this store.
#[derive(Debug, Default)]
pub struct UniformStore {
    values: HashMap<String, UniformValue>,
    write_log: Vec<String>,
}

impl UniformStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the last value written for a uniform name
    pub fn get(&self, name: &str) -> Option<&UniformValue> {
        self.values.get(name)
    }

    /// Get a boolean uniform, if one was written under this name
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.values.get(name) {
            Some(UniformValue::Bool(v)) => Some(*v),
            _ => None,
        }
    }

    /// Get a float uniform, if one was written under this name
    pub fn get_float(&self, name: &str) -> Option<f32> {
        match self.values.get(name) {
            Some(UniformValue::Float(v)) => Some(*v),
            _ => None,
        }
    }

    /// Get a 3-component vector uniform, if one was written under this name
    pub fn get_vec3(&self, name: &str) -> Option<Vec3> {
        match self.values.get(name) {
            Some(UniformValue::Vec3(v)) => Some(*v),
            _ => None,
        }
    }

    /// Get a 4-component vector uniform, if one was written under this name
    pub fn get_vec4(&self, name: &str) -> Option<Vec4> {
        match self.values.get(name) {
            Some(UniformValue::Vec4(v)) => Some(*v),
            _ => None,
        }
    }

    /// Get a matrix uniform, if one was written under this name
    pub fn get_mat4(&self, name: &str) -> Option<&Mat4> {
        match self.values.get(name) {
            Some(UniformValue::Mat4(m)) => Some(m),
            _ => None,
        }
    }

    /// Get a sampler slot, if one was written under this name
    pub fn get_sampler(&self, name: &str) -> Option<i32> {
        match self.values.get(name) {
            Some(UniformValue::Sampler(s)) => Some(*s),
            _ => None,
        }
    }

    /// Uniform names in the order they were written (repeats included)
    pub fn write_log(&self) -> &[String] {
        &self.write_log
    }

    /// Number of distinct uniform names written so far
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing has been written yet
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn write(&mut self, name: &str, value: UniformValue) {
        self.write_log.push(name.to_string());
        self.values.insert(name.to_string(), value);
    }
}

impl ShaderUniforms for UniformStore {
    fn set_bool(&mut self, name: &str, value: bool) {
        self.write(name, UniformValue::Bool(value));
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.write(name, UniformValue::Int(value));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.write(name, UniformValue::Float(value));
    }

    fn set_vec2(&mut self, name: &str, value: Vec2) {
        self.write(name, UniformValue::Vec2(value));
    }

    fn set_vec3(&mut self, name: &str, value: Vec3) {
        self.write(name, UniformValue::Vec3(value));
    }

    fn set_vec4(&mut self, name: &str, value: Vec4) {
        self.write(name, UniformValue::Vec4(value));
    }

    fn set_mat4(&mut self, name: &str, value: &Mat4) {
        self.write(name, UniformValue::Mat4(*value));
    }

    fn set_sampler(&mut self, name: &str, slot: i32) {
        self.write(name, UniformValue::Sampler(slot));
    }
}
