//! Material registry
//!
//! Named lighting-material parameter sets, defined once during scene setup
//! and immutable afterward. Lookup is a linear scan over the definition
//! order; duplicate tags are permitted and the first definition wins.

use crate::foundation::math::Vec3;

/// Lighting parameters for one tagged material
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Caller-chosen lookup tag
    pub tag: String,
    /// Ambient reflection color
    pub ambient_color: Vec3,
    /// Ambient strength multiplier
    pub ambient_strength: f32,
    /// Diffuse reflection color
    pub diffuse_color: Vec3,
    /// Specular reflection color
    pub specular_color: Vec3,
    /// Specular shininess exponent
    pub shininess: f32,
}

impl Material {
    /// Create a matte light-gray material under the given tag
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ambient_color: Vec3::new(0.2, 0.2, 0.2),
            ambient_strength: 0.2,
            diffuse_color: Vec3::new(0.8, 0.8, 0.8),
            specular_color: Vec3::new(0.0, 0.0, 0.0),
            shininess: 0.0,
        }
    }

    /// Builder pattern: set the ambient color and strength
    pub fn with_ambient(mut self, color: Vec3, strength: f32) -> Self {
        self.ambient_color = color;
        self.ambient_strength = strength;
        self
    }

    /// Builder pattern: set the diffuse color
    pub fn with_diffuse(mut self, color: Vec3) -> Self {
        self.diffuse_color = color;
        self
    }

    /// Builder pattern: set the specular color
    pub fn with_specular(mut self, color: Vec3) -> Self {
        self.specular_color = color;
        self
    }

    /// Builder pattern: set the shininess exponent
    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }
}

/// Registry of scene materials
#[derive(Debug, Default)]
pub struct MaterialRegistry {
    entries: Vec<Material>,
}

impl MaterialRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a material definition
    ///
    /// Part of the one-time bulk population before rendering begins.
    /// Uniqueness is not enforced; lookups return the first match.
    pub fn define(&mut self, material: Material) {
        log::debug!("Defined material '{}'", material.tag);
        self.entries.push(material);
    }

    /// Resolve a tag to its material, first match wins
    ///
    /// An empty registry answers immediately without scanning. `None` is a
    /// non-fatal outcome the caller must handle as "no material".
    pub fn resolve(&self, tag: &str) -> Option<&Material> {
        if self.entries.is_empty() {
            return None;
        }
        self.entries.iter().find(|material| material.tag == tag)
    }

    /// Number of defined materials
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Defined materials in definition order
    pub fn entries(&self) -> &[Material] {
        &self.entries
    }
}
