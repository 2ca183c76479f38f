//! Scene lighting rig
//!
//! Point lights applied once during scene setup. The shader exposes a fixed
//! array of light sources; [`LightRig`] fills it in order and toggles the
//! lighting model on when at least one light is present.

use crate::foundation::math::Vec3;
use crate::render::shader::{uniforms, ShaderUniforms};

/// Size of the shader's light source array
pub const MAX_LIGHT_SOURCES: usize = 4;

/// One point light source
#[derive(Debug, Clone, PartialEq)]
pub struct LightSource {
    /// World-space position
    pub position: Vec3,
    /// Ambient contribution color
    pub ambient_color: Vec3,
    /// Diffuse contribution color
    pub diffuse_color: Vec3,
    /// Specular contribution color
    pub specular_color: Vec3,
    /// Focal strength of the specular falloff
    pub focal_strength: f32,
    /// Specular intensity multiplier
    pub specular_intensity: f32,
}

impl LightSource {
    /// Neutral white light at a position
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ambient_color: Vec3::new(1.0, 1.0, 1.0),
            diffuse_color: Vec3::new(1.0, 1.0, 1.0),
            specular_color: Vec3::new(1.0, 1.0, 1.0),
            focal_strength: 1.0,
            specular_intensity: 1.0,
        }
    }

    /// Builder pattern: set the same color for ambient, diffuse, and specular
    pub fn with_color(mut self, color: Vec3) -> Self {
        self.ambient_color = color;
        self.diffuse_color = color;
        self.specular_color = color;
        self
    }

    /// Builder pattern: set the focal strength
    pub fn with_focal_strength(mut self, focal_strength: f32) -> Self {
        self.focal_strength = focal_strength;
        self
    }

    /// Builder pattern: set the specular intensity
    pub fn with_specular_intensity(mut self, specular_intensity: f32) -> Self {
        self.specular_intensity = specular_intensity;
        self
    }
}

/// Ordered set of scene lights, capped at the shader array size
#[derive(Debug, Default)]
pub struct LightRig {
    lights: Vec<LightSource>,
}

impl LightRig {
    /// Create an empty rig
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a light source
    ///
    /// Lights beyond [`MAX_LIGHT_SOURCES`] have no uniform to land in; they
    /// are dropped with a warning rather than failing scene setup.
    pub fn push(&mut self, light: LightSource) {
        if self.lights.len() >= MAX_LIGHT_SOURCES {
            log::warn!(
                "Light rig full ({} sources); dropping additional light at {:?}",
                MAX_LIGHT_SOURCES,
                light.position
            );
            return;
        }
        self.lights.push(light);
    }

    /// Number of lights in the rig
    pub fn len(&self) -> usize {
        self.lights.len()
    }

    /// Whether the rig has no lights
    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    /// Write every light into the shader's light array and set the
    /// lighting flag. Called once during scene preparation.
    pub fn apply(&self, shader: &mut dyn ShaderUniforms) {
        for (index, light) in self.lights.iter().enumerate() {
            shader.set_vec3(&light_uniform(index, "position"), light.position);
            shader.set_vec3(&light_uniform(index, "ambientColor"), light.ambient_color);
            shader.set_vec3(&light_uniform(index, "diffuseColor"), light.diffuse_color);
            shader.set_vec3(&light_uniform(index, "specularColor"), light.specular_color);
            shader.set_float(&light_uniform(index, "focalStrength"), light.focal_strength);
            shader.set_float(
                &light_uniform(index, "specularIntensity"),
                light.specular_intensity,
            );
        }
        shader.set_bool(uniforms::USE_LIGHTING, !self.lights.is_empty());
    }
}

fn light_uniform(index: usize, field: &str) -> String {
    format!("lightSources[{index}].{field}")
}
