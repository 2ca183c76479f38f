//! # Scene Engine
//!
//! Resource registries and per-draw state management for rendering static
//! 3D scenes built from primitive meshes.
//!
//! ## Features
//!
//! - **Texture Registry**: tagged texture loading with bounded slot assignment
//! - **Material Registry**: named lighting-material parameter sets
//! - **Transform Composer**: fixed-order model matrix construction
//! - **Draw-State Dispatcher**: uniform upload sequence ahead of every draw
//! - **Scene Sequencer**: one-time setup plus an ordered, fixed draw list
//!
//! The graphics API itself is reached only through collaborator seams: the
//! [`render::shader::ShaderUniforms`], [`render::device::TextureDevice`], and
//! [`render::mesh::MeshLibrary`] traits. Everything above those seams is
//! plain, synchronous, single-threaded Rust that can run headless.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scene_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let description = SceneDescription::new()
//!         .with_object(
//!             SceneObject::new(ShapeKind::Plane)
//!                 .with_scale(Vec3::new(10.0, 1.0, 10.0))
//!                 .with_color(0.5, 0.5, 0.5, 1.0),
//!         );
//!     let _sequencer = SceneSequencer::new(description);
//!     // prepare/render against real collaborator implementations here
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod assets;
pub mod config;
pub mod render;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        assets::ImageData,
        config::{Config, ConfigError},
        foundation::math::{Mat4, Mat4Ext, Vec2, Vec3, Vec4},
        render::{
            device::{PixelFormat, SamplerConfig, TextureDevice, TextureHandle, TextureUpload},
            dispatcher::DrawDispatcher,
            lighting::{LightRig, LightSource},
            mesh::{MeshLibrary, ShapeKind},
            resources::{Material, MaterialRegistry, TextureRegistry},
            shader::{ShaderUniforms, UniformStore, UniformValue},
            transform::ObjectTransform,
        },
        scene::{SceneDescription, SceneObject, SceneSequencer, TextureSource},
    };
}
