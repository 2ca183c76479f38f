//! Rendering pipeline: collaborator seams, registries, and draw dispatch
//!
//! The modules here split into two groups. Seams to external collaborators:
//! [`shader`] (uniform interface), [`device`] (GPU texture objects), and
//! [`mesh`] (primitive geometry). Engine-owned state: [`resources`] (texture
//! and material registries), [`transform`] (model matrix composition),
//! [`lighting`] (scene light rig), and [`dispatcher`] (the per-draw uniform
//! upload sequence).

pub mod device;
pub mod dispatcher;
pub mod lighting;
pub mod mesh;
pub mod resources;
pub mod shader;
pub mod transform;

pub use dispatcher::DrawDispatcher;
pub use mesh::{MeshLibrary, ShapeKind};
pub use resources::{Material, MaterialRegistry, TextureRegistry};
pub use shader::{ShaderUniforms, UniformStore};
pub use transform::ObjectTransform;
