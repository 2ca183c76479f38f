//! Tagged resource registries
//!
//! Textures and materials are registered once during scene setup under
//! caller-chosen tags, then resolved by tag before each draw. The
//! registries exclusively own the underlying GPU and parameter resources;
//! draw dispatch only references them.

pub mod materials;
pub mod textures;

pub use materials::{Material, MaterialRegistry};
pub use textures::{TextureEntry, TextureError, TextureRegistry, MAX_TEXTURE_SLOTS};
