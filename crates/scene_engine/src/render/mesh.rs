//! Primitive mesh geometry seam
//!
//! Vertex and index buffers for the primitive shapes are produced and owned
//! by an external mesh-geometry library. Geometry is uploaded once per shape
//! and shared read-only by every draw call that references the shape.

/// Enumeration of the primitive shapes the scene can draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Flat plane
    Plane,
    /// Axis-aligned box
    Box,
    /// Cylinder with parallel caps
    Cylinder,
    /// Cone
    Cone,
    /// UV sphere
    Sphere,
    /// Torus
    Torus,
    /// Cylinder with unequal cap radii
    TaperedCylinder,
}

impl ShapeKind {
    /// Get all available shapes
    pub fn all() -> &'static [ShapeKind] {
        &[
            ShapeKind::Plane,
            ShapeKind::Box,
            ShapeKind::Cylinder,
            ShapeKind::Cone,
            ShapeKind::Sphere,
            ShapeKind::Torus,
            ShapeKind::TaperedCylinder,
        ]
    }

    /// Short display name for logging
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Plane => "plane",
            ShapeKind::Box => "box",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Cone => "cone",
            ShapeKind::Sphere => "sphere",
            ShapeKind::Torus => "torus",
            ShapeKind::TaperedCylinder => "tapered cylinder",
        }
    }
}

/// Seam to the mesh-geometry collaborator
///
/// `load` must be called once per shape before the first `draw` of that
/// shape; a single upload serves any number of draws.
pub trait MeshLibrary {
    /// Build and upload the geometry buffers for a shape
    fn load(&mut self, shape: ShapeKind);

    /// Issue the draw command for a shape using the currently set uniforms
    fn draw(&mut self, shape: ShapeKind);
}
