//! Model matrix composition
//!
//! Builds the per-object model matrix from independent scale, per-axis
//! rotation, and translation parameters. The composition order is a hard
//! contract: `Translation * RotationX * RotationY * RotationZ * Scale`.
//! Callers rely on scale applying in object-local space before any
//! rotation, and on all rotations applying before the world translation;
//! reordering changes every rendered frame.

use crate::foundation::math::{Mat4, Mat4Ext, Vec3};

/// Per-object transform parameters for one draw call
///
/// Ephemeral: one instance describes one draw and is not retained. The
/// rotations are degrees about the world X, Y, and Z axes, each built into
/// its own matrix before composition.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectTransform {
    /// Scale factors along the object's local axes
    pub scale: Vec3,
    /// Rotation about the X axis, in degrees
    pub rotation_x_deg: f32,
    /// Rotation about the Y axis, in degrees
    pub rotation_y_deg: f32,
    /// Rotation about the Z axis, in degrees
    pub rotation_z_deg: f32,
    /// World-space position
    pub position: Vec3,
}

impl Default for ObjectTransform {
    fn default() -> Self {
        Self {
            scale: Vec3::new(1.0, 1.0, 1.0),
            rotation_x_deg: 0.0,
            rotation_y_deg: 0.0,
            rotation_z_deg: 0.0,
            position: Vec3::zeros(),
        }
    }
}

impl ObjectTransform {
    /// Identity transform
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: set the scale factors
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Builder pattern: set all three axis rotations in degrees
    pub fn with_rotation_degrees(mut self, x: f32, y: f32, z: f32) -> Self {
        self.rotation_x_deg = x;
        self.rotation_y_deg = y;
        self.rotation_z_deg = z;
        self
    }

    /// Builder pattern: set the world position
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Compose the model matrix
    ///
    /// Fixed order, translation outermost, scale innermost:
    /// `T * Rx * Ry * Rz * S`.
    pub fn compose(&self) -> Mat4 {
        let translation = Mat4::new_translation(&self.position);
        let rotation_x = Mat4::rotation_x(self.rotation_x_deg.to_radians());
        let rotation_y = Mat4::rotation_y(self.rotation_y_deg.to_radians());
        let rotation_z = Mat4::rotation_z(self.rotation_z_deg.to_radians());
        let scale = Mat4::new_nonuniform_scaling(&self.scale);

        translation * rotation_x * rotation_y * rotation_z * scale
    }
}
