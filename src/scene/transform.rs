//! Node-local transform: position, Euler rotation (degrees), and scale.
//!
//! Rotation order is YXZ (yaw, then pitch, then roll), which is what wall
//! panels and prop yaw assume.

use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Local transform of a scene node.
///
/// Rotation is stored as Euler angles in degrees so serialized scenes stay
/// readable; conversion to radians happens only in `matrix()`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles in degrees, applied in YXZ order.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    /// Column-major local matrix: scale, then rotate (YXZ), then translate.
    pub fn matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::YXZ,
            self.rotation.y.to_radians(),
            self.rotation.x.to_radians(),
            self.rotation.z.to_radians(),
        );
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.position)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform::IDENTITY
    }
}
