//! The rig's logical transform and the crate-wide Euler conventions.

use glam::{EulerRot, Quat, Vec3};

/// The rig's logical transform: the pivot that input drives.
///
/// Distinct from the viewing camera, which hangs behind the pivot by the
/// zoom distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Pivot position in world space.
    pub position: Vec3,
    /// Pivot orientation in world space.
    pub orientation: Quat,
}

impl Pose {
    /// Pose from a position and an Euler rotation in degrees.
    #[must_use]
    pub fn from_euler(position: Vec3, rotation: Vec3) -> Self {
        Self {
            position,
            orientation: orientation_from_euler(rotation),
        }
    }
}

/// Convert an Euler rotation in degrees (x = pitch, y = yaw, z = roll)
/// into a world-space orientation.
///
/// Yaw is applied first, then pitch, then roll. Positive pitch tilts the
/// view downward, so the x component is negated going into glam's
/// right-handed rotation about `+X`.
#[must_use]
pub(crate) fn orientation_from_euler(rotation: Vec3) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        rotation.y.to_radians(),
        -rotation.x.to_radians(),
        rotation.z.to_radians(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaw_rotates_the_forward_axis() {
        let forward =
            orientation_from_euler(Vec3::new(0.0, 90.0, 0.0)) * Vec3::NEG_Z;
        assert!(forward.abs_diff_eq(Vec3::NEG_X, 1e-5));
    }

    #[test]
    fn positive_pitch_looks_downward() {
        let forward =
            orientation_from_euler(Vec3::new(35.0, 0.0, 0.0)) * Vec3::NEG_Z;
        let pitch = 35f32.to_radians();
        assert!((forward.y + pitch.sin()).abs() < 1e-5);
        assert!((forward.z + pitch.cos()).abs() < 1e-5);
    }

    #[test]
    fn from_euler_applies_the_same_convention() {
        let rotation = Vec3::new(20.0, 45.0, 0.0);
        let pose = Pose::from_euler(Vec3::ONE, rotation);
        assert_eq!(pose.position, Vec3::ONE);
        let dot = pose.orientation.dot(orientation_from_euler(rotation));
        assert!((dot.abs() - 1.0).abs() < 1e-6);
    }
}
