//! The desired end-state accumulated from input.

use glam::Vec3;

/// The camera's desired end-state, written by the input handlers and read
/// by the smoothing pass.
///
/// Always represents where the rig wants to be, never what is rendered.
/// `rotation` stays in Euler degrees (x = pitch, y = yaw, z = roll); the
/// smoothing pass converts it to an orientation per settle step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetState {
    /// Desired pivot position.
    pub position: Vec3,
    /// Desired rotation in Euler degrees.
    pub rotation: Vec3,
}

impl TargetState {
    /// Target state matching an initial position and rotation.
    #[must_use]
    pub fn new(position: Vec3, rotation: Vec3) -> Self {
        Self { position, rotation }
    }
}
