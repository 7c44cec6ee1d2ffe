//! Rotation methods for `CameraRig`: orbit drag and keyboard yaw.

use glam::{Vec2, Vec3};

use super::drag::DragState;
use super::{clamp_between, CameraRig};
use crate::input::FrameInput;

impl CameraRig {
    /// Rotation phase: orbit drag then keyboard yaw.
    pub(crate) fn update_rotation(
        &mut self,
        input: &FrameInput<'_>,
        dt: f32,
    ) {
        self.drag_rotate(input);
        self.key_rotate(input, dt);
    }

    /// Orbit drag: viewport-relative pointer deltas become pitch and yaw.
    ///
    /// Unlike the movement gesture this one is incremental: the anchor
    /// chases the pointer every processed frame, so holding the pointer
    /// still adds nothing.
    fn drag_rotate(&mut self, input: &FrameInput<'_>) {
        let Some(button) = self.settings.rotation.mouse_button.button()
        else {
            self.rotate_drag.release();
            return;
        };
        if !input.button_held(button) {
            self.rotate_drag.release();
            return;
        }

        let position = input.pointer() / self.viewport;
        match self.rotate_drag {
            DragState::Idle => {
                self.rotate_drag = DragState::Dragging { anchor: position };
            }
            DragState::Dragging { anchor } => {
                let delta = anchor - position;
                if delta == Vec2::ZERO {
                    return;
                }
                // Screen y maps to pitch (sign-flipped for the y-down
                // window convention), screen x maps to yaw.
                let swapped = Vec3::new(-delta.y, delta.x, 0.0);
                let sensitivity = self.settings.rotation.mouse_sensitivity;
                self.target.rotation += swapped * sensitivity;
                self.target.rotation.x = clamp_between(
                    self.target.rotation.x,
                    self.settings.rotation.pitch_min,
                    self.settings.rotation.pitch_max,
                );
                self.settings.rotation.current = self.target.rotation.x;
                self.rotate_drag = DragState::Dragging { anchor: position };
            }
        }
    }

    /// Keyboard yaw: the left key wins when both are held. Yaw is never
    /// clamped, so it wraps continuously.
    fn key_rotate(&mut self, input: &FrameInput<'_>, dt: f32) {
        let rotation = &self.settings.rotation;
        let yaw = if input.key_held(&rotation.left_key) {
            -1.0
        } else if input.key_held(&rotation.right_key) {
            1.0
        } else {
            return;
        };
        self.target.rotation.y += yaw * rotation.key_sensitivity * dt;
    }
}
