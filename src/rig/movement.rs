//! Movement methods for `CameraRig`: pointer drag, keyboard axes,
//! edge panning, and the follow-target override.

use std::rc::Weak;

use glam::Vec3;

use super::drag::DragState;
use super::follow::FollowTarget;
use super::CameraRig;
use crate::input::FrameInput;
use crate::util::plane::Plane;

/// Project a direction onto the horizontal plane and renormalize.
///
/// A straight-down direction degrades to zero rather than NaN.
fn flatten(direction: Vec3) -> Vec3 {
    Vec3::new(direction.x, 0.0, direction.z).normalize_or_zero()
}

impl CameraRig {
    /// Movement phase: pointer drag, keyboard axes, then edge panning.
    pub(crate) fn update_movement(
        &mut self,
        input: &FrameInput<'_>,
        dt: f32,
    ) {
        self.drag_move(input);
        self.key_move(input, dt);
        self.edge_pan(input, dt);
    }

    /// Pointer drag: servo the target so the world point grabbed at press
    /// time stays under the cursor.
    fn drag_move(&mut self, input: &FrameInput<'_>) {
        let Some(button) = self.settings.movement.mouse_button.button()
        else {
            self.move_drag.release();
            return;
        };
        if !input.button_held(button) {
            self.move_drag.release();
            return;
        }

        // Any manual drag overrides an active follow binding.
        self.clear_follow();

        let ray = self.camera.screen_ray(input.pointer(), self.viewport);
        let plane = Plane::horizontal(self.ground_height);
        let Some(t) = plane.raycast(&ray) else {
            // Grazing view angle: nothing to anchor against this frame.
            return;
        };
        let hit = ray.at(t);

        match self.move_drag {
            DragState::Idle => {
                self.move_drag = DragState::Dragging { anchor: hit };
            }
            // The anchor stays fixed for the whole gesture, so the delta
            // is cumulative from the press point and the camera keeps
            // servoing until the anchor sits under the cursor again.
            DragState::Dragging { anchor } => {
                self.translate_position(anchor - hit);
            }
        }
    }

    /// Keyboard movement along the camera's flattened forward/right axes.
    fn key_move(&mut self, input: &FrameInput<'_>, dt: f32) {
        if !self.settings.movement.keyboard {
            return;
        }
        let axis_forward = input.axis_forward();
        let axis_right = input.axis_right();
        if axis_forward == 0.0 && axis_right == 0.0 {
            return;
        }

        self.clear_follow();

        let forward = flatten(self.camera.forward());
        let right = flatten(self.camera.right());
        let direction = forward * axis_forward + right * axis_right;
        let delta =
            direction * self.settings.movement.key_sensitivity * dt;
        self.translate_position(delta);
    }

    /// Translate when the pointer sits within the viewport's edge band.
    ///
    /// Unlike drag and keyboard movement this does not clear an active
    /// follow binding, so a follow override set this frame still wins.
    fn edge_pan(&mut self, input: &FrameInput<'_>, dt: f32) {
        let pan = &self.settings.movement.edge_pan;
        if !pan.enabled {
            return;
        }
        let sensitivity = pan.sensitivity;
        let band = self.viewport * pan.border;

        let pointer = input.pointer();
        let inside_x =
            pointer.x <= band.x || pointer.x >= self.viewport.x - band.x;
        let inside_y =
            pointer.y <= band.y || pointer.y >= self.viewport.y - band.y;
        if !inside_x && !inside_y {
            return;
        }

        let offset = pointer - self.viewport * 0.5;
        // Window y grows downward, so the top edge maps to world -Z (away
        // from the home orientation).
        let direction =
            Vec3::new(offset.x, 0.0, offset.y).normalize_or_zero();
        self.translate_position(direction * sensitivity * dt);
    }

    /// Drive the target position from the followed object, overriding any
    /// manual deltas accumulated earlier in the frame.
    pub(crate) fn apply_follow(&mut self) {
        let Some(weak) = self.follow.as_ref() else {
            return;
        };
        if let Some(object) = weak.upgrade() {
            self.target.position = object.position();
        } else {
            self.follow = None;
            log::debug!("follow target dropped, binding lapsed");
        }
    }

    // ── Public movement API ──────────────────────────────────────────────

    /// Translate the target position by `delta` world units.
    ///
    /// The single mutation point used by every movement handler; public
    /// so host systems (cutscenes, scripted moves) can drive the rig the
    /// same way.
    pub fn translate_position(&mut self, delta: Vec3) {
        self.target.position += delta;
    }

    /// Teleport the target position (the pose still eases in smoothly).
    pub fn set_position(&mut self, position: Vec3) {
        self.target.position = position;
    }

    /// Follow an external object: its position drives the target every
    /// frame until manual movement input clears the binding or the object
    /// is dropped.
    pub fn follow(&mut self, target: Weak<dyn FollowTarget>) {
        log::debug!("follow target bound");
        self.follow = Some(target);
    }

    /// Drop the follow binding, if any.
    pub fn clear_follow(&mut self) {
        if self.follow.take().is_some() {
            log::debug!("follow target cleared");
        }
    }

    /// Whether a follow binding is currently set.
    #[must_use]
    pub fn follow_bound(&self) -> bool {
        self.follow.is_some()
    }
}
