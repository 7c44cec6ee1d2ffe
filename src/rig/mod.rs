//! The camera rig: input-driven target state plus a smoothed pose.
//!
//! Per frame the rig runs two passes. [`CameraRig::update`] maps the
//! frame's input onto the target state (movement, then rotation, then
//! distance, then the follow override, in that fixed order so later
//! handlers can override earlier ones). [`CameraRig::settle`] then eases
//! the rendered pose and the viewing camera toward that target,
//! decoupling input rate from visual settling rate.

mod distance;
mod drag;
mod follow;
mod movement;
mod pose;
mod rotation;
mod smoothing;
mod target;

use std::rc::Weak;

use glam::{Vec2, Vec3};

pub use follow::FollowTarget;
pub use pose::Pose;
pub use target::TargetState;

use self::drag::DragState;
use crate::camera::ViewCamera;
use crate::input::FrameInput;
use crate::settings::RigSettings;

/// Clamp `value` into the range spanned by `a` and `b`, whichever order
/// they come in. Settings ranges are user-editable and may be inverted.
pub(crate) fn clamp_between(value: f32, a: f32, b: f32) -> f32 {
    value.clamp(a.min(b), a.max(b))
}

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`CameraRig`].
pub struct CameraRigBuilder {
    position: Vec3,
    yaw: f32,
    viewport: Vec2,
    ground_height: f32,
    settings: RigSettings,
}

impl CameraRigBuilder {
    /// Builder with the rig at the origin, yaw 0, a 1920x1080 viewport,
    /// the ground plane at -1, and default settings.
    fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            viewport: Vec2::new(1920.0, 1080.0),
            ground_height: -1.0,
            settings: RigSettings::default(),
        }
    }

    /// Set the initial pivot position.
    #[must_use]
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Set the initial yaw in degrees.
    #[must_use]
    pub fn with_yaw(mut self, yaw: f32) -> Self {
        self.yaw = yaw;
        self
    }

    /// Set the viewport size in physical pixels.
    #[must_use]
    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport =
            Vec2::new(width.max(1) as f32, height.max(1) as f32);
        self
    }

    /// Set the height of the ground reference plane.
    #[must_use]
    pub fn with_ground_height(mut self, height: f32) -> Self {
        self.ground_height = height;
        self
    }

    /// Override the default settings.
    #[must_use]
    pub fn with_settings(mut self, settings: RigSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Consume the builder and produce a [`CameraRig`].
    #[must_use]
    pub fn build(self) -> CameraRig {
        CameraRig::from_builder(self)
    }
}

// ── CameraRig ────────────────────────────────────────────────────────────

/// Input-driven camera rig for RTS-style top-down viewports.
///
/// # Construction
///
/// Use [`CameraRig::builder`] to set the initial position, yaw, viewport,
/// and settings. The initial pitch and zoom distance come from
/// [`RigSettings`] (`rotation.current` / `distance.current`), clamped
/// into their configured ranges.
///
/// # Frame loop
///
/// Each frame, [`sample`](crate::InputSampler::sample) the input, call
/// [`update`](Self::update) with it, then [`settle`](Self::settle).
/// Call [`resize`](Self::resize) when the window size changes. The host
/// renders from [`camera`](Self::camera).
///
/// # Driving the rig externally
///
/// [`translate_position`](Self::translate_position),
/// [`set_position`](Self::set_position), and
/// [`translate_distance`](Self::translate_distance) mutate the target
/// directly; [`follow`](Self::follow) binds an external object whose
/// position overrides manual movement until new input clears it.
pub struct CameraRig {
    /// Control-scheme settings (movement, rotation, distance).
    settings: RigSettings,
    /// Smoothed rendered pose of the pivot.
    pose: Pose,
    /// Desired end-state accumulated from input.
    target: TargetState,
    /// Viewing camera offset behind the pivot.
    camera: ViewCamera,
    /// Viewport size in physical pixels.
    viewport: Vec2,
    /// Height of the ground reference plane drags are cast against.
    ground_height: f32,
    /// Movement drag gesture (world-space anchor).
    move_drag: DragState<Vec3>,
    /// Rotation drag gesture (viewport-space anchor).
    rotate_drag: DragState<Vec2>,
    /// Followed object, if any.
    follow: Option<Weak<dyn FollowTarget>>,
}

impl CameraRig {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> CameraRigBuilder {
        CameraRigBuilder::new()
    }

    /// Shared construction logic behind [`CameraRigBuilder::build`].
    fn from_builder(builder: CameraRigBuilder) -> Self {
        let mut settings = builder.settings;
        let pitch = clamp_between(
            settings.rotation.current,
            settings.rotation.pitch_min,
            settings.rotation.pitch_max,
        );
        settings.rotation.current = pitch;
        let zoom = clamp_between(
            settings.distance.current,
            settings.distance.min,
            settings.distance.max,
        );
        settings.distance.current = zoom;

        let rotation = Vec3::new(pitch, builder.yaw, 0.0);
        let pose = Pose::from_euler(builder.position, rotation);
        let target = TargetState::new(builder.position, rotation);

        let mut camera = ViewCamera::new(builder.viewport.x / builder.viewport.y);
        camera.orientation = pose.orientation;
        // Snap the offset so the first frame produces zero delta.
        camera.position = pose.position - camera.forward() * zoom;

        Self {
            settings,
            pose,
            target,
            camera,
            viewport: builder.viewport,
            ground_height: builder.ground_height,
            move_drag: DragState::Idle,
            rotate_drag: DragState::Idle,
            follow: None,
        }
    }

    /// Map one frame of input onto the target state.
    ///
    /// Handlers run in a fixed order (movement, rotation, distance, then
    /// the follow override) so later handlers in the same frame can
    /// override earlier ones.
    pub fn update(&mut self, input: &FrameInput<'_>, dt: f32) {
        self.update_movement(input, dt);
        self.update_rotation(input, dt);
        self.update_distance(input);
        self.apply_follow();
    }

    /// Adjust the viewport size (and the camera aspect ratio with it).
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport =
            Vec2::new(width.max(1) as f32, height.max(1) as f32);
        self.camera.aspect = self.viewport.x / self.viewport.y;
    }

    /// Move the ground reference plane drags are cast against.
    pub fn set_ground_height(&mut self, height: f32) {
        self.ground_height = height;
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// Smoothed rendered pose of the pivot.
    #[must_use]
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Desired end-state accumulated from input.
    #[must_use]
    pub fn target(&self) -> TargetState {
        self.target
    }

    /// The viewing camera a host renders from.
    #[must_use]
    pub fn camera(&self) -> &ViewCamera {
        &self.camera
    }

    /// Current zoom distance in world units.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.settings.distance.current
    }

    /// Viewport size in physical pixels.
    #[must_use]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Read-only access to the settings.
    #[must_use]
    pub fn settings(&self) -> &RigSettings {
        &self.settings
    }

    /// Mutable access to the settings for live reconfiguration.
    pub fn settings_mut(&mut self) -> &mut RigSettings {
        &mut self.settings
    }

    /// Whether a movement drag gesture is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.move_drag.active()
    }

    /// Whether a rotation drag gesture is in progress.
    #[must_use]
    pub fn is_rotating(&self) -> bool {
        self.rotate_drag.active()
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_clamps_initial_pitch_and_zoom() {
        let mut settings = RigSettings::default();
        settings.rotation.current = 200.0;
        settings.distance.current = 1.0;
        let rig = CameraRig::builder().with_settings(settings).build();

        assert_eq!(rig.settings().rotation.current, 80.0);
        assert_eq!(rig.target().rotation.x, 80.0);
        assert_eq!(rig.distance(), 10.0);
    }

    #[test]
    fn clamp_between_tolerates_an_inverted_range() {
        assert_eq!(clamp_between(5.0, 10.0, 0.0), 5.0);
        assert_eq!(clamp_between(-3.0, 10.0, 0.0), 0.0);
        assert_eq!(clamp_between(42.0, 10.0, 0.0), 10.0);
    }

    #[test]
    fn a_fresh_rig_is_already_settled() {
        let mut rig = CameraRig::builder()
            .with_position(Vec3::new(4.0, 0.0, -6.0))
            .with_yaw(30.0)
            .build();
        let pose = rig.pose();
        let camera_position = rig.camera().position;

        rig.settle(1.0 / 60.0);
        assert_eq!(rig.pose().position, pose.position);
        assert!(rig
            .camera()
            .position
            .abs_diff_eq(camera_position, 1e-4));
    }

    #[test]
    fn resize_guards_against_zero_dimensions() {
        let mut rig = CameraRig::default();
        rig.resize(0, 0);
        assert_eq!(rig.viewport(), Vec2::ONE);
        assert_eq!(rig.camera().aspect, 1.0);
    }

    #[test]
    fn default_matches_the_bare_builder() {
        let rig = CameraRig::default();
        assert_eq!(rig.distance(), 35.0);
        assert_eq!(rig.target().rotation.x, 35.0);
        assert_eq!(rig.viewport(), Vec2::new(1920.0, 1080.0));
    }
}
