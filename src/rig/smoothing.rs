//! Smoothing methods for `CameraRig`: per-frame settling of the pose and
//! the viewing camera toward the target state.

use super::pose::orientation_from_euler;
use super::CameraRig;
use crate::util::blend::{blend_quat, blend_vec3};

impl CameraRig {
    /// Ease the rig toward its target state and re-seat the camera.
    ///
    /// Call once per frame, strictly after [`update`]. Each property blends
    /// by its own configured speed: the pivot position by the movement
    /// speed, the orientation by the rotation speed, and the camera's
    /// standoff behind the pivot by the distance speed. The orientation
    /// transfers to the camera rigidly so the view never lags the pivot's
    /// turn, while the positional offset trails it.
    ///
    /// A zero `dt` leaves every property bit-for-bit unchanged.
    ///
    /// [`update`]: Self::update
    pub fn settle(&mut self, dt: f32) {
        self.pose.position = blend_vec3(
            self.pose.position,
            self.target.position,
            self.settings.movement.speed,
            dt,
        );

        let desired = orientation_from_euler(self.target.rotation);
        self.pose.orientation = blend_quat(
            self.pose.orientation,
            desired,
            self.settings.rotation.speed,
            dt,
        );

        // The camera inherits the pivot orientation outright; only its
        // position eases toward the standoff point.
        self.camera.orientation = self.pose.orientation;
        let standoff = self.pose.position
            - self.camera.forward() * self.settings.distance.current;
        self.camera.position = blend_vec3(
            self.camera.position,
            standoff,
            self.settings.distance.speed,
            dt,
        );
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::input::InputSampler;

    #[test]
    fn zero_dt_leaves_the_rig_untouched() {
        let mut rig = CameraRig::default();
        rig.translate_position(Vec3::new(10.0, 0.0, -4.0));

        let pose = rig.pose();
        let camera_position = rig.camera().position;
        rig.settle(0.0);

        assert_eq!(rig.pose(), pose);
        assert_eq!(rig.camera().position, camera_position);
    }

    #[test]
    fn pose_converges_monotonically_on_the_target() {
        let mut rig = CameraRig::default();
        rig.settings_mut().movement.speed = 5.0;
        rig.translate_position(Vec3::new(10.0, 0.0, 0.0));

        let target = rig.target().position;
        let mut last = rig.pose().position.distance(target);
        for _ in 0..240 {
            rig.settle(1.0 / 120.0);
            let dist = rig.pose().position.distance(target);
            assert!(dist <= last, "distance grew from {last} to {dist}");
            last = dist;
        }
        assert!(last < 0.1);
    }

    #[test]
    fn default_movement_speed_snaps_within_one_frame() {
        let mut rig = CameraRig::default();
        rig.translate_position(Vec3::new(3.0, 0.0, 7.0));

        rig.settle(1.0 / 60.0);
        assert_eq!(rig.pose().position, rig.target().position);
    }

    #[test]
    fn camera_hangs_behind_the_pivot_at_the_zoom_distance() {
        let mut rig = CameraRig::default();
        rig.translate_position(Vec3::new(10.0, 0.0, -6.0));

        for _ in 0..60 {
            rig.settle(1.0 / 60.0);
        }

        let expected = rig.pose().position
            - rig.camera().forward() * rig.distance();
        assert!(rig.camera().position.distance(expected) < 1e-2);
    }

    #[test]
    fn orientation_tracks_the_target_yaw() {
        let mut rig = CameraRig::default();
        let mut input = InputSampler::new();

        // One long frame of the right-yaw key carries the target to 90
        // degrees; a saturated settle step then snaps onto it.
        input.key_event("KeyE", true);
        let frame = input.sample();
        rig.update(&frame, 1.8);
        rig.settle(1.0);

        let pitch = 35f32.to_radians();
        let expected = Vec3::new(-pitch.cos(), -pitch.sin(), 0.0);
        assert!(rig.camera().forward().abs_diff_eq(expected, 1e-4));
    }
}
