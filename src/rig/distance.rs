//! Distance methods for `CameraRig`: scroll and key zoom funneled
//! through the range clamp.

use super::{clamp_between, CameraRig};
use crate::input::FrameInput;

impl CameraRig {
    /// Distance phase: scroll zoom, then key zoom.
    ///
    /// Both contributions pass through [`translate_distance`]
    /// (unconditionally, even at zero), so an out-of-range `current` is
    /// pulled back into the configured range every frame.
    ///
    /// [`translate_distance`]: Self::translate_distance
    pub(crate) fn update_distance(&mut self, input: &FrameInput<'_>) {
        let distance = &self.settings.distance;

        let scroll_taken = if distance.scroll {
            -input.scroll() * distance.mouse_sensitivity
        } else {
            0.0
        };

        // Key zoom steps a fixed fraction per frame; zoom-in wins when
        // both keys are held.
        let key_taken = if input.key_held(&distance.zoom_in_key) {
            -0.1 * distance.key_sensitivity
        } else if input.key_held(&distance.zoom_out_key) {
            0.1 * distance.key_sensitivity
        } else {
            0.0
        };

        self.translate_distance(scroll_taken);
        self.translate_distance(key_taken);
    }

    /// Adjust the zoom distance by `delta` world units, clamped into the
    /// configured range.
    ///
    /// The single source of truth for zoom: the clamp applies instantly,
    /// and only the camera offset derived from the distance is smoothed.
    pub fn translate_distance(&mut self, delta: f32) {
        let distance = &mut self.settings.distance;
        distance.current =
            clamp_between(distance.current + delta, distance.min, distance.max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputEvent, InputSampler};

    fn run_frame(rig: &mut CameraRig, input: &mut InputSampler) {
        let frame = input.sample();
        rig.update(&frame, 1.0 / 60.0);
    }

    #[test]
    fn scroll_zoom_saturates_at_both_ends_of_the_range() {
        let mut rig = CameraRig::default();
        let mut input = InputSampler::new();

        input.apply(InputEvent::Scroll { delta: 10.0 });
        run_frame(&mut rig, &mut input);
        assert_eq!(rig.distance(), 10.0);

        input.apply(InputEvent::Scroll { delta: -10.0 });
        run_frame(&mut rig, &mut input);
        assert_eq!(rig.distance(), 200.0);
    }

    #[test]
    fn scroll_can_be_disabled() {
        let mut rig = CameraRig::default();
        rig.settings_mut().distance.scroll = false;
        let mut input = InputSampler::new();

        input.apply(InputEvent::Scroll { delta: 10.0 });
        run_frame(&mut rig, &mut input);
        assert_eq!(rig.distance(), 35.0);
    }

    #[test]
    fn zoom_in_key_wins_when_both_are_held() {
        let mut rig = CameraRig::default();
        let mut input = InputSampler::new();

        input.key_event("KeyX", true);
        input.key_event("KeyZ", true);
        run_frame(&mut rig, &mut input);
        assert_eq!(rig.distance(), 34.0);

        input.key_event("KeyX", false);
        run_frame(&mut rig, &mut input);
        assert_eq!(rig.distance(), 35.0);
    }

    #[test]
    fn update_pulls_an_out_of_range_current_back() {
        let mut rig = CameraRig::default();
        rig.settings_mut().distance.current = 500.0;
        let mut input = InputSampler::new();

        run_frame(&mut rig, &mut input);
        assert_eq!(rig.distance(), 200.0);
    }

    #[test]
    fn translate_distance_clamps_direct_calls() {
        let mut rig = CameraRig::default();
        rig.translate_distance(-1000.0);
        assert_eq!(rig.distance(), 10.0);
        rig.translate_distance(5.0);
        assert_eq!(rig.distance(), 15.0);
    }
}
