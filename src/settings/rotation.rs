//! Rotation (orbit yaw/pitch) settings.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::MouseBinding;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Rotation", inline)]
#[serde(default)]
/// Orbit rotation parameters.
pub struct RotationSettings {
    /// Mouse button that orbits the camera.
    #[schemars(title = "Orbit Button")]
    pub mouse_button: MouseBinding,
    /// Physical key that yaws left (`KeyCode` debug format).
    #[schemars(skip)]
    pub left_key: String,
    /// Physical key that yaws right.
    #[schemars(skip)]
    pub right_key: String,
    /// Drag rotation speed in degrees per viewport-sized drag.
    #[schemars(title = "Drag Speed", range(min = 1.0, max = 200.0), extend("step" = 1.0))]
    pub mouse_sensitivity: f32,
    /// Keyboard yaw speed in degrees per second.
    #[schemars(title = "Key Speed", range(min = 1.0, max = 200.0), extend("step" = 1.0))]
    pub key_sensitivity: f32,
    /// Smoothing rate for the orientation blend.
    #[schemars(title = "Smoothing", range(min = 1.0, max = 100.0), extend("step" = 1.0))]
    pub speed: f32,
    /// Lowest allowed pitch in degrees (flattest view).
    #[schemars(title = "Min Pitch", range(min = 0.0, max = 90.0), extend("step" = 1.0))]
    pub pitch_min: f32,
    /// Highest allowed pitch in degrees (most top-down view).
    #[schemars(title = "Max Pitch", range(min = 0.0, max = 90.0), extend("step" = 1.0))]
    pub pitch_max: f32,
    /// Live pitch in degrees; doubles as the initial pitch.
    #[schemars(skip)]
    pub current: f32,
}

impl Default for RotationSettings {
    fn default() -> Self {
        Self {
            mouse_button: MouseBinding::Middle,
            left_key: "KeyQ".to_owned(),
            right_key: "KeyE".to_owned(),
            mouse_sensitivity: 60.0,
            key_sensitivity: 50.0,
            speed: 40.0,
            pitch_min: 20.0,
            pitch_max: 80.0,
            current: 35.0,
        }
    }
}
