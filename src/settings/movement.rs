//! Movement (ground-plane translation) settings.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::MouseBinding;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Movement", inline)]
#[serde(default)]
/// Ground-plane translation parameters.
pub struct MovementSettings {
    /// Mouse button that drags the camera across the ground plane.
    #[schemars(title = "Drag Button")]
    pub mouse_button: MouseBinding,
    /// Whether WASD / arrow-key movement is enabled.
    #[schemars(title = "Keyboard Movement")]
    pub keyboard: bool,
    /// Keyboard movement speed in world units per second.
    #[schemars(title = "Key Speed", range(min = 1.0, max = 500.0), extend("step" = 1.0))]
    pub key_sensitivity: f32,
    /// Smoothing rate for the positional blend.
    #[schemars(title = "Smoothing", range(min = 1.0, max = 5000.0), extend("step" = 10.0))]
    pub speed: f32,
    /// Screen-edge panning parameters.
    pub edge_pan: EdgePanSettings,
}

impl Default for MovementSettings {
    fn default() -> Self {
        Self {
            mouse_button: MouseBinding::Right,
            keyboard: true,
            key_sensitivity: 100.0,
            speed: 1000.0,
            edge_pan: EdgePanSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Edge Pan", inline)]
#[serde(default)]
/// Screen-edge panning parameters.
pub struct EdgePanSettings {
    /// Pan speed in world units per second.
    #[schemars(title = "Pan Speed", range(min = 1.0, max = 200.0), extend("step" = 1.0))]
    pub sensitivity: f32,
    /// Width of the trigger band as a fraction of each viewport axis.
    #[schemars(title = "Border", range(min = 0.0, max = 0.2), extend("step" = 0.005))]
    pub border: f32,
    /// Whether pointer-at-edge panning is active.
    #[schemars(title = "Enabled")]
    pub enabled: bool,
}

impl Default for EdgePanSettings {
    fn default() -> Self {
        Self {
            sensitivity: 50.0,
            border: 0.02,
            enabled: false,
        }
    }
}
