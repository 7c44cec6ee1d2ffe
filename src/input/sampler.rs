//! Accumulates raw input events into per-frame snapshots.
//!
//! The `InputSampler` owns all transient input state (pointer position,
//! button edges, scroll accumulation, held keys). Once per frame the
//! consumer calls [`InputSampler::sample`] to obtain a [`FrameInput`]
//! snapshot, which is what [`CameraRig::update`](crate::CameraRig::update)
//! consumes. Edge state (presses, releases, scroll) is drained by the
//! snapshot; level state (held buttons, held keys, pointer) persists.

use glam::Vec2;
use rustc_hash::FxHashSet;

use super::event::{InputEvent, MouseButton};

/// Index of a mouse button in the per-button state arrays.
const fn slot(button: MouseButton) -> usize {
    match button {
        MouseButton::Left => 0,
        MouseButton::Right => 1,
        MouseButton::Middle => 2,
    }
}

/// Accumulates raw input events between frames.
///
/// # Usage
///
/// ```
/// use perch::{InputEvent, InputSampler, MouseButton};
///
/// let mut input = InputSampler::new();
/// input.apply(InputEvent::MouseButton {
///     button: MouseButton::Right,
///     pressed: true,
/// });
/// input.key_event("KeyW", true);
///
/// let frame = input.sample();
/// assert!(frame.button_pressed(MouseButton::Right));
/// assert_eq!(frame.axis_forward(), 1.0);
/// ```
pub struct InputSampler {
    /// Latest cursor position in physical pixels.
    pointer: Vec2,
    /// Buttons currently held, indexed by [`slot`].
    held: [bool; 3],
    /// Buttons that went down since the last sample.
    pressed: [bool; 3],
    /// Buttons that went up since the last sample.
    released: [bool; 3],
    /// Scroll delta accumulated since the last sample.
    scroll: f32,
    /// Physical key strings currently held (`"KeyW"`, `"ArrowUp"`, ...).
    held_keys: FxHashSet<String>,
}

impl InputSampler {
    /// Create a sampler with no input recorded.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pointer: Vec2::ZERO,
            held: [false; 3],
            pressed: [false; 3],
            released: [false; 3],
            scroll: 0.0,
            held_keys: FxHashSet::default(),
        }
    }

    /// Record a pointer or scroll event.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.pointer = Vec2::new(x, y);
            }
            InputEvent::MouseButton { button, pressed } => {
                let slot = slot(button);
                if pressed && !self.held[slot] {
                    self.pressed[slot] = true;
                }
                if !pressed && self.held[slot] {
                    self.released[slot] = true;
                }
                self.held[slot] = pressed;
            }
            InputEvent::Scroll { delta } => {
                self.scroll += delta;
            }
        }
    }

    /// Record a key transition.
    ///
    /// Key strings use the `winit::keyboard::KeyCode` debug format:
    /// `"KeyW"`, `"ArrowUp"`, `"KeyQ"`, etc. Repeated presses of a held
    /// key are no-ops.
    pub fn key_event(&mut self, key: &str, pressed: bool) {
        if pressed {
            let _ = self.held_keys.insert(key.to_owned());
        } else {
            let _ = self.held_keys.remove(key);
        }
    }

    /// Take the per-frame snapshot, draining edge state.
    ///
    /// Presses, releases, and scroll recorded since the previous call are
    /// moved into the returned [`FrameInput`]; held buttons, held keys,
    /// and the pointer position carry over.
    pub fn sample(&mut self) -> FrameInput<'_> {
        FrameInput {
            pointer: self.pointer,
            held: self.held,
            pressed: std::mem::take(&mut self.pressed),
            released: std::mem::take(&mut self.released),
            scroll: std::mem::take(&mut self.scroll),
            keys: &self.held_keys,
        }
    }
}

impl Default for InputSampler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "winit")]
impl InputSampler {
    /// Feed a raw winit window event into the sampler.
    ///
    /// Returns `true` if the event was consumed (cursor, mouse button,
    /// scroll wheel, keyboard). Resize and redraw events are left for the
    /// embedding application.
    pub fn apply_window_event(
        &mut self,
        event: &winit::event::WindowEvent,
    ) -> bool {
        use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
        use winit::keyboard::PhysicalKey;

        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.apply(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
                true
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.apply(InputEvent::MouseButton {
                    button: (*button).into(),
                    pressed: *state == ElementState::Pressed,
                });
                true
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                self.apply(InputEvent::Scroll { delta: scroll });
                true
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return false;
                };
                let key_str = format!("{code:?}");
                self.key_event(&key_str, event.state == ElementState::Pressed);
                true
            }
            _ => false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// FrameInput
// ─────────────────────────────────────────────────────────────────────────────

/// One frame's worth of input, as consumed by
/// [`CameraRig::update`](crate::CameraRig::update).
pub struct FrameInput<'a> {
    /// Cursor position in physical pixels.
    pointer: Vec2,
    /// Held buttons, indexed by [`slot`].
    held: [bool; 3],
    /// Buttons that went down this frame.
    pressed: [bool; 3],
    /// Buttons that went up this frame.
    released: [bool; 3],
    /// Scroll delta for this frame.
    scroll: f32,
    /// Held key strings, borrowed from the sampler.
    keys: &'a FxHashSet<String>,
}

impl FrameInput<'_> {
    /// Cursor position in physical pixels (origin top-left, y down).
    #[must_use]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Whether `button` is currently held.
    #[must_use]
    pub fn button_held(&self, button: MouseButton) -> bool {
        self.held[slot(button)]
    }

    /// Whether `button` went down this frame.
    #[must_use]
    pub fn button_pressed(&self, button: MouseButton) -> bool {
        self.pressed[slot(button)]
    }

    /// Whether `button` went up this frame.
    #[must_use]
    pub fn button_released(&self, button: MouseButton) -> bool {
        self.released[slot(button)]
    }

    /// Scroll delta for this frame (positive = zoom in).
    #[must_use]
    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    /// Whether the physical key `key` is currently held.
    #[must_use]
    pub fn key_held(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Forward/backward axis: `+1` for W / up arrow, `-1` for S / down
    /// arrow, `0` when neither or both are held.
    #[must_use]
    pub fn axis_forward(&self) -> f32 {
        self.axis(["KeyW", "ArrowUp"], ["KeyS", "ArrowDown"])
    }

    /// Right/left axis: `+1` for D / right arrow, `-1` for A / left
    /// arrow, `0` when neither or both are held.
    #[must_use]
    pub fn axis_right(&self) -> f32 {
        self.axis(["KeyD", "ArrowRight"], ["KeyA", "ArrowLeft"])
    }

    fn axis(&self, positive: [&str; 2], negative: [&str; 2]) -> f32 {
        let mut value = 0.0;
        if positive.iter().any(|key| self.key_held(key)) {
            value += 1.0;
        }
        if negative.iter().any(|key| self.key_held(key)) {
            value -= 1.0;
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release_edges_last_one_sample() {
        let mut input = InputSampler::new();
        input.apply(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });

        let frame = input.sample();
        assert!(frame.button_pressed(MouseButton::Left));
        assert!(frame.button_held(MouseButton::Left));

        // Next frame: still held, but the press edge is gone.
        let frame = input.sample();
        assert!(!frame.button_pressed(MouseButton::Left));
        assert!(frame.button_held(MouseButton::Left));

        input.apply(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        });
        let frame = input.sample();
        assert!(frame.button_released(MouseButton::Left));
        assert!(!frame.button_held(MouseButton::Left));
    }

    #[test]
    fn duplicate_press_events_do_not_retrigger_the_edge() {
        let mut input = InputSampler::new();
        input.apply(InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        });
        let _ = input.sample();

        input.apply(InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        });
        let frame = input.sample();
        assert!(!frame.button_pressed(MouseButton::Right));
        assert!(frame.button_held(MouseButton::Right));
    }

    #[test]
    fn scroll_accumulates_then_drains() {
        let mut input = InputSampler::new();
        input.apply(InputEvent::Scroll { delta: 1.0 });
        input.apply(InputEvent::Scroll { delta: 0.5 });
        assert_eq!(input.sample().scroll(), 1.5);
        assert_eq!(input.sample().scroll(), 0.0);
    }

    #[test]
    fn opposing_keys_cancel_on_an_axis() {
        let mut input = InputSampler::new();
        input.key_event("KeyW", true);
        assert_eq!(input.sample().axis_forward(), 1.0);

        input.key_event("KeyS", true);
        assert_eq!(input.sample().axis_forward(), 0.0);

        input.key_event("KeyW", false);
        assert_eq!(input.sample().axis_forward(), -1.0);
    }

    #[test]
    fn arrow_keys_drive_the_same_axes() {
        let mut input = InputSampler::new();
        input.key_event("ArrowRight", true);
        assert_eq!(input.sample().axis_right(), 1.0);

        input.key_event("ArrowRight", false);
        input.key_event("ArrowLeft", true);
        assert_eq!(input.sample().axis_right(), -1.0);
    }

    #[test]
    fn pointer_position_persists_across_samples() {
        let mut input = InputSampler::new();
        input.apply(InputEvent::CursorMoved { x: 320.0, y: 240.0 });
        let _ = input.sample();
        let frame = input.sample();
        assert_eq!(frame.pointer(), Vec2::new(320.0, 240.0));
    }
}
