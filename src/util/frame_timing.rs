//! Frame clock producing the per-frame time step.

use web_time::Instant;

/// Frame timing with elapsed-seconds measurement and FPS calculation.
pub struct FrameTiming {
    /// Last frame timestamp.
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average.
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0).
    smoothing: f32,
}

impl FrameTiming {
    /// Create a frame clock starting now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,
        }
    }

    /// Seconds elapsed since the previous tick (or since construction).
    ///
    /// Call once at the top of each frame; the return value is the `dt`
    /// consumed by [`CameraRig::update`](crate::CameraRig::update) and
    /// [`CameraRig::settle`](crate::CameraRig::settle).
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let dt = elapsed.as_secs_f32();
        if dt > 0.0 {
            let instant_fps = 1.0 / dt;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        dt
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_reports_non_negative_dt() {
        let mut timing = FrameTiming::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let dt = timing.tick();
        assert!(dt > 0.0);
        assert!(timing.fps() > 0.0);
    }
}
