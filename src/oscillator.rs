//! A self-contained ping-pong mover for ambient scenery.
//!
//! [`Oscillator`] shuttles a point along the X axis between two endpoints
//! computed from an origin and a half-width. Each step closes a fraction of
//! the remaining distance, so motion eases into the endpoints instead of
//! arriving at constant speed. It has no coupling to the camera rig, but it
//! implements [`FollowTarget`] so a rig can be told to chase one.
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use perch::Oscillator;
//!
//! let mut mover = Oscillator::new(Vec3::ZERO, 2.0, 10.0);
//! mover.update(1.0 / 60.0);
//! assert!(mover.position().x != 0.0);
//! ```

use glam::Vec3;

use crate::rig::FollowTarget;

/// Half-width of the band around an endpoint that counts as "reached".
///
/// The proportional step never lands exactly on an endpoint; the band is
/// what lets a leg terminate.
const REACH_TOLERANCE: f32 = 0.1;

/// Ping-pong mover: eases between `origin - span` and `origin + span`
/// along X, flipping direction whenever it closes to within the reach
/// tolerance of the active endpoint.
#[derive(Debug, Clone)]
pub struct Oscillator {
    origin: Vec3,
    span: f32,
    speed: f32,
    points: [Vec3; 2],
    leg: usize,
    position: Vec3,
}

impl Oscillator {
    /// Oscillator centered on `origin`, reaching `span` units out to each
    /// side, easing at `speed`. Starts at the origin, headed for the
    /// negative-X endpoint.
    #[must_use]
    pub fn new(origin: Vec3, span: f32, speed: f32) -> Self {
        Self {
            origin,
            span,
            speed,
            points: endpoints(origin, span),
            leg: 0,
            position: origin,
        }
    }

    /// Advance one frame.
    ///
    /// Within the tolerance band of the active endpoint the leg flips and
    /// the position holds for the frame; otherwise the position closes
    /// `distance * dt * speed` of the remaining gap.
    pub fn update(&mut self, dt: f32) {
        let distance = self.points[self.leg].x - self.position.x;
        if distance.abs() < REACH_TOLERANCE {
            self.leg ^= 1;
            return;
        }
        self.position.x += distance * dt * self.speed;
    }

    /// Current position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// The two turnaround points, negative-X endpoint first.
    #[must_use]
    pub fn points(&self) -> [Vec3; 2] {
        self.points
    }

    /// Index of the endpoint currently being approached.
    #[must_use]
    pub fn leg(&self) -> usize {
        self.leg
    }

    /// Recenter the run on a new origin, recomputing both endpoints.
    pub fn set_origin(&mut self, origin: Vec3) {
        self.origin = origin;
        self.points = endpoints(self.origin, self.span);
    }

    /// Change the half-width of the run, recomputing both endpoints.
    pub fn set_span(&mut self, span: f32) {
        self.span = span;
        self.points = endpoints(self.origin, self.span);
    }

    /// Change the easing speed.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }
}

impl Default for Oscillator {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 1.0, 10.0)
    }
}

impl FollowTarget for Oscillator {
    fn position(&self) -> Vec3 {
        self.position
    }
}

fn endpoints(origin: Vec3, span: f32) -> [Vec3; 2] {
    [origin - Vec3::X * span, origin + Vec3::X * span]
}
