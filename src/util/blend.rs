//! Exponential-decay blending toward a target value.
//!
//! Each step moves a current value toward its target by the fraction
//! `rate * dt`, clamped to `[0, 1]`. With a constant rate this approaches
//! the target exponentially: fast while far away, settling asymptotically
//! as it closes in, and independent of how the elapsed time is sliced into
//! frames for small steps.

use glam::{Quat, Vec3};

/// Blend a scalar toward `target` by `rate * dt`.
///
/// `rate * dt <= 0` returns `current` unchanged; `rate * dt >= 1` snaps to
/// `target`.
#[inline]
#[must_use]
pub fn blend_f32(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    let t = factor(rate, dt);
    if t <= 0.0 {
        return current;
    }
    if t >= 1.0 {
        return target;
    }
    current + (target - current) * t
}

/// Blend a vector toward `target` by `rate * dt`, component-wise.
#[inline]
#[must_use]
pub fn blend_vec3(current: Vec3, target: Vec3, rate: f32, dt: f32) -> Vec3 {
    let t = factor(rate, dt);
    if t <= 0.0 {
        return current;
    }
    if t >= 1.0 {
        return target;
    }
    current + (target - current) * t
}

/// Blend an orientation toward `target` by `rate * dt`.
///
/// Normalized lerp on the hemisphere nearest `current`, so the rotation
/// always takes the short way around.
#[inline]
#[must_use]
pub fn blend_quat(current: Quat, target: Quat, rate: f32, dt: f32) -> Quat {
    let t = factor(rate, dt);
    if t <= 0.0 {
        return current;
    }
    if t >= 1.0 {
        return target;
    }
    let target = if current.dot(target) < 0.0 {
        -target
    } else {
        target
    };
    current.lerp(target, t)
}

/// Blend fraction for one step: `rate * dt` clamped to `[0, 1]`.
#[inline]
fn factor(rate: f32, dt: f32) -> f32 {
    (rate * dt).clamp(0.0, 1.0)
}
