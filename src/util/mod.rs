//! Shared utilities for the camera rig.
//!
//! Helpers for exponential-decay blending, ray/plane intersection, and
//! frame timing.

pub mod blend;
pub mod frame_timing;
pub mod plane;
