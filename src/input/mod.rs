//! Input handling: event types and the per-frame sampler that converts
//! raw window events into [`FrameInput`] snapshots for the rig.

/// Platform-agnostic input events.
pub mod event;
/// Accumulates events into per-frame snapshots.
pub mod sampler;

pub use event::{InputEvent, MouseButton};
pub use sampler::{FrameInput, InputSampler};
