// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Smoothed top-down camera rig for RTS-style viewports.
//!
//! Perch maps pointer, keyboard, and scroll input onto a damped camera pose:
//! drag-to-pan anchored to a ground plane, orbit-style rotation with a
//! clamped pitch range, clamped zoom, screen-edge panning, and an optional
//! follow-target override. Input accumulates into a target state each
//! frame; a separate late pass eases the rendered pose toward it, so input
//! responsiveness stays decoupled from the visual settling rate.
//!
//! # Key entry points
//!
//! - [`rig::CameraRig`] - the camera rig driven by per-frame input
//! - [`input::InputSampler`] - raw event accumulation and frame snapshots
//! - [`settings::RigSettings`] - runtime configuration (movement, rotation,
//!   distance)
//! - [`oscillator::Oscillator`] - ping-pong mover for ambient scenery
//! - [`util::frame_timing::FrameTiming`] - frame clock producing the
//!   per-frame `dt`
//!
//! # Frame loop
//!
//! Sample input once per frame, run the input phase, then settle:
//!
//! ```
//! use perch::{CameraRig, InputSampler};
//!
//! let mut rig = CameraRig::builder().build();
//! let mut input = InputSampler::new();
//!
//! // each frame:
//! let frame = input.sample();
//! rig.update(&frame, 1.0 / 60.0);
//! rig.settle(1.0 / 60.0);
//! let view = rig.camera().view_matrix();
//! # let _ = view;
//! ```
//!
//! With the `winit` feature enabled, raw window events feed the sampler
//! directly via `InputSampler::apply_window_event`.

pub mod camera;
pub mod error;
pub mod input;
pub mod oscillator;
pub mod rig;
pub mod settings;
pub mod util;

pub use camera::ViewCamera;
pub use error::PerchError;
pub use input::{FrameInput, InputEvent, InputSampler, MouseButton};
pub use oscillator::Oscillator;
pub use rig::{CameraRig, CameraRigBuilder, FollowTarget, Pose, TargetState};
pub use settings::RigSettings;
