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
// Complexity limits (thresholds in clippy.toml)
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

//! Scene-side toolkit for forward renderers with alpha blending.
//!
//! Lagoon owns the CPU half of a small 3D viewer: it orders translucent
//! draws back-to-front, drives a free-flight camera, describes light
//! rigs, routes raw input to viewer commands, and persists viewer state
//! between runs. GPU submission, windowing, and asset loading stay with
//! the caller.
//!
//! # Key entry points
//!
//! - [`transparency::back_to_front`] - painter's-algorithm ordering of
//!   translucent instances
//! - [`scene::Scene`] - placed instances and per-frame draw list
//!   assembly
//! - [`camera::FlyCamera`] / [`camera::CameraController`] - free-flight
//!   viewing
//! - [`lighting::LightRig`] - directional, point, and spot light
//!   parameters
//! - [`input::InputProcessor`] - raw events in, viewer commands out
//! - [`state::ViewerState`] - TOML-persisted toggles, camera pose, and
//!   bindings
//!
//! # Frame flow
//!
//! Each frame the caller ticks [`util::FrameClock`] for a delta, steps
//! the camera for every direction in
//! [`input::InputProcessor::held_directions`], applies any commands the
//! processor produced from window events, and asks the scene for
//! [`scene::Scene::frame_draws`]. The opaque list renders first in
//! insertion order; the translucent list renders after it, farthest
//! instance first, so blending composites correctly without
//! order-independent transparency.

pub mod camera;
pub mod error;
pub mod input;
pub mod lighting;
pub mod scene;
pub mod state;
pub mod transparency;
pub mod util;
