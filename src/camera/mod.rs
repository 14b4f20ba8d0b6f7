//! Camera system for free-flight scene viewing.
//!
//! Provides a fly camera driven by yaw/pitch mouse-look, frame-time
//! scaled movement, and scroll-wheel zoom.

/// Movement, look, and zoom application on top of the core camera.
pub mod controller;
/// Core camera struct and matrix construction.
pub mod core;

pub use controller::{CameraController, MoveDirection, SpeedTier};
pub use core::FlyCamera;
