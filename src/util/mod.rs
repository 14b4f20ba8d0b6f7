//! Shared utilities for the viewer.
//!
//! Helpers for frame timing and time-driven swing animation.

pub mod frame_timing;
pub mod swing;

pub use frame_timing::FrameClock;
pub use swing::Swing;
