//! Sinusoidal swing animation for hanging scene objects.
//!
//! Drives a steady pendulum tilt from elapsed time alone, so the
//! motion is a pure function of the clock and never accumulates error
//! across frames.

use glam::Quat;

/// A steady angular oscillation about the Z axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swing {
    /// Peak deflection from rest, in radians.
    pub amplitude_rad: f32,
    /// Oscillation rate in radians per second of phase advance. A
    /// value of `2.0` completes a full swing cycle every `pi` seconds.
    pub angular_frequency: f32,
    /// Phase offset in radians, so multiple swinging objects don't
    /// move in lockstep.
    pub phase: f32,
}

impl Swing {
    /// Swing with the given peak angle, rate, and phase offset.
    #[must_use]
    pub fn new(amplitude_rad: f32, angular_frequency: f32, phase: f32) -> Self {
        Self {
            amplitude_rad,
            angular_frequency,
            phase,
        }
    }

    /// Deflection angle in radians at `t` seconds.
    #[inline]
    #[must_use]
    pub fn angle(&self, t: f32) -> f32 {
        self.amplitude_rad * (self.angular_frequency * t + self.phase).sin()
    }

    /// Rotation about the Z axis at `t` seconds, ready to compose into
    /// a transform.
    #[must_use]
    pub fn rotation(&self, t: f32) -> Quat {
        Quat::from_rotation_z(self.angle(t))
    }
}

impl Default for Swing {
    /// A lantern-like swing: 60 degree peak tilt, one cycle every
    /// `pi` seconds.
    fn default() -> Self {
        Self::new(60.0f32.to_radians(), 2.0, 0.0)
    }
}
