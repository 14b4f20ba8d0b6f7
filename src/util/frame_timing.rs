//! Frame timing: per-frame deltas and a smoothed FPS readout.

use std::time::Instant;

/// Per-frame delta timing with a smoothed FPS readout
pub struct FrameClock {
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Create a clock whose first tick measures from now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
        }
    }

    /// Call once at the start of each frame. Returns the seconds
    /// elapsed since the previous tick, for scaling movement and
    /// animation, and folds the frame into the FPS average.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let frame_seconds = elapsed.as_secs_f32();
        self.absorb(frame_seconds);
        frame_seconds
    }

    /// Fold one frame duration into the smoothed FPS.
    fn absorb(&mut self, frame_seconds: f32) {
        if frame_seconds > 0.0 {
            let instant_fps = 1.0 / frame_seconds;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
