/// A discrete viewer operation produced by the input layer.
///
/// Commands carry everything the caller needs to apply them to its
/// camera, light rig, and persisted state. Continuous movement is not
/// a command; callers poll
/// [`InputProcessor::held_directions`](super::InputProcessor::held_directions)
/// once per frame instead, so held keys scale with frame time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerCommand {
    /// Turn the camera. Positive `dx` yaws right, positive `dy`
    /// pitches up.
    Look {
        /// Horizontal cursor travel since the last sample.
        dx: f32,
        /// Vertical cursor travel since the last sample, already
        /// flipped so that moving the mouse up is positive.
        dy: f32,
    },
    /// Narrow or widen the field of view.
    Zoom {
        /// Scroll amount (positive = zoom in).
        delta: f32,
    },
    /// Show or hide the debug overlay. Callers should pause mouse-look
    /// while the overlay is open and release the cursor.
    ToggleOverlay,
    /// Mute or unmute the spotlight rig.
    ToggleSpotlights,
    /// Shut the viewer down.
    Quit,
}
