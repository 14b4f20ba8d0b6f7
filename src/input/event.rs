/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor)
/// which converts them into [`ViewerCommand`](super::ViewerCommand)
/// values. Key presses go through
/// [`InputProcessor::handle_key`](super::InputProcessor::handle_key)
/// instead, since key identifiers are strings rather than `Copy` data.
///
/// # Example
///
/// ```ignore
/// let cmd = input_processor
///     .handle_event(InputEvent::CursorMoved { x: 100.0, y: 200.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels, growing downward.
        y: f32,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount (positive = zoom in, negative = zoom out).
        delta: f32,
    },
    /// Modifier key state changed.
    ModifiersChanged {
        /// Whether the shift key is held.
        shift: bool,
        /// Whether the control key is held.
        ctrl: bool,
    },
}
