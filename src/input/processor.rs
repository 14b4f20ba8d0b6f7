//! Converts raw platform events into viewer commands.
//!
//! The `InputProcessor` owns all transient input state (cursor
//! tracking, held movement keys, modifier keys) and the key-binding
//! map. It is the only thing that sits between raw window events and
//! the caller's command handling.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::command::ViewerCommand;
use super::event::InputEvent;
use crate::camera::{MoveDirection, SpeedTier};

/// Bindable, parameterless input actions.
///
/// Movement actions are polled while held via
/// [`InputProcessor::held_directions`]; the rest fire a
/// [`ViewerCommand`] once per key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Step along the view direction while held.
    MoveForward,
    /// Step against the view direction while held.
    MoveBackward,
    /// Strafe left while held.
    MoveLeft,
    /// Strafe right while held.
    MoveRight,
    /// Show or hide the debug overlay.
    ToggleOverlay,
    /// Mute or unmute the spotlight rig.
    ToggleSpotlights,
    /// Shut the viewer down.
    Quit,
}

impl Action {
    /// Whether the action is continuous movement rather than a
    /// discrete command.
    #[must_use]
    pub fn is_movement(self) -> bool {
        matches!(
            self,
            Self::MoveForward
                | Self::MoveBackward
                | Self::MoveLeft
                | Self::MoveRight
        )
    }

    /// Convert a discrete action to its command. Movement actions have
    /// no command form.
    fn to_command(self) -> Option<ViewerCommand> {
        match self {
            Self::ToggleOverlay => Some(ViewerCommand::ToggleOverlay),
            Self::ToggleSpotlights => Some(ViewerCommand::ToggleSpotlights),
            Self::Quit => Some(ViewerCommand::Quit),
            Self::MoveForward
            | Self::MoveBackward
            | Self::MoveLeft
            | Self::MoveRight => None,
        }
    }
}

/// Maps physical key strings to [`Action`] values.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"KeyW"`, `"F1"`, `"Escape"`, etc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct KeyBindings {
    /// Forward map: key string → action.
    bindings: HashMap<String, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("KeyW".into(), Action::MoveForward),
            ("KeyS".into(), Action::MoveBackward),
            ("KeyA".into(), Action::MoveLeft),
            ("KeyD".into(), Action::MoveRight),
            ("F1".into(), Action::ToggleOverlay),
            ("KeyF".into(), Action::ToggleSpotlights),
            ("Escape".into(), Action::Quit),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the action for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<Action> {
        self.bindings.get(key).copied()
    }

    /// Bind a key to an action, replacing any previous binding for
    /// that key. Several keys may map to the same action.
    pub fn bind(&mut self, key: &str, action: Action) {
        let _ = self.bindings.insert(key.to_owned(), action);
    }

    /// Remove the binding for a key, if any.
    pub fn unbind(&mut self, key: &str) {
        let _ = self.bindings.remove(key);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// InputProcessor
// ─────────────────────────────────────────────────────────────────────────────

/// Converts raw window events into [`ViewerCommand`]s.
///
/// Owns all transient input state (last cursor sample, held movement
/// keys, modifier keys) and the keyboard binding map.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(event) {
///     apply(cmd);
/// }
///
/// // Once per frame:
/// let dt = clock.tick();
/// controller.set_tier(input_processor.speed_tier());
/// for direction in input_processor.held_directions() {
///     controller.step(&mut camera, direction, dt);
/// }
/// ```
pub struct InputProcessor {
    /// Last cursor sample, or `None` before the first one. The first
    /// sample after (re)enabling mouse-look only establishes a
    /// reference point, so the camera never jumps on capture.
    last_cursor: Option<(f32, f32)>,
    /// Movement actions currently held down.
    held: HashSet<Action>,
    /// Whether the shift modifier is currently held.
    shift_pressed: bool,
    /// Whether the control modifier is currently held.
    ctrl_pressed: bool,
    /// Whether cursor motion drives the camera. Off while the overlay
    /// has the cursor.
    mouse_look: bool,
    /// Key string → action mapping.
    key_bindings: KeyBindings,
}

impl InputProcessor {
    /// Create a new processor with default key bindings and mouse-look
    /// enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_cursor: None,
            held: HashSet::new(),
            shift_pressed: false,
            ctrl_pressed: false,
            mouse_look: true,
            key_bindings: KeyBindings::default(),
        }
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Whether the shift modifier is held.
    #[must_use]
    pub fn shift_pressed(&self) -> bool {
        self.shift_pressed
    }

    /// Whether the control modifier is held.
    #[must_use]
    pub fn ctrl_pressed(&self) -> bool {
        self.ctrl_pressed
    }

    /// Whether cursor motion currently drives the camera.
    #[must_use]
    pub fn mouse_look(&self) -> bool {
        self.mouse_look
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.key_bindings
    }

    /// Enable or disable mouse-look. Re-enabling forgets the last
    /// cursor sample, so the pent-up travel from an open overlay never
    /// lands on the camera as one giant delta.
    pub fn set_mouse_look(&mut self, enabled: bool) {
        if enabled && !self.mouse_look {
            self.last_cursor = None;
        }
        self.mouse_look = enabled;
    }

    /// Movement speed tier for the currently held modifiers. Shift
    /// wins when both modifiers are down.
    #[must_use]
    pub fn speed_tier(&self) -> SpeedTier {
        if self.shift_pressed {
            SpeedTier::Fast
        } else if self.ctrl_pressed {
            SpeedTier::Slow
        } else {
            SpeedTier::Normal
        }
    }

    /// Movement directions held this frame, in a fixed order so frames
    /// with the same keys down produce the same steps.
    #[must_use]
    pub fn held_directions(&self) -> Vec<MoveDirection> {
        const ORDER: [(Action, MoveDirection); 4] = [
            (Action::MoveForward, MoveDirection::Forward),
            (Action::MoveBackward, MoveDirection::Backward),
            (Action::MoveLeft, MoveDirection::Left),
            (Action::MoveRight, MoveDirection::Right),
        ];
        ORDER
            .iter()
            .filter(|(action, _)| self.held.contains(action))
            .map(|&(_, direction)| direction)
            .collect()
    }

    /// Process a key press or release and return zero or one commands.
    ///
    /// Movement keys update the held set and never produce a command;
    /// discrete actions fire once on press. Unbound keys are ignored.
    pub fn handle_key(
        &mut self,
        key: &str,
        pressed: bool,
    ) -> Option<ViewerCommand> {
        let action = self.key_bindings.lookup(key)?;
        if action.is_movement() {
            if pressed {
                let _ = self.held.insert(action);
            } else {
                let _ = self.held.remove(&action);
            }
            return None;
        }
        if pressed {
            action.to_command()
        } else {
            None
        }
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<ViewerCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::Scroll { delta } => Some(ViewerCommand::Zoom { delta }),
            InputEvent::ModifiersChanged { shift, ctrl } => {
                self.shift_pressed = shift;
                self.ctrl_pressed = ctrl;
                None
            }
        }
    }

    /// Cursor moved. Tracks the sample unconditionally so mouse-look
    /// resumes from the latest position, and produces a look command
    /// only while mouse-look is on.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<ViewerCommand> {
        let previous = self.last_cursor.replace((x, y))?;
        if !self.mouse_look {
            return None;
        }
        // Screen y grows downward; looking up is positive pitch.
        let dx = x - previous.0;
        let dy = previous.1 - y;
        Some(ViewerCommand::Look { dx, dy })
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}
