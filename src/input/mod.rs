//! Input handling: event types, the command vocabulary, and the input
//! processor that converts raw window events into viewer commands.

/// Commands produced by input handling.
pub mod command;
/// Platform-agnostic input events.
pub mod event;
/// Converts raw events into viewer commands.
pub mod processor;

pub use command::ViewerCommand;
pub use event::InputEvent;
pub use processor::{Action, InputProcessor, KeyBindings};
