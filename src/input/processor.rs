//! Converts raw platform events into viewer commands.
//!
//! The `InputProcessor` owns all transient input state (drag tracking and
//! the last cursor position) and the key-binding map. It is the only thing
//! that sits between raw window events and
//! [`SceneComposer::execute`](crate::engine::SceneComposer::execute).

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use crate::engine::ViewerCommand;
use crate::options::KeybindingOptions;

/// Converts raw window events into [`ViewerCommand`]s.
///
/// # Usage
///
/// ```ignore
/// for event in events.drain(..) {
///     if let Some(cmd) = input.handle_event(&event) {
///         composer.execute(cmd);
///     }
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Whether the primary mouse button is currently held.
    mouse_pressed: bool,
    /// Last absolute cursor position, if one has been seen.
    last_cursor: Option<Vec2>,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Whether the primary mouse button is pressed.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.mouse_pressed
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<ViewerCommand> {
        self.key_bindings.lookup(key).map(ViewerCommand::from)
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<ViewerCommand> {
        match event {
            InputEvent::Quit => Some(ViewerCommand::Quit),
            InputEvent::KeyDown { key } => self.handle_key_press(key),
            InputEvent::MouseButton { button, pressed } => {
                if *button == MouseButton::Left {
                    self.mouse_pressed = *pressed;
                }
                None
            }
            InputEvent::CursorMoved { x, y } => {
                let pos = Vec2::new(*x, *y);
                let delta = self.last_cursor.map(|last| pos - last);
                self.last_cursor = Some(pos);
                delta.and_then(|d| self.drag(d))
            }
            InputEvent::PointerMoved { dx, dy } => self.drag(Vec2::new(*dx, *dy)),
            InputEvent::Scroll { delta } => {
                Some(ViewerCommand::Zoom { delta: *delta })
            }
        }
    }

    /// Rotate only while the primary button is held.
    fn drag(&self, delta: Vec2) -> Option<ViewerCommand> {
        (self.mouse_pressed && delta != Vec2::ZERO)
            .then_some(ViewerCommand::RotateCamera { delta })
    }
}
