/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`ViewerCommand`](crate::engine::ViewerCommand)
/// values.
///
/// # Example
///
/// ```
/// use diorama::input::{InputEvent, InputProcessor, MouseButton};
///
/// let mut input = InputProcessor::new();
/// let _ = input.handle_event(&InputEvent::MouseButton {
///     button: MouseButton::Left,
///     pressed: true,
/// });
/// assert!(input.handle_event(&InputEvent::PointerMoved { dx: 4.0, dy: 0.0 }).is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The window was asked to close.
    Quit,
    /// A key went down.
    KeyDown {
        /// Physical key in `winit::keyboard::KeyCode` debug format.
        key: String,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Relative pointer motion.
    PointerMoved {
        /// Horizontal motion in pixels.
        dx: f32,
        /// Vertical motion in pixels.
        dy: f32,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount (positive = zoom in, negative = zoom out).
        delta: f32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}
