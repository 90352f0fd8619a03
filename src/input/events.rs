use super::keyboard::Key;
use super::mouse::MouseButton;

/// Input device event, supports mouse and keyboard only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The cursor has moved on the window.
    /// The parameter are the (x, y) coords in pixels relative to the top-left
    /// corner of the window.
    MouseMoved { position: (f32, f32) },
    /// Pressed event on mouse has been received.
    MousePressed { button: MouseButton },
    /// Released event from mouse has been received.
    MouseReleased { button: MouseButton },
    /// A mouse wheel movement or touchpad scroll occurred, in lines.
    MouseWheel { delta: (f32, f32) },

    /// Pressed event on keyboard has been received.
    KeyboardPressed { key: Key },
    /// Released event from keyboard has been received.
    KeyboardReleased { key: Key },
}
