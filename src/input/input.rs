use crate::math::prelude::Vector2;

use super::events::InputEvent;
use super::keyboard::{Key, Keyboard};
use super::mouse::{Mouse, MouseButton};

/// The per-frame snapshot of keyboard and mouse.
///
/// Events are fed with `on_event` as they arrive; the accumulated deltas
/// describe everything that happened since the last `advance`.
#[derive(Default)]
pub struct InputState {
    keyboard: Keyboard,
    mouse: Mouse,
}

impl InputState {
    pub fn new() -> Self {
        InputState::default()
    }

    /// Reset input to initial states.
    pub fn reset(&mut self) {
        self.keyboard.reset();
        self.mouse.reset();
    }

    /// Ends a frame: clears presses, releases and accumulated deltas. Held
    /// keys and buttons stay held.
    pub fn advance(&mut self) {
        self.keyboard.advance();
        self.mouse.advance();
    }

    pub fn on_event(&mut self, v: InputEvent) {
        match v {
            InputEvent::MouseMoved { position } => self.mouse.on_move(position),
            InputEvent::MousePressed { button } => self.mouse.on_button_pressed(button),
            InputEvent::MouseReleased { button } => self.mouse.on_button_released(button),
            InputEvent::MouseWheel { delta } => self.mouse.on_wheel_scroll(delta),
            InputEvent::KeyboardPressed { key } => self.keyboard.on_key_pressed(key),
            InputEvent::KeyboardReleased { key } => self.keyboard.on_key_released(key),
        }
    }

    /// Checks if a key is currently held down.
    #[inline]
    pub fn is_key_down(&self, key: Key) -> bool {
        self.keyboard.is_key_down(key)
    }

    /// Checks if a key has been pressed down during the last frame.
    #[inline]
    pub fn is_key_press(&self, key: Key) -> bool {
        self.keyboard.is_key_press(key)
    }

    /// Checks if a key has been released during the last frame.
    #[inline]
    pub fn is_key_release(&self, key: Key) -> bool {
        self.keyboard.is_key_release(key)
    }

    #[inline]
    pub fn is_mouse_down(&self, button: MouseButton) -> bool {
        self.mouse.is_button_down(button)
    }

    #[inline]
    pub fn is_mouse_press(&self, button: MouseButton) -> bool {
        self.mouse.is_button_press(button)
    }

    #[inline]
    pub fn is_mouse_release(&self, button: MouseButton) -> bool {
        self.mouse.is_button_release(button)
    }

    /// The last cursor position, `None` until the first sample arrives.
    #[inline]
    pub fn mouse_position(&self) -> Option<Vector2<f32>> {
        self.mouse.position()
    }

    /// Cursor movement of this frame, with y pointing up.
    #[inline]
    pub fn mouse_delta(&self) -> Vector2<f32> {
        self.mouse.movement()
    }

    /// Wheel movement of this frame, in lines.
    #[inline]
    pub fn scroll_delta(&self) -> Vector2<f32> {
        self.mouse.scroll()
    }
}
