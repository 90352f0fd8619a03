//! Explicit input state, fed from window events once per frame.
//!
//! # Keyboard Inputs
//!
//! ```rust,ignore
//! // Checks if a key is currently held down.
//! input.is_key_down(Key::W);
//!
//! // Checks if a key has been pressed down during the last frame.
//! input.is_key_press(Key::Escape);
//! ```
//!
//! Key codes are virtual keycodes of physical keys, they don't necessarily
//! represent what's actually printed on the key cap.
//!
//! # Mouse Inputs
//!
//! ```rust,ignore
//! // Gets cursor movement since last frame, y pointing up.
//! input.mouse_delta();
//!
//! // Gets wheel movement since last frame.
//! input.scroll_delta();
//! ```
//!
//! The very first cursor sample produces no movement, it only records where
//! the cursor entered.

mod events;
mod input;
mod keyboard;
mod mouse;

pub use self::events::InputEvent;
pub use self::input::InputState;
pub use self::keyboard::Key;
pub use self::mouse::MouseButton;

pub mod prelude {
    pub use super::{InputEvent, InputState, Key, MouseButton};
}
