//! The enumerations of all events that come from the window and its input devices.

use crate::input::InputEvent;

/// The status of application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationEvent {
    /// The window has been resumed.
    Resumed,
    /// The window has been suspended.
    Suspended,
    /// The window has been closed.
    Closed,
    /// The window gained focus of user input.
    GainFocus,
    /// The window lost focus of user input.
    LostFocus,
}

/// Window related events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// The framebuffer size has changed, in pixels.
    Resized(u32, u32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Application(ApplicationEvent),
    Window(WindowEvent),
    InputDevice(InputEvent),
}
