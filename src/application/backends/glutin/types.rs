use winit::event::{ElementState, MouseScrollDelta, WindowEvent as WinitWindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::input::{InputEvent, Key, MouseButton};

use super::super::super::event::{ApplicationEvent, Event, WindowEvent};

// Pixel deltas from touchpads are scaled to roughly one wheel notch.
const PIXELS_PER_LINE: f32 = 20.0;

pub fn from_window_event(source: &WinitWindowEvent) -> Option<Event> {
    match *source {
        WinitWindowEvent::CloseRequested => Some(Event::Application(ApplicationEvent::Closed)),

        WinitWindowEvent::Focused(v) => {
            if v {
                Some(Event::Application(ApplicationEvent::GainFocus))
            } else {
                Some(Event::Application(ApplicationEvent::LostFocus))
            }
        }

        WinitWindowEvent::Resized(size) => Some(Event::Window(WindowEvent::Resized(
            size.width,
            size.height,
        ))),

        WinitWindowEvent::CursorMoved { position, .. } => {
            Some(Event::InputDevice(InputEvent::MouseMoved {
                position: (position.x as f32, position.y as f32),
            }))
        }

        WinitWindowEvent::MouseWheel { delta, .. } => match delta {
            MouseScrollDelta::LineDelta(x, y) => Some(Event::InputDevice(InputEvent::MouseWheel {
                delta: (x, y),
            })),
            MouseScrollDelta::PixelDelta(pos) => {
                Some(Event::InputDevice(InputEvent::MouseWheel {
                    delta: (
                        pos.x as f32 / PIXELS_PER_LINE,
                        pos.y as f32 / PIXELS_PER_LINE,
                    ),
                }))
            }
        },

        WinitWindowEvent::MouseInput { state, button, .. } => {
            let button = from_mouse_button(button);
            match state {
                ElementState::Pressed => Some(Event::InputDevice(InputEvent::MousePressed {
                    button,
                })),
                ElementState::Released => Some(Event::InputDevice(InputEvent::MouseReleased {
                    button,
                })),
            }
        }

        WinitWindowEvent::KeyboardInput { ref event, .. } => {
            let key = match event.physical_key {
                PhysicalKey::Code(code) => from_key_code(code)?,
                PhysicalKey::Unidentified(_) => return None,
            };

            match event.state {
                ElementState::Pressed => {
                    Some(Event::InputDevice(InputEvent::KeyboardPressed { key }))
                }
                ElementState::Released => {
                    Some(Event::InputDevice(InputEvent::KeyboardReleased { key }))
                }
            }
        }

        _ => None,
    }
}

fn from_mouse_button(button: winit::event::MouseButton) -> MouseButton {
    match button {
        winit::event::MouseButton::Left => MouseButton::Left,
        winit::event::MouseButton::Right => MouseButton::Right,
        winit::event::MouseButton::Middle => MouseButton::Middle,
        winit::event::MouseButton::Back => MouseButton::Other(3),
        winit::event::MouseButton::Forward => MouseButton::Other(4),
        winit::event::MouseButton::Other(v) => MouseButton::Other(v),
    }
}

fn from_key_code(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::Digit1 => Key::Key1,
        KeyCode::Digit2 => Key::Key2,
        KeyCode::Digit3 => Key::Key3,
        KeyCode::Digit4 => Key::Key4,
        KeyCode::Digit5 => Key::Key5,
        KeyCode::Digit6 => Key::Key6,
        KeyCode::Digit7 => Key::Key7,
        KeyCode::Digit8 => Key::Key8,
        KeyCode::Digit9 => Key::Key9,
        KeyCode::Digit0 => Key::Key0,
        KeyCode::KeyA => Key::A,
        KeyCode::KeyB => Key::B,
        KeyCode::KeyC => Key::C,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyF => Key::F,
        KeyCode::KeyG => Key::G,
        KeyCode::KeyH => Key::H,
        KeyCode::KeyI => Key::I,
        KeyCode::KeyJ => Key::J,
        KeyCode::KeyK => Key::K,
        KeyCode::KeyL => Key::L,
        KeyCode::KeyM => Key::M,
        KeyCode::KeyN => Key::N,
        KeyCode::KeyO => Key::O,
        KeyCode::KeyP => Key::P,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyR => Key::R,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyT => Key::T,
        KeyCode::KeyU => Key::U,
        KeyCode::KeyV => Key::V,
        KeyCode::KeyW => Key::W,
        KeyCode::KeyX => Key::X,
        KeyCode::KeyY => Key::Y,
        KeyCode::KeyZ => Key::Z,
        KeyCode::Escape => Key::Escape,
        KeyCode::F1 => Key::F1,
        KeyCode::F2 => Key::F2,
        KeyCode::F3 => Key::F3,
        KeyCode::F4 => Key::F4,
        KeyCode::F5 => Key::F5,
        KeyCode::F6 => Key::F6,
        KeyCode::F7 => Key::F7,
        KeyCode::F8 => Key::F8,
        KeyCode::F9 => Key::F9,
        KeyCode::F10 => Key::F10,
        KeyCode::F11 => Key::F11,
        KeyCode::F12 => Key::F12,
        KeyCode::ArrowLeft => Key::Left,
        KeyCode::ArrowUp => Key::Up,
        KeyCode::ArrowRight => Key::Right,
        KeyCode::ArrowDown => Key::Down,
        KeyCode::Backspace => Key::Back,
        KeyCode::Enter => Key::Return,
        KeyCode::Space => Key::Space,
        KeyCode::Tab => Key::Tab,
        KeyCode::AltLeft => Key::LAlt,
        KeyCode::ControlLeft => Key::LControl,
        KeyCode::ShiftLeft => Key::LShift,
        KeyCode::AltRight => Key::RAlt,
        KeyCode::ControlRight => Key::RControl,
        KeyCode::ShiftRight => Key::RShift,
        _ => return None,
    };

    Some(key)
}
