extern crate learngl;

use learngl::input::{InputEvent, InputState, Key, MouseButton};
use learngl::math::Vector2;

fn moved(x: f32, y: f32) -> InputEvent {
    InputEvent::MouseMoved { position: (x, y) }
}

#[test]
fn first_mouse_sample_has_no_delta() {
    let mut input = InputState::new();
    assert_eq!(input.mouse_position(), None);

    input.on_event(moved(400.0, 300.0));
    assert_eq!(input.mouse_delta(), Vector2::new(0.0, 0.0));
    assert_eq!(input.mouse_position(), Some(Vector2::new(400.0, 300.0)));

    input.on_event(moved(405.0, 290.0));
    input.on_event(moved(410.0, 295.0));
    assert_eq!(input.mouse_delta(), Vector2::new(10.0, 5.0));

    input.advance();
    assert_eq!(input.mouse_delta(), Vector2::new(0.0, 0.0));

    input.on_event(moved(400.0, 300.0));
    assert_eq!(input.mouse_delta(), Vector2::new(-10.0, -5.0));

    // After a reset the next sample primes again.
    input.reset();
    input.on_event(moved(0.0, 0.0));
    assert_eq!(input.mouse_delta(), Vector2::new(0.0, 0.0));
}

#[test]
fn keys() {
    let mut input = InputState::new();

    input.on_event(InputEvent::KeyboardPressed { key: Key::A });
    assert!(input.is_key_down(Key::A));
    assert!(input.is_key_press(Key::A));
    assert!(!input.is_key_down(Key::D));

    input.advance();
    assert!(input.is_key_down(Key::A));
    assert!(!input.is_key_press(Key::A));

    input.on_event(InputEvent::KeyboardReleased { key: Key::A });
    assert!(!input.is_key_down(Key::A));
    assert!(input.is_key_release(Key::A));
}

#[test]
fn buttons_and_wheel() {
    let mut input = InputState::new();

    input.on_event(InputEvent::MousePressed { button: MouseButton::Left });
    input.on_event(InputEvent::MouseWheel { delta: (0.0, 1.0) });
    input.on_event(InputEvent::MouseWheel { delta: (0.0, 2.0) });

    assert!(input.is_mouse_down(MouseButton::Left));
    assert!(input.is_mouse_press(MouseButton::Left));
    assert_eq!(input.scroll_delta(), Vector2::new(0.0, 3.0));

    input.advance();
    assert_eq!(input.scroll_delta(), Vector2::new(0.0, 0.0));

    input.on_event(InputEvent::MouseReleased { button: MouseButton::Left });
    assert!(!input.is_mouse_down(MouseButton::Left));
    assert!(input.is_mouse_release(MouseButton::Left));
}
