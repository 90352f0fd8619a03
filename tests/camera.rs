extern crate learngl;
#[macro_use]
extern crate approx;
extern crate rand;

use learngl::input::{InputEvent, InputState, Key};
use learngl::prelude::*;
use learngl::scene::CameraParams;

use rand::{Rng, SeedableRng, XorShiftRng};

fn assert_orthonormal(camera: &Camera) {
    let (f, r, u) = (camera.front(), camera.right(), camera.up());

    assert_relative_eq!(f.magnitude(), 1.0, epsilon = 1e-5);
    assert_relative_eq!(r.magnitude(), 1.0, epsilon = 1e-5);
    assert_relative_eq!(u.magnitude(), 1.0, epsilon = 1e-5);
    assert_relative_eq!(f.dot(r), 0.0, epsilon = 1e-5);
    assert_relative_eq!(f.dot(u), 0.0, epsilon = 1e-5);
    assert_relative_eq!(r.dot(u), 0.0, epsilon = 1e-5);
}

#[test]
fn default_looks_down_negative_z() {
    let camera = Camera::default();

    assert_relative_eq!(camera.front(), Vector3::new(0.0, 0.0, -1.0), epsilon = 1e-6);
    assert_relative_eq!(camera.right(), Vector3::new(1.0, 0.0, 0.0), epsilon = 1e-6);
    assert_relative_eq!(camera.up(), Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-6);
    assert_eq!(camera.zoom(), 45.0);
}

#[test]
fn stays_orthonormal() {
    let mut generator = XorShiftRng::from_seed([7; 16]);
    let mut camera = Camera::new(Point3::new(0.0, 0.0, 3.0), Vector3::unit_y(), -90.0, 0.0);

    for _ in 0..1000 {
        let dx = generator.gen_range(-200.0, 200.0);
        let dy = generator.gen_range(-200.0, 200.0);
        camera.process_mouse_movement(dx, dy, true);

        assert!(camera.pitch() >= -89.0 && camera.pitch() <= 89.0);
        assert_orthonormal(&camera);
    }
}

#[test]
fn orientation_sweep() {
    let mut camera = Camera::default();

    for yaw in (-360..=360).step_by(15) {
        for pitch in (-88..=88).step_by(8) {
            camera.set_orientation(yaw as f32, pitch as f32);
            assert_orthonormal(&camera);
        }
    }
}

#[test]
fn pitch_is_clamped_only_when_asked() {
    let mut camera = Camera::default();

    for _ in 0..10 {
        camera.process_mouse_movement(0.0, 1000.0, true);
        assert_eq!(camera.pitch(), 89.0);
    }
    assert!(camera.front().y > 0.99);

    camera.process_mouse_movement(0.0, -20_000.0, true);
    assert_eq!(camera.pitch(), -89.0);

    let mut camera = Camera::default();
    camera.process_mouse_movement(0.0, 1000.0, false);
    assert_relative_eq!(camera.pitch(), 100.0, epsilon = 1e-4);
}

#[test]
fn zoom_is_clamped() {
    let mut camera = Camera::default();

    camera.process_mouse_scroll(10.0);
    assert_eq!(camera.zoom(), 35.0);

    camera.process_mouse_scroll(100.0);
    assert_eq!(camera.zoom(), 1.0);

    camera.process_mouse_scroll(-100.0);
    assert_eq!(camera.zoom(), 45.0);

    let camera = Camera::with_params(CameraParams {
        zoom: 90.0,
        ..Default::default()
    });
    assert_eq!(camera.zoom(), 45.0);
}

#[test]
fn keyboard_moves_along_basis() {
    let mut camera = Camera::new(Point3::new(0.0, 0.0, 3.0), Vector3::unit_y(), -90.0, 0.0);

    camera.process_keyboard(Movement::Forward, 1.0);
    assert_relative_eq!(camera.position(), Point3::new(0.0, 0.0, 0.5), epsilon = 1e-5);

    camera.process_keyboard(Movement::Right, 2.0);
    assert_relative_eq!(camera.position(), Point3::new(5.0, 0.0, 0.5), epsilon = 1e-5);

    camera.process_keyboard(Movement::Left, 2.0);
    camera.process_keyboard(Movement::Backward, 1.0);
    assert_relative_eq!(camera.position(), Point3::new(0.0, 0.0, 3.0), epsilon = 1e-5);
}

#[test]
fn view_matrix() {
    let camera = Camera::new(Point3::new(0.0, 0.0, 3.0), Vector3::unit_y(), -90.0, 0.0);
    let view = camera.view_matrix();

    let expected = Matrix4::look_at_rh(
        camera.position(),
        camera.position() + camera.front(),
        camera.up(),
    );
    assert_relative_eq!(view, expected);
    assert_eq!(view, camera.view_matrix());

    // The eye sits at the origin of view space, looking down -z.
    let eye = view.transform_point(Point3::new(0.0, 0.0, 3.0));
    assert_relative_eq!(eye, Point3::new(0.0, 0.0, 0.0), epsilon = 1e-5);

    let ahead = view.transform_point(Point3::new(0.0, 0.0, 0.0));
    assert_relative_eq!(ahead, Point3::new(0.0, 0.0, -3.0), epsilon = 1e-5);
}

#[test]
fn view_matrix_after_turning() {
    let mut camera = Camera::new(Point3::new(1.0, 2.0, 3.0), Vector3::unit_y(), -90.0, 0.0);
    camera.process_mouse_movement(123.0, -45.0, true);
    camera.process_keyboard(Movement::Forward, 0.7);

    let expected = Matrix4::look_at_rh(
        camera.position(),
        camera.position() + camera.front(),
        camera.up(),
    );
    assert_relative_eq!(camera.view_matrix(), expected);
}

#[test]
fn projection_follows_zoom() {
    let mut camera = Camera::default();
    let wide = camera.projection_matrix(4.0 / 3.0, 0.1, 100.0);

    camera.process_mouse_scroll(20.0);
    let narrow = camera.projection_matrix(4.0 / 3.0, 0.1, 100.0);

    assert!(narrow[1][1] > wide[1][1]);
    assert_relative_eq!(wide[1][1], 1.0 / (22.5f32).to_radians().tan(), epsilon = 1e-5);
}

#[test]
fn process_input() {
    let mut input = InputState::new();
    let mut camera = Camera::new(Point3::new(0.0, 0.0, 3.0), Vector3::unit_y(), -90.0, 0.0);

    input.on_event(InputEvent::KeyboardPressed { key: Key::W });
    input.on_event(InputEvent::MouseMoved { position: (400.0, 300.0) });
    input.on_event(InputEvent::MouseMoved { position: (410.0, 280.0) });
    input.on_event(InputEvent::MouseWheel { delta: (0.0, 5.0) });

    camera.process_input(&input, 0.0);
    assert_relative_eq!(camera.yaw(), -89.0, epsilon = 1e-5);
    assert_relative_eq!(camera.pitch(), 2.0, epsilon = 1e-5);
    assert_eq!(camera.zoom(), 40.0);

    input.advance();
    let before = camera.position();
    camera.process_input(&input, 1.0);

    // W is still held, the deltas were consumed.
    assert_relative_eq!((camera.position() - before).magnitude(), 2.5, epsilon = 1e-5);
    assert_relative_eq!(camera.yaw(), -89.0, epsilon = 1e-5);
    assert_eq!(camera.zoom(), 40.0);
}
