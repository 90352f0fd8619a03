use approx::{assert_relative_eq, assert_ulps_eq};

use learngl::math::prelude::*;
use learngl::video::backends::headless::Command;
use learngl::video::{Device, Primitive, Texture, TextureHandle, TextureParams, UniformVariable};
use learngl_sprite::prelude::*;

fn sprite() -> TextureHandle {
    TextureHandle::new(1)
}

#[test]
fn rotation_pivots_around_center() {
    let mut object = GameObject::new(Vector2::new(0.0, 0.0), Vector2::new(10.0, 10.0), sprite());
    object.rotation = 180.0;

    let m = object.model_matrix();
    let corner = m.transform_point(Point3::new(0.0, 0.0, 0.0));
    assert_relative_eq!(corner.x, 10.0, epsilon = 1e-4);
    assert_relative_eq!(corner.y, 10.0, epsilon = 1e-4);

    let center = m.transform_point(Point3::new(0.5, 0.5, 0.0));
    assert_relative_eq!(center.x, 5.0, epsilon = 1e-4);
    assert_relative_eq!(center.y, 5.0, epsilon = 1e-4);
}

#[test]
fn unrotated_sprite_covers_its_rect() {
    let object = GameObject::new(Vector2::new(100.0, 50.0), Vector2::new(20.0, 10.0), sprite());
    let m = object.model_matrix();

    let tl = m.transform_point(Point3::new(0.0, 0.0, 0.0));
    let br = m.transform_point(Point3::new(1.0, 1.0, 0.0));
    assert_ulps_eq!(tl, Point3::new(100.0, 50.0, 0.0));
    assert_ulps_eq!(br, Point3::new(120.0, 60.0, 0.0));
}

#[test]
fn ball_reflects_at_left_edge() {
    let mut ball = BallObject::new(Vector2::new(2.0, 100.0), 5.0, Vector2::new(-50.0, 0.0), sprite());
    ball.stuck = false;

    let position = ball.move_by(0.1, 200.0);
    assert_eq!(position.x, 0.0);
    assert_eq!(ball.velocity.x, 50.0);
}

#[test]
fn ball_reflects_at_right_edge() {
    let mut ball = BallObject::new(Vector2::new(785.0, 100.0), 5.0, Vector2::new(100.0, 0.0), sprite());
    ball.stuck = false;

    let position = ball.move_by(0.1, 800.0);
    assert_eq!(position.x, 790.0);
    assert_eq!(ball.velocity.x, -100.0);
}

#[test]
fn ball_reflects_at_top_edge_only() {
    let mut ball = BallObject::new(Vector2::new(400.0, 3.0), 5.0, Vector2::new(0.0, -60.0), sprite());
    ball.stuck = false;

    let position = ball.move_by(0.1, 800.0);
    assert_eq!(position.y, 0.0);
    assert_eq!(ball.velocity.y, 60.0);

    // Nothing stops it at the bottom.
    ball.position = Vector2::new(400.0, 10_000.0);
    let position = ball.move_by(1.0, 800.0);
    assert_eq!(position.y, 10_060.0);
    assert_eq!(ball.velocity.y, 60.0);
}

#[test]
fn stuck_ball_stays() {
    let mut ball = BallObject::new(Vector2::new(10.0, 10.0), 5.0, Vector2::new(100.0, -350.0), sprite());
    assert!(ball.stuck);

    assert_eq!(ball.move_by(1.0, 800.0), Vector2::new(10.0, 10.0));
    assert_eq!(ball.velocity, Vector2::new(100.0, -350.0));

    ball.stuck = false;
    ball.move_by(0.01, 800.0);
    ball.reset(Vector2::new(1.0, 2.0), Vector2::new(3.0, 4.0));
    assert!(ball.stuck);
    assert_eq!(ball.position, Vector2::new(1.0, 2.0));
    assert_eq!(ball.size, Vector2::new(10.0, 10.0));
}

#[test]
fn draw_sprite_records_commands() {
    let (device, history) = Device::recording();
    let renderer = SpriteRenderer::with_default_shader(&device).unwrap();
    renderer.set_projection(800.0, 600.0).unwrap();

    let params = TextureParams::default();
    let texture = Texture::new(&device, params, Vector2::new(1, 1), &[255, 255, 255, 255]).unwrap();

    let mut object = GameObject::new(Vector2::new(10.0, 20.0), Vector2::new(30.0, 40.0), texture.handle());
    object.color = Vector3::new(1.0, 0.5, 0.25);

    history.clear();
    object.draw(&renderer).unwrap();

    let commands = history.commands();
    assert!(commands.contains(&Command::BindTexture(0, texture.handle())));
    assert!(commands.iter().any(|v| match *v {
        Command::SetUniform {
            ref name,
            variable: UniformVariable::Vector3f(color),
            ..
        } => name == "spriteColor" && color == [1.0, 0.5, 0.25],
        _ => false,
    }));

    match commands.last() {
        Some(&Command::Draw {
            primitive, first, count, ..
        }) => {
            assert_eq!(primitive, Primitive::Triangles);
            assert_eq!(first, 0);
            assert_eq!(count, 6);
        }
        other => panic!("expected a draw, got {:?}", other),
    }
}
