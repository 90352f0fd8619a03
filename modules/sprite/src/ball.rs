use std::ops::{Deref, DerefMut};

use learngl::math::prelude::*;
use learngl::video::TextureHandle;

use super::object::GameObject;

/// A `GameObject` with a radius, that can be stuck to the paddle and
/// bounces off the left, right and top edges of the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallObject {
    pub object: GameObject,
    pub radius: f32,
    /// A stuck ball ignores its velocity.
    pub stuck: bool,
}

impl BallObject {
    /// Creates a stuck ball of size `2r x 2r` with its top-left at `position`.
    pub fn new(
        position: Vector2<f32>,
        radius: f32,
        velocity: Vector2<f32>,
        sprite: TextureHandle,
    ) -> Self {
        let mut object = GameObject::new(position, Vector2::new(radius * 2.0, radius * 2.0), sprite);
        object.velocity = velocity;

        BallObject {
            object,
            radius,
            stuck: true,
        }
    }

    /// Moves the ball by `velocity * dt` and keeps it inside the screen,
    /// reflecting the velocity at every edge it reaches except the bottom.
    /// Returns the new position.
    pub fn move_by(&mut self, dt: f32, window_width: f32) -> Vector2<f32> {
        if self.stuck {
            return self.object.position;
        }

        let object = &mut self.object;
        object.position += object.velocity * dt;

        if object.position.x <= 0.0 {
            object.velocity.x = -object.velocity.x;
            object.position.x = 0.0;
        } else if object.position.x + object.size.x >= window_width {
            object.velocity.x = -object.velocity.x;
            object.position.x = window_width - object.size.x;
        }

        if object.position.y <= 0.0 {
            object.velocity.y = -object.velocity.y;
            object.position.y = 0.0;
        }

        object.position
    }

    /// Puts the ball back at `position` with `velocity` and sticks it.
    pub fn reset(&mut self, position: Vector2<f32>, velocity: Vector2<f32>) {
        self.object.position = position;
        self.object.velocity = velocity;
        self.stuck = true;
        debug!("Ball reset to ({}, {}).", position.x, position.y);
    }
}

impl Deref for BallObject {
    type Target = GameObject;

    fn deref(&self) -> &GameObject {
        &self.object
    }
}

impl DerefMut for BallObject {
    fn deref_mut(&mut self) -> &mut GameObject {
        &mut self.object
    }
}
