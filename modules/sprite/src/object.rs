use learngl::errors::*;
use learngl::math::prelude::*;
use learngl::video::TextureHandle;

use super::renderer::SpriteRenderer;

/// Builds the model matrix of a sprite: scale the unit quad to `size`,
/// rotate it by `rotation` degrees around its center, then move its
/// top-left corner to `position`.
pub fn model_matrix(position: Vector2<f32>, size: Vector2<f32>, rotation: f32) -> Matrix4<f32> {
    let half = Vector3::new(size.x * 0.5, size.y * 0.5, 0.0);

    Matrix4::from_translation(Vector3::new(position.x, position.y, 0.0))
        * Matrix4::from_translation(half)
        * Matrix4::from_angle_z(Deg(rotation))
        * Matrix4::from_translation(-half)
        * Matrix4::from_nonuniform_scale(size.x, size.y, 1.0)
}

/// The state of a single object in the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameObject {
    pub position: Vector2<f32>,
    pub size: Vector2<f32>,
    pub velocity: Vector2<f32>,
    pub color: Vector3<f32>,
    /// Degrees, clockwise on screen.
    pub rotation: f32,
    /// A texture owned elsewhere.
    pub sprite: TextureHandle,
    pub is_solid: bool,
    pub destroyed: bool,
}

impl GameObject {
    /// Creates a white, motionless object.
    pub fn new(position: Vector2<f32>, size: Vector2<f32>, sprite: TextureHandle) -> Self {
        GameObject {
            position,
            size,
            velocity: Vector2::new(0.0, 0.0),
            color: Vector3::new(1.0, 1.0, 1.0),
            rotation: 0.0,
            sprite,
            is_solid: false,
            destroyed: false,
        }
    }

    #[inline]
    pub fn model_matrix(&self) -> Matrix4<f32> {
        model_matrix(self.position, self.size, self.rotation)
    }

    /// Draws this object with its own sprite, transform and tint.
    pub fn draw(&self, renderer: &SpriteRenderer) -> Result<()> {
        renderer.draw_sprite(
            self.sprite,
            self.position,
            self.size,
            self.rotation,
            self.color,
        )
    }
}
