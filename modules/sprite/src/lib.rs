//! 2D sprites in screen space, with the origin at the top-left corner and y
//! growing downward.
//!
//! A `SpriteRenderer` owns a unit quad and a shader; every sprite is that
//! quad scaled, rotated around its center and moved into place. The
//! `GameObject` and `BallObject` types carry the state of the objects of a
//! breakout-like game and draw themselves through a renderer.

#[macro_use]
extern crate log;

pub mod ball;
pub mod object;
pub mod renderer;

pub use self::ball::BallObject;
pub use self::object::{model_matrix, GameObject};
pub use self::renderer::SpriteRenderer;

pub mod prelude {
    pub use super::{BallObject, GameObject, SpriteRenderer};
}
