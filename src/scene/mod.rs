//! Scene helpers shared by the 3D demos.

pub mod camera;

pub use self::camera::{Camera, CameraParams, Movement};

pub mod prelude {
    pub use super::{Camera, CameraParams, Movement};
}
