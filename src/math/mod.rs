//! This module contains the math utils that mainly comes from `cgmath`.
//!
//! The projection helpers follow the OpenGL conventions: right-handed view
//! space and clip-space depth in `[-1, 1]`.

pub use cgmath::*;

pub mod prelude {
    pub use cgmath::prelude::*;
    pub use cgmath::{Deg, Matrix3, Matrix4, Point2, Point3, Rad, Vector2, Vector3, Vector4};
}

/// Builds a right-handed view matrix looking from `eye` towards `center`.
#[inline]
pub fn look_at(eye: Point3<f32>, center: Point3<f32>, up: Vector3<f32>) -> Matrix4<f32> {
    Matrix4::look_at_rh(eye, center, up)
}

/// Builds a perspective projection matrix with a vertical field of view in degrees.
#[inline]
pub fn perspective_deg(fovy: f32, aspect: f32, near: f32, far: f32) -> Matrix4<f32> {
    cgmath::perspective(Deg(fovy), aspect, near, far)
}

/// Builds an orthographic projection where the origin sits at the top-left
/// corner and y grows downward, which is what 2D screen-space sprites use.
#[inline]
pub fn screen_ortho(width: f32, height: f32) -> Matrix4<f32> {
    cgmath::ortho(0.0, width, height, 0.0, -1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_ulps_eq;

    #[test]
    fn screen_ortho_maps_corners() {
        let m = screen_ortho(800.0, 600.0);

        let tl = m.transform_point(Point3::new(0.0, 0.0, 0.0));
        assert_ulps_eq!(tl, Point3::new(-1.0, 1.0, 0.0));

        let br = m.transform_point(Point3::new(800.0, 600.0, 0.0));
        assert_ulps_eq!(br, Point3::new(1.0, -1.0, 0.0));
    }
}
